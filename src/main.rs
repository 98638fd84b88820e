use std::{env, process, time::Instant};

use numex::document::document::{largest_number, largest_scaled_number, TextDocument};

fn main() {
    let args: Vec<String> = env::args().collect();
    let plain = args.iter().any(|arg| arg.as_str() == "--plain");
    let files: Vec<&String> = args[1..]
        .iter()
        .filter(|arg| arg.as_str() != "--plain")
        .collect();

    if files.len() != 1 {
        eprintln!("usage: numex <file> [--plain]");
        process::exit(2);
    }

    let start = Instant::now();

    let document = match TextDocument::open(files[0]) {
        Ok(document) => document,
        Err(error) => {
            eprintln!("Error: {}", error);
            process::exit(1);
        }
    };

    let largest = if plain {
        largest_number(&document)
    } else {
        largest_scaled_number(&document)
    };

    println!("{}", "*".repeat(100));
    println!(
        "Approach: {}",
        if plain { "Plain Lexer" } else { "Magnitude Resolver" }
    );
    println!("Time taken: {:?}", start.elapsed());
    match largest {
        Some(number) => println!("Largest number found: {}", number),
        None => println!("Largest number found: none"),
    }
    println!("{}", "*".repeat(100));
}
