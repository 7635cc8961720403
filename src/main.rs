use std::{env, fs::read_to_string, time::Instant};

use ael::{display_error, lexer::lexer::tokenize, parser::parser::parse};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        panic!("Incorrect arguments provided!");
    }

    let file_path: &str = &args[1];
    let file_name = if file_path.contains('/') {
        file_path.split('/').last().unwrap()
    } else {
        file_path
    };

    let source = read_to_string(file_path).expect("Failed to read file!");

    let start = Instant::now();

    let tokens = match tokenize(&source) {
        Ok(tokens) => tokens,
        Err(error) => {
            display_error(&error, &source, file_name);
            panic!()
        }
    };

    println!("Tokenized in {:?}", start.elapsed());

    let parse_start = Instant::now();
    let program = match parse(tokens) {
        Ok(program) => program,
        Err(error) => {
            display_error(&error, &source, file_name);
            panic!()
        }
    };

    println!("Parsed in {:?}", parse_start.elapsed());
    println!("Total time: {:?}", start.elapsed());

    println!("{:#?}", program);
}
