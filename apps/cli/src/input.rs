//! Console input helpers.
//!
//! Numeric prompts re-ask until the line parses, so a typo never aborts
//! the menu loop.

use std::io::{self, Write};

/// Print a prompt and read one trimmed line from stdin.
pub fn read_line(prompt: &str) -> eyre::Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

pub fn prompt_i32(prompt: &str) -> eyre::Result<i32> {
    loop {
        let line = read_line(prompt)?;
        match line.parse() {
            Ok(value) => return Ok(value),
            Err(_) => println!("Please enter a whole number."),
        }
    }
}

pub fn prompt_i64(prompt: &str) -> eyre::Result<i64> {
    loop {
        let line = read_line(prompt)?;
        match line.parse() {
            Ok(value) => return Ok(value),
            Err(_) => println!("Please enter a whole number."),
        }
    }
}

pub fn prompt_f64(prompt: &str) -> eyre::Result<f64> {
    loop {
        let line = read_line(prompt)?;
        match line.parse() {
            Ok(value) => return Ok(value),
            Err(_) => println!("Please enter a number."),
        }
    }
}
