use std::io;
use std::io::Write;

/// Prints a prompt and reads one line from stdin, trimmed.
/// Returns `None` once stdin is closed.
pub fn input(prompt: &str) -> Option<String> {
    println!("{}", prompt);
    io::stdout().flush().unwrap();

    let mut line = String::new();
    let read = io::stdin().read_line(&mut line).unwrap_or(0);
    if read == 0 {
        return None;
    }
    Some(line.trim().to_string())
}
