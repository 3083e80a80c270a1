//! `history-undo` — revert a group of history items against a state document.
//!
//! Usage:
//!   history-undo '<items-array-json>'
//!
//! The state document is read from stdin. The history items, oldest first,
//! are the first argument. The reverted document is printed to stdout.

use std::io::{self, Read, Write};
use media_editor::cli::undo_history_json;

fn main() {
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let args: Vec<String> = std::env::args().collect();
    let items = match args.get(1) {
        Some(p) => p.clone(),
        None => {
            eprintln!("First argument must be a JSON array of history items.");
            std::process::exit(1);
        }
    };

    let mut buf = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut buf) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    match undo_history_json(buf.trim(), &items) {
        Ok(result) => {
            let mut out = io::stdout();
            if let Err(e) = out.write_all(result.as_bytes()).and_then(|()| out.write_all(b"\n")) {
                eprintln!("{e}");
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
