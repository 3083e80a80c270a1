//! `tween-sample` — print the frames of a tween.
//!
//! Usage:
//!   tween-sample <start> <end> <duration-ms> [fps] [easing]
//!
//! `start` and `end` are JSON numbers or arrays of numbers of the same
//! length. `fps` defaults to 60, `easing` to `ease-in-out` (also `simple`,
//! `linear`). One JSON object per frame is printed to stdout.

use std::io::{self, Write};
use media_editor::cli::{sample_tween, DEFAULT_FPS};

fn usage() -> ! {
    eprintln!("Usage: tween-sample <start> <end> <duration-ms> [fps] [easing]");
    std::process::exit(1);
}

fn parse_number(arg: &str, name: &str) -> f64 {
    match arg.parse() {
        Ok(n) => n,
        Err(_) => {
            eprintln!("{name} must be a number, got {arg:?}");
            std::process::exit(1);
        }
    }
}

fn main() {
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let args: Vec<String> = std::env::args().collect();
    let (start, end, duration) = match (args.get(1), args.get(2), args.get(3)) {
        (Some(s), Some(e), Some(d)) => (s, e, parse_number(d, "duration")),
        _ => usage(),
    };
    let fps = args.get(4).map_or(DEFAULT_FPS, |f| parse_number(f, "fps"));
    let easing = args.get(5).map_or("ease-in-out", String::as_str);

    let mut out = io::stdout().lock();
    let emitted = sample_tween(start, end, duration, fps, easing, |line| {
        writeln!(out, "{line}")?;
        Ok(())
    });
    if let Err(e) = emitted {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
