//! One-line user messages (icon + colored lead) for the terminal.

use ansi_term::{Colour, Style};
use std::fmt;

#[derive(Clone, Copy)]
enum Level {
    Info,
    Success,
    Warning,
    Error,
}

impl Level {
    fn icon(self) -> &'static str {
        match self {
            Level::Info => "ℹ️",
            Level::Success => "✅",
            Level::Warning => "⚠️",
            Level::Error => "❌",
        }
    }

    fn style(self) -> Style {
        match self {
            Level::Info => Colour::Blue.bold(),
            Level::Success => Colour::Green.bold(),
            Level::Warning => Colour::Yellow.bold(),
            Level::Error => Colour::Red.bold(),
        }
    }
}

fn line<T: fmt::Display>(level: Level, msg: T) -> String {
    format!("{} {}", level.style().paint(level.icon()), msg)
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}", line(Level::Info, msg));
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}", line(Level::Success, msg));
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}", line(Level::Warning, msg));
}

/// Errors go to stderr so that `--json` output stays parseable.
pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}", line(Level::Error, msg));
}

pub fn header<T: fmt::Display>(msg: T) {
    println!(
        "{}\n",
        Colour::Blue.bold().paint(format!("====================== {msg}"))
    );
}
