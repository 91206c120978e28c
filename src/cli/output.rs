//! Styled terminal output helpers.

use std::fmt;

use colored::Colorize;

pub fn header(title: impl fmt::Display) {
    println!("\n{}", format!("=== {} ===", title).bold());
}

pub fn info(message: impl fmt::Display) {
    println!("{message}");
}

pub fn success(message: impl fmt::Display) {
    println!("{}", format!("✔ {}", message).green());
}

pub fn warning(message: impl fmt::Display) {
    println!("{}", format!("⚠ {}", message).yellow());
}

pub fn error(message: impl fmt::Display) {
    eprintln!("{}", format!("✖ {}", message).red());
}
