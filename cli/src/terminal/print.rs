use std::fmt::Display;

use crate::terminal::colors;
use colored::*;
use tracing::info;
use unicode_width::UnicodeWidthStr;

pub const TOTAL_WIDTH: usize = 64;

#[macro_export]
macro_rules! mprint {
    () => {
        $crate::terminal::print::print("");
    };
    ($msg:expr) => {
        $crate::terminal::print::print($msg);
    };
}

pub fn print(msg: &str) {
    info!(target: "primer::print", raw_msg = msg);
}

pub fn banner(no_banner: bool, q_level: u8) {
    if let Some(line) = banner_line(no_banner, q_level) {
        print(&line);
    }
}

pub fn header(msg: &str, q_level: u8) {
    if let Some(line) = header_line(msg, q_level) {
        print(&line);
    }
}

/// Prints `key: value`.
pub fn labeled<V: Display>(key: &str, value: V) {
    print(&labeled_line(key, value));
}

pub fn highlight(msg: &str) {
    print(&format!("{}", msg.color(colors::ACCENT).bold()));
}

pub fn end_of_program(q_level: u8) {
    if let Some(line) = end_of_program_line(q_level) {
        print(&line);
    }
}

fn banner_line(no_banner: bool, q_level: u8) -> Option<String> {
    if no_banner || q_level > 0 {
        return None;
    }

    let text_content: String = format!("⟦ PRIMER v{} ⟧ ", env!("CARGO_PKG_VERSION"));
    let text_width: usize = UnicodeWidthStr::width(text_content.as_str());
    let text: ColoredString = text_content.color(colors::PRIMARY).bold();
    let sep: ColoredString = "═"
        .repeat(TOTAL_WIDTH.saturating_sub(text_width) / 2)
        .color(colors::SEPARATOR);

    Some(format!("{}{}{}", sep, text, sep))
}

fn header_line(msg: &str, q_level: u8) -> Option<String> {
    if q_level > 0 {
        return None;
    }

    let formatted: String = format!("⟦ {} ⟧", msg);
    let msg_len: usize = UnicodeWidthStr::width(formatted.as_str());

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    Some(format!(
        "{}{}{}",
        "─".repeat(left).color(colors::SEPARATOR),
        formatted.to_uppercase().color(colors::PRIMARY),
        "─".repeat(right).color(colors::SEPARATOR)
    ))
}

fn labeled_line<V: Display>(key: &str, value: V) -> String {
    let colon: ColoredString = ":".color(colors::SEPARATOR);
    let value: ColoredString = value.to_string().color(colors::TEXT_DEFAULT);
    format!("{}{} {}", key.color(colors::SECONDARY), colon, value)
}

fn end_of_program_line(q_level: u8) -> Option<String> {
    if q_level > 1 {
        return None;
    }

    Some(format!(
        "{}",
        "═".repeat(TOTAL_WIDTH).color(colors::SEPARATOR)
    ))
}
