//! `oc status` printer.
//!
//! Status output is free-form prose, so it is highlighted by pattern rather
//! than by column. Passes run in a fixed order over the text produced by the
//! previous pass.

use std::io::{self, BufRead, Write};
use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::color::{Color, apply};
use crate::{Printer, for_each_line};

const PROJECT_PREFIX: &str = "In project ";
const PROJECT_COLOR: Color = Color::Cyan;

static HIGHLIGHTS: LazyLock<Vec<(Regex, Color)>> = LazyLock::new(|| {
    [
        (r"svc/\S+", Color::Green),
        (r"dc/\S+", Color::Blue),
        (r"https?://\S+", Color::Magenta),
        (r"\brunning\b", Color::Green),
        (r"\bdeployed\b", Color::Green),
        (r"\bfailed\b", Color::Red),
    ]
    .into_iter()
    .map(|(pattern, color)| (Regex::new(pattern).expect("static regex must compile"), color))
    .collect()
});

/// Colors `oc status` output.
#[derive(Debug, Clone, Copy, Default)]
pub struct StatusPrinter;

impl StatusPrinter {
    /// Colors a single line, without a trailing newline.
    ///
    /// A project header is colored as a whole and no other pass runs on it.
    pub fn colorize_line(line: &str) -> String {
        if line.starts_with(PROJECT_PREFIX) {
            return apply(line, PROJECT_COLOR);
        }
        HIGHLIGHTS.iter().fold(line.to_string(), |line, (pattern, color)| {
            pattern
                .replace_all(&line, |caps: &Captures<'_>| apply(&caps[0], *color))
                .into_owned()
        })
    }
}

impl Printer for StatusPrinter {
    fn print(&mut self, reader: &mut dyn BufRead, writer: &mut dyn Write) -> io::Result<()> {
        for_each_line(reader, |line| writeln!(writer, "{}", Self::colorize_line(line)))
    }
}
