//! Column splitting for whitespace-aligned text.
//!
//! The wrapped CLI aligns `describe` and table output with runs of spaces, so
//! a run of two or more spaces marks a column boundary while a single space
//! belongs to the text (`Start Time:   Sat, 10 Oct 2020`). Leading spaces are
//! always indentation, never a boundary.
//!
//! Some `kubectl describe` sections (`Resource Quotas` in `describe ns`) are
//! indented by a single space instead of the usual two. Because indentation
//! is measured before splitting, that lone space is consumed as indent and
//! never mistaken for a separator.

use std::sync::LazyLock;

use regex::Regex;

static SPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" +").expect("static regex must compile"));

/// One column of a split line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column<'a> {
    /// The whitespace between the previous column and this one, verbatim.
    /// Empty for the first column.
    pub separator: &'a str,
    pub text: &'a str,
}

/// A line split into indentation and columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitLine<'a> {
    /// Number of leading spaces.
    pub indent: usize,
    /// Empty only when the line is empty or all spaces.
    pub columns: Vec<Column<'a>>,
}

impl SplitLine<'_> {
    pub fn indent_str(&self) -> String {
        " ".repeat(self.indent)
    }
}

/// Counts leading space characters.
pub fn count_indent(line: &str) -> usize {
    line.bytes().take_while(|b| *b == b' ').count()
}

/// Splits a `describe`-style line into key and value columns.
///
/// Besides runs of two or more spaces, the first boundary may also be a
/// single space right after a colon, so `Requested Host: www.example.com`
/// still splits into a key and a value.
pub fn split_line(line: &str) -> SplitLine<'_> {
    split(line, true)
}

/// Splits a table row on runs of two or more spaces only.
pub fn split_table_line(line: &str) -> SplitLine<'_> {
    split(line, false)
}

fn split(line: &str, break_after_colon: bool) -> SplitLine<'_> {
    let indent = count_indent(line);
    let body = &line[indent..];
    let mut columns = Vec::new();
    if body.is_empty() {
        return SplitLine { indent, columns };
    }

    let bytes = body.as_bytes();
    let mut separator = "";
    let mut start = 0;
    for run in SPACE_RUN.find_iter(body) {
        let after_colon = run.start() > 0 && bytes[run.start() - 1] == b':';
        let is_boundary =
            run.len() >= 2 || (break_after_colon && columns.is_empty() && after_colon);
        if !is_boundary {
            continue;
        }
        columns.push(Column {
            separator,
            text: &body[start..run.start()],
        });
        separator = run.as_str();
        start = run.end();
    }
    columns.push(Column {
        separator,
        text: &body[start..],
    });

    SplitLine { indent, columns }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts<'a>(split: &SplitLine<'a>) -> Vec<&'a str> {
        split.columns.iter().map(|c| c.text).collect()
    }

    fn separators<'a>(split: &SplitLine<'a>) -> Vec<&'a str> {
        split.columns.iter().map(|c| c.separator).collect()
    }

    #[test]
    fn test_key_value() {
        let split = split_line("Status:         Running");
        assert_eq!(split.indent, 0);
        assert_eq!(texts(&split), vec!["Status:", "Running"]);
        assert_eq!(separators(&split), vec!["", "         "]);
    }

    #[test]
    fn test_indented_value_with_single_spaces() {
        let split = split_line("    Ports:          10001/TCP, 5000/TCP, 18000/TCP");
        assert_eq!(split.indent, 4);
        assert_eq!(split.indent_str(), "    ");
        assert_eq!(texts(&split), vec!["Ports:", "10001/TCP, 5000/TCP, 18000/TCP"]);
        assert_eq!(split.columns[1].separator.len(), 10);
    }

    #[test]
    fn test_single_space_after_colon_splits_first_column_only() {
        let split = split_line("TLS Termination: edge (passthrough is also an option)");
        assert_eq!(texts(&split), vec!["TLS Termination:", "edge (passthrough is also an option)"]);
        assert_eq!(split.columns[1].separator, " ");

        let split = split_line("Start Time:   Sat, 10 Oct 2020 14:07:17 +0900");
        assert_eq!(texts(&split), vec!["Start Time:", "Sat, 10 Oct 2020 14:07:17 +0900"]);

        let split = split_line("Message:  Back-off: restarting");
        assert_eq!(texts(&split), vec!["Message:", "Back-off: restarting"]);
    }

    #[test]
    fn test_table_split_ignores_colon_rule() {
        let split = split_table_line("Requested Host: www.example.com");
        assert_eq!(texts(&split), vec!["Requested Host: www.example.com"]);
    }

    #[test]
    fn test_single_space_indent_is_not_a_separator() {
        let split = split_line(" Name:            mem-cpu-quota");
        assert_eq!(split.indent, 1);
        assert_eq!(texts(&split), vec!["Name:", "mem-cpu-quota"]);

        let split = split_line(" Resource         Used  Hard");
        assert_eq!(split.indent, 1);
        assert_eq!(texts(&split), vec!["Resource", "Used", "Hard"]);
    }

    #[test]
    fn test_multi_column_row() {
        let split = split_table_line("  cpu                650m (10%)  0 (0%)");
        assert_eq!(split.indent, 2);
        assert_eq!(texts(&split), vec!["cpu", "650m (10%)", "0 (0%)"]);
    }

    #[test]
    fn test_trailing_spaces_make_an_empty_value() {
        let split = split_line("Labels:   ");
        assert_eq!(texts(&split), vec!["Labels:", ""]);
        assert_eq!(split.columns[1].separator, "   ");
    }

    #[test]
    fn test_empty_and_blank_lines() {
        assert!(split_line("").columns.is_empty());
        let split = split_line("    ");
        assert_eq!(split.indent, 4);
        assert!(split.columns.is_empty());
    }

    #[test]
    fn test_reassembly_is_lossless() {
        for line in [
            "Name:         nginx-lpv5x",
            "  Type             Status  LastHeartbeatTime",
            " limits.memory    0     2Gi",
            "No LimitRange resource.",
            "Endpoints:      10.128.0.1:8080, 10.128.0.2:8080",
            "Labels:   ",
        ] {
            let split = split_line(line);
            let mut rebuilt = split.indent_str();
            for column in &split.columns {
                rebuilt.push_str(column.separator);
                rebuilt.push_str(column.text);
            }
            assert_eq!(rebuilt, line);
        }
    }
}
