//! Table rendering.
//!
//! Table rows are split on runs of two or more spaces and each column is
//! colored from a palette by its position. Indentation and the original
//! whitespace between columns are written back unchanged.

use std::io::{self, BufRead, Write};

use crate::color::{Color, apply};
use crate::columns::split_table_line;
use crate::theme::table_palette;
use crate::{Printer, for_each_line};

/// Renders a single whitespace-aligned row.
pub trait TablePrinter {
    /// Writes `line` to `writer`, coloring its columns from `palette`, and
    /// terminates it with a newline.
    fn print_line(&self, writer: &mut dyn Write, line: &str, palette: &[Color]) -> io::Result<()>;
}

/// Colors column `i` with `palette[i % palette.len()]`.
#[derive(Debug, Clone, Copy)]
pub struct PaletteTablePrinter {
    dark_background: bool,
}

impl PaletteTablePrinter {
    pub fn new(dark_background: bool) -> Self {
        Self { dark_background }
    }
}

impl Default for PaletteTablePrinter {
    fn default() -> Self {
        Self::new(true)
    }
}

impl TablePrinter for PaletteTablePrinter {
    fn print_line(&self, writer: &mut dyn Write, line: &str, palette: &[Color]) -> io::Result<()> {
        let split = split_table_line(line);
        if split.columns.is_empty() || palette.is_empty() {
            return writeln!(writer, "{line}");
        }

        write!(writer, "{}", split.indent_str())?;
        for (i, column) in split.columns.iter().enumerate() {
            let color = palette[i % palette.len()];
            write!(writer, "{}{}", column.separator, apply(column.text, color))?;
        }
        writeln!(writer)
    }
}

impl Printer for PaletteTablePrinter {
    fn print(&mut self, reader: &mut dyn BufRead, writer: &mut dyn Write) -> io::Result<()> {
        let palette = table_palette(self.dark_background);
        for_each_line(reader, |line| self.print_line(writer, line, palette))
    }
}
