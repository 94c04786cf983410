//! Line-oriented colorizing printers for `kubectl` and `oc` output.
//!
//! Every printer reads the wrapped command's standard output one line at a
//! time and writes exactly one colorized line per input line, so output
//! starts before the wrapped command finishes (`kubectl get pods -w`) and
//! memory use does not grow with the stream.
//!
//! - [`DescribePrinter`]: `describe`-style key/value text, with column and
//!   field roles inferred from indentation and whitespace.
//! - [`StatusPrinter`]: `oc status` summaries, highlighted by pattern.
//! - [`PaletteTablePrinter`]: whitespace-aligned tables.
//! - [`PassthroughPrinter`]: output that must not be touched.
//!
//! [`select_printer`] picks one from a classified
//! [`CommandInfo`](kubecolor_core::CommandInfo).
//!
//! # Example
//!
//! ```
//! use kubecolor_printer::{DescribePrinter, Printer};
//!
//! let input = "Name:         nginx-lpv5x\nReady:        true\n";
//! let mut output = Vec::new();
//! DescribePrinter::new(true)
//!     .print(&mut input.as_bytes(), &mut output)
//!     .unwrap();
//!
//! let output = String::from_utf8(output).unwrap();
//! assert_eq!(console::strip_ansi_codes(&output), input);
//! assert!(output.starts_with("\x1b[33mName\x1b[0m:"));
//! ```

pub mod color;
pub mod columns;
pub mod describe;
pub mod select;
pub mod status;
pub mod table;
pub mod theme;

use std::io::{self, BufRead, Write};

pub use color::{Color, apply};
pub use describe::DescribePrinter;
pub use select::{PassthroughPrinter, select_printer};
pub use status::StatusPrinter;
pub use table::{PaletteTablePrinter, TablePrinter};

/// A streaming colorizer.
pub trait Printer {
    /// Copies `reader` to `writer` line by line, adding color.
    ///
    /// Stops at end of input. I/O errors from either side are returned as-is.
    fn print(&mut self, reader: &mut dyn BufRead, writer: &mut dyn Write) -> io::Result<()>;
}

/// Calls `f` with each line of `reader`, without its line terminator.
///
/// A final line without a trailing newline is still delivered. Invalid UTF-8
/// is replaced rather than rejected.
pub(crate) fn for_each_line<F>(reader: &mut dyn BufRead, mut f: F) -> io::Result<()>
where
    F: FnMut(&str) -> io::Result<()>,
{
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(());
        }
        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }
        f(&String::from_utf8_lossy(&buf))?;
    }
}
