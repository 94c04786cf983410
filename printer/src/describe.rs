//! `kubectl describe` pretty-printer.
//!
//! Describe output is indented key/value text with embedded tables. Nothing
//! structured is available, so every line is split into columns by
//! [`split_line`] and colored by shape:
//!
//! - more than two columns is a table row, handed to a [`TablePrinter`];
//! - the key color rotates with indentation depth;
//! - the value color follows the value's apparent type.
//!
//! OpenShift routes get field-specific colors. A stream becomes route-like
//! once a route-only label is seen and stays that way until it ends.

use std::io::{self, BufRead, Write};

use crate::color::{Color, apply};
use crate::columns::split_line;
use crate::table::{PaletteTablePrinter, TablePrinter};
use crate::theme::{color_by_key_indent, color_by_value_type, table_palette};
use crate::{Printer, for_each_line};

/// `kubectl describe` nests with two spaces per level.
const BASIC_INDENT_WIDTH: usize = 2;

/// Labels that only appear in route descriptions.
const ROUTE_DETECTION: [&str; 3] = ["Requested Host:", "TLS Termination:", "Ingress:"];

const ROUTE_KEY: Color = Color::Yellow;
const ROUTE_RESOURCE_NAME: Color = Color::Green;
const ROUTE_ENDPOINT: Color = Color::Cyan;
const ROUTE_COMMA: Color = Color::White;
const ROUTE_TLS_EDGE: Color = Color::Blue;
const ROUTE_TLS_PASSTHROUGH: Color = Color::Yellow;
const ROUTE_TLS_REENCRYPT: Color = Color::Yellow;

/// How a route field's value is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ValueRenderer {
    ResourceName,
    Service,
    Endpoints,
    TlsTermination,
}

struct RouteField {
    label: &'static str,
    renderer: Option<ValueRenderer>,
}

const fn field(label: &'static str, renderer: Option<ValueRenderer>) -> RouteField {
    RouteField { label, renderer }
}

/// Route field labels, without the trailing colon.
const ROUTE_FIELDS: [RouteField; 12] = [
    field("Name", Some(ValueRenderer::ResourceName)),
    field("Namespace", None),
    field("Created", None),
    field("Labels", None),
    field("Annotations", None),
    field("Requested Host", Some(ValueRenderer::ResourceName)),
    field("Path", None),
    field("TLS Termination", Some(ValueRenderer::TlsTermination)),
    field("Service", Some(ValueRenderer::Service)),
    field("Weight", None),
    field("Endpoints", Some(ValueRenderer::Endpoints)),
    field("Ingress", None),
];

fn route_field(label: &str) -> Option<&'static RouteField> {
    ROUTE_FIELDS.iter().find(|f| f.label == label)
}

/// Colors `kubectl describe` style output.
///
/// One instance handles one stream; the route flag is never cleared.
pub struct DescribePrinter {
    dark_background: bool,
    table_printer: Box<dyn TablePrinter>,
    is_route: bool,
}

impl DescribePrinter {
    pub fn new(dark_background: bool) -> Self {
        let table_printer = Box::new(PaletteTablePrinter::new(dark_background));
        Self::with_table_printer(dark_background, table_printer)
    }

    /// Uses `table_printer` for lines with more than two columns.
    pub fn with_table_printer(dark_background: bool, table_printer: Box<dyn TablePrinter>) -> Self {
        Self {
            dark_background,
            table_printer,
            is_route: false,
        }
    }

    /// Whether a route-only label has been seen so far.
    pub fn is_route(&self) -> bool {
        self.is_route
    }

    /// Writes one colored line, newline included.
    pub fn print_line(&mut self, writer: &mut dyn Write, line: &str) -> io::Result<()> {
        if !self.is_route && ROUTE_DETECTION.iter().any(|label| line.contains(label)) {
            tracing::debug!(line, "Route description detected");
            self.is_route = true;
        }

        if line.is_empty() {
            return writeln!(writer);
        }

        let split = split_line(line);
        if split.columns.len() > 2 {
            return self
                .table_printer
                .print_line(writer, line, table_palette(self.dark_background));
        }
        let Some(key) = split.columns.first() else {
            return writeln!(writer, "{line}");
        };
        let value = split.columns.get(1);

        let dark = self.dark_background;
        let mut key_color = color_by_key_indent(split.indent, BASIC_INDENT_WIDTH, dark);
        let mut renderer = None;
        if self.is_route {
            key_color = self.route_key_color(split.indent, key.text);
            if value.is_none() && !key.text.ends_with(':') {
                key_color = color_by_value_type(key.text, dark);
            }
            let label = key.text.strip_suffix(':').unwrap_or(key.text);
            renderer = route_field(label).and_then(|f| f.renderer);
        }

        write!(writer, "{}{}", split.indent_str(), render_key(key.text, key_color))?;
        if let Some(value) = value {
            let rendered = match renderer {
                Some(renderer) => self.render_route_value(renderer, value.text),
                None => apply(value.text, color_by_value_type(value.text, dark)),
            };
            write!(writer, "{}{}", value.separator, rendered)?;
        }
        writeln!(writer)
    }

    fn route_key_color(&self, indent: usize, key: &str) -> Color {
        let listed = |label: &str| route_field(label).is_some();
        if key.strip_suffix(':').is_some_and(listed) {
            ROUTE_KEY
        } else if indent > BASIC_INDENT_WIDTH {
            if listed(key) {
                ROUTE_KEY
            } else {
                color_by_key_indent(indent, BASIC_INDENT_WIDTH + 1, self.dark_background)
            }
        } else {
            color_by_key_indent(indent, BASIC_INDENT_WIDTH, self.dark_background)
        }
    }

    fn render_route_value(&self, renderer: ValueRenderer, value: &str) -> String {
        match renderer {
            ValueRenderer::ResourceName => apply(value, ROUTE_RESOURCE_NAME),
            ValueRenderer::Service => {
                // Weighted backends read `name (N%)`.
                let weighted = value.contains('(') && value.contains('%');
                match value.split_once(' ') {
                    Some((name, weight)) if weighted => format!(
                        "{} {}",
                        apply(name, ROUTE_RESOURCE_NAME),
                        apply(weight, color_by_value_type(weight, self.dark_background))
                    ),
                    _ => apply(value, ROUTE_RESOURCE_NAME),
                }
            }
            ValueRenderer::Endpoints => render_endpoints(value),
            ValueRenderer::TlsTermination => {
                let (kind, rest) = match value.split_once(' ') {
                    Some((kind, rest)) => (kind, Some(rest)),
                    None => (value, None),
                };
                let kind_color = tls_color(kind)
                    .unwrap_or_else(|| color_by_value_type(value, self.dark_background));
                let mut out = apply(kind, kind_color);
                if let Some(rest) = rest {
                    out.push(' ');
                    out.push_str(&apply(rest, color_by_value_type(rest, self.dark_background)));
                }
                out
            }
        }
    }
}

impl Printer for DescribePrinter {
    fn print(&mut self, reader: &mut dyn BufRead, writer: &mut dyn Write) -> io::Result<()> {
        for_each_line(reader, |line| self.print_line(writer, line))
    }
}

/// Colors the key, leaving a trailing colon uncolored.
fn render_key(key: &str, color: Color) -> String {
    match key.strip_suffix(':') {
        Some(label) => format!("{}:", apply(label, color)),
        None => apply(key, color),
    }
}

fn tls_color(kind: &str) -> Option<Color> {
    let kind = kind.to_ascii_lowercase();
    if kind.starts_with("edge") {
        Some(ROUTE_TLS_EDGE)
    } else if kind.starts_with("passthrough") {
        Some(ROUTE_TLS_PASSTHROUGH)
    } else if kind.starts_with("reencrypt") {
        Some(ROUTE_TLS_REENCRYPT)
    } else {
        None
    }
}

/// Colors each endpoint and comma separately; whitespace stays as written.
fn render_endpoints(value: &str) -> String {
    let mut out = String::with_capacity(value.len() * 2);
    for (i, part) in value.split(',').enumerate() {
        if i > 0 {
            out.push_str(&apply(",", ROUTE_COMMA));
        }
        let endpoint = part.trim();
        if endpoint.is_empty() {
            out.push_str(part);
            continue;
        }
        let start = part.len() - part.trim_start().len();
        out.push_str(&part[..start]);
        out.push_str(&apply(endpoint, ROUTE_ENDPOINT));
        out.push_str(&part[start + endpoint.len()..]);
    }
    out
}
