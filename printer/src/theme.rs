//! Color choices shared by the printers.

use crate::color::Color;

const TRUE_COLOR: Color = Color::Green;
const FALSE_COLOR: Color = Color::Red;
const NUMBER_COLOR: Color = Color::Magenta;
const NULL_COLOR: Color = Color::Yellow;
const STRING_COLOR_DARK: Color = Color::Cyan;
const STRING_COLOR_LIGHT: Color = Color::Blue;

const PALETTE_DARK: [Color; 5] = [
    Color::Cyan,
    Color::Green,
    Color::Magenta,
    Color::White,
    Color::Yellow,
];
const PALETTE_LIGHT: [Color; 5] = [
    Color::Cyan,
    Color::Green,
    Color::Magenta,
    Color::Black,
    Color::Yellow,
];

/// Placeholders the wrapped CLI prints for absent values.
const NULL_MARKERS: [&str; 6] = ["null", "<none>", "<unknown>", "<unset>", "<nil>", "<invalid>"];

/// Picks a color for a value by its apparent type.
///
/// Booleans, integers and absent-value markers get fixed colors; everything
/// else is plain text, colored for the terminal background.
pub fn color_by_value_type(value: &str, dark_background: bool) -> Color {
    if NULL_MARKERS.contains(&value) {
        return NULL_COLOR;
    }
    match value {
        "true" | "True" => return TRUE_COLOR,
        "false" | "False" => return FALSE_COLOR,
        _ => {}
    }
    if value.parse::<i64>().is_ok() {
        return NUMBER_COLOR;
    }
    if dark_background {
        STRING_COLOR_DARK
    } else {
        STRING_COLOR_LIGHT
    }
}

/// Picks a key color from its indentation.
///
/// Every `indent_width` columns of indentation is one nesting level; even
/// levels are yellow and odd levels alternate to the background's contrast
/// color.
pub fn color_by_key_indent(indent: usize, indent_width: usize, dark_background: bool) -> Color {
    let level = indent / indent_width.max(1);
    if level % 2 == 1 {
        if dark_background {
            Color::White
        } else {
            Color::Black
        }
    } else {
        Color::Yellow
    }
}

/// Column colors for table-shaped output, rotated left to right.
pub fn table_palette(dark_background: bool) -> &'static [Color] {
    if dark_background {
        &PALETTE_DARK
    } else {
        &PALETTE_LIGHT
    }
}
