//! ANSI color primitive.

use console::Style;

/// One of the eight basic terminal foreground colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl Color {
    fn style(self) -> Style {
        // Always styled; the resolver owns the colorize decision.
        let style = Style::new().force_styling(true);
        match self {
            Self::Black => style.black(),
            Self::Red => style.red(),
            Self::Green => style.green(),
            Self::Yellow => style.yellow(),
            Self::Blue => style.blue(),
            Self::Magenta => style.magenta(),
            Self::Cyan => style.cyan(),
            Self::White => style.white(),
        }
    }
}

/// Wraps `text` in the start sequence for `color` and a reset sequence.
pub fn apply(text: &str, color: Color) -> String {
    color.style().apply_to(text).to_string()
}
