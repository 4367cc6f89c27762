//! Boxed text blocks, banners and full-width separator lines.
//!
//! ```text
//! ┌──────────────┐
//! │  Deploying   │
//! └──────────────┘
//! ```

use crate::error::Result;
use crate::ui::style::paint;
use crate::ui::term;
use unicode_width::UnicodeWidthStr;

/// Default separator character for [`line`].
pub const LINE_CHAR: &str = "─";

/// Blank space between the border and the text, in cells.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Padding {
    pub top: usize,
    pub right: usize,
    pub bottom: usize,
    pub left: usize,
}

impl Padding {
    pub fn uniform(n: usize) -> Self {
        Self {
            top: n,
            right: n,
            bottom: n,
            left: n,
        }
    }

    /// Horizontal padding only.
    pub fn horizontal(n: usize) -> Self {
        Self {
            right: n,
            left: n,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BorderStyle {
    #[default]
    Single,
    Round,
    Double,
    Bold,
    Classic,
}

struct BorderChars {
    top_left: &'static str,
    top_right: &'static str,
    bottom_left: &'static str,
    bottom_right: &'static str,
    horizontal: &'static str,
    vertical: &'static str,
}

impl BorderStyle {
    fn chars(self) -> BorderChars {
        let (top_left, top_right, bottom_left, bottom_right, horizontal, vertical) = match self {
            BorderStyle::Single => ("┌", "┐", "└", "┘", "─", "│"),
            BorderStyle::Round => ("╭", "╮", "╰", "╯", "─", "│"),
            BorderStyle::Double => ("╔", "╗", "╚", "╝", "═", "║"),
            BorderStyle::Bold => ("┏", "┓", "┗", "┛", "━", "┃"),
            BorderStyle::Classic => ("+", "+", "+", "+", "-", "|"),
        };
        BorderChars {
            top_left,
            top_right,
            bottom_left,
            bottom_right,
            horizontal,
            vertical,
        }
    }
}

/// Layout of a boxed block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoxOptions {
    pub padding: Padding,
    pub border_style: BorderStyle,
    /// Style name for the border, see [`crate::ui::paint`].
    pub border_color: Option<String>,
}

impl Default for BoxOptions {
    fn default() -> Self {
        Self {
            padding: Padding::default(),
            border_style: BorderStyle::Single,
            border_color: None,
        }
    }
}

impl BoxOptions {
    /// Defaults used by [`banner`]: two cells of horizontal padding and a green border.
    pub fn banner() -> Self {
        Self {
            padding: Padding::horizontal(2),
            border_color: Some("green".to_string()),
            ..Self::default()
        }
    }

    pub fn padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    pub fn border_style(mut self, style: BorderStyle) -> Self {
        self.border_style = style;
        self
    }

    pub fn border_color(mut self, color: impl Into<String>) -> Self {
        self.border_color = Some(color.into());
        self
    }
}

/// Draws `text` inside a border. Multi-line text is left-aligned.
///
/// # Errors
///
/// Returns `FftermError::Style` if `border_color` is not a known style.
pub fn boxed(text: &str, options: &BoxOptions) -> Result<String> {
    let chars = options.border_style.chars();
    let pad = options.padding;
    let lines: Vec<&str> = text.lines().collect();
    let content_width = lines.iter().map(|l| visible_width(l)).max().unwrap_or(0);
    let inner = content_width + pad.left + pad.right;

    let border = |s: String| -> Result<String> {
        match options.border_color {
            Some(ref color) => Ok(paint(&s, color)?.to_string()),
            None => Ok(s),
        }
    };
    let vertical = border(chars.vertical.to_string())?;
    let blank = format!("{}{}{}", vertical, " ".repeat(inner), vertical);

    let mut out = Vec::with_capacity(lines.len() + pad.top + pad.bottom + 2);
    out.push(border(format!(
        "{}{}{}",
        chars.top_left,
        chars.horizontal.repeat(inner),
        chars.top_right
    ))?);
    out.extend(std::iter::repeat(blank.clone()).take(pad.top));
    for line in &lines {
        out.push(format!(
            "{}{}{}{}{}{}",
            vertical,
            " ".repeat(pad.left),
            line,
            " ".repeat(content_width - visible_width(line)),
            " ".repeat(pad.right),
            vertical
        ));
    }
    out.extend(std::iter::repeat(blank).take(pad.bottom));
    out.push(border(format!(
        "{}{}{}",
        chars.bottom_left,
        chars.horizontal.repeat(inner),
        chars.bottom_right
    ))?);
    Ok(out.join("\n"))
}

/// Prints `title` boxed with the given options; see [`BoxOptions::banner`] for the usual defaults.
pub fn banner(title: &str, options: &BoxOptions) -> Result<()> {
    println!("{}", boxed(title, options)?);
    Ok(())
}

/// Prints `pattern` repeated across the terminal width.
pub fn line(pattern: Option<&str>) {
    println!("{}", line_of(pattern.unwrap_or(LINE_CHAR), term::width()));
}

/// `pattern` repeated as many whole times as fit in `width` cells.
pub fn line_of(pattern: &str, width: u16) -> String {
    let pattern_width = visible_width(pattern);
    if pattern_width == 0 {
        return String::new();
    }
    pattern.repeat(usize::from(width) / pattern_width)
}

/// Display width of `s` in terminal cells, ignoring ANSI SGR escape sequences.
pub fn visible_width(s: &str) -> usize {
    let mut plain = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\u{1b}' && chars.peek() == Some(&'[') {
            for c in chars.by_ref() {
                if c.is_ascii_alphabetic() {
                    break;
                }
            }
            continue;
        }
        plain.push(c);
    }
    UnicodeWidthStr::width(plain.as_str())
}
