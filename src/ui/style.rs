//! Named text styles on top of `colored`.
//!
//! A style name is a dot-separated list of tokens, applied left to right:
//! a foreground color (`red`, `bright_blue`, `#ff8800`), a background color
//! prefixed with `on_` (`on_yellow`), or an attribute (`bold`, `dim`,
//! `italic`, `underline`, `blink`, `reversed`, `hidden`, `strikethrough`).

use crate::error::{FftermError, Result};
use colored::{Color, ColoredString, Colorize};

/// Styles `text` with a named style such as `"green"` or `"white.on_red.bold"`.
///
/// # Errors
///
/// Returns `FftermError::Style` if any token is not a known color or attribute.
pub fn paint(text: &str, style: &str) -> Result<ColoredString> {
    let mut painted = ColoredString::from(text);
    for token in style.split('.').map(str::trim).filter(|t| !t.is_empty()) {
        painted = apply(painted, token)?;
    }
    Ok(painted)
}

fn apply(text: ColoredString, token: &str) -> Result<ColoredString> {
    let styled = match token.to_ascii_lowercase().as_str() {
        "bold" => text.bold(),
        "dim" | "dimmed" => text.dimmed(),
        "italic" => text.italic(),
        "underline" => text.underline(),
        "blink" => text.blink(),
        "reversed" | "inverse" => text.reversed(),
        "hidden" => text.hidden(),
        "strikethrough" => text.strikethrough(),
        "normal" | "clear" => text.clear(),
        other => match other.strip_prefix("on_") {
            Some(background) => text.on_color(parse_color(background)?),
            None => text.color(parse_color(other)?),
        },
    };
    Ok(styled)
}

/// Parses a color name: the eight basic colors, their `bright_` variants,
/// `gray`/`grey` as bright black, or a `#rrggbb` hex triple.
pub fn parse_color(name: &str) -> Result<Color> {
    let name = name.to_ascii_lowercase();
    if let Some(hex) = name.strip_prefix('#') {
        return parse_hex(hex).ok_or_else(|| FftermError::Style(name.clone()));
    }
    let color = match name.as_str() {
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "white" => Color::White,
        "gray" | "grey" | "bright_black" => Color::BrightBlack,
        "bright_red" => Color::BrightRed,
        "bright_green" => Color::BrightGreen,
        "bright_yellow" => Color::BrightYellow,
        "bright_blue" => Color::BrightBlue,
        "bright_magenta" => Color::BrightMagenta,
        "bright_cyan" => Color::BrightCyan,
        "bright_white" => Color::BrightWhite,
        _ => return Err(FftermError::Style(name)),
    };
    Ok(color)
}

fn parse_hex(hex: &str) -> Option<Color> {
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some(Color::TrueColor {
        r: channel(0)?,
        g: channel(2)?,
        b: channel(4)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serial_test::serial;

    #[rstest]
    #[case("red", Color::Red)]
    #[case("Bright_Cyan", Color::BrightCyan)]
    #[case("grey", Color::BrightBlack)]
    #[case("#ff8000", Color::TrueColor { r: 255, g: 128, b: 0 })]
    fn parses_known_colors(#[case] name: &str, #[case] expected: Color) {
        assert_eq!(parse_color(name).unwrap(), expected);
    }

    #[rstest]
    #[case("purple")]
    #[case("#12345")]
    #[case("#gggggg")]
    fn rejects_unknown_colors(#[case] name: &str) {
        assert!(matches!(parse_color(name), Err(FftermError::Style(_))));
    }

    #[test]
    fn paint_rejects_unknown_tokens() {
        assert!(matches!(paint("x", "green.sparkly"), Err(FftermError::Style(_))));
    }

    #[test]
    #[serial]
    fn paint_emits_ansi_when_forced() {
        colored::control::set_override(true);
        let painted = paint("hi", "red.bold").unwrap().to_string();
        colored::control::unset_override();
        assert!(painted.contains("\u{1b}["));
        assert!(painted.contains("hi"));
    }

    #[test]
    #[serial]
    fn paint_is_plain_when_disabled() {
        colored::control::set_override(false);
        let painted = paint("hi", "white.on_blue.underline").unwrap().to_string();
        colored::control::unset_override();
        assert_eq!(painted, "hi");
    }

    #[test]
    fn empty_style_leaves_text_alone() {
        let painted = paint("plain", "").unwrap();
        assert_eq!(painted.fgcolor, None);
    }
}
