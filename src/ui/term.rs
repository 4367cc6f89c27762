//! Terminal geometry and process location.

use crate::error::Result;
use std::path::PathBuf;

const FALLBACK_WIDTH: u16 = 80;
const FALLBACK_HEIGHT: u16 = 24;

/// Terminal width in columns, or 80 when stdout is not a terminal.
pub fn width() -> u16 {
    size().0
}

/// Terminal height in rows, or 24 when stdout is not a terminal.
pub fn height() -> u16 {
    size().1
}

fn size() -> (u16, u16) {
    match crossterm::terminal::size() {
        Ok((cols, rows)) if cols > 0 && rows > 0 => (cols, rows),
        _ => (FALLBACK_WIDTH, FALLBACK_HEIGHT),
    }
}

/// The process's current working directory.
pub fn current_dir() -> Result<PathBuf> {
    Ok(std::env::current_dir()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geometry_is_never_zero() {
        assert!(width() > 0);
        assert!(height() > 0);
    }

    #[test]
    fn current_dir_is_absolute() {
        assert!(current_dir().unwrap().is_absolute());
    }
}
