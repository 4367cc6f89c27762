//! Thin adapters over terminal crates.
//!
//! Includes:
//! - `prompt`: confirm / free text / menu prompts (`dialoguer`).
//! - `progress`: spinners and progress bars (`indicatif`).
//! - `style`: named text styles (`colored`).
//! - `banner`: boxed text, banners and separator lines.
//! - `table`: table rendering (`comfy-table`).
//! - `term`: terminal size and working directory.
//! - `log_line`: timestamped log lines.

mod banner;
mod log_line;
mod progress;
mod prompt;
mod style;
mod table;
mod term;

pub use banner::*;
pub use log_line::log;
pub use progress::*;
pub use prompt::*;
pub use style::*;
pub use table::*;
pub use term::*;
