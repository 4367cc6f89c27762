//! Terminal helpers with opinionated defaults.
//!
//! One namespace for the things command-line tools keep reaching for:
//! running subprocesses ([`run`], [`ExecRequest`]), prompts ([`confirm`],
//! [`prompt`], [`select`]), spinners and progress bars ([`spinner`],
//! [`spinner_while`], [`progress_bar`]), colors ([`paint`], [`color`]),
//! boxed banners ([`banner`], [`boxed`], [`line`]), tables ([`table`],
//! [`table_from_json`]) and a timestamped [`log`] helper.
//!
//! ```no_run
//! # async fn demo() -> ffterm::Result<()> {
//! let config = ffterm::Config::from_env()?;
//! ffterm::banner("Deploy", &config.banner_options())?;
//! let head = ffterm::run("git rev-parse HEAD", config.run_options()).await?;
//! ffterm::log(format!("at {}", head.trim()));
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod exec;
pub mod logging;
pub mod ui;

pub use config::Config;
pub use error::{FftermError, Result};
pub use exec::{run, ExecRequest, RunOptions, RunOutput, StdinMode};
pub use ui::{
    banner, boxed, confirm, current_dir, height, line, log, paint, progress_bar, prompt, select,
    spinner, spinner_while, table, table_from_json, width, BorderStyle, BoxOptions, HAlign,
    Padding, TableCell, TableOptions,
};

/// Direct access to `colored` for styling beyond named styles.
pub use colored as color;
pub use comfy_table::Table;
pub use indicatif::ProgressBar;
pub use tokio_util::sync::CancellationToken;
