//! Tracing bootstrap for binaries built on this crate.

use tracing_subscriber::EnvFilter;

/// Installs a `tracing` fmt subscriber on stderr, filtered by `RUST_LOG`.
///
/// Returns `false` if a global subscriber was already set; calling it twice is harmless.
pub fn init() -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_init_is_a_no_op() {
        init();
        assert!(!init());
    }
}
