//! Tracing subscriber setup shared by the desktop app and the CLI.

use tracing_subscriber::EnvFilter;

/// Map a `-v` count to a default filter directive.
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn,herogallery=info,herogallery_core=info",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install a global fmt subscriber writing to stderr.
///
/// `RUST_LOG` wins when set; otherwise the level comes from `verbosity`.
/// Calling this twice is harmless (the second install is ignored).
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directive_escalates() {
        assert_eq!(default_directive(1), "info");
        assert_eq!(default_directive(2), "debug");
        assert_eq!(default_directive(9), "trace");
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init(0);
        init(2);
    }
}
