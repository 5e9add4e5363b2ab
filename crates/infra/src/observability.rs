//! Tracing subscriber setup

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber.
///
/// `RUST_LOG` wins when set; otherwise every `classgrid` crate logs at
/// `level`. Calling this twice is harmless: the second install is ignored.
pub fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(level));

    let result = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_file(false)
                .with_line_number(false)
                .with_writer(std::io::stderr),
        )
        .try_init();

    if let Err(err) = result {
        tracing::debug!(error = %err, "tracing subscriber already installed");
    }
}

fn default_filter(level: &str) -> EnvFilter {
    let directives = format!(
        "warn,classgrid={level},classgrid_domain={level},classgrid_core={level},classgrid_infra={level}"
    );
    EnvFilter::try_new(&directives).unwrap_or_else(|_| EnvFilter::new("warn"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_names_every_crate() {
        let rendered = default_filter("debug").to_string();
        assert!(rendered.contains("classgrid_core=debug"));
        assert!(rendered.contains("classgrid_infra=debug"));
    }

    #[test]
    fn invalid_level_falls_back_to_warn() {
        let rendered = default_filter("not a level!").to_string();
        assert!(!rendered.contains("classgrid"));
    }

    #[test]
    fn init_twice_does_not_panic() {
        init_tracing("info");
        init_tracing("debug");
    }
}
