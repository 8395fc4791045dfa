use anyhow::Result;
use std::io;
use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter, Registry};

fn filter(verbosity_level: Option<Level>) -> EnvFilter {
    // RUST_LOG=
    EnvFilter::builder()
        .with_default_directive(verbosity_level.unwrap_or(Level::ERROR).into())
        .from_env_lossy()
}

/// Initialize logging on stderr; stdout is reserved for command output.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed
pub fn init(verbosity_level: Option<Level>, json: bool) -> Result<()> {
    let filter = filter(verbosity_level);

    if json {
        let fmt_layer = fmt::layer()
            .json()
            .with_writer(io::stderr)
            .with_current_span(false)
            .with_target(false);
        let subscriber = Registry::default().with(fmt_layer).with(filter);
        tracing::subscriber::set_global_default(subscriber)?;
    } else {
        let fmt_layer = fmt::layer()
            .with_writer(io::stderr)
            .with_file(false)
            .with_line_number(false)
            .with_thread_ids(false)
            .with_target(false);
        let subscriber = Registry::default().with(fmt_layer).with(filter);
        tracing::subscriber::set_global_default(subscriber)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_defaults_to_error() {
        temp_env::with_var("RUST_LOG", None::<&str>, || {
            assert_eq!(filter(None).to_string().to_lowercase(), "error");
            assert_eq!(filter(Some(Level::DEBUG)).to_string().to_lowercase(), "debug");
        });
    }

    #[test]
    fn filter_honours_rust_log() {
        temp_env::with_var("RUST_LOG", Some("gatekeep=trace"), || {
            assert!(filter(None).to_string().contains("gatekeep=trace"));
        });
    }
}
