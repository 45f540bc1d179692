//! logging.rs
//!
//! Diagnostics go to stderr; stdout belongs to the redrawn report.
//! `RUST_LOG` overrides the default `warn` filter, except that warnings
//! about rejected command-line input are always shown.

use tracing_subscriber::EnvFilter;

/// Target for warnings about rejected command-line input.
pub const INPUT_TARGET: &str = "days2live::input";

/// Install the global subscriber. Returns `false` if one was already set.
pub fn init() -> bool {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(with_input_warnings(env_filter))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .without_time()
        .try_init()
        .is_ok()
}

/// Keep [`INPUT_TARGET`] at `warn` or finer whatever `RUST_LOG` says.
fn with_input_warnings(filter: EnvFilter) -> EnvFilter {
    match format!("{INPUT_TARGET}=warn").parse() {
        Ok(directive) => filter.add_directive(directive),
        Err(_) => filter,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::{Arc, Mutex};
    use tracing::warn;

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn input_warnings_survive_a_silenced_filter() {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(with_input_warnings(EnvFilter::new("off")))
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .without_time()
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            warn!(target: INPUT_TARGET, "Invalid value for years_to_life");
        });

        let text = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        assert!(text.contains("Invalid value for years_to_life"), "{text}");
    }

    #[test]
    fn second_init_is_rejected() {
        // the first call may already have happened in another test
        let _ = init();
        assert!(!init());
    }
}
