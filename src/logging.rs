use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable naming the log file.
pub const LOG_ENV_VAR: &str = "RESERVATIONS_LOG";

/// Initialize tracing with optional file output.
///
/// Logging is disabled by default: the terminal UI owns stdout and the
/// headless mode prints view states there. Set `RESERVATIONS_LOG` to a file
/// path to enable it; the filter comes from `RUST_LOG` (default `info`).
///
/// Log files get a `{path}.{timestamp}.{pid}` suffix so concurrent runs do
/// not clobber each other.
pub fn init_tracing() {
    let Some(log_path) = std::env::var(LOG_ENV_VAR).ok() else {
        return;
    };

    let unique_path = unique_log_path(&log_path);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let Ok(file) = std::fs::File::create(&unique_path) else {
        eprintln!("Warning: Failed to create log file: {}", unique_path);
        return;
    };

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();
}

fn unique_log_path(base: &str) -> String {
    let pid = std::process::id();
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    format!("{}.{}.{}", base, timestamp, pid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_path_gets_timestamp_and_pid() {
        let path = unique_log_path("/tmp/front.log");
        let pid = std::process::id().to_string();
        assert!(path.starts_with("/tmp/front.log."));
        assert!(path.ends_with(&pid));
    }
}
