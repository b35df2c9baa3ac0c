//! Logging initialization

use std::path::PathBuf;

/// Initialize logging based on debug flag
/// Returns the log file path if debug logging is enabled
pub fn init_logging(debug: bool) -> Option<PathBuf> {
    if debug {
        // Named temp file that persists after the handle is dropped
        let temp_file = tempfile::Builder::new()
            .prefix("kswitch-")
            .suffix(".log")
            .tempfile()
            .map(|f| {
                let path = f.path().to_path_buf();
                // Leak the handle so the file outlives this function
                std::mem::forget(f);
                path
            })
            .unwrap_or_else(|_| {
                // Fallback: create file directly in temp_dir
                let temp_dir = std::env::temp_dir();
                temp_dir.join(format!("kswitch-{}.log", std::process::id()))
            });

        // Open the file for writing (it already exists from tempfile)
        let file = std::fs::OpenOptions::new()
            .create(true)
            .truncate(true)
            .write(true)
            .open(&temp_file);
        let Ok(file) = file else {
            eprintln!("Failed to open log file {}", temp_file.display());
            return None;
        };

        // Enable debug logging with tracing-subscriber
        // Write to file so the TUI keeps the terminal to itself
        tracing_subscriber::fmt()
            .with_writer(file)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .with_ansi(false) // No ANSI codes in log file
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .init();

        Some(temp_file)
    } else {
        // No logging by default (silent operation)
        None
    }
}
