// Session logging. The terminal is owned by the TUI, so diagnostics go to
// a log file instead of stdout; enabled with the --debug flag.

use std::fs::File;
use std::sync::Mutex;

use anyhow::Result;

const LOG_FILE_PATH: &str = "/tmp/neon-pong-debug.log";

/// Install the tracing subscriber, writing to the session log file.
///
/// When `enabled` is false no subscriber is installed and every tracing
/// macro in the codebase becomes a no-op.
pub fn init(enabled: bool) -> Result<()> {
    if !enabled {
        return Ok(());
    }

    let file = File::create(LOG_FILE_PATH)?;
    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .init();

    tracing::info!(log = LOG_FILE_PATH, "session logging started");
    Ok(())
}
