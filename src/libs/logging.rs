//! Tracing subscriber setup.

use super::messages::macros::is_debug_mode;
use tracing_subscriber::{fmt, EnvFilter};

/// Installs the `fmt` subscriber when debug mode is on.
///
/// Outside debug mode nothing is installed and `tracing` events are dropped;
/// users only see the message macros' console output.
pub fn init() {
    if !is_debug_mode() {
        return;
    }

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("mytasks=debug"));
    let _ = fmt().with_env_filter(env_filter).with_target(false).with_writer(std::io::stderr).try_init();
}
