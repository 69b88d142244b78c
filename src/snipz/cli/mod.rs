//! # CLI Behavior
//!
//! This is the only place that knows about terminal I/O, exit codes, and output
//! formatting. For the overall architecture, see the library documentation.
//!
//! | Command         | Output                                        |
//! |-----------------|-----------------------------------------------|
//! | `list`          | `Saved snippets:` + `- <name>` lines, or a notice |
//! | `add <name>`    | reads stdin until an empty line, confirms     |
//! | `show <name>`   | the body verbatim, or a not-found notice      |
//! | `delete <name>` | confirms, or fails when the name is unknown   |
//!
//! A missing snippet is a soft condition for `show` (stdout, exit 0) and a hard
//! one for `delete` (stderr, exit 1). Usage errors are reported by clap.
//!
//! Diagnostics go to stderr through `tracing`; set `RUST_LOG=debug` to see them.
//!
//! ## Module Structure
//!
//! - `commands`: Per-command handlers that call the API and print results
//! - `render`: Output formatting
//! - `setup`: Argument parsing via clap

mod commands;
mod render;
pub mod setup;

pub use commands::run;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false);

    // already initialised in tests
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
