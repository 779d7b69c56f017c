mod cli;
mod error;
pub mod logger;
mod orchestrator;

pub use cli::{Cli, StrategyArg};
pub use error::AppError;
pub use orchestrator::{run_app, write_exits};

// Macros for use by child modules of app (orchestrator) and by the search
// tree. They call functions from the app::logger module.
macro_rules! verbose_println {
    ($quiet:expr, $($arg:tt)*) => {
        if !$quiet {
            // Use format_args! to create std::fmt::Arguments, avoiding String allocation.
            $crate::app::logger::log_verbose_message_args(format_args!($($arg)*));
        }
    };
}

macro_rules! verbose_eprintln {
    ($quiet:expr, $($arg:tt)*) => {
        if !$quiet {
            $crate::app::logger::log_verbose_error_args(format_args!($($arg)*));
        }
    };
}

// Per-branch step log; `$enabled` is checked first so disabled tracing costs
// a single branch.
macro_rules! step_log {
    ($enabled:expr, $($arg:tt)*) => {
        if $enabled && $crate::app::logger::is_enabled() {
            $crate::app::logger::log_step_args(format_args!($($arg)*));
        }
    };
}

// Bring the macros into scope for sibling modules and the rest of the crate.
pub(crate) use step_log;
use verbose_eprintln;
use verbose_println;
