//! User-facing flash notifications.

use std::fmt;

use tracing::{error, info, warn};

/// Severity color of a flash message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlashColor {
    Info,
    Success,
    Warning,
    #[default]
    Error,
}

impl fmt::Display for FlashColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FlashColor::Info => "info",
            FlashColor::Success => "success",
            FlashColor::Warning => "warning",
            FlashColor::Error => "error",
        };
        f.write_str(name)
    }
}

/// Shows short urgent messages to the user.
pub trait Notifier: Send + Sync {
    fn flash(&self, message: &str, color: FlashColor);
}

/// Writes flash messages to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn flash(&self, message: &str, color: FlashColor) {
        match color {
            FlashColor::Info | FlashColor::Success => info!(%color, "{}", message),
            FlashColor::Warning => warn!(%color, "{}", message),
            FlashColor::Error => error!(%color, "{}", message),
        }
    }
}
