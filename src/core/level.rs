//! Severity level definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Log severity, most severe first.
///
/// `None` and `All` are threshold bounds, not event severities: a logger
/// configured at `None` suppresses every record, one configured at `All`
/// emits every record. The remaining members are the severities a call can
/// be made at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[derive(Default)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    None = 0,
    Fatal = 1,
    Error = 2,
    Warn = 3,
    Info = 4,
    Log = 5,
    Success = 6,
    #[default]
    Debug = 7,
    All = 8,
}

impl Level {
    /// Whether a record at this severity passes the given threshold.
    ///
    /// A pure total-order comparison; ties count as enabled.
    #[inline]
    #[must_use]
    pub fn is_enabled(self, threshold: Level) -> bool {
        self <= threshold
    }

    /// Full lowercase name, as used by the JSON record shape.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::None => "none",
            Level::Fatal => "fatal",
            Level::Error => "error",
            Level::Warn => "warn",
            Level::Info => "info",
            Level::Log => "log",
            Level::Success => "success",
            Level::Debug => "debug",
            Level::All => "all",
        }
    }

    /// Three-letter tag, as used by the console sink's default level style.
    #[must_use]
    pub fn abbr(&self) -> &'static str {
        match self {
            Level::None => "NON",
            Level::Fatal => "FTL",
            Level::Error => "ERR",
            Level::Warn => "WRN",
            Level::Info => "INF",
            Level::Log => "LOG",
            Level::Success => "SUC",
            Level::Debug => "DBG",
            Level::All => "ALL",
        }
    }

    /// Single-character tag.
    #[must_use]
    pub fn short(&self) -> &'static str {
        match self {
            Level::None => "N",
            Level::Fatal => "F",
            Level::Error => "E",
            Level::Warn => "W",
            Level::Info => "I",
            Level::Log => "L",
            Level::Success => "S",
            Level::Debug => "D",
            Level::All => "A",
        }
    }

    pub fn color_code(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            Level::None | Level::All => BrightBlack,
            Level::Fatal => BrightRed,
            Level::Error => Red,
            Level::Warn => Yellow,
            Level::Info => Green,
            Level::Log => White,
            Level::Success => BrightGreen,
            Level::Debug => Blue,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" => Ok(Level::None),
            "fatal" => Ok(Level::Fatal),
            "error" => Ok(Level::Error),
            "warn" | "warning" => Ok(Level::Warn),
            "info" => Ok(Level::Info),
            "log" => Ok(Level::Log),
            "success" => Ok(Level::Success),
            "debug" => Ok(Level::Debug),
            "all" => Ok(Level::All),
            _ => Err(format!("Invalid log level: '{}'", s)),
        }
    }
}
