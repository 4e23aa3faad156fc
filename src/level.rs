//! Log severity levels.

/// Log severity level, ordered from most to least severe.
///
/// The total order drives severity filtering upstream and console
/// stream routing here: everything in the closed range
/// `[Fatal, Warning]` belongs on the error stream, everything below it
/// on standard output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
    Fatal,
    Error,
    Warning,
    Print,
    Info,
    Debug,
    Debug1,
    Debug2,
}

impl LogLevel {
    /// Every level, in severity order.
    pub const ALL: [LogLevel; 8] = [
        LogLevel::Fatal,
        LogLevel::Error,
        LogLevel::Warning,
        LogLevel::Print,
        LogLevel::Info,
        LogLevel::Debug,
        LogLevel::Debug1,
        LogLevel::Debug2,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Fatal => "FATAL",
            LogLevel::Error => "ERROR",
            LogLevel::Warning => "WARNING",
            LogLevel::Print => "PRINT",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
            LogLevel::Debug1 => "DEBUG1",
            LogLevel::Debug2 => "DEBUG2",
        }
    }

    /// True when console output for this level belongs on the error
    /// stream rather than standard output.
    pub fn uses_error_stream(self) -> bool {
        LogLevel::Fatal <= self && self <= LogLevel::Warning
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
