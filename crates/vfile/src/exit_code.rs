//! Process exit status shared by the engine, reporter, and frontend.

use std::fmt;

/// Exit codes produced by a run.
///
/// The contract is deliberately small: `0` when no error-severity diagnostic
/// was produced, `1` otherwise. Warnings only fail the run in strict mode,
/// which the reporter applies when computing the code.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[repr(i32)]
pub enum ExitCode {
    /// Successful completion; no error diagnostics.
    Ok = 0,
    /// One or more errors were encountered, including resolution errors.
    Failure = 1,
}

impl ExitCode {
    /// Returns the numeric process exit code.
    #[must_use]
    pub const fn as_i32(self) -> i32 {
        self as i32
    }

    /// Returns `true` for [`ExitCode::Ok`].
    #[must_use]
    pub const fn is_ok(self) -> bool {
        matches!(self, Self::Ok)
    }

    /// Maps a success flag onto an exit code.
    #[must_use]
    pub const fn from_success(success: bool) -> Self {
        if success { Self::Ok } else { Self::Failure }
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_i32())
    }
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        match code {
            ExitCode::Ok => Self::SUCCESS,
            ExitCode::Failure => Self::FAILURE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ExitCode;

    #[test]
    fn numeric_values_match_contract() {
        assert_eq!(ExitCode::Ok.as_i32(), 0);
        assert_eq!(ExitCode::Failure.as_i32(), 1);
    }

    #[test]
    fn from_success_round_trips() {
        assert!(ExitCode::from_success(true).is_ok());
        assert!(!ExitCode::from_success(false).is_ok());
    }
}
