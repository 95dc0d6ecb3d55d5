use std::process::ExitCode;

/// How a transkey command ended.
///
/// Lookups that come back empty (unknown key, no keys under a prefix, no
/// translation directories) are `Failure`, so scripts can branch on them
/// without parsing output. `Error` is reserved for commands that could not run.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Exit code 0.
    Success,
    /// Exit code 1: nothing matched, or `init` found an existing config file.
    Failure,
    /// Exit code 2: invalid config, unreadable project root and similar.
    Error,
}

impl ExitStatus {
    /// `Success` when the lookup produced something, `Failure` otherwise.
    pub fn found(found: bool) -> Self {
        if found { Self::Success } else { Self::Failure }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(match status {
            ExitStatus::Success => 0,
            ExitStatus::Failure => 1,
            ExitStatus::Error => 2,
        })
    }
}
