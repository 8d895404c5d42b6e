use std::process::ExitCode;

/// Process exit status, using the eslint-style convention: 0 for a clean
/// run, 1 when the check found violations, 2 when the tool itself failed
/// (bad config, unreadable project directory, invalid arguments).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    /// The check ran to completion and reported at least one issue.
    Failure,
    /// The run aborted before producing a result.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
