//! Terminal outcomes of a viewing session.

/// How the user ended the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExitStatus {
    /// The user pressed "Yes".
    Confirmed,
    /// The user closed, cancelled or quit.
    Cancelled,
}

impl ExitStatus {
    /// Process exit code for this status: 1 for confirmed, 0 otherwise.
    pub fn code(self) -> i32 {
        match self {
            ExitStatus::Confirmed => 1,
            ExitStatus::Cancelled => 0,
        }
    }
}

/// Result of drawing one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Keep running; draw again next frame.
    Continue,
    /// The session ended on this frame.
    Exit(ExitStatus),
}

impl FrameOutcome {
    /// The exit status, if this frame ended the session.
    pub fn exit_status(self) -> Option<ExitStatus> {
        match self {
            FrameOutcome::Continue => None,
            FrameOutcome::Exit(status) => Some(status),
        }
    }
}
