//! State identifiers.

use std::fmt;

/// One of the six states of the wanderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StateId {
    /// Decide the next move from clearance and visit counts.
    Evaluate,
    /// Drive to a cell centre.
    Translate,
    /// Snap orientation to an axis.
    Align,
    /// Return to the start pose and clear memory.
    Reset,
    /// Track the operator's velocity.
    ManualDrive,
    /// Return to the centre of the current cell.
    Recenter,
}

impl StateId {
    /// Every state, in declaration order.
    pub const ALL: [StateId; 6] = [
        StateId::Evaluate,
        StateId::Translate,
        StateId::Align,
        StateId::Reset,
        StateId::ManualDrive,
        StateId::Recenter,
    ];

    /// State name for logging.
    pub fn name(self) -> &'static str {
        match self {
            StateId::Evaluate => "Evaluate",
            StateId::Translate => "Translate",
            StateId::Align => "Align",
            StateId::Reset => "Reset",
            StateId::ManualDrive => "ManualDrive",
            StateId::Recenter => "Recenter",
        }
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
