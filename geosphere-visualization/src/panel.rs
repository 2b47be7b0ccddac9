//! Control panel state: the coordinate input and the status line

use std::fmt;

/// Default contents of the coordinate input
pub const DEFAULT_INPUT: &str = "0,0,1";

/// Initial status line
pub const READY_STATUS: &str = "Ready";

/// Status after clearing the session
pub const CLEARED_STATUS: &str = "All points cleared";

/// Help text shown above the input
pub const INSTRUCTIONS: &str = "Right-click and drag to rotate sphere\n\
                                Enter coordinates as x,y,z\n\
                                Example: 0,0,1 for North Pole";

/// Feedback produced by a panel action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Shown in the status line
    Status(String),
    /// Shown in a modal warning; the status line is left alone
    Warning { title: String, message: String },
}

impl Notice {
    pub fn warning(title: &str, message: impl Into<String>) -> Self {
        Notice::Warning {
            title: title.to_string(),
            message: message.into(),
        }
    }

    pub fn is_warning(&self) -> bool {
        matches!(self, Notice::Warning { .. })
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::Status(text) => write!(f, "{}", text),
            Notice::Warning { title, message } => write!(f, "{}: {}", title, message),
        }
    }
}

/// Text input plus status line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlPanel {
    pub input: String,
    status: String,
}

impl ControlPanel {
    pub fn new() -> Self {
        Self {
            input: DEFAULT_INPUT.to_string(),
            status: READY_STATUS.to_string(),
        }
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    /// Help text drawn above the input field
    pub fn instructions(&self) -> &'static str {
        INSTRUCTIONS
    }

    /// Record a notice; only status notices change the status line
    pub fn apply(&mut self, notice: &Notice) {
        if let Notice::Status(text) = notice {
            self.status = text.clone();
        }
    }
}

impl Default for ControlPanel {
    fn default() -> Self {
        Self::new()
    }
}
