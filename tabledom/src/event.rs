/// High-level events with element targeting
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Pointer click on an element
    Click { target: String },
    /// A form control's value changed
    Input { target: String, value: String },
}

impl Event {
    pub fn click(target: impl Into<String>) -> Self {
        Self::Click {
            target: target.into(),
        }
    }

    pub fn input(target: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Input {
            target: target.into(),
            value: value.into(),
        }
    }

    /// ID of the element the event was fired on.
    pub fn target(&self) -> &str {
        match self {
            Self::Click { target } | Self::Input { target, .. } => target,
        }
    }
}
