use std::fmt;

/// Category of an engine-reported error.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum EngineErrorKind {
    /// Two elements declared the same id within one frame.
    DuplicateId,
    /// An internal engine cache (elements, text measurements) is full.
    CapacityExceeded,
    /// A declaration combined options the engine rejects.
    InvalidConfiguration,
    /// Anything else the engine chose to report.
    Internal,
}

impl EngineErrorKind {
    fn as_str(self) -> &'static str {
        match self {
            Self::DuplicateId => "duplicate id",
            Self::CapacityExceeded => "capacity exceeded",
            Self::InvalidConfiguration => "invalid configuration",
            Self::Internal => "internal",
        }
    }
}

/// An error reported by the layout engine through the session's error sink.
///
/// The session logs these and carries on; it never interprets or recovers
/// from them.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineError {
    pub kind: EngineErrorKind,
    pub message: String,
}

impl EngineError {
    pub fn new(kind: EngineErrorKind, message: impl Into<String>) -> Self {
        Self { kind, message: message.into() }
    }
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "layout engine error ({}): {}", self.kind.as_str(), self.message)
    }
}

impl std::error::Error for EngineError {}
