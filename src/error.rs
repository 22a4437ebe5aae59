use std::fmt;

/// Raised when a surface reports dimensions the sequencer cannot lay out on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryError {
    ZeroWidth,
    TooFewRows { height: usize },
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroWidth => write!(f, "grid must have at least one column"),
            Self::TooFewRows { height } => write!(
                f,
                "grid has {height} rows, at least 2 are needed for the transport"
            ),
        }
    }
}

impl std::error::Error for GeometryError {}
