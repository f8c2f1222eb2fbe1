//! Error types for parsing, geometry and the flow step.

use thiserror::Error;

/// Why a "vert" source was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormatErrorKind {
    /// The source had no lines at all.
    Empty,
    /// A count or vertex line was expected but input ended.
    UnexpectedEof,
    /// A count line is not a non-negative base-10 integer.
    InvalidCount,
    /// A vertex line does not split into exactly two tokens.
    InvalidVertex,
    /// A coordinate token is not a float literal.
    InvalidNumber,
    /// A coordinate parsed to NaN or an infinity.
    NonFinite,
}

impl std::fmt::Display for FormatErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            FormatErrorKind::Empty => "source is empty",
            FormatErrorKind::UnexpectedEof => "unexpected end of input",
            FormatErrorKind::InvalidCount => "invalid count",
            FormatErrorKind::InvalidVertex => "vertex line must hold exactly two values",
            FormatErrorKind::InvalidNumber => "invalid coordinate",
            FormatErrorKind::NonFinite => "coordinate is not finite",
        };
        f.write_str(s)
    }
}

/// Malformed or truncated "vert" input. Loading never yields a partial collection.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum FormatError {
    #[error("line {line}: {kind}: {content:?}")]
    Syntax {
        /// 1-based line number the parser was looking at.
        line: usize,
        kind: FormatErrorKind,
        content: String,
    },

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl FormatError {
    pub(crate) fn syntax(line: usize, kind: FormatErrorKind, content: &str) -> Self {
        FormatError::Syntax {
            line,
            kind,
            content: content.to_string(),
        }
    }

    /// Syntax kind, or `None` for I/O failures.
    pub fn kind(&self) -> Option<FormatErrorKind> {
        match self {
            FormatError::Syntax { kind, .. } => Some(*kind),
            FormatError::Io(_) => None,
        }
    }

    /// 1-based line number of a syntax error.
    pub fn line(&self) -> Option<usize> {
        match self {
            FormatError::Syntax { line, .. } => Some(*line),
            FormatError::Io(_) => None,
        }
    }
}

/// Geometry that cannot produce a unit tangent.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum GeometryError {
    /// Edge `index -> index+1 (mod n)` has zero (or non-finite) length.
    #[error("degenerate edge {index}: length {length}")]
    DegenerateEdge { index: usize, length: f64 },
}

/// A flow step failed on one component; the collection is left untouched.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum FlowError {
    #[error("component {component}: {source}")]
    Degenerate {
        component: usize,
        #[source]
        source: GeometryError,
    },
}

impl FlowError {
    /// Index of the component that failed.
    pub fn component(&self) -> usize {
        match self {
            FlowError::Degenerate { component, .. } => *component,
        }
    }
}
