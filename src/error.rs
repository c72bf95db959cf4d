// Fri Oct 16 2026 - Alex

use std::fmt;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagErrorKind {
    MissingGroupAnchor,
    TooManySections,
    RecursiveGroup,
    ReservedGroupName,
}

impl fmt::Display for TagErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagErrorKind::MissingGroupAnchor => write!(f, "named group `group:` anchor wasn't found"),
            TagErrorKind::TooManySections => write!(f, "neither `default` nor named group shape"),
            TagErrorKind::RecursiveGroup => write!(f, "tag group can't be nested inside a group"),
            TagErrorKind::ReservedGroupName => write!(f, "group name `-` is reserved for skipped fields"),
        }
    }
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("strategy {0:?} wasn't found")]
    UnknownStrategy(String),
    #[error("walker {0:?} wasn't found")]
    UnknownWalker(String),
    #[error("tag {tag:?} can't be parsed, {reason}")]
    MalformedTag { tag: String, reason: TagErrorKind },
    #[error("inconsistent strategies list {strategies:?} for field {field:?} in group {group:?}")]
    InconsistentGroup {
        group: String,
        field: String,
        strategies: String,
    },
    #[error("strategy {name:?} failed: {message}")]
    Strategy { name: String, message: String },
    #[error("can't build {what} {target:?}: {source}")]
    Build {
        what: &'static str,
        target: String,
        #[source]
        source: Box<Error>,
    },
    #[error("declaration {0:?} wasn't found in syntax tree")]
    DeclarationNotFound(String),
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error("invalid name pattern: {0}")]
    Pattern(#[from] regex::Error),
    #[error("{op} failed: {source}")]
    Collaborator {
        op: &'static str,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("context canceled")]
    Cancelled,
    #[error("context deadline exceeded")]
    DeadlineExceeded,
}

impl Error {
    pub fn collaborator<E>(op: &'static str, source: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Error::Collaborator {
            op,
            source: source.into(),
        }
    }

    /// Reports whether the error means "stopped" rather than "broken".
    pub fn is_cancellation(&self) -> bool {
        matches!(self, Error::Cancelled | Error::DeadlineExceeded)
    }
}
