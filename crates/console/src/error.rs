//! Error taxonomy for the editor core.
//!
//! None of these is fatal: the command listener reports the message and
//! re-prompts. Persistence failures are the only condition allowed to leave
//! memory and disk state divergent.

use std::path::PathBuf;

use thiserror::Error;

/// Scene mutation failures — reported, no mutation performed.
#[derive(Debug, Error, PartialEq)]
pub enum SceneError {
    #[error("invalid object index {index}: scene has {len} object(s)")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("'{0}' is not a valid shape")]
    UnknownShape(String),
    #[error("color '{0}' not found")]
    UnknownColor(String),
}

/// Snapshot text that does not parse. Fail-fast: the first bad record
/// aborts the parse.
#[derive(Debug, Error, PartialEq)]
pub enum CodecError {
    #[error("malformed record on line {line}: {reason}")]
    Malformed { line: usize, reason: String },
}

#[derive(Debug, Error, PartialEq)]
pub enum HistoryError {
    #[error("no more states to undo to")]
    UndoStackEmpty,
    /// A recorded snapshot no longer parses. Snapshots are produced by the
    /// codec itself, so this indicates a codec bug, not user error.
    #[error("history snapshot is corrupt: {0}")]
    Corrupt(#[from] CodecError),
}

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("cannot access save file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("save file {path} is corrupt: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: CodecError,
    },
}

/// Anything a single command line can fail with.
#[derive(Debug, Error)]
pub enum CommandError {
    /// Bad token, arity, or argument type. The rest of the line is
    /// discarded; store and history are untouched.
    #[error("not a valid command: {0}")]
    InvalidCommand(String),
    #[error(transparent)]
    Scene(#[from] SceneError),
    #[error(transparent)]
    History(#[from] HistoryError),
    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}
