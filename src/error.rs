use thiserror::Error;

/// Errors raised when exchanging pixel data with a surface collaborator.
///
/// These are collaborator faults: the editor core never masks them, it
/// propagates them to the caller. Missing preconditions (no selected
/// surface) and malformed pointer-event sequences are *not* errors and are
/// handled as silent no-ops by the tools and effects themselves.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SurfaceError {
    /// A buffer was written back with dimensions that do not match the
    /// surface it was read from.
    #[error("pixel buffer is {got_width}x{got_height}, surface is {want_width}x{want_height}")]
    SizeMismatch {
        want_width: usize,
        want_height: usize,
        got_width: usize,
        got_height: usize,
    },
    /// The surface could not produce or accept pixel data.
    #[error("surface unavailable: {0}")]
    Unavailable(String),
}
