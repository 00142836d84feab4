// src/slides/error.rs

/// Errors raised by the slide registry and window.
/// Both are caller bugs (bad layout or a bad index from the trigger layer),
/// so they are returned rather than recovered from.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideError {
    #[error("layout has {found} slides, at least {required} are needed for the opening window")]
    Configuration { found: usize, required: usize },
    #[error("slide index {index} out of range (registry holds {len} slides)")]
    IndexOutOfRange { index: usize, len: usize },
}
