//! Shared base error type.
//!
//! Sub-crates may define their own error enums and convert them into
//! `AtlasError` via `From` impls, or keep them separate and wrap
//! `AtlasError` as one variant.  The `atlas-*` crates use the wrapping
//! form: `TransitError::Core` and `RenderError::Core` both carry an
//! `AtlasError` produced at a failed name lookup.

use thiserror::Error;

/// The top-level error type for `atlas-core` and a common base for the
/// `atlas-*` crates.
///
/// Both variants mean a name lookup failed against the loaded network —
/// an edge, request, or distance table referenced an entity that was
/// never declared.
#[derive(Debug, Error)]
pub enum AtlasError {
    #[error("stop {0:?} not found")]
    StopNotFound(String),

    #[error("bus {0:?} not found")]
    BusNotFound(String),
}

/// Shorthand result type for code that fails only on base errors.
pub type AtlasResult<T> = Result<T, AtlasError>;
