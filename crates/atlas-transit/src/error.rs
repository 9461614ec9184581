//! Transit-model error type.

use thiserror::Error;

use atlas_core::AtlasError;

/// Errors produced by `atlas-transit`.
///
/// Failed name lookups arrive as the wrapped [`AtlasError`];
/// `MissingDistance` means neither `d(from, to)` nor `d(to, from)` was
/// declared for a traversed segment.  Both are malformed input, fatal by
/// contract.
#[derive(Debug, Error)]
pub enum TransitError {
    #[error(transparent)]
    Core(#[from] AtlasError),

    #[error("no road distance declared between {from:?} and {to:?} in either direction")]
    MissingDistance { from: String, to: String },
}

pub type TransitResult<T> = Result<T, TransitError>;
