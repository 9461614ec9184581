//! Engine error type.

use thiserror::Error;

use atlas_render::RenderError;
use atlas_transit::TransitError;

/// Fatal errors: malformed documents and broken model invariants.  Missing
/// entities on stat requests are *not* errors — they become in-band
/// `error_message` responses.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("malformed input document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Transit(#[from] TransitError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

pub type EngineResult<T> = Result<T, EngineError>;
