//! Rendering-subsystem error type.

use thiserror::Error;

use atlas_core::AtlasError;

/// Errors produced by `atlas-render`.
///
/// Every stop reachable from a bus route or a routed edge gets a screen
/// position during layout, and every routed edge is labeled with a loaded
/// bus, so both variants only fire on a model that references undeclared
/// entities — malformed input, fatal by contract.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error(transparent)]
    Core(#[from] AtlasError),

    #[error("stop {0:?} has no screen position")]
    UnplacedStop(String),
}

pub type RenderResult<T> = Result<T, RenderError>;
