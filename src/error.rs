use thiserror::Error;

use crate::mapping::MappingError;
use crate::register::RegisterError;

/// Top-level error for a conversion run.
///
/// Mapping errors are fatal by design: a value outside a closed dispatch
/// partition is data the mapping was never written for and must not be
/// silently coerced. Already-written output units stay on disk; re-running
/// from scratch is the recovery path (derived ids are deterministic, so a
/// re-run is idempotent).
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error(transparent)]
    Register(#[from] RegisterError),

    #[error(transparent)]
    Mapping(#[from] MappingError),

    #[error("invalid namespace IRI: {0}")]
    Namespace(#[from] oxrdf::IriParseError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
