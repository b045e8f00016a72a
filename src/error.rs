//! Crate-level error type

use crate::export::ExportError;
use crate::import::ImportError;
use crate::model::BuildError;

/// Any failure raised while importing, building or rendering a model
#[derive(Debug, thiserror::Error)]
pub enum EdmError {
    #[error(transparent)]
    Build(#[from] BuildError),
    #[error(transparent)]
    Export(#[from] ExportError),
    #[error(transparent)]
    Import(#[from] ImportError),
}
