// ---------------------------------------------------------------------------
// Error types for calculation and region-table loading
// ---------------------------------------------------------------------------

use std::path::PathBuf;

use thiserror::Error;

use crate::inputs::InputField;

/// Why a single footprint calculation was rejected.
///
/// Both variants are terminal for the attempt: nothing is retried and no
/// partial result is produced.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FootprintError {
    /// The requested region has no entry in the emission factor table.
    #[error("unknown region: {region}")]
    UnknownRegion { region: String },

    /// A raw input lies outside its declared domain.
    #[error("{field} = {value} is out of range (allowed {min}..={max})")]
    InvalidInput {
        field: InputField,
        value: f64,
        min: f64,
        max: f64,
    },
}

/// Errors raised while building or extending an emission factor table.
#[derive(Debug, Error)]
pub enum FactorTableError {
    /// The region file could not be read.
    #[error("failed to read region file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The region file is not valid JSON or does not match the schema.
    #[error("malformed region file: {0}")]
    Parse(#[from] serde_json::Error),

    /// A coefficient is negative, NaN or infinite.
    #[error("region {region}: {factor} must be a non-negative finite number, got {value}")]
    InvalidFactor {
        region: String,
        factor: &'static str,
        value: f64,
    },
}
