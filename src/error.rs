use thiserror::Error;

use crate::prelude::SV;

/// Errors that may rise while evaluating the line of sight geometry
/// or one of the atmospheric models.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// No ephemeris record brackets the requested transmission instant.
    #[error("{sv}: no ephemeris brackets t={t_s}s")]
    EphemerisNotFound {
        /// Satellite this ephemeris table describes
        sv: SV,
        /// Requested instant (s)
        t_s: f64,
    },

    /// Receiver or satellite coordinates that make the geometry undefined.
    #[error("degenerate input: {0}")]
    DegenerateInput(&'static str),

    /// Klobuchar coefficients must come as two 8 terms sequences.
    #[error("klobuchar coefficients must be 8 terms long (alpha: {alpha}, beta: {beta})")]
    CoefficientShape { alpha: usize, beta: usize },

    /// Model input outside its valid domain.
    #[error("{parameter}={value} is out of model domain")]
    OutOfRange {
        parameter: &'static str,
        value: f64,
    },

    #[error("invalid interpolation order: {0}")]
    InterpolationOrder(usize),

    #[error("unknown mapping function \"{0}\"")]
    UnknownMappingFunction(String),
}
