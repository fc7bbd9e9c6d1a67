//! Precondition errors shared by the grid builder and the escape-time engine.

use thiserror::Error;

/// Input validation failures. All of them are detected before any
/// computation starts, so a request either fails whole or succeeds whole.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlotError {
    #[error("invalid viewport {bounds:?}: {reason}")]
    InvalidViewport {
        bounds: (f64, f64, f64, f64),
        reason: &'static str,
    },

    #[error("invalid resolution {width}x{height}: {reason}")]
    InvalidResolution {
        width: u32,
        height: u32,
        reason: &'static str,
    },

    #[error("invalid iteration budget {0}: must be at least 1")]
    InvalidBudget(u32),

    #[error("invalid escape radius {0}: must be finite and greater than 0")]
    InvalidRadius(f64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_parameter_and_constraint() {
        let err = PlotError::InvalidResolution {
            width: 10,
            height: 1,
            reason: "height must be at least 2",
        };
        assert_eq!(
            err.to_string(),
            "invalid resolution 10x1: height must be at least 2"
        );

        assert_eq!(
            PlotError::InvalidBudget(0).to_string(),
            "invalid iteration budget 0: must be at least 1"
        );
        assert!(PlotError::InvalidRadius(-1.0)
            .to_string()
            .contains("escape radius -1"));
    }
}
