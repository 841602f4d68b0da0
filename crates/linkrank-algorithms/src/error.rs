//! Error types for the rank estimators

use crate::common::NodeId;
use thiserror::Error;

/// Broad classification of a [`RankError`].
///
/// Every failure the estimators report is a deterministic input-validation
/// failure, so there is a single kind today.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidInput,
}

/// Errors that can occur while building a view or running an estimator
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RankError {
    #[error("Invalid input: graph has no nodes")]
    EmptyGraph,

    #[error("Invalid input: sample count must be at least 1")]
    ZeroSamples,

    #[error("Invalid input: damping factor {0} is outside [0, 1]")]
    InvalidDamping(f64),

    #[error("Invalid input: convergence threshold {0} must be finite and positive")]
    InvalidThreshold(f64),

    #[error("Invalid input: iteration cap must be at least 1")]
    ZeroIterations,

    #[error("Invalid input: node {0} not found")]
    NodeNotFound(NodeId),

    #[error("Invalid input: node {from} links to {to}, which is not in the graph")]
    DanglingLink { from: NodeId, to: NodeId },

    #[error("Invalid input: node {0} links to itself")]
    SelfLink(NodeId),

    #[error("Invalid input: transition weights from node {0} do not form a distribution")]
    InvalidWeights(NodeId),
}

impl RankError {
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::InvalidInput
    }

    pub fn is_invalid_input(&self) -> bool {
        self.kind() == ErrorKind::InvalidInput
    }
}

pub type RankResult<T> = Result<T, RankError>;

/// Reject damping factors outside [0, 1] (NaN included).
pub(crate) fn check_damping(damping_factor: f64) -> RankResult<()> {
    if (0.0..=1.0).contains(&damping_factor) {
        Ok(())
    } else {
        Err(RankError::InvalidDamping(damping_factor))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_damping_bounds() {
        assert!(check_damping(0.0).is_ok());
        assert!(check_damping(0.85).is_ok());
        assert!(check_damping(1.0).is_ok());
        assert_eq!(check_damping(1.5), Err(RankError::InvalidDamping(1.5)));
        assert_eq!(check_damping(-0.1), Err(RankError::InvalidDamping(-0.1)));
        assert!(check_damping(f64::NAN).is_err());
    }

    #[test]
    fn test_every_error_is_invalid_input() {
        let errors = vec![
            RankError::EmptyGraph,
            RankError::ZeroSamples,
            RankError::ZeroIterations,
            RankError::SelfLink("a.html".to_string()),
            RankError::InvalidWeights("a.html".to_string()),
            RankError::DanglingLink {
                from: "a.html".to_string(),
                to: "b.html".to_string(),
            },
        ];
        for err in errors {
            assert!(err.is_invalid_input(), "{} should be InvalidInput", err);
        }
    }

    #[test]
    fn test_error_messages() {
        let err = RankError::DanglingLink {
            from: "1.html".to_string(),
            to: "9.html".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid input: node 1.html links to 9.html, which is not in the graph"
        );

        let err = RankError::InvalidWeights("1.html".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid input: transition weights from node 1.html do not form a distribution"
        );
    }
}
