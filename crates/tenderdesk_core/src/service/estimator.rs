//! Risk and profit estimation seam for tender creation.
//!
//! Scoring models plug in behind [`RiskEstimator`]. The bundled
//! [`FallbackEstimator`] returns the fixed default prediction used when no
//! model is available.

/// Features available when a tender is created.
#[derive(Debug, Clone, PartialEq)]
pub struct EstimateInput {
    pub value: f64,
    /// Negative when the deadline has already passed.
    pub days_to_deadline: i64,
    pub category: String,
}

/// Predicted scores, both within `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Estimate {
    pub risk_score: f64,
    pub profit_prediction: f64,
}

impl Estimate {
    /// Clamps both scores into `[0, 1]`; NaN collapses to `0`.
    pub fn clamped(self) -> Self {
        Self {
            risk_score: clamp_unit(self.risk_score),
            profit_prediction: clamp_unit(self.profit_prediction),
        }
    }
}

pub trait RiskEstimator {
    fn estimate(&self, input: &EstimateInput) -> Estimate;
}

/// Returns the default prediction for every input.
#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackEstimator;

impl FallbackEstimator {
    pub const DEFAULT: Estimate = Estimate {
        risk_score: 0.3,
        profit_prediction: 0.15,
    };
}

impl RiskEstimator for FallbackEstimator {
    fn estimate(&self, _input: &EstimateInput) -> Estimate {
        Self::DEFAULT
    }
}

fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::{Estimate, EstimateInput, FallbackEstimator, RiskEstimator};

    #[test]
    fn fallback_returns_default_prediction() {
        let input = EstimateInput {
            value: 1_000_000.0,
            days_to_deadline: 30,
            category: "Construction".to_string(),
        };
        assert_eq!(FallbackEstimator.estimate(&input), FallbackEstimator::DEFAULT);
    }

    #[test]
    fn clamped_bounds_scores() {
        let estimate = Estimate {
            risk_score: 1.7,
            profit_prediction: f64::NAN,
        }
        .clamped();
        assert_eq!(estimate.risk_score, 1.0);
        assert_eq!(estimate.profit_prediction, 0.0);
    }
}
