mod config;
mod rules;

pub use config::RuleTableConfig;

use super::domain::{EmployeeRecord, RiskFactor};
use serde::{Deserialize, Serialize};

/// Scoring strategy: any model that maps a canonical record to a bounded score and the
/// factors behind it. The rule table is one implementation; a trained model can be
/// swapped in without touching intake, ranking, or bulk aggregation.
pub trait RiskModel: Send + Sync {
    fn assess(&self, record: &EmployeeRecord) -> RiskAssessment;
}

/// Score, classification and unordered factors for one record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub risk_score: u8,
    pub will_leave: bool,
    /// Sum of the fired deltas before clamping, kept for audits.
    pub raw_score: i32,
    pub factors: Vec<RiskFactor>,
}

/// Stateless evaluator for the fixed attrition rule table.
#[derive(Debug, Clone, Default)]
pub struct RuleTableModel {
    config: RuleTableConfig,
}

impl RuleTableModel {
    pub fn new(config: RuleTableConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RuleTableConfig {
        &self.config
    }
}

impl RiskModel for RuleTableModel {
    fn assess(&self, record: &EmployeeRecord) -> RiskAssessment {
        let (factors, raw_score) = rules::score_record(record, &self.config);
        let risk_score = rules::clamp_score(raw_score, &self.config);

        RiskAssessment {
            risk_score,
            will_leave: risk_score >= self.config.leave_threshold,
            raw_score,
            factors,
        }
    }
}

impl<M: RiskModel + ?Sized> RiskModel for std::sync::Arc<M> {
    fn assess(&self, record: &EmployeeRecord) -> RiskAssessment {
        (**self).assess(record)
    }
}
