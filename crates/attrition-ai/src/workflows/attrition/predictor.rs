use super::domain::{EmployeeRecord, PredictionResult};
use super::explain::rank_factors;
use super::scoring::{RiskModel, RuleTableModel};
use tracing::debug;

const FALLBACK_SUBJECT: &str = "Employee";

/// Scores a record and shapes the ranked explanation.
#[derive(Debug, Clone)]
pub struct AttritionPredictor<M> {
    model: M,
}

impl Default for AttritionPredictor<RuleTableModel> {
    fn default() -> Self {
        Self::new(RuleTableModel::default())
    }
}

impl<M: RiskModel> AttritionPredictor<M> {
    pub fn new(model: M) -> Self {
        Self { model }
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn predict(&self, record: &EmployeeRecord) -> PredictionResult {
        let assessment = self.model.assess(record);
        debug!(
            employee_id = %record.id,
            risk_score = assessment.risk_score,
            factors = assessment.factors.len(),
            "attrition risk assessed"
        );

        let explanation = rank_factors(assessment.factors);
        let employee_name = match record.name.trim() {
            "" => FALLBACK_SUBJECT.to_string(),
            name => name.to_string(),
        };

        PredictionResult {
            will_leave: assessment.will_leave,
            risk_score: assessment.risk_score,
            employee_name,
            reasons: explanation.reasons,
            chart: explanation.chart,
        }
    }
}
