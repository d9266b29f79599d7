use serde::{Deserialize, Serialize};

/// Thresholds and score deltas of the attrition rule table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleTableConfig {
    pub base_score: i32,
    pub min_score: u8,
    pub max_score: u8,
    pub leave_threshold: u8,
    pub overtime_delta: i32,
    pub low_satisfaction_max: u8,
    pub low_satisfaction_delta: i32,
    pub high_satisfaction_min: u8,
    pub high_satisfaction_delta: i32,
    pub short_tenure_below: u32,
    pub short_tenure_delta: i32,
    pub long_tenure_min: u32,
    pub long_tenure_delta: i32,
    pub low_income_below: f64,
    pub low_income_delta: i32,
    pub poor_balance_max: u8,
    pub poor_balance_delta: i32,
}

impl Default for RuleTableConfig {
    fn default() -> Self {
        Self {
            base_score: 30,
            min_score: 5,
            max_score: 95,
            leave_threshold: 50,
            overtime_delta: 25,
            low_satisfaction_max: 2,
            low_satisfaction_delta: 20,
            high_satisfaction_min: 4,
            high_satisfaction_delta: -15,
            short_tenure_below: 2,
            short_tenure_delta: 15,
            long_tenure_min: 5,
            long_tenure_delta: -20,
            low_income_below: 4000.0,
            low_income_delta: 15,
            poor_balance_max: 2,
            poor_balance_delta: 12,
        }
    }
}
