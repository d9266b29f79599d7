//! Employee attrition risk pipeline: CSV intake, rule-table scoring, ranked
//! explanations, and bulk aggregation for the interactive demo.

pub mod bulk;
pub mod domain;
pub mod explain;
pub mod intake;
pub mod predictor;
pub mod router;
pub mod scoring;
pub mod service;
pub mod session;

#[cfg(test)]
mod tests;

pub use bulk::{BulkAggregator, BulkReport, UploadedEmployee};
pub use domain::{
    BulkSummaryEntry, ChartEntry, EmployeeId, EmployeeRecord, ImpactDirection, ManualSubmission,
    PredictionResult, RiskFactor, RiskTier, SubmissionError, TierCounts,
};
pub use explain::{rank_factors, Explanation, MAX_CHART_ENTRIES, MAX_REASONS};
pub use intake::{EmployeeImporter, ImportOutcome, IntakeError, MAX_IMPORT_ROWS};
pub use predictor::AttritionPredictor;
pub use router::attrition_router;
pub use scoring::{RiskAssessment, RiskModel, RuleTableConfig, RuleTableModel};
pub use service::{AttritionService, AttritionServiceError};
pub use session::{SessionError, SessionStore};
