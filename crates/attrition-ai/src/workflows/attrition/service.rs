use std::collections::HashSet;
use std::io::Read;
use std::sync::{Arc, Mutex, PoisonError};

use rand::rngs::StdRng;
use tracing::{info, warn};

use super::bulk::{BulkAggregator, BulkReport, UploadedEmployee};
use super::domain::{ManualSubmission, PredictionResult, SubmissionError};
use super::intake::{EmployeeImporter, IntakeError};
use super::predictor::AttritionPredictor;
use super::scoring::RiskModel;
use super::session::{SessionError, SessionStore};
use crate::config::ScoringConfig;

type SharedModel = Arc<dyn RiskModel>;

/// Service composing intake, the predictor, bulk aggregation and session state.
pub struct AttritionService<S> {
    predictor: AttritionPredictor<SharedModel>,
    bulk: Mutex<BulkAggregator<SharedModel, StdRng>>,
    store: Arc<S>,
}

impl<S> AttritionService<S>
where
    S: SessionStore + 'static,
{
    pub fn new(store: Arc<S>, model: SharedModel, config: &ScoringConfig) -> Self {
        let bulk = match config.bulk_seed {
            Some(seed) => BulkAggregator::seeded(model.clone(), seed),
            None => BulkAggregator::from_entropy(model.clone()),
        };

        Self {
            predictor: AttritionPredictor::new(model),
            bulk: Mutex::new(bulk),
            store,
        }
    }

    /// Validate an individual-assessment form and score it.
    pub fn predict_manual(
        &self,
        submission: ManualSubmission,
    ) -> Result<PredictionResult, AttritionServiceError> {
        let record = submission.validate()?;
        Ok(self.predictor.predict(&record))
    }

    /// Normalize and score an uploaded CSV, replacing the session's bulk results.
    pub fn upload(&self, text: &str) -> Result<BulkReport, AttritionServiceError> {
        self.upload_reader(text.as_bytes())
    }

    pub fn upload_reader<R: Read>(&self, reader: R) -> Result<BulkReport, AttritionServiceError> {
        let outcome = match EmployeeImporter::from_reader(reader) {
            Ok(outcome) => outcome,
            Err(err) => {
                warn!(error = %err, "employee upload rejected; clearing session results");
                self.store.clear()?;
                return Err(err.into());
            }
        };

        let report = self.aggregator().aggregate_import(&outcome);
        self.store.replace(report.clone())?;
        info!(
            processed_rows = report.processed_rows,
            total_rows = report.total_rows,
            "employee upload scored"
        );
        Ok(report)
    }

    /// Score sparse rows, synthesizing the fields they omit. Identifiers must be unique.
    pub fn score_rows(
        &self,
        rows: &[UploadedEmployee],
    ) -> Result<BulkReport, AttritionServiceError> {
        let mut seen = HashSet::with_capacity(rows.len());
        if let Some(row) = rows.iter().find(|row| !seen.insert(row.id.as_str())) {
            return Err(AttritionServiceError::DuplicateEmployee(row.id.to_string()));
        }

        let report = self.aggregator().aggregate(rows);
        self.store.replace(report.clone())?;
        Ok(report)
    }

    /// Current session's bulk results.
    pub fn bulk_results(&self) -> Result<BulkReport, AttritionServiceError> {
        self.store
            .current()?
            .ok_or(AttritionServiceError::NoBulkResults)
    }

    /// Retained prediction for one bulk row, without recomputation.
    pub fn select(&self, employee_id: &str) -> Result<PredictionResult, AttritionServiceError> {
        let report = self.bulk_results()?;
        report
            .find(employee_id)
            .cloned()
            .ok_or_else(|| AttritionServiceError::UnknownEmployee(employee_id.to_string()))
    }

    fn aggregator(&self) -> std::sync::MutexGuard<'_, BulkAggregator<SharedModel, StdRng>> {
        self.bulk.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Error raised by the attrition service.
#[derive(Debug, thiserror::Error)]
pub enum AttritionServiceError {
    #[error(transparent)]
    Submission(#[from] SubmissionError),
    #[error(transparent)]
    Intake(#[from] IntakeError),
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error("employee id {0} appears more than once in the batch")]
    DuplicateEmployee(String),
    #[error("no bulk upload has been scored in this session")]
    NoBulkResults,
    #[error("employee {0} is not part of the current bulk results")]
    UnknownEmployee(String),
}
