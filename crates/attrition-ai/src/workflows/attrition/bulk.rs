use super::domain::{
    BulkSummaryEntry, EmployeeId, EmployeeRecord, PredictionResult, TierCounts,
};
use super::intake::{defaults, ImportOutcome};
use super::predictor::AttritionPredictor;
use super::scoring::RiskModel;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::info;

const OVERTIME_PROBABILITY: f64 = 0.3;

/// Sparse row from a bulk upload. Missing optional fields are synthesized by the
/// aggregator's random source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadedEmployee {
    pub id: EmployeeId,
    pub name: String,
    pub department: String,
    /// Years at the company.
    pub tenure: u32,
    /// Satisfaction as a fraction in `[0, 1]`.
    pub satisfaction: f64,
    #[serde(default)]
    pub overtime: Option<bool>,
    #[serde(default)]
    pub work_life_balance: Option<u8>,
    #[serde(default)]
    pub monthly_income: Option<f64>,
}

/// Scored batch in input order plus tier counts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulkReport {
    pub entries: Vec<BulkSummaryEntry>,
    pub tiers: TierCounts,
    pub total_rows: usize,
    pub processed_rows: usize,
}

impl BulkReport {
    /// Retained prediction for a previously scored row.
    pub fn find(&self, id: &str) -> Option<&PredictionResult> {
        self.entries
            .iter()
            .find(|entry| entry.id.as_str() == id)
            .map(|entry| &entry.prediction)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Applies the predictor to every row of an upload.
pub struct BulkAggregator<M, R> {
    predictor: AttritionPredictor<M>,
    rng: R,
}

impl<M: RiskModel> BulkAggregator<M, StdRng> {
    /// Reproducible aggregator: identical seeds and inputs give identical reports.
    pub fn seeded(model: M, seed: u64) -> Self {
        Self::new(model, StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy(model: M) -> Self {
        Self::new(model, StdRng::from_entropy())
    }
}

impl<M: RiskModel, R: Rng> BulkAggregator<M, R> {
    pub fn new(model: M, rng: R) -> Self {
        Self {
            predictor: AttritionPredictor::new(model),
            rng,
        }
    }

    pub fn predictor(&self) -> &AttritionPredictor<M> {
        &self.predictor
    }

    /// Score sparse upload rows, sampling any field the row does not carry.
    pub fn aggregate(&mut self, rows: &[UploadedEmployee]) -> BulkReport {
        let records: Vec<EmployeeRecord> = rows.iter().map(|row| self.derive(row)).collect();
        self.summarize(&records, rows.len())
    }

    /// Score a normalized CSV upload. Every field is already present, so no sampling occurs.
    pub fn aggregate_import(&mut self, outcome: &ImportOutcome) -> BulkReport {
        self.summarize(&outcome.records, outcome.total_rows)
    }

    fn derive(&mut self, row: &UploadedEmployee) -> EmployeeRecord {
        let overtime = match row.overtime {
            Some(overtime) => overtime,
            None => self.rng.gen_bool(OVERTIME_PROBABILITY),
        };
        // Out-of-domain values are discarded and sampled like absent ones.
        let work_life_balance = match row.work_life_balance.filter(|b| (1..=4).contains(b)) {
            Some(balance) => balance,
            None => self.rng.gen_range(1..=5),
        };
        let monthly_income = match row
            .monthly_income
            .filter(|income| income.is_finite() && *income > 0.0)
        {
            Some(income) => income,
            None => self.rng.gen_range(3000.0..10000.0),
        };

        EmployeeRecord {
            id: row.id.clone(),
            name: row.name.clone(),
            age: defaults::AGE,
            department: row.department.clone(),
            job_role: defaults::JOB_ROLE.to_string(),
            years_at_company: row.tenure,
            monthly_income,
            job_satisfaction: satisfaction_score(row.satisfaction),
            work_life_balance,
            overtime,
            distance_from_home: defaults::DISTANCE_FROM_HOME,
            num_companies_worked: defaults::NUM_COMPANIES_WORKED,
        }
    }

    fn summarize(&self, records: &[EmployeeRecord], total_rows: usize) -> BulkReport {
        let mut tiers = TierCounts::default();
        let entries: Vec<BulkSummaryEntry> = records
            .iter()
            .map(|record| {
                let prediction = self.predictor.predict(record);
                tiers.record(prediction.tier());
                BulkSummaryEntry {
                    id: record.id.clone(),
                    name: record.name.clone(),
                    department: record.department.clone(),
                    risk_score: prediction.risk_score,
                    will_leave: prediction.will_leave,
                    prediction,
                }
            })
            .collect();

        info!(
            rows = entries.len(),
            total_rows,
            high = tiers.high,
            medium = tiers.medium,
            low = tiers.low,
            "bulk attrition scoring complete"
        );

        BulkReport {
            processed_rows: entries.len(),
            entries,
            tiers,
            total_rows,
        }
    }
}

/// Map a `[0, 1]` satisfaction fraction onto the four-point survey scale.
fn satisfaction_score(fraction: f64) -> u8 {
    if !fraction.is_finite() {
        return defaults::JOB_SATISFACTION;
    }
    (fraction * 4.0).round().clamp(1.0, 4.0) as u8
}
