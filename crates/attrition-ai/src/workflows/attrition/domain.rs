use serde::{Deserialize, Serialize};

/// Identifier assigned to an employee within one batch (e.g. `EMP007`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(pub String);

impl EmployeeId {
    /// Batch identifier for a 1-based row index.
    pub fn for_row(row_index: usize) -> Self {
        Self(format!("EMP{row_index:03}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(&self.0)
    }
}

/// Fully-typed, fully-defaulted employee snapshot consumed by risk models.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    pub id: EmployeeId,
    pub name: String,
    pub age: u32,
    pub department: String,
    pub job_role: String,
    pub years_at_company: u32,
    pub monthly_income: f64,
    pub job_satisfaction: u8,
    pub work_life_balance: u8,
    pub overtime: bool,
    pub distance_from_home: f64,
    pub num_companies_worked: u32,
}

/// Whether a factor pushes the estimate towards leaving or staying.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImpactDirection {
    IncreasesRisk,
    DecreasesRisk,
}

impl ImpactDirection {
    pub fn label(&self) -> &'static str {
        match self {
            ImpactDirection::IncreasesRisk => "Increases risk",
            ImpactDirection::DecreasesRisk => "Decreases risk",
        }
    }
}

/// A fired rule, retained for narrative explanations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskFactor {
    pub factor: String,
    pub direction: ImpactDirection,
    pub description: String,
    pub importance: f64,
}

/// One bar of the diverging feature-impact chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartEntry {
    pub label: String,
    pub impact: u8,
    pub direction: ImpactDirection,
}

impl ChartEntry {
    /// Signed bar value: risk-increasing factors render above the axis.
    pub fn signed_impact(&self) -> i16 {
        match self.direction {
            ImpactDirection::IncreasesRisk => i16::from(self.impact),
            ImpactDirection::DecreasesRisk => -i16::from(self.impact),
        }
    }
}

/// Bucket used when summarizing a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskTier {
    High,
    Medium,
    Low,
}

impl RiskTier {
    pub fn from_score(score: u8) -> Self {
        match score {
            70..=u8::MAX => RiskTier::High,
            40..=69 => RiskTier::Medium,
            _ => RiskTier::Low,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskTier::High => "High Risk",
            RiskTier::Medium => "Medium Risk",
            RiskTier::Low => "Low Risk",
        }
    }
}

/// Presentation-ready outcome for a single employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub will_leave: bool,
    pub risk_score: u8,
    pub employee_name: String,
    pub reasons: Vec<RiskFactor>,
    pub chart: Vec<ChartEntry>,
}

impl PredictionResult {
    pub fn tier(&self) -> RiskTier {
        RiskTier::from_score(self.risk_score)
    }
}

/// Row of the bulk results table; keeps the full prediction for drill-down.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulkSummaryEntry {
    pub id: EmployeeId,
    pub name: String,
    pub department: String,
    pub risk_score: u8,
    pub will_leave: bool,
    pub prediction: PredictionResult,
}

/// Tier histogram for a scored batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierCounts {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl TierCounts {
    pub fn record(&mut self, tier: RiskTier) {
        match tier {
            RiskTier::High => self.high += 1,
            RiskTier::Medium => self.medium += 1,
            RiskTier::Low => self.low += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.high + self.medium + self.low
    }
}

/// Individual-assessment form payload. Ranges are checked by [`ManualSubmission::validate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManualSubmission {
    #[serde(default)]
    pub id: Option<EmployeeId>,
    #[serde(default)]
    pub name: String,
    pub age: u32,
    pub department: String,
    pub job_role: String,
    pub years_at_company: u32,
    pub monthly_income: f64,
    pub job_satisfaction: u8,
    pub work_life_balance: u8,
    pub overtime: bool,
    pub distance_from_home: f64,
    pub num_companies_worked: u32,
}

/// Range violations reported back to the form.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SubmissionError {
    #[error("{field} must be between {min} and {max} (found {found})")]
    OutOfRange {
        field: &'static str,
        min: f64,
        max: f64,
        found: f64,
    },
    #[error("distance_from_home must be a non-negative number (found {0})")]
    InvalidDistance(f64),
}

impl ManualSubmission {
    pub fn validate(self) -> Result<EmployeeRecord, SubmissionError> {
        check_range("age", f64::from(self.age), 18.0, 65.0)?;
        check_range(
            "years_at_company",
            f64::from(self.years_at_company),
            0.0,
            40.0,
        )?;
        check_range("monthly_income", self.monthly_income, 1000.0, 50000.0)?;
        check_range(
            "job_satisfaction",
            f64::from(self.job_satisfaction),
            1.0,
            4.0,
        )?;
        check_range(
            "work_life_balance",
            f64::from(self.work_life_balance),
            1.0,
            4.0,
        )?;
        check_range(
            "num_companies_worked",
            f64::from(self.num_companies_worked),
            0.0,
            10.0,
        )?;
        if !self.distance_from_home.is_finite() || self.distance_from_home < 0.0 {
            return Err(SubmissionError::InvalidDistance(self.distance_from_home));
        }

        Ok(EmployeeRecord {
            id: self.id.unwrap_or_else(|| EmployeeId("MANUAL".to_string())),
            name: self.name,
            age: self.age,
            department: self.department,
            job_role: self.job_role,
            years_at_company: self.years_at_company,
            monthly_income: self.monthly_income,
            job_satisfaction: self.job_satisfaction,
            work_life_balance: self.work_life_balance,
            overtime: self.overtime,
            distance_from_home: self.distance_from_home,
            num_companies_worked: self.num_companies_worked,
        })
    }
}

fn check_range(field: &'static str, value: f64, min: f64, max: f64) -> Result<(), SubmissionError> {
    // NaN is never contained, so it is rejected here too.
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(SubmissionError::OutOfRange {
            field,
            min,
            max,
            found: value,
        })
    }
}
