use std::sync::{Arc, Mutex};

use axum::http::StatusCode;
use axum::response::Response;
use serde_json::Value;

use crate::config::ScoringConfig;
use crate::workflows::attrition::bulk::{BulkReport, UploadedEmployee};
use crate::workflows::attrition::domain::{EmployeeId, EmployeeRecord, ManualSubmission};
use crate::workflows::attrition::scoring::RuleTableModel;
use crate::workflows::attrition::service::AttritionService;
use crate::workflows::attrition::session::{SessionError, SessionStore};

pub(super) fn employee(
    overtime: bool,
    job_satisfaction: u8,
    years_at_company: u32,
    monthly_income: f64,
    work_life_balance: u8,
) -> EmployeeRecord {
    EmployeeRecord {
        id: EmployeeId::for_row(1),
        name: "Jordan Ellis".to_string(),
        age: 31,
        department: "Sales".to_string(),
        job_role: "Sales Executive".to_string(),
        years_at_company,
        monthly_income,
        job_satisfaction,
        work_life_balance,
        overtime,
        distance_from_home: 8.0,
        num_companies_worked: 2,
    }
}

pub(super) fn submission() -> ManualSubmission {
    ManualSubmission {
        id: None,
        name: "Jordan Ellis".to_string(),
        age: 31,
        department: "Sales".to_string(),
        job_role: "Sales Executive".to_string(),
        years_at_company: 1,
        monthly_income: 3200.0,
        job_satisfaction: 2,
        work_life_balance: 2,
        overtime: true,
        distance_from_home: 8.0,
        num_companies_worked: 2,
    }
}

pub(super) fn uploaded(id: &str, tenure: u32, satisfaction: f64) -> UploadedEmployee {
    UploadedEmployee {
        id: EmployeeId(id.to_string()),
        name: format!("Employee {id}"),
        department: "Engineering".to_string(),
        tenure,
        satisfaction,
        overtime: None,
        work_life_balance: None,
        monthly_income: None,
    }
}

/// Rows matching the sample batch shown in the demo.
pub(super) fn sample_rows() -> Vec<UploadedEmployee> {
    vec![
        named("EMP001", "Sarah Johnson", "Sales", 3, 0.4),
        named("EMP002", "Michael Chen", "Engineering", 5, 0.8),
        named("EMP003", "Emily Davis", "HR", 2, 0.6),
        named("EMP004", "James Wilson", "Marketing", 1, 0.3),
        named("EMP005", "Lisa Anderson", "Finance", 7, 0.9),
    ]
}

fn named(
    id: &str,
    name: &str,
    department: &str,
    tenure: u32,
    satisfaction: f64,
) -> UploadedEmployee {
    UploadedEmployee {
        name: name.to_string(),
        department: department.to_string(),
        ..uploaded(id, tenure, satisfaction)
    }
}

pub(super) const SAMPLE_CSV: &str = "Name,Department,Age,YearsAtCompany,JobSatisfaction,MonthlyIncome,OverTime,WorkLifeBalance\n\
Sarah Johnson,Sales,29,1,1,3000,Yes,1\n\
Michael Chen,Engineering,41,6,4,6000,No,3\n\
Emily Davis,HR,35,3,3,5000,No,3\n";

#[derive(Default)]
pub(super) struct MemoryStore {
    report: Mutex<Option<BulkReport>>,
}

impl SessionStore for MemoryStore {
    fn current(&self) -> Result<Option<BulkReport>, SessionError> {
        Ok(self.report.lock().expect("store mutex poisoned").clone())
    }

    fn replace(&self, report: BulkReport) -> Result<(), SessionError> {
        *self.report.lock().expect("store mutex poisoned") = Some(report);
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionError> {
        *self.report.lock().expect("store mutex poisoned") = None;
        Ok(())
    }
}

pub(super) struct UnavailableStore;

impl SessionStore for UnavailableStore {
    fn current(&self) -> Result<Option<BulkReport>, SessionError> {
        Err(SessionError::Unavailable("offline".to_string()))
    }

    fn replace(&self, _report: BulkReport) -> Result<(), SessionError> {
        Err(SessionError::Unavailable("offline".to_string()))
    }

    fn clear(&self) -> Result<(), SessionError> {
        Err(SessionError::Unavailable("offline".to_string()))
    }
}

pub(super) fn seeded_config() -> ScoringConfig {
    ScoringConfig {
        bulk_seed: Some(7),
    }
}

pub(super) fn build_service() -> (Arc<AttritionService<MemoryStore>>, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::default());
    let service = Arc::new(AttritionService::new(
        store.clone(),
        Arc::new(RuleTableModel::default()),
        &seeded_config(),
    ));
    (service, store)
}

pub(super) async fn json_body(response: Response) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    let value = serde_json::from_slice(&bytes).expect("json body");
    (status, value)
}
