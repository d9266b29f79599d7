use super::mapping::{field_for_label, CanonicalField};
use super::parser::RawRow;
use crate::workflows::attrition::domain::{EmployeeId, EmployeeRecord};

const QUOTES: [char; 2] = ['"', '\''];

pub(crate) fn normalize_label(value: &str) -> String {
    clean_cell(value).to_ascii_lowercase()
}

pub(crate) fn clean_cell(value: &str) -> String {
    let cleaned = value.replace(['\u{feff}', '\u{200b}'], "");
    cleaned.trim().trim_matches(QUOTES).trim().to_string()
}

/// Fallback values applied to any field the upload leaves unset.
pub(crate) mod defaults {
    pub(crate) const DEPARTMENT: &str = "General";
    pub(crate) const JOB_ROLE: &str = "Associate";
    pub(crate) const AGE: u32 = 30;
    pub(crate) const YEARS_AT_COMPANY: u32 = 1;
    pub(crate) const JOB_SATISFACTION: u8 = 3;
    pub(crate) const MONTHLY_INCOME: f64 = 5000.0;
    pub(crate) const OVERTIME: bool = false;
    pub(crate) const WORK_LIFE_BALANCE: u8 = 3;
    pub(crate) const DISTANCE_FROM_HOME: f64 = 10.0;
    pub(crate) const NUM_COMPANIES_WORKED: u32 = 1;
}

#[derive(Debug, Default)]
struct EmployeeDraft {
    name: Option<String>,
    department: Option<String>,
    age: Option<u32>,
    years_at_company: Option<u32>,
    job_satisfaction: Option<u8>,
    monthly_income: Option<f64>,
    overtime: Option<bool>,
    work_life_balance: Option<u8>,
    distance_from_home: Option<f64>,
    num_companies_worked: Option<u32>,
    job_role: Option<String>,
}

impl EmployeeDraft {
    fn apply(&mut self, field: CanonicalField, value: &str) {
        match field {
            CanonicalField::Name => assign(&mut self.name, parse_text(value)),
            CanonicalField::Department => assign(&mut self.department, parse_text(value)),
            CanonicalField::Age => assign(&mut self.age, parse_count(value)),
            CanonicalField::YearsAtCompany => {
                assign(&mut self.years_at_company, parse_count(value))
            }
            CanonicalField::JobSatisfaction => {
                assign(&mut self.job_satisfaction, parse_scale(value))
            }
            CanonicalField::MonthlyIncome => assign(
                &mut self.monthly_income,
                parse_number(value).filter(|income| *income > 0.0),
            ),
            CanonicalField::Overtime => assign(&mut self.overtime, Some(parse_flag(value))),
            CanonicalField::WorkLifeBalance => {
                assign(&mut self.work_life_balance, parse_scale(value))
            }
            CanonicalField::DistanceFromHome => assign(
                &mut self.distance_from_home,
                parse_number(value).filter(|distance| *distance >= 0.0),
            ),
            CanonicalField::NumCompaniesWorked => {
                assign(&mut self.num_companies_worked, parse_count(value))
            }
            CanonicalField::JobRole => assign(&mut self.job_role, parse_text(value)),
        }
    }

    fn finish(self, row_index: usize) -> EmployeeRecord {
        EmployeeRecord {
            id: EmployeeId::for_row(row_index),
            name: self
                .name
                .unwrap_or_else(|| format!("Employee {row_index}")),
            age: self.age.unwrap_or(defaults::AGE),
            department: self
                .department
                .unwrap_or_else(|| defaults::DEPARTMENT.to_string()),
            job_role: self
                .job_role
                .unwrap_or_else(|| defaults::JOB_ROLE.to_string()),
            years_at_company: self.years_at_company.unwrap_or(defaults::YEARS_AT_COMPANY),
            monthly_income: self.monthly_income.unwrap_or(defaults::MONTHLY_INCOME),
            job_satisfaction: self.job_satisfaction.unwrap_or(defaults::JOB_SATISFACTION),
            work_life_balance: self
                .work_life_balance
                .unwrap_or(defaults::WORK_LIFE_BALANCE),
            overtime: self.overtime.unwrap_or(defaults::OVERTIME),
            distance_from_home: self
                .distance_from_home
                .unwrap_or(defaults::DISTANCE_FROM_HOME),
            num_companies_worked: self
                .num_companies_worked
                .unwrap_or(defaults::NUM_COMPANIES_WORKED),
        }
    }
}

/// Convert a raw row into a canonical record. Total: malformed cells fall back to defaults.
pub(crate) fn normalize_row(row: &RawRow) -> EmployeeRecord {
    let mut draft = EmployeeDraft::default();
    for (label, value) in &row.cells {
        if let Some(field) = field_for_label(label) {
            draft.apply(field, value);
        }
    }
    draft.finish(row.index)
}

fn assign<T>(slot: &mut Option<T>, value: Option<T>) {
    if value.is_some() {
        *slot = value;
    }
}

fn parse_text(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

pub(crate) fn parse_number(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|number| number.is_finite())
}

/// Whole, non-negative count. Fractional input is truncated (`"3.7"` reads as 3).
pub(crate) fn parse_count(value: &str) -> Option<u32> {
    let trimmed = value.trim();
    if let Ok(count) = trimmed.parse::<u32>() {
        return Some(count);
    }
    parse_number(trimmed)
        .filter(|number| *number >= 0.0 && *number <= f64::from(u32::MAX))
        .map(|number| number.trunc() as u32)
}

/// Four-point survey scale.
fn parse_scale(value: &str) -> Option<u8> {
    parse_count(value)
        .filter(|score| (1..=4).contains(score))
        .map(|score| score as u8)
}

pub(crate) fn parse_flag(value: &str) -> bool {
    let trimmed = value.trim();
    ["yes", "1", "true"]
        .iter()
        .any(|truthy| trimmed.eq_ignore_ascii_case(truthy))
}
