use super::super::domain::{EmployeeRecord, ImpactDirection, RiskFactor};
use super::config::RuleTableConfig;

struct FactorTemplate {
    name: &'static str,
    direction: ImpactDirection,
    description: &'static str,
    importance: f64,
}

impl FactorTemplate {
    fn to_factor(&self) -> RiskFactor {
        RiskFactor {
            factor: self.name.to_string(),
            direction: self.direction,
            description: self.description.to_string(),
            importance: self.importance,
        }
    }
}

const OVERTIME: FactorTemplate = FactorTemplate {
    name: "Overtime Required",
    direction: ImpactDirection::IncreasesRisk,
    description: "Employees working overtime regularly are 2.5x more likely to leave due to burnout and work-life imbalance.",
    importance: 0.28,
};

const LOW_SATISFACTION: FactorTemplate = FactorTemplate {
    name: "Low Job Satisfaction",
    direction: ImpactDirection::IncreasesRisk,
    description: "Current satisfaction level is below average, indicating potential disengagement with role responsibilities.",
    importance: 0.22,
};

const HIGH_SATISFACTION: FactorTemplate = FactorTemplate {
    name: "High Job Satisfaction",
    direction: ImpactDirection::DecreasesRisk,
    description: "Strong satisfaction indicates alignment with job expectations and company culture.",
    importance: 0.20,
};

const SHORT_TENURE: FactorTemplate = FactorTemplate {
    name: "Short Tenure",
    direction: ImpactDirection::IncreasesRisk,
    description: "Employees with less than 2 years typically have lower loyalty bonds and more external opportunities.",
    importance: 0.18,
};

const LONG_TENURE: FactorTemplate = FactorTemplate {
    name: "Long Tenure",
    direction: ImpactDirection::DecreasesRisk,
    description: "Extended tenure suggests strong organizational commitment and established relationships.",
    importance: 0.22,
};

const LOW_INCOME: FactorTemplate = FactorTemplate {
    name: "Below-Market Compensation",
    direction: ImpactDirection::IncreasesRisk,
    description: "Salary is below industry average for this role, making external offers more attractive.",
    importance: 0.15,
};

const POOR_BALANCE: FactorTemplate = FactorTemplate {
    name: "Poor Work-Life Balance",
    direction: ImpactDirection::IncreasesRisk,
    description: "Current balance score indicates stress factors that may lead to seeking better opportunities.",
    importance: 0.12,
};

/// Evaluate every rule once against the record. Factors are returned in table order.
pub(crate) fn score_record(
    record: &EmployeeRecord,
    config: &RuleTableConfig,
) -> (Vec<RiskFactor>, i32) {
    let mut factors = Vec::new();
    let mut raw_score = config.base_score;

    if record.overtime {
        factors.push(OVERTIME.to_factor());
        raw_score += config.overtime_delta;
    }

    if record.job_satisfaction <= config.low_satisfaction_max {
        factors.push(LOW_SATISFACTION.to_factor());
        raw_score += config.low_satisfaction_delta;
    } else if record.job_satisfaction >= config.high_satisfaction_min {
        factors.push(HIGH_SATISFACTION.to_factor());
        raw_score += config.high_satisfaction_delta;
    }

    if record.years_at_company < config.short_tenure_below {
        factors.push(SHORT_TENURE.to_factor());
        raw_score += config.short_tenure_delta;
    } else if record.years_at_company >= config.long_tenure_min {
        factors.push(LONG_TENURE.to_factor());
        raw_score += config.long_tenure_delta;
    }

    if record.monthly_income < config.low_income_below {
        factors.push(LOW_INCOME.to_factor());
        raw_score += config.low_income_delta;
    }

    if record.work_life_balance <= config.poor_balance_max {
        factors.push(POOR_BALANCE.to_factor());
        raw_score += config.poor_balance_delta;
    }

    (factors, raw_score)
}

pub(crate) fn clamp_score(raw_score: i32, config: &RuleTableConfig) -> u8 {
    let clamped = raw_score.clamp(i32::from(config.min_score), i32::from(config.max_score));
    u8::try_from(clamped).unwrap_or(config.max_score)
}
