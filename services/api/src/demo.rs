use crate::infra::InMemorySessionStore;
use attrition_ai::config::ScoringConfig;
use attrition_ai::error::AppError;
use attrition_ai::workflows::attrition::{
    AttritionPredictor, AttritionService, BulkAggregator, BulkReport, EmployeeId,
    ManualSubmission, PredictionResult, RuleTableModel, UploadedEmployee,
};
use clap::Args;
use std::fs::File;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct PredictArgs {
    #[arg(long, default_value = "")]
    pub(crate) name: String,
    #[arg(long)]
    pub(crate) age: u32,
    #[arg(long)]
    pub(crate) department: String,
    #[arg(long)]
    pub(crate) job_role: String,
    #[arg(long)]
    pub(crate) years_at_company: u32,
    #[arg(long)]
    pub(crate) monthly_income: f64,
    /// Job satisfaction on the 1-4 scale
    #[arg(long)]
    pub(crate) job_satisfaction: u8,
    /// Work-life balance on the 1-4 scale
    #[arg(long)]
    pub(crate) work_life_balance: u8,
    #[arg(long)]
    pub(crate) overtime: bool,
    #[arg(long, default_value_t = 10.0)]
    pub(crate) distance_from_home: f64,
    #[arg(long, default_value_t = 1)]
    pub(crate) num_companies_worked: u32,
}

impl From<PredictArgs> for ManualSubmission {
    fn from(args: PredictArgs) -> Self {
        ManualSubmission {
            id: None,
            name: args.name,
            age: args.age,
            department: args.department,
            job_role: args.job_role,
            years_at_company: args.years_at_company,
            monthly_income: args.monthly_income,
            job_satisfaction: args.job_satisfaction,
            work_life_balance: args.work_life_balance,
            overtime: args.overtime,
            distance_from_home: args.distance_from_home,
            num_companies_worked: args.num_companies_worked,
        }
    }
}

#[derive(Args, Debug)]
pub(crate) struct UploadArgs {
    /// Employee CSV export to score
    #[arg(long)]
    pub(crate) csv: PathBuf,
    /// Print the full explanation for one employee id (e.g. EMP003)
    #[arg(long)]
    pub(crate) select: Option<String>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Seed for the fields synthesized for the sample batch
    #[arg(long)]
    pub(crate) seed: Option<u64>,
    /// Print the full explanation for one employee id (e.g. EMP002)
    #[arg(long)]
    pub(crate) select: Option<String>,
}

pub(crate) fn run_predict(args: PredictArgs) -> Result<(), AppError> {
    let record = ManualSubmission::from(args)
        .validate()
        .map_err(|err| AppError::Service(err.into()))?;
    let predictor = AttritionPredictor::new(RuleTableModel::default());

    println!("Individual attrition assessment");
    render_prediction(&predictor.predict(&record));
    Ok(())
}

pub(crate) fn run_upload(args: UploadArgs) -> Result<(), AppError> {
    let service = AttritionService::new(
        Arc::new(InMemorySessionStore::default()),
        Arc::new(RuleTableModel::default()),
        &ScoringConfig::default(),
    );

    let file = File::open(&args.csv)?;
    let report = service.upload_reader(file)?;
    println!("Bulk attrition analysis: {}", args.csv.display());
    render_bulk_report(&report);

    if let Some(employee_id) = args.select {
        let prediction = service.select(&employee_id)?;
        println!("\nSelected employee {}", employee_id);
        render_prediction(&prediction);
    }
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let model = RuleTableModel::default();
    let mut aggregator = match args.seed {
        Some(seed) => BulkAggregator::seeded(model, seed),
        None => BulkAggregator::from_entropy(model),
    };

    println!("Attrition demo batch (unsupplied fields are synthesized)");
    let report = aggregator.aggregate(&sample_batch());
    render_bulk_report(&report);

    if let Some(employee_id) = args.select {
        match report.find(&employee_id) {
            Some(prediction) => {
                println!("\nSelected employee {}", employee_id);
                render_prediction(prediction);
            }
            None => println!("\nNo employee {} in the demo batch", employee_id),
        }
    }
    Ok(())
}

fn sample_batch() -> Vec<UploadedEmployee> {
    [
        ("EMP001", "Sarah Johnson", "Sales", 3, 0.4),
        ("EMP002", "Michael Chen", "Engineering", 5, 0.8),
        ("EMP003", "Emily Davis", "HR", 2, 0.6),
        ("EMP004", "James Wilson", "Marketing", 1, 0.3),
        ("EMP005", "Lisa Anderson", "Finance", 7, 0.9),
    ]
    .into_iter()
    .map(|(id, name, department, tenure, satisfaction)| UploadedEmployee {
        id: EmployeeId(id.to_string()),
        name: name.to_string(),
        department: department.to_string(),
        tenure,
        satisfaction,
        overtime: None,
        work_life_balance: None,
        monthly_income: None,
    })
    .collect()
}

fn render_prediction(prediction: &PredictionResult) {
    let verdict = if prediction.will_leave {
        "likely to leave"
    } else {
        "likely to stay"
    };
    println!(
        "- {}: {} (risk score {}, {})",
        prediction.employee_name,
        verdict,
        prediction.risk_score,
        prediction.tier().label()
    );

    if prediction.reasons.is_empty() {
        println!("  Key factors: none fired");
    } else {
        println!("  Key factors");
        for reason in &prediction.reasons {
            println!(
                "    - {} [{} | importance {:.2}]: {}",
                reason.factor,
                reason.direction.label(),
                reason.importance,
                reason.description
            );
        }
    }

    if !prediction.chart.is_empty() {
        println!("  Feature impact");
        for entry in &prediction.chart {
            println!("    {:<20} {:>+4}", entry.label, entry.signed_impact());
        }
    }
}

fn render_bulk_report(report: &BulkReport) {
    println!(
        "Processed {} of {} rows",
        report.processed_rows, report.total_rows
    );
    println!(
        "Risk tiers: {} high | {} medium | {} low",
        report.tiers.high, report.tiers.medium, report.tiers.low
    );

    if report.is_empty() {
        println!("No employees scored");
        return;
    }

    println!("\nEmployees");
    for entry in &report.entries {
        println!(
            "  {:<8} {:<24} {:<24} {:>3} {}",
            entry.id,
            entry.name,
            entry.department,
            entry.risk_score,
            if entry.will_leave { "leave" } else { "stay" }
        );
    }
}
