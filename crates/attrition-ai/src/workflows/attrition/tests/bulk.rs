use super::common::*;
use crate::workflows::attrition::bulk::BulkAggregator;
use crate::workflows::attrition::domain::RiskTier;
use crate::workflows::attrition::intake::EmployeeImporter;
use crate::workflows::attrition::scoring::RuleTableModel;
use rand::rngs::mock::StepRng;

#[test]
fn seeded_aggregators_are_reproducible() {
    let rows = sample_rows();
    let first = BulkAggregator::seeded(RuleTableModel::default(), 42).aggregate(&rows);
    let second = BulkAggregator::seeded(RuleTableModel::default(), 42).aggregate(&rows);

    assert_eq!(first, second);
}

#[test]
fn entries_preserve_input_order_and_identifiers() {
    let rows = sample_rows();
    let mut aggregator = BulkAggregator::from_entropy(RuleTableModel::default());

    for _ in 0..3 {
        let report = aggregator.aggregate(&rows);
        let ids: Vec<&str> = report.entries.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["EMP001", "EMP002", "EMP003", "EMP004", "EMP005"]);
        assert_eq!(report.entries[3].name, "James Wilson");
        assert_eq!(report.entries[3].department, "Marketing");
        assert_eq!(report.total_rows, 5);
        assert_eq!(report.processed_rows, 5);
        assert_eq!(report.tiers.total(), 5);
    }
}

#[test]
fn supplied_fields_bypass_sampling() {
    let mut row = uploaded("EMP010", 1, 0.25);
    row.overtime = Some(true);
    row.work_life_balance = Some(1);
    row.monthly_income = Some(3000.0);

    // Any random source would do; none of it is consulted.
    let mut aggregator = BulkAggregator::new(RuleTableModel::default(), StepRng::new(0, 1));
    let report = aggregator.aggregate(&[row]);

    let entry = &report.entries[0];
    assert_eq!(entry.risk_score, 95);
    assert!(entry.will_leave);
    assert_eq!(report.tiers.high, 1);
}

#[test]
fn out_of_domain_supplied_fields_are_resampled() {
    let mut invalid = uploaded("EMP011", 3, 0.5);
    invalid.work_life_balance = Some(0);
    invalid.monthly_income = Some(-5.0);
    let mut oversized = uploaded("EMP012", 3, 0.5);
    oversized.work_life_balance = Some(9);
    oversized.monthly_income = Some(f64::NAN);

    let sampled = [uploaded("EMP011", 3, 0.5), uploaded("EMP012", 3, 0.5)];
    let expected = BulkAggregator::seeded(RuleTableModel::default(), 21).aggregate(&sampled);
    let report =
        BulkAggregator::seeded(RuleTableModel::default(), 21).aggregate(&[invalid, oversized]);

    assert_eq!(report.entries.len(), 2);
    for (entry, baseline) in report.entries.iter().zip(&expected.entries) {
        assert_eq!(entry.prediction, baseline.prediction);
    }
}

#[test]
fn summary_mirrors_retained_prediction() {
    let report =
        BulkAggregator::seeded(RuleTableModel::default(), 9).aggregate(&sample_rows());

    for entry in &report.entries {
        assert_eq!(entry.risk_score, entry.prediction.risk_score);
        assert_eq!(entry.will_leave, entry.prediction.will_leave);
        assert_eq!(entry.name, entry.prediction.employee_name);
        assert!((5..=95).contains(&entry.risk_score));
    }

    let selected = report.find("EMP002").expect("row retained");
    assert_eq!(selected, &report.entries[1].prediction);
    assert!(report.find("EMP404").is_none());
}

#[test]
fn tier_counts_bucket_scores() {
    let report =
        BulkAggregator::seeded(RuleTableModel::default(), 3).aggregate(&sample_rows());

    let mut expected_high = 0;
    let mut expected_medium = 0;
    let mut expected_low = 0;
    for entry in &report.entries {
        match RiskTier::from_score(entry.risk_score) {
            RiskTier::High => expected_high += 1,
            RiskTier::Medium => expected_medium += 1,
            RiskTier::Low => expected_low += 1,
        }
    }

    assert_eq!(report.tiers.high, expected_high);
    assert_eq!(report.tiers.medium, expected_medium);
    assert_eq!(report.tiers.low, expected_low);
}

#[test]
fn normalized_uploads_score_deterministically() {
    let outcome = EmployeeImporter::from_text(SAMPLE_CSV).expect("import");
    let first =
        BulkAggregator::from_entropy(RuleTableModel::default()).aggregate_import(&outcome);
    let second =
        BulkAggregator::from_entropy(RuleTableModel::default()).aggregate_import(&outcome);

    assert_eq!(first, second);
    let scores: Vec<u8> = first.entries.iter().map(|e| e.risk_score).collect();
    assert_eq!(scores, vec![95, 5, 30]);
    assert_eq!(first.tiers.high, 1);
    assert_eq!(first.tiers.low, 2);
    assert!(first.entries[0].will_leave);
}

#[test]
fn empty_batches_produce_empty_reports() {
    let report = BulkAggregator::seeded(RuleTableModel::default(), 1).aggregate(&[]);
    assert!(report.is_empty());
    assert_eq!(report.tiers.total(), 0);
}
