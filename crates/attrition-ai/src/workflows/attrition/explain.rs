use super::domain::{ChartEntry, RiskFactor};
use std::cmp::Ordering;

/// Factors surfaced in the narrative explanation.
pub const MAX_REASONS: usize = 5;
/// Bars drawn in the feature-impact chart.
pub const MAX_CHART_ENTRIES: usize = 6;

/// Ranked, presentation-sized views of a factor list.
#[derive(Debug, Clone, PartialEq)]
pub struct Explanation {
    pub reasons: Vec<RiskFactor>,
    pub chart: Vec<ChartEntry>,
}

/// Order factors by descending importance (stable for ties) and cut both views.
pub fn rank_factors(mut factors: Vec<RiskFactor>) -> Explanation {
    factors.sort_by(|a, b| {
        b.importance
            .partial_cmp(&a.importance)
            .unwrap_or(Ordering::Equal)
    });

    let chart = factors
        .iter()
        .take(MAX_CHART_ENTRIES)
        .map(chart_entry)
        .collect();

    factors.truncate(MAX_REASONS);

    Explanation {
        reasons: factors,
        chart,
    }
}

fn chart_entry(factor: &RiskFactor) -> ChartEntry {
    ChartEntry {
        label: short_label(&factor.factor),
        impact: impact_magnitude(factor.importance),
        direction: factor.direction,
    }
}

fn short_label(name: &str) -> String {
    name.split_whitespace().take(2).collect::<Vec<_>>().join(" ")
}

fn impact_magnitude(importance: f64) -> u8 {
    (importance * 100.0).round().clamp(0.0, 100.0) as u8
}
