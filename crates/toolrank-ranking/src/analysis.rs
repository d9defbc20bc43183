//! Change categories and the factor that drove a tool's score change.

use toolrank_core::models::{
    ChangeAnalysis, ChangeCategory, Factor, FactorScores, Movement, WeightConfiguration,
};

const MAJOR_MOVE: i64 = 5;

/// Category from the position delta.
pub fn categorize(movement: &Movement) -> ChangeCategory {
    match movement.change {
        None => ChangeCategory::NewEntry,
        Some(d) if d >= MAJOR_MOVE => ChangeCategory::MajorRise,
        Some(d) if d >= 1 => ChangeCategory::Rise,
        Some(d) if d <= -MAJOR_MOVE => ChangeCategory::MajorDecline,
        Some(d) if d <= -1 => ChangeCategory::Decline,
        Some(_) => ChangeCategory::Stable,
    }
}

/// Factor whose weighted score change is largest in magnitude, with its
/// unweighted signed change. Earlier factors win ties. `None` when nothing
/// moved.
pub fn primary_factor(
    weights: &WeightConfiguration,
    current: &FactorScores,
    previous: &FactorScores,
) -> Option<(Factor, f64)> {
    let mut best: Option<(Factor, f64, f64)> = None;
    for factor in Factor::ALL {
        let delta = current.get(factor) - previous.get(factor);
        let weighted = (weights.get(factor) * delta).abs();
        if !weighted.is_finite() || weighted == 0.0 {
            continue;
        }
        if best.map_or(true, |(_, w, _)| weighted > w) {
            best = Some((factor, weighted, delta));
        }
    }
    best.map(|(factor, _, delta)| (factor, delta))
}

/// Inputs for one tool's change analysis.
pub struct ChangeInput<'r> {
    pub tool_name: &'r str,
    pub position: u32,
    pub score: f64,
    pub factor_scores: &'r FactorScores,
    pub movement: &'r Movement,
    /// Previous score and factor scores, when the tool was ranked before.
    pub previous: Option<(f64, &'r FactorScores)>,
}

pub fn analyze(weights: &WeightConfiguration, input: ChangeInput<'_>) -> ChangeAnalysis {
    let category = categorize(input.movement);
    let Some((previous_score, previous_factors)) = input.previous else {
        return ChangeAnalysis {
            category,
            score_change: None,
            primary_factor: None,
            primary_factor_change: None,
            narrative: format!("{} entered the ranking at #{}", input.tool_name, input.position),
        };
    };

    let primary = primary_factor(weights, input.factor_scores, previous_factors);
    let mut narrative = match (category, input.movement.change) {
        (ChangeCategory::MajorRise | ChangeCategory::Rise, Some(d)) => {
            format!("{} rose {} to #{}", input.tool_name, places(d), input.position)
        }
        (ChangeCategory::MajorDecline | ChangeCategory::Decline, Some(d)) => {
            format!("{} fell {} to #{}", input.tool_name, places(-d), input.position)
        }
        _ => format!("{} held #{}", input.tool_name, input.position),
    };
    if let Some((factor, delta)) = primary {
        narrative.push_str(&format!(", driven by {} ({:+.1})", factor.label().to_lowercase(), delta));
    }

    ChangeAnalysis {
        category,
        score_change: Some(input.score - previous_score),
        primary_factor: primary.map(|(f, _)| f),
        primary_factor_change: primary.map(|(_, d)| d),
        narrative,
    }
}

fn places(n: i64) -> String {
    if n == 1 {
        "1 place".to_string()
    } else {
        format!("{n} places")
    }
}
