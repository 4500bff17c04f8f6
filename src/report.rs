//! Plan reports
//!
//! Render a completed questionnaire as plain text or as a JSON document.

use std::fmt::Write as _;
use std::io::Write;

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

use crate::build_info::BuildInfo;
use crate::guidance::{
    gender_considerations, strategy_notes, weekly_split, StrategyNote, EVENT_DAY_LINES,
};
use crate::models::{AthleteProfile, DayTargets, MacroPercentages, NutritionPlan};

/// Report error types
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Write error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ReportResult<T> = Result<T, ReportError>;

/// Output format for a report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "text" | "txt" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

// ============================================================================
// JSON Report
// ============================================================================

/// One day's targets with its macro shares
#[derive(Debug, Serialize)]
pub struct DayReport {
    #[serde(flatten)]
    pub targets: DayTargets,
    pub percentages: MacroPercentages,
}

impl From<DayTargets> for DayReport {
    fn from(targets: DayTargets) -> Self {
        Self {
            percentages: targets.percentages(),
            targets,
        }
    }
}

/// Full report document
#[derive(Debug, Serialize)]
pub struct PlanReport<'a> {
    pub generated_at: DateTime<Utc>,
    pub build: BuildInfo,
    pub profile: &'a AthleteProfile,
    pub plan: &'a NutritionPlan,
    pub training: DayReport,
    pub rest: DayReport,
    pub weekly_split: String,
    pub strategy: Vec<StrategyNote>,
    pub considerations: Vec<String>,
}

impl<'a> PlanReport<'a> {
    pub fn new(profile: &'a AthleteProfile, plan: &'a NutritionPlan, generated_at: DateTime<Utc>) -> Self {
        Self {
            generated_at,
            build: BuildInfo::current(),
            profile,
            plan,
            training: plan.training.into(),
            rest: plan.rest.into(),
            weekly_split: weekly_split(profile),
            strategy: strategy_notes(profile, plan),
            considerations: gender_considerations(profile.gender, plan),
        }
    }
}

// ============================================================================
// Text Report
// ============================================================================

/// Thousands separators for calorie totals ("16,040")
fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

fn write_day(out: &mut String, title: &str, day: &DayTargets) {
    let pct = day.percentages();
    let _ = writeln!(out, "{}", title);
    let _ = writeln!(out, "  {} calories per day", day.calories);
    let _ = writeln!(out, "  Protein: {}g ({}%)", day.protein, pct.protein_percent);
    let _ = writeln!(out, "  Carbs:   {}g ({}%)", day.carbs, pct.carbs_percent);
    let _ = writeln!(out, "  Fat:     {}g ({}%)", day.fat, pct.fat_percent);
    out.push('\n');
}

/// Render the plan as text
pub fn render_text(profile: &AthleteProfile, plan: &NutritionPlan) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "YOUR PERSONALIZED PLAN");
    let _ = writeln!(out, "{} athlete | {}", profile.gender.display_name(), profile.sport);
    let _ = writeln!(
        out,
        "Based on Mifflin-St Jeor equation | Age {} | {} lbs | {}\" tall",
        profile.age.map(|a| a.to_string()).unwrap_or_else(|| "-".to_string()),
        profile.current_weight_lbs.map(|w| w.to_string()).unwrap_or_else(|| "-".to_string()),
        profile.height_inches.map(|h| h.to_string()).unwrap_or_else(|| "-".to_string()),
    );
    out.push('\n');

    let _ = writeln!(out, "BASAL METABOLIC RATE (BMR)");
    let _ = writeln!(out, "  {} calories/day", plan.bmr);
    out.push('\n');

    write_day(&mut out, "TRAINING DAYS", &plan.training);
    write_day(&mut out, "REST DAYS", &plan.rest);

    let _ = writeln!(out, "PARTY/EVENT DAYS");
    let _ = writeln!(out, "  {}", plan.event.guideline);
    for line in EVENT_DAY_LINES {
        let _ = writeln!(out, "  {}", line);
    }
    let _ = writeln!(out, "  Target: ~{} calories", plan.event.base_calories);
    out.push('\n');

    let _ = writeln!(out, "WEEKLY TOTAL");
    let _ = writeln!(out, "  {} calories", group_thousands(plan.weekly_calories));
    let _ = writeln!(out, "  {}", weekly_split(profile));
    out.push('\n');

    let _ = writeln!(out, "STRATEGY");
    for note in strategy_notes(profile, plan) {
        let _ = writeln!(out, "  {}: {}", note.title, note.body);
    }
    out.push('\n');

    let _ = writeln!(out, "{} ATHLETE CONSIDERATIONS", profile.gender.display_name().to_uppercase());
    for line in gender_considerations(profile.gender, plan) {
        let _ = writeln!(out, "  - {}", line);
    }
    out.push('\n');

    let _ = writeln!(out, "Fuel planner {}", BuildInfo::current().summary());

    out
}

/// Write a report in the requested format
pub fn write_report<W: Write>(
    writer: &mut W,
    format: OutputFormat,
    profile: &AthleteProfile,
    plan: &NutritionPlan,
) -> ReportResult<()> {
    match format {
        OutputFormat::Text => {
            writer.write_all(render_text(profile, plan).as_bytes())?;
        }
        OutputFormat::Json => {
            let report = PlanReport::new(profile, plan, Utc::now());
            serde_json::to_writer_pretty(&mut *writer, &report)?;
            writeln!(writer)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Gender;
    use crate::nutrition::compute;
    use chrono::{TimeZone, Weekday};

    fn profile() -> AthleteProfile {
        let mut profile = AthleteProfile::for_calculation(
            Gender::Male,
            Some(45),
            Some(155.0),
            Some(67.0),
            Some(8.0),
            &[Weekday::Mon, Weekday::Wed, Weekday::Fri],
        );
        profile.sport = "triathlon".to_string();
        profile
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!(OutputFormat::from_str("JSON"), Some(OutputFormat::Json));
        assert_eq!(OutputFormat::from_str("text"), Some(OutputFormat::Text));
        assert_eq!(OutputFormat::from_str("pdf"), None);
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(16040), "16,040");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1234567), "1,234,567");
        assert_eq!(group_thousands(-1000), "-1,000");
    }

    #[test]
    fn test_render_text_sections() {
        let profile = profile();
        let plan = compute(&profile);
        let text = render_text(&profile, &plan);

        assert!(text.contains("  1547 calories/day"));
        assert!(text.contains("TRAINING DAYS\n  2668 calories per day"));
        assert!(text.contains("  Protein: 155g (23%)"));
        assert!(text.contains("REST DAYS\n  2009 calories per day"));
        assert!(text.contains("80/20 rule: 80% on-plan choices, 20% enjoyment"));
        assert!(text.contains("Target: ~2339 calories"));
        assert!(text.contains("16,040 calories"));
        assert!(text.contains("3 training days + 4 rest days"));
        assert!(text.contains("MALE ATHLETE CONSIDERATIONS"));
        assert!(text.ends_with(&format!("Fuel planner {}\n", BuildInfo::current().summary())));
    }

    #[test]
    fn test_json_report_fields() {
        let profile = profile();
        let plan = compute(&profile);
        let at = Utc.with_ymd_and_hms(2025, 12, 1, 8, 0, 0).unwrap();
        let report = PlanReport::new(&profile, &plan, at);
        let value = serde_json::to_value(&report).unwrap();

        assert_eq!(value["plan"]["bmr"], 1547);
        assert_eq!(value["plan"]["event"]["base_calories"], 2339);
        assert_eq!(value["training"]["calories"], 2668);
        assert_eq!(value["training"]["percentages"]["fat_percent"], 13);
        assert_eq!(value["profile"]["training_days"][0], "Mon");
        assert_eq!(value["strategy"].as_array().unwrap().len(), 4);
        assert_eq!(value["generated_at"], "2025-12-01T08:00:00Z");
        assert_eq!(value["build"]["version"], env!("CARGO_PKG_VERSION"));
        assert!(value["build"]["compiled_at"].is_string());
    }

    #[test]
    fn test_write_report_json_parses() {
        let profile = profile();
        let plan = compute(&profile);
        let mut buf = Vec::new();
        write_report(&mut buf, OutputFormat::Json, &profile, &plan).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["plan"]["weekly_calories"], 16040);
    }
}
