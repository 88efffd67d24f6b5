//! Summary report generator for shell output.
//!
//! Provides a compact, human-readable summary for terminal usage.

use super::{ReportError, ReportFormat, ReportGenerator};
use crate::model::{FootprintGrade, FootprintScan, RiskLevel};
use std::fmt::Write as _;

/// Apply ANSI color formatting if colored output is enabled.
fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if colored {
        match color {
            "red" => format!("\x1b[31m{text}\x1b[0m"),
            "green" => format!("\x1b[32m{text}\x1b[0m"),
            "yellow" => format!("\x1b[33m{text}\x1b[0m"),
            "cyan" => format!("\x1b[36m{text}\x1b[0m"),
            "bold" => format!("\x1b[1m{text}\x1b[0m"),
            "dim" => format!("\x1b[2m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    } else {
        text.to_string()
    }
}

const fn grade_color(grade: FootprintGrade) -> &'static str {
    match grade {
        FootprintGrade::A | FootprintGrade::B => "green",
        FootprintGrade::C => "yellow",
        FootprintGrade::D | FootprintGrade::F => "red",
    }
}

const fn risk_color(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::Low => "green",
        RiskLevel::Medium => "yellow",
        RiskLevel::High | RiskLevel::Critical => "red",
    }
}

/// Summary reporter for shell output
pub struct SummaryReporter {
    /// Use colored output
    colored: bool,
    /// Recommendations listed per scan
    max_recommendations: usize,
}

impl SummaryReporter {
    /// Create a new summary reporter
    #[must_use]
    pub const fn new() -> Self {
        Self {
            colored: true,
            max_recommendations: 5,
        }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    /// Limit the number of recommendations shown per scan
    #[must_use]
    pub const fn max_recommendations(mut self, max: usize) -> Self {
        self.max_recommendations = max;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }

    fn render_scan(&self, out: &mut String, scan: &FootprintScan) -> Result<(), ReportError> {
        let title = scan
            .user_ref
            .as_deref()
            .map_or_else(|| "Footprint Scan".to_string(), |u| format!("Footprint Scan: {u}"));
        writeln!(out, "{}", self.color(&title, "bold"))?;
        writeln!(out, "{}", self.color("─".repeat(40).as_str(), "dim"))?;

        if scan.scores.insufficient_data {
            writeln!(
                out,
                "{}",
                self.color("Insufficient data: no platform could be scored", "yellow")
            )?;
        } else {
            let grade = format!(
                "{}/100 (grade {})",
                scan.scores.overall,
                scan.grade.letter()
            );
            writeln!(
                out,
                "{} {}",
                self.color("Overall:", "cyan"),
                self.color(&grade, grade_color(scan.grade))
            )?;
            writeln!(
                out,
                "  visibility {}  activity {}  impact {}  expertise {}",
                scan.scores.visibility,
                scan.scores.activity,
                scan.scores.impact,
                scan.scores.expertise
            )?;
        }

        if !scan.results.is_empty() {
            writeln!(out, "{}", self.color("Platforms:", "cyan"))?;
            for result in &scan.results {
                writeln!(
                    out,
                    "  {:<22} {:>3}  ({})",
                    result.score.platform.name(),
                    result.score.value,
                    result.profile.identity()
                )?;
            }
        }

        for missing in &scan.unavailable {
            let detail = missing
                .detail
                .as_deref()
                .map(|d| format!(": {d}"))
                .unwrap_or_default();
            writeln!(
                out,
                "  {}",
                self.color(
                    &format!(
                        "{:<22} unavailable ({}{detail})",
                        missing.platform.name(),
                        missing.reason.name()
                    ),
                    "dim"
                )
            )?;
        }

        let level = scan.privacy.risk_level;
        writeln!(
            out,
            "{} {} ({} finding(s))",
            self.color("Privacy risk:", "cyan"),
            self.color(level.name(), risk_color(level)),
            scan.privacy.risks.len()
        )?;
        for risk in &scan.privacy.risks {
            writeln!(
                out,
                "  [{}] {}",
                risk.severity.name(),
                risk.description
            )?;
        }

        if !scan.recommendations.is_empty() {
            writeln!(out, "{}", self.color("Top recommendations:", "cyan"))?;
            for rec in scan.recommendations.iter().take(self.max_recommendations) {
                writeln!(
                    out,
                    "  {}. {} ({} {}: {} -> {}, impact {}, effort {})",
                    rec.priority,
                    rec.action,
                    rec.platform.name(),
                    rec.sub_metric,
                    rec.current_score,
                    rec.potential_score,
                    rec.impact.name(),
                    rec.effort.name()
                )?;
            }
            let hidden = scan
                .recommendations
                .len()
                .saturating_sub(self.max_recommendations);
            if hidden > 0 {
                writeln!(out, "  {}", self.color(&format!("... and {hidden} more"), "dim"))?;
            }
        }

        Ok(())
    }
}

impl Default for SummaryReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for SummaryReporter {
    fn generate(&self, scans: &[FootprintScan]) -> Result<String, ReportError> {
        let mut out = String::new();
        for (i, scan) in scans.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            self.render_scan(&mut out, scan)?;
        }
        Ok(out.trim_end().to_string())
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Summary
    }
}
