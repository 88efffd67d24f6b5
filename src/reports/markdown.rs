//! Markdown report generator.

use super::escape::{escape_markdown_inline, escape_markdown_table};
use super::{ReportError, ReportFormat, ReportGenerator};
use crate::model::{Dimension, FootprintScan, Severity};
use std::fmt::Write as _;

/// Markdown report generator
pub struct MarkdownReporter {
    /// Include the per-sub-metric breakdown tables
    include_breakdown: bool,
}

impl MarkdownReporter {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            include_breakdown: true,
        }
    }

    #[must_use]
    pub const fn include_breakdown(mut self, include: bool) -> Self {
        self.include_breakdown = include;
        self
    }

    fn render_scan(&self, md: &mut String, scan: &FootprintScan) -> std::fmt::Result {
        match scan.user_ref.as_deref() {
            Some(user) => writeln!(md, "## Footprint Scan: {}\n", escape_markdown_inline(user))?,
            None => writeln!(md, "## Footprint Scan\n")?,
        }
        writeln!(
            md,
            "Scanned at {} with scoring engine {} (fingerprint `{}`)\n",
            scan.scanned_at.to_rfc3339(),
            scan.engine_version,
            scan.scoring_fingerprint
        )?;

        if scan.scores.insufficient_data {
            writeln!(md, "> **Insufficient data:** no platform could be scored.\n")?;
        } else if scan.is_partial() {
            writeln!(
                md,
                "> **Partial scan:** {} platform(s) unavailable.\n",
                scan.unavailable.len()
            )?;
        }

        // Scores
        writeln!(md, "### Scores\n")?;
        writeln!(md, "| Dimension | Score |")?;
        writeln!(md, "|-----------|-------|")?;
        writeln!(
            md,
            "| **Overall** | **{}** (grade {}, {}) |",
            scan.scores.overall,
            scan.grade.letter(),
            scan.grade.description()
        )?;
        for dimension in Dimension::all() {
            writeln!(md, "| {} | {} |", dimension, scan.scores.get(*dimension))?;
        }
        writeln!(md)?;

        // Platforms
        writeln!(md, "### Platforms\n")?;
        writeln!(md, "| Platform | Account | Score | Completeness |")?;
        writeln!(md, "|----------|---------|-------|--------------|")?;
        for result in &scan.results {
            writeln!(
                md,
                "| {} | {} | {} | {:.0}% |",
                result.score.platform.name(),
                escape_markdown_table(result.profile.identity()),
                result.score.value,
                result.profile.completeness() * 100.0
            )?;
        }
        for missing in &scan.unavailable {
            let detail = missing
                .detail
                .as_deref()
                .map(|d| format!(": {}", escape_markdown_table(d)))
                .unwrap_or_default();
            writeln!(
                md,
                "| {} | _unavailable ({}{detail})_ | - | - |",
                missing.platform.name(),
                missing.reason.name()
            )?;
        }
        writeln!(md)?;

        if self.include_breakdown {
            for result in &scan.results {
                writeln!(md, "#### {} breakdown\n", result.score.platform.name())?;
                writeln!(md, "| Sub-metric | Score |")?;
                writeln!(md, "|------------|-------|")?;
                for (name, value) in &result.score.sub_metric_breakdown {
                    writeln!(md, "| {} | {value} |", escape_markdown_table(name))?;
                }
                writeln!(md)?;
            }
        }

        // Privacy
        writeln!(
            md,
            "### Privacy (risk level: {})\n",
            scan.privacy.risk_level.name()
        )?;
        if scan.privacy.risks.is_empty() {
            writeln!(md, "No privacy findings.\n")?;
        } else {
            writeln!(
                md,
                "{} high, {} medium, {} low\n",
                scan.privacy.count_by_severity(Severity::High),
                scan.privacy.count_by_severity(Severity::Medium),
                scan.privacy.count_by_severity(Severity::Low)
            )?;
            writeln!(md, "| Severity | Platform | Finding | Recommendation |")?;
            writeln!(md, "|----------|----------|---------|----------------|")?;
            for risk in &scan.privacy.risks {
                writeln!(
                    md,
                    "| {} | {} | {} | {} |",
                    risk.severity.name(),
                    risk.platform.name(),
                    escape_markdown_table(&risk.description),
                    escape_markdown_table(&risk.recommendation)
                )?;
            }
            writeln!(md)?;
        }

        // Recommendations
        writeln!(md, "### Recommendations\n")?;
        if scan.recommendations.is_empty() {
            writeln!(md, "Nothing to recommend.\n")?;
        } else {
            for rec in &scan.recommendations {
                writeln!(
                    md,
                    "{}. **{}** ({} {}, {} -> {}, impact {}, effort {})",
                    rec.priority,
                    escape_markdown_inline(&rec.action),
                    rec.platform.name(),
                    escape_markdown_inline(&rec.sub_metric),
                    rec.current_score,
                    rec.potential_score,
                    rec.impact.name(),
                    rec.effort.name()
                )?;
                writeln!(md, "   - {}", escape_markdown_inline(&rec.rationale))?;
            }
            writeln!(md)?;
        }

        Ok(())
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for MarkdownReporter {
    fn generate(&self, scans: &[FootprintScan]) -> Result<String, ReportError> {
        let mut md = String::new();
        writeln!(md, "# Digital Footprint Report\n")?;
        for scan in scans {
            self.render_scan(&mut md, scan)?;
        }
        Ok(md)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Markdown
    }
}
