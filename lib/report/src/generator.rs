//! Decision-support report rendering.
//!
//! Lays out a Markdown document from a finished [`RetrievalSummary`]. The
//! renderer is a pure consumer: all statistics arrive computed, and only
//! display rounding happens here.

use chrono::Local;
use creditmem_core::{ApplicationRecord, Result, RetrievalSummary};
use std::fmt::Write as _;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Renders the similarity-based assessment document.
#[derive(Debug, Default)]
pub struct ReportGenerator;

impl ReportGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Write the report to `output_path`.
    ///
    /// `chart_path` is an optional pre-generated outcome chart; when the
    /// path is absent or the file does not exist the chart section is
    /// skipped rather than failing the report.
    pub fn generate(
        &self,
        output_path: impl AsRef<Path>,
        record: &ApplicationRecord,
        summary: &RetrievalSummary,
        chart_path: Option<&Path>,
    ) -> Result<()> {
        let output_path = output_path.as_ref();
        let document = self.render(record, summary, chart_path);
        fs::write(output_path, document)?;
        info!(report = %output_path.display(), "decision report written");
        Ok(())
    }

    fn render(
        &self,
        record: &ApplicationRecord,
        summary: &RetrievalSummary,
        chart_path: Option<&Path>,
    ) -> String {
        let mut doc = String::new();

        writeln!(
            doc,
            "# Credit Decision Memory – Similarity-Based Assessment\n"
        )
        .unwrap();
        writeln!(doc, "**Date:** {}  ", Local::now().format("%d %B %Y")).unwrap();
        writeln!(doc, "**Team:** Weavers\n").unwrap();

        writeln!(doc, "## 1. Loan Application Overview\n").unwrap();
        writeln!(doc, "| | |").unwrap();
        writeln!(doc, "|---|---|").unwrap();
        writeln!(doc, "| Monthly Income | ${:.0} |", record.monthly_income).unwrap();
        writeln!(
            doc,
            "| Loan Amount Requested | ${:.0} |",
            record.loan_amount_requested
        )
        .unwrap();
        writeln!(
            doc,
            "| Loan Tenure (months) | {} |",
            record.loan_tenure_months
        )
        .unwrap();
        writeln!(doc, "| Credit Score | {} |", record.cibil_score).unwrap();
        writeln!(doc, "| Loan Purpose | {} |\n", record.purpose_of_loan).unwrap();

        writeln!(doc, "## 2. Similarity-Based Evidence\n").unwrap();
        if summary.total_cases == 0 {
            writeln!(
                doc,
                "The system found **no historical loan cases** with similar \
                 financial characteristics. Confidence in this assessment is \
                 low due to insufficient history; human review should rely on \
                 other evidence.\n"
            )
            .unwrap();
        } else {
            writeln!(
                doc,
                "The system retrieved **{}** historical loan cases with \
                 similar financial characteristics (income, loan size, credit \
                 score, and purpose). This analysis relies on historical \
                 outcomes rather than predictive modeling.\n",
                summary.total_cases
            )
            .unwrap();

            writeln!(doc, "| Outcome | Percentage of Similar Cases |").unwrap();
            writeln!(doc, "|---|---|").unwrap();
            writeln!(doc, "| Repaid | {:.1}% |", summary.repaid_pct).unwrap();
            writeln!(doc, "| Defaulted | {:.1}% |", summary.defaulted_pct).unwrap();
            writeln!(doc, "| In Progress | {:.1}% |\n", summary.in_progress_pct).unwrap();

            writeln!(
                doc,
                "Fraud indicators among similar cases: **{:.0}**. Average \
                 similarity score: **{:.3}**.\n",
                summary.fraud_cases, summary.avg_similarity
            )
            .unwrap();
        }

        match chart_path {
            Some(path) if path.exists() => {
                writeln!(doc, "## 3. Outcome Distribution Visualization\n").unwrap();
                writeln!(doc, "![Outcome distribution]({})\n", path.display()).unwrap();
            }
            Some(path) => {
                debug!(chart = %path.display(), "chart not found, skipping section");
            }
            None => {}
        }

        writeln!(doc, "## 4. Interpretation & Decision Support\n").unwrap();
        writeln!(
            doc,
            "A higher proportion of repaid loans among similar historical \
             cases suggests lower observed repayment risk. Conversely, \
             elevated default or fraud presence indicates increased caution. \
             This report is intended to support human decision-making and \
             does not automate approval or rejection."
        )
        .unwrap();

        doc
    }
}
