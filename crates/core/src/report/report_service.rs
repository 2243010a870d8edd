//! CSV report writer.
//!
//! All compared pairs go into a single CSV artifact, one titled section per
//! pair. Record lengths vary between title, holding rows, and summary rows,
//! so the writer runs in flexible mode.

use std::path::Path;

use csv::WriterBuilder;
use log::info;

use crate::errors::Result;

use super::ReportSection;

/// Column headers for the matched-holdings table.
const HOLDING_HEADERS: [&str; 2] = ["Common Share", "% of ETF"];

/// Writes all report sections to a single CSV file at `path`.
///
/// Each section is the pair title, the holdings table, then a summary table
/// (`Common Shares` count and the two similarity percentages). Sections are
/// separated by a blank line.
pub fn write_report(sections: &[ReportSection], path: &Path) -> Result<()> {
    let mut writer = WriterBuilder::new().flexible(true).from_path(path)?;

    for (index, section) in sections.iter().enumerate() {
        if index > 0 {
            writer.write_record([""])?;
        }

        writer.write_record([section.title.as_str()])?;
        writer.write_record(HOLDING_HEADERS)?;
        for row in &section.rows {
            writer.write_record([
                row.common_share.as_str(),
                &format!("{:.2}", row.weight_percent),
            ])?;
        }

        writer.write_record([
            "Common Shares",
            section.fund_a_label.as_str(),
            section.fund_b_label.as_str(),
        ])?;
        writer.write_record([
            section.common_share_count.to_string(),
            format!("{:.2}", section.fund_a_similarity_percent),
            format!("{:.2}", section.fund_b_similarity_percent),
        ])?;
    }

    writer.flush()?;
    info!("Wrote {} report section(s) to {}", sections.len(), path.display());

    Ok(())
}
