use super::property_report::{AnalysisReport, SequenceReport};
use crate::errors::Result;
use csv::Writer;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::io::Write as _;
use std::path::Path;
use std::time::Instant;

pub const DEFAULT_OUTPUT: &str = "analysis_results.txt";
pub const BANNER_TITLE: &str = "Protein Sequence Analysis Results";
pub const RULE_WIDTH: usize = 70;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Csv,
    Json,
}

/// The indented block used both in the report file and on the console.
impl Display for SequenceReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let props = &self.properties;
        writeln!(f, "Sequence: {}", self.identifier)?;
        writeln!(f, "  Length: {} aa", props.length)?;
        writeln!(f, "  Molecular Weight: {:.2} Da", props.molecular_weight)?;
        writeln!(f, "  Hydrophobic residues: {}", props.hydrophobic_count)?;
        writeln!(f, "  Positive charges: {}", props.positive_charge)?;
        writeln!(f, "  Negative charges: {}", props.negative_charge)?;
        writeln!(f, "  Net charge: {}", props.net_charge())?;
        for hits in &self.motif_hits {
            writeln!(f, "  Motif {}: {:?}", hits.motif, hits.positions)?;
        }
        Ok(())
    }
}

impl SequenceReport {
    fn get_csv_labels() -> [&'static str; 8] {
        [
            "identifier",
            "length",
            "molecular_weight",
            "hydrophobic_count",
            "positive_charge",
            "negative_charge",
            "net_charge",
            "motif_hits",
        ]
    }

    fn as_csv_record(&self) -> [String; 8] {
        let props = &self.properties;
        let motif_hits = self
            .motif_hits
            .iter()
            .map(|x| format!("{}:{:?}", x.motif, x.positions))
            .collect::<Vec<String>>()
            .join(";");
        [
            self.identifier.clone(),
            props.length.to_string(),
            format!("{:.2}", props.molecular_weight),
            props.hydrophobic_count.to_string(),
            props.positive_charge.to_string(),
            props.negative_charge.to_string(),
            props.net_charge().to_string(),
            motif_hits,
        ]
    }
}

pub fn render_text(report: &AnalysisReport) -> String {
    let mut out = String::new();
    out.push_str(BANNER_TITLE);
    out.push('\n');
    out.push_str(&"=".repeat(RULE_WIDTH));
    out.push_str("\n\n");
    for sequence in &report.sequences {
        out.push_str(&sequence.to_string());
        out.push('\n');
    }
    out
}

pub fn write_results_to_text<P: AsRef<Path>>(report: &AnalysisReport, out_path: P) -> Result<()> {
    std::fs::write(out_path.as_ref(), render_text(report))?;
    Ok(())
}

pub fn write_results_to_csv<P: AsRef<Path>>(report: &AnalysisReport, out_path: P) -> Result<()> {
    let mut writer = Writer::from_path(out_path.as_ref())?;

    // Write the headers
    writer.write_record(SequenceReport::get_csv_labels())?;

    for sequence in &report.sequences {
        writer.write_record(sequence.as_csv_record())?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_results_to_json<P: AsRef<Path>>(report: &AnalysisReport, out_path: P) -> Result<()> {
    let file = std::fs::File::create(out_path.as_ref())?;
    let mut writer = std::io::BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, report)?;
    writer.flush()?;
    Ok(())
}

pub fn write_results<P: AsRef<Path>>(
    report: &AnalysisReport,
    out_path: P,
    format: OutputFormat,
) -> Result<()> {
    let start = Instant::now();
    match format {
        OutputFormat::Text => write_results_to_text(report, out_path.as_ref())?,
        OutputFormat::Csv => write_results_to_csv(report, out_path.as_ref())?,
        OutputFormat::Json => write_results_to_json(report, out_path.as_ref())?,
    }
    log::info!(
        "Writing took {:?} -> {:?}",
        start.elapsed(),
        out_path.as_ref()
    );
    Ok(())
}
