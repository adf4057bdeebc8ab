use crate::errors::Result;
use crate::properties::motif::{Motif, MotifPattern};
use crate::report::writers::{OutputFormat, DEFAULT_OUTPUT};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Settings for one analysis run.
///
/// Can be loaded from a JSON file; any field left out takes its default.
/// ```
/// use protseq::config::AnalysisConfig;
/// let config: AnalysisConfig = serde_json::from_str(r#"{"motifs": ["LV"]}"#).unwrap();
/// assert_eq!(config.output.to_str(), Some("analysis_results.txt"));
/// assert_eq!(config.motifs, vec!["LV".to_string()]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalysisConfig {
    pub output: PathBuf,
    pub format: OutputFormat,
    /// Literal motifs, matched case-insensitively against upper-cased residues.
    pub motifs: Vec<String>,
    /// Regular-expression motifs, matched case-insensitively.
    pub patterns: Vec<String>,
    /// Also search for the N-glycosylation sequon.
    pub glycosylation: bool,
    /// Keep going past sequences that cannot be analysed.
    pub partial: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT),
            format: OutputFormat::Text,
            motifs: Vec::new(),
            patterns: Vec::new(),
            glycosylation: false,
            partial: false,
        }
    }
}

impl AnalysisConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Compiles the configured motifs: literals, then patterns, then the
    /// glycosylation sequon.
    pub fn build_motifs(&self) -> Result<Vec<Motif>> {
        let mut out: Vec<Motif> = self.motifs.iter().map(|m| Motif::literal(m)).collect();
        for pattern in &self.patterns {
            out.push(Motif::pattern(pattern)?);
        }
        if self.glycosylation {
            out.push(Motif::Pattern(MotifPattern::n_glycosylation()));
        }
        Ok(out)
    }
}
