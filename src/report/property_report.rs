use crate::errors::{ProtSeqError, Result};
use crate::properties::motif::Motif;
use crate::properties::sequence_properties::{
    count_charged, count_hydrophobic, length, molecular_weight,
};
use crate::protein::fasta::SequenceCollection;
use log::info;
use rayon::prelude::*;
use serde::Serialize;
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PropertyReport {
    pub length: usize,
    pub molecular_weight: f64,
    pub hydrophobic_count: usize,
    pub positive_charge: usize,
    pub negative_charge: usize,
}

impl PropertyReport {
    pub fn from_sequence(sequence: &str) -> Result<Self> {
        let (positive_charge, negative_charge) = count_charged(sequence);
        Ok(PropertyReport {
            length: length(sequence),
            molecular_weight: molecular_weight(sequence)?,
            hydrophobic_count: count_hydrophobic(sequence),
            positive_charge,
            negative_charge,
        })
    }

    pub fn net_charge(&self) -> i64 {
        self.positive_charge as i64 - self.negative_charge as i64
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MotifHits {
    pub motif: String,
    pub positions: Vec<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SequenceReport {
    pub identifier: String,
    #[serde(flatten)]
    pub properties: PropertyReport,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub motif_hits: Vec<MotifHits>,
}

impl SequenceReport {
    pub fn new(identifier: &str, sequence: &str, motifs: &[Motif]) -> Result<Self> {
        let properties = PropertyReport::from_sequence(sequence)?;
        let motif_hits = motifs
            .iter()
            .map(|motif| MotifHits {
                motif: motif.to_string(),
                positions: motif.find(sequence),
            })
            .collect();
        Ok(SequenceReport {
            identifier: identifier.to_string(),
            properties,
            motif_hits,
        })
    }
}

/// Reports in the same order as the collection they were built from.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub sequences: Vec<SequenceReport>,
}

impl AnalysisReport {
    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }

    pub fn get(&self, identifier: &str) -> Option<&SequenceReport> {
        self.sequences.iter().find(|x| x.identifier == identifier)
    }
}

#[derive(Debug)]
pub struct FailedSequence {
    pub identifier: String,
    pub error: ProtSeqError,
}

/// Outcome of [`build_report_partial`]: everything that could be computed
/// plus one entry per sequence that could not.
#[derive(Debug, Default)]
pub struct PartialReport {
    pub report: AnalysisReport,
    pub failures: Vec<FailedSequence>,
}

impl PartialReport {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Computes the properties of every sequence.
///
/// Fails if any sequence cannot be analysed; the returned error names the
/// first such sequence in collection order.
pub fn build_report(collection: &SequenceCollection, motifs: &[Motif]) -> Result<AnalysisReport> {
    let start = Instant::now();
    let results: Vec<Result<SequenceReport>> = collection
        .records()
        .par_iter()
        .map(|record| {
            SequenceReport::new(&record.identifier, &record.residues, motifs)
                .map_err(|e| e.for_sequence(&record.identifier))
        })
        .collect();

    let sequences = results
        .into_iter()
        .collect::<Result<Vec<_>>>()
        .map_err(|e| {
            log::error!("Failed to analyse {}", e);
            e
        })?;

    info!(
        "Analysed {} sequences in {:?}",
        sequences.len(),
        start.elapsed()
    );
    Ok(AnalysisReport { sequences })
}

/// Like [`build_report`] but keeps going past bad sequences.
pub fn build_report_partial(collection: &SequenceCollection, motifs: &[Motif]) -> PartialReport {
    let start = Instant::now();
    let results: Vec<(String, Result<SequenceReport>)> = collection
        .records()
        .par_iter()
        .map(|record| {
            (
                record.identifier.clone(),
                SequenceReport::new(&record.identifier, &record.residues, motifs),
            )
        })
        .collect();

    let mut out = PartialReport::default();
    for (identifier, result) in results {
        match result {
            Ok(x) => out.report.sequences.push(x),
            Err(error) => {
                log::warn!("Skipping '{}': {}", identifier, error);
                out.failures.push(FailedSequence { identifier, error });
            }
        }
    }
    info!(
        "Analysed {} sequences ({} failed) in {:?}",
        out.report.len(),
        out.failures.len(),
        start.elapsed()
    );
    out
}
