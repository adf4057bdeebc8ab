use super::models::{SequenceRecord, SequenceRecordBuilder};
use crate::errors::{ProtSeqError, Result};
use log::*;
use std::collections::HashMap;
use std::fmt::Display;
use std::path::Path;
use std::time::Instant;

/// Number of residues shown per record by [`FastaSummary`].
pub const PREVIEW_RESIDUES: usize = 50;

/// Insertion-ordered mapping from identifier to residues.
///
/// Identifiers are unique. When a header repeats, the later record replaces
/// the residues of the earlier one but keeps its position.
#[derive(Debug, Clone, Default)]
pub struct SequenceCollection {
    records: Vec<SequenceRecord>,
    index: HashMap<String, usize>,
}

impl SequenceCollection {
    /// Parses FASTA text.
    ///
    /// Blank lines are skipped, lines are trimmed (so `\r\n` endings are
    /// fine) and sequence lines are upper-cased and concatenated onto the
    /// most recent header.
    ///
    /// Example:
    /// ```
    /// use protseq::protein::fasta::SequenceCollection;
    /// let fasta = ">p1\nmkv\nLLA\n>p2\nDE\n";
    /// let collection = SequenceCollection::from_fasta(fasta).unwrap();
    /// assert_eq!(collection.len(), 2);
    /// assert_eq!(collection.get("p1"), Some("MKVLLA"));
    /// ```
    pub fn from_fasta(fasta: &str) -> Result<SequenceCollection> {
        let st = Instant::now();
        let mut builders: Vec<SequenceRecordBuilder> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut current: Option<usize> = None;

        for (line_num, line) in fasta.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            if let Some(header) = line.strip_prefix('>') {
                let identifier = header.trim();
                let slot = match index.get(identifier) {
                    Some(&existing) => {
                        warn!(
                            "Duplicate identifier '{}' at line {}, discarding earlier residues",
                            identifier,
                            line_num + 1
                        );
                        builders[existing].reset();
                        existing
                    }
                    None => {
                        builders.push(SequenceRecordBuilder::new(identifier));
                        index.insert(identifier.to_string(), builders.len() - 1);
                        builders.len() - 1
                    }
                };
                current = Some(slot);
                continue;
            }

            match current {
                Some(slot) => builders[slot].append_sequence(line),
                None => {
                    return Err(ProtSeqError::Parse {
                        line: line_num + 1,
                        msg: "sequence data precedes header".to_string(),
                    })
                }
            }
        }

        let records: Vec<SequenceRecord> = builders.into_iter().map(|b| b.build()).collect();
        debug!("Parsed {} records in {:?}", records.len(), st.elapsed());
        Ok(SequenceCollection { records, index })
    }

    /// Reads and parses a FASTA file.
    ///
    /// A missing file is reported as [`ProtSeqError::FileNotFound`] so callers
    /// can tell it apart from other I/O failures.
    pub fn from_fasta_file<P: AsRef<Path>>(file: P) -> Result<SequenceCollection> {
        let path = file.as_ref();
        let fasta = match std::fs::read_to_string(path) {
            Ok(fasta) => fasta,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(ProtSeqError::FileNotFound {
                    path: path.to_path_buf(),
                })
            }
            Err(e) => return Err(e.into()),
        };
        info!("Read {} bytes from {:?}", fasta.len(), path);
        Self::from_fasta(&fasta)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, identifier: &str) -> Option<&str> {
        self.index
            .get(identifier)
            .map(|&i| self.records[i].residues.as_str())
    }

    pub fn records(&self) -> &[SequenceRecord] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.records
            .iter()
            .map(|r| (r.identifier.as_str(), r.residues.as_str()))
    }

    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.identifier.as_str())
    }

    pub fn summary(&self) -> FastaSummary<'_> {
        FastaSummary { collection: self }
    }
}

/// Record count plus a short preview of every record.
pub struct FastaSummary<'a> {
    collection: &'a SequenceCollection,
}

impl Display for FastaSummary<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Total sequences: {}", self.collection.len())?;
        for record in self.collection.records() {
            let preview: String = record.residues.chars().take(PREVIEW_RESIDUES).collect();
            let ellipsis = if record.len() > PREVIEW_RESIDUES {
                "..."
            } else {
                ""
            };
            writeln!(f, "{}", record.identifier)?;
            writeln!(f, "  Length: {} aa", record.len())?;
            writeln!(f, "  {}{}", preview, ellipsis)?;
        }
        Ok(())
    }
}
