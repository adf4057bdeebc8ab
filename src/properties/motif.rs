use crate::errors::Result;
use regex::{Regex, RegexBuilder};
use std::fmt::Display;

/// All zero-indexed starting offsets of `motif` in `sequence`.
///
/// Matches may overlap. An empty motif matches at every offset from `0` up to
/// and including `length(sequence)`.
///
/// Example:
/// ```
/// use protseq::properties::motif::find_motif;
/// assert_eq!(find_motif("ACDEFACGH", "AC"), vec![0, 5]);
/// assert_eq!(find_motif("AAAA", "AA"), vec![0, 1, 2]);
/// assert_eq!(find_motif("AC", "ACDE"), Vec::<usize>::new());
/// ```
pub fn find_motif(sequence: &str, motif: &str) -> Vec<usize> {
    let sequence: Vec<char> = sequence.chars().collect();
    let motif: Vec<char> = motif.chars().collect();

    if motif.is_empty() {
        return (0..=sequence.len()).collect();
    }

    sequence
        .windows(motif.len())
        .enumerate()
        .filter(|(_, window)| *window == motif.as_slice())
        .map(|(i, _)| i)
        .collect()
}

/// N-linked glycosylation sequon: N, then anything but P, then S or T.
pub const N_GLYCOSYLATION: &str = "N[^P][ST]";

/// A motif described by a regular expression, e.g. [`N_GLYCOSYLATION`].
///
/// Patterns are matched case-insensitively, since parsed residues are
/// always upper-case.
#[derive(Debug, Clone)]
pub struct MotifPattern {
    pub regex: Regex,
}

impl MotifPattern {
    pub fn new(pattern: &str) -> Result<Self> {
        Ok(MotifPattern {
            regex: RegexBuilder::new(pattern).case_insensitive(true).build()?,
        })
    }

    pub fn n_glycosylation() -> Self {
        MotifPattern {
            regex: RegexBuilder::new(N_GLYCOSYLATION)
                .case_insensitive(true)
                .build()
                .unwrap(),
        }
    }

    /// Starting offsets of every (possibly overlapping) match.
    ///
    /// The regex crate only reports non-overlapping matches, so the search is
    /// restarted one residue after each match start.
    pub fn find(&self, sequence: &str) -> Vec<usize> {
        let mut positions = Vec::new();
        let mut start = 0;
        while start <= sequence.len() {
            let Some(mat) = self.regex.find_at(sequence, start) else {
                break;
            };
            positions.push(mat.start());
            match sequence[mat.start()..].chars().next() {
                Some(c) => start = mat.start() + c.len_utf8(),
                None => break,
            }
        }

        if sequence.is_ascii() {
            positions
        } else {
            positions
                .into_iter()
                .map(|byte_pos| sequence[..byte_pos].chars().count())
                .collect()
        }
    }
}

#[derive(Debug, Clone)]
pub enum Motif {
    Literal(String),
    Pattern(MotifPattern),
}

impl Motif {
    pub fn literal(motif: &str) -> Self {
        Motif::Literal(motif.to_uppercase())
    }

    pub fn pattern(pattern: &str) -> Result<Self> {
        Ok(Motif::Pattern(MotifPattern::new(pattern)?))
    }

    pub fn find(&self, sequence: &str) -> Vec<usize> {
        match self {
            Motif::Literal(motif) => find_motif(sequence, motif),
            Motif::Pattern(pattern) => pattern.find(sequence),
        }
    }
}

impl Display for Motif {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Motif::Literal(motif) => write!(f, "{}", motif),
            Motif::Pattern(pattern) => write!(f, "/{}/", pattern.regex.as_str()),
        }
    }
}
