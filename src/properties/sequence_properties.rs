use crate::errors::{ProtSeqError, Result};
use crate::protein::residues::{is_hydrophobic, residue_weight, ChargeClass, WATER_MASS};

/// Number of residues in the sequence.
pub fn length(sequence: &str) -> usize {
    sequence.chars().count()
}

/// Average molecular weight in Daltons, rounded to two decimals.
///
/// Sums the residue weights and subtracts one water per peptide bond.
///
/// Example:
/// ```
/// use protseq::properties::sequence_properties::molecular_weight;
/// assert_eq!(molecular_weight("A").unwrap(), 89.09);
/// assert_eq!(molecular_weight("").unwrap(), 0.0);
/// ```
pub fn molecular_weight(sequence: &str) -> Result<f64> {
    let mut weight = 0.0;
    let mut num_residues = 0;
    for (position, residue) in sequence.chars().enumerate() {
        match residue_weight(residue) {
            Some(w) => weight += w,
            None => return Err(ProtSeqError::UnknownResidue { residue, position }),
        }
        num_residues += 1;
    }

    if num_residues > 1 {
        weight -= WATER_MASS * (num_residues - 1) as f64;
    }

    Ok(round_to_hundredths(weight))
}

fn round_to_hundredths(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

pub fn count_hydrophobic(sequence: &str) -> usize {
    sequence.chars().filter(|&aa| is_hydrophobic(aa)).count()
}

/// Returns `(positive, negative)` residue counts.
pub fn count_charged(sequence: &str) -> (usize, usize) {
    let mut pos_count = 0;
    let mut neg_count = 0;
    for aa in sequence.chars() {
        match ChargeClass::of(aa) {
            ChargeClass::Positive => pos_count += 1,
            ChargeClass::Negative => neg_count += 1,
            ChargeClass::Neutral => {}
        }
    }
    (pos_count, neg_count)
}
