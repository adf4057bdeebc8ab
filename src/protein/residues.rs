//! Fixed amino-acid lookup tables.

/// Mass of the water molecule released per peptide bond, in Daltons.
pub const WATER_MASS: f64 = 18.01;

/// Average molecular weights of the 20 standard amino acids (Daltons).
pub const AMINO_ACID_WEIGHTS: [(char, f64); 20] = [
    ('A', 89.09),
    ('R', 174.20),
    ('N', 132.12),
    ('D', 133.10),
    ('C', 121.15),
    ('Q', 146.15),
    ('E', 147.13),
    ('G', 75.07),
    ('H', 155.16),
    ('I', 131.17),
    ('L', 131.17),
    ('K', 146.19),
    ('M', 149.21),
    ('F', 165.19),
    ('P', 115.13),
    ('S', 105.09),
    ('T', 119.12),
    ('W', 204.23),
    ('Y', 181.19),
    ('V', 117.15),
];

pub const HYDROPHOBIC: [char; 8] = ['A', 'V', 'I', 'L', 'M', 'F', 'W', 'P'];
pub const POSITIVE: [char; 3] = ['K', 'R', 'H'];
pub const NEGATIVE: [char; 2] = ['D', 'E'];

/// Looks up the average weight of a single residue.
///
/// Example:
/// ```
/// use protseq::protein::residues::residue_weight;
/// assert_eq!(residue_weight('A'), Some(89.09));
/// assert_eq!(residue_weight('X'), None);
/// ```
pub fn residue_weight(residue: char) -> Option<f64> {
    AMINO_ACID_WEIGHTS
        .iter()
        .find(|(code, _)| *code == residue)
        .map(|(_, weight)| *weight)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChargeClass {
    Positive,
    Negative,
    Neutral,
}

impl ChargeClass {
    // Positive is checked first.
    pub fn of(residue: char) -> Self {
        if POSITIVE.contains(&residue) {
            ChargeClass::Positive
        } else if NEGATIVE.contains(&residue) {
            ChargeClass::Negative
        } else {
            ChargeClass::Neutral
        }
    }
}

pub fn is_hydrophobic(residue: char) -> bool {
    HYDROPHOBIC.contains(&residue)
}
