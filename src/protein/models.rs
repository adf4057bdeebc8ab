use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SequenceRecord {
    pub identifier: String,
    pub residues: String,
}

impl SequenceRecord {
    pub fn len(&self) -> usize {
        self.residues.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }
}

#[derive(Debug)]
pub struct SequenceRecordBuilder {
    pub identifier: String,
    pub residues: String,
}

impl SequenceRecordBuilder {
    pub fn new(identifier: &str) -> Self {
        Self {
            identifier: identifier.to_string(),
            residues: String::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }

    /// Appends one (already trimmed) line of sequence data, upper-casing it.
    pub fn append_sequence(&mut self, line: &str) {
        self.residues.push_str(&line.to_uppercase());
    }

    /// Drops whatever has been accumulated so far.
    pub fn reset(&mut self) {
        self.residues.clear();
    }

    pub fn build(self) -> SequenceRecord {
        SequenceRecord {
            identifier: self.identifier,
            residues: self.residues,
        }
    }
}
