pub mod fasta;
pub mod models;
pub mod residues;
