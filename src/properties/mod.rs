pub mod motif;
pub mod sequence_properties;
