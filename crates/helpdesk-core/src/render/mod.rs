//! Response formatters for the two surfaces.

pub mod structured;
pub mod text;
