//! Generic structures and algorithms, not specific to formulas.

pub mod minimal_pcg;
pub mod pairs;
