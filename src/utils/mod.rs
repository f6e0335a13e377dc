//! Utility modules

pub mod levenshtein;

pub use levenshtein::{distance, distance_with, CostModel};
