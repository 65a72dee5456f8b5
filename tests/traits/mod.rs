pub mod into_outcome;
