//! Detection pipeline use cases

pub mod use_cases;
