//! Infrastructure implementations for the detection pipeline

pub mod classifier;
pub mod detectors;
pub mod rules;
