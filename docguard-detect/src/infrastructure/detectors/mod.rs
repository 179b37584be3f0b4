//! Detection engines

mod pattern_detector;

pub use pattern_detector::PatternDetector;
