//! Docguard Detect - secret detection pipeline
//!
//! This crate inspects extracted document text for embedded secrets
//! (credentials, tokens, keys) before the document is forwarded to a
//! third-party service.
//!
//! ## Features
//!
//! - Remote classification via an external endpoint, with defensive
//!   response normalization across two accepted payload shapes
//! - Local regex-based fallback with a fixed rule catalogue (AWS keys,
//!   GitHub tokens, JWTs, private keys, database URLs, generic
//!   credentials)
//! - Order-preserving deduplication on the `(type, location)` key
//! - Aggregate risk derivation over a five-level severity scale
//! - Irreversible masking of matched values before findings leave the
//!   pipeline
//!
//! ## Usage
//!
//! ```rust,no_run
//! use docguard_core::config::DetectionConfig;
//! use docguard_detect::SecretDetector;
//!
//! # async fn example() {
//! let detector = SecretDetector::with_config(&DetectionConfig::default());
//! let report = detector.inspect("password: \"hunter2secret\"").await;
//! # }
//! ```

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::use_cases::{aggregate_risk, DetectionReport, SecretDetector};
pub use domain::entities::{Finding, FindingSource, RiskLevel};
