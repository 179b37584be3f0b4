//! Docguard Core - shared configuration
//!
//! This crate provides the configuration layer consumed by the docguard
//! detection pipeline and the surrounding service: typed configuration
//! sections with defaults, file/environment loading, and validation.

pub mod config;
