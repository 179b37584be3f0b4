//! Remote classification client

mod remote;

pub use remote::{ClassifierError, RemoteClassifier, TextClassifier};
