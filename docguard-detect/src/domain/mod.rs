//! Secret detection domain model

pub mod entities;
pub mod value_objects;
