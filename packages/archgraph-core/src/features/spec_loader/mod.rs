//! Architecture specification: JSON flattening, queries, name conversion

mod domain;
mod flatten;
mod name_converter;

pub use domain::{Category, ComponentAttributes, ComponentRecord};
pub use flatten::ArchitectureSpec;
pub use name_converter::NameConverter;
