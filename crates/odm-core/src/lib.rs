// map `self` to `odm_core` allowing the use of derive macros that use `::odm_core::..`
extern crate self as odm_core;
mod config;
mod document;
mod entry;
mod error;
mod markers;
pub mod name;
mod operators;
mod registry;

pub use config::RegistryConfig;
#[cfg(feature = "json")]
pub use config::ConfigError;
pub use document::Document;
pub use entry::DocumentEntry;
pub use error::RegistryError;
pub use markers::DocumentMarker;
pub use markers::DocumentRequirements;
pub use markers::SerdeFeature;
pub use odm_derive::{document, DocumentMarker};
pub use operators::is_update_operator;
pub use operators::UnknownOperator;
pub use operators::UpdateOperator;
pub use operators::UPDATE_OPERATORS;
pub use registry::DocumentRegistry;
pub use registry::NameRegistry;
pub use registry::Registry;
pub use registry::SharedRegistry;
