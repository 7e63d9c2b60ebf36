use thiserror::Error;

/// Error type for `NameRegistry` operations
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error(
        "`{0}` has not been registered in the document registry. \
         Registering the document type makes it resolvable, has it been registered?"
    )]
    NotRegistered(String),

    #[error("Document registry lock poisoned: {0}")]
    LockPoisoned(String),

    #[error("Failed to construct document `{class_name}`: {reason}")]
    Deserialize { class_name: String, reason: String },
}

impl<T> From<std::sync::PoisonError<T>> for RegistryError {
    fn from(err: std::sync::PoisonError<T>) -> Self {
        RegistryError::LockPoisoned(err.to_string())
    }
}

impl RegistryError {
    /// Returns the requested name if this is a `NotRegistered` error
    pub fn unresolved_name(&self) -> Option<&str> {
        match self {
            RegistryError::NotRegistered(name) => Some(name),
            _ => None,
        }
    }
}
