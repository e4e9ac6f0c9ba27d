/// Result alias used across the crate.
pub type FabricResult<T> = Result<T, FabricError>;

/// Errors raised while assembling registries.
///
/// Resolving an unknown capability is never an error; lookups return `None`.
#[derive(thiserror::Error, Debug)]
pub enum FabricError {
    /// A module descriptor carried an empty or otherwise unusable name.
    #[error("invalid module name: {0}")]
    InvalidModuleName(String),

    /// Two descriptors in one table claimed the same name.
    #[error("duplicate module registration: {0}")]
    DuplicateModule(String),

    /// A host provider was already installed for this process.
    #[error("host module provider already installed")]
    HostProviderInstalled,

    /// Anything else, with its source preserved.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FabricError {
    /// Build [`FabricError::InvalidModuleName`].
    pub fn invalid_module_name(msg: impl Into<String>) -> Self {
        Self::InvalidModuleName(msg.into())
    }

    /// Build [`FabricError::DuplicateModule`].
    pub fn duplicate_module(name: impl Into<String>) -> Self {
        Self::DuplicateModule(name.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
