use std::sync::OnceLock;

use crate::{
    foundation::error::{FabricError, FabricResult},
    modules::{ModuleHandle, ModuleProvider},
};

/// Registry that defers to a provider supplied by the embedding host.
///
/// The provider is installed at most once, before the bridge starts resolving.
/// The first lookup seals the registry: if nothing was installed by then, an
/// empty provider is locked in and every later install is rejected, so a name
/// never changes its answer within one process.
#[derive(Default)]
pub struct HostRegistry {
    provider: OnceLock<Box<dyn ModuleProvider>>,
}

impl HostRegistry {
    /// Empty, unsealed registry.
    pub const fn new() -> Self {
        Self {
            provider: OnceLock::new(),
        }
    }

    /// Install the host provider.
    ///
    /// Fails with [`FabricError::HostProviderInstalled`] on a second install or
    /// after the registry was sealed by a lookup.
    pub fn install(&self, provider: impl ModuleProvider + 'static) -> FabricResult<()> {
        self.provider
            .set(Box::new(provider))
            .map_err(|_| FabricError::HostProviderInstalled)?;
        tracing::debug!("host module provider installed");
        Ok(())
    }

    /// `true` once a provider is in place, either installed or locked in by a lookup.
    pub fn is_installed(&self) -> bool {
        self.provider.get().is_some()
    }
}

impl ModuleProvider for HostRegistry {
    fn resolve(&self, name: &str) -> Option<&'static ModuleHandle> {
        self.provider
            .get_or_init(|| {
                tracing::warn!(name, "lookup before host provider install; sealing");
                let empty: Box<dyn ModuleProvider> =
                    Box::new(|_: &str| None::<&'static ModuleHandle>);
                empty
            })
            .resolve(name)
    }
}

impl std::fmt::Debug for HostRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostRegistry")
            .field("installed", &self.is_installed())
            .finish()
    }
}

#[cfg(feature = "host-registry")]
static GLOBAL: HostRegistry = HostRegistry::new();

#[cfg(feature = "host-registry")]
pub(crate) fn global() -> &'static HostRegistry {
    &GLOBAL
}

/// Install the process-wide host provider consulted by [`crate::resolve`].
#[cfg(feature = "host-registry")]
pub fn install_host_provider(provider: impl ModuleProvider + 'static) -> FabricResult<()> {
    GLOBAL.install(provider)
}

#[cfg(test)]
#[path = "../../tests/unit/modules/host.rs"]
mod tests;
