//! Name-keyed lookup of natively implemented capability modules.
//!
//! The bridge asks for a module by name when it first needs it. Which backing
//! registry answers is fixed per build: the builtin [`ModuleTable`] by default,
//! or a host-installed provider with the `host-registry` feature.

use std::fmt;

pub mod blob;
pub mod host;
pub mod table;

pub use table::ModuleTable;

/// A natively implemented module instance handed to the bridge.
pub trait NativeModule: Send + Sync {
    /// Name the module is registered under.
    fn name(&self) -> &'static str;

    /// Methods exported to the scripting side.
    fn method_names(&self) -> &'static [&'static str];

    /// Called by the bridge before the instance is dropped on reload.
    fn invalidate(&mut self) {}
}

/// Opaque descriptor of one native module implementation.
///
/// Descriptors live in `static` items; two lookups of the same name return the
/// same address for the lifetime of the process.
pub struct ModuleHandle {
    name: &'static str,
    methods: &'static [&'static str],
    construct: fn() -> Box<dyn NativeModule>,
}

impl ModuleHandle {
    /// Describe a module.
    pub const fn new(
        name: &'static str,
        methods: &'static [&'static str],
        construct: fn() -> Box<dyn NativeModule>,
    ) -> Self {
        Self {
            name,
            methods,
            construct,
        }
    }

    /// Registered name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Exported method names.
    pub fn methods(&self) -> &'static [&'static str] {
        self.methods
    }

    /// Build a fresh module instance.
    pub fn instantiate(&self) -> Box<dyn NativeModule> {
        (self.construct)()
    }

    /// Identity comparison.
    pub fn same(a: &ModuleHandle, b: &ModuleHandle) -> bool {
        std::ptr::eq(a, b)
    }
}

impl fmt::Debug for ModuleHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModuleHandle")
            .field("name", &self.name)
            .field("methods", &self.methods.len())
            .field("ptr", &(self as *const Self))
            .finish()
    }
}

/// Resolves capability names to module descriptors.
///
/// Implementations must be pure: no I/O, no persistent allocation, and the
/// same name always yields the same handle.
pub trait ModuleProvider: Send + Sync {
    /// Look up `name`; `None` means the capability is unavailable in this build.
    fn resolve(&self, name: &str) -> Option<&'static ModuleHandle>;
}

impl<F> ModuleProvider for F
where
    F: Fn(&str) -> Option<&'static ModuleHandle> + Send + Sync,
{
    fn resolve(&self, name: &str) -> Option<&'static ModuleHandle> {
        self(name)
    }
}

/// Which backing registry the crate-level [`resolve`] consults.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResolutionStrategy {
    /// Builtin table compiled into this crate.
    Open,
    /// Provider installed by the embedding host.
    Host,
}

// Every plugin set compiled into this crate, kept sorted by name.
static BUILTIN: ModuleTable = ModuleTable::from_sorted(&blob::PLUGINS);

/// Process-wide builtin table; a compiled-in static, so lookups never allocate.
pub fn builtin_table() -> &'static ModuleTable {
    &BUILTIN
}

/// Strategy compiled into this build.
pub const fn active_strategy() -> ResolutionStrategy {
    if cfg!(feature = "host-registry") {
        ResolutionStrategy::Host
    } else {
        ResolutionStrategy::Open
    }
}

/// Resolve `name` through the strategy compiled into this build.
pub fn resolve(name: &str) -> Option<&'static ModuleHandle> {
    #[cfg(feature = "host-registry")]
    let found = host::global().resolve(name);
    #[cfg(not(feature = "host-registry"))]
    let found = builtin_table().resolve(name);

    if found.is_none() {
        tracing::trace!(name, "no native module registered");
    }
    found
}

#[cfg(test)]
#[path = "../../tests/unit/modules/mod.rs"]
mod tests;
