use std::borrow::Cow;

use crate::{
    foundation::error::{FabricError, FabricResult},
    modules::{ModuleHandle, ModuleProvider},
};

/// Read-only name → descriptor table, sorted by name.
///
/// Lookups are a binary search over the entries and never allocate.
#[derive(Clone, Debug, Default)]
pub struct ModuleTable {
    entries: Cow<'static, [&'static ModuleHandle]>,
}

impl ModuleTable {
    /// Wrap a compiled-in slice that is already sorted by name with no duplicates.
    ///
    /// Usable in `static` items, so the table exists before any lookup runs.
    pub const fn from_sorted(entries: &'static [&'static ModuleHandle]) -> Self {
        Self {
            entries: Cow::Borrowed(entries),
        }
    }

    /// Build a table, rejecting empty and duplicated names.
    pub fn try_new(
        entries: impl IntoIterator<Item = &'static ModuleHandle>,
    ) -> FabricResult<Self> {
        let mut entries: Vec<_> = entries.into_iter().collect();
        if let Some(h) = entries.iter().find(|h| h.name().trim().is_empty()) {
            return Err(FabricError::invalid_module_name(format!("{:?}", h.name())));
        }
        entries.sort_by(|a, b| a.name().cmp(b.name()));
        if let Some(w) = entries.windows(2).find(|w| w[0].name() == w[1].name()) {
            return Err(FabricError::duplicate_module(w[0].name()));
        }
        Ok(Self {
            entries: Cow::Owned(entries),
        })
    }

    /// Build a table from entries collected at startup.
    ///
    /// The first descriptor for a name wins; later duplicates and empty names
    /// are skipped with a warning.
    pub fn from_static(entries: impl IntoIterator<Item = &'static ModuleHandle>) -> Self {
        let mut kept: Vec<&'static ModuleHandle> = Vec::new();
        for handle in entries {
            let name = handle.name();
            if name.trim().is_empty() {
                tracing::warn!("skipping module descriptor with empty name");
                continue;
            }
            if kept.iter().any(|h| h.name() == name) {
                tracing::warn!(name, "skipping duplicate module descriptor");
                continue;
            }
            kept.push(handle);
        }
        kept.sort_by(|a, b| a.name().cmp(b.name()));
        tracing::debug!(modules = kept.len(), "module table assembled");
        Self {
            entries: Cow::Owned(kept),
        }
    }

    /// Descriptor registered under `name`, if any.
    pub fn resolve(&self, name: &str) -> Option<&'static ModuleHandle> {
        self.entries
            .binary_search_by(|h| h.name().cmp(name))
            .ok()
            .map(|idx| self.entries[idx])
    }

    /// `true` when `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.resolve(name).is_some()
    }

    /// Number of registered modules.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` when no module is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registered descriptors in name order.
    pub fn handles(&self) -> impl Iterator<Item = &'static ModuleHandle> + '_ {
        self.entries.iter().copied()
    }

    /// Registered names in lexicographic order.
    pub fn names(&self) -> Vec<&'static str> {
        self.handles().map(ModuleHandle::name).collect()
    }
}

impl ModuleProvider for ModuleTable {
    fn resolve(&self, name: &str) -> Option<&'static ModuleHandle> {
        ModuleTable::resolve(self, name)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/modules/table.rs"]
mod tests;
