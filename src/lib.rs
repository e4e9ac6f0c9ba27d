//! Native-side primitives for a renderer that bridges a scripted component tree
//! to platform views.
//!
//! Two pieces carry the weight:
//!
//! 1. **Module resolution**: the bridge looks up natively implemented
//!    capability modules by name ([`resolve`]). The backing registry is chosen
//!    at build time: the builtin [`ModuleTable`] by default, or a provider the
//!    embedding host installs (feature `host-registry`).
//! 2. **Shared immutable state**: the layout thread builds per-node state values
//!    ([`SafeAreaViewState`]) once, commits them in [`TreeRevision`]s, and the
//!    mount thread reads them through a [`MountPoint`]. Updates swap the shared
//!    reference atomically and never touch an existing value.
//!
//! All geometry uses [`Float`], which matches the host's native coordinate
//! scalar for the target being built.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;
mod modules;
mod state;

pub use foundation::error::{FabricError, FabricResult};
pub use foundation::float::{FLOAT_BITS, Float};
pub use foundation::geometry::EdgeInsets;
pub use modules::blob::{blob_class_provider, blob_manager_cls, file_reader_module_cls};
pub use modules::host::HostRegistry;
pub use modules::{
    ModuleHandle, ModuleProvider, ModuleTable, NativeModule, ResolutionStrategy, active_strategy,
    builtin_table, resolve,
};
pub use state::mount::MountPoint;
pub use state::revision::{NodeTag, ShadowTree, TreeRevision};
pub use state::safe_area::SafeAreaViewState;
pub use state::{ComponentState, Shared};

#[cfg(feature = "host-registry")]
pub use modules::host::install_host_provider;
