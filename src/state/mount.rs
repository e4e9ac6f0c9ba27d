use std::sync::Arc;

use arc_swap::ArcSwap;

use crate::state::{
    ComponentState, Shared,
    revision::{NodeTag, TreeRevision},
};

#[derive(Debug)]
struct Mounted<S> {
    revision: u64,
    state: Shared<S>,
}

/// Association between a tree node and the native view mounted for it.
///
/// Holds the state the view currently reads. Replacement is a single atomic
/// pointer swap, so a concurrent reader sees either the old or the new value.
#[derive(Debug)]
pub struct MountPoint<S> {
    current: ArcSwap<Mounted<S>>,
}

impl<S: ComponentState> MountPoint<S> {
    /// Mount point showing `initial`, tied to no revision yet.
    pub fn new(initial: Shared<S>) -> Self {
        Self {
            current: ArcSwap::from_pointee(Mounted {
                revision: 0,
                state: initial,
            }),
        }
    }

    /// State the mounted view should apply now.
    pub fn current(&self) -> Shared<S> {
        Arc::clone(&self.current.load().state)
    }

    /// Number of the last revision applied through [`MountPoint::mount_from`].
    pub fn revision(&self) -> u64 {
        self.current.load().revision
    }

    /// Swap in `next` and return the value it replaced.
    pub fn replace(&self, next: Shared<S>) -> Shared<S> {
        let prev = self.current.rcu(|cur| Mounted {
            revision: cur.revision,
            state: Arc::clone(&next),
        });
        Arc::clone(&prev.state)
    }

    /// Swap in `next` only if `expected` is still current.
    ///
    /// Returns `false` when another writer moved the mount point first.
    pub fn replace_if_current(&self, expected: &Shared<S>, next: Shared<S>) -> bool {
        loop {
            let cur = self.current.load_full();
            if !Arc::ptr_eq(&cur.state, expected) {
                return false;
            }
            let swapped = Arc::new(Mounted {
                revision: cur.revision,
                state: Arc::clone(&next),
            });
            let prev = self.current.compare_and_swap(&cur, swapped);
            if Arc::ptr_eq(&*prev, &cur) {
                return true;
            }
        }
    }

    /// Point at the state `revision` holds for `tag`.
    ///
    /// Returns the replaced value, or `None` when the revision has no state
    /// for the node, already matches what is mounted, or is older than the
    /// revision mounted last.
    pub fn mount_from(&self, revision: &TreeRevision<S>, tag: NodeTag) -> Option<Shared<S>> {
        let next = revision.state(tag)?;
        loop {
            let cur = self.current.load_full();
            if revision.number() < cur.revision {
                tracing::debug!(
                    tag = tag.0,
                    revision = revision.number(),
                    mounted = cur.revision,
                    "ignoring stale revision"
                );
                return None;
            }
            if Arc::ptr_eq(&cur.state, next) {
                return None;
            }
            let swapped = Arc::new(Mounted {
                revision: revision.number(),
                state: Arc::clone(next),
            });
            let prev = self.current.compare_and_swap(&cur, swapped);
            if Arc::ptr_eq(&*prev, &cur) {
                tracing::trace!(tag = tag.0, revision = revision.number(), "mount point moved");
                return Some(Arc::clone(&cur.state));
            }
        }
    }
}

impl<S: ComponentState + Default> Default for MountPoint<S> {
    fn default() -> Self {
        Self::new(Arc::new(S::default()))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/state/mount.rs"]
mod tests;
