use std::{collections::BTreeMap, sync::Arc};

use arc_swap::ArcSwap;

use crate::state::{ComponentState, Shared};

/// Stable identifier of a renderer tree node.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct NodeTag(
    /// Raw tag assigned by the scripting side.
    pub u64,
);

/// Immutable snapshot of per-node state for one committed tree.
#[derive(Debug)]
pub struct TreeRevision<S> {
    number: u64,
    states: BTreeMap<NodeTag, Shared<S>>,
}

impl<S> TreeRevision<S> {
    /// Monotonic commit number; the initial empty revision is 0.
    pub fn number(&self) -> u64 {
        self.number
    }

    /// State committed for `tag`, if the node exists in this revision.
    pub fn state(&self, tag: NodeTag) -> Option<&Shared<S>> {
        self.states.get(&tag)
    }

    /// Number of nodes carrying state.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// `true` when no node carries state.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Node tags in ascending order.
    pub fn tags(&self) -> impl Iterator<Item = NodeTag> + '_ {
        self.states.keys().copied()
    }
}

impl<S> Default for TreeRevision<S> {
    fn default() -> Self {
        Self {
            number: 0,
            states: BTreeMap::new(),
        }
    }
}

/// Background-side owner of the latest committed revision.
///
/// Each commit produces a new [`TreeRevision`] that shares every untouched
/// node's state with its predecessor.
#[derive(Debug)]
pub struct ShadowTree<S> {
    latest: ArcSwap<TreeRevision<S>>,
}

impl<S: ComponentState> ShadowTree<S> {
    /// Tree holding the empty revision 0.
    pub fn new() -> Self {
        Self {
            latest: ArcSwap::from_pointee(TreeRevision::default()),
        }
    }

    /// Most recently committed revision.
    pub fn latest(&self) -> Arc<TreeRevision<S>> {
        self.latest.load_full()
    }

    /// Commit new state values for the given nodes.
    #[tracing::instrument(skip_all)]
    pub fn commit(
        &self,
        updates: impl IntoIterator<Item = (NodeTag, Shared<S>)>,
    ) -> Arc<TreeRevision<S>> {
        let updates: Vec<_> = updates.into_iter().collect();
        self.advance(|states| {
            for (tag, state) in &updates {
                states.insert(*tag, Arc::clone(state));
            }
        })
    }

    /// Commit a revision without the given nodes.
    #[tracing::instrument(skip_all)]
    pub fn remove(&self, tags: impl IntoIterator<Item = NodeTag>) -> Arc<TreeRevision<S>> {
        let tags: Vec<_> = tags.into_iter().collect();
        self.advance(|states| {
            for tag in &tags {
                states.remove(tag);
            }
        })
    }

    fn advance(&self, apply: impl Fn(&mut BTreeMap<NodeTag, Shared<S>>)) -> Arc<TreeRevision<S>> {
        loop {
            let cur = self.latest.load_full();
            let mut states = cur.states.clone();
            apply(&mut states);
            let next = Arc::new(TreeRevision {
                number: cur.number + 1,
                states,
            });
            let prev = self.latest.compare_and_swap(&cur, Arc::clone(&next));
            if Arc::ptr_eq(&*prev, &cur) {
                tracing::debug!(revision = next.number, nodes = next.len(), "revision committed");
                return next;
            }
            tracing::trace!("concurrent commit; retrying");
        }
    }
}

impl<S: ComponentState> Default for ShadowTree<S> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/state/revision.rs"]
mod tests;
