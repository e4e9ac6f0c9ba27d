use crate::{foundation::geometry::EdgeInsets, state::ComponentState};

/// State for a safe-area view: the padding the host reports for the node.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SafeAreaViewState {
    padding: EdgeInsets,
}

impl SafeAreaViewState {
    /// State carrying the padding computed by the layout pass.
    pub fn new(padding: EdgeInsets) -> Self {
        Self { padding }
    }

    /// Padding to apply to the mounted view.
    pub fn padding(&self) -> EdgeInsets {
        self.padding
    }
}

impl ComponentState for SafeAreaViewState {}

#[cfg(test)]
#[path = "../../tests/unit/state/safe_area.rs"]
mod tests;
