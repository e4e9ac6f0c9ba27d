use crate::foundation::float::Float;

/// Per-edge insets in host coordinate units.
///
/// Field order follows the host convention `{top, left, bottom, right}`.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EdgeInsets {
    /// Inset from the top edge.
    #[serde(default)]
    pub top: Float,
    /// Inset from the left edge.
    #[serde(default)]
    pub left: Float,
    /// Inset from the bottom edge.
    #[serde(default)]
    pub bottom: Float,
    /// Inset from the right edge.
    #[serde(default)]
    pub right: Float,
}

impl EdgeInsets {
    /// All edges zero.
    pub const ZERO: Self = Self {
        top: 0.0,
        left: 0.0,
        bottom: 0.0,
        right: 0.0,
    };

    /// Build insets from explicit edges.
    pub const fn new(top: Float, left: Float, bottom: Float, right: Float) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    /// Same inset on every edge.
    pub const fn uniform(v: Float) -> Self {
        Self::new(v, v, v, v)
    }

    /// `true` when every edge is exactly zero.
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// Sum of left and right.
    pub fn horizontal(&self) -> Float {
        self.left + self.right
    }

    /// Sum of top and bottom.
    pub fn vertical(&self) -> Float {
        self.top + self.bottom
    }

    /// Widen into `kurbo` insets (`x0` left, `y0` top, `x1` right, `y1` bottom).
    ///
    /// This is the only exit from [`Float`] geometry; nothing converts back.
    #[allow(clippy::useless_conversion)]
    pub fn to_kurbo(self) -> kurbo::Insets {
        kurbo::Insets::new(
            f64::from(self.left),
            f64::from(self.top),
            f64::from(self.right),
            f64::from(self.bottom),
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/geometry.rs"]
mod tests;
