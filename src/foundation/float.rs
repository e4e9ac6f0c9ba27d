/// Scalar used by every geometry value in this crate.
///
/// Tracks the host graphics coordinate scalar: double precision on 64-bit
/// targets, single precision on 32-bit targets. The `single-precision` feature
/// pins it to `f32` for platform builds that fix precision explicitly.
#[cfg(not(any(feature = "single-precision", target_pointer_width = "32")))]
pub type Float = f64;

/// Scalar used by every geometry value in this crate.
///
/// Tracks the host graphics coordinate scalar: double precision on 64-bit
/// targets, single precision on 32-bit targets. The `single-precision` feature
/// pins it to `f32` for platform builds that fix precision explicitly.
#[cfg(any(feature = "single-precision", target_pointer_width = "32"))]
pub type Float = f32;

/// Bit width of [`Float`] for this build.
pub const FLOAT_BITS: u32 = (std::mem::size_of::<Float>() * 8) as u32;

#[cfg(test)]
#[path = "../../tests/unit/foundation/float.rs"]
mod tests;
