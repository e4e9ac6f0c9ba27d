pub mod error;
pub mod float;
pub mod geometry;
