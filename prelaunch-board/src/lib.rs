//! The feature-voting board.
//!
//! A [`FeatureBoard`] owns the session-local feature list. Vote toggles are
//! applied optimistically - the count changes before the intake confirms -
//! and rolled back to an exact snapshot if the confirmation fails. At most
//! one vote mutation may be in flight per feature.

mod board;
pub use board::{BoardError, FeatureBoard, DEFAULT_CATEGORY};
