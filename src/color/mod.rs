//! Color representation utilities
//!
//! Pure conversions between packed integer colors and their hex-string or
//! RGB-component forms. No state, no validation beyond what the types carry.

pub mod codec;

pub use codec::{from_hex, from_rgb, to_hex, to_rgb};
