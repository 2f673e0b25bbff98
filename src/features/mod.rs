//! Feature encoding
//!
//! Session input → fixed 10-position vector expected by the remote model.

pub mod layout;
pub mod vector;

pub use layout::LayoutInfo;
pub use vector::FeatureVector;
