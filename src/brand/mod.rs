//! Brand signal extraction — turns loosely-structured company metadata
//! into a normalized brand profile.

pub mod extract;
pub mod profile;
pub mod strategy;

pub use extract::derive_brand_profile;
pub use profile::BrandProfile;
pub use strategy::{StrategySections, parse_strategy};
