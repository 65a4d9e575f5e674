//! Static classification policy: fixed lookup tables for the categorical
//! metrics and the color-category rule.
//!
//! Every function here is total — unknown codes map to an explicit sentinel
//! instead of panicking, so a malformed workbook row degrades to an
//! "Unknown" marker rather than taking the whole chart down.

mod color;
mod comfort;
mod compliance;

pub use color::{ColorCategory, category};
pub use comfort::{ComfortClass, comfort};
pub use compliance::{ComplianceClass, compliance};
