//! Canonical data model for footprint scans.
//!
//! Raw platform payloads are normalized into [`PlatformProfile`] variants;
//! everything downstream (scoring, privacy analysis, recommendations) works
//! on these typed structures only. [`FootprintScan`] is the aggregate root
//! handed to persistence and presentation layers.

mod platform;
mod privacy;
mod profile;
mod recommendation;
mod scan;
mod score;

pub use platform::*;
pub use privacy::*;
pub use profile::*;
pub use recommendation::*;
pub use scan::*;
pub use score::*;
