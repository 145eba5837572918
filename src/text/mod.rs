//! Text normalization with provenance tracking.

mod alignment;
mod normalized;
mod transform;
pub mod unicode;

pub use alignment::Alignment;
pub use normalized::{NormalizedText, Snapshot};
pub use transform::Transform;
