pub mod bounds;

pub use bounds::{normalize_bound, BoundRange};
