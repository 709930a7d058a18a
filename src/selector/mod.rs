pub mod events;
pub mod problem;
pub mod range_scan;

pub use events::{BoundaryEvent, BoundaryKind, Value};
pub use problem::ProblemInstance;
pub use range_scan::count_k_smallest;
