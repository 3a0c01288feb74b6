pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod placement;
pub mod topology;

pub use error::{AlignError, GeometryError, Result, TopologyError};
pub use placement::{resolve, CursorPlacement};
