pub mod align;

pub use align::{AlignCursorToEdges, AlignParams, EdgeSelection};
