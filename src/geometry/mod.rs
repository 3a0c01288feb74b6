pub mod edge;

pub use edge::{Edge, Endpoint};
