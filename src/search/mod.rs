//! Path search over the word graph
//!
//! Three interchangeable algorithms share one cost model and one result type:
//! breadth-first, uniform-cost and A*.

mod algorithm;
pub mod astar;
mod breadth_first;
mod engine;
pub mod uniform_cost;

pub use algorithm::Algorithm;
pub use engine::{SearchEngine, SearchResult};
