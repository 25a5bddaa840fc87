//! Dictionary and word adjacency graph

mod word_graph;

pub use word_graph::WordGraph;
