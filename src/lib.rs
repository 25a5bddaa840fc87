//! Word Ladder
//!
//! Turn one word into another by changing a single letter at a time, with every
//! intermediate step a dictionary word. Ladders are solved with breadth-first,
//! uniform-cost and A* search over a graph of one-letter neighbors.
//!
//! # Quick Start
//!
//! ```rust
//! use word_ladder::graph::WordGraph;
//! use word_ladder::search::SearchEngine;
//!
//! let graph = WordGraph::from_words(["cold", "cord", "card", "ward", "warm"]);
//! let ladder = SearchEngine::new(&graph).heuristic("cold", "warm").unwrap();
//! assert_eq!(ladder.moves(), 4);
//! ```

// Core domain types
pub mod core;

// Dictionary and adjacency
pub mod graph;

// Path search
pub mod search;

// Game sessions
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Logger setup
pub mod logging;
