//! Topology snapshot retrieval.
//!
//! This module handles acquiring the topology the audit runs on:
//! - [`nqe`] - Network query execution and response parsing
//! - [`cache`] - Caching of snapshot data

mod cache;
mod nqe;

// Re-export public types and functions
pub use cache::{default_cache_file, load_topology_file, read_topology_cache};
pub use nqe::{parse_query_response, parse_topology, NqeClient, TOPOLOGY_QUERY};
