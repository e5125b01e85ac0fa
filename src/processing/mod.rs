//! Topology audit logic.
//!
//! This module contains the violation detection pipeline:
//! - [`selector`] - Picks the IP-bearing configuration of an interface
//! - [`extractor`] - Reads primary and FHRP addresses from it
//! - [`registry`] - Per-VRF address holder bookkeeping
//! - [`detector`] - Walks the topology and applies thresholds

mod detector;
mod extractor;
mod registry;
mod selector;

// Re-export public types and functions
pub use detector::{detect, detect_with_stats, DetectionStats};
pub use extractor::{extract_addresses, AddressSets};
pub use registry::DomainRegistry;
pub use selector::{select_l3_config, L3Config};
