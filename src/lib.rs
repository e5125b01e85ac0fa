//! VRF IP uniqueness audit.
//!
//! Finds IPv4 addresses applied to more than one interface within the same
//! routing domain (VRF) of a network topology snapshot.
//!
//! # Modules
//! - [`models`] - Topology, address and violation data structures
//! - [`processing`] - Interface selection and violation detection
//! - [`source`] - Topology retrieval and caching
//! - [`output`] - Report rendering
//! - [`config`] - Audit policy and constants

pub mod config;
pub mod models;
pub mod output;
pub mod processing;
pub mod source;

pub use config::AuditPolicy;
pub use processing::{detect, detect_with_stats};

use models::Topology;
use output::Report;
use std::error::Error;

/// Run the audit over a topology and build the report.
pub fn audit_topology(topology: &Topology, policy: &AuditPolicy) -> Report {
    Report::from_violations(&detect(topology, policy))
}

/// Load a saved topology snapshot and audit it.
pub fn audit_topology_file(
    cache_file: &str,
    policy: &AuditPolicy,
) -> Result<Report, Box<dyn Error>> {
    let topology = source::load_topology_file(cache_file)?;
    Ok(audit_topology(&topology, policy))
}
