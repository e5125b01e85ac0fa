//! Cache management for topology snapshots.
//!
//! Provides caching functionality to avoid repeated network queries for the
//! same snapshot.

use super::nqe::{parse_topology, NqeClient};
use crate::config;
use crate::models::Topology;
use std::error::Error;
use std::path::Path;

/// Default cache file name for a snapshot, one file per snapshot per day.
pub fn default_cache_file(snapshot_id: &str) -> String {
    let now = chrono::Local::now();
    format!(
        "{}_{}_{}.json",
        config::CACHE_FILE_PREFIX,
        snapshot_id,
        now.format("%Y-%m-%d")
    )
}

/// Read a topology from a saved snapshot file.
pub fn load_topology_file(cache_file: &str) -> Result<Topology, Box<dyn Error>> {
    let json = std::fs::read_to_string(cache_file)
        .map_err(|e| format!("Error reading cache file {cache_file}: {e}"))?;
    log::info!("Reading from cache file: {cache_file}");
    parse_topology(&json)
}

/// Read topology data from cache file, or fetch it if the cache doesn't exist.
///
/// # Arguments
/// * `cache_file` - Optional path to a specific cache file. If None, uses default naming.
/// * `client` - Query client used on a cache miss
/// * `snapshot_id` - Snapshot to query
///
/// # Returns
/// * `Ok(Topology)` - The topology from cache or from the network query
/// * `Err` - If cache file specified but doesn't exist, or the query fails
pub async fn read_topology_cache(
    cache_file: Option<&str>,
    client: &NqeClient,
    snapshot_id: &str,
) -> Result<Topology, Box<dyn Error>> {
    let cache_file = match cache_file {
        Some(file) => {
            if !Path::new(file).exists() {
                return Err(format!("Cache file does not exist: {file}").into());
            }
            log::info!("Using provided cache file: {file}");
            return load_topology_file(file);
        }
        None => default_cache_file(snapshot_id),
    };

    if Path::new(&cache_file).exists() {
        return load_topology_file(&cache_file);
    }

    log::warn!("Cache file not found: {cache_file}");
    let topology = client.fetch_topology(snapshot_id).await?;

    let json =
        serde_json::to_string(&topology).map_err(|e| format!("Error serializing JSON: {e}"))?;
    log::warn!("Writing data to cache file: {cache_file}");
    std::fs::write(&cache_file, json)
        .map_err(|e| format!("Error writing cache file {cache_file}: {e}"))?;

    Ok(topology)
}
