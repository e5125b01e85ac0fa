//! Network Query Engine (NQE) topology retrieval.
//!
//! Handles querying a Forward Networks instance for device, VRF and
//! interface addressing data, and parsing the result into a [`Topology`].

use crate::config;
use crate::models::Topology;
use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::time::Duration;

/// Query for fetching device VRF interface addressing.
pub const TOPOLOGY_QUERY: &str = r#"
{
  devices {
    name
    networkInstances {
      name
      interfaces {
        subIface {
          adminStatus
          operStatus
          name
          ipv4 {
            addresses { ip prefixLength }
            fhrpAddresses { ip prefixLength }
          }
        }
        iface {
          name
          adminStatus
          operStatus
          interfaceType
          routedVlan {
            ipv4 {
              addresses { ip prefixLength }
              fhrpAddresses { ip prefixLength }
            }
          }
          bridge {
            ipv4 {
              addresses { ip prefixLength }
              fhrpAddresses { ip prefixLength }
            }
          }
          tunnel {
            ipv4 {
              addresses { ip prefixLength }
              fhrpAddresses { ip prefixLength }
            }
          }
        }
      }
    }
  }
}"#;

/// Connection settings for a Forward Networks instance.
#[derive(Debug, Clone)]
pub struct NqeClient {
    /// Base URL, e.g. `https://fwd.app`.
    pub url: String,
    pub username: String,
    pub password: String,
    /// Verify the instance TLS certificate.
    pub verify: bool,
}

#[derive(Serialize)]
struct QueryRequest<'a> {
    query: &'a str,
}

/// Error entry returned alongside (or instead of) query data.
#[derive(Deserialize, Debug)]
struct QueryError {
    message: String,
}

/// Response envelope of a query.
#[derive(Deserialize, Debug)]
struct QueryResponse {
    data: Option<serde_json::Value>,
    #[serde(default)]
    errors: Vec<QueryError>,
}

impl NqeClient {
    /// Endpoint for running a query against one snapshot.
    pub fn query_url(&self, snapshot_id: &str) -> String {
        format!(
            "{}/api/snapshots/{}/graphql",
            self.url.trim_end_matches('/'),
            snapshot_id
        )
    }

    /// Run the topology query against a snapshot.
    ///
    /// # Returns
    /// * `Ok(Topology)` - The parsed snapshot topology
    /// * `Err` - On HTTP failure, query errors, or a malformed response
    pub async fn fetch_topology(&self, snapshot_id: &str) -> Result<Topology, Box<dyn Error>> {
        let url = self.query_url(snapshot_id);
        log::info!("Querying {url}", url = url.on_blue());
        if !self.verify {
            log::warn!("TLS certificate verification is disabled");
        }

        let client = reqwest::Client::builder()
            .danger_accept_invalid_certs(!self.verify)
            .timeout(Duration::from_secs(config::HTTP_TIMEOUT_SEC))
            .build()?;

        let response = client
            .post(&url)
            .basic_auth(&self.username, Some(&self.password))
            .json(&QueryRequest {
                query: TOPOLOGY_QUERY,
            })
            .send()
            .await
            .map_err(|e| format!("Error sending query to {url}: {e}"))?;

        let status = response.status();
        let body = response.text().await?;
        log::debug!("Response status={status} body.len()={}", body.len());

        if !status.is_success() {
            log::trace!("┎######\n{}\n┖######", body.red());
            return Err(format!("Query failed with HTTP {status}: {body}").into());
        }

        parse_query_response(&body)
    }
}

/// Unwrap a query response envelope into a [`Topology`].
pub fn parse_query_response(body: &str) -> Result<Topology, Box<dyn Error>> {
    let response: QueryResponse =
        serde_json::from_str(body).map_err(|e| format!("Error parsing query response: {e}"))?;

    if !response.errors.is_empty() {
        let messages: Vec<&str> = response.errors.iter().map(|e| e.message.as_str()).collect();
        return Err(format!("Query returned errors: {}", messages.join("; ")).into());
    }

    let data = response
        .data
        .ok_or("Query response has neither data nor errors")?;
    parse_topology(&data.to_string())
}

/// Parse topology JSON, reporting the path of any malformed field.
pub fn parse_topology(json: &str) -> Result<Topology, Box<dyn Error>> {
    let mut deserializer = serde_json::Deserializer::from_str(json);
    let topology: Topology = serde_path_to_error::deserialize(&mut deserializer)
        .map_err(|e| format!("Error parsing topology: path={} error={}", e.path(), e))?;

    log::info!(
        "Parsed topology: {} devices, {} vrf memberships",
        topology.devices.len(),
        topology.domain_count()
    );
    Ok(topology)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_url() {
        let client = NqeClient {
            url: "https://fwd.app/".to_string(),
            username: "user".to_string(),
            password: "pass".to_string(),
            verify: false,
        };
        assert_eq!(
            client.query_url("12345"),
            "https://fwd.app/api/snapshots/12345/graphql"
        );
    }

    #[test]
    fn test_parse_query_response() {
        let body = r#"{"data": {"devices": [{"name": "r1", "networkInstances": []}]}}"#;
        let topology = parse_query_response(body).expect("Valid response");
        assert_eq!(topology.devices.len(), 1);
        assert_eq!(topology.devices[0].name, "r1");
    }

    #[test]
    fn test_parse_query_response_errors() {
        let body = r#"{"data": null, "errors": [{"message": "Unknown field foo"}, {"message": "bad"}]}"#;
        let err = parse_query_response(body).unwrap_err();
        assert_eq!(err.to_string(), "Query returned errors: Unknown field foo; bad");

        let err = parse_query_response(r#"{}"#).unwrap_err();
        assert!(err.to_string().contains("neither data nor errors"));
    }

    #[test]
    fn test_parse_topology_reports_path() {
        let json = r#"{"devices": [{"name": "r1", "networkInstances": [
            {"name": "core", "interfaces": [{"iface": {"name": "Gi0/1"}}]}
        ]}]}"#;
        let err = parse_topology(json).unwrap_err().to_string();
        assert!(
            err.contains("devices[0].networkInstances[0].interfaces[0].iface"),
            "Unexpected error: {err}"
        );
        assert!(err.contains("adminStatus"), "Unexpected error: {err}");
    }
}
