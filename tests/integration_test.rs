//! Integration tests for vrf-ip-audit
//!
//! These tests verify the complete workflow from reading a snapshot file to
//! detection and reporting.

use vrf_ip_audit::{
    audit_topology, audit_topology_file, detect,
    models::{AddressRole, Location},
    output::{render_table, write_csv, Report},
    source::{load_topology_file, parse_topology},
    AuditPolicy,
};

const CACHE_01: &str = "src/tests/test_data/topology_test_cache_01.json";

#[test]
fn test_full_workflow_with_cache() {
    let topology = load_topology_file(CACHE_01).expect("Failed to read topology cache");
    assert_eq!(topology.devices.len(), 3, "Expected 3 devices in test data");

    // atl-edge-fw02 is excluded by default
    let violations = detect(&topology, &AuditPolicy::default());
    assert_eq!(violations.len(), 2, "Expected 2 violations: {violations:#?}");

    assert_eq!(violations[0].domain, "default");
    assert_eq!(violations[0].address.to_string(), "10.20.0.1/30");
    assert_eq!(
        violations[0].holders,
        vec![
            Location::new("atl-core-rtr02", "GigabitEthernet0/1.100"),
            Location::new("atl-core-rtr01", "GigabitEthernet0/1.100"),
        ]
    );

    assert_eq!(violations[1].domain, "mgmt");
    assert_eq!(violations[1].address.ip.to_string(), "192.168.99.1");
    assert_eq!(violations[1].holders.len(), 2);
}

#[test]
fn test_workflow_without_exclusions() {
    let topology = load_topology_file(CACHE_01).expect("Failed to read topology cache");
    let violations = detect(&topology, &AuditPolicy::no_exclusions());
    assert_eq!(violations.len(), 5, "Expected 5 violations: {violations:#?}");

    // Third FHRP holder of 10.10.0.1 trips the shared-virtual threshold
    let fhrp = &violations[2];
    assert_eq!(fhrp.role, AddressRole::SharedVirtual);
    assert_eq!(fhrp.address.ip.to_string(), "10.10.0.1");
    assert_eq!(
        fhrp.holders,
        vec![
            Location::new("atl-edge-fw02", "Vlan10"),
            Location::new("atl-core-rtr02", "Vlan10"),
            Location::new("atl-core-rtr01", "Vlan10"),
        ]
    );

    // 172.16.0.1 on three interfaces: two records, cumulative holders
    assert_eq!(violations[3].address.ip.to_string(), "172.16.0.1");
    assert_eq!(violations[3].holders.len(), 2);
    assert_eq!(violations[4].address.ip.to_string(), "172.16.0.1");
    assert_eq!(violations[4].holders[0], Location::new("atl-edge-fw02", "br0"));
    assert_eq!(violations[4].holders.len(), 3);
}

#[test]
fn test_report_from_cache() {
    let report = audit_topology_file(CACHE_01, &AuditPolicy::default())
        .expect("Failed to audit topology cache");
    let rows = report.rows();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].vrf, "default");
    assert_eq!(rows[0].subnet, "10.20.0.1");
    assert_eq!(
        rows[0].interfaces,
        vec![
            "atl-core-rtr02:GigabitEthernet0/1.100",
            "atl-core-rtr01:GigabitEthernet0/1.100"
        ]
    );

    let table = render_table(rows);
    assert!(table.starts_with("VRF"));
    assert_eq!(table.lines().count(), 4, "Header, rule and two rows");

    let mut csv = Vec::new();
    write_csv(&mut csv, &report).expect("Failed to write CSV");
    let csv = String::from_utf8(csv).unwrap();
    assert!(csv.contains(
        "mgmt,192.168.99.1,primary,atl-core-rtr02:Vlan99;atl-core-rtr01:Vlan99"
    ));
}

#[test]
fn test_empty_topology_is_clean() {
    let report = audit_topology_file(
        "src/tests/test_data/topology_test_empty.json",
        &AuditPolicy::default(),
    )
    .expect("Failed to audit empty topology");
    assert_eq!(report, Report::Clean);
}

#[test]
fn test_malformed_topology_is_rejected() {
    let err = audit_topology_file(
        "src/tests/test_data/topology_test_malformed.json",
        &AuditPolicy::default(),
    )
    .unwrap_err();
    assert!(err.to_string().contains("missing field `name`"), "Unexpected error: {err}");
}

#[test]
fn test_two_device_primary_duplicate() {
    let topology = parse_topology(
        r#"{"devices": [
            {"name": "A", "networkInstances": [{"name": "core", "interfaces": [
                {"subIface": null, "iface": {"name": "Gi0/1", "adminStatus": "UP",
                    "bridge": {"ipv4": {"addresses": [{"ip": "10.0.0.1", "prefixLength": 24}], "fhrpAddresses": []}}}}
            ]}]},
            {"name": "B", "networkInstances": [{"name": "core", "interfaces": [
                {"subIface": null, "iface": {"name": "Gi0/2", "adminStatus": "UP",
                    "bridge": {"ipv4": {"addresses": [{"ip": "10.0.0.1", "prefixLength": 24}], "fhrpAddresses": []}}}}
            ]}]}
        ]}"#,
    )
    .expect("Failed to parse topology");

    let report = audit_topology(&topology, &AuditPolicy::default());
    let rows = report.rows();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].vrf, "core");
    assert_eq!(rows[0].subnet, "10.0.0.1");
    assert_eq!(rows[0].interfaces, vec!["B:Gi0/2", "A:Gi0/1"]);
}
