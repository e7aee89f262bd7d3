//! Whole-device lowering and batch isolation

mod common;

use common::*;
use junos_ir::config::LoweringConfig;
use junos_ir::features::policy::{AddressFamily, PolicyFrom, PolicyStatement, PolicyTerm, PolicyThen};
use junos_ir::shared::models::IpProtocol;
use junos_ir::target::LineAction;
use junos_ir::{lower_batch, lower_device, DeviceConfiguration, LoweringError, LoweringPipeline};
use pretty_assertions::assert_eq;

const DEVICE_JSON: &str = r#"{
  "hostname": "branch-fw",
  "registry": {
    "applications": [
      {"name": "A", "terms": [{"name": "A", "protocol": "TCP", "destination_ports": [{"start": 80, "end": 80}]}]},
      {"name": "B", "terms": [{"name": "B", "protocol": "TCP", "destination_ports": [{"start": 443, "end": 443}]}]}
    ],
    "application_sets": [
      {"name": "S", "members": [{"application": "A"}, {"application_set": "T"}]},
      {"name": "T", "members": [{"application": "B"}]}
    ],
    "vlans": [{"name": "users", "vlan_id": 10}]
  },
  "firewall_filters": [
    {
      "name": "F",
      "terms": [
        {
          "name": "t1",
          "froms": [
            {"destination_address": {"address": "10.0.0.0", "wildcard": "0.255.255.255"}},
            {"application": {"application_set": "S"}}
          ],
          "thens": ["accept"]
        }
      ]
    }
  ],
  "screens": [{"name": "untrust", "options": ["icmp_large", "tcp_syn_fin"]}],
  "interface_vlans": {
    "ge-0/0/1": [{"named": "users"}, {"range": {"start": 20, "end": 30}}]
  },
  "bridge_domains": [{"name": "bd-all", "vlan_id": "all"}]
}"#;

#[test]
fn test_lowers_device_from_json() {
    let device = DeviceConfiguration::from_json(DEVICE_JSON).unwrap();
    let lowered = lower_device(&device, &LoweringConfig::default()).unwrap();

    assert_eq!(lowered.hostname, "branch-fw");
    let acl = &lowered.ip_access_lists[0];
    assert_line_count(acl, 2);
    assert_port_line(&acl.lines[0], IpProtocol::Tcp, 80, LineAction::Permit);
    assert_port_line(&acl.lines[1], IpProtocol::Tcp, 443, LineAction::Permit);

    let screen_lines: Vec<_> = lowered.screens[0].lines.iter().map(|l| l.action).collect();
    assert_eq!(screen_lines, vec![LineAction::Deny, LineAction::Deny, LineAction::Permit]);

    let vlans = &lowered.interface_vlans["ge-0/0/1"];
    assert!(vlans.contains(10));
    assert!(vlans.contains(25));
    assert!(!vlans.contains(31));
    assert!(lowered.bridge_domains["bd-all"].contains(4094));
    assert!(lowered.warnings.is_empty(), "{:?}", lowered.warnings.messages());
}

#[test]
fn test_json_roundtrip_preserves_lowering() {
    let device = edge_router("r1");
    let restored = DeviceConfiguration::from_json(&device.to_json().unwrap()).unwrap();
    let config = LoweringConfig::default();

    let original = lower_device(&device, &config).unwrap();
    let again = lower_device(&restored, &config).unwrap();

    assert_eq!(again.ip_access_lists, original.ip_access_lists);
    assert_eq!(again.routing_policies, original.routing_policies);
    assert_eq!(again.route_filter_lists, original.route_filter_lists);
}

#[test]
fn test_lowered_device_serializes() {
    let lowered = lower_device(&edge_router("r1"), &LoweringConfig::default()).unwrap();
    let json = serde_json::to_value(&lowered).unwrap();

    assert_eq!(json["hostname"], "r1");
    assert_eq!(json["routing_policies"][0]["name"], "EXPORT");
    assert_eq!(json["route_filter_lists"][0]["name"], "P");
    assert_eq!(json["ip_access_lists"][0]["lines"][0]["action"], "permit");
}

#[test]
fn test_batch_isolates_failing_device() {
    let broken = DeviceBuilder::new("broken")
        .with_policy(
            PolicyStatement::new("VPN").with_term(
                PolicyTerm::new("t1")
                    .with_from(PolicyFrom::Family(AddressFamily::Iso))
                    .with_then(PolicyThen::Accept),
            ),
        )
        .build();
    let devices = vec![edge_router("r1"), broken, edge_router("r2")];

    let outcomes = lower_batch(&devices, &LoweringConfig::default()).unwrap();

    let hostnames: Vec<_> = outcomes.iter().map(|o| o.hostname.as_str()).collect();
    assert_eq!(hostnames, vec!["r1", "broken", "r2"]);
    assert!(outcomes[0].is_ok());
    assert!(matches!(
        outcomes[1].result,
        Err(LoweringError::UnsupportedFamily { .. })
    ));
    assert!(outcomes[2].is_ok());
}

#[test]
fn test_devices_do_not_share_definitions() {
    let with_sets = edge_router("r1");
    let without = DeviceBuilder::new("r2").with_filter(nested_sets_filter()).build();
    let pipeline = LoweringPipeline::new(pedantic_config()).unwrap();

    let outcomes = pipeline.lower_batch(&[with_sets, without]);

    let first = outcomes[0].result.as_ref().unwrap();
    let second = outcomes[1].result.as_ref().unwrap();
    assert_line_count(&first.ip_access_lists[0], 2);
    assert_line_count(&second.ip_access_lists[0], 0);
    assert_warning_count(&second.warnings, junos_ir::Severity::RedFlag, 1);
}

#[test]
fn test_repeated_lowering_is_identical() {
    let device = edge_router("r1");
    let pipeline = LoweringPipeline::new(LoweringConfig::default()).unwrap();

    let first = serde_json::to_string(&pipeline.lower_device(&device).unwrap()).unwrap();
    let second = serde_json::to_string(&pipeline.lower_device(&device).unwrap()).unwrap();

    assert_eq!(first, second);
}
