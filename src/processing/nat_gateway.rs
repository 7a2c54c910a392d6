//! NAT gateway to network interface join.

use crate::models::{NatGatewayRecord, NatGatewaySummary, NetworkInterfaceSummary};
use itertools::Itertools;
use std::collections::HashMap;

/// Map each NAT gateway id to the interfaces named in its address list.
///
/// Interfaces keep their describe order within each gateway's list.
pub fn map_gateway_interfaces<'a>(
    gateways: &[NatGatewayRecord],
    interfaces: &'a [NetworkInterfaceSummary],
) -> HashMap<String, Vec<&'a NetworkInterfaceSummary>> {
    interfaces
        .iter()
        .flat_map(move |eni| {
            gateways
                .iter()
                .filter(move |nat| nat.network_interface_ids.contains(&eni.network_interface_id))
                .map(move |nat| (nat.nat_gateway_id.clone(), eni))
        })
        .into_group_map()
}

/// Attach network interfaces to their NAT gateways.
///
/// # Arguments
/// * `gateways` - NAT gateways from DescribeNatGateways
/// * `interfaces` - All interfaces from DescribeNetworkInterfaces
///
/// # Returns
/// One summary per gateway, in input order. A gateway whose interfaces were
/// not returned gets an empty list.
pub fn join_nat_gateways(
    gateways: Vec<NatGatewayRecord>,
    interfaces: &[NetworkInterfaceSummary],
) -> Vec<NatGatewaySummary> {
    let mut by_gateway = map_gateway_interfaces(&gateways, interfaces);

    gateways
        .into_iter()
        .map(|nat| {
            let enis: Vec<NetworkInterfaceSummary> = by_gateway
                .remove(&nat.nat_gateway_id)
                .unwrap_or_default()
                .into_iter()
                .cloned()
                .collect();
            if enis.len() < nat.network_interface_ids.len() {
                log::debug!(
                    "NAT gateway {} lists {} interface(s), found {}",
                    nat.nat_gateway_id,
                    nat.network_interface_ids.len(),
                    enis.len()
                );
            }
            NatGatewaySummary::new(nat, enis)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Tags;

    fn nat(id: &str, enis: &[&str]) -> NatGatewayRecord {
        NatGatewayRecord {
            nat_gateway_id: id.to_string(),
            state: "available".to_string(),
            tags: Tags::new(),
            vpc_id: Some("vpc-a".to_string()),
            subnet_id: Some("subnet-pub".to_string()),
            network_interface_ids: enis.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn eni(id: &str) -> NetworkInterfaceSummary {
        NetworkInterfaceSummary {
            network_interface_id: id.to_string(),
            subnet_id: Some("subnet-pub".to_string()),
            vpc_id: Some("vpc-a".to_string()),
            status: "in-use".to_string(),
            description: String::new(),
            tags: Tags::new(),
            private_ip_addresses: vec!["10.0.0.10".to_string()],
            public_ip_addresses: vec![],
        }
    }

    #[test]
    fn test_join_nat_gateways() {
        let gateways = vec![nat("nat-1", &["eni-1"]), nat("nat-2", &["eni-3", "eni-2"])];
        let interfaces = vec![eni("eni-1"), eni("eni-2"), eni("eni-3"), eni("eni-9")];

        let joined = join_nat_gateways(gateways, &interfaces);
        assert_eq!(joined.len(), 2);
        assert_eq!(joined[0].network_interfaces.len(), 1);
        assert_eq!(joined[0].network_interfaces[0].network_interface_id, "eni-1");

        let ids: Vec<&str> = joined[1]
            .network_interfaces
            .iter()
            .map(|e| e.network_interface_id.as_str())
            .collect();
        assert_eq!(ids, vec!["eni-2", "eni-3"]);
    }

    #[test]
    fn test_gateway_without_interfaces() {
        let joined = join_nat_gateways(
            vec![nat("nat-1", &[]), nat("nat-2", &["eni-gone"])],
            &[eni("eni-1")],
        );
        assert!(joined[0].network_interfaces.is_empty());
        assert!(joined[1].network_interfaces.is_empty());
        assert_eq!(joined[1].network_interface_ids, vec!["eni-gone"]);
    }

    #[test]
    fn test_shared_interface_listed_under_each_gateway() {
        let gateways = vec![nat("nat-1", &["eni-1"]), nat("nat-2", &["eni-1"])];
        let map = map_gateway_interfaces(&gateways, &[eni("eni-1")]);
        assert_eq!(map.len(), 2);
        assert_eq!(map["nat-1"].len(), 1);
        assert_eq!(map["nat-2"].len(), 1);
    }
}
