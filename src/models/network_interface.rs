//! Elastic network interface (ENI) data model.

use super::tags::{tags_to_map, Tags};
use serde::{Deserialize, Serialize};

/// A network interface as returned by DescribeNetworkInterfaces.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NetworkInterfaceSummary {
    pub network_interface_id: String,
    pub subnet_id: Option<String>,
    pub vpc_id: Option<String>,
    /// Interface status, e.g. `in-use`.
    pub status: String,
    pub description: String,
    pub tags: Tags,
    pub private_ip_addresses: Vec<String>,
    /// Public IP of the interface's association. Empty when unassociated.
    pub public_ip_addresses: Vec<String>,
}

impl From<&aws_sdk_ec2::types::NetworkInterface> for NetworkInterfaceSummary {
    fn from(eni: &aws_sdk_ec2::types::NetworkInterface) -> Self {
        NetworkInterfaceSummary {
            network_interface_id: eni.network_interface_id().unwrap_or_default().to_string(),
            subnet_id: eni.subnet_id().map(|s| s.to_string()),
            vpc_id: eni.vpc_id().map(|s| s.to_string()),
            status: eni
                .status()
                .map(|s| s.as_str().to_string())
                .unwrap_or_default(),
            description: eni.description().unwrap_or_default().to_string(),
            tags: tags_to_map(eni.tag_set()),
            private_ip_addresses: eni
                .private_ip_addresses()
                .iter()
                .filter_map(|ip| ip.private_ip_address().map(|s| s.to_string()))
                .collect(),
            public_ip_addresses: eni
                .association()
                .and_then(|a| a.public_ip())
                .map(|ip| vec![ip.to_string()])
                .unwrap_or_default(),
        }
    }
}
