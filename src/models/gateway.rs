//! Internet and NAT gateway data models.

use super::network_interface::NetworkInterfaceSummary;
use super::tags::{tags_to_map, Tags};
use serde::{Deserialize, Serialize};

/// Attachment of an internet gateway to a VPC.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GatewayAttachment {
    pub vpc_id: Option<String>,
    /// Attachment state, e.g. `available`.
    pub state: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InternetGatewaySummary {
    pub internet_gateway_id: String,
    pub tags: Tags,
    pub attachments: Vec<GatewayAttachment>,
}

/// A NAT gateway before interfaces are attached.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NatGatewayRecord {
    pub nat_gateway_id: String,
    pub state: String,
    pub tags: Tags,
    pub vpc_id: Option<String>,
    pub subnet_id: Option<String>,
    /// Interface ids taken from the gateway's address list.
    pub network_interface_ids: Vec<String>,
}

/// A NAT gateway with its network interfaces embedded.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NatGatewaySummary {
    pub nat_gateway_id: String,
    pub state: String,
    pub tags: Tags,
    pub vpc_id: Option<String>,
    pub subnet_id: Option<String>,
    pub network_interface_ids: Vec<String>,
    pub network_interfaces: Vec<NetworkInterfaceSummary>,
}

impl NatGatewaySummary {
    pub fn new(
        record: NatGatewayRecord,
        network_interfaces: Vec<NetworkInterfaceSummary>,
    ) -> NatGatewaySummary {
        NatGatewaySummary {
            nat_gateway_id: record.nat_gateway_id,
            state: record.state,
            tags: record.tags,
            vpc_id: record.vpc_id,
            subnet_id: record.subnet_id,
            network_interface_ids: record.network_interface_ids,
            network_interfaces,
        }
    }
}

impl From<&aws_sdk_ec2::types::InternetGateway> for InternetGatewaySummary {
    fn from(igw: &aws_sdk_ec2::types::InternetGateway) -> Self {
        InternetGatewaySummary {
            internet_gateway_id: igw.internet_gateway_id().unwrap_or_default().to_string(),
            tags: tags_to_map(igw.tags()),
            attachments: igw
                .attachments()
                .iter()
                .map(|a| GatewayAttachment {
                    vpc_id: a.vpc_id().map(|s| s.to_string()),
                    state: a
                        .state()
                        .map(|s| s.as_str().to_string())
                        .unwrap_or_default(),
                })
                .collect(),
        }
    }
}

impl From<&aws_sdk_ec2::types::NatGateway> for NatGatewayRecord {
    fn from(nat: &aws_sdk_ec2::types::NatGateway) -> Self {
        NatGatewayRecord {
            nat_gateway_id: nat.nat_gateway_id().unwrap_or_default().to_string(),
            state: nat
                .state()
                .map(|s| s.as_str().to_string())
                .unwrap_or_default(),
            tags: tags_to_map(nat.tags()),
            vpc_id: nat.vpc_id().map(|s| s.to_string()),
            subnet_id: nat.subnet_id().map(|s| s.to_string()),
            network_interface_ids: nat
                .nat_gateway_addresses()
                .iter()
                .filter_map(|a| a.network_interface_id().map(|s| s.to_string()))
                .collect(),
        }
    }
}
