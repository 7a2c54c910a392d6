//! Virtual private cloud (VPC) data model.

use super::route_table::RouteTableSummary;
use super::subnet::SubnetSummary;
use super::tags::{tags_to_map, Tags};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A VPC as returned by DescribeVpcs, before any join.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VpcRecord {
    pub vpc_id: String,
    /// Primary IPv4 CIDR block.
    pub cidr_block: String,
    pub state: String,
    pub tags: Tags,
}

/// Represents a VPC with the subnets and route tables that belong to it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VpcSummary {
    pub vpc_id: String,
    pub cidr_block: String,
    pub state: String,
    pub tags: Tags,
    /// Subnets in this VPC. Empty, never absent.
    pub subnets: Vec<SubnetSummary>,
    /// Route tables in this VPC. Empty, never absent.
    pub route_tables: Vec<RouteTableSummary>,
}

impl VpcSummary {
    /// Create a VPC summary with no members yet.
    pub fn new(record: VpcRecord) -> VpcSummary {
        VpcSummary {
            vpc_id: record.vpc_id,
            cidr_block: record.cidr_block,
            state: record.state,
            tags: record.tags,
            subnets: Vec::new(),
            route_tables: Vec::new(),
        }
    }

    /// Value of the `Name` tag, if any.
    pub fn name(&self) -> Option<&str> {
        self.tags.get("Name").map(|s| s.as_str())
    }
}

impl From<&aws_sdk_ec2::types::Vpc> for VpcRecord {
    fn from(vpc: &aws_sdk_ec2::types::Vpc) -> Self {
        VpcRecord {
            vpc_id: vpc.vpc_id().unwrap_or_default().to_string(),
            cidr_block: vpc.cidr_block().unwrap_or_default().to_string(),
            state: vpc
                .state()
                .map(|s| s.as_str().to_string())
                .unwrap_or_default(),
            tags: tags_to_map(vpc.tags()),
        }
    }
}

impl fmt::Display for VpcSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}] ({} subnets, {} route tables)",
            self.name().unwrap_or(&self.vpc_id),
            self.cidr_block,
            self.subnets.len(),
            self.route_tables.len()
        )
    }
}
