//! Route table data models.
//!
//! [`RouteTableRecord`] is the flat describe result. [`RouteTableSummary`] is
//! the joined view carrying the subnets a table is considered to serve.

use super::subnet::SubnetSummary;
use super::tags::{tags_to_map, Tags};
use serde::{Deserialize, Serialize};

/// A single route inside a route table.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RouteEntry {
    pub gateway_id: Option<String>,
    pub destination_cidr_block: Option<String>,
}

/// Provider-supplied link between a route table and a subnet.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RouteTableAssociation {
    pub route_table_association_id: String,
    /// Associated subnet. Absent for gateway associations.
    pub subnet_id: Option<String>,
    /// Set on the association that marks the VPC's main table.
    pub main: bool,
}

/// A route table before it is joined with subnets.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RouteTableRecord {
    pub route_table_id: String,
    pub vpc_id: Option<String>,
    pub routes: Vec<RouteEntry>,
    pub tags: Tags,
    pub associations: Vec<RouteTableAssociation>,
}

impl RouteTableRecord {
    /// Whether one of the associations marks this as the VPC's main table.
    pub fn is_main(&self) -> bool {
        self.associations.iter().any(|a| a.main)
    }

    /// Whether an explicit association names the given subnet.
    pub fn is_associated_with(&self, subnet_id: &str) -> bool {
        self.associations
            .iter()
            .any(|a| a.subnet_id.as_deref() == Some(subnet_id))
    }
}

/// A route table with its subnets split by public/private classification.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RouteTableSummary {
    pub route_table_id: String,
    pub vpc_id: Option<String>,
    pub routes: Vec<RouteEntry>,
    pub tags: Tags,
    pub associations: Vec<RouteTableAssociation>,
    /// True when any route targets an internet gateway.
    pub public: bool,
    pub public_subnets: Vec<SubnetSummary>,
    pub private_subnets: Vec<SubnetSummary>,
}

impl From<&aws_sdk_ec2::types::Route> for RouteEntry {
    fn from(route: &aws_sdk_ec2::types::Route) -> Self {
        RouteEntry {
            gateway_id: route.gateway_id().map(|s| s.to_string()),
            destination_cidr_block: route.destination_cidr_block().map(|s| s.to_string()),
        }
    }
}

impl From<&aws_sdk_ec2::types::RouteTableAssociation> for RouteTableAssociation {
    fn from(association: &aws_sdk_ec2::types::RouteTableAssociation) -> Self {
        RouteTableAssociation {
            route_table_association_id: association
                .route_table_association_id()
                .unwrap_or_default()
                .to_string(),
            subnet_id: association.subnet_id().map(|s| s.to_string()),
            main: association.main().unwrap_or(false),
        }
    }
}

impl From<&aws_sdk_ec2::types::RouteTable> for RouteTableRecord {
    fn from(table: &aws_sdk_ec2::types::RouteTable) -> Self {
        RouteTableRecord {
            route_table_id: table.route_table_id().unwrap_or_default().to_string(),
            vpc_id: table.vpc_id().map(|s| s.to_string()),
            routes: table.routes().iter().map(RouteEntry::from).collect(),
            tags: tags_to_map(table.tags()),
            associations: table
                .associations()
                .iter()
                .map(RouteTableAssociation::from)
                .collect(),
        }
    }
}
