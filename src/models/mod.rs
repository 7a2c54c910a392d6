//! Domain models for the network inventory.
//!
//! Flat DTOs are converted directly from EC2 describe results. Composite
//! DTOs embed related DTOs by value and are produced by [`crate::processing`]:
//! - [`Ec2Instance`], [`SubnetSummary`], [`SecurityGroupSummary`],
//!   [`InternetGatewaySummary`], [`ElasticIpSummary`], [`NetworkInterfaceSummary`]
//! - [`RouteTableRecord`] -> [`RouteTableSummary`]
//! - [`VpcRecord`] -> [`VpcSummary`]
//! - [`NatGatewayRecord`] -> [`NatGatewaySummary`]

mod address;
mod gateway;
mod instance;
mod network_interface;
mod route_table;
mod security_group;
mod subnet;
mod tags;
mod vpc;

// Re-export public types
pub use address::ElasticIpSummary;
pub use gateway::{GatewayAttachment, InternetGatewaySummary, NatGatewayRecord, NatGatewaySummary};
pub use instance::Ec2Instance;
pub use network_interface::NetworkInterfaceSummary;
pub use route_table::{RouteEntry, RouteTableAssociation, RouteTableRecord, RouteTableSummary};
pub use security_group::SecurityGroupSummary;
pub use subnet::SubnetSummary;
pub use tags::{tags_to_map, Tags, NOT_AVAILABLE};
pub use vpc::{VpcRecord, VpcSummary};
