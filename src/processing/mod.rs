//! Inventory join logic.
//!
//! Pure functions over already-fetched flat lists:
//! - [`route_table`] - Public/private classification and subnet association
//! - [`vpc`] - VPC aggregation of subnets and route tables
//! - [`nat_gateway`] - NAT gateway to network interface mapping

mod nat_gateway;
mod route_table;
mod vpc;

// Re-export public functions
pub use nat_gateway::{join_nat_gateways, map_gateway_interfaces};
pub use route_table::{
    is_public_route_table, join_route_tables, AssociationMode, INTERNET_GATEWAY_PREFIX,
};
pub use vpc::join_vpcs;
