//! VPC aggregation.
//!
//! Groups subnets and route tables into their parent VPCs.

use crate::models::{RouteTableSummary, SubnetSummary, VpcRecord, VpcSummary};

/// Build VPC summaries from flat describe results.
///
/// # Arguments
/// * `vpcs` - VPCs from DescribeVpcs
/// * `subnets` - All subnets
/// * `route_tables` - Joined route tables
///
/// # Returns
/// One summary per VPC, in input order. Subnets and route tables without a
/// VPC id are skipped.
pub fn join_vpcs(
    vpcs: Vec<VpcRecord>,
    subnets: &[SubnetSummary],
    route_tables: &[RouteTableSummary],
) -> Vec<VpcSummary> {
    vpcs.into_iter()
        .map(|record| {
            let mut vpc = VpcSummary::new(record);
            let vpc_id = Some(vpc.vpc_id.as_str());

            vpc.subnets = subnets
                .iter()
                .filter(|s| s.in_vpc(vpc_id))
                .cloned()
                .collect();
            vpc.route_tables = route_tables
                .iter()
                .filter(|t| t.vpc_id.is_some() && t.vpc_id.as_deref() == vpc_id)
                .cloned()
                .collect();

            log::debug!("VPC: {vpc}");
            vpc
        })
        .collect()
}
