//! Route table classification and subnet association.

use crate::error::InventoryError;
use crate::models::{RouteEntry, RouteTableRecord, RouteTableSummary, SubnetSummary};
use itertools::Itertools;
use std::collections::HashSet;
use std::str::FromStr;

/// Gateway id prefix that marks a route to an internet gateway.
pub const INTERNET_GATEWAY_PREFIX: &str = "igw-";

/// How a route table claims subnets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AssociationMode {
    /// Every subnet in the table's VPC is claimed. Approximate when a VPC
    /// has more than one route table.
    #[default]
    VpcMembership,
    /// Only subnets named by an association record are claimed. The VPC's
    /// main table also claims same-VPC subnets no other table names.
    Explicit,
}

impl FromStr for AssociationMode {
    type Err = InventoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "vpc" | "vpc-membership" => Ok(AssociationMode::VpcMembership),
            "explicit" => Ok(AssociationMode::Explicit),
            other => Err(InventoryError::Config(format!(
                "unknown route table association mode '{other}' (expected 'vpc' or 'explicit')"
            ))),
        }
    }
}

/// A route table is public when any route targets an internet gateway.
pub fn is_public_route_table(routes: &[RouteEntry]) -> bool {
    routes.iter().any(|route| {
        route
            .gateway_id
            .as_deref()
            .is_some_and(|id| id.starts_with(INTERNET_GATEWAY_PREFIX))
    })
}

/// Join route tables with subnets.
///
/// Each table is classified public/private, then the subnets it claims under
/// `mode` are placed in the matching bucket.
///
/// # Arguments
/// * `tables` - Route tables from DescribeRouteTables
/// * `subnets` - All subnets from DescribeSubnets
/// * `mode` - How tables claim subnets
///
/// # Returns
/// One summary per table, in input order.
pub fn join_route_tables(
    tables: Vec<RouteTableRecord>,
    subnets: &[SubnetSummary],
    mode: AssociationMode,
) -> Vec<RouteTableSummary> {
    let explicitly_associated: HashSet<&str> = tables
        .iter()
        .flat_map(|t| t.associations.iter())
        .filter_map(|a| a.subnet_id.as_deref())
        .collect();

    if mode == AssociationMode::VpcMembership {
        warn_shared_vpcs(&tables);
    }

    tables
        .iter()
        .map(|table| {
            let public = is_public_route_table(&table.routes);
            let claimed: Vec<SubnetSummary> = subnets
                .iter()
                .filter(|s| s.in_vpc(table.vpc_id.as_deref()))
                .filter(|s| match mode {
                    AssociationMode::VpcMembership => true,
                    AssociationMode::Explicit => {
                        table.is_associated_with(&s.subnet_id)
                            || (table.is_main()
                                && !explicitly_associated.contains(s.subnet_id.as_str()))
                    }
                })
                .cloned()
                .collect();

            log::debug!(
                "route table {} public={} claims {} subnet(s)",
                table.route_table_id,
                public,
                claimed.len()
            );

            let (public_subnets, private_subnets) = if public {
                (claimed, Vec::new())
            } else {
                (Vec::new(), claimed)
            };

            RouteTableSummary {
                route_table_id: table.route_table_id.clone(),
                vpc_id: table.vpc_id.clone(),
                routes: table.routes.clone(),
                tags: table.tags.clone(),
                associations: table.associations.clone(),
                public,
                public_subnets,
                private_subnets,
            }
        })
        .collect()
}

/// Log VPCs whose subnets are claimed by several tables at once.
fn warn_shared_vpcs(tables: &[RouteTableRecord]) {
    for (vpc_id, count) in tables
        .iter()
        .filter_map(|t| t.vpc_id.as_deref())
        .counts()
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .sorted()
    {
        log::warn!(
            "VPC {vpc_id} has {count} route tables; subnet classification by VPC membership is approximate"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RouteTableAssociation, Tags};

    fn route(gateway_id: Option<&str>) -> RouteEntry {
        RouteEntry {
            gateway_id: gateway_id.map(|s| s.to_string()),
            destination_cidr_block: Some("0.0.0.0/0".to_string()),
        }
    }

    fn subnet(id: &str, vpc: Option<&str>) -> SubnetSummary {
        SubnetSummary {
            subnet_id: id.to_string(),
            cidr_block: "10.0.0.0/24".to_string(),
            vpc_id: vpc.map(|s| s.to_string()),
            tags: Tags::new(),
            availability_zone: "ap-northeast-2a".to_string(),
        }
    }

    fn table(
        id: &str,
        vpc: Option<&str>,
        routes: Vec<RouteEntry>,
        associations: Vec<RouteTableAssociation>,
    ) -> RouteTableRecord {
        RouteTableRecord {
            route_table_id: id.to_string(),
            vpc_id: vpc.map(|s| s.to_string()),
            routes,
            tags: Tags::new(),
            associations,
        }
    }

    fn assoc(subnet_id: Option<&str>, main: bool) -> RouteTableAssociation {
        RouteTableAssociation {
            route_table_association_id: format!("rtbassoc-{}", subnet_id.unwrap_or("main")),
            subnet_id: subnet_id.map(|s| s.to_string()),
            main,
        }
    }

    fn ids(subnets: &[SubnetSummary]) -> Vec<&str> {
        subnets.iter().map(|s| s.subnet_id.as_str()).collect()
    }

    #[test]
    fn test_classification() {
        assert!(is_public_route_table(&[route(Some("local")), route(Some("igw-123"))]));
        assert!(!is_public_route_table(&[]));
        assert!(!is_public_route_table(&[route(Some("local")), route(None)]));
        assert!(!is_public_route_table(&[route(Some("nat-123"))]));
        assert!(!is_public_route_table(&[route(Some("vgw-igw-1"))]));
    }

    #[test]
    fn test_vpc_membership_buckets_by_classification() {
        let subnets = vec![
            subnet("subnet-a1", Some("vpc-a")),
            subnet("subnet-a2", Some("vpc-a")),
            subnet("subnet-b1", Some("vpc-b")),
            subnet("subnet-x", None),
        ];
        let tables = vec![
            table("rtb-pub", Some("vpc-a"), vec![route(Some("igw-1"))], vec![]),
            table("rtb-priv", Some("vpc-b"), vec![route(Some("local"))], vec![]),
        ];

        let joined = join_route_tables(tables, &subnets, AssociationMode::VpcMembership);
        assert_eq!(joined.len(), 2);

        assert!(joined[0].public);
        assert_eq!(ids(&joined[0].public_subnets), vec!["subnet-a1", "subnet-a2"]);
        assert!(joined[0].private_subnets.is_empty());

        assert!(!joined[1].public);
        assert!(joined[1].public_subnets.is_empty());
        assert_eq!(ids(&joined[1].private_subnets), vec!["subnet-b1"]);
    }

    #[test]
    fn test_vpc_membership_overclaims_shared_vpc() {
        // A private table claims every same-VPC subnet, including the one the
        // public table is actually associated with.
        let subnets = vec![
            subnet("subnet-pub", Some("vpc-a")),
            subnet("subnet-priv", Some("vpc-a")),
        ];
        let tables = vec![
            table(
                "rtb-pub",
                Some("vpc-a"),
                vec![route(Some("igw-1"))],
                vec![assoc(Some("subnet-pub"), false)],
            ),
            table("rtb-main", Some("vpc-a"), vec![], vec![assoc(None, true)]),
        ];
        let joined = join_route_tables(tables, &subnets, AssociationMode::VpcMembership);
        assert_eq!(
            ids(&joined[1].private_subnets),
            vec!["subnet-pub", "subnet-priv"]
        );
    }

    #[test]
    fn test_explicit_mode_uses_associations_and_main_table() {
        let subnets = vec![
            subnet("subnet-pub", Some("vpc-a")),
            subnet("subnet-priv", Some("vpc-a")),
            subnet("subnet-b", Some("vpc-b")),
        ];
        let tables = vec![
            table(
                "rtb-pub",
                Some("vpc-a"),
                vec![route(Some("igw-1"))],
                vec![assoc(Some("subnet-pub"), false)],
            ),
            table("rtb-main", Some("vpc-a"), vec![], vec![assoc(None, true)]),
        ];
        let joined = join_route_tables(tables, &subnets, AssociationMode::Explicit);

        assert_eq!(ids(&joined[0].public_subnets), vec!["subnet-pub"]);
        assert!(joined[0].private_subnets.is_empty());

        assert_eq!(ids(&joined[1].private_subnets), vec!["subnet-priv"]);
        assert!(joined[1].public_subnets.is_empty());
    }

    #[test]
    fn test_table_without_vpc_claims_nothing() {
        let subnets = vec![subnet("subnet-x", None), subnet("subnet-a", Some("vpc-a"))];
        let tables = vec![table("rtb-orphan", None, vec![], vec![])];
        let joined = join_route_tables(tables, &subnets, AssociationMode::VpcMembership);
        assert!(joined[0].private_subnets.is_empty());
        assert!(joined[0].public_subnets.is_empty());
    }

    #[test]
    fn test_association_mode_from_str() {
        assert_eq!(
            "vpc".parse::<AssociationMode>().unwrap(),
            AssociationMode::VpcMembership
        );
        assert_eq!(
            " Explicit ".parse::<AssociationMode>().unwrap(),
            AssociationMode::Explicit
        );
        assert!("subnet".parse::<AssociationMode>().is_err());
    }
}
