//! Subnet data model.

use super::tags::{tags_to_map, Tags};
use serde::{Deserialize, Serialize};

/// A subnet as returned by DescribeSubnets.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SubnetSummary {
    /// Subnet identifier, e.g. `subnet-0a1b`.
    pub subnet_id: String,
    /// IPv4 CIDR block of the subnet.
    pub cidr_block: String,
    /// Owning VPC. Subnets without one never join.
    pub vpc_id: Option<String>,
    pub tags: Tags,
    /// Availability zone the subnet lives in.
    pub availability_zone: String,
}

impl SubnetSummary {
    /// Whether this subnet belongs to the given VPC.
    pub fn in_vpc(&self, vpc_id: Option<&str>) -> bool {
        matches!((self.vpc_id.as_deref(), vpc_id), (Some(a), Some(b)) if a == b)
    }
}

impl From<&aws_sdk_ec2::types::Subnet> for SubnetSummary {
    fn from(subnet: &aws_sdk_ec2::types::Subnet) -> Self {
        SubnetSummary {
            subnet_id: subnet.subnet_id().unwrap_or_default().to_string(),
            cidr_block: subnet.cidr_block().unwrap_or_default().to_string(),
            vpc_id: subnet.vpc_id().map(|s| s.to_string()),
            tags: tags_to_map(subnet.tags()),
            availability_zone: subnet.availability_zone().unwrap_or_default().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_ec2::types::{Subnet, Tag};

    #[test]
    fn test_from_sdk() {
        let subnet = Subnet::builder()
            .subnet_id("subnet-1")
            .cidr_block("10.0.1.0/24")
            .vpc_id("vpc-a")
            .availability_zone("ap-northeast-2a")
            .tags(Tag::builder().key("Name").value("public-a").build())
            .build();
        let dto = SubnetSummary::from(&subnet);
        assert_eq!(dto.subnet_id, "subnet-1");
        assert_eq!(dto.cidr_block, "10.0.1.0/24");
        assert_eq!(dto.vpc_id.as_deref(), Some("vpc-a"));
        assert_eq!(dto.availability_zone, "ap-northeast-2a");
        assert_eq!(dto.tags["Name"], "public-a");
    }

    #[test]
    fn test_in_vpc() {
        let dto = SubnetSummary::from(&Subnet::builder().subnet_id("s").vpc_id("vpc-a").build());
        assert!(dto.in_vpc(Some("vpc-a")));
        assert!(!dto.in_vpc(Some("vpc-b")));
        assert!(!dto.in_vpc(None));

        let orphan = SubnetSummary::from(&Subnet::builder().subnet_id("s2").build());
        assert!(!orphan.in_vpc(None));
    }
}
