use super::tags::{tags_to_map, Tags};
use serde::{Deserialize, Serialize};

/// A security group as returned by DescribeSecurityGroups.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SecurityGroupSummary {
    pub group_id: String,
    pub group_name: String,
    pub description: String,
    pub tags: Tags,
    pub vpc_id: Option<String>,
}

impl From<&aws_sdk_ec2::types::SecurityGroup> for SecurityGroupSummary {
    fn from(group: &aws_sdk_ec2::types::SecurityGroup) -> Self {
        SecurityGroupSummary {
            group_id: group.group_id().unwrap_or_default().to_string(),
            group_name: group.group_name().unwrap_or_default().to_string(),
            description: group.description().unwrap_or_default().to_string(),
            tags: tags_to_map(group.tags()),
            vpc_id: group.vpc_id().map(|s| s.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_ec2::types::SecurityGroup;

    #[test]
    fn test_from_sdk() {
        let group = SecurityGroup::builder()
            .group_id("sg-1")
            .group_name("default")
            .description("default VPC security group")
            .vpc_id("vpc-a")
            .build();
        let dto = SecurityGroupSummary::from(&group);
        assert_eq!(dto.group_id, "sg-1");
        assert_eq!(dto.group_name, "default");
        assert_eq!(dto.vpc_id.as_deref(), Some("vpc-a"));
        assert!(dto.tags.is_empty());
    }
}
