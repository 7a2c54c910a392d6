use super::tags::{tags_to_map, Tags};
use serde::{Deserialize, Serialize};

/// An elastic IP allocation as returned by DescribeAddresses.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ElasticIpSummary {
    pub allocation_id: String,
    pub public_ip: String,
    /// `vpc` or `standard`.
    pub domain: String,
    pub tags: Tags,
    pub association_id: Option<String>,
    pub network_interface_id: Option<String>,
}

impl From<&aws_sdk_ec2::types::Address> for ElasticIpSummary {
    fn from(address: &aws_sdk_ec2::types::Address) -> Self {
        ElasticIpSummary {
            allocation_id: address.allocation_id().unwrap_or_default().to_string(),
            public_ip: address.public_ip().unwrap_or_default().to_string(),
            domain: address
                .domain()
                .map(|d| d.as_str().to_string())
                .unwrap_or_default(),
            tags: tags_to_map(address.tags()),
            association_id: address.association_id().map(|s| s.to_string()),
            network_interface_id: address.network_interface_id().map(|s| s.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_ec2::types::{Address, DomainType};

    #[test]
    fn test_from_sdk() {
        let address = Address::builder()
            .allocation_id("eipalloc-1")
            .public_ip("13.124.5.6")
            .domain(DomainType::Vpc)
            .network_interface_id("eni-1")
            .build();
        let dto = ElasticIpSummary::from(&address);
        assert_eq!(dto.allocation_id, "eipalloc-1");
        assert_eq!(dto.domain, "vpc");
        assert_eq!(dto.network_interface_id.as_deref(), Some("eni-1"));
        assert_eq!(dto.association_id, None);
    }
}
