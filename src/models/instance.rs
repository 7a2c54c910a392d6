//! EC2 instance summary.

use super::tags::{tags_to_map, Tags, NOT_AVAILABLE};
use serde::{Deserialize, Serialize};

/// A virtual machine as shown to the frontend.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Ec2Instance {
    pub instance_id: String,
    /// Lifecycle state name, e.g. `running`.
    pub state: String,
    pub tags: Tags,
    /// Public IPv4 address or `N/A`.
    pub public_ip_address: String,
    /// Private IPv4 address or `N/A`.
    pub private_ip_address: String,
}

impl From<&aws_sdk_ec2::types::Instance> for Ec2Instance {
    fn from(instance: &aws_sdk_ec2::types::Instance) -> Self {
        Ec2Instance {
            instance_id: instance.instance_id().unwrap_or_default().to_string(),
            state: instance
                .state()
                .and_then(|s| s.name())
                .map(|n| n.as_str().to_string())
                .unwrap_or_else(|| "unknown".to_string()),
            tags: tags_to_map(instance.tags()),
            public_ip_address: instance
                .public_ip_address()
                .unwrap_or(NOT_AVAILABLE)
                .to_string(),
            private_ip_address: instance
                .private_ip_address()
                .unwrap_or(NOT_AVAILABLE)
                .to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_ec2::types::{Instance, InstanceState, InstanceStateName, Tag};

    #[test]
    fn test_missing_ips_use_placeholder() {
        let instance = Instance::builder()
            .instance_id("i-0abc")
            .state(InstanceState::builder().name(InstanceStateName::Stopped).build())
            .build();
        let dto = Ec2Instance::from(&instance);
        assert_eq!(dto.instance_id, "i-0abc");
        assert_eq!(dto.state, "stopped");
        assert_eq!(dto.public_ip_address, "N/A");
        assert_eq!(dto.private_ip_address, "N/A");
        assert!(dto.tags.is_empty());
    }

    #[test]
    fn test_present_ips_and_tags() {
        let instance = Instance::builder()
            .instance_id("i-0def")
            .state(InstanceState::builder().name(InstanceStateName::Running).build())
            .public_ip_address("3.34.1.2")
            .private_ip_address("10.0.1.15")
            .tags(Tag::builder().key("Name").value("web-1").build())
            .build();
        let dto = Ec2Instance::from(&instance);
        assert_eq!(dto.state, "running");
        assert_eq!(dto.public_ip_address, "3.34.1.2");
        assert_eq!(dto.private_ip_address, "10.0.1.15");
        assert_eq!(dto.tags["Name"], "web-1");
    }

    #[test]
    fn test_only_private_ip() {
        let instance = Instance::builder()
            .instance_id("i-0priv")
            .private_ip_address("10.0.2.7")
            .build();
        let dto = Ec2Instance::from(&instance);
        assert_eq!(dto.state, "unknown");
        assert_eq!(dto.public_ip_address, NOT_AVAILABLE);
        assert_eq!(dto.private_ip_address, "10.0.2.7");
    }

    #[test]
    fn test_serializes_camel_case() {
        let dto = Ec2Instance::from(&Instance::builder().instance_id("i-1").build());
        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["instanceId"], "i-1");
        assert_eq!(json["publicIpAddress"], "N/A");
    }
}
