//! JSON output for frontend consumption.

use crate::error::Result;
use serde::Serialize;

/// Render any inventory result as pretty-printed JSON.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Print any inventory result as JSON to stdout.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", to_json(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{SubnetSummary, Tags};

    #[test]
    fn test_to_json_camel_case() {
        let subnets = vec![SubnetSummary {
            subnet_id: "subnet-1".to_string(),
            cidr_block: "10.0.1.0/24".to_string(),
            vpc_id: Some("vpc-a".to_string()),
            tags: Tags::new(),
            availability_zone: "ap-northeast-2a".to_string(),
        }];
        let json = to_json(&subnets).unwrap();
        assert!(json.contains("\"subnetId\": \"subnet-1\""));
        assert!(json.contains("\"availabilityZone\""));
        assert!(!json.contains("subnet_id"));
    }
}
