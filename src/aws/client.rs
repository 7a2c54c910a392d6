//! EC2 client construction.

use super::describe::Ec2Describe;
use crate::error::Result;
use crate::membership::AwsKeys;
use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_ec2::config::{Credentials, Region};
use aws_sdk_ec2::Client;

/// Name recorded as the provider of member-supplied credentials.
pub const CREDENTIALS_PROVIDER_NAME: &str = "member-service";

/// Builds a describe provider for one request.
#[async_trait]
pub trait ProviderFactory: Send + Sync {
    type Provider: Ec2Describe;

    async fn connect(&self, keys: &AwsKeys, region: &str) -> Result<Self::Provider>;
}

/// Factory producing a fresh [`aws_sdk_ec2::Client`] per request.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ec2ClientFactory;

#[async_trait]
impl ProviderFactory for Ec2ClientFactory {
    type Provider = Client;

    async fn connect(&self, keys: &AwsKeys, region: &str) -> Result<Client> {
        Ok(build_client(keys, region).await)
    }
}

/// Create an EC2 client from static credentials pinned to `region`.
pub async fn build_client(keys: &AwsKeys, region: &str) -> Client {
    log::debug!(
        "building EC2 client region={region} access_key={}",
        keys.access_key()
    );
    let credentials = Credentials::new(
        keys.access_key(),
        keys.secret_key(),
        None,
        None,
        CREDENTIALS_PROVIDER_NAME,
    );
    let config = aws_config::defaults(BehaviorVersion::latest())
        .credentials_provider(credentials)
        .region(Region::new(region.to_string()))
        .load()
        .await;

    Client::new(&config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_build_client_uses_region() {
        let client = build_client(&AwsKeys::new("AKIATEST", "secret"), "ap-northeast-2").await;
        assert_eq!(
            client.config().region().map(|r| r.as_ref()),
            Some("ap-northeast-2")
        );
    }
}
