//! HTTP client for the membership service.

use super::envelope::{interpret_response, CredentialLookup, NotFoundReason};
use crate::config::InventoryConfig;
use crate::error::{InventoryError, Result};
use async_trait::async_trait;
use reqwest::Url;

/// Identity an inventory request is made on behalf of.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caller {
    pub email: String,
    pub company_name: String,
}

impl Caller {
    pub fn new(email: impl Into<String>, company_name: impl Into<String>) -> Self {
        Caller {
            email: email.into(),
            company_name: company_name.into(),
        }
    }
}

/// Source of per-caller AWS credentials.
#[async_trait]
pub trait CredentialSource: Send + Sync {
    /// Look up credentials for a caller. Never fails: every failure is a
    /// [`CredentialLookup::NotFound`] with its reason.
    async fn lookup(&self, caller: &Caller) -> CredentialLookup;
}

/// Resolves credentials through `GET /{service}/api/members/{email}/{company}`.
#[derive(Debug, Clone)]
pub struct MemberCredentialResolver {
    http: reqwest::Client,
    base_url: Url,
    service_name: String,
}

impl MemberCredentialResolver {
    /// Create a resolver from the configured service URL, name and timeout.
    ///
    /// # Returns
    /// * `Err(InventoryError::Config)` - If the service URL is not a usable base URL
    /// * `Err(InventoryError::Http)` - If the HTTP client cannot be built
    pub fn new(config: &InventoryConfig) -> Result<Self> {
        let base_url = Url::parse(&config.member_service_url).map_err(|e| {
            InventoryError::Config(format!(
                "member service url '{}': {e}",
                config.member_service_url
            ))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(InventoryError::Config(format!(
                "member service url '{}' cannot be a base URL",
                config.member_service_url
            )));
        }

        let http = reqwest::Client::builder()
            .timeout(config.member_service_timeout)
            .build()?;

        Ok(MemberCredentialResolver {
            http,
            base_url,
            service_name: config.member_service_name.clone(),
        })
    }

    /// Build the lookup URL for a caller. Each segment is percent-encoded.
    pub fn member_url(&self, caller: &Caller) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend([
                self.service_name.as_str(),
                "api",
                "members",
                caller.email.as_str(),
                caller.company_name.as_str(),
            ]);
        }
        url
    }
}

#[async_trait]
impl CredentialSource for MemberCredentialResolver {
    async fn lookup(&self, caller: &Caller) -> CredentialLookup {
        let url = self.member_url(caller);
        log::debug!("credential lookup GET {url}");

        let response = match self.http.get(url).send().await {
            Ok(response) => response,
            Err(e) => {
                log::error!("credential lookup for {} failed: {e}", caller.email);
                return CredentialLookup::NotFound(NotFoundReason::Transport(e.to_string()));
            }
        };

        let status = response.status().as_u16();
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                log::error!("credential lookup body for {} unreadable: {e}", caller.email);
                return CredentialLookup::NotFound(NotFoundReason::Transport(e.to_string()));
            }
        };

        let lookup = interpret_response(status, &body);
        if let CredentialLookup::NotFound(reason) = &lookup {
            log::warn!("no credentials for {} ({}): {reason}", caller.email, caller.company_name);
        }
        lookup
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver(url: &str) -> MemberCredentialResolver {
        let config = InventoryConfig {
            member_service_url: url.to_string(),
            ..InventoryConfig::default()
        };
        MemberCredentialResolver::new(&config).expect("resolver")
    }

    #[test]
    fn test_member_url() {
        let url = resolver("http://member-svc").member_url(&Caller::new("dev@example.com", "acme"));
        assert_eq!(
            url.as_str(),
            "http://member-svc/member/api/members/dev@example.com/acme"
        );
    }

    #[test]
    fn test_member_url_encodes_segments() {
        let url = resolver("http://localhost:8080/gateway/")
            .member_url(&Caller::new("a b@example.com", "acme/kr"));
        assert_eq!(
            url.as_str(),
            "http://localhost:8080/gateway/member/api/members/a%20b@example.com/acme%2Fkr"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let config = InventoryConfig {
            member_service_url: "not a url".to_string(),
            ..InventoryConfig::default()
        };
        assert!(matches!(
            MemberCredentialResolver::new(&config),
            Err(InventoryError::Config(_))
        ));

        let config = InventoryConfig {
            member_service_url: "mailto:ops@example.com".to_string(),
            ..InventoryConfig::default()
        };
        assert!(matches!(
            MemberCredentialResolver::new(&config),
            Err(InventoryError::Config(_))
        ));
    }

    #[tokio::test]
    async fn test_transport_error_is_not_found() {
        // Port 9 on localhost is the discard port and is normally closed.
        let config = InventoryConfig {
            member_service_url: "http://127.0.0.1:9".to_string(),
            member_service_timeout: std::time::Duration::from_secs(2),
            ..InventoryConfig::default()
        };
        let resolver = MemberCredentialResolver::new(&config).unwrap();
        let lookup = resolver
            .lookup(&Caller::new("dev@example.com", "acme"))
            .await;
        assert!(matches!(
            lookup,
            CredentialLookup::NotFound(NotFoundReason::Transport(_))
        ));
    }
}
