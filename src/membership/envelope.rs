//! Membership service wire format and response interpretation.

use serde::Deserialize;
use std::fmt;
use thiserror::Error;

/// Response envelope used by the membership service.
#[derive(Deserialize, Debug)]
pub struct SingleResult<T> {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub code: Option<i32>,
    #[serde(default)]
    pub msg: Option<String>,
    pub data: Option<T>,
}

/// Credential payload of a member.
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct MemberCredential {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, rename = "aiwaKeys", alias = "keys")]
    pub keys: Vec<KeyRecord>,
}

/// One access key pair registered for a member.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyRecord {
    pub access_key: String,
    pub secret_key: String,
}

impl fmt::Debug for KeyRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyRecord")
            .field("access_key", &self.access_key)
            .field("secret_key", &"<redacted>")
            .finish()
    }
}

/// Static AWS credentials for one request.
#[derive(Clone, PartialEq, Eq)]
pub struct AwsKeys {
    access_key: String,
    secret_key: String,
}

impl AwsKeys {
    pub fn new(access_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        AwsKeys {
            access_key: access_key.into(),
            secret_key: secret_key.into(),
        }
    }

    pub fn access_key(&self) -> &str {
        &self.access_key
    }

    pub fn secret_key(&self) -> &str {
        &self.secret_key
    }
}

impl fmt::Debug for AwsKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AwsKeys")
            .field("access_key", &self.access_key)
            .field("secret_key", &"<redacted>")
            .finish()
    }
}

impl From<KeyRecord> for AwsKeys {
    fn from(record: KeyRecord) -> Self {
        AwsKeys::new(record.access_key, record.secret_key)
    }
}

/// Why no credentials were found.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotFoundReason {
    #[error("membership service returned HTTP {0}")]
    HttpStatus(u16),
    #[error("membership service rejected the lookup: {0}")]
    Rejected(String),
    #[error("membership service unreachable: {0}")]
    Transport(String),
    #[error("membership response could not be decoded: {0}")]
    Malformed(String),
    #[error("member has no access keys registered")]
    NoKeys,
}

/// Outcome of a credential lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialLookup {
    Found(AwsKeys),
    NotFound(NotFoundReason),
}

impl CredentialLookup {
    pub fn is_found(&self) -> bool {
        matches!(self, CredentialLookup::Found(_))
    }
}

/// Interpret a membership service response.
///
/// Any non-2xx status, a `success=false` envelope, an undecodable body or an
/// empty key list all yield [`CredentialLookup::NotFound`]. The first key
/// record is used when several are registered.
///
/// # Arguments
/// * `status` - HTTP status code
/// * `body` - Raw response body
pub fn interpret_response(status: u16, body: &str) -> CredentialLookup {
    if !(200..300).contains(&status) {
        return CredentialLookup::NotFound(NotFoundReason::HttpStatus(status));
    }

    let mut deserializer = serde_json::Deserializer::from_str(body);
    let envelope: SingleResult<MemberCredential> =
        match serde_path_to_error::deserialize(&mut deserializer) {
            Ok(envelope) => envelope,
            Err(e) => {
                return CredentialLookup::NotFound(NotFoundReason::Malformed(format!(
                    "path={} error={}",
                    e.path(),
                    e.inner()
                )))
            }
        };

    if !envelope.success {
        let msg = envelope
            .msg
            .unwrap_or_else(|| format!("code={}", envelope.code.unwrap_or_default()));
        return CredentialLookup::NotFound(NotFoundReason::Rejected(msg));
    }

    match envelope.data.and_then(|d| d.keys.into_iter().next()) {
        Some(record) => CredentialLookup::Found(record.into()),
        None => CredentialLookup::NotFound(NotFoundReason::NoKeys),
    }
}
