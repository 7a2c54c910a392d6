//! Per-caller credential resolution.
//!
//! - [`client`] - HTTP lookup against the membership service
//! - [`envelope`] - Wire format and response interpretation

mod client;
mod envelope;

pub use client::{Caller, CredentialSource, MemberCredentialResolver};
pub use envelope::{
    interpret_response, AwsKeys, CredentialLookup, KeyRecord, MemberCredential, NotFoundReason,
    SingleResult,
};
