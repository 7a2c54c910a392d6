//! AWS EC2 interaction.
//!
//! This module handles all provider-side operations:
//! - [`client`] - Per-request client construction
//! - [`describe`] - Unfiltered describe calls

mod client;
mod describe;

// Re-export public types and functions
pub use client::{build_client, Ec2ClientFactory, ProviderFactory, CREDENTIALS_PROVIDER_NAME};
pub use describe::Ec2Describe;
