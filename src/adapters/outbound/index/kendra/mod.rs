//! Amazon Kendra index adapter built on the AWS SDK
//!
//! This module provides the IndexSyncClient implementation used in
//! production, plus the shared client construction.

pub mod error;
pub mod kendra_adapter;

pub use kendra_adapter::KendraIndexSyncClient;

use aws_config::BehaviorVersion;
use aws_sdk_kendra::config::Region;

/// Configuration for the Kendra client
#[derive(Debug, Clone, Default)]
pub struct KendraConfig {
    /// Region override; the default provider chain is used when unset
    pub region: Option<String>,
    /// Endpoint override, for local stacks and VPC endpoints
    pub endpoint_url: Option<String>,
}

/// Create a Kendra client from configuration
pub async fn create_kendra_client(config: &KendraConfig) -> aws_sdk_kendra::Client {
    let mut loader = aws_config::defaults(BehaviorVersion::latest());

    if let Some(region) = &config.region {
        loader = loader.region(Region::new(region.clone()));
    }

    if let Some(endpoint_url) = &config.endpoint_url {
        loader = loader.endpoint_url(endpoint_url);
    }

    let shared_config = loader.load().await;
    tracing::debug!(region = ?shared_config.region(), "loaded aws config");

    aws_sdk_kendra::Client::new(&shared_config)
}
