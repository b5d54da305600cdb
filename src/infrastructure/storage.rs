use crate::config::HarnessConfig;
use aws_sdk_s3::config::retry::RetryConfig;
use aws_sdk_s3::config::{Region, RequestChecksumCalculation};
use tracing::debug;

/// S3 client for `region`, resolving credentials through the default chain.
pub async fn setup_client(region: &str, config: &HarnessConfig) -> aws_sdk_s3::Client {
    debug!(
        "☁️  S3 Storage: region {} (endpoint: {})",
        region,
        config.endpoint_url.as_deref().unwrap_or("default")
    );

    let mut loader = aws_config::from_env().region(Region::new(region.to_string()));
    if let Some(endpoint_url) = &config.endpoint_url {
        loader = loader.endpoint_url(endpoint_url);
    }
    let aws_config = loader.load().await;

    // Every call is attempted exactly once; part bodies go out without checksum trailers.
    let s3_config = aws_sdk_s3::config::Builder::from(&aws_config)
        .force_path_style(config.force_path_style)
        .retry_config(RetryConfig::disabled())
        .request_checksum_calculation(RequestChecksumCalculation::WhenRequired)
        .build();

    aws_sdk_s3::Client::from_conf(s3_config)
}
