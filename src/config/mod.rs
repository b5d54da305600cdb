use std::env;
use std::time::Duration;

/// Region used when `--region` is not given.
pub const DEFAULT_REGION: &str = "us-east-1";

/// Content type declared when the multipart upload is created.
pub const CONTENT_TYPE: &str = "text/plain";

/// Seconds between creating the upload and the expiration instant.
pub const EXPIRE_SECONDS: u64 = 600;

/// Seconds the runner idles after completing the upload.
pub const IDLE_SECONDS: u64 = 600;

/// The only part the harness uploads.
pub const PART_NUMBER: i32 = 1;

/// Body of that part.
pub const PART_BODY: &[u8] = b"dummy content";

/// Runtime configuration for the harness.
///
/// Every field is optional tuning for local endpoints and tests; the
/// defaults are the fixed behaviour of the tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessConfig {
    /// Custom S3 endpoint, e.g. a local MinIO (default: service endpoint)
    pub endpoint_url: Option<String>,

    /// Address buckets as `endpoint/bucket` instead of `bucket.endpoint` (default: false)
    pub force_path_style: bool,

    /// Offset from "now" to the fixed expiration instant (default: 600s)
    pub expire_after: Duration,

    /// How long to idle once the upload is complete (default: 600s)
    pub idle_for: Duration,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            endpoint_url: None,
            force_path_style: false,
            expire_after: Duration::from_secs(EXPIRE_SECONDS),
            idle_for: Duration::from_secs(IDLE_SECONDS),
        }
    }
}

impl HarnessConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build the configuration from any variable source. Unset or
    /// unparsable values fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let default = Self::default();

        Self {
            endpoint_url: lookup("S3_ENDPOINT").filter(|v| !v.trim().is_empty()),

            force_path_style: lookup("S3_FORCE_PATH_STYLE")
                .map(|v| v.to_lowercase() == "true" || v == "1")
                .unwrap_or(default.force_path_style),

            expire_after: lookup("MPU_EXPIRE_SECONDS")
                .and_then(|v| v.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(default.expire_after),

            idle_for: lookup("MPU_IDLE_SECONDS")
                .and_then(|v| v.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(default.idle_for),
        }
    }
}
