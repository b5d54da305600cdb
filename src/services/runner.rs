use crate::config::{CONTENT_TYPE, HarnessConfig, PART_BODY, PART_NUMBER};
use crate::error::HarnessError;
use crate::models::{
    BeginUpload, CompleteUpload, CompletedPart, CompletedUpload, Expiry, PartUpload, UploadTarget,
};
use crate::services::storage::MultipartBackend;
use bytes::Bytes;
use std::time::Duration;
use tracing::debug;

/// Drives begin, upload-part and complete against a [`MultipartBackend`].
///
/// The calls are strictly sequential. The first failure ends the run and is
/// returned as the backend reported it; an upload that was already begun is
/// left for the service to expire.
pub struct UploadRunner<B> {
    backend: B,
    expire_after: Duration,
    idle_for: Duration,
}

impl<B: MultipartBackend> UploadRunner<B> {
    pub fn new(backend: B) -> Self {
        Self::with_config(backend, &HarnessConfig::default())
    }

    pub fn with_config(backend: B, config: &HarnessConfig) -> Self {
        Self {
            backend,
            expire_after: config.expire_after,
            idle_for: config.idle_for,
        }
    }

    pub fn with_idle(mut self, idle_for: Duration) -> Self {
        self.idle_for = idle_for;
        self
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Uploads the fixed part to `target`, then idles before returning.
    pub async fn run(&self, target: &UploadTarget) -> Result<CompletedUpload, HarnessError> {
        let completed = self.upload(target).await?;

        debug!("💤 Upload complete, idling for {:?}", self.idle_for);
        tokio::time::sleep(self.idle_for).await;

        Ok(completed)
    }

    /// Begin, upload part 1, complete. No idling.
    pub async fn upload(&self, target: &UploadTarget) -> Result<CompletedUpload, HarnessError> {
        let expiry = Expiry::after(self.expire_after);
        debug!(
            bucket = %target.bucket,
            key = %target.key,
            expires_at = %expiry.at(),
            "Starting multipart upload"
        );

        let upload_id = self
            .backend
            .begin_upload(&BeginUpload {
                target: target.clone(),
                content_type: CONTENT_TYPE.to_string(),
                expiry,
            })
            .await?;
        debug!(bucket = %target.bucket, key = %target.key, upload_id = %upload_id, "📤 Multipart upload created");

        let e_tag = self
            .backend
            .upload_part(&PartUpload {
                target: target.clone(),
                upload_id: upload_id.clone(),
                part_number: PART_NUMBER,
                body: Bytes::from_static(PART_BODY),
                expiry,
            })
            .await?;
        debug!(upload_id = %upload_id, part_number = PART_NUMBER, e_tag = %e_tag, "Part uploaded");

        let parts = vec![CompletedPart {
            part_number: PART_NUMBER,
            e_tag,
        }];

        self.backend
            .complete_upload(&CompleteUpload {
                target: target.clone(),
                upload_id: upload_id.clone(),
                parts: parts.clone(),
                expiry,
            })
            .await?;
        debug!(upload_id = %upload_id, "✅ Multipart upload completed");

        Ok(CompletedUpload {
            target: target.clone(),
            upload_id,
            parts,
        })
    }
}
