use crate::error::HarnessError;
use crate::models::{BeginUpload, CompleteUpload, Expiry, PartUpload};
use async_trait::async_trait;
use aws_sdk_s3::Client;
use aws_sdk_s3::config::http::HttpResponse;
use aws_sdk_s3::config::timeout::TimeoutConfig;
use aws_sdk_s3::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_s3::primitives::{ByteStream, DateTime};
use aws_sdk_s3::types::{CompletedMultipartUpload, CompletedPart};

const CREATE: &str = "CreateMultipartUpload";
const UPLOAD_PART: &str = "UploadPart";
const COMPLETE: &str = "CompleteMultipartUpload";

/// The three remote calls of a multipart upload.
#[async_trait]
pub trait MultipartBackend: Send + Sync {
    /// Starts an upload and returns its upload id.
    async fn begin_upload(&self, request: &BeginUpload) -> Result<String, HarnessError>;

    /// Uploads one part and returns the entity tag the service assigned to it.
    async fn upload_part(&self, request: &PartUpload) -> Result<String, HarnessError>;

    async fn complete_upload(&self, request: &CompleteUpload) -> Result<(), HarnessError>;
}

pub struct S3MultipartBackend {
    client: Client,
}

impl S3MultipartBackend {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

/// Per-call override bounding the whole operation by the time left until `expiry`.
fn expiry_override(operation: &'static str, expiry: &Expiry) -> aws_sdk_s3::config::Builder {
    let remaining = expiry.remaining();
    tracing::debug!("{} must finish within {:?}", operation, remaining);
    aws_sdk_s3::config::Builder::new().timeout_config(
        TimeoutConfig::builder()
            .operation_timeout(remaining)
            .build(),
    )
}

fn sdk_error<E>(operation: &'static str, err: SdkError<E, HttpResponse>) -> HarnessError
where
    E: ProvideErrorMetadata + std::error::Error + Send + Sync + 'static,
{
    if let SdkError::ServiceError(_) = &err {
        let status = err
            .raw_response()
            .map(|raw| raw.status().as_u16())
            .unwrap_or_default();
        let message = match (err.code(), err.message()) {
            (Some(code), Some(message)) => format!("{}: {}", code, message),
            (Some(code), None) => code.to_string(),
            (None, Some(message)) => message.to_string(),
            (None, None) => DisplayErrorContext(&err).to_string(),
        };
        tracing::error!(
            "S3 {} failed with status {}: {}",
            operation,
            status,
            message
        );
        return HarnessError::Service {
            operation,
            status,
            message,
        };
    }

    HarnessError::Transport {
        operation,
        message: DisplayErrorContext(&err).to_string(),
    }
}

#[async_trait]
impl MultipartBackend for S3MultipartBackend {
    async fn begin_upload(&self, request: &BeginUpload) -> Result<String, HarnessError> {
        let multipart_upload_res = self
            .client
            .create_multipart_upload()
            .bucket(&request.target.bucket)
            .key(&request.target.key)
            .content_type(&request.content_type)
            .expires(DateTime::from(request.expiry.as_system_time()))
            .customize()
            .config_override(expiry_override(CREATE, &request.expiry))
            .send()
            .await
            .map_err(|e| sdk_error(CREATE, e))?;

        multipart_upload_res
            .upload_id()
            .filter(|id| !id.is_empty())
            .map(str::to_string)
            .ok_or(HarnessError::MissingField {
                operation: CREATE,
                field: "UploadId",
            })
    }

    async fn upload_part(&self, request: &PartUpload) -> Result<String, HarnessError> {
        let upload_part_res = self
            .client
            .upload_part()
            .bucket(&request.target.bucket)
            .key(&request.target.key)
            .upload_id(&request.upload_id)
            .part_number(request.part_number)
            .body(ByteStream::from(request.body.clone()))
            .customize()
            .config_override(expiry_override(UPLOAD_PART, &request.expiry))
            .send()
            .await
            .map_err(|e| sdk_error(UPLOAD_PART, e))?;

        upload_part_res
            .e_tag()
            .map(str::to_string)
            .ok_or(HarnessError::MissingField {
                operation: UPLOAD_PART,
                field: "ETag",
            })
    }

    async fn complete_upload(&self, request: &CompleteUpload) -> Result<(), HarnessError> {
        let completed_parts = request
            .parts
            .iter()
            .map(|part| {
                CompletedPart::builder()
                    .e_tag(&part.e_tag)
                    .part_number(part.part_number)
                    .build()
            })
            .collect::<Vec<_>>();

        let completed_multipart_upload = CompletedMultipartUpload::builder()
            .set_parts(Some(completed_parts))
            .build();

        self.client
            .complete_multipart_upload()
            .bucket(&request.target.bucket)
            .key(&request.target.key)
            .upload_id(&request.upload_id)
            .multipart_upload(completed_multipart_upload)
            .customize()
            .config_override(expiry_override(COMPLETE, &request.expiry))
            .send()
            .await
            .map_err(|e| sdk_error(COMPLETE, e))?;

        Ok(())
    }
}
