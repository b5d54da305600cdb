use bytes::Bytes;
use chrono::{DateTime, TimeDelta, Utc};
use std::time::{Duration, SystemTime};

/// Bucket and key every call of one run is addressed to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadTarget {
    pub bucket: String,
    pub key: String,
}

impl UploadTarget {
    pub fn new(bucket: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            key: key.into(),
        }
    }
}

/// Fixed instant after which pre-signed requests of a run stop being valid.
///
/// The instant never moves, so each call that asks for [`Expiry::remaining`]
/// gets a shorter lifetime than the call before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Expiry {
    at: DateTime<Utc>,
}

impl Expiry {
    /// Expiry `offset` from now.
    pub fn after(offset: Duration) -> Self {
        Self::starting_at(Utc::now(), offset)
    }

    pub fn starting_at(now: DateTime<Utc>, offset: Duration) -> Self {
        let at = TimeDelta::from_std(offset)
            .ok()
            .and_then(|delta| now.checked_add_signed(delta))
            .unwrap_or(DateTime::<Utc>::MAX_UTC);
        Self { at }
    }

    pub fn at(&self) -> DateTime<Utc> {
        self.at
    }

    pub fn as_system_time(&self) -> SystemTime {
        SystemTime::from(self.at)
    }

    /// Time left until the expiration instant, zero once it has passed.
    pub fn remaining(&self) -> Duration {
        self.remaining_at(Utc::now())
    }

    pub fn remaining_at(&self, now: DateTime<Utc>) -> Duration {
        (self.at - now).to_std().unwrap_or(Duration::ZERO)
    }
}

/// Input of the "begin" call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BeginUpload {
    pub target: UploadTarget,
    pub content_type: String,
    pub expiry: Expiry,
}

/// Input of the "upload part" call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartUpload {
    pub target: UploadTarget,
    pub upload_id: String,
    pub part_number: i32,
    pub body: Bytes,
    pub expiry: Expiry,
}

/// Part number and entity tag reported back on completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletedPart {
    pub part_number: i32,
    pub e_tag: String,
}

/// Input of the "complete" call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompleteUpload {
    pub target: UploadTarget,
    pub upload_id: String,
    pub parts: Vec<CompletedPart>,
    pub expiry: Expiry,
}

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletedUpload {
    pub target: UploadTarget,
    pub upload_id: String,
    pub parts: Vec<CompletedPart>,
}
