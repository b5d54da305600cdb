use crate::config::DEFAULT_REGION;
use crate::models::UploadTarget;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about = "Exercises the S3 multipart-upload workflow", long_about = None)]
pub struct Cli {
    /// AWS region the S3 client is configured for
    #[arg(long, global = true, default_value = DEFAULT_REGION)]
    pub region: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the test
    Run(RunArgs),
}

#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// Bucket to upload into
    #[arg(long, default_value = "")]
    pub bucket: String,

    /// Object key to upload to
    #[arg(long, default_value = "")]
    pub key: String,
}

impl RunArgs {
    pub fn target(&self) -> UploadTarget {
        UploadTarget::new(self.bucket.clone(), self.key.clone())
    }
}
