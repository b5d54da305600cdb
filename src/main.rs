use clap::Parser;
use dotenvy::dotenv;
use s3_mpu_harness::cli::{Cli, Command};
use s3_mpu_harness::config::HarnessConfig;
use s3_mpu_harness::infrastructure::storage;
use s3_mpu_harness::{S3MultipartBackend, UploadRunner};
use tracing::{debug, error};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // 1. Environment & Logging Setup
    dotenv().ok();
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "s3_mpu_harness=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = run(cli).await {
        error!("❌ {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = HarnessConfig::from_env();

    match cli.command {
        Command::Run(args) => {
            let target = args.target();
            debug!(
                "🚀 Running multipart upload test against s3://{}/{}",
                target.bucket, target.key
            );

            // 2. Remote Client
            let client = storage::setup_client(&cli.region, &config).await;
            let runner = UploadRunner::with_config(S3MultipartBackend::new(client), &config);

            // 3. Begin, upload, complete, idle
            runner.run(&target).await?;
        }
    }

    Ok(())
}
