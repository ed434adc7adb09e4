use anyhow::{Context, Result};
use aws_lambda_events::event::s3::S3Event;
use clap::{Parser, Subcommand};
use index_sync_trigger::{
    app::{AppBuilder, AppConfig, SyncBackend},
    process_event,
    telemetry::{init_logging, LogFormat, LogSettings},
    KendraConfig, ObjectKey, SyncTriggerService,
};
use serde_json::json;
use tokio::io::AsyncReadExt;

#[derive(Parser, Debug)]
#[command(name = "index-sync-cli")]
#[command(about = "Trigger search index data source syncs from the command line", long_about = None)]
struct Cli {
    /// Data source to sync
    #[arg(long, env = "KENDRA_DATA_SOURCE_ID")]
    data_source_id: Option<String>,

    /// Index that owns the data source
    #[arg(long, env = "KENDRA_INDEX_ID")]
    index_id: Option<String>,

    /// Index service backend (kendra or memory)
    #[arg(long, env = "SYNC_BACKEND", default_value = "kendra")]
    backend: String,

    /// Region override for the Kendra client
    #[arg(long, env = "KENDRA_REGION")]
    region: Option<String>,

    /// Endpoint override for the Kendra client
    #[arg(long, env = "KENDRA_ENDPOINT_URL")]
    endpoint_url: Option<String>,

    /// Log level
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run an S3 event notification through the sync trigger
    Invoke {
        /// Path to the event JSON, `-` reads stdin
        #[arg(short, long, default_value = "-")]
        event: String,
    },

    /// Start a sync job for the configured data source
    Sync,

    /// Print the decoded form of a URL-encoded object key
    DecodeKey {
        /// Key as it appears in the event notification
        key: String,
    },
}

impl Cli {
    fn to_app_config(&self) -> Result<AppConfig> {
        let data_source_id = self
            .data_source_id
            .clone()
            .context("KENDRA_DATA_SOURCE_ID is required")?;
        let index_id = self
            .index_id
            .clone()
            .context("KENDRA_INDEX_ID is required")?;

        let kendra = KendraConfig {
            region: self.region.clone(),
            endpoint_url: self.endpoint_url.clone(),
        };
        let backend = SyncBackend::parse(&self.backend, kendra)?;

        Ok(AppConfig::from_parts(data_source_id, index_id, backend)?)
    }

    fn init_logging(&self) -> Result<()> {
        init_logging(&LogSettings {
            level: self.log_level.clone(),
            format: LogFormat::Pretty,
        })
    }
}

async fn read_event(source: &str) -> Result<S3Event> {
    let raw = if source == "-" {
        let mut raw = String::new();
        tokio::io::stdin()
            .read_to_string(&mut raw)
            .await
            .context("Failed to read event from stdin")?;
        raw
    } else {
        tokio::fs::read_to_string(source)
            .await
            .with_context(|| format!("Failed to read event file {}", source))?
    };

    serde_json::from_str(&raw).context("Event is not a valid S3 event notification")
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    cli.init_logging()?;

    match &cli.command {
        Commands::DecodeKey { key } => {
            let key = ObjectKey::from_url_encoded(key)?;
            println!("{}", key);
        }
        Commands::Invoke { event } => {
            let event = read_event(event).await?;
            let services = AppBuilder::new(cli.to_app_config()?)
                .build()
                .await
                .context("Failed to build application")?;

            let outcome = process_event(&services.sync_trigger_service, &event)
                .await
                .map_err(|err| anyhow::anyhow!(err))?;
            println!("{}", serde_json::to_string_pretty(&outcome)?);
        }
        Commands::Sync => {
            let services = AppBuilder::new(cli.to_app_config()?)
                .build()
                .await
                .context("Failed to build application")?;

            let started = services
                .index_sync_client
                .start_data_source_sync_job(services.sync_trigger_service.target())
                .await?;
            let output = json!({
                "execution_id": started.execution_id,
                "request_id": started.request_id,
                "started_at": started.started_at,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::parse_from([
            "index-sync-cli",
            "--data-source-id",
            "docs-source",
            "--index-id",
            "0a1b2c3d-4e5f-6789-abcd-ef0123456789",
            "--backend",
            "memory",
            "invoke",
            "--event",
            "event.json",
        ]);

        assert_eq!(cli.data_source_id.as_deref(), Some("docs-source"));
        assert_eq!(cli.backend, "memory");
        match &cli.command {
            Commands::Invoke { event } => assert_eq!(event, "event.json"),
            other => panic!("unexpected command: {other:?}"),
        }

        let config = cli.to_app_config().unwrap();
        assert!(matches!(config.backend, SyncBackend::InMemory));
    }

    #[test]
    fn test_missing_ids_fail_config() {
        let mut cli = Cli::parse_from(["index-sync-cli", "decode-key", "a+b"]);
        cli.data_source_id = None;

        let err = cli.to_app_config().unwrap_err();
        assert!(err.to_string().contains("KENDRA_DATA_SOURCE_ID"));
    }
}
