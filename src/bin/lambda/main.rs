use std::sync::Arc;

use aws_lambda_events::event::s3::S3Event;
use index_sync_trigger::{
    app::{AppBuilder, AppConfig},
    handler,
    telemetry::{init_logging, LogSettings},
};
use lambda_runtime::{run, service_fn, Error, LambdaEvent};

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Load .env file if it exists
    dotenvy::dotenv().ok();

    init_logging(&LogSettings::from_env()?)?;

    // Missing or invalid configuration fails the cold start
    let config = AppConfig::from_env()?;
    tracing::info!(
        data_source_id = %config.target.data_source_id,
        index_id = %config.target.index_id,
        backend = ?config.backend,
        "initiating lambda"
    );

    let services = AppBuilder::new(config).build().await?;
    let service = Arc::new(services.sync_trigger_service);

    let func = service_fn(move |event: LambdaEvent<S3Event>| {
        let service = service.clone();

        async move { handler(service.as_ref(), event).await }
    });

    run(func).await
}
