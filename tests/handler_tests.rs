use aws_lambda_events::event::s3::S3Event;
use index_sync_trigger::{
    app::{AppBuilder, AppConfig, SyncBackend},
    handler, process_event, DataSourceId, EventError, InMemoryIndexSyncClient, IndexId,
    SyncError, SyncTarget,
};
use lambda_runtime::{Context, LambdaEvent};
use std::sync::Arc;

const DATA_SOURCE_ID: &str = "kb-documents";
const INDEX_ID: &str = "0a1b2c3d-4e5f-6789-abcd-ef0123456789";

fn target() -> SyncTarget {
    SyncTarget::new(
        DataSourceId::new(DATA_SOURCE_ID.to_string()).unwrap(),
        IndexId::new(INDEX_ID.to_string()).unwrap(),
    )
}

fn load_event(json: &str) -> S3Event {
    serde_json::from_str(json).unwrap()
}

async fn setup() -> (index_sync_trigger::AppServices, Arc<InMemoryIndexSyncClient>) {
    let client = Arc::new(InMemoryIndexSyncClient::new());
    let config = AppConfig::from_parts(
        DATA_SOURCE_ID.to_string(),
        INDEX_ID.to_string(),
        SyncBackend::InMemory,
    )
    .unwrap();

    let services = AppBuilder::new(config)
        .with_index_sync_client(client.clone())
        .build()
        .await
        .unwrap();

    (services, client)
}

#[tokio::test]
async fn test_put_event_triggers_one_sync() {
    let (services, client) = setup().await;
    let event = LambdaEvent::new(
        load_event(include_str!("fixtures/s3_put_event.json")),
        Context::default(),
    );

    let outcome = handler(&services.sync_trigger_service, event).await.unwrap();

    assert_eq!(client.calls().await, vec![target()]);
    assert_eq!(outcome.data_source_id, DATA_SOURCE_ID);
    assert_eq!(outcome.index_id, INDEX_ID);
    assert!(outcome.execution_id.is_some());
    assert_eq!(
        outcome.objects,
        vec!["s3://company-knowledge-base/policies/Travel Policy (2024).pdf".to_string()]
    );
}

#[tokio::test]
async fn test_multi_record_event_triggers_one_sync() {
    let (services, client) = setup().await;
    let event = load_event(include_str!("fixtures/s3_multi_record_event.json"));

    let outcome = process_event(&services.sync_trigger_service, &event)
        .await
        .unwrap();

    assert_eq!(client.call_count().await, 1);
    assert_eq!(
        outcome.objects,
        vec![
            "s3://company-knowledge-base/faq/onboarding.md".to_string(),
            "s3://company-knowledge-base/manuals/C++ style guide.pdf".to_string(),
        ]
    );
}

#[tokio::test]
async fn test_each_invocation_syncs_independently() {
    let (services, client) = setup().await;
    let event = load_event(include_str!("fixtures/s3_put_event.json"));

    let first = process_event(&services.sync_trigger_service, &event)
        .await
        .unwrap();
    let second = process_event(&services.sync_trigger_service, &event)
        .await
        .unwrap();

    assert_eq!(client.call_count().await, 2);
    assert_ne!(first.execution_id, second.execution_id);
}

#[tokio::test]
async fn test_empty_event_fails_without_sync() {
    let (services, client) = setup().await;
    let event = load_event(r#"{ "Records": [] }"#);

    let err = process_event(&services.sync_trigger_service, &event)
        .await
        .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<EventError>(),
        Some(EventError::NoRecords)
    ));
    assert_eq!(client.call_count().await, 0);
}

#[tokio::test]
async fn test_sync_failure_propagates() {
    let (services, client) = setup().await;
    client
        .fail_with(SyncError::SyncAlreadyRunning {
            target: target(),
            message: "Data source is already syncing".to_string(),
        })
        .await;
    let event = LambdaEvent::new(
        load_event(include_str!("fixtures/s3_put_event.json")),
        Context::default(),
    );

    let err = handler(&services.sync_trigger_service, event)
        .await
        .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<SyncError>(),
        Some(SyncError::SyncAlreadyRunning { .. })
    ));
    assert_eq!(client.call_count().await, 1);
}

#[tokio::test]
async fn test_legacy_bucket_name_triggers_one_sync() {
    let (services, client) = setup().await;
    let mut event: serde_json::Value =
        serde_json::from_str(include_str!("fixtures/s3_put_event.json")).unwrap();
    event["Records"][0]["s3"]["bucket"]["name"] = serde_json::json!("Legacy_Bucket");
    let event: S3Event = serde_json::from_value(event).unwrap();

    let outcome = process_event(&services.sync_trigger_service, &event)
        .await
        .unwrap();

    assert_eq!(client.call_count().await, 1);
    assert_eq!(
        outcome.objects,
        vec!["s3://Legacy_Bucket/policies/Travel Policy (2024).pdf".to_string()]
    );
}

#[tokio::test]
async fn test_bad_record_does_not_block_sync() {
    let (services, client) = setup().await;
    let mut event: serde_json::Value =
        serde_json::from_str(include_str!("fixtures/s3_multi_record_event.json")).unwrap();
    event["Records"][1]["s3"]["object"]
        .as_object_mut()
        .unwrap()
        .remove("key");
    let event: S3Event = serde_json::from_value(event).unwrap();

    let outcome = process_event(&services.sync_trigger_service, &event)
        .await
        .unwrap();

    assert_eq!(client.call_count().await, 1);
    assert_eq!(
        outcome.objects,
        vec!["s3://company-knowledge-base/faq/onboarding.md".to_string()]
    );
}

#[tokio::test]
async fn test_no_usable_record_fails_without_sync() {
    let (services, client) = setup().await;
    let mut event: serde_json::Value =
        serde_json::from_str(include_str!("fixtures/s3_put_event.json")).unwrap();
    event["Records"][0]["s3"]["object"]
        .as_object_mut()
        .unwrap()
        .remove("key");
    let event: S3Event = serde_json::from_value(event).unwrap();

    let err = process_event(&services.sync_trigger_service, &event)
        .await
        .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<EventError>(),
        Some(EventError::MissingKey { index: 0 })
    ));
    assert_eq!(client.call_count().await, 0);
}
