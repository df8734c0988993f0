//! Create, update and fetch against a recording admin service

use crate::integration::test_utils::{pipeline, CountingCatalog, RecordingAdmin, Submission};
use sinkconf::error::{AdminError, SinkError};
use sinkconf::sink::{PackageSource, SinkConfig, SinkOverrides, SinkRef};
use std::path::PathBuf;
use std::sync::Arc;

fn catalog() -> Arc<CountingCatalog> {
    Arc::new(CountingCatalog::new(&["kafka", "jdbc"]))
}

#[tokio::test]
async fn test_create_ships_url_archive_as_locator() {
    let catalog = catalog();
    let admin = Arc::new(RecordingAdmin::default());
    let overrides = SinkOverrides::new()
        .with_name("s1")
        .with_archive("http://repo/sink.nar");

    let config = pipeline(&catalog, &admin).create(&overrides).await.unwrap();

    assert_eq!(
        admin.recorded(),
        vec![Submission::Create(
            config,
            PackageSource::Url("http://repo/sink.nar".to_string())
        )]
    );
}

#[tokio::test]
async fn test_create_uploads_local_archive() {
    let catalog = catalog();
    let admin = Arc::new(RecordingAdmin::default());
    let overrides = SinkOverrides::new()
        .with_name("s1")
        .with_archive("/opt/connectors/sink.nar");

    pipeline(&catalog, &admin).create(&overrides).await.unwrap();

    match admin.recorded().as_slice() {
        [Submission::Create(config, PackageSource::File(path))] => {
            assert_eq!(path, &PathBuf::from("/opt/connectors/sink.nar"));
            assert_eq!(config.fully_qualified_name(), "public/default/s1");
        }
        other => panic!("Unexpected submissions: {:?}", other),
    }
}

#[tokio::test]
async fn test_create_with_builtin_type_ships_builtin_locator() {
    let catalog = catalog();
    let admin = Arc::new(RecordingAdmin::default());
    let overrides = SinkOverrides::new().with_name("s1").with_sink_type("kafka");

    pipeline(&catalog, &admin).create(&overrides).await.unwrap();

    match admin.recorded().as_slice() {
        [Submission::Create(_, PackageSource::Url(url))] => assert_eq!(url, "builtin://kafka"),
        other => panic!("Unexpected submissions: {:?}", other),
    }
}

#[tokio::test]
async fn test_update_without_archive_sends_no_package() {
    let catalog = catalog();
    let admin = Arc::new(RecordingAdmin::default());
    let overrides = SinkOverrides {
        parallelism: Some(3),
        ..SinkOverrides::new().with_name("s1")
    };

    pipeline(&catalog, &admin).update(&overrides).await.unwrap();

    match admin.recorded().as_slice() {
        [Submission::Update(config, None)] => {
            assert_eq!(config.parallelism, 3);
            assert_eq!(config.tenant, "public");
            assert_eq!(config.namespace, "default");
        }
        other => panic!("Unexpected submissions: {:?}", other),
    }
}

#[tokio::test]
async fn test_update_with_archive_ships_it() {
    let catalog = catalog();
    let admin = Arc::new(RecordingAdmin::default());
    let overrides = SinkOverrides::new()
        .with_name("s1")
        .with_archive("sink://public/default/es@2.0");

    pipeline(&catalog, &admin).update(&overrides).await.unwrap();

    match admin.recorded().as_slice() {
        [Submission::Update(_, Some(PackageSource::Url(url)))] => {
            assert_eq!(url, "sink://public/default/es@2.0");
        }
        other => panic!("Unexpected submissions: {:?}", other),
    }
}

#[tokio::test]
async fn test_update_requires_name() {
    let catalog = catalog();
    let admin = Arc::new(RecordingAdmin::default());

    let result = pipeline(&catalog, &admin)
        .update(&SinkOverrides::new().with_archive("file:///a.jar"))
        .await;

    assert!(matches!(result, Err(SinkError::EmptyName(_))));
    assert!(admin.recorded().is_empty());
}

#[tokio::test]
async fn test_fetch_defaults_identity_and_returns_deployed_config() {
    let catalog = catalog();
    let deployed = SinkConfig {
        tenant: "public".to_string(),
        namespace: "default".to_string(),
        name: "s1".to_string(),
        parallelism: 2,
        ..Default::default()
    };
    let admin = Arc::new(RecordingAdmin::serving(deployed.clone()));
    let overrides = SinkOverrides {
        tenant: Some("acme".to_string()),
        ..SinkOverrides::new().with_name("s1")
    };

    let fetched = pipeline(&catalog, &admin).fetch(&overrides).await.unwrap();

    assert_eq!(fetched, deployed);
    assert_eq!(
        admin.recorded(),
        vec![Submission::Get(SinkRef {
            tenant: "public".to_string(),
            namespace: "default".to_string(),
            name: "s1".to_string(),
        })]
    );
}

#[tokio::test]
async fn test_fetch_without_name_never_calls_admin() {
    let catalog = catalog();
    let admin = Arc::new(RecordingAdmin::default());

    let result = pipeline(&catalog, &admin).fetch(&SinkOverrides::new()).await;

    match result {
        Err(e @ SinkError::EmptyName(_)) => {
            assert_eq!(e.to_string(), "You must specify a name for the sink");
        }
        other => panic!("Expected EmptyName, got {:?}", other),
    }
    assert!(admin.recorded().is_empty());
}

#[tokio::test]
async fn test_fetch_propagates_admin_status() {
    let catalog = catalog();
    let admin = Arc::new(RecordingAdmin::default());

    let result = pipeline(&catalog, &admin)
        .fetch(&SinkOverrides::new().with_name("ghost"))
        .await;

    assert!(matches!(
        result,
        Err(SinkError::Admin(AdminError::Status { code: 404, .. }))
    ));
}
