use std::fs;

use onboard_core::Flow;
use onboard_resolver::{CompositeResolver, FileResolver, FlowResolver, ResolveError, StaticResolver};
use tempfile::TempDir;

const DANCER_V2: &str = r#"
version: v2
steps:
  - { id: welcome, name: Welcome, route: /onboarding/welcome, required: [displayName] }
  - { id: experiences, name: Experiences, route: /onboarding/experiences, required: [experiences], minItems: 1 }
"#;

fn flows_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("dancer")).unwrap();
    fs::write(dir.path().join("dancer/v2.yaml"), DANCER_V2).unwrap();
    dir
}

#[tokio::test]
async fn file_resolver_reads_profile_flow() {
    let dir = flows_dir();
    let resolver = FileResolver::new(dir.path(), Some("dancer".to_string()));

    let flow = resolver.resolve("v2").await.unwrap();
    assert_eq!(flow.version, "v2");
    assert_eq!(flow.steps.len(), 2);
}

#[tokio::test]
async fn file_resolver_serves_empty_flow_without_profile() {
    let dir = flows_dir();
    let resolver = FileResolver::new(dir.path(), None);

    let flow = resolver.resolve("v2").await.unwrap();
    assert_eq!(flow, Flow::empty("v2"));
}

#[tokio::test]
async fn file_resolver_reports_missing_version() {
    let dir = flows_dir();
    let resolver = FileResolver::new(dir.path(), Some("dancer".to_string()));

    let err = resolver.resolve("v9").await.unwrap_err();
    assert!(matches!(err, ResolveError::NotFound { ref version } if version == "v9"));
}

#[tokio::test]
async fn file_resolver_rejects_invalid_and_mismatched_documents() {
    let dir = flows_dir();
    fs::write(
        dir.path().join("dancer/v3.json"),
        r#"{"version": "v3", "steps": [{"id": "a", "route": "/a"}, {"id": "a", "route": "/b"}]}"#,
    )
    .unwrap();
    fs::write(dir.path().join("dancer/v4.yml"), "version: v5\nsteps: []\n").unwrap();
    fs::write(dir.path().join("dancer/v5.json"), "{ not json").unwrap();
    let resolver = FileResolver::new(dir.path(), Some("dancer".to_string()));

    assert!(matches!(
        resolver.resolve("v3").await.unwrap_err(),
        ResolveError::Invalid { .. }
    ));
    assert!(matches!(
        resolver.resolve("v4").await.unwrap_err(),
        ResolveError::VersionMismatch { .. }
    ));
    assert!(matches!(
        resolver.resolve("v5").await.unwrap_err(),
        ResolveError::Parse { .. }
    ));
}

#[tokio::test]
async fn static_resolver_keys_by_profile_type() {
    let mut resolver = StaticResolver::new(Some("choreographer".to_string()))
        .with_flow("dancer", Flow::empty("v2"))
        .with_flow("choreographer", Flow::empty("v2"));

    assert!(resolver.resolve("v2").await.is_ok());
    assert!(matches!(
        resolver.resolve("v1").await.unwrap_err(),
        ResolveError::NotFound { .. }
    ));

    resolver.set_profile_type(None);
    assert_eq!(resolver.resolve("v1").await.unwrap(), Flow::empty("v1"));
}

#[tokio::test]
async fn composite_resolver_skips_not_found() {
    let dir = flows_dir();
    let resolver = CompositeResolver::new(vec![
        Box::new(StaticResolver::new(Some("dancer".to_string()))),
        Box::new(FileResolver::new(dir.path(), Some("dancer".to_string()))),
    ]);

    let flow = resolver.resolve("v2").await.unwrap();
    assert_eq!(flow.steps[0].id, "welcome");
    assert!(matches!(
        resolver.resolve("v7").await.unwrap_err(),
        ResolveError::NotFound { .. }
    ));
}

#[tokio::test]
async fn file_resolver_stays_inside_flows_dir() {
    let root = TempDir::new().unwrap();
    let flows = root.path().join("flows");
    fs::create_dir_all(flows.join("dancer")).unwrap();
    fs::write(root.path().join("outside.yaml"), "version: outside\nsteps: []\n").unwrap();

    let resolver = FileResolver::new(flows.clone(), Some("dancer".to_string()));
    for version in ["../../outside", "../outside", "sub/v2", "..", ""] {
        let err = resolver.resolve(version).await.unwrap_err();
        assert!(
            matches!(err, ResolveError::InvalidName { what: "version", .. }),
            "{version:?} -> {err:?}"
        );
    }

    let resolver = FileResolver::new(flows.clone(), Some("../flows/dancer".to_string()));
    assert!(matches!(
        resolver.resolve("v2").await.unwrap_err(),
        ResolveError::InvalidName {
            what: "profile type",
            ..
        }
    ));
}

#[tokio::test]
async fn file_resolver_accepts_dotted_versions() {
    let dir = flows_dir();
    fs::write(
        dir.path().join("dancer/2.1.yaml"),
        DANCER_V2.replace("version: v2", "version: \"2.1\""),
    )
    .unwrap();
    let resolver = FileResolver::new(dir.path(), Some("dancer".to_string()));

    assert_eq!(resolver.resolve("2.1").await.unwrap().version, "2.1");
}
