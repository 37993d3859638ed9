use hapify_domain::config::HapifyConfig;
use hapify_domain::{
    ChannelConfig, ChannelLike, LocalProjectStore, ProjectError, ProjectRecord, ProjectUpdate,
    StorageType,
};
use hapify_infrastructure::{FileProjectStore, InMemoryRemoteStore, ProjectEnvironment};
use serde_json::json;
use std::sync::Arc;
use tempfile::TempDir;

const REMOTE_ID: &str = "507f1f77bcf86cd799439011";

struct DirChannel {
    path: String,
    config: ChannelConfig,
}

impl ChannelLike for DirChannel {
    fn guess_project_id_or_path(&self) -> String {
        self.path.clone()
    }

    fn config(&self) -> &ChannelConfig {
        &self.config
    }
}

fn environment(remote: Arc<InMemoryRemoteStore>) -> ProjectEnvironment {
    ProjectEnvironment::new(HapifyConfig::default(), remote)
}

fn project_file(dir: &TempDir) -> String {
    dir.path()
        .join("project")
        .join("hapify.json")
        .to_string_lossy()
        .into_owned()
}

#[tokio::test]
async fn test_bootstrap_then_load_local_project() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = project_file(&dir);
    let env = environment(Arc::new(InMemoryRemoteStore::new()));

    let channel = DirChannel {
        path: path.clone(),
        config: ChannelConfig {
            project: path.clone(),
        },
    };
    env.create_local_for_channel(&channel, None, None).await?;

    let project = env.project(&path).await?;
    let project = project.read().await;
    assert_eq!(project.storage_type(), StorageType::Local);
    assert_eq!(project.name(), "My project");
    assert_eq!(project.description(), Some("A new Hapify project"));
    assert!(project.created_at().is_some());
    Ok(())
}

#[tokio::test]
async fn test_local_save_round_trips_through_file() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = project_file(&dir);
    let store = FileProjectStore::default();
    store
        .set_project(
            &path,
            &ProjectRecord::new(path.clone(), "Before").with_created_at(1_000),
            Some(vec![json!({ "name": "user" })]),
        )
        .await?;

    let env = environment(Arc::new(InMemoryRemoteStore::new()));
    let shared = env.project(&path).await?;
    {
        let mut project = shared.write().await;
        project.set_name_and_description("After", Some("Updated".to_string()));
        project.save().await?;
    }

    let raw = store.get(&path).await?;
    assert_eq!(raw["name"], json!("After"));
    assert_eq!(raw["description"], json!("Updated"));
    assert_eq!(raw["created_at"], json!(1_000));
    assert_eq!(raw["models"], json!([{ "name": "user" }]));
    Ok(())
}

#[tokio::test]
async fn test_invalid_local_file_is_rejected_and_not_cached() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = project_file(&dir);
    std::fs::create_dir_all(dir.path().join("project"))?;
    std::fs::write(&path, json!({ "version": "1", "models": [] }).to_string())?;

    let env = environment(Arc::new(InMemoryRemoteStore::new()));
    let err = env.project(&path).await.unwrap_err();

    assert_eq!(
        err,
        ProjectError::Validation {
            field: "name".to_string(),
            message: "name is required".to_string(),
        }
    );
    assert!(!env.registry().contains(&path).await);
    Ok(())
}

#[tokio::test]
async fn test_missing_local_path_is_invalid_identifier() {
    let env = environment(Arc::new(InMemoryRemoteStore::new()));

    let err = env.project("./my-project").await.unwrap_err();
    assert_eq!(err, ProjectError::InvalidIdentifier("./my-project".to_string()));
    assert!(env.registry().is_empty().await);
}

#[tokio::test]
async fn test_remote_project_load_and_partial_save() -> anyhow::Result<()> {
    let remote = Arc::new(InMemoryRemoteStore::new());
    remote
        .insert(
            ProjectRecord::new(REMOTE_ID, "Remote")
                .with_description("hosted")
                .with_created_at(77),
        )
        .await;
    let env = environment(remote.clone());

    let shared = env.project(REMOTE_ID).await?;
    {
        let mut project = shared.write().await;
        assert_eq!(project.storage_type(), StorageType::Remote);
        assert_eq!(project.name(), "Remote");
        project.set_name_and_description("Renamed", None);
        project.save().await?;
    }

    assert_eq!(
        remote.updates().await,
        vec![(
            REMOTE_ID.to_string(),
            ProjectUpdate {
                name: "Renamed".to_string(),
                description: None,
            }
        )]
    );
    assert_eq!(remote.record(REMOTE_ID).await.and_then(|r| r.created_at), Some(77));
    Ok(())
}

#[tokio::test]
async fn test_registry_shares_instance_between_callers() -> anyhow::Result<()> {
    let remote = Arc::new(InMemoryRemoteStore::new());
    remote.insert(ProjectRecord::new(REMOTE_ID, "Remote")).await;
    let env = environment(remote);

    let first = env.project(REMOTE_ID).await?;
    first.write().await.set_name("Unsaved edit");

    let second = env.project(REMOTE_ID).await?;
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(second.read().await.name(), "Unsaved edit");
    Ok(())
}
