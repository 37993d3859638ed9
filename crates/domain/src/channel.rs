//! Channel collaborator used when bootstrapping a new local project

/// Configuration a channel carries about its project
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChannelConfig {
    /// Project identifier declared in the channel configuration
    pub project: String,
}

/// The slice of a channel that project bootstrap relies on
pub trait ChannelLike: Send + Sync {
    /// Best guess of where the channel's project lives: a remote token or a local path
    fn guess_project_id_or_path(&self) -> String;

    fn config(&self) -> &ChannelConfig;
}
