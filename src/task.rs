use serde::{Deserialize, Serialize};

use crate::constraint::Constraint;
use crate::container::Container;
use crate::key::{Identity, JobKey};
use crate::resource::Resource;

/// Instruction to download an artifact before task execution, and
/// optionally extract and cache it. Duplicate locators are preserved as
/// separate directives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FetchUri {
    pub value: String,
    pub extract: bool,
    pub cache: bool,
}

/// A free-form label attached to the task. The consuming scheduler
/// applies its own key namespacing; none happens here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    pub key: String,
    pub value: String,
}

/// Custom executor descriptor, materialized lazily the first time
/// either executor setter runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExecutorConfig {
    pub name: String,
    /// Opaque payload handed to the executor, serialized as-is.
    pub data: String,
}

/// What the scheduler does when a cron run fires while the previous run
/// is still active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CronCollisionPolicy {
    #[default]
    KillExisting,
    CancelNew,
    RunOverlap,
}

/// The resource/behavior blueprint replicated across a job's instances.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskConfig {
    pub owner: Option<Identity>,
    pub resources: Vec<Resource>,
    pub mesos_fetcher_uris: Vec<FetchUri>,
    pub metadata: Vec<Metadata>,
    pub constraints: Vec<Constraint>,
    pub container: Container,
    pub tier: Option<String>,
    /// Restart tasks automatically on exit (service) versus run to
    /// completion once (batch).
    pub is_service: bool,
    /// Failures tolerated before the scheduler gives up restarting.
    pub max_task_failures: i32,
    pub executor_config: Option<ExecutorConfig>,
}

impl TaskConfig {
    /// A fully-populated template: zeroed cpu/ram/disk entries, empty
    /// sequences, and a default process-style container. Every field is
    /// safe to read immediately.
    pub fn new() -> Self {
        Self {
            owner: None,
            resources: vec![Resource::Cpus(0.0), Resource::RamMb(0), Resource::DiskMb(0)],
            mesos_fetcher_uris: Vec::new(),
            metadata: Vec::new(),
            constraints: Vec::new(),
            container: Container::default(),
            tier: None,
            is_service: false,
            max_task_failures: 0,
            executor_config: None,
        }
    }

    /// Names of all reserved ports, in reservation order.
    pub fn named_ports(&self) -> impl Iterator<Item = &str> {
        self.resources.iter().filter_map(Resource::named_port)
    }
}

impl Default for TaskConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// The submission-ready record consumed by a scheduler RPC client.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobConfiguration {
    pub key: JobKey,
    pub owner: Option<Identity>,
    pub task_config: TaskConfig,
    pub instance_count: i32,
    pub cron_schedule: Option<String>,
    pub cron_collision_policy: CronCollisionPolicy,
}
