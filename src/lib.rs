pub mod constraint;
pub mod container;
pub mod error;
pub mod job;
pub mod key;
pub mod resource;
pub mod task;

pub use constraint::{Constraint, LimitConstraint, TaskConstraint, ValueConstraint};
pub use container::{Container, DockerContainer, DockerParameter, Mode, ProcessContainer, Volume};
pub use error::{JobSpecError, Result};
pub use job::JobSpec;
pub use key::{Identity, JobKey};
pub use resource::Resource;
pub use task::{
    CronCollisionPolicy, ExecutorConfig, FetchUri, JobConfiguration, Metadata, TaskConfig,
};
