use crate::constraint::Constraint;
use crate::container::Container;
use crate::key::{Identity, JobKey};
use crate::resource::Resource;
use crate::task::{CronCollisionPolicy, ExecutorConfig, FetchUri, JobConfiguration, Metadata, TaskConfig};

/// Namespace under which anonymous port reservations are named.
const PORT_NAMESPACE: &str = "cluster";

/// Mutable-until-submitted builder for a scheduler job.
///
/// Constructed fully initialized: every accessor is safe to call on a
/// fresh builder. All mutators are total (no validation, no errors) and
/// return the receiver for fluent chaining; malformed combinations are
/// the scheduler's to reject at submission time. Not safe for
/// concurrent mutation without external synchronization.
#[derive(Debug, Clone, Default)]
pub struct JobSpec {
    job: JobConfiguration,
    /// Total ports reserved so far, named or anonymous. Monotonic for
    /// the life of the builder, never renumbered.
    port_count: usize,
}

impl JobSpec {
    pub fn new() -> Self {
        Self::default()
    }

    // Identity ---------------------------------------------------------

    /// Set the job key environment.
    pub fn environment(&mut self, env: impl Into<String>) -> &mut Self {
        self.job.key.environment = env.into();
        self
    }

    /// Set the job key role. Also refreshes the legacy owner identity
    /// on both the job-level and task-level records, which older schema
    /// consumers still read.
    pub fn role(&mut self, role: impl Into<String>) -> &mut Self {
        let role = role.into();
        self.job.key.role = role.clone();

        let identity = Identity::new(role);
        self.job.owner = Some(identity.clone());
        self.job.task_config.owner = Some(identity);
        self
    }

    /// Set the job key name.
    pub fn name(&mut self, name: impl Into<String>) -> &mut Self {
        self.job.key.name = name.into();
        self
    }

    // Executor ---------------------------------------------------------

    /// Name of the executor the task will be configured to run under.
    pub fn executor_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.executor_config_mut().name = name.into();
        self
    }

    /// Opaque executor payload, serialized into the task as-is.
    pub fn executor_data(&mut self, data: impl Into<String>) -> &mut Self {
        self.executor_config_mut().data = data.into();
        self
    }

    fn executor_config_mut(&mut self) -> &mut ExecutorConfig {
        self.job.task_config.executor_config.get_or_insert_with(ExecutorConfig::default)
    }

    // Resources --------------------------------------------------------

    pub fn cpu(&mut self, cpus: f64) -> &mut Self {
        for resource in &mut self.job.task_config.resources {
            if let Resource::Cpus(value) = resource {
                *value = cpus;
                break;
            }
        }
        self
    }

    pub fn ram_mb(&mut self, ram: i64) -> &mut Self {
        for resource in &mut self.job.task_config.resources {
            if let Resource::RamMb(value) = resource {
                *value = ram;
                break;
            }
        }
        self
    }

    pub fn disk_mb(&mut self, disk: i64) -> &mut Self {
        for resource in &mut self.job.task_config.resources {
            if let Resource::DiskMb(value) = resource {
                *value = disk;
                break;
            }
        }
        self
    }

    /// Scheduling tier consumed by the cluster's admission policy.
    pub fn tier(&mut self, tier: impl Into<String>) -> &mut Self {
        self.job.task_config.tier = Some(tier.into());
        self
    }

    // Failure / scale --------------------------------------------------

    /// How many failures to tolerate before giving up.
    pub fn max_failure(&mut self, max_fail: i32) -> &mut Self {
        self.job.task_config.max_task_failures = max_fail;
        self
    }

    /// How many instances of the job to run.
    pub fn instance_count(&mut self, inst_count: i32) -> &mut Self {
        self.job.instance_count = inst_count;
        self
    }

    pub fn get_instance_count(&self) -> i32 {
        self.job.instance_count
    }

    /// Restart the job's tasks if they exit.
    pub fn is_service(&mut self, is_service: bool) -> &mut Self {
        self.job.task_config.is_service = is_service;
        self
    }

    /// Cron expression for recurring execution. Independent of the
    /// service flag; the scheduler owns their combined semantics.
    pub fn cron_schedule(&mut self, cron: impl Into<String>) -> &mut Self {
        self.job.cron_schedule = Some(cron.into());
        self
    }

    pub fn cron_collision_policy(&mut self, policy: CronCollisionPolicy) -> &mut Self {
        self.job.cron_collision_policy = policy;
        self
    }

    // Ports ------------------------------------------------------------

    /// Reserve one named port per name given. Actual port numbers are
    /// assigned dynamically by the scheduler.
    pub fn add_named_ports(&mut self, names: &[&str]) -> &mut Self {
        self.port_count += names.len();
        for name in names {
            self.job
                .task_config
                .resources
                .push(Resource::NamedPort(name.to_string()));
        }
        self
    }

    /// Reserve `num` anonymous ports named `cluster.port.<i>`, where `i`
    /// continues from the total number of ports already reserved on this
    /// builder (named or anonymous). Names are stable once generated but
    /// depend on reservation order, so reserve all ports before relying
    /// on generated names downstream.
    pub fn add_ports(&mut self, num: usize) -> &mut Self {
        let start = self.port_count;
        self.port_count += num;
        for i in start..self.port_count {
            let port_name = format!("{PORT_NAMESPACE}.port.{i}");
            self.job.task_config.resources.push(Resource::NamedPort(port_name));
        }
        tracing::debug!(requested = num, total = self.port_count, "Anonymous ports reserved");
        self
    }

    // Constraints ------------------------------------------------------

    /// Constrain tasks to hosts whose attribute `name` carries one of
    /// `values` (or none of them, when `negated`).
    pub fn add_value_constraint(
        &mut self,
        name: impl Into<String>,
        negated: bool,
        values: &[&str],
    ) -> &mut Self {
        self.job.task_config.constraints.push(Constraint::value(
            name,
            negated,
            values.iter().map(|v| v.to_string()).collect(),
        ));
        self
    }

    /// Cap the number of tasks scheduled simultaneously on hosts
    /// sharing a value for attribute `name`.
    pub fn add_limit_constraint(&mut self, name: impl Into<String>, limit: i32) -> &mut Self {
        self.job.task_config.constraints.push(Constraint::limit(name, limit));
        self
    }

    /// Require a host carrying the dedicated attribute `role/name`.
    /// The scheduler requires the role portion to match the job's own
    /// role (or a `*` wildcard) and rejects mismatches; nothing is
    /// checked here.
    pub fn add_dedicated_constraint(&mut self, role: &str, name: &str) -> &mut Self {
        let value = format!("{role}/{name}");
        self.add_value_constraint("dedicated", false, &[&value]);
        self
    }

    // Fetch / labels / container ---------------------------------------

    /// Add fetch directives sharing the same extract and cache flags,
    /// one per locator. There is no duplicate detection.
    pub fn add_uris(&mut self, extract: bool, cache: bool, values: &[&str]) -> &mut Self {
        for value in values {
            self.job.task_config.mesos_fetcher_uris.push(FetchUri {
                value: value.to_string(),
                extract,
                cache,
            });
        }
        self
    }

    /// Append a metadata label. Duplicates are kept; the scheduler
    /// prefixes keys with its own metadata namespace.
    pub fn add_label(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.job.task_config.metadata.push(Metadata {
            key: key.into(),
            value: value.into(),
        });
        self
    }

    /// Replace the task's container wholesale. Last write wins; exactly
    /// one container variant is ever active.
    pub fn container(&mut self, container: impl Into<Container>) -> &mut Self {
        self.job.task_config.container = container.into();
        self
    }

    // Accessors --------------------------------------------------------

    pub fn job_key(&self) -> &JobKey {
        &self.job.key
    }

    pub fn job_config(&self) -> &JobConfiguration {
        &self.job
    }

    pub fn task_config(&self) -> &TaskConfig {
        &self.job.task_config
    }

    /// Mutable view into the live job key. Escape hatch for advanced
    /// callers; mutations here bypass the builder entirely.
    pub fn job_key_mut(&mut self) -> &mut JobKey {
        &mut self.job.key
    }

    /// Mutable view into the live configuration. Escape hatch for
    /// advanced callers; mutations here bypass the builder entirely.
    pub fn job_config_mut(&mut self) -> &mut JobConfiguration {
        &mut self.job
    }

    /// Mutable view into the live task template. Escape hatch for
    /// advanced callers; mutations here bypass the builder entirely.
    pub fn task_config_mut(&mut self) -> &mut TaskConfig {
        &mut self.job.task_config
    }

    /// Clone the current configuration as an immutable snapshot for a
    /// submission client. The builder stays mutable afterwards; later
    /// mutation does not affect the snapshot.
    pub fn freeze(&self) -> JobConfiguration {
        tracing::debug!(key = %self.job.key, "Job configuration frozen for submission");
        self.job.clone()
    }
}
