use jobspec::constraint::TaskConstraint;
use jobspec::container::{Container, DockerContainer, Mode, ProcessContainer};
use jobspec::job::JobSpec;
use jobspec::resource::Resource;
use jobspec::task::CronCollisionPolicy;

#[test]
fn test_fresh_builder_is_fully_populated() {
    let job = JobSpec::new();
    let task = job.task_config();

    // Exactly the three zeroed base resource entries, no ports yet.
    assert_eq!(
        task.resources,
        vec![Resource::Cpus(0.0), Resource::RamMb(0), Resource::DiskMb(0)]
    );
    assert_eq!(task.named_ports().count(), 0);
    assert!(task.mesos_fetcher_uris.is_empty());
    assert!(task.metadata.is_empty());
    assert!(task.constraints.is_empty());
    assert!(task.executor_config.is_none());
    assert!(matches!(task.container, Container::Process(_)));
    assert_eq!(job.get_instance_count(), 0);
}

#[test]
fn test_job_key_last_write_wins() {
    let mut job = JobSpec::new();
    job.environment("staging")
        .role("vagrant")
        .name("hello")
        .environment("prod")
        .name("hello_world");

    let key = job.job_key();
    assert_eq!(key.role, "vagrant");
    assert_eq!(key.environment, "prod");
    assert_eq!(key.name, "hello_world");
}

#[test]
fn test_role_syncs_both_owner_records() {
    let mut job = JobSpec::new();
    job.role("www-data");

    assert_eq!(job.job_config().owner.as_ref().unwrap().user, "www-data");
    assert_eq!(job.task_config().owner.as_ref().unwrap().user, "www-data");

    // A second write keeps them in sync, never diverging.
    job.role("backup");
    assert_eq!(job.job_config().owner.as_ref().unwrap().user, "backup");
    assert_eq!(job.task_config().owner.as_ref().unwrap().user, "backup");
}

#[test]
fn test_resource_setters_overwrite() {
    let mut job = JobSpec::new();
    job.cpu(1.5).ram_mb(2048).disk_mb(4096).cpu(2.0);

    let resources = &job.task_config().resources;
    assert_eq!(resources[0], Resource::Cpus(2.0));
    assert_eq!(resources[1], Resource::RamMb(2048));
    assert_eq!(resources[2], Resource::DiskMb(4096));
    // Overwrites never grow the table.
    assert_eq!(resources.len(), 3);
}

#[test]
fn test_negative_resources_pass_through() {
    // No range validation locally; the scheduler rejects at submission.
    let mut job = JobSpec::new();
    job.cpu(-1.0).ram_mb(-64);

    assert_eq!(job.task_config().resources[0], Resource::Cpus(-1.0));
    assert_eq!(job.task_config().resources[1], Resource::RamMb(-64));
}

#[test]
fn test_anonymous_ports_are_monotonic() {
    let mut job = JobSpec::new();
    job.add_ports(3);

    let ports: Vec<&str> = job.task_config().named_ports().collect();
    assert_eq!(ports, vec!["cluster.port.0", "cluster.port.1", "cluster.port.2"]);

    job.add_ports(2);
    let ports: Vec<&str> = job.task_config().named_ports().collect();
    assert_eq!(ports[3], "cluster.port.3");
    assert_eq!(ports[4], "cluster.port.4");
}

#[test]
fn test_port_counter_counts_named_reservations() {
    let mut job = JobSpec::new();
    job.add_named_ports(&["http", "admin"]).add_ports(1);

    let ports: Vec<&str> = job.task_config().named_ports().collect();
    assert_eq!(ports, vec!["http", "admin", "cluster.port.2"]);
}

#[test]
fn test_value_constraint_populates_only_value_variant() {
    let mut job = JobSpec::new();
    job.add_value_constraint("host", true, &["a1", "a2"]);

    let constraints = &job.task_config().constraints;
    assert_eq!(constraints.len(), 1);
    assert_eq!(constraints[0].name, "host");
    match &constraints[0].constraint {
        TaskConstraint::Value(value) => {
            assert!(value.negated);
            assert_eq!(value.values, vec!["a1", "a2"]);
        }
        TaskConstraint::Limit(_) => panic!("expected value constraint"),
    }
}

#[test]
fn test_limit_constraint_populates_only_limit_variant() {
    let mut job = JobSpec::new();
    job.add_limit_constraint("rack", 2);

    let constraints = &job.task_config().constraints;
    assert_eq!(constraints.len(), 1);
    assert_eq!(constraints[0].name, "rack");
    match &constraints[0].constraint {
        TaskConstraint::Limit(limit) => assert_eq!(limit.limit, 2),
        TaskConstraint::Value(_) => panic!("expected limit constraint"),
    }
}

#[test]
fn test_dedicated_constraint_is_sugared_value_constraint() {
    let mut dedicated = JobSpec::new();
    dedicated.add_dedicated_constraint("vagrant", "test");

    let mut explicit = JobSpec::new();
    explicit.add_value_constraint("dedicated", false, &["vagrant/test"]);

    assert_eq!(
        dedicated.task_config().constraints,
        explicit.task_config().constraints
    );
}

#[test]
fn test_uris_share_flags_and_keep_call_order() {
    let mut job = JobSpec::new();
    job.add_uris(true, false, &["http://a/pkg.tar.gz", "http://b/pkg.tar.gz"]);

    let uris = &job.task_config().mesos_fetcher_uris;
    assert_eq!(uris.len(), 2);
    assert_eq!(uris[0].value, "http://a/pkg.tar.gz");
    assert_eq!(uris[1].value, "http://b/pkg.tar.gz");
    assert!(uris.iter().all(|u| u.extract && !u.cache));

    // Duplicates are preserved as separate directives.
    job.add_uris(false, true, &["http://a/pkg.tar.gz"]);
    assert_eq!(job.task_config().mesos_fetcher_uris.len(), 3);
}

#[test]
fn test_labels_allow_duplicates() {
    let mut job = JobSpec::new();
    job.add_label("team", "infra").add_label("team", "infra");

    let metadata = &job.task_config().metadata;
    assert_eq!(metadata.len(), 2);
    assert_eq!(metadata[0], metadata[1]);
}

#[test]
fn test_container_last_write_wins() {
    let mut job = JobSpec::new();
    job.container(DockerContainer::new("nginx:1.25"))
        .container(ProcessContainer::new().add_volume("/data", "/data", Mode::ReadOnly));

    match &job.task_config().container {
        Container::Process(process) => assert_eq!(process.volumes.len(), 1),
        Container::Image(_) => panic!("expected the second container to win"),
    }
}

#[test]
fn test_executor_setters_commute() {
    let mut name_first = JobSpec::new();
    name_first.executor_name("thermos").executor_data("{}");

    let mut data_first = JobSpec::new();
    data_first.executor_data("{}").executor_name("thermos");

    assert_eq!(
        name_first.task_config().executor_config,
        data_first.task_config().executor_config
    );

    let executor = name_first.task_config().executor_config.as_ref().unwrap();
    assert_eq!(executor.name, "thermos");
    assert_eq!(executor.data, "{}");
}

#[test]
fn test_cron_and_service_flags_are_independent() {
    let mut job = JobSpec::new();
    job.is_service(true)
        .cron_schedule("*/5 * * * *")
        .cron_collision_policy(CronCollisionPolicy::CancelNew);

    assert!(job.task_config().is_service);
    assert_eq!(job.job_config().cron_schedule.as_deref(), Some("*/5 * * * *"));
    assert_eq!(
        job.job_config().cron_collision_policy,
        CronCollisionPolicy::CancelNew
    );
}

#[test]
fn test_mutable_accessors_expose_live_state() {
    let mut job = JobSpec::new();
    job.role("vagrant");

    // The escape hatch mutates the same record the builder owns.
    job.job_key_mut().name = "patched".to_string();
    assert_eq!(job.job_key().name, "patched");

    job.task_config_mut().is_service = true;
    assert!(job.job_config().task_config.is_service);
}

#[test]
fn test_freeze_snapshot_is_detached() {
    let mut job = JobSpec::new();
    job.role("vagrant").environment("prod").name("hello").instance_count(3);

    let snapshot = job.freeze();
    assert_eq!(snapshot, *job.job_config());

    job.instance_count(10).name("renamed");
    assert_eq!(snapshot.instance_count, 3);
    assert_eq!(snapshot.key.name, "hello");
}

#[test]
fn test_default_builder_serializes() {
    let job = JobSpec::new();
    let json = serde_json::to_value(job.job_config()).unwrap();

    let resources = json["task_config"]["resources"].as_array().unwrap();
    assert_eq!(resources.len(), 3);
    assert!(json["task_config"]["executor_config"].is_null());
}

#[test]
fn test_full_job_round_trips_through_json() {
    let mut job = JobSpec::new();
    job.environment("prod")
        .role("www-data")
        .name("hello_world")
        .cpu(1.0)
        .ram_mb(1024)
        .disk_mb(2048)
        .tier("preferred")
        .instance_count(4)
        .max_failure(2)
        .is_service(true)
        .executor_name("thermos")
        .executor_data("{\"cmd\": \"run\"}")
        .add_named_ports(&["http"])
        .add_ports(1)
        .add_value_constraint("zone", false, &["us-east-1a"])
        .add_limit_constraint("host", 1)
        .add_uris(true, true, &["hdfs://artifacts/app.tar.gz"])
        .add_label("owner", "infra")
        .container(DockerContainer::new("app:1.0").add_parameter("network", "host"));

    let encoded = serde_json::to_string(job.job_config()).unwrap();
    let decoded: jobspec::JobConfiguration = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, *job.job_config());
}
