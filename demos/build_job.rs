use clap::Parser;
use tracing_subscriber::EnvFilter;

use jobspec::container::DockerContainer;
use jobspec::job::JobSpec;
use jobspec::key::JobKey;

#[derive(Parser, Debug)]
#[command(name = "build-job")]
#[command(about = "Assemble a scheduler job configuration and print it as JSON")]
struct Args {
    /// Job key as role/environment/name
    #[arg(long, default_value = "www-data/prod/hello_world")]
    key: String,

    /// CPU cores per instance
    #[arg(long, default_value = "0.5")]
    cpu: f64,

    /// RAM per instance, in megabytes
    #[arg(long, default_value = "256")]
    ram: i64,

    /// Disk per instance, in megabytes
    #[arg(long, default_value = "512")]
    disk: i64,

    /// Number of instances
    #[arg(long, default_value = "1")]
    instances: i32,

    /// Container image; omit for a process-style container
    #[arg(long)]
    image: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let key: JobKey = args.key.parse()?;

    let mut job = JobSpec::new();
    job.role(key.role)
        .environment(key.environment)
        .name(key.name)
        .cpu(args.cpu)
        .ram_mb(args.ram)
        .disk_mb(args.disk)
        .instance_count(args.instances)
        .is_service(true)
        .add_named_ports(&["http"])
        .add_label("built-by", "build-job");

    if let Some(image) = args.image {
        job.container(DockerContainer::new(image));
    }

    println!("{}", serde_json::to_string_pretty(&job.freeze())?);

    Ok(())
}
