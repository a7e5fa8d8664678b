use serde::{Deserialize, Serialize};

/// Mount mode for a container volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    ReadOnly,
    ReadWrite,
}

/// A host path mounted into the container filesystem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Volume {
    pub host_path: String,
    pub container_path: String,
    pub mode: Mode,
}

/// An engine parameter passed through to an image-style container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DockerParameter {
    pub name: String,
    pub value: String,
}

/// The container a task runs in. Exactly one variant is active at a
/// time; a bare process-style container is the default so a freshly
/// built job always carries a valid descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Container {
    Process(ProcessContainer),
    Image(DockerContainer),
}

impl Default for Container {
    fn default() -> Self {
        Container::Process(ProcessContainer::default())
    }
}

/// Process-style container: tasks run directly on the host, optionally
/// inside a filesystem image with extra volume mounts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProcessContainer {
    pub image: Option<String>,
    pub volumes: Vec<Volume>,
}

impl ProcessContainer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn image(mut self, reference: impl Into<String>) -> Self {
        self.image = Some(reference.into());
        self
    }

    pub fn add_volume(
        mut self,
        host_path: impl Into<String>,
        container_path: impl Into<String>,
        mode: Mode,
    ) -> Self {
        self.volumes.push(Volume {
            host_path: host_path.into(),
            container_path: container_path.into(),
            mode,
        });
        self
    }
}

/// Image-style container executed by the cluster's container engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DockerContainer {
    pub image: String,
    pub parameters: Vec<DockerParameter>,
}

impl DockerContainer {
    pub fn new(image: impl Into<String>) -> Self {
        Self {
            image: image.into(),
            parameters: Vec::new(),
        }
    }

    pub fn add_parameter(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters.push(DockerParameter {
            name: name.into(),
            value: value.into(),
        });
        self
    }
}

impl From<ProcessContainer> for Container {
    fn from(container: ProcessContainer) -> Self {
        Container::Process(container)
    }
}

impl From<DockerContainer> for Container {
    fn from(container: DockerContainer) -> Self {
        Container::Image(container)
    }
}
