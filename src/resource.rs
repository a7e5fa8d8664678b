use serde::{Deserialize, Serialize};

/// A single resource request entry on a task.
///
/// A task's resource list always starts with exactly one `Cpus`, one
/// `RamMb`, and one `DiskMb` entry (zero-initialized at construction);
/// `NamedPort` entries are appended after them as ports are reserved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Resource {
    Cpus(f64),
    RamMb(i64),
    DiskMb(i64),
    NamedPort(String),
}

impl Resource {
    /// The port name, if this entry is a named-port reservation.
    pub fn named_port(&self) -> Option<&str> {
        match self {
            Resource::NamedPort(name) => Some(name),
            _ => None,
        }
    }
}
