use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::JobSpecError;

/// Uniquely identifies a job within a cluster namespace.
///
/// No uniqueness check is performed locally; the scheduler rejects
/// collisions at submission time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JobKey {
    pub role: String,
    pub environment: String,
    pub name: String,
}

impl JobKey {
    pub fn new(role: impl Into<String>, environment: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            environment: environment.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for JobKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.role, self.environment, self.name)
    }
}

impl FromStr for JobKey {
    type Err = JobSpecError;

    /// Parse the canonical `role/environment/name` path form.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('/').collect();
        if parts.len() != 3 || parts.iter().any(|p| p.is_empty()) {
            return Err(JobSpecError::InvalidJobKeyPath(s.to_string()));
        }
        Ok(JobKey::new(parts[0], parts[1], parts[2]))
    }
}

/// Legacy owner record kept for older schema consumers.
///
/// Populated on both the job-level and task-level records whenever the
/// role changes; the two must never diverge.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub user: String,
}

impl Identity {
    pub fn new(user: impl Into<String>) -> Self {
        Self { user: user.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_path_round_trip() {
        let key = JobKey::new("www-data", "prod", "hello");
        let parsed: JobKey = key.to_string().parse().unwrap();
        assert_eq!(parsed, key);
    }

    #[test]
    fn key_path_rejects_malformed() {
        assert!("role/env".parse::<JobKey>().is_err());
        assert!("role/env/name/extra".parse::<JobKey>().is_err());
        assert!("role//name".parse::<JobKey>().is_err());
        assert!("".parse::<JobKey>().is_err());
    }
}
