//! Package records: resolved dependencies.

use serde::{Deserialize, Serialize};

/// A resolved dependency, identified by the (name, version) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Package {
    /// Package name.
    pub name: String,
    /// Resolved version.
    pub version: String,
    /// Filesystem path the package resolved to, when reported.
    #[serde(default)]
    pub path: Option<String>,
}

impl Package {
    /// Composite lookup key in the form `"name@version"`.
    #[must_use]
    pub fn package_id(&self) -> String {
        format!("{}@{}", self.name, self.version)
    }

    /// Returns `true` if this package matches the composite `"name@version"` key.
    #[must_use]
    pub fn matches_id(&self, package_id: &str) -> bool {
        // Split on the last '@' so scoped names like "@scope/pkg@1.0.0" work.
        package_id.rsplit_once('@').is_some_and(|(name, version)| {
            name == self.name && version == self.version
        })
    }
}
