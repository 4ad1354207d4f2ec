use anyhow::{anyhow, Context};
use semver::Version;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppManifest {
    pub name: String,
    pub version: Version,
    pub description: Option<String>,
    #[serde(default)]
    pub applications: Vec<String>,
    #[serde(default)]
    pub libraries: Vec<String>,
}

impl AppManifest {
    pub fn from_toml_str(input: &str) -> anyhow::Result<Self> {
        let manifest: Self =
            toml::from_str(input).context("failed to parse application manifest")?;
        if manifest.name.trim().is_empty() {
            return Err(anyhow!("application name must not be blank"));
        }
        if manifest.applications.contains(&manifest.name)
            || manifest.libraries.contains(&manifest.name)
        {
            return Err(anyhow!(
                "application '{}' depends on itself",
                manifest.name
            ));
        }
        Ok(manifest)
    }

    pub fn dependency_names(&self) -> impl Iterator<Item = &str> {
        self.applications
            .iter()
            .chain(self.libraries.iter())
            .map(String::as_str)
    }
}
