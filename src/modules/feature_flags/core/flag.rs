use crate::modules::feature_flags::core::errors::FlagError;
use serde::{Deserialize, Serialize};

const TARGET_SEPARATOR: char = '#';

/// Identifies one flag value: a feature switched per client and deployment stage.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FlagKey {
    pub feature: String,
    pub client: String,
    pub stage: String,
}

impl FlagKey {
    pub fn new(
        feature: Option<String>,
        client: Option<String>,
        stage: Option<String>,
    ) -> Result<Self, FlagError> {
        Ok(Self {
            feature: required("feature", feature)?,
            client: target_part("client", client)?,
            stage: target_part("stage", stage)?,
        })
    }

    /// Composite sort key, `client#stage`.
    pub fn target(&self) -> String {
        format!("{}{TARGET_SEPARATOR}{}", self.client, self.stage)
    }
}

/// `client` and `stage` are joined with `#`, so neither may contain it.
fn target_part(name: &str, value: Option<String>) -> Result<String, FlagError> {
    let value = required(name, value)?;
    if value.contains(TARGET_SEPARATOR) {
        return Err(FlagError::Invalid(format!(
            "parameter `{name}` must not contain `{TARGET_SEPARATOR}`"
        )));
    }
    Ok(value)
}

fn required(name: &str, value: Option<String>) -> Result<String, FlagError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v.trim().to_string()),
        _ => Err(FlagError::Invalid(format!("missing parameter `{name}`"))),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureFlag {
    pub key: FlagKey,
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureFlagView {
    pub feature: String,
    pub client: String,
    pub stage: String,
    pub enabled: bool,
}

impl From<FeatureFlag> for FeatureFlagView {
    fn from(flag: FeatureFlag) -> Self {
        Self {
            feature: flag.key.feature,
            client: flag.key.client,
            stage: flag.key.stage,
            enabled: flag.enabled,
        }
    }
}
