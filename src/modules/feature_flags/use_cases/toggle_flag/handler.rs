// Flips a stored flag. Read then write, so two concurrent toggles may race;
// the last write wins, as with any plain put against the table.

use crate::modules::feature_flags::adapters::outbound::flag_repository::FlagRepository;
use crate::modules::feature_flags::core::errors::FlagError;
use crate::modules::feature_flags::core::flag::{FeatureFlag, FlagKey};
use std::sync::Arc;

pub struct ToggleFlagHandler<TRepository>
where
    TRepository: FlagRepository + ?Sized,
{
    repository: Arc<TRepository>,
}

impl<TRepository> ToggleFlagHandler<TRepository>
where
    TRepository: FlagRepository + ?Sized,
{
    pub fn new(repository: Arc<TRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, key: &FlagKey) -> Result<FeatureFlag, FlagError> {
        let current = self.repository.get(key).await?.ok_or(FlagError::NotFound)?;
        let toggled = FeatureFlag {
            enabled: !current.enabled,
            ..current
        };
        self.repository.put(&toggled).await?;
        tracing::info!(
            feature = %toggled.key.feature,
            target = %toggled.key.target(),
            enabled = toggled.enabled,
            "feature flag toggled"
        );
        Ok(toggled)
    }
}
