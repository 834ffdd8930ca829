use crate::modules::feature_flags::adapters::outbound::flag_repository::FlagRepository;
use crate::modules::feature_flags::core::errors::FlagError;
use crate::modules::feature_flags::core::flag::{FeatureFlag, FlagKey};
use std::sync::Arc;

pub struct GetFlagHandler<TRepository>
where
    TRepository: FlagRepository + ?Sized,
{
    repository: Arc<TRepository>,
}

impl<TRepository> GetFlagHandler<TRepository>
where
    TRepository: FlagRepository + ?Sized,
{
    pub fn new(repository: Arc<TRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, key: &FlagKey) -> Result<FeatureFlag, FlagError> {
        self.repository.get(key).await?.ok_or(FlagError::NotFound)
    }
}
