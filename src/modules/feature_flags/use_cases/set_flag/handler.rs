use crate::modules::feature_flags::adapters::outbound::flag_repository::FlagRepository;
use crate::modules::feature_flags::core::errors::FlagError;
use crate::modules::feature_flags::core::flag::{FeatureFlag, FlagKey};
use std::sync::Arc;

pub struct SetFlagHandler<TRepository>
where
    TRepository: FlagRepository + ?Sized,
{
    repository: Arc<TRepository>,
}

impl<TRepository> SetFlagHandler<TRepository>
where
    TRepository: FlagRepository + ?Sized,
{
    pub fn new(repository: Arc<TRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, key: FlagKey, enabled: bool) -> Result<FeatureFlag, FlagError> {
        let flag = FeatureFlag { key, enabled };
        self.repository.put(&flag).await?;
        tracing::info!(
            feature = %flag.key.feature,
            target = %flag.key.target(),
            enabled,
            "feature flag set"
        );
        Ok(flag)
    }
}

#[cfg(test)]
mod set_flag_handler_tests {
    use super::*;
    use crate::modules::feature_flags::adapters::outbound::flags_in_memory::InMemoryFlags;
    use crate::test_support::fixtures::FeatureFlagBuilder;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn it_should_create_the_flag_on_first_write() {
        let repository = Arc::new(InMemoryFlags::new());
        let handler = SetFlagHandler::new(repository.clone());
        let key = FeatureFlagBuilder::new().build().key;
        let flag = handler.handle(key.clone(), true).await.unwrap();
        assert!(flag.enabled);
        assert_eq!(repository.get(&key).await.unwrap(), Some(flag));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_if_the_repository_is_offline() {
        let mut repository = InMemoryFlags::new();
        repository.toggle_offline();
        let handler = SetFlagHandler::new(Arc::new(repository));
        let key = FeatureFlagBuilder::new().build().key;
        assert!(matches!(
            handler.handle(key, true).await,
            Err(FlagError::Repository(_))
        ));
    }
}
