// In memory implementation of the FlagRepository port.
//
// Rows are keyed the same way as the DynamoDB table: (feature, client#stage).

use crate::modules::feature_flags::adapters::outbound::flag_repository::FlagRepository;
use crate::modules::feature_flags::core::flag::{FeatureFlag, FlagKey};
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryFlags {
    rows: RwLock<HashMap<(String, String), FeatureFlag>>,
    is_offline: bool,
}

impl InMemoryFlags {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }
}

#[async_trait::async_trait]
impl FlagRepository for InMemoryFlags {
    async fn get(&self, key: &FlagKey) -> anyhow::Result<Option<FeatureFlag>> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Flag repository offline"));
        }
        Ok(self
            .rows
            .read()
            .await
            .get(&(key.feature.clone(), key.target()))
            .cloned())
    }

    async fn put(&self, flag: &FeatureFlag) -> anyhow::Result<()> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Flag repository offline"));
        }
        self.rows
            .write()
            .await
            .insert((flag.key.feature.clone(), flag.key.target()), flag.clone());
        Ok(())
    }
}

#[cfg(test)]
mod in_memory_flags_tests {
    use super::*;
    use crate::test_support::fixtures::FeatureFlagBuilder;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn it_should_store_and_read_back_a_flag() {
        let repository = InMemoryFlags::new();
        let flag = FeatureFlagBuilder::new().enabled(true).build();
        repository.put(&flag).await.unwrap();
        assert_eq!(repository.get(&flag.key).await.unwrap(), Some(flag));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_keep_stages_apart() {
        let repository = InMemoryFlags::new();
        let prod = FeatureFlagBuilder::new().stage("prod").enabled(true).build();
        let dev = FeatureFlagBuilder::new().stage("dev").enabled(false).build();
        repository.put(&prod).await.unwrap();
        repository.put(&dev).await.unwrap();
        assert!(repository.get(&prod.key).await.unwrap().unwrap().enabled);
        assert!(!repository.get(&dev.key).await.unwrap().unwrap().enabled);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_overwrite_on_a_second_write() {
        let repository = InMemoryFlags::new();
        let flag = FeatureFlagBuilder::new().enabled(true).build();
        repository.put(&flag).await.unwrap();
        let flipped = FeatureFlag {
            enabled: false,
            ..flag.clone()
        };
        repository.put(&flipped).await.unwrap();
        assert_eq!(repository.get(&flag.key).await.unwrap(), Some(flipped));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_if_the_repository_is_offline() {
        let mut repository = InMemoryFlags::new();
        repository.toggle_offline();
        let flag = FeatureFlagBuilder::new().build();
        let result = repository.get(&flag.key).await;
        assert!(result.unwrap_err().to_string().contains("Flag repository offline"));
        assert!(repository.put(&flag).await.is_err());
    }
}
