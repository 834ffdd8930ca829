use crate::modules::feature_flags::core::flag::{FeatureFlag, FlagKey};
use async_trait::async_trait;

#[async_trait]
pub trait FlagRepository: Send + Sync {
    async fn get(&self, key: &FlagKey) -> anyhow::Result<Option<FeatureFlag>>;
    async fn put(&self, flag: &FeatureFlag) -> anyhow::Result<()>;
}
