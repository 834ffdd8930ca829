use crate::modules::pastes::core::paste::Paste;
use async_trait::async_trait;

#[async_trait]
pub trait PasteRepository: Send + Sync {
    async fn get(&self, id: &str) -> anyhow::Result<Option<Paste>>;
    async fn put(&self, paste: &Paste) -> anyhow::Result<()>;
}
