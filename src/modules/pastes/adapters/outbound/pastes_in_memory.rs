use crate::modules::pastes::adapters::outbound::paste_repository::PasteRepository;
use crate::modules::pastes::core::paste::Paste;
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryPastes {
    rows: RwLock<HashMap<String, Paste>>,
    is_offline: bool,
}

impl InMemoryPastes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }
}

#[async_trait::async_trait]
impl PasteRepository for InMemoryPastes {
    async fn get(&self, id: &str) -> anyhow::Result<Option<Paste>> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Paste repository offline"));
        }
        Ok(self.rows.read().await.get(id).cloned())
    }

    async fn put(&self, paste: &Paste) -> anyhow::Result<()> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Paste repository offline"));
        }
        self.rows
            .write()
            .await
            .insert(paste.id.clone(), paste.clone());
        Ok(())
    }
}

#[cfg(test)]
mod in_memory_pastes_tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn paste() -> Paste {
        Paste {
            id: "paste-0001".to_string(),
            text: "fn main() {}".to_string(),
            created_at: 1_700_000_000_000,
        }
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_store_and_read_back_a_paste(paste: Paste) {
        let repository = InMemoryPastes::new();
        repository.put(&paste).await.unwrap();
        assert_eq!(repository.get(&paste.id).await.unwrap(), Some(paste));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_return_none_for_an_unknown_id() {
        let repository = InMemoryPastes::new();
        assert_eq!(repository.get("missing").await.unwrap(), None);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_if_the_repository_is_offline(paste: Paste) {
        let mut repository = InMemoryPastes::new();
        repository.toggle_offline();
        let result = repository.put(&paste).await;
        assert!(result.unwrap_err().to_string().contains("Paste repository offline"));
    }
}
