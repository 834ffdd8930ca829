// Builders and configuration shared by the in-crate tests.

use crate::modules::articles::core::article::Article;
use crate::modules::feature_flags::core::flag::{FeatureFlag, FlagKey};
use crate::shell::config::Config;
use std::collections::HashMap;

/// In-memory configuration with every other key at its default.
pub fn test_config() -> Config {
    let vars: HashMap<&str, &str> = HashMap::from([("STORAGE_BACKEND", "memory")]);
    Config::from_lookup(move |key| vars.get(key).map(|v| v.to_string()))
        .expect("default test config is valid")
}

pub struct FeatureFlagBuilder {
    inner: FeatureFlag,
}

impl Default for FeatureFlagBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl FeatureFlagBuilder {
    pub fn new() -> Self {
        Self {
            inner: FeatureFlag {
                key: FlagKey {
                    feature: "dark-mode".to_string(),
                    client: "web".to_string(),
                    stage: "prod".to_string(),
                },
                enabled: false,
            },
        }
    }

    pub fn feature(mut self, v: impl Into<String>) -> Self {
        self.inner.key.feature = v.into();
        self
    }

    pub fn client(mut self, v: impl Into<String>) -> Self {
        self.inner.key.client = v.into();
        self
    }

    pub fn stage(mut self, v: impl Into<String>) -> Self {
        self.inner.key.stage = v.into();
        self
    }

    pub fn enabled(mut self, v: bool) -> Self {
        self.inner.enabled = v;
        self
    }

    pub fn build(self) -> FeatureFlag {
        self.inner
    }
}

pub struct ArticleBuilder {
    inner: Article,
}

impl Default for ArticleBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl ArticleBuilder {
    pub fn new() -> Self {
        Self {
            inner: Article {
                id: "article-fixed-0001".to_string(),
                title: "Pour over basics".to_string(),
                body: "Grind medium-fine.\n\nBloom for thirty seconds.".to_string(),
                author: "Barista Bo".to_string(),
                created_at: 1_700_000_000_000,
            },
        }
    }

    pub fn id(mut self, v: impl Into<String>) -> Self {
        self.inner.id = v.into();
        self
    }

    pub fn title(mut self, v: impl Into<String>) -> Self {
        self.inner.title = v.into();
        self
    }

    pub fn body(mut self, v: impl Into<String>) -> Self {
        self.inner.body = v.into();
        self
    }

    pub fn author(mut self, v: impl Into<String>) -> Self {
        self.inner.author = v.into();
        self
    }

    pub fn created_at(mut self, v: i64) -> Self {
        self.inner.created_at = v;
        self
    }

    pub fn build(self) -> Article {
        self.inner
    }
}
