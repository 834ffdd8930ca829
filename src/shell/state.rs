use anyhow::Context;
use aws_config::BehaviorVersion;
use std::sync::Arc;

use crate::modules::articles::adapters::outbound::article_repository::ArticleRepository;
use crate::modules::articles::adapters::outbound::articles_dynamodb::DynamoDbArticles;
use crate::modules::articles::adapters::outbound::articles_in_memory::InMemoryArticles;
use crate::modules::articles::use_cases::get_article::handler::GetArticleHandler;
use crate::modules::articles::use_cases::list_articles::handler::ListArticlesHandler;
use crate::modules::articles::use_cases::publish_article::handler::PublishArticleHandler;
use crate::modules::feature_flags::adapters::outbound::flag_repository::FlagRepository;
use crate::modules::feature_flags::adapters::outbound::flags_dynamodb::DynamoDbFlags;
use crate::modules::feature_flags::adapters::outbound::flags_in_memory::InMemoryFlags;
use crate::modules::feature_flags::use_cases::get_flag::handler::GetFlagHandler;
use crate::modules::feature_flags::use_cases::set_flag::handler::SetFlagHandler;
use crate::modules::feature_flags::use_cases::toggle_flag::handler::ToggleFlagHandler;
use crate::modules::pastes::adapters::outbound::paste_repository::PasteRepository;
use crate::modules::pastes::adapters::outbound::pastes_dynamodb::DynamoDbPastes;
use crate::modules::pastes::adapters::outbound::pastes_in_memory::InMemoryPastes;
use crate::modules::pastes::use_cases::create_paste::handler::CreatePasteHandler;
use crate::modules::pastes::use_cases::get_paste::handler::GetPasteHandler;
use crate::modules::queue_ingest::adapters::outbound::ingested_dynamodb::DynamoDbIngestedMessages;
use crate::modules::queue_ingest::adapters::outbound::ingested_in_memory::InMemoryIngestedMessages;
use crate::modules::queue_ingest::adapters::outbound::ingested_message_repository::IngestedMessageRepository;
use crate::modules::queue_ingest::use_cases::enqueue_message::handler::EnqueueMessageHandler;
use crate::modules::queue_ingest::use_cases::get_ingested_message::handler::GetIngestedMessageHandler;
use crate::shared::infrastructure::message_queue::MessageQueue;
use crate::shared::infrastructure::message_queue::in_memory::InMemoryMessageQueue;
use crate::shared::infrastructure::message_queue::sqs::SqsMessageQueue;
use crate::shell::config::{Config, StorageBackend};

/// Concrete implementations behind every port, shared by the router and the drainer.
#[derive(Clone)]
pub struct Backends {
    pub flags: Arc<dyn FlagRepository>,
    pub pastes: Arc<dyn PasteRepository>,
    pub articles: Arc<dyn ArticleRepository>,
    pub queue: Arc<dyn MessageQueue>,
    pub ingested: Arc<dyn IngestedMessageRepository>,
}

impl Backends {
    pub fn in_memory() -> Self {
        Self {
            flags: Arc::new(InMemoryFlags::new()),
            pastes: Arc::new(InMemoryPastes::new()),
            articles: Arc::new(InMemoryArticles::new()),
            queue: Arc::new(InMemoryMessageQueue::new()),
            ingested: Arc::new(InMemoryIngestedMessages::new()),
        }
    }

    pub async fn aws(config: &Config) -> anyhow::Result<Self> {
        let queue_url = config
            .queue_url
            .clone()
            .context("QUEUE_URL is required for the aws backend")?;
        let sdk_config = aws_config::load_defaults(BehaviorVersion::latest()).await;
        let dynamodb = aws_sdk_dynamodb::Client::new(&sdk_config);
        let sqs = aws_sdk_sqs::Client::new(&sdk_config);
        Ok(Self {
            flags: Arc::new(DynamoDbFlags::new(dynamodb.clone(), &config.flags_table)),
            pastes: Arc::new(DynamoDbPastes::new(dynamodb.clone(), &config.pastes_table)),
            articles: Arc::new(DynamoDbArticles::new(
                dynamodb.clone(),
                &config.articles_table,
            )),
            queue: Arc::new(SqsMessageQueue::new(sqs, queue_url)),
            ingested: Arc::new(DynamoDbIngestedMessages::new(
                dynamodb,
                &config.messages_table,
            )),
        })
    }

    pub async fn from_config(config: &Config) -> anyhow::Result<Self> {
        match config.backend {
            StorageBackend::Memory => {
                tracing::info!("using in-memory backends");
                Ok(Self::in_memory())
            }
            StorageBackend::Aws => {
                tracing::info!(
                    flags_table = %config.flags_table,
                    pastes_table = %config.pastes_table,
                    articles_table = %config.articles_table,
                    messages_table = %config.messages_table,
                    "using DynamoDB and SQS backends"
                );
                Self::aws(config).await
            }
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub get_flag: Arc<GetFlagHandler<dyn FlagRepository>>,
    pub set_flag: Arc<SetFlagHandler<dyn FlagRepository>>,
    pub toggle_flag: Arc<ToggleFlagHandler<dyn FlagRepository>>,
    pub create_paste: Arc<CreatePasteHandler<dyn PasteRepository>>,
    pub get_paste: Arc<GetPasteHandler<dyn PasteRepository>>,
    pub publish_article: Arc<PublishArticleHandler<dyn ArticleRepository>>,
    pub list_articles: Arc<ListArticlesHandler<dyn ArticleRepository>>,
    pub get_article: Arc<GetArticleHandler<dyn ArticleRepository>>,
    pub enqueue_message: Arc<EnqueueMessageHandler<dyn MessageQueue>>,
    pub get_ingested_message: Arc<GetIngestedMessageHandler<dyn IngestedMessageRepository>>,
}

impl AppState {
    pub fn new(backends: &Backends, config: &Config) -> Self {
        Self {
            get_flag: Arc::new(GetFlagHandler::new(backends.flags.clone())),
            set_flag: Arc::new(SetFlagHandler::new(backends.flags.clone())),
            toggle_flag: Arc::new(ToggleFlagHandler::new(backends.flags.clone())),
            create_paste: Arc::new(CreatePasteHandler::new(
                backends.pastes.clone(),
                config.paste_max_bytes,
            )),
            get_paste: Arc::new(GetPasteHandler::new(backends.pastes.clone())),
            publish_article: Arc::new(PublishArticleHandler::new(backends.articles.clone())),
            list_articles: Arc::new(ListArticlesHandler::new(backends.articles.clone())),
            get_article: Arc::new(GetArticleHandler::new(backends.articles.clone())),
            enqueue_message: Arc::new(EnqueueMessageHandler::new(backends.queue.clone())),
            get_ingested_message: Arc::new(GetIngestedMessageHandler::new(
                backends.ingested.clone(),
            )),
        }
    }
}
