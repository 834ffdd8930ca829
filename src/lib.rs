pub mod shared {
    pub mod core {
        pub mod primitives;
    }
    pub mod html;
    pub mod http;
    pub mod infrastructure {
        pub mod dynamodb;
        pub mod message_queue;
    }
}

pub mod modules {
    pub mod feature_flags {
        pub mod core {
            pub mod errors;
            pub mod flag;
        }
        pub mod use_cases {
            pub mod get_flag {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod set_flag {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod toggle_flag {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod graphql;
                pub mod http_error;
            }
            pub mod outbound {
                pub mod flag_repository;
                pub mod flags_dynamodb;
                pub mod flags_in_memory;
            }
        }
    }

    pub mod pastes {
        pub mod core {
            pub mod errors;
            pub mod paste;
        }
        pub mod use_cases {
            pub mod create_paste {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod get_paste {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod graphql;
                pub mod http_error;
            }
            pub mod outbound {
                pub mod paste_repository;
                pub mod pastes_dynamodb;
                pub mod pastes_in_memory;
            }
        }
    }

    pub mod articles {
        pub mod core {
            pub mod article;
            pub mod errors;
        }
        pub mod use_cases {
            pub mod publish_article {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_articles {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod get_article {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod graphql;
                pub mod http_error;
                pub mod pages;
            }
            pub mod outbound {
                pub mod article_repository;
                pub mod articles_dynamodb;
                pub mod articles_in_memory;
            }
        }
    }

    pub mod queue_ingest {
        pub mod core {
            pub mod errors;
            pub mod ingested_message;
        }
        pub mod use_cases {
            pub mod drain_queue {
                pub mod handler;
            }
            pub mod enqueue_message {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod get_ingested_message {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod http_error;
            }
            pub mod outbound {
                pub mod ingested_dynamodb;
                pub mod ingested_in_memory;
                pub mod ingested_message_repository;
            }
        }
    }
}

pub mod shell;

#[cfg(test)]
pub mod test_support {
    pub mod fixtures;
}
