use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::modules::queue_ingest::use_cases::drain_queue::handler::QueueDrainer;
use crate::shell::config::Config;
use crate::shell::state::Backends;

pub fn spawn_queue_drainer(
    backends: &Backends,
    config: &Config,
    shutdown: watch::Receiver<bool>,
) -> JoinHandle<()> {
    let drainer = QueueDrainer::new(backends.queue.clone(), backends.ingested.clone())
        .with_batch_size(config.consumer_batch_size)
        .with_idle_interval(config.consumer_idle_interval);
    tokio::spawn(async move { drainer.run(shutdown).await })
}
