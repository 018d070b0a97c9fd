use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{broadcast, Mutex, Notify, RwLock};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use super::error_mapping::error_message_mapping;
use super::explorer::transaction_url;
use super::interface_state::{DisplayedTransaction, OceanInterfaceState};
use super::queue::OceanQueue;
use crate::core::notifications::NotificationService;
use crate::core::wallet::TokenStore;
use crate::domain::entities::{
    Environment, EnvironmentNetwork, JobOutcome, JobState, NotificationType, OceanEvent,
    OceanEventKind, OceanTransaction, SendNotificationData,
};
use crate::domain::repositories::OceanApi;
use crate::shared::constants::{
    EVENT_CHANNEL_CAPACITY, INITIAL_WAIT_DEBUG_MS, INITIAL_WAIT_MS, INTERVAL_TIME_MS,
    MAX_AUTO_RETRY, MAX_TIMEOUT_MS, NOTIFICATION_TIMEOUT_MS,
};
use crate::shared::error::WalletError;
use crate::shared::types::{SignedTransaction, TransactionRecord};

const TITLE_PREPARING: &str = "Preparing broadcast";
const TITLE_WAITING: &str = "Waiting for transaction";
const TITLE_COMPLETED: &str = "Transaction completed";
const TITLE_UNCONFIRMED: &str = "Sent but not confirmed";
const TITLE_ERROR: &str = "Transaction Error";

/// Broadcast and confirmation timing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OceanSettings {
    /// Delay before the first confirmation lookup
    pub initial_wait: Duration,
    pub interval: Duration,
    /// Cumulative wait after which polling gives up
    pub max_timeout: Duration,
    /// Submission retries after the first attempt
    pub max_auto_retry: u32,
}

impl OceanSettings {
    pub fn for_environment(environment: &Environment) -> Self {
        let initial_wait = if environment.debug {
            INITIAL_WAIT_DEBUG_MS
        } else {
            INITIAL_WAIT_MS
        };
        Self {
            initial_wait: Duration::from_millis(initial_wait),
            interval: Duration::from_millis(INTERVAL_TIME_MS),
            max_timeout: Duration::from_millis(MAX_TIMEOUT_MS),
            max_auto_retry: MAX_AUTO_RETRY,
        }
    }
}

impl Default for OceanSettings {
    fn default() -> Self {
        Self::for_environment(&Environment::production())
    }
}

/// Broadcast-confirm orchestrator.
///
/// A single worker drains the queue one job at a time: submit with bounded
/// retry, poll for confirmation up to a ceiling, notify, then dequeue and
/// refresh tokens. The next job starts only after the previous one has been
/// dequeued. Lifecycle events are published on a broadcast channel.
pub struct OceanInterface {
    client: Arc<dyn OceanApi>,
    notifications: Arc<NotificationService>,
    tokens: Arc<TokenStore>,
    network: EnvironmentNetwork,
    settings: OceanSettings,
    queue: Mutex<OceanQueue>,
    state: RwLock<OceanInterfaceState>,
    address: RwLock<Option<String>>,
    events: broadcast::Sender<OceanEvent>,
    wake: Notify,
    shutdown: CancellationToken,
}

impl OceanInterface {
    pub fn new(
        client: Arc<dyn OceanApi>,
        notifications: Arc<NotificationService>,
        tokens: Arc<TokenStore>,
        network: EnvironmentNetwork,
        settings: OceanSettings,
    ) -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            client,
            notifications,
            tokens,
            network,
            settings,
            queue: Mutex::new(OceanQueue::new()),
            state: RwLock::new(OceanInterfaceState::default()),
            address: RwLock::new(None),
            events,
            wake: Notify::new(),
            shutdown: CancellationToken::new(),
        }
    }

    pub fn settings(&self) -> OceanSettings {
        self.settings
    }

    /// Queue a signed transaction; returns the job id carried by its events
    pub async fn enqueue(&self, tx: SignedTransaction) -> Uuid {
        let job = OceanTransaction::new(tx);
        let job_id = job.job_id;
        log::info!("Queued transaction {} as job {}", job.txid(), job_id);
        self.queue.lock().await.push(job);
        self.wake.notify_one();
        job_id
    }

    pub fn subscribe(&self) -> broadcast::Receiver<OceanEvent> {
        self.events.subscribe()
    }

    pub async fn first_transaction(&self) -> Option<OceanTransaction> {
        self.queue.lock().await.first().cloned()
    }

    pub async fn queue_len(&self) -> usize {
        self.queue.lock().await.len()
    }

    pub async fn state(&self) -> OceanInterfaceState {
        self.state.read().await.clone()
    }

    /// Close the drawer. Confirmation tracking of an in-flight job continues.
    pub async fn dismiss(&self) {
        self.state.write().await.dismiss();
    }

    /// Surface an error raised outside the job pipeline
    pub async fn set_error(&self, message: impl Into<String>) {
        let message = message.into();
        log::warn!("Ocean error: {}", message);
        self.state.write().await.show_error(message);
    }

    /// Address whose tokens are refreshed after each job
    pub async fn set_address(&self, address: Option<String>) {
        *self.address.write().await = address;
    }

    pub fn spawn(self: Arc<Self>) -> JoinHandle<()> {
        tokio::spawn(async move { self.run().await })
    }

    /// Stop the worker; an in-flight confirmation wait ends as unconfirmed
    pub fn shutdown(&self) {
        self.shutdown.cancel();
    }

    pub fn is_shutdown(&self) -> bool {
        self.shutdown.is_cancelled()
    }

    pub async fn run(&self) {
        log::info!("Ocean interface started on {}", self.network);
        loop {
            if self.shutdown.is_cancelled() {
                break;
            }
            let next = self.queue.lock().await.first().cloned();
            match next {
                Some(job) => {
                    self.process(job).await;
                }
                None => {
                    tokio::select! {
                        _ = self.wake.notified() => {}
                        _ = self.shutdown.cancelled() => break,
                    }
                }
            }
        }
        log::info!("Ocean interface stopped");
    }

    /// Run one job to completion. The job is dequeued on every outcome.
    pub(crate) async fn process(&self, job: OceanTransaction) -> JobOutcome {
        {
            let mut state = self.state.write().await;
            state.tx_url = None;
            state.show(DisplayedTransaction::new(&job, TITLE_PREPARING, JobState::Broadcasting));
        }

        let outcome = match self.broadcast(&job.tx).await {
            Ok(_) => self.track(&job).await,
            Err(e) => self.fail(&job, e).await,
        };

        if self.queue.lock().await.pop(job.job_id).is_none() {
            log::warn!("Job {} was not at the head of the queue", job.job_id);
        }
        let address = self.address.read().await.clone();
        if let Some(address) = address {
            self.tokens.refresh(&address).await;
        }
        self.emit(&job, OceanEventKind::Dequeued);
        outcome
    }

    async fn broadcast(&self, tx: &SignedTransaction) -> Result<String, WalletError> {
        let hex = tx.to_hex();
        let mut retries = 0;
        loop {
            match self.client.send_raw_transaction(&hex).await {
                Ok(txid) => return Ok(txid),
                Err(e) => {
                    log::error!("Broadcast of {} failed: {}", tx.txid(), e);
                    if retries >= self.settings.max_auto_retry {
                        return Err(e);
                    }
                    retries += 1;
                }
            }
        }
    }

    async fn track(&self, job: &OceanTransaction) -> JobOutcome {
        {
            let mut state = self.state.write().await;
            state.tx_url = Some(transaction_url(self.network, job.txid(), &job.tx.to_hex()));
            state.show(DisplayedTransaction::new(job, TITLE_WAITING, JobState::WaitingConfirmation));
        }
        self.emit(job, OceanEventKind::Broadcasted);

        let outcome = match self.wait_for_confirmation(job.txid()).await {
            Some(record) => JobOutcome::Confirmed(record),
            None => JobOutcome::Unconfirmed,
        };
        let title = match outcome {
            JobOutcome::Confirmed(_) => TITLE_COMPLETED,
            _ => TITLE_UNCONFIRMED,
        };

        self.notify(title, format!("Transaction ID: {}", job.txid())).await;

        {
            let mut state = self.state.write().await;
            let mut displayed = DisplayedTransaction::new(job, title, outcome.state());
            displayed.broadcasted = true;
            state.show(displayed);
        }
        log::info!("Transaction {} finished: {}", job.txid(), title);
        self.emit(job, OceanEventKind::from(&outcome));
        outcome
    }

    async fn fail(&self, job: &OceanTransaction, error: WalletError) -> JobOutcome {
        let message = format!("{}. Txid: {}", error.message(), job.txid());
        self.notify(TITLE_ERROR, error_message_mapping(&message)).await;

        {
            let mut state = self.state.write().await;
            state.show(DisplayedTransaction::new(job, TITLE_PREPARING, JobState::Failed));
            state.show_error(message.clone());
        }
        log::error!("Transaction failed: {}", message);

        let outcome = JobOutcome::Failed { message };
        self.emit(job, OceanEventKind::from(&outcome));
        outcome
    }

    /// Poll until the transaction is indexed. `None` once the cumulative wait
    /// reaches the ceiling or on shutdown.
    async fn wait_for_confirmation(&self, txid: &str) -> Option<TransactionRecord> {
        let mut elapsed = self.settings.initial_wait;
        if !self.sleep(self.settings.initial_wait).await {
            return None;
        }

        loop {
            match self.client.get_transaction(txid).await {
                Ok(record) => return Some(record),
                Err(e) => {
                    if elapsed >= self.settings.max_timeout {
                        log::error!("Giving up on {} after {:?}: {}", txid, elapsed, e);
                        return None;
                    }
                    log::debug!("Transaction {} not confirmed yet: {}", txid, e);
                }
            }
            if !self.sleep(self.settings.interval).await {
                log::warn!("Confirmation wait for {} cut short by shutdown", txid);
                return None;
            }
            elapsed += self.settings.interval;
        }
    }

    /// False if shutdown fired first
    async fn sleep(&self, duration: Duration) -> bool {
        tokio::select! {
            _ = tokio::time::sleep(duration) => true,
            _ = self.shutdown.cancelled() => false,
        }
    }

    /// Dispatch on its own task. The job waits at most
    /// `NOTIFICATION_TIMEOUT_MS`; a stalled platform call is left detached.
    async fn notify(&self, title: &str, body: String) {
        let notifications = Arc::clone(&self.notifications);
        let data = SendNotificationData::new(NotificationType::Transaction, title, body);
        let label = title.to_string();
        let dispatch = tokio::spawn(async move {
            let outcome = notifications.send(data).await;
            log::debug!("Notification '{}': {:?}", label, outcome);
        });

        match tokio::time::timeout(Duration::from_millis(NOTIFICATION_TIMEOUT_MS), dispatch).await {
            Ok(Ok(())) => {}
            Ok(Err(e)) => log::error!("Notification task for '{}' failed: {}", title, e),
            Err(_) => log::warn!("Notification '{}' still pending, continuing without it", title),
        }
    }

    fn emit(&self, job: &OceanTransaction, kind: OceanEventKind) {
        // No receivers is fine
        let _ = self.events.send(OceanEvent::new(job, kind));
    }
}
