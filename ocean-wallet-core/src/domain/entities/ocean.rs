//! Ocean job entities
//!
//! A job wraps one signed transaction on its way through broadcast and
//! confirmation tracking. Lifecycle events replace per-job callbacks.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::types::{SignedTransaction, TransactionRecord};

/// Queued unit of work for the ocean interface
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OceanTransaction {
    pub job_id: Uuid,
    pub tx: SignedTransaction,
    pub queued_at: DateTime<Utc>,
}

impl OceanTransaction {
    pub fn new(tx: SignedTransaction) -> Self {
        Self {
            job_id: crate::shared::utils::generate_id(),
            tx,
            queued_at: Utc::now(),
        }
    }

    pub fn txid(&self) -> &str {
        self.tx.txid()
    }
}

/// Per-job state machine
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum JobState {
    Idle,
    Broadcasting,
    WaitingConfirmation,
    Confirmed,
    Unconfirmed,
    Failed,
    Dismissed,
}

impl JobState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, JobState::Confirmed | JobState::Unconfirmed | JobState::Failed)
    }
}

/// Terminal outcome of a single job
#[derive(Debug, Clone, PartialEq)]
pub enum JobOutcome {
    Confirmed(TransactionRecord),
    Unconfirmed,
    Failed { message: String },
}

impl JobOutcome {
    pub fn state(&self) -> JobState {
        match self {
            JobOutcome::Confirmed(_) => JobState::Confirmed,
            JobOutcome::Unconfirmed => JobState::Unconfirmed,
            JobOutcome::Failed { .. } => JobState::Failed,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum OceanEventKind {
    /// Raw transaction accepted by the remote API
    Broadcasted,
    Confirmed(TransactionRecord),
    /// Polling ceiling reached; the transaction may still confirm later
    Unconfirmed,
    Failed { message: String },
    /// Job removed from the queue; the next one may start
    Dequeued,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OceanEvent {
    pub job_id: Uuid,
    pub txid: String,
    pub kind: OceanEventKind,
    pub at: DateTime<Utc>,
}

impl OceanEvent {
    pub fn new(job: &OceanTransaction, kind: OceanEventKind) -> Self {
        Self {
            job_id: job.job_id,
            txid: job.txid().to_string(),
            kind,
            at: Utc::now(),
        }
    }
}

impl From<&JobOutcome> for OceanEventKind {
    fn from(outcome: &JobOutcome) -> Self {
        match outcome {
            JobOutcome::Confirmed(record) => OceanEventKind::Confirmed(record.clone()),
            JobOutcome::Unconfirmed => OceanEventKind::Unconfirmed,
            JobOutcome::Failed { message } => OceanEventKind::Failed { message: message.clone() },
        }
    }
}
