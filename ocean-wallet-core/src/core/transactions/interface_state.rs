use uuid::Uuid;

use crate::domain::entities::{JobState, OceanTransaction};

/// Job as shown in the transaction drawer
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayedTransaction {
    pub job_id: Uuid,
    pub txid: String,
    pub title: String,
    pub broadcasted: bool,
    pub state: JobState,
}

impl DisplayedTransaction {
    pub fn new(job: &OceanTransaction, title: &str, state: JobState) -> Self {
        Self {
            job_id: job.job_id,
            txid: job.txid().to_string(),
            title: title.to_string(),
            broadcasted: false,
            state,
        }
    }
}

/// Drawer state; the last job stays visible until dismissed
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OceanInterfaceState {
    pub tx: Option<DisplayedTransaction>,
    pub tx_url: Option<String>,
    pub err: Option<String>,
    dismissed: bool,
}

impl OceanInterfaceState {
    pub fn is_visible(&self) -> bool {
        self.tx.is_some() || self.err.is_some()
    }

    pub fn show(&mut self, tx: DisplayedTransaction) {
        self.tx = Some(tx);
        self.dismissed = false;
    }

    pub fn show_error(&mut self, message: impl Into<String>) {
        self.err = Some(message.into());
        self.dismissed = false;
    }

    /// Clear what is displayed; in-flight work is untouched
    pub fn dismiss(&mut self) {
        self.tx = None;
        self.tx_url = None;
        self.err = None;
        self.dismissed = true;
    }

    pub fn job_state(&self) -> JobState {
        match &self.tx {
            Some(tx) => tx.state,
            None if self.dismissed => JobState::Dismissed,
            None => JobState::Idle,
        }
    }
}
