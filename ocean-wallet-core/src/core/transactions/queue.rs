use std::collections::VecDeque;
use uuid::Uuid;

use crate::domain::entities::OceanTransaction;

/// FIFO of pending jobs; only the head is ever orchestrated
#[derive(Debug, Default)]
pub struct OceanQueue {
    transactions: VecDeque<OceanTransaction>,
}

impl OceanQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, transaction: OceanTransaction) {
        self.transactions.push_back(transaction);
    }

    /// Remove the head if it is the given job
    pub fn pop(&mut self, job_id: Uuid) -> Option<OceanTransaction> {
        match self.transactions.front() {
            Some(head) if head.job_id == job_id => self.transactions.pop_front(),
            _ => None,
        }
    }

    pub fn first(&self) -> Option<&OceanTransaction> {
        self.transactions.front()
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}
