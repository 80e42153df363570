//! # Transaction State
//!
//! Caches the server's transaction list for the dashboard and the income
//! and expense views.

use shared::Transaction;

/// Actions owned by the transactions slice.
#[derive(Debug, Clone)]
pub enum TransactionAction {
    RequestStarted,
    /// Full refresh from `GET /transactions`.
    Loaded(Vec<Transaction>),
    Added(Transaction),
    Updated(Transaction),
    /// A transaction was deleted; carries its id.
    Removed(String),
    RequestFailed(String),
}

/// Cached transaction data plus request lifecycle flags.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionState {
    pub transactions: Vec<Transaction>,
    pub loading: bool,
    pub error: Option<String>,
}

impl TransactionState {
    pub(super) fn apply(&mut self, action: TransactionAction) {
        match action {
            TransactionAction::RequestStarted => {
                self.loading = true;
                self.error = None;
            }
            TransactionAction::Loaded(transactions) => {
                self.loading = false;
                self.error = None;
                self.transactions = transactions;
            }
            TransactionAction::Added(transaction) => {
                self.loading = false;
                self.transactions.push(transaction);
            }
            TransactionAction::Updated(transaction) => {
                self.loading = false;
                if let Some(existing) = self
                    .transactions
                    .iter_mut()
                    .find(|t| t.id == transaction.id)
                {
                    *existing = transaction;
                }
            }
            TransactionAction::Removed(id) => {
                self.loading = false;
                self.transactions.retain(|t| t.id != id);
            }
            TransactionAction::RequestFailed(message) => {
                self.loading = false;
                self.error = Some(message);
            }
        }
    }
}
