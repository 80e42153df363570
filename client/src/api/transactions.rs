//! Transaction endpoints.

use shared::{
    CreateTransactionRequest, MessageResponse, Transaction, TransactionDraft, TransactionType,
    TransactionUpdate,
};

use super::ApiClient;
use crate::error::Result;

/// Operations on the `/transactions` resource.
pub struct TransactionsApi<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    pub fn transactions(&self) -> TransactionsApi<'_> {
        TransactionsApi { client: self }
    }
}

impl TransactionsApi<'_> {
    /// List every transaction, income and expense alike.
    pub async fn get_all(&self) -> Result<Vec<Transaction>> {
        self.client.get("/transactions").await
    }

    /// Record an income transaction.
    pub async fn add_income(&self, draft: &TransactionDraft) -> Result<Transaction> {
        self.create(draft, TransactionType::Income).await
    }

    /// Record an expense transaction.
    pub async fn add_expense(&self, draft: &TransactionDraft) -> Result<Transaction> {
        self.create(draft, TransactionType::Expense).await
    }

    /// Apply a partial update to an existing transaction.
    pub async fn update(&self, id: &str, update: &TransactionUpdate) -> Result<Transaction> {
        self.client.put(&format!("/transactions/{id}"), update).await
    }

    /// Delete a transaction.
    pub async fn remove(&self, id: &str) -> Result<MessageResponse> {
        self.client.delete(&format!("/transactions/{id}")).await
    }

    // The draft passes through verbatim; only the discriminator is added.
    async fn create(
        &self,
        draft: &TransactionDraft,
        transaction_type: TransactionType,
    ) -> Result<Transaction> {
        let request = CreateTransactionRequest {
            draft: draft.clone(),
            transaction_type,
        };
        self.client.post("/transactions", &request).await
    }
}
