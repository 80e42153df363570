//! Budget endpoints.

use shared::{Budget, BudgetDraft, BudgetUpdate, MessageResponse};

use super::ApiClient;
use crate::error::Result;

/// Operations on the `/budgets` resource.
pub struct BudgetsApi<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    pub fn budgets(&self) -> BudgetsApi<'_> {
        BudgetsApi { client: self }
    }
}

impl BudgetsApi<'_> {
    /// List every budget.
    pub async fn get_all(&self) -> Result<Vec<Budget>> {
        self.client.get("/budgets").await
    }

    /// Create a new budget.
    pub async fn create(&self, draft: &BudgetDraft) -> Result<Budget> {
        self.client.post("/budgets", draft).await
    }

    /// Apply a partial update to an existing budget.
    pub async fn update(&self, id: &str, update: &BudgetUpdate) -> Result<Budget> {
        self.client.put(&format!("/budgets/{id}"), update).await
    }

    /// Delete a budget.
    pub async fn remove(&self, id: &str) -> Result<MessageResponse> {
        self.client.delete(&format!("/budgets/{id}")).await
    }
}
