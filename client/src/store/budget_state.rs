//! # Budget State
//!
//! Caches the server's budget list for the budget management views.

use shared::Budget;

/// Actions owned by the budgets slice.
#[derive(Debug, Clone)]
pub enum BudgetAction {
    RequestStarted,
    /// Full refresh from `GET /budgets`.
    Loaded(Vec<Budget>),
    Created(Budget),
    Updated(Budget),
    /// A budget was deleted; carries its id.
    Removed(String),
    RequestFailed(String),
}

/// Cached budget data plus request lifecycle flags.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BudgetState {
    pub budgets: Vec<Budget>,
    pub loading: bool,
    pub error: Option<String>,
}

impl BudgetState {
    pub(super) fn apply(&mut self, action: BudgetAction) {
        match action {
            BudgetAction::RequestStarted => {
                self.loading = true;
                self.error = None;
            }
            BudgetAction::Loaded(budgets) => {
                self.loading = false;
                self.error = None;
                self.budgets = budgets;
            }
            BudgetAction::Created(budget) => {
                self.loading = false;
                self.budgets.push(budget);
            }
            BudgetAction::Updated(budget) => {
                self.loading = false;
                if let Some(existing) =
                    self.budgets.iter_mut().find(|b| b.id == budget.id)
                {
                    *existing = budget;
                }
            }
            BudgetAction::Removed(id) => {
                self.loading = false;
                self.budgets.retain(|b| b.id != id);
            }
            BudgetAction::RequestFailed(message) => {
                self.loading = false;
                self.error = Some(message);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn budget(id: &str, category: &str, limit: f64) -> Budget {
        Budget {
            id: id.to_string(),
            category: category.to_string(),
            limit,
            spent: None,
            created_at: Utc.with_ymd_and_hms(2025, 1, 15, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_loaded_replaces_cache() {
        let mut state = BudgetState::default();
        state.apply(BudgetAction::Created(budget("b0", "misc", 50.0)));
        state.apply(BudgetAction::Loaded(vec![budget("b1", "groceries", 400.0)]));

        assert_eq!(state.budgets.len(), 1);
        assert_eq!(state.budgets[0].id, "b1");
    }

    #[test]
    fn test_updated_replaces_matching_entry_only() {
        let mut state = BudgetState::default();
        state.apply(BudgetAction::Loaded(vec![
            budget("b1", "groceries", 400.0),
            budget("b2", "transport", 80.0),
        ]));

        state.apply(BudgetAction::Updated(budget("b2", "transport", 120.0)));
        assert_eq!(state.budgets[1].limit, 120.0);
        assert_eq!(state.budgets[0].limit, 400.0);

        // An update for an id we never cached is a no-op.
        state.apply(BudgetAction::Updated(budget("b9", "unknown", 1.0)));
        assert_eq!(state.budgets.len(), 2);
    }

    #[test]
    fn test_removed_drops_matching_entry() {
        let mut state = BudgetState::default();
        state.apply(BudgetAction::Loaded(vec![
            budget("b1", "groceries", 400.0),
            budget("b2", "transport", 80.0),
        ]));

        state.apply(BudgetAction::Removed("b1".to_string()));
        assert_eq!(state.budgets.len(), 1);
        assert_eq!(state.budgets[0].id, "b2");
    }

    #[test]
    fn test_failure_keeps_cached_data() {
        let mut state = BudgetState::default();
        state.apply(BudgetAction::Loaded(vec![budget("b1", "groceries", 400.0)]));
        state.apply(BudgetAction::RequestFailed("backend down".to_string()));

        assert_eq!(state.budgets.len(), 1);
        assert_eq!(state.error.as_deref(), Some("backend down"));
    }
}
