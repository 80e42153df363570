//! # Client State Store
//!
//! Composes the independent `auth`, `budgets`, and `transactions` slices
//! into one state tree for view consumption.
//!
//! ## Responsibilities:
//! - Own the three state slices behind disjoint keys
//! - Route each dispatched action to the slice that owns it
//! - Trace dispatched actions in debug builds
//!
//! ## Purpose:
//! Views read the composed tree and mutate it only by dispatching slice
//! actions; a slice is never written from outside its own reducer. The
//! store is constructed once at application start, owned by the caller,
//! and never persisted by this layer.

mod auth_state;
mod budget_state;
mod transaction_state;

pub use auth_state::{AuthAction, AuthState};
pub use budget_state::{BudgetAction, BudgetState};
pub use transaction_state::{TransactionAction, TransactionState};

/// An action addressed to exactly one slice.
#[derive(Debug, Clone)]
pub enum Action {
    Auth(AuthAction),
    Budgets(BudgetAction),
    Transactions(TransactionAction),
}

/// The composed client state tree.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Store {
    pub auth: AuthState,
    pub budgets: BudgetState,
    pub transactions: TransactionState,
}

impl Store {
    /// Build the store created once at application start.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply an action to the slice that owns it.
    ///
    /// Reducers run synchronously; from the store's perspective each
    /// dispatch is atomic.
    pub fn dispatch(&mut self, action: Action) {
        #[cfg(debug_assertions)]
        tracing::debug!(?action, "dispatching store action");

        match action {
            Action::Auth(action) => self.auth.apply(action),
            Action::Budgets(action) => self.budgets.apply(action),
            Action::Transactions(action) => self.transactions.apply(action),
        }
    }
}
