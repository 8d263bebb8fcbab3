//! Finance store: owns the transaction, budget, goal, asset, and account
//! collections plus the derived dashboard statistics.
//!
//! Collections are single-writer and preserve insertion order. Every
//! transaction mutation triggers a full stats recompute; the stats record is
//! replaced in one assignment so readers never observe a partial update.

use std::time::Duration;

use chrono::Utc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::domain::{
    Account, AccountDraft, AccountPatch, Asset, AssetDraft, AssetPatch, Budget, BudgetDraft,
    BudgetPatch, DashboardStats, FilterOptions, FilterPatch, Goal, GoalDraft, GoalPatch,
    Transaction, TransactionDraft, TransactionPatch,
};
use crate::errors::StoreError;
use crate::store::api::{DemoApi, FinanceApi};

const FETCH_LATENCY: Duration = Duration::from_millis(500);

pub struct FinanceStore {
    pub transactions: Vec<Transaction>,
    pub budgets: Vec<Budget>,
    pub goals: Vec<Goal>,
    pub assets: Vec<Asset>,
    pub accounts: Vec<Account>,
    pub stats: DashboardStats,
    pub filters: FilterOptions,
    pub is_loading: bool,
    pub error: Option<String>,
    latency: Duration,
    api: Box<dyn FinanceApi>,
}

impl FinanceStore {
    /// Finance store backed by the fixed demo data source.
    pub fn new() -> Self {
        Self::with_api(Box::new(DemoApi))
    }

    pub fn with_api(api: Box<dyn FinanceApi>) -> Self {
        Self {
            transactions: Vec::new(),
            budgets: Vec::new(),
            goals: Vec::new(),
            assets: Vec::new(),
            accounts: Vec::new(),
            stats: DashboardStats::default(),
            filters: FilterOptions::default(),
            is_loading: false,
            error: None,
            latency: FETCH_LATENCY,
            api,
        }
    }

    /// Replaces the simulated network latency; tests pass `Duration::ZERO`.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    // Transactions

    /// Replaces the transaction collection with the seed set and recomputes
    /// stats. On failure the previous contents stay untouched.
    pub async fn fetch_transactions(&mut self) {
        self.is_loading = true;
        tokio::time::sleep(self.latency).await;
        match self.api.transactions() {
            Ok(seed) => {
                info!(count = seed.len(), "fetched transactions");
                self.transactions = seed;
                self.recalculate_stats();
            }
            Err(err) => self.record_fetch_failure("transactions", err),
        }
        self.is_loading = false;
    }

    /// Assigns a fresh id, appends, and recomputes stats.
    pub fn add_transaction(&mut self, draft: TransactionDraft) -> Uuid {
        let transaction = Transaction::from_draft(draft);
        let id = transaction.id;
        self.transactions.push(transaction);
        self.recalculate_stats();
        debug!(%id, "added transaction");
        id
    }

    /// Merges the patch into the matching transaction and recomputes stats.
    /// Returns false (leaving the collection untouched) when no id matches.
    pub fn update_transaction(&mut self, id: Uuid, patch: TransactionPatch) -> bool {
        let updated = match self.transactions.iter_mut().find(|t| t.id == id) {
            Some(txn) => {
                txn.apply(patch);
                true
            }
            None => false,
        };
        if updated {
            self.recalculate_stats();
        }
        updated
    }

    /// Removes the matching transaction and recomputes stats. Returns false
    /// when no id matches.
    pub fn delete_transaction(&mut self, id: Uuid) -> bool {
        let before = self.transactions.len();
        self.transactions.retain(|t| t.id != id);
        let deleted = self.transactions.len() < before;
        if deleted {
            self.recalculate_stats();
        }
        deleted
    }

    // Budgets

    pub async fn fetch_budgets(&mut self) {
        self.is_loading = true;
        tokio::time::sleep(self.latency).await;
        match self.api.budgets() {
            Ok(seed) => {
                info!(count = seed.len(), "fetched budgets");
                self.budgets = seed;
            }
            Err(err) => self.record_fetch_failure("budgets", err),
        }
        self.is_loading = false;
    }

    /// Assigns a fresh id, initializes `spent` to zero, and appends.
    pub fn add_budget(&mut self, draft: BudgetDraft) -> Uuid {
        let budget = Budget::from_draft(draft);
        let id = budget.id;
        self.budgets.push(budget);
        debug!(%id, "added budget");
        id
    }

    pub fn update_budget(&mut self, id: Uuid, patch: BudgetPatch) -> bool {
        match self.budgets.iter_mut().find(|b| b.id == id) {
            Some(budget) => {
                budget.apply(patch);
                true
            }
            None => false,
        }
    }

    pub fn delete_budget(&mut self, id: Uuid) -> bool {
        let before = self.budgets.len();
        self.budgets.retain(|b| b.id != id);
        self.budgets.len() < before
    }

    // Goals

    pub async fn fetch_goals(&mut self) {
        self.is_loading = true;
        tokio::time::sleep(self.latency).await;
        match self.api.goals() {
            Ok(seed) => {
                info!(count = seed.len(), "fetched goals");
                self.goals = seed;
            }
            Err(err) => self.record_fetch_failure("goals", err),
        }
        self.is_loading = false;
    }

    /// Assigns a fresh id, initializes `current_amount` to zero, and appends.
    pub fn add_goal(&mut self, draft: GoalDraft) -> Uuid {
        let goal = Goal::from_draft(draft);
        let id = goal.id;
        self.goals.push(goal);
        debug!(%id, "added goal");
        id
    }

    pub fn update_goal(&mut self, id: Uuid, patch: GoalPatch) -> bool {
        match self.goals.iter_mut().find(|g| g.id == id) {
            Some(goal) => {
                goal.apply(patch);
                true
            }
            None => false,
        }
    }

    pub fn delete_goal(&mut self, id: Uuid) -> bool {
        let before = self.goals.len();
        self.goals.retain(|g| g.id != id);
        self.goals.len() < before
    }

    // Assets

    pub async fn fetch_assets(&mut self) {
        self.is_loading = true;
        tokio::time::sleep(self.latency).await;
        match self.api.assets() {
            Ok(seed) => {
                info!(count = seed.len(), "fetched assets");
                self.assets = seed;
            }
            Err(err) => self.record_fetch_failure("assets", err),
        }
        self.is_loading = false;
    }

    pub fn add_asset(&mut self, draft: AssetDraft) -> Uuid {
        let asset = Asset::from_draft(draft);
        let id = asset.id;
        self.assets.push(asset);
        debug!(%id, "added asset");
        id
    }

    pub fn update_asset(&mut self, id: Uuid, patch: AssetPatch) -> bool {
        match self.assets.iter_mut().find(|a| a.id == id) {
            Some(asset) => {
                asset.apply(patch);
                true
            }
            None => false,
        }
    }

    pub fn delete_asset(&mut self, id: Uuid) -> bool {
        let before = self.assets.len();
        self.assets.retain(|a| a.id != id);
        self.assets.len() < before
    }

    // Accounts

    pub async fn fetch_accounts(&mut self) {
        self.is_loading = true;
        tokio::time::sleep(self.latency).await;
        match self.api.accounts() {
            Ok(seed) => {
                info!(count = seed.len(), "fetched accounts");
                self.accounts = seed;
            }
            Err(err) => self.record_fetch_failure("accounts", err),
        }
        self.is_loading = false;
    }

    pub fn add_account(&mut self, draft: AccountDraft) -> Uuid {
        let account = Account::from_draft(draft);
        let id = account.id;
        self.accounts.push(account);
        debug!(%id, "added account");
        id
    }

    pub fn update_account(&mut self, id: Uuid, patch: AccountPatch) -> bool {
        match self.accounts.iter_mut().find(|a| a.id == id) {
            Some(account) => {
                account.apply(patch);
                true
            }
            None => false,
        }
    }

    pub fn delete_account(&mut self, id: Uuid) -> bool {
        let before = self.accounts.len();
        self.accounts.retain(|a| a.id != id);
        self.accounts.len() < before
    }

    // Filters

    /// Merges the patch into the current filter.
    pub fn set_filters(&mut self, patch: FilterPatch) {
        self.filters.apply(patch);
    }

    /// Resets the filter to month-to-date defaults.
    pub fn clear_filters(&mut self) {
        self.filters = FilterOptions::default();
    }

    // Stats

    /// Recomputes the dashboard aggregates for the current calendar month and
    /// publishes them in a single assignment.
    pub fn recalculate_stats(&mut self) {
        self.stats = DashboardStats::compute(&self.transactions, Utc::now().date_naive());
    }

    fn record_fetch_failure(&mut self, collection: &'static str, err: StoreError) {
        warn!(collection, "fetch failed: {err}");
        self.error = Some(StoreError::FetchFailed(collection).to_string());
    }
}

impl Default for FinanceStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo::DEMO_USER_ID;
    use crate::domain::{BudgetPeriod, GoalKind, Priority, TransactionKind};
    use chrono::NaiveDate;

    struct FailingApi;

    impl FinanceApi for FailingApi {
        fn transactions(&self) -> Result<Vec<Transaction>, StoreError> {
            Err(StoreError::FetchFailed("transactions"))
        }
        fn budgets(&self) -> Result<Vec<Budget>, StoreError> {
            Err(StoreError::FetchFailed("budgets"))
        }
        fn goals(&self) -> Result<Vec<Goal>, StoreError> {
            Err(StoreError::FetchFailed("goals"))
        }
        fn assets(&self) -> Result<Vec<Asset>, StoreError> {
            Err(StoreError::FetchFailed("assets"))
        }
        fn accounts(&self) -> Result<Vec<Account>, StoreError> {
            Err(StoreError::FetchFailed("accounts"))
        }
    }

    fn store() -> FinanceStore {
        FinanceStore::new().with_latency(Duration::ZERO)
    }

    fn txn_draft(kind: TransactionKind, amount: f64, date: NaiveDate) -> TransactionDraft {
        TransactionDraft {
            user_id: DEMO_USER_ID,
            amount,
            kind,
            category: "General".into(),
            subcategory: None,
            description: String::new(),
            date,
            account: "Checking".into(),
            tags: Vec::new(),
            recurring: false,
            recurring_period: None,
        }
    }

    fn today() -> NaiveDate {
        Utc::now().date_naive()
    }

    #[tokio::test]
    async fn fetch_transactions_replaces_collection_and_recomputes() {
        let mut finance = store();
        finance.fetch_transactions().await;
        assert_eq!(finance.transactions.len(), 3);
        assert!(!finance.is_loading);
        assert!(finance.error.is_none());
        assert_eq!(
            finance.stats,
            DashboardStats::compute(&finance.transactions, today())
        );
    }

    #[tokio::test]
    async fn failed_fetch_keeps_previous_contents() {
        let mut finance = store();
        finance.fetch_transactions().await;
        let before = finance.transactions.clone();

        let mut finance = FinanceStore::with_api(Box::new(FailingApi)).with_latency(Duration::ZERO);
        finance.transactions = before.clone();
        finance.fetch_transactions().await;

        assert_eq!(finance.transactions, before);
        assert!(!finance.is_loading);
        assert_eq!(
            finance.error.as_deref(),
            Some("Failed to fetch transactions")
        );
    }

    #[test]
    fn transaction_mutations_keep_stats_in_sync() {
        let mut finance = store();
        let id = finance.add_transaction(txn_draft(TransactionKind::Income, 5000.0, today()));
        finance.add_transaction(txn_draft(TransactionKind::Expense, 1200.0, today()));
        assert_eq!(finance.stats.total_income, 5000.0);
        assert_eq!(finance.stats.total_expenses, 1200.0);

        finance.update_transaction(
            id,
            TransactionPatch {
                amount: Some(4000.0),
                ..TransactionPatch::default()
            },
        );
        assert_eq!(finance.stats.total_income, 4000.0);

        finance.delete_transaction(id);
        assert_eq!(finance.stats.total_income, 0.0);
        assert_eq!(finance.stats.savings_rate, 0.0);
    }

    #[test]
    fn add_appends_last_with_fresh_id() {
        let mut finance = store();
        let first = finance.add_transaction(txn_draft(TransactionKind::Income, 1.0, today()));
        let second = finance.add_transaction(txn_draft(TransactionKind::Income, 2.0, today()));
        assert_ne!(first, second);
        assert_eq!(finance.transactions.last().unwrap().id, second);
    }

    #[test]
    fn update_with_unknown_id_leaves_collection_unchanged() {
        let mut finance = store();
        finance.add_transaction(txn_draft(TransactionKind::Income, 10.0, today()));
        let before = finance.transactions.clone();
        let updated = finance.update_transaction(
            Uuid::new_v4(),
            TransactionPatch {
                amount: Some(999.0),
                ..TransactionPatch::default()
            },
        );
        assert!(!updated);
        assert_eq!(finance.transactions, before);
    }

    #[test]
    fn delete_removes_exactly_one_matching_element() {
        let mut finance = store();
        let keep = finance.add_transaction(txn_draft(TransactionKind::Income, 1.0, today()));
        let gone = finance.add_transaction(txn_draft(TransactionKind::Expense, 2.0, today()));
        assert!(finance.delete_transaction(gone));
        assert_eq!(finance.transactions.len(), 1);
        assert_eq!(finance.transactions[0].id, keep);
        assert!(!finance.delete_transaction(gone));
    }

    #[test]
    fn add_budget_initializes_spent_to_zero() {
        let mut finance = store();
        let id = finance.add_budget(BudgetDraft {
            user_id: DEMO_USER_ID,
            category: "Food".into(),
            amount: 800.0,
            period: BudgetPeriod::Monthly,
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
        });
        let budget = finance.budgets.iter().find(|b| b.id == id).unwrap();
        assert_eq!(budget.spent, 0.0);
    }

    #[test]
    fn add_goal_initializes_current_amount_to_zero() {
        let mut finance = store();
        let id = finance.add_goal(GoalDraft {
            user_id: DEMO_USER_ID,
            title: "Vacation".into(),
            description: String::new(),
            target_amount: 3000.0,
            target_date: NaiveDate::from_ymd_opt(2024, 6, 30).unwrap(),
            category: GoalKind::Savings,
            priority: Priority::Medium,
        });
        let goal = finance.goals.iter().find(|g| g.id == id).unwrap();
        assert_eq!(goal.current_amount, 0.0);
    }

    #[tokio::test]
    async fn fetch_budgets_and_goals_load_seed_sets() {
        let mut finance = store();
        finance.fetch_budgets().await;
        finance.fetch_goals().await;
        finance.fetch_assets().await;
        finance.fetch_accounts().await;
        assert_eq!(finance.budgets.len(), 2);
        assert_eq!(finance.goals.len(), 2);
        assert!(finance.assets.is_empty());
        assert!(finance.accounts.is_empty());
        assert!(!finance.is_loading);
    }

    #[test]
    fn set_filters_merges_and_clear_resets() {
        let mut finance = store();
        finance.set_filters(FilterPatch {
            categories: Some(vec!["Food".into()]),
            ..FilterPatch::default()
        });
        assert_eq!(finance.filters.categories, vec!["Food".to_string()]);

        finance.clear_filters();
        assert!(finance.filters.categories.is_empty());
    }
}
