pub mod account;
pub mod asset;
pub mod budget;
pub mod filter;
pub mod goal;
pub mod stats;
pub mod transaction;
pub mod user;

pub use account::{Account, AccountDraft, AccountKind, AccountPatch};
pub use asset::{Asset, AssetDraft, AssetKind, AssetPatch, AssetPerformance};
pub use budget::{Budget, BudgetDraft, BudgetPatch, BudgetPeriod};
pub use filter::{AmountRange, DateRange, FilterOptions, FilterPatch};
pub use goal::{Goal, GoalDraft, GoalKind, GoalPatch, Priority};
pub use stats::DashboardStats;
pub use transaction::{
    RecurringPeriod, Transaction, TransactionDraft, TransactionKind, TransactionPatch,
};
pub use user::{Theme, User, UserPatch, UserSettings};
