use chrono::{Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::transaction::TransactionKind;

pub const DEFAULT_AMOUNT_MIN: f64 = 0.0;
pub const DEFAULT_AMOUNT_MAX: f64 = 10_000.0;

/// The user-adjustable view filter. Empty category, account, and kind sets
/// mean "no restriction". Held state only; no list or aggregate consumes it
/// yet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptions {
    pub date_range: DateRange,
    pub categories: Vec<String>,
    pub accounts: Vec<String>,
    pub transaction_types: Vec<TransactionKind>,
    pub amount_range: AmountRange,
}

impl FilterOptions {
    /// Month-to-date defaults anchored at `today`.
    pub fn defaults(today: NaiveDate) -> Self {
        Self {
            date_range: DateRange {
                start: today.with_day(1).unwrap_or(today),
                end: today,
            },
            categories: Vec::new(),
            accounts: Vec::new(),
            transaction_types: Vec::new(),
            amount_range: AmountRange {
                min: DEFAULT_AMOUNT_MIN,
                max: DEFAULT_AMOUNT_MAX,
            },
        }
    }

    /// Merges the patch into this filter, leaving unset fields untouched.
    pub fn apply(&mut self, patch: FilterPatch) {
        if let Some(date_range) = patch.date_range {
            self.date_range = date_range;
        }
        if let Some(categories) = patch.categories {
            self.categories = categories;
        }
        if let Some(accounts) = patch.accounts {
            self.accounts = accounts;
        }
        if let Some(transaction_types) = patch.transaction_types {
            self.transaction_types = transaction_types;
        }
        if let Some(amount_range) = patch.amount_range {
            self.amount_range = amount_range;
        }
    }
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self::defaults(Utc::now().date_naive())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct AmountRange {
    pub min: f64,
    pub max: f64,
}

/// Partial update for [`FilterOptions`]; `None` fields are left as they are.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterPatch {
    pub date_range: Option<DateRange>,
    pub categories: Option<Vec<String>>,
    pub accounts: Option<Vec<String>>,
    pub transaction_types: Option<Vec<TransactionKind>>,
    pub amount_range: Option<AmountRange>,
}
