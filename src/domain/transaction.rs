use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single money movement. `amount` is a magnitude; `kind` determines the
/// net effect on the monthly totals.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: Uuid,
    pub user_id: Uuid,
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,
    pub description: String,
    pub date: NaiveDate,
    pub account: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub recurring: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurring_period: Option<RecurringPeriod>,
}

impl Transaction {
    /// Materializes a draft into a transaction with a freshly assigned id.
    pub fn from_draft(draft: TransactionDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id: draft.user_id,
            amount: draft.amount,
            kind: draft.kind,
            category: draft.category,
            subcategory: draft.subcategory,
            description: draft.description,
            date: draft.date,
            account: draft.account,
            tags: draft.tags,
            recurring: draft.recurring,
            recurring_period: draft.recurring_period,
        }
    }

    /// Merges the patch into this transaction, leaving unset fields untouched.
    pub fn apply(&mut self, patch: TransactionPatch) {
        if let Some(amount) = patch.amount {
            self.amount = amount;
        }
        if let Some(kind) = patch.kind {
            self.kind = kind;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(subcategory) = patch.subcategory {
            self.subcategory = Some(subcategory);
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(date) = patch.date {
            self.date = date;
        }
        if let Some(account) = patch.account {
            self.account = account;
        }
        if let Some(tags) = patch.tags {
            self.tags = tags;
        }
        if let Some(recurring) = patch.recurring {
            self.recurring = recurring;
        }
        if let Some(period) = patch.recurring_period {
            self.recurring_period = Some(period);
        }
    }
}

/// Whether a transaction increases or decreases net worth.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RecurringPeriod {
    Weekly,
    Monthly,
    Yearly,
}

/// A transaction as submitted by a form, before an id is assigned.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionDraft {
    pub user_id: Uuid,
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub category: String,
    #[serde(default)]
    pub subcategory: Option<String>,
    pub description: String,
    pub date: NaiveDate,
    pub account: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub recurring: bool,
    #[serde(default)]
    pub recurring_period: Option<RecurringPeriod>,
}

/// Partial update for [`Transaction`]; `None` fields are left as they are.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionPatch {
    pub amount: Option<f64>,
    #[serde(rename = "type")]
    pub kind: Option<TransactionKind>,
    pub category: Option<String>,
    pub subcategory: Option<String>,
    pub description: Option<String>,
    pub date: Option<NaiveDate>,
    pub account: Option<String>,
    pub tags: Option<Vec<String>>,
    pub recurring: Option<bool>,
    pub recurring_period: Option<RecurringPeriod>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> TransactionDraft {
        TransactionDraft {
            user_id: Uuid::new_v4(),
            amount: 42.0,
            kind: TransactionKind::Expense,
            category: "Food".into(),
            subcategory: None,
            description: "Groceries".into(),
            date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            account: "Checking".into(),
            tags: vec!["food".into()],
            recurring: false,
            recurring_period: None,
        }
    }

    #[test]
    fn from_draft_assigns_fresh_id() {
        let first = Transaction::from_draft(draft());
        let second = Transaction::from_draft(draft());
        assert_ne!(first.id, second.id);
        assert_eq!(first.amount, 42.0);
    }

    #[test]
    fn apply_merges_only_set_fields() {
        let mut txn = Transaction::from_draft(draft());
        txn.apply(TransactionPatch {
            amount: Some(55.5),
            ..TransactionPatch::default()
        });
        assert_eq!(txn.amount, 55.5);
        assert_eq!(txn.category, "Food");
        assert_eq!(txn.kind, TransactionKind::Expense);
    }
}
