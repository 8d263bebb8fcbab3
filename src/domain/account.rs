use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A bank or brokerage account the user links to the tracker.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: AccountKind,
    pub balance: f64,
    pub currency: String,
    pub institution: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_synced: Option<DateTime<Utc>>,
}

impl Account {
    /// Materializes a draft into an account with a freshly assigned id.
    pub fn from_draft(draft: AccountDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id: draft.user_id,
            name: draft.name,
            kind: draft.kind,
            balance: draft.balance,
            currency: draft.currency,
            institution: draft.institution,
            last_synced: draft.last_synced,
        }
    }

    /// Merges the patch into this account, leaving unset fields untouched.
    pub fn apply(&mut self, patch: AccountPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(kind) = patch.kind {
            self.kind = kind;
        }
        if let Some(balance) = patch.balance {
            self.balance = balance;
        }
        if let Some(currency) = patch.currency {
            self.currency = currency;
        }
        if let Some(institution) = patch.institution {
            self.institution = institution;
        }
        if let Some(last_synced) = patch.last_synced {
            self.last_synced = Some(last_synced);
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AccountKind {
    Checking,
    Savings,
    Credit,
    Investment,
}

/// An account as submitted by a form, before an id is assigned.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountDraft {
    pub user_id: Uuid,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: AccountKind,
    pub balance: f64,
    pub currency: String,
    pub institution: String,
    #[serde(default)]
    pub last_synced: Option<DateTime<Utc>>,
}

/// Partial update for [`Account`]; `None` fields are left as they are.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountPatch {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<AccountKind>,
    pub balance: Option<f64>,
    pub currency: Option<String>,
    pub institution: Option<String>,
    pub last_synced: Option<DateTime<Utc>>,
}
