use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A valued holding tracked outside the transaction ledger.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: AssetKind,
    pub value: f64,
    pub currency: String,
    pub last_updated: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub performance: Option<AssetPerformance>,
}

impl Asset {
    /// Materializes a draft into an asset with a freshly assigned id.
    pub fn from_draft(draft: AssetDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id: draft.user_id,
            name: draft.name,
            kind: draft.kind,
            value: draft.value,
            currency: draft.currency,
            last_updated: draft.last_updated,
            performance: draft.performance,
        }
    }

    /// Merges the patch into this asset, leaving unset fields untouched.
    pub fn apply(&mut self, patch: AssetPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(kind) = patch.kind {
            self.kind = kind;
        }
        if let Some(value) = patch.value {
            self.value = value;
        }
        if let Some(currency) = patch.currency {
            self.currency = currency;
        }
        if let Some(last_updated) = patch.last_updated {
            self.last_updated = last_updated;
        }
        if let Some(performance) = patch.performance {
            self.performance = Some(performance);
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    Cash,
    Investment,
    Property,
    Crypto,
    Other,
}

/// Percentage change of an asset over standard windows.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct AssetPerformance {
    #[serde(rename = "change1d")]
    pub change_1d: f64,
    #[serde(rename = "change7d")]
    pub change_7d: f64,
    #[serde(rename = "change30d")]
    pub change_30d: f64,
    #[serde(rename = "change1y")]
    pub change_1y: f64,
}

/// An asset as submitted by a form, before an id is assigned.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetDraft {
    pub user_id: Uuid,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: AssetKind,
    pub value: f64,
    pub currency: String,
    pub last_updated: DateTime<Utc>,
    #[serde(default)]
    pub performance: Option<AssetPerformance>,
}

/// Partial update for [`Asset`]; `None` fields are left as they are.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetPatch {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<AssetKind>,
    pub value: Option<f64>,
    pub currency: Option<String>,
    pub last_updated: Option<DateTime<Utc>>,
    pub performance: Option<AssetPerformance>,
}
