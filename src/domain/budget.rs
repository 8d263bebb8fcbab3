use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A spending cap for a category over a period. `spent` is tracked
/// independently; it is never derived from the transaction collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    pub id: Uuid,
    pub user_id: Uuid,
    pub category: String,
    pub amount: f64,
    pub spent: f64,
    pub period: BudgetPeriod,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl Budget {
    /// Materializes a draft into a budget with a fresh id and zero spent.
    pub fn from_draft(draft: BudgetDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id: draft.user_id,
            category: draft.category,
            amount: draft.amount,
            spent: 0.0,
            period: draft.period,
            start_date: draft.start_date,
            end_date: draft.end_date,
        }
    }

    /// Merges the patch into this budget, leaving unset fields untouched.
    pub fn apply(&mut self, patch: BudgetPatch) {
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(amount) = patch.amount {
            self.amount = amount;
        }
        if let Some(spent) = patch.spent {
            self.spent = spent;
        }
        if let Some(period) = patch.period {
            self.period = period;
        }
        if let Some(start_date) = patch.start_date {
            self.start_date = start_date;
        }
        if let Some(end_date) = patch.end_date {
            self.end_date = end_date;
        }
    }

    pub fn remaining(&self) -> f64 {
        self.amount - self.spent
    }

    /// Fraction of the cap already spent; 0 when the cap itself is 0.
    pub fn utilization(&self) -> f64 {
        if self.amount > 0.0 {
            self.spent / self.amount
        } else {
            0.0
        }
    }
}

/// Enumeration of budgeting periods.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BudgetPeriod {
    Monthly,
    Yearly,
}

/// A budget as submitted by a form; id and spent are assigned on add.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetDraft {
    pub user_id: Uuid,
    pub category: String,
    pub amount: f64,
    pub period: BudgetPeriod,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Partial update for [`Budget`]; `None` fields are left as they are.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetPatch {
    pub category: Option<String>,
    pub amount: Option<f64>,
    pub spent: Option<f64>,
    pub period: Option<BudgetPeriod>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> BudgetDraft {
        BudgetDraft {
            user_id: Uuid::new_v4(),
            category: "Food".into(),
            amount: 800.0,
            period: BudgetPeriod::Monthly,
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
        }
    }

    #[test]
    fn from_draft_starts_with_zero_spent() {
        let budget = Budget::from_draft(draft());
        assert_eq!(budget.spent, 0.0);
        assert_eq!(budget.remaining(), 800.0);
    }

    #[test]
    fn utilization_guards_zero_cap() {
        let mut budget = Budget::from_draft(draft());
        budget.amount = 0.0;
        budget.spent = 100.0;
        assert_eq!(budget.utilization(), 0.0);
    }
}
