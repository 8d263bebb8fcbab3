use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A savings or debt target the user works toward.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub description: String,
    pub target_amount: f64,
    pub current_amount: f64,
    pub target_date: NaiveDate,
    pub category: GoalKind,
    pub priority: Priority,
}

impl Goal {
    /// Materializes a draft into a goal with a fresh id and zero progress.
    pub fn from_draft(draft: GoalDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id: draft.user_id,
            title: draft.title,
            description: draft.description,
            target_amount: draft.target_amount,
            current_amount: 0.0,
            target_date: draft.target_date,
            category: draft.category,
            priority: draft.priority,
        }
    }

    /// Merges the patch into this goal, leaving unset fields untouched.
    pub fn apply(&mut self, patch: GoalPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(target_amount) = patch.target_amount {
            self.target_amount = target_amount;
        }
        if let Some(current_amount) = patch.current_amount {
            self.current_amount = current_amount;
        }
        if let Some(target_date) = patch.target_date {
            self.target_date = target_date;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(priority) = patch.priority {
            self.priority = priority;
        }
    }

    /// Progress toward the target, clamped to [0, 1] for display.
    pub fn progress(&self) -> f64 {
        if self.target_amount > 0.0 {
            (self.current_amount / self.target_amount).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum GoalKind {
    Savings,
    Debt,
    Investment,
    Purchase,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

/// A goal as submitted by a form; id and current amount are assigned on add.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalDraft {
    pub user_id: Uuid,
    pub title: String,
    pub description: String,
    pub target_amount: f64,
    pub target_date: NaiveDate,
    pub category: GoalKind,
    pub priority: Priority,
}

/// Partial update for [`Goal`]; `None` fields are left as they are.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub target_amount: Option<f64>,
    pub current_amount: Option<f64>,
    pub target_date: Option<NaiveDate>,
    pub category: Option<GoalKind>,
    pub priority: Option<Priority>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> GoalDraft {
        GoalDraft {
            user_id: Uuid::new_v4(),
            title: "Emergency Fund".into(),
            description: "Six months of expenses".into(),
            target_amount: 15000.0,
            target_date: NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
            category: GoalKind::Savings,
            priority: Priority::High,
        }
    }

    #[test]
    fn progress_clamps_overshoot() {
        let mut goal = Goal::from_draft(draft());
        assert_eq!(goal.progress(), 0.0);
        goal.current_amount = 20000.0;
        assert_eq!(goal.progress(), 1.0);
    }

    #[test]
    fn progress_guards_zero_target() {
        let mut goal = Goal::from_draft(draft());
        goal.target_amount = 0.0;
        goal.current_amount = 500.0;
        assert_eq!(goal.progress(), 0.0);
    }
}
