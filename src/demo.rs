//! Fixed demo identity and seed collections served by the mock API.

use chrono::{NaiveDate, Utc};
use once_cell::sync::Lazy;
use uuid::Uuid;

use crate::domain::{
    Budget, BudgetPeriod, Goal, GoalKind, Priority, RecurringPeriod, Theme, Transaction,
    TransactionKind, User, UserSettings,
};

/// The only credential pair the mock login accepts.
pub const DEMO_EMAIL: &str = "demo@example.com";
pub const DEMO_PASSWORD: &str = "password";

pub const DEMO_AVATAR_URL: &str =
    "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=150";

/// Stable id shared by the demo user and every seed record.
pub const DEMO_USER_ID: Uuid = Uuid::from_u128(1);

/// Builds the fixed demo user installed on successful login.
pub fn demo_user() -> User {
    User {
        id: DEMO_USER_ID,
        email: DEMO_EMAIL.into(),
        name: "Demo User".into(),
        avatar: Some(DEMO_AVATAR_URL.into()),
        created_at: Utc::now(),
        settings: UserSettings {
            currency: "USD".into(),
            theme: Theme::Light,
            notifications: true,
        },
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid seed date")
}

pub static SEED_TRANSACTIONS: Lazy<Vec<Transaction>> = Lazy::new(|| {
    vec![
        Transaction {
            id: Uuid::new_v4(),
            user_id: DEMO_USER_ID,
            amount: 5000.0,
            kind: TransactionKind::Income,
            category: "Salary".into(),
            subcategory: None,
            description: "Monthly salary".into(),
            date: date(2024, 1, 15),
            account: "Checking".into(),
            tags: vec!["work".into(), "regular".into()],
            recurring: true,
            recurring_period: Some(RecurringPeriod::Monthly),
        },
        Transaction {
            id: Uuid::new_v4(),
            user_id: DEMO_USER_ID,
            amount: 1200.0,
            kind: TransactionKind::Expense,
            category: "Housing".into(),
            subcategory: Some("Rent".into()),
            description: "Monthly rent payment".into(),
            date: date(2024, 1, 1),
            account: "Checking".into(),
            tags: vec!["housing".into(), "regular".into()],
            recurring: true,
            recurring_period: Some(RecurringPeriod::Monthly),
        },
        Transaction {
            id: Uuid::new_v4(),
            user_id: DEMO_USER_ID,
            amount: 450.0,
            kind: TransactionKind::Expense,
            category: "Food".into(),
            subcategory: Some("Groceries".into()),
            description: "Weekly groceries".into(),
            date: date(2024, 1, 10),
            account: "Checking".into(),
            tags: vec!["food".into(), "essential".into()],
            recurring: false,
            recurring_period: None,
        },
    ]
});

pub static SEED_BUDGETS: Lazy<Vec<Budget>> = Lazy::new(|| {
    vec![
        Budget {
            id: Uuid::new_v4(),
            user_id: DEMO_USER_ID,
            category: "Food".into(),
            amount: 800.0,
            spent: 450.0,
            period: BudgetPeriod::Monthly,
            start_date: date(2024, 1, 1),
            end_date: date(2024, 1, 31),
        },
        Budget {
            id: Uuid::new_v4(),
            user_id: DEMO_USER_ID,
            category: "Entertainment".into(),
            amount: 300.0,
            spent: 120.0,
            period: BudgetPeriod::Monthly,
            start_date: date(2024, 1, 1),
            end_date: date(2024, 1, 31),
        },
    ]
});

pub static SEED_GOALS: Lazy<Vec<Goal>> = Lazy::new(|| {
    vec![
        Goal {
            id: Uuid::new_v4(),
            user_id: DEMO_USER_ID,
            title: "Emergency Fund".into(),
            description: "Build emergency fund for 6 months expenses".into(),
            target_amount: 15000.0,
            current_amount: 8500.0,
            target_date: date(2024, 12, 31),
            category: GoalKind::Savings,
            priority: Priority::High,
        },
        Goal {
            id: Uuid::new_v4(),
            user_id: DEMO_USER_ID,
            title: "Vacation Fund".into(),
            description: "Save for summer vacation".into(),
            target_amount: 3000.0,
            current_amount: 1200.0,
            target_date: date(2024, 6, 30),
            category: GoalKind::Savings,
            priority: Priority::Medium,
        },
    ]
});
