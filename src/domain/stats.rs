use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::domain::transaction::{Transaction, TransactionKind};

/// Derived dashboard aggregates, always recomputed from the full transaction
/// collection and published as a single assignment. Never mutated directly.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_income: f64,
    pub total_expenses: f64,
    pub net_worth: f64,
    pub savings_rate: f64,
    pub monthly_change: f64,
}

impl DashboardStats {
    /// Computes the monthly totals for the calendar month containing
    /// `reference`. A full scan of the collection; no incremental state.
    pub fn compute(transactions: &[Transaction], reference: NaiveDate) -> Self {
        let monthly = transactions
            .iter()
            .filter(|txn| {
                txn.date.month() == reference.month() && txn.date.year() == reference.year()
            })
            .collect::<Vec<_>>();

        let total_income: f64 = monthly
            .iter()
            .filter(|txn| txn.kind == TransactionKind::Income)
            .map(|txn| txn.amount)
            .sum();

        let total_expenses: f64 = monthly
            .iter()
            .filter(|txn| txn.kind == TransactionKind::Expense)
            .map(|txn| txn.amount)
            .sum();

        let net_worth = total_income - total_expenses;
        let savings_rate = if total_income > 0.0 {
            (total_income - total_expenses) / total_income * 100.0
        } else {
            0.0
        };

        Self {
            total_income,
            total_expenses,
            net_worth,
            savings_rate,
            // Previous-period comparison is not implemented; stays at zero.
            monthly_change: 0.0,
        }
    }
}
