//! Seed-data source behind the finance store's fetch operations. There is no
//! real network layer; fetches are simulated-latency loads of fixed demo
//! collections.

use crate::demo;
use crate::domain::{Account, Asset, Budget, Goal, Transaction};
use crate::errors::StoreError;

/// Supplies the seed collections a fetch replaces its collection with.
/// Tests inject a failing implementation to exercise the error path.
pub trait FinanceApi: Send + Sync {
    fn transactions(&self) -> Result<Vec<Transaction>, StoreError>;
    fn budgets(&self) -> Result<Vec<Budget>, StoreError>;
    fn goals(&self) -> Result<Vec<Goal>, StoreError>;
    fn assets(&self) -> Result<Vec<Asset>, StoreError>;
    fn accounts(&self) -> Result<Vec<Account>, StoreError>;
}

/// Serves the fixed demo data; assets and accounts start empty.
#[derive(Debug, Default, Clone, Copy)]
pub struct DemoApi;

impl FinanceApi for DemoApi {
    fn transactions(&self) -> Result<Vec<Transaction>, StoreError> {
        Ok(demo::SEED_TRANSACTIONS.clone())
    }

    fn budgets(&self) -> Result<Vec<Budget>, StoreError> {
        Ok(demo::SEED_BUDGETS.clone())
    }

    fn goals(&self) -> Result<Vec<Goal>, StoreError> {
        Ok(demo::SEED_GOALS.clone())
    }

    fn assets(&self) -> Result<Vec<Asset>, StoreError> {
        Ok(Vec::new())
    }

    fn accounts(&self) -> Result<Vec<Account>, StoreError> {
        Ok(Vec::new())
    }
}
