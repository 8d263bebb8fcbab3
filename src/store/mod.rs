pub mod api;
pub mod finance;
pub mod session;

pub use api::{DemoApi, FinanceApi};
pub use finance::FinanceStore;
pub use session::SessionStore;
