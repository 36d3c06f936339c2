pub mod account;
pub mod common;
pub mod customer;
pub mod transaction;

pub use account::Account;
pub use common::{Displayable, NamedEntity};
pub use customer::{AccountCreated, Customer};
pub use transaction::{Transaction, TransactionKind};
