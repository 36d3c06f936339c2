pub mod banking_service;

pub use banking_service::BankingService;
