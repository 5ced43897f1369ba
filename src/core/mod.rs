//! Core business logic module
//!
//! This module contains the account domain components:
//! - `traits` - Collaborator traits (storage, client directory, number generator)
//! - `factory` - Per-type account construction and the registry that selects it
//! - `validation` - Ordered business rules for creation requests
//! - `service` - Account operation orchestration
//! - `repository`, `client_directory`, `number_generator` - In-memory collaborators
//! - `engine` - Command replay over the in-memory service

pub mod client_directory;
pub mod engine;
pub mod factory;
pub mod number_generator;
pub mod repository;
pub mod service;
pub mod traits;
pub mod validation;

pub use client_directory::InMemoryClientDirectory;
pub use engine::{CommandEngine, InMemoryAccountService};
pub use factory::{AccountFactory, CheckingAccountFactory, FactoryRegistry, SavingsAccountFactory};
pub use number_generator::SequentialAccountNumberGenerator;
pub use repository::InMemoryAccountRepository;
pub use service::AccountService;
pub use traits::{AccountNumberGenerator, AccountRepository, ClientDirectory};
pub use validation::{AccountTypeRule, AccountValidator, InitialBalanceRule, ValidationRule};
