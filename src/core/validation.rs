//! Business-rule validation for account creation requests
//!
//! The validator holds an ordered list of independent rules. Rules are pure: they
//! look at the request and either pass or fail with a reason. The first failing
//! rule wins. New rules are appended without touching existing ones.

use crate::types::{AccountError, CreateAccountRequest};
use rust_decimal::Decimal;

/// A single business rule over a creation request
pub trait ValidationRule: Send + Sync {
    fn validate(&self, request: &CreateAccountRequest) -> Result<(), AccountError>;
}

/// The account type must be given
#[derive(Debug, Clone, Copy, Default)]
pub struct AccountTypeRule;

impl ValidationRule for AccountTypeRule {
    fn validate(&self, request: &CreateAccountRequest) -> Result<(), AccountError> {
        if request.account_type.is_none() {
            return Err(AccountError::validation("account type is required"));
        }
        Ok(())
    }
}

/// The opening balance must be greater than zero
#[derive(Debug, Clone, Copy, Default)]
pub struct InitialBalanceRule;

impl ValidationRule for InitialBalanceRule {
    fn validate(&self, request: &CreateAccountRequest) -> Result<(), AccountError> {
        if request.initial_balance <= Decimal::ZERO {
            return Err(AccountError::validation("initial balance must be greater than 0"));
        }
        Ok(())
    }
}

/// Runs every rule in order
pub struct AccountValidator {
    rules: Vec<Box<dyn ValidationRule>>,
}

impl AccountValidator {
    /// Create a validator with no rules
    pub fn empty() -> Self {
        AccountValidator { rules: Vec::new() }
    }

    /// Append a rule; it runs after every rule added before it
    pub fn with_rule(mut self, rule: impl ValidationRule + 'static) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Validate a request against every rule
    ///
    /// # Errors
    ///
    /// Returns the `Validation` error of the first rule that fails.
    pub fn validate(&self, request: &CreateAccountRequest) -> Result<(), AccountError> {
        self.rules.iter().try_for_each(|rule| rule.validate(request))
    }
}

impl Default for AccountValidator {
    fn default() -> Self {
        AccountValidator::empty()
            .with_rule(AccountTypeRule)
            .with_rule(InitialBalanceRule)
    }
}
