//! Account entity and read view
//!
//! This module defines the `Account` entity, the closed set of account types,
//! and the `AccountView` projection handed to output layers.
//!
//! The entity owns its invariants: every balance or lifecycle change goes through
//! a method that checks its precondition first and only mutates on success, so a
//! failed operation never leaves a half-applied change behind.

use super::error::AccountError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Account identifier, assigned by the repository on first save
pub type AccountId = u64;

/// Identifier of the owning client (the client entity itself lives elsewhere)
pub type ClientId = u64;

/// Account types supported by the ledger
///
/// Each variant has its own construction policy in the factory registry and
/// may carry its own balance rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AccountType {
    /// Savings account, the balance can never go below zero
    Savings,

    /// Checking account, overdrafts are allowed
    Checking,
}

impl AccountType {
    /// Prefix used when generating account numbers for this type
    pub fn number_prefix(self) -> &'static str {
        match self {
            AccountType::Savings => "SVG",
            AccountType::Checking => "CH",
        }
    }

    /// Whether the balance of this account type may go below zero
    pub fn allows_negative_balance(self) -> bool {
        !matches!(self, AccountType::Savings)
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccountType::Savings => f.write_str("SAVINGS"),
            AccountType::Checking => f.write_str("CHECKING"),
        }
    }
}

impl FromStr for AccountType {
    type Err = AccountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "savings" => Ok(AccountType::Savings),
            "checking" => Ok(AccountType::Checking),
            other => Err(AccountError::unsupported_type(other)),
        }
    }
}

/// A client's account
///
/// Fields are private; the balance only moves through [`Account::deposit`] and
/// [`Account::withdraw`], and the active flag only through [`Account::activate`]
/// and [`Account::deactivate`]. Only a repository inside this crate can give an
/// unsaved account its id:
///
/// ```compile_fail
/// use account_ledger::{Account, AccountType};
/// use rust_decimal::Decimal;
///
/// let mut account = Account::new(1, AccountType::Savings, Decimal::TEN);
/// account.set_id(7);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    id: Option<AccountId>,
    account_number: Option<String>,
    client_id: ClientId,
    account_type: AccountType,
    balance: Decimal,
    active: bool,
}

impl Account {
    /// Create a new, unsaved account
    ///
    /// The account starts active, without an id and without an account number.
    /// Only factories are expected to call this.
    pub fn new(client_id: ClientId, account_type: AccountType, balance: Decimal) -> Self {
        Account {
            id: None,
            account_number: None,
            client_id,
            account_type,
            balance,
            active: true,
        }
    }

    /// Rebuild a fully populated account, as loaded from storage
    pub fn restore(
        id: AccountId,
        account_number: impl Into<String>,
        balance: Decimal,
        account_type: AccountType,
        client_id: ClientId,
        active: bool,
    ) -> Self {
        Account {
            id: Some(id),
            account_number: Some(account_number.into()),
            client_id,
            account_type,
            balance,
            active,
        }
    }

    pub fn id(&self) -> Option<AccountId> {
        self.id
    }

    pub fn account_number(&self) -> Option<&str> {
        self.account_number.as_deref()
    }

    pub fn client_id(&self) -> ClientId {
        self.client_id
    }

    pub fn account_type(&self) -> AccountType {
        self.account_type
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Set the storage id. Called by repositories on first save.
    pub(crate) fn set_id(&mut self, id: AccountId) {
        self.id = Some(id);
    }

    /// Assign the account number
    ///
    /// # Errors
    ///
    /// Returns `InvalidOperation` if a number has already been assigned.
    pub fn assign_account_number(&mut self, number: impl Into<String>) -> Result<(), AccountError> {
        if self.account_number.is_some() {
            return Err(AccountError::invalid_operation("account number already assigned"));
        }
        self.account_number = Some(number.into());
        Ok(())
    }

    /// Credit `amount` to the account
    ///
    /// # Errors
    ///
    /// - `InvalidOperation` if `amount` is not strictly positive
    /// - `ArithmeticOverflow` if the new balance cannot be represented
    pub fn deposit(&mut self, amount: Decimal) -> Result<(), AccountError> {
        ensure_positive(amount)?;

        let new_balance = self
            .balance
            .checked_add(amount)
            .ok_or_else(|| AccountError::arithmetic_overflow("deposit", self.id))?;

        self.balance = new_balance;
        Ok(())
    }

    /// Debit `amount` from the account
    ///
    /// Savings accounts reject any withdrawal that would leave a negative balance.
    ///
    /// # Errors
    ///
    /// - `InvalidOperation` if `amount` is not strictly positive, or if a savings
    ///   account would go negative
    /// - `ArithmeticOverflow` if the new balance cannot be represented
    pub fn withdraw(&mut self, amount: Decimal) -> Result<(), AccountError> {
        ensure_positive(amount)?;

        let new_balance = self
            .balance
            .checked_sub(amount)
            .ok_or_else(|| AccountError::arithmetic_overflow("withdrawal", self.id))?;

        if new_balance < Decimal::ZERO && !self.account_type.allows_negative_balance() {
            return Err(AccountError::invalid_operation(
                "savings account cannot have a negative balance",
            ));
        }

        self.balance = new_balance;
        Ok(())
    }

    /// Mark the account active
    ///
    /// # Errors
    ///
    /// Returns `InvalidOperation` if the account is already active.
    pub fn activate(&mut self) -> Result<(), AccountError> {
        if self.active {
            return Err(AccountError::invalid_operation("account is already active"));
        }
        self.active = true;
        Ok(())
    }

    /// Mark the account inactive
    ///
    /// # Errors
    ///
    /// Returns `InvalidOperation` if the account is already inactive.
    pub fn deactivate(&mut self) -> Result<(), AccountError> {
        if !self.active {
            return Err(AccountError::invalid_operation("account is already inactive"));
        }
        self.active = false;
        Ok(())
    }

    /// Whether the balance is exactly zero (the only state that permits deletion)
    pub fn has_zero_balance(&self) -> bool {
        self.balance.is_zero()
    }
}

fn ensure_positive(amount: Decimal) -> Result<(), AccountError> {
    if amount <= Decimal::ZERO {
        return Err(AccountError::invalid_operation("amount must be positive"));
    }
    Ok(())
}

/// Read-only projection of an account for output
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountView {
    pub id: Option<AccountId>,
    pub account_number: String,
    pub balance: Decimal,
    #[serde(rename = "type")]
    pub account_type: AccountType,
    pub client_id: ClientId,
    pub active: bool,
}

impl From<&Account> for AccountView {
    fn from(account: &Account) -> Self {
        AccountView {
            id: account.id,
            account_number: account.account_number.clone().unwrap_or_default(),
            balance: account.balance,
            account_type: account.account_type,
            client_id: account.client_id,
            active: account.active,
        }
    }
}

impl From<Account> for AccountView {
    fn from(account: Account) -> Self {
        AccountView {
            id: account.id,
            account_number: account.account_number.unwrap_or_default(),
            balance: account.balance,
            account_type: account.account_type,
            client_id: account.client_id,
            active: account.active,
        }
    }
}
