//! Account creation request
//!
//! The intent handed to [`crate::core::AccountService::create_account`]. Structural
//! checks (the client id is a number, the balance parses as a decimal) happen where
//! the request is built; business rules are applied by the account validator.

use super::account::{AccountType, ClientId};
use rust_decimal::Decimal;
use serde::Deserialize;

/// Request to open a new account for a client
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAccountRequest {
    /// Owning client
    pub client_id: ClientId,

    /// Requested account type; `None` when the caller left it out
    #[serde(rename = "type", default)]
    pub account_type: Option<AccountType>,

    /// Opening balance
    pub initial_balance: Decimal,
}

impl CreateAccountRequest {
    pub fn new(client_id: ClientId, account_type: AccountType, initial_balance: Decimal) -> Self {
        CreateAccountRequest {
            client_id,
            account_type: Some(account_type),
            initial_balance,
        }
    }
}
