//! CSV format handling for command records and account output
//!
//! This module centralizes all CSV format concerns, providing:
//! - CsvRecord structure for deserialization
//! - Conversion from CSV records to domain types
//! - Account view output serialization
//!
//! All functions are pure (no I/O) for easy testing.

use crate::types::{AccountId, AccountType, AccountView, ClientId, CommandRecord, CommandType};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Write;
use std::str::FromStr;

/// CSV record structure for deserialization
///
/// Matches the input CSV format with columns: command, account, client, type, amount.
/// Every column but `command` is optional; which ones a row needs depends on the command.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CsvRecord {
    pub command: String,
    pub account: Option<AccountId>,
    pub client: Option<ClientId>,
    #[serde(rename = "type")]
    pub account_type: Option<String>,
    pub amount: Option<String>,
}

/// Convert a CsvRecord to a CommandRecord
///
/// This function:
/// - Parses the command string into a CommandType enum
/// - Parses the account type (if present) into an AccountType
/// - Parses the amount string into a Decimal (if present)
///
/// Empty columns become `None`. Whether a command has the arguments it needs is
/// decided by `CommandEngine::process`, not here.
pub fn convert_csv_record(csv_record: CsvRecord) -> Result<CommandRecord, String> {
    let command = match csv_record.command.to_lowercase().as_str() {
        "register" => CommandType::Register,
        "create" => CommandType::Create,
        "deposit" => CommandType::Deposit,
        "withdraw" | "withdrawal" => CommandType::Withdraw,
        "activate" => CommandType::Activate,
        "deactivate" => CommandType::Deactivate,
        "delete" => CommandType::Delete,
        _ => return Err(format!("Invalid command: '{}'", csv_record.command)),
    };

    let account_type = match non_empty(csv_record.account_type.as_deref()) {
        Some(text) => Some(
            AccountType::from_str(text).map_err(|_| format!("Invalid account type '{}'", text))?,
        ),
        None => None,
    };

    let amount = match non_empty(csv_record.amount.as_deref()) {
        Some(text) => Some(
            Decimal::from_str(text).map_err(|_| format!("Invalid amount '{}'", text))?,
        ),
        None => None,
    };

    Ok(CommandRecord {
        command,
        account: csv_record.account,
        client: csv_record.client,
        account_type,
        amount,
    })
}

fn non_empty(field: Option<&str>) -> Option<&str> {
    field.map(str::trim).filter(|text| !text.is_empty())
}

/// Write account views to CSV format
///
/// Writes views with columns: id, account_number, client, type, balance, active.
/// Views are sorted by id for deterministic output; balances have two decimals.
pub fn write_accounts_csv(accounts: &[AccountView], output: &mut dyn Write) -> Result<(), String> {
    use csv::Writer;

    let mut writer = Writer::from_writer(output);

    writer
        .write_record(["id", "account_number", "client", "type", "balance", "active"])
        .map_err(|e| format!("Failed to write CSV header: {}", e))?;

    let mut sorted_accounts = accounts.to_vec();
    sorted_accounts.sort_by_key(|account| account.id);

    for account in sorted_accounts {
        writer
            .write_record(&[
                account.id.map(|id| id.to_string()).unwrap_or_default(),
                account.account_number,
                account.client_id.to_string(),
                account.account_type.to_string(),
                format!("{:.2}", account.balance),
                account.active.to_string(),
            ])
            .map_err(|e| format!("Failed to write account record: {}", e))?;
    }

    writer
        .flush()
        .map_err(|e| format!("Failed to flush output: {}", e))?;

    Ok(())
}
