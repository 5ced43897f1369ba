//! Account service scenarios against fake collaborators
//!
//! The fakes record how they were called so each test can check the service's
//! interaction with storage, the client directory and the number generator, not
//! just its return value.

use account_ledger::core::{
    AccountNumberGenerator, AccountRepository, AccountService, ClientDirectory,
    InMemoryAccountRepository, InMemoryClientDirectory, SequentialAccountNumberGenerator,
};
use account_ledger::{
    Account, AccountError, AccountId, AccountType, ClientId, CreateAccountRequest,
};
use proptest::prelude::*;
use rstest::{fixture, rstest};
use rust_decimal::Decimal;
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Client directory with a fixed set of known ids
struct KnownClients(HashSet<ClientId>);

impl ClientDirectory for KnownClients {
    fn exists(&self, client_id: ClientId) -> bool {
        self.0.contains(&client_id)
    }
}

/// Generator that always returns the same number and counts calls
#[derive(Default)]
struct FixedNumber {
    number: String,
    calls: AtomicUsize,
    requested: Mutex<Vec<AccountType>>,
}

impl FixedNumber {
    fn new(number: &str) -> Self {
        FixedNumber {
            number: number.to_string(),
            ..Default::default()
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl AccountNumberGenerator for FixedNumber {
    fn generate(&self, account_type: AccountType) -> String {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requested.lock().unwrap().push(account_type);
        self.number.clone()
    }
}

/// Repository wrapper that records saves and deletes
#[derive(Default)]
struct RecordingRepository {
    inner: InMemoryAccountRepository,
    saves: AtomicUsize,
    deleted: Mutex<Vec<Option<AccountId>>>,
}

impl RecordingRepository {
    fn saves(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

impl AccountRepository for RecordingRepository {
    fn save(&self, account: Account) -> Account {
        self.saves.fetch_add(1, Ordering::SeqCst);
        self.inner.save(account)
    }

    fn find_by_id(&self, id: AccountId) -> Option<Account> {
        self.inner.find_by_id(id)
    }

    fn find_all(&self) -> Vec<Account> {
        self.inner.find_all()
    }

    fn find_by_client_id(&self, client_id: ClientId) -> Vec<Account> {
        self.inner.find_by_client_id(client_id)
    }

    fn delete(&self, account: &Account) {
        self.deleted.lock().unwrap().push(account.id());
        self.inner.delete(account)
    }
}

type Service = AccountService<Arc<RecordingRepository>, KnownClients, Arc<FixedNumber>>;

struct Harness {
    service: Service,
    repository: Arc<RecordingRepository>,
    numbers: Arc<FixedNumber>,
}

impl Harness {
    /// Store an account directly, bypassing the service
    fn seed(&self, account: Account) {
        self.repository.inner.save(account);
    }
}

#[fixture]
fn harness() -> Harness {
    let repository = Arc::new(RecordingRepository::default());
    let numbers = Arc::new(FixedNumber::new("SVG-123456"));
    let service = AccountService::new(
        Arc::clone(&repository),
        KnownClients([1].into_iter().collect()),
        Arc::clone(&numbers),
    );

    Harness {
        service,
        repository,
        numbers,
    }
}

#[rstest]
fn create_account_returns_generated_number(harness: Harness) {
    let view = harness
        .service
        .create_account(CreateAccountRequest::new(1, AccountType::Savings, Decimal::TEN))
        .unwrap();

    assert_eq!(view.account_number, "SVG-123456");
    assert_eq!(view.balance, Decimal::TEN);
    assert!(view.active);
    assert_eq!(view.client_id, 1);
    assert!(view.id.is_some());

    assert_eq!(harness.numbers.calls(), 1);
    assert_eq!(
        *harness.numbers.requested.lock().unwrap(),
        vec![AccountType::Savings]
    );
    assert_eq!(harness.repository.saves(), 1);
}

#[rstest]
fn create_account_for_unknown_client(harness: Harness) {
    let result = harness.service.create_account(CreateAccountRequest::new(
        99,
        AccountType::Savings,
        Decimal::new(50, 0),
    ));

    assert_eq!(result, Err(AccountError::client_not_found(99)));
    assert_eq!(harness.numbers.calls(), 0);
    assert_eq!(harness.repository.saves(), 0);
}

#[rstest]
fn create_account_rejected_by_validator(harness: Harness) {
    let request = CreateAccountRequest {
        client_id: 1,
        account_type: None,
        initial_balance: Decimal::TEN,
    };

    let result = harness.service.create_account(request);

    assert!(matches!(result, Err(AccountError::Validation { .. })));
    assert_eq!(harness.numbers.calls(), 0);
    assert_eq!(harness.repository.saves(), 0);
}

#[rstest]
fn savings_withdrawal_beyond_balance(harness: Harness) {
    harness.seed(Account::restore(
        1,
        "SVG-000001",
        Decimal::TEN,
        AccountType::Savings,
        1,
        true,
    ));

    let result = harness.service.withdraw(1, Decimal::new(20, 0));

    assert!(matches!(result, Err(AccountError::InvalidOperation { .. })));
    assert_eq!(harness.service.get(1).unwrap().balance, Decimal::TEN);
    assert_eq!(harness.repository.saves(), 0);
}

#[rstest]
fn delete_with_balance_keeps_account(harness: Harness) {
    harness.seed(Account::restore(
        1,
        "CH-111111",
        Decimal::new(50, 0),
        AccountType::Checking,
        1,
        true,
    ));

    let err = harness.service.delete(1).unwrap_err();

    assert_eq!(
        err,
        AccountError::invalid_operation("account balance must be zero")
    );
    assert!(harness.repository.deleted.lock().unwrap().is_empty());
    assert_eq!(harness.service.get(1).unwrap().account_number, "CH-111111");
}

#[rstest]
fn delete_with_zero_balance(harness: Harness) {
    harness.seed(Account::restore(
        1,
        "SVG-000001",
        Decimal::ZERO,
        AccountType::Savings,
        1,
        true,
    ));

    harness.service.delete(1).unwrap();

    assert_eq!(*harness.repository.deleted.lock().unwrap(), vec![Some(1)]);
    assert!(harness.service.get(1).unwrap_err().is_not_found());
}

#[rstest]
fn activate_inactive_account_then_again(harness: Harness) {
    harness.seed(Account::restore(
        1,
        "CH-222222",
        Decimal::ZERO,
        AccountType::Checking,
        1,
        false,
    ));

    let view = harness.service.activate(1).unwrap();
    assert!(view.active);

    let second = harness.service.activate(1);
    assert!(matches!(second, Err(AccountError::InvalidOperation { .. })));
    assert_eq!(harness.repository.saves(), 1);
}

#[rstest]
fn deactivate_active_account_then_again(harness: Harness) {
    harness.seed(Account::restore(
        1,
        "SVG-333333",
        Decimal::ZERO,
        AccountType::Savings,
        1,
        true,
    ));

    assert!(!harness.service.deactivate(1).unwrap().active);
    assert!(matches!(
        harness.service.deactivate(1),
        Err(AccountError::InvalidOperation { .. })
    ));
}

#[rstest]
fn get_unknown_account(harness: Harness) {
    let err = harness.service.get(1).unwrap_err();

    assert!(err.is_not_found());
    assert!(err.to_string().contains("account not found"));
}

#[rstest]
fn list_by_client_returns_exactly_their_accounts(harness: Harness) {
    harness.seed(Account::restore(1, "SVG-1", Decimal::TEN, AccountType::Savings, 1, true));
    harness.seed(Account::restore(2, "CH-2", Decimal::TEN, AccountType::Checking, 2, true));
    harness.seed(Account::restore(3, "CH-3", Decimal::TEN, AccountType::Checking, 1, false));

    let numbers: Vec<_> = harness
        .service
        .list_by_client(1)
        .unwrap()
        .into_iter()
        .map(|view| view.account_number)
        .collect();
    assert_eq!(numbers, vec!["SVG-1", "CH-3"]);

    assert_eq!(harness.service.list_all().len(), 3);

    let err = harness.service.list_by_client(5).unwrap_err();
    assert!(err.to_string().contains("client has no accounts"));
}

#[rstest]
fn create_after_seeded_account_keeps_both(harness: Harness) {
    harness.seed(Account::restore(
        1,
        "SVG-900000",
        Decimal::new(50, 0),
        AccountType::Savings,
        1,
        true,
    ));

    let view = harness
        .service
        .create_account(CreateAccountRequest::new(1, AccountType::Checking, Decimal::TEN))
        .unwrap();

    assert_eq!(view.id, Some(2));
    assert_eq!(harness.repository.inner.len(), 2);
    assert_eq!(harness.service.get(1).unwrap().account_number, "SVG-900000");
}

#[derive(Debug, Clone)]
enum Operation {
    Deposit(AccountId, Decimal),
    Withdraw(AccountId, Decimal),
    Activate(AccountId),
    Deactivate(AccountId),
    Delete(AccountId),
}

fn operation() -> impl Strategy<Value = Operation> {
    // Ids 1 and 2 exist, 3 never does
    let id = 1u64..=3;
    let amount = (-2_000i64..=20_000).prop_map(|cents| Decimal::new(cents, 2));
    prop_oneof![
        (id.clone(), amount.clone()).prop_map(|(id, amount)| Operation::Deposit(id, amount)),
        (id.clone(), amount).prop_map(|(id, amount)| Operation::Withdraw(id, amount)),
        id.clone().prop_map(Operation::Activate),
        id.clone().prop_map(Operation::Deactivate),
        id.prop_map(Operation::Delete),
    ]
}

proptest! {
    #[test]
    fn failed_operations_leave_stored_accounts_unchanged(
        operations in prop::collection::vec(operation(), 0..48),
    ) {
        let service = AccountService::new(
            InMemoryAccountRepository::new(),
            [1].into_iter().collect::<InMemoryClientDirectory>(),
            SequentialAccountNumberGenerator::new(),
        );
        service
            .create_account(CreateAccountRequest::new(1, AccountType::Savings, Decimal::TEN))
            .unwrap();
        service
            .create_account(CreateAccountRequest::new(1, AccountType::Checking, Decimal::ONE))
            .unwrap();

        for operation in operations {
            let before = service.list_all();
            let result = match operation.clone() {
                Operation::Deposit(id, amount) => service.deposit(id, amount).map(drop),
                Operation::Withdraw(id, amount) => service.withdraw(id, amount).map(drop),
                Operation::Activate(id) => service.activate(id).map(drop),
                Operation::Deactivate(id) => service.deactivate(id).map(drop),
                Operation::Delete(id) => service.delete(id),
            };

            if result.is_err() {
                prop_assert_eq!(&service.list_all(), &before, "{:?} changed state", operation);
            }
            for view in service.list_all() {
                if view.account_type == AccountType::Savings {
                    prop_assert!(view.balance >= Decimal::ZERO);
                }
            }
        }
    }
}
