use recordkeep_core::{FinanceError, FinanceService, RepoError, TransactionKind};

fn bank() -> FinanceService {
    let mut service = FinanceService::new();
    service.open_account("ACC-100", "Dana Lee").unwrap();
    service.open_account("ACC-200", "Sam Ortiz").unwrap();
    service.deposit("ACC-100", 50_00).unwrap();
    service
}

#[test]
fn duplicate_account_is_rejected() {
    let mut service = bank();
    let err = service.open_account("ACC-100", "Other").unwrap_err();
    assert_eq!(
        err,
        FinanceError::Repo(RepoError::DuplicateKey("ACC-100".to_string()))
    );
    assert_eq!(service.account("ACC-100").unwrap().owner, "Dana Lee");
}

#[test]
fn deposit_and_withdraw_adjust_balance() {
    let mut service = bank();
    service.withdraw("ACC-100", 20_00).unwrap();
    assert_eq!(service.account("ACC-100").unwrap().balance_cents, 30_00);
}

#[test]
fn non_positive_amounts_are_invalid() {
    let mut service = bank();
    for amount in [0, -5] {
        let err = service.deposit("ACC-100", amount).unwrap_err();
        assert!(matches!(
            err,
            FinanceError::Repo(RepoError::InvalidValue { .. })
        ));
    }
    assert_eq!(service.account("ACC-100").unwrap().balance_cents, 50_00);
}

#[test]
fn overdraft_is_rejected_without_mutation() {
    let mut service = bank();
    let err = service.withdraw("ACC-100", 80_00).unwrap_err();
    assert_eq!(
        err,
        FinanceError::InsufficientFunds {
            account: "ACC-100".to_string(),
            balance_cents: 50_00,
            requested_cents: 80_00,
        }
    );
    assert_eq!(service.account("ACC-100").unwrap().balance_cents, 50_00);
    assert_eq!(service.history("ACC-100").unwrap().len(), 1);
}

#[test]
fn unknown_account_is_not_found() {
    let mut service = bank();
    assert!(matches!(
        service.deposit("ACC-999", 1).unwrap_err(),
        FinanceError::Repo(RepoError::NotFound(_))
    ));
    assert!(matches!(
        service.history("ACC-999").unwrap_err(),
        FinanceError::Repo(RepoError::NotFound(_))
    ));
}

#[test]
fn transfer_moves_funds_and_records_both_sides() {
    let mut service = bank();
    let (out, incoming) = service.transfer("ACC-100", "ACC-200", 15_00).unwrap();

    assert_eq!(out.kind, TransactionKind::Withdrawal);
    assert_eq!(incoming.kind, TransactionKind::Deposit);
    assert_eq!(service.account("ACC-100").unwrap().balance_cents, 35_00);
    assert_eq!(service.account("ACC-200").unwrap().balance_cents, 15_00);
    assert_eq!(service.total_balance_cents(), 50_00);
}

#[test]
fn transfer_to_missing_account_changes_nothing() {
    let mut service = bank();
    let err = service.transfer("ACC-100", "ACC-404", 10_00).unwrap_err();
    assert!(matches!(err, FinanceError::Repo(RepoError::NotFound(_))));
    assert_eq!(service.account("ACC-100").unwrap().balance_cents, 50_00);
    assert_eq!(service.history("ACC-100").unwrap().len(), 1);
}

#[test]
fn transfer_to_same_account_is_rejected() {
    let mut service = bank();
    assert_eq!(
        service.transfer("ACC-100", "ACC-100", 1_00).unwrap_err(),
        FinanceError::SameAccount("ACC-100".to_string())
    );
}

#[test]
fn history_keeps_recording_order_and_empty_for_idle_accounts() {
    let mut service = bank();
    service.deposit("ACC-100", 5_00).unwrap();
    service.withdraw("ACC-100", 1_00).unwrap();

    let kinds: Vec<TransactionKind> = service
        .history("ACC-100")
        .unwrap()
        .into_iter()
        .map(|t| t.kind)
        .collect();
    assert_eq!(
        kinds,
        vec![
            TransactionKind::Deposit,
            TransactionKind::Deposit,
            TransactionKind::Withdrawal,
        ]
    );
    assert!(service.history("ACC-200").unwrap().is_empty());
}

#[test]
fn deposit_past_max_balance_is_rejected_and_not_recorded() {
    let mut service = FinanceService::new();
    service.open_account("ACC-300", "Ari Moss").unwrap();
    service.deposit("ACC-300", i64::MAX).unwrap();

    let err = service.deposit("ACC-300", 100).unwrap_err();
    assert!(matches!(
        err,
        FinanceError::Repo(RepoError::InvalidValue {
            field: "amount_cents",
            value: 100,
            ..
        })
    ));
    assert_eq!(service.account("ACC-300").unwrap().balance_cents, i64::MAX);
    assert_eq!(service.history("ACC-300").unwrap().len(), 1);
}

#[test]
fn transfer_that_would_overflow_destination_changes_nothing() {
    let mut service = bank();
    service.deposit("ACC-200", i64::MAX).unwrap();

    let err = service.transfer("ACC-100", "ACC-200", 1_00).unwrap_err();
    assert!(matches!(
        err,
        FinanceError::Repo(RepoError::InvalidValue { .. })
    ));
    assert_eq!(service.account("ACC-100").unwrap().balance_cents, 50_00);
    assert_eq!(service.account("ACC-200").unwrap().balance_cents, i64::MAX);
    assert_eq!(service.history("ACC-100").unwrap().len(), 1);
    assert_eq!(service.history("ACC-200").unwrap().len(), 1);
}

#[test]
fn total_balance_does_not_wrap() {
    let mut service = bank();
    service.deposit("ACC-200", i64::MAX).unwrap();
    assert_eq!(
        service.total_balance_cents(),
        i128::from(i64::MAX) + 50_00
    );
}
