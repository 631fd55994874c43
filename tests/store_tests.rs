// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use dtmoney::models::{
    BudgetPatch, CategoryPatch, Kind, NewBudget, NewCategory, NewTransaction, Period,
    TransactionPatch,
};
use dtmoney::query::TransactionFilter;
use dtmoney::{Error, Ledger};

fn setup() -> Ledger {
    Ledger::open_in_memory().unwrap()
}

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn salary() -> NewTransaction {
    NewTransaction {
        description: "Salário Mensal".into(),
        amount: Decimal::from(5000),
        category: "Salário".into(),
        date: date("2024-01-10"),
        kind: Kind::Income,
    }
}

fn rent() -> NewTransaction {
    NewTransaction {
        description: "Aluguel".into(),
        amount: Decimal::from(-1200),
        category: "Casa".into(),
        date: date("2024-01-12"),
        kind: Kind::Outcome,
    }
}

#[test]
fn add_then_list_yields_record_with_assigned_id() {
    let ledger = setup();
    let before = ledger.transactions(&TransactionFilter::default()).unwrap();
    assert!(before.is_empty());

    let id = ledger.add_transaction(salary()).unwrap();

    let after = ledger.transactions(&TransactionFilter::default()).unwrap();
    assert_eq!(after.len(), 1);
    let stored = &after[0];
    assert_eq!(stored.id, id);
    assert_eq!(stored.description, "Salário Mensal");
    assert_eq!(stored.amount, Decimal::from(5000));
    assert_eq!(stored.category, "Salário");
    assert_eq!(stored.date, date("2024-01-10"));
    assert_eq!(stored.kind, Kind::Income);
}

#[test]
fn delete_removes_record_and_is_idempotent() {
    let ledger = setup();
    let id = ledger.add_transaction(salary()).unwrap();
    ledger.add_transaction(rent()).unwrap();

    ledger.delete_transaction(id).unwrap();
    let remaining = ledger.transactions(&TransactionFilter::default()).unwrap();
    assert_eq!(remaining.len(), 1);
    assert!(remaining.iter().all(|t| t.id != id));

    // Second delete of the same id must not error.
    ledger.delete_transaction(id).unwrap();
    assert_eq!(
        ledger
            .transactions(&TransactionFilter::default())
            .unwrap()
            .len(),
        1
    );
}

#[test]
fn update_merges_partial_fields() {
    let ledger = setup();
    let id = ledger.add_transaction(rent()).unwrap();

    ledger
        .update_transaction(
            id,
            TransactionPatch {
                amount: Some(Decimal::from(-1350)),
                ..Default::default()
            },
        )
        .unwrap();

    let stored = ledger.transaction(id).unwrap();
    assert_eq!(stored.amount, Decimal::from(-1350));
    // Omitted fields keep their stored values.
    assert_eq!(stored.description, "Aluguel");
    assert_eq!(stored.category, "Casa");
    assert_eq!(stored.date, date("2024-01-12"));
    assert_eq!(stored.kind, Kind::Outcome);
}

#[test]
fn update_missing_id_rejects_and_leaves_collection_unchanged() {
    let ledger = setup();
    ledger.add_transaction(salary()).unwrap();
    let before = ledger.transactions(&TransactionFilter::default()).unwrap();

    let result = ledger.update_transaction(
        9999,
        TransactionPatch {
            description: Some("ghost".into()),
            ..Default::default()
        },
    );
    assert!(matches!(result, Err(Error::NotFound { id: 9999, .. })));

    let after = ledger.transactions(&TransactionFilter::default()).unwrap();
    assert_eq!(before, after);
}

#[test]
fn zero_amount_is_rejected() {
    let ledger = setup();
    let mut tx = salary();
    tx.amount = Decimal::ZERO;
    assert!(matches!(
        ledger.add_transaction(tx),
        Err(Error::ZeroAmount)
    ));
}

#[test]
fn sign_and_kind_must_agree() {
    let ledger = setup();
    let mut tx = salary();
    tx.amount = Decimal::from(-5000);
    assert!(matches!(
        ledger.add_transaction(tx),
        Err(Error::AmountKindMismatch { .. })
    ));

    // A merge that breaks the invariant is also rejected.
    let id = ledger.add_transaction(rent()).unwrap();
    let result = ledger.update_transaction(
        id,
        TransactionPatch {
            amount: Some(Decimal::from(100)),
            ..Default::default()
        },
    );
    assert!(matches!(result, Err(Error::AmountKindMismatch { .. })));
}

#[test]
fn category_crud_roundtrip() {
    let ledger = setup();
    let id = ledger
        .add_category(NewCategory {
            name: "Alimentação".into(),
            kind: Kind::Outcome,
            color: "#F75A68".into(),
        })
        .unwrap();

    let found = ledger.category_by_name("Alimentação").unwrap().unwrap();
    assert_eq!(found.id, id);
    assert_eq!(found.kind, Kind::Outcome);

    ledger
        .update_category(
            id,
            CategoryPatch {
                color: Some("#FF6B6B".into()),
                ..Default::default()
            },
        )
        .unwrap();
    let updated = ledger.category_by_name("Alimentação").unwrap().unwrap();
    assert_eq!(updated.color, "#FF6B6B");
    assert_eq!(updated.name, "Alimentação");

    ledger.delete_category(id).unwrap();
    assert!(ledger.category_by_name("Alimentação").unwrap().is_none());
    // Idempotent delete.
    ledger.delete_category(id).unwrap();
}

#[test]
fn deleting_category_leaves_referencing_transactions() {
    let ledger = setup();
    let cat_id = ledger
        .add_category(NewCategory {
            name: "Casa".into(),
            kind: Kind::Outcome,
            color: "#4ECDC4".into(),
        })
        .unwrap();
    ledger.add_transaction(rent()).unwrap();

    ledger.delete_category(cat_id).unwrap();

    // The transaction keeps the (now dangling) category name.
    let txs = ledger.transactions(&TransactionFilter::default()).unwrap();
    assert_eq!(txs[0].category, "Casa");
}

#[test]
fn budget_crud_roundtrip() {
    let ledger = setup();
    let id = ledger
        .add_budget(NewBudget {
            category: "Alimentação".into(),
            amount: Decimal::from(800),
            period: Period::Monthly,
        })
        .unwrap();

    let found = ledger.budget_for_category("Alimentação").unwrap().unwrap();
    assert_eq!(found.id, id);
    assert_eq!(found.amount, Decimal::from(800));
    assert_eq!(found.period, Period::Monthly);

    ledger
        .update_budget(
            id,
            BudgetPatch {
                amount: Some(Decimal::from(900)),
                period: Some(Period::Yearly),
                ..Default::default()
            },
        )
        .unwrap();
    let updated = ledger.budget_for_category("Alimentação").unwrap().unwrap();
    assert_eq!(updated.amount, Decimal::from(900));
    assert_eq!(updated.period, Period::Yearly);
    assert_eq!(updated.category, "Alimentação");

    let missing = ledger.update_budget(424242, BudgetPatch::default());
    assert!(matches!(missing, Err(Error::NotFound { .. })));

    ledger.delete_budget(id).unwrap();
    assert!(ledger.budget_for_category("Alimentação").unwrap().is_none());
}

#[test]
fn migration_is_idempotent_on_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dtmoney.sqlite");

    let ledger = Ledger::open(&path).unwrap();
    ledger.add_transaction(salary()).unwrap();
    drop(ledger);

    // Reopening runs the migration again against existing tables.
    let reopened = Ledger::open(&path).unwrap();
    let txs = reopened.transactions(&TransactionFilter::default()).unwrap();
    assert_eq!(txs.len(), 1);
    assert_eq!(txs[0].description, "Salário Mensal");
}
