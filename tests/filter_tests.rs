// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use dtmoney::models::{Kind, Transaction};
use dtmoney::query::{self, TransactionFilter};

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn tx(id: i64, description: &str, amount: i64, category: &str, day: &str) -> Transaction {
    let kind = if amount >= 0 { Kind::Income } else { Kind::Outcome };
    Transaction {
        id,
        description: description.into(),
        amount: Decimal::from(amount),
        category: category.into(),
        date: date(day),
        kind,
    }
}

fn mixed_list() -> Vec<Transaction> {
    vec![
        tx(1, "Salário Mensal", 5000, "Salário", "2024-01-10"),
        tx(2, "Aluguel", -1200, "Casa", "2024-01-12"),
        tx(3, "Supermercado", -450, "Alimentação", "2024-01-15"),
        tx(4, "Freelance", 1500, "Venda", "2024-02-01"),
        tx(5, "Restaurante", -120, "Alimentação", "2024-02-03"),
        tx(6, "Bônus", 800, "Salário", "2024-02-05"),
        tx(7, "Uber", -45, "Transporte", "2024-02-07"),
        tx(8, "Consultoria", 2000, "Venda", "2024-02-10"),
        tx(9, "Cinema", -60, "Lazer", "2024-02-11"),
        tx(10, "Farmácia", -120, "Saúde", "2024-02-14"),
    ]
}

#[test]
fn kind_filter_returns_subset_in_original_order() {
    let list = mixed_list();
    let filter = TransactionFilter {
        kind: Some(Kind::Income),
        ..Default::default()
    };
    let result = query::apply(&filter, &list);
    let ids: Vec<i64> = result.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![1, 4, 6, 8]);
    assert!(result.iter().all(|t| t.kind == Kind::Income));
}

#[test]
fn query_match_is_case_insensitive_substring() {
    let list = mixed_list();
    let filter = TransactionFilter {
        query: Some("SALÁRIO".into()),
        ..Default::default()
    };
    let result = query::apply(&filter, &list);
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].description, "Salário Mensal");
}

#[test]
fn date_bounds_are_inclusive() {
    let list = mixed_list();
    let filter = TransactionFilter {
        date_from: Some(date("2024-01-12")),
        date_to: Some(date("2024-02-03")),
        ..Default::default()
    };
    let ids: Vec<i64> = query::apply(&filter, &list).iter().map(|t| t.id).collect();
    // Both boundary dates are included.
    assert_eq!(ids, vec![2, 3, 4, 5]);
}

#[test]
fn constraints_combine_conjunctively() {
    let list = mixed_list();
    let filter = TransactionFilter {
        category: Some("Alimentação".into()),
        kind: Some(Kind::Outcome),
        date_from: Some(date("2024-02-01")),
        ..Default::default()
    };
    let result = query::apply(&filter, &list);
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].description, "Restaurante");
}

#[test]
fn empty_filter_returns_everything_unchanged() {
    let list = mixed_list();
    let filter = TransactionFilter::default();
    assert!(filter.is_empty());
    assert_eq!(query::apply(&filter, &list), list);
}

#[test]
fn filter_is_idempotent() {
    let list = mixed_list();
    let filter = TransactionFilter {
        kind: Some(Kind::Outcome),
        query: Some("a".into()),
        ..Default::default()
    };
    let once = query::apply(&filter, &list);
    let twice = query::apply(&filter, &once);
    assert_eq!(once, twice);
}

#[test]
fn pagination_is_fixed_at_ten_rows() {
    let items: Vec<i64> = (1..=23).collect();
    assert_eq!(query::paginate(&items, 1), &items[0..10]);
    assert_eq!(query::paginate(&items, 2), &items[10..20]);
    assert_eq!(query::paginate(&items, 3), &items[20..23]);
    assert!(query::paginate(&items, 4).is_empty());
    // Page 0 is treated as page 1.
    assert_eq!(query::paginate(&items, 0), &items[0..10]);
    assert_eq!(query::page_count(23), 3);
    assert_eq!(query::page_count(0), 0);
}
