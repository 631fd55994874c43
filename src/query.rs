// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;

use crate::models::{Kind, Transaction};

/// Fixed page size for transaction listings.
pub const PAGE_SIZE: usize = 10;

/// In-memory narrowing of a transaction list. Every field is optional;
/// `None` imposes no constraint. The CLI maps the `all` sentinel to
/// `None` before this layer sees it.
#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    /// Case-insensitive substring match against the description.
    pub query: Option<String>,
    /// Exact category name.
    pub category: Option<String>,
    pub kind: Option<Kind>,
    /// Inclusive lower date bound.
    pub date_from: Option<NaiveDate>,
    /// Inclusive upper date bound.
    pub date_to: Option<NaiveDate>,
}

impl TransactionFilter {
    pub fn is_empty(&self) -> bool {
        self.query.is_none()
            && self.category.is_none()
            && self.kind.is_none()
            && self.date_from.is_none()
            && self.date_to.is_none()
    }

    fn matches(&self, tx: &Transaction) -> bool {
        if let Some(q) = &self.query {
            if !tx.description.to_lowercase().contains(&q.to_lowercase()) {
                return false;
            }
        }
        if let Some(cat) = &self.category {
            if &tx.category != cat {
                return false;
            }
        }
        if let Some(kind) = self.kind {
            if tx.kind != kind {
                return false;
            }
        }
        if let Some(from) = self.date_from {
            if tx.date < from {
                return false;
            }
        }
        if let Some(to) = self.date_to {
            if tx.date > to {
                return false;
            }
        }
        true
    }
}

/// Pure filter: the subsequence of `transactions` satisfying every
/// supplied constraint, in the original relative order.
pub fn apply(filter: &TransactionFilter, transactions: &[Transaction]) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|tx| filter.matches(tx))
        .cloned()
        .collect()
}

/// Display-only pagination over an already-filtered list. Pages are
/// 1-based; a page past the end is empty.
pub fn paginate<T>(items: &[T], page: usize) -> &[T] {
    let page = page.max(1);
    let start = (page - 1) * PAGE_SIZE;
    if start >= items.len() {
        return &[];
    }
    let end = (start + PAGE_SIZE).min(items.len());
    &items[start..end]
}

pub fn page_count(len: usize) -> usize {
    len.div_ceil(PAGE_SIZE)
}
