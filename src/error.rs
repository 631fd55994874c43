// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;

use crate::models::Kind;

/// Errors raised by the ledger and its stores.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An update addressed a record that does not exist. Deletes of
    /// missing records are a no-op, not this error.
    #[error("{kind} with id {id} not found")]
    NotFound { kind: &'static str, id: i64 },

    /// A transaction amount was zero; zero-amount records carry no meaning.
    #[error("transaction amount must not be zero")]
    ZeroAmount,

    /// The amount's sign disagrees with the declared kind: income must
    /// be positive, outcome negative.
    #[error("amount {amount} does not agree with kind '{kind}'")]
    AmountKindMismatch { amount: Decimal, kind: Kind },

    #[error("invalid stored decimal '{0}'")]
    InvalidDecimal(String),

    #[error("unknown kind '{0}', expected 'income' or 'outcome'")]
    InvalidKind(String),

    #[error("unknown period '{0}', expected 'monthly' or 'yearly'")]
    InvalidPeriod(String),

    #[error(transparent)]
    Storage(#[from] rusqlite::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
