// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod cli;
pub mod commands;
pub mod db;
pub mod error;
pub mod models;
pub mod query;
pub mod rates;
pub mod report;
pub mod seed;
pub mod store;
pub mod utils;

pub use error::{Error, Result};
pub use store::Ledger;
