// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::time::Duration;

use anyhow::Result;
use serde::{Deserialize, Serialize};

const UA: &str = concat!(
    "dtmoney/",
    env!("CARGO_PKG_VERSION"),
    " (+https://github.com/alphavelocity/dtmoney)"
);

pub const QUOTE_URL: &str = "https://economia.awesomeapi.com.br/json/last/USD-BRL";

/// Interval between polls in watch mode.
pub const POLL_INTERVAL: Duration = Duration::from_secs(5 * 60);

/// USD-BRL quote as returned by AwesomeAPI. All numeric fields arrive
/// as strings; they are display-only, so no Decimal parsing happens here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quote {
    pub code: String,
    pub codein: String,
    pub name: String,
    pub high: String,
    pub low: String,
    #[serde(rename = "varBid")]
    pub var_bid: String,
    #[serde(rename = "pctChange")]
    pub pct_change: String,
    pub bid: String,
    pub ask: String,
    pub timestamp: String,
    pub create_date: String,
}

#[derive(Debug, Deserialize)]
struct QuoteResponse {
    #[serde(rename = "USDBRL")]
    usdbrl: Quote,
}

pub fn http_client() -> Result<reqwest::blocking::Client> {
    let c = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(15))
        .user_agent(UA)
        .build()?;
    Ok(c)
}

/// One unauthenticated GET. Nothing else in the application depends on
/// this succeeding; callers surface failures and carry on.
pub fn fetch_quote(client: &reqwest::blocking::Client) -> Result<Quote> {
    let resp = client.get(QUOTE_URL).send()?.error_for_status()?;
    let data: QuoteResponse = resp.json()?;
    Ok(data.usdbrl)
}
