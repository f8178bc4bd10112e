//! Public JSON snapshot served at `/api/banks.json`.

use chrono::NaiveDate;
use onchainbanks_core::{Bank, Category};
use serde::Serialize;

/// One bank as exposed by the API.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiBank<'a> {
    pub name: &'a str,
    pub slug: &'a str,
    pub network: &'a str,
    pub chain: &'a str,
    pub custody: &'a str,
    pub cashback: &'a str,
    pub annual_fee: &'a str,
    pub fx_fee: &'a str,
    pub category: Category,
    pub regions: &'a [String],
    pub website: &'a str,
    pub spendbase_url: &'a str,
}

impl<'a> From<&'a Bank> for ApiBank<'a> {
    fn from(bank: &'a Bank) -> Self {
        Self {
            name: &bank.name,
            slug: &bank.slug,
            network: &bank.network,
            chain: &bank.chain,
            custody: &bank.custody,
            cashback: &bank.cashback,
            annual_fee: &bank.annual_fee,
            fx_fee: &bank.fx_fee,
            category: bank.category,
            regions: &bank.regions,
            website: &bank.website,
            spendbase_url: &bank.spendbase_url,
        }
    }
}

/// The whole dataset at build time.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiSnapshot<'a> {
    pub last_updated: NaiveDate,
    pub count: usize,
    pub banks: Vec<ApiBank<'a>>,
}

impl<'a> ApiSnapshot<'a> {
    #[must_use]
    pub fn new(banks: &'a [Bank], last_updated: NaiveDate) -> Self {
        Self {
            last_updated,
            count: banks.len(),
            banks: banks.iter().map(ApiBank::from).collect(),
        }
    }

    /// Pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
