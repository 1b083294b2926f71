use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::currency::CurrencyCode;

#[derive(Debug, Clone, Deserialize)]
pub struct RateQuery {
    pub for_date: NaiveDate,
    pub base_currency: CurrencyCode,
    pub quote_currency: CurrencyCode,
}

#[derive(Debug, Clone, Serialize)]
pub struct RateQueryResult {
    pub for_date: NaiveDate,
    pub base_currency: CurrencyCode,
    pub quote_currency: CurrencyCode,
    pub rate: Option<Decimal>,
}

#[derive(Debug)]
pub struct RateTable {
    snapshot_date: NaiveDate,
    rates: HashMap<CurrencyCode, HashMap<CurrencyCode, Decimal>>,
}

impl RateTable {
    pub fn pln_snapshot() -> Self {
        let mut rates: HashMap<CurrencyCode, HashMap<CurrencyCode, Decimal>> = HashMap::new();

        // Every currency quotes itself at 1.0.
        for code in CurrencyCode::ALL {
            rates.entry(code).or_default().insert(code, Decimal::ONE);
        }

        rates
            .entry(CurrencyCode::Eur)
            .or_default()
            .insert(CurrencyCode::Pln, Decimal::new(45892, 4));
        rates
            .entry(CurrencyCode::Usd)
            .or_default()
            .insert(CurrencyCode::Pln, Decimal::new(43188, 4));

        Self {
            snapshot_date: NaiveDate::from_ymd_opt(2023, 9, 25).unwrap(),
            rates,
        }
    }

    pub fn snapshot_date(&self) -> NaiveDate {
        self.snapshot_date
    }

    pub fn lookup(&self, query: &RateQuery) -> RateQueryResult {
        let rate = if query.for_date != self.snapshot_date
            && query.base_currency != query.quote_currency
        {
            None
        } else {
            self.rates
                .get(&query.base_currency)
                .and_then(|quotes| quotes.get(&query.quote_currency))
                .copied()
        };

        RateQueryResult {
            for_date: query.for_date,
            base_currency: query.base_currency,
            quote_currency: query.quote_currency,
            rate,
        }
    }
}
