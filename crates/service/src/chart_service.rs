//! Quarterly series for chart rendering.

use std::sync::{Arc, LazyLock};

use quarterseed_core::{SETUP_HINT, VALUE_QUARTERS_COLLECTION};
use quarterseed_storage::StorageBackend;
use quarterseed_storage::traits::RecordStore;
use regex::Regex;
use serde::Serialize;

use crate::ServiceError;

/// Parallel label/value arrays, oldest quarter first.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct QuarterSeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl QuarterSeries {
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

#[expect(clippy::unwrap_used, reason = "static regex pattern is compile-time validated")]
static QUARTER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]{4})Q([1-4])").unwrap());

/// First `<year>Q<quarter>` anywhere in `raw`, so `FY2001Q2` reads as 2001 Q2.
fn find_quarter(raw: &str) -> Option<(&str, &str)> {
    let caps = QUARTER_REGEX.captures(raw)?;
    Some((caps.get(1)?.as_str(), caps.get(2)?.as_str()))
}

/// `year * 10 + quarter`; strings without a quarter sort first.
fn sort_key(raw: &str) -> u32 {
    find_quarter(raw)
        .and_then(|(year, quarter)| {
            Some(year.parse::<u32>().ok()? * 10 + quarter.parse::<u32>().ok()?)
        })
        .unwrap_or(0)
}

/// `Q1 1999`; strings without a quarter keep their raw text.
fn label(raw: &str) -> String {
    find_quarter(raw).map_or_else(|| raw.to_owned(), |(year, quarter)| format!("Q{quarter} {year}"))
}

pub struct ChartService {
    storage: Arc<StorageBackend>,
}

impl ChartService {
    #[must_use]
    pub fn new(storage: Arc<StorageBackend>) -> Self {
        Self { storage }
    }

    pub async fn series(&self) -> Result<QuarterSeries, ServiceError> {
        let records = match self.storage.list_records(VALUE_QUARTERS_COLLECTION).await {
            Ok(records) => records,
            Err(e) if e.is_not_found() => {
                return Err(ServiceError::NotConfigured(SETUP_HINT.to_owned()));
            },
            Err(e) => return Err(e.into()),
        };

        let mut rows = Vec::with_capacity(records.len());
        for record in &records {
            let quarter = record.get_str("quarter").ok_or_else(|| {
                ServiceError::InvalidData(format!("record {} has no quarter", record.id))
            })?;
            let value = record.get_f64("value").ok_or_else(|| {
                ServiceError::InvalidData(format!("record {} has no value", record.id))
            })?;
            rows.push((sort_key(quarter), label(quarter), value));
        }
        rows.sort_by_key(|(key, _, _)| *key);

        let (labels, values) = rows.into_iter().map(|(_, label, value)| (label, value)).unzip();
        Ok(QuarterSeries { labels, values })
    }
}
