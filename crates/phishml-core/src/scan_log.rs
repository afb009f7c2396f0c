//! In-memory record of `/scan` results.
//!
//! Keeps the newest `capacity` records for `/admin/recent` and running totals
//! (overall and per UTC day) for `/admin/stats`. Totals cover every scan since
//! startup, not just the retained records.

use std::collections::{BTreeMap, VecDeque};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::scoring::{Assessment, Provider};
use crate::verdict::Verdict;

/// Records retained when the config does not say otherwise.
pub const DEFAULT_CAPACITY: usize = 1000;
/// Records returned by `/admin/recent`.
pub const RECENT_LIMIT: usize = 10;

/// One stored scan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanRecord {
    pub url: String,
    pub ml_score: f64,
    pub intel_flag: u8,
    pub provider: Provider,
    pub final_score: f64,
    pub verdict: Verdict,
    pub created_at: DateTime<Utc>,
}

impl ScanRecord {
    pub fn from_assessment(a: &Assessment, created_at: DateTime<Utc>) -> Self {
        Self {
            url: a.url.clone(),
            ml_score: a.ml_score,
            intel_flag: a.intel_flag,
            provider: a.provider,
            final_score: a.final_score,
            verdict: a.verdict,
            created_at,
        }
    }
}

/// Scan counts for one UTC day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyCount {
    /// `YYYY-MM-DD`.
    pub date: String,
    pub count: u64,
    pub phishing_count: u64,
}

/// Body of `GET /admin/stats`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanStats {
    pub total: u64,
    pub phishing: u64,
    pub suspicious: u64,
    pub legit: u64,
    /// `phishing / total`, or 0 before the first scan.
    pub phishing_rate: f64,
    /// Oldest day first.
    pub daily_trend: Vec<DailyCount>,
}

#[derive(Debug, Default, Clone, Copy)]
struct DayTally {
    count: u64,
    phishing: u64,
}

#[derive(Debug)]
pub struct ScanLog {
    capacity: usize,
    records: VecDeque<ScanRecord>,
    total: u64,
    phishing: u64,
    suspicious: u64,
    legit: u64,
    daily: BTreeMap<NaiveDate, DayTally>,
}

impl Default for ScanLog {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl ScanLog {
    /// A log retaining at most `capacity` records. `0` keeps totals only.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            records: VecDeque::with_capacity(capacity.min(DEFAULT_CAPACITY)),
            total: 0,
            phishing: 0,
            suspicious: 0,
            legit: 0,
            daily: BTreeMap::new(),
        }
    }

    pub fn record(&mut self, rec: ScanRecord) {
        self.total += 1;
        match rec.verdict {
            Verdict::Phishing => self.phishing += 1,
            Verdict::Suspicious => self.suspicious += 1,
            Verdict::Legit => self.legit += 1,
        }
        let day = self.daily.entry(rec.created_at.date_naive()).or_default();
        day.count += 1;
        if rec.verdict == Verdict::Phishing {
            day.phishing += 1;
        }

        if self.capacity == 0 {
            return;
        }
        while self.records.len() >= self.capacity {
            let _ = self.records.pop_front();
        }
        self.records.push_back(rec);
    }

    /// Up to `limit` retained records, newest first.
    pub fn recent(&self, limit: usize) -> Vec<ScanRecord> {
        self.records.iter().rev().take(limit).cloned().collect()
    }

    /// Number of retained records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn stats(&self) -> ScanStats {
        let phishing_rate = if self.total == 0 {
            0.0
        } else {
            self.phishing as f64 / self.total as f64
        };
        ScanStats {
            total: self.total,
            phishing: self.phishing,
            suspicious: self.suspicious,
            legit: self.legit,
            phishing_rate,
            daily_trend: self
                .daily
                .iter()
                .map(|(date, tally)| DailyCount {
                    date: date.format("%Y-%m-%d").to_string(),
                    count: tally.count,
                    phishing_count: tally.phishing,
                })
                .collect(),
        }
    }
}
