//! The fixed-schema feature record.

use serde::{Deserialize, Serialize};

use super::schema::{FEATURE_COUNT, FEATURE_NAMES};

/// Numeric summary of one URL.
///
/// Field order matches [`FEATURE_NAMES`]; serialized JSON keeps that order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FeatureRecord {
    pub url_length: u32,
    pub num_dots: u32,
    pub num_hyphens: u32,
    pub num_at: u32,
    pub num_qm: u32,
    pub num_eq: u32,
    pub num_slashes: u32,
    pub num_digits: u32,
    pub has_ip: u8,
    pub has_https: u8,
    pub suspicious_tld: u8,
    pub path_length: u32,
    pub host_length: u32,
}

impl FeatureRecord {
    /// The record as a classifier input row, in [`FEATURE_NAMES`] order.
    pub fn to_vector(&self) -> [f64; FEATURE_COUNT] {
        [
            f64::from(self.url_length),
            f64::from(self.num_dots),
            f64::from(self.num_hyphens),
            f64::from(self.num_at),
            f64::from(self.num_qm),
            f64::from(self.num_eq),
            f64::from(self.num_slashes),
            f64::from(self.num_digits),
            f64::from(self.has_ip),
            f64::from(self.has_https),
            f64::from(self.suspicious_tld),
            f64::from(self.path_length),
            f64::from(self.host_length),
        ]
    }

    /// `(name, value)` pairs in schema order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f64)> {
        FEATURE_NAMES.into_iter().zip(self.to_vector())
    }
}
