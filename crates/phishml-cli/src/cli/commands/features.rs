//! `phishml features <url>` – show what the classifier sees.

use anyhow::Result;
use phishml_core::features::extract_features;

pub fn run_features(url: &str) -> Result<()> {
    let record = extract_features(url);
    println!("{}", serde_json::to_string_pretty(&record)?);
    Ok(())
}
