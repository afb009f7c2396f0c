//! Labeled URL datasets and the train/test split.

use anyhow::{bail, ensure, Context, Result};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::path::Path;

/// One labeled URL. `label` is 0 (benign) or 1 (phishing).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledUrl {
    pub url: String,
    pub label: u8,
}

/// Reads a CSV file with at least `url` and `label` columns.
pub fn load_dataset(path: &Path) -> Result<Vec<LabeledUrl>> {
    let file =
        std::fs::File::open(path).with_context(|| format!("open dataset {}", path.display()))?;
    read_dataset(file).with_context(|| format!("read dataset {}", path.display()))
}

/// Like [`load_dataset`] over any reader. Extra columns are ignored.
pub fn read_dataset<R: std::io::Read>(reader: R) -> Result<Vec<LabeledUrl>> {
    let mut rdr = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
    let headers = rdr.headers().context("read CSV header")?.clone();
    let column = |name: &str| {
        headers
            .iter()
            .position(|h| h.trim().eq_ignore_ascii_case(name))
            .with_context(|| format!("dataset has no `{name}` column"))
    };
    let url_idx = column("url")?;
    let label_idx = column("label")?;

    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record.context("read CSV record")?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        let url = record
            .get(url_idx)
            .with_context(|| format!("line {line}: missing url field"))?;
        let raw_label = record
            .get(label_idx)
            .with_context(|| format!("line {line}: missing label field"))?;
        let label = match raw_label.trim() {
            "0" => 0,
            "1" => 1,
            other => bail!("line {line}: label must be 0 or 1, got `{other}`"),
        };
        rows.push(LabeledUrl {
            url: url.to_string(),
            label,
        });
    }
    ensure!(!rows.is_empty(), "dataset has no rows");
    Ok(rows)
}

/// Shuffles `rows` with a seeded RNG and splits off `ceil(n * test_size)` rows
/// for testing. Returns `(train, test)`; both are guaranteed non-empty.
pub fn train_test_split<T: Clone>(rows: &[T], test_size: f64, seed: u64) -> Result<(Vec<T>, Vec<T>)> {
    ensure!(
        test_size > 0.0 && test_size < 1.0,
        "test_size must be strictly between 0 and 1, got {test_size}"
    );
    let n = rows.len();
    let n_test = (n as f64 * test_size).ceil() as usize;
    ensure!(
        n_test >= 1 && n_test < n,
        "cannot split {n} rows with test_size {test_size}"
    );

    let mut order: Vec<usize> = (0..n).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    order.shuffle(&mut rng);

    let test = order[..n_test].iter().map(|&i| rows[i].clone()).collect();
    let train = order[n_test..].iter().map(|&i| rows[i].clone()).collect();
    Ok((train, test))
}
