//! Reader for the particle dataset text format.
//!
//! ```text
//! 3
//! 1 120.50 30.20 0.0
//! 2 120.75 30.10 0.0
//! 3 121.00 29.95 0.0
//! ```
//!
//! The first line is an advisory point count and is never checked against the
//! rows that follow. Each row is `id longitude latitude [extra...]`; rows with
//! fewer than four tokens are skipped.

use crate::prelude::{CoreError, CoreResult};
use crate::records::ReferencePoint;
use crate::telemetry::LogManager;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

const MIN_TOKENS: usize = 4;

/// Immutable, in-memory particle collection in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParticleDataset {
    advisory_count: Option<usize>,
    points: Vec<ReferencePoint>,
}

impl ParticleDataset {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_points(points: Vec<ReferencePoint>) -> Self {
        Self {
            advisory_count: None,
            points,
        }
    }

    pub fn points(&self) -> &[ReferencePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Count announced by the header line, when it parsed as an integer.
    pub fn advisory_count(&self) -> Option<usize> {
        self.advisory_count
    }
}

/// Parses a dataset from any buffered reader.
pub fn parse<R: BufRead>(reader: R) -> CoreResult<ParticleDataset> {
    let mut lines = reader.lines();

    let advisory_count = match lines.next() {
        Some(header) => header
            .map_err(|err| CoreError::DataUnavailable(format!("reading header: {}", err)))?
            .trim()
            .parse::<usize>()
            .ok(),
        None => return Ok(ParticleDataset::empty()),
    };

    let mut points = Vec::with_capacity(advisory_count.unwrap_or(0).min(1 << 20));
    for (offset, line) in lines.enumerate() {
        let line_number = offset + 2;
        let line = line.map_err(|err| {
            CoreError::DataUnavailable(format!("reading line {}: {}", line_number, err))
        })?;
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() < MIN_TOKENS {
            continue;
        }
        points.push(parse_row(&tokens, line_number)?);
    }

    Ok(ParticleDataset {
        advisory_count,
        points,
    })
}

fn parse_row(tokens: &[&str], line_number: usize) -> CoreResult<ReferencePoint> {
    let malformed = |what: &str| {
        CoreError::DataUnavailable(format!("line {}: unparsable {}", line_number, what))
    };
    let id = tokens[0].parse::<i64>().map_err(|_| malformed("id"))?;
    let longitude = tokens[1].parse::<f64>().map_err(|_| malformed("longitude"))?;
    let latitude = tokens[2].parse::<f64>().map_err(|_| malformed("latitude"))?;
    if !longitude.is_finite() {
        return Err(malformed("longitude"));
    }
    if !latitude.is_finite() {
        return Err(malformed("latitude"));
    }
    Ok(ReferencePoint::new(id, latitude, longitude))
}

/// Opens and parses the dataset at `path`.
pub fn load<P: AsRef<Path>>(path: P) -> CoreResult<ParticleDataset> {
    let path_ref = path.as_ref();
    let file = File::open(path_ref).map_err(|err| {
        CoreError::DataUnavailable(format!("opening {}: {}", path_ref.display(), err))
    })?;
    let dataset = parse(BufReader::new(file))?;
    LogManager::new("dataset").record(&format!(
        "loaded {} particles from {}",
        dataset.len(),
        path_ref.display()
    ));
    Ok(dataset)
}

/// Like [`load`], but logs `DataUnavailable` and degrades to an empty dataset.
pub fn load_or_empty<P: AsRef<Path>>(path: P) -> ParticleDataset {
    match load(path) {
        Ok(dataset) => dataset,
        Err(err) => {
            LogManager::new("dataset").warn(&err.to_string());
            ParticleDataset::empty()
        }
    }
}
