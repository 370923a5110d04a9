//! Offline score sheets: ratings read from a JSON file and a per-criterion
//! CSV export of a scored visit.

use std::io::{Read, Write};
use std::path::Path;

use serde::Serialize;

use crate::evaluation::{EvaluationCriterion, RatingSet};

#[derive(Debug)]
pub enum ScoreSheetError {
    Io(std::io::Error),
    Json(serde_json::Error),
    Csv(csv::Error),
}

impl std::fmt::Display for ScoreSheetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScoreSheetError::Io(err) => write!(f, "failed to access score sheet: {}", err),
            ScoreSheetError::Json(err) => write!(f, "invalid ratings JSON: {}", err),
            ScoreSheetError::Csv(err) => write!(f, "could not write score sheet CSV: {}", err),
        }
    }
}

impl std::error::Error for ScoreSheetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScoreSheetError::Io(err) => Some(err),
            ScoreSheetError::Json(err) => Some(err),
            ScoreSheetError::Csv(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for ScoreSheetError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for ScoreSheetError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

impl From<csv::Error> for ScoreSheetError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

pub fn read_ratings_from_path<P: AsRef<Path>>(path: P) -> Result<RatingSet, ScoreSheetError> {
    let file = std::fs::File::open(path)?;
    read_ratings(file)
}

/// Parse a `{ "criterion_id": rating, ... }` document.
pub fn read_ratings<R: Read>(reader: R) -> Result<RatingSet, ScoreSheetError> {
    Ok(serde_json::from_reader(reader)?)
}

#[derive(Debug, Serialize)]
struct ScoreSheetRow<'a> {
    criterion: &'a str,
    title: &'a str,
    category: &'a str,
    rating: f32,
    max_score: u8,
    rated: bool,
}

/// Write one row per catalog criterion, unrated criteria exported as zero.
pub fn write_csv<W: Write>(
    writer: W,
    ratings: &RatingSet,
    catalog: &[EvaluationCriterion],
) -> Result<(), ScoreSheetError> {
    let mut csv = csv::Writer::from_writer(writer);

    for criterion in catalog {
        csv.serialize(ScoreSheetRow {
            criterion: criterion.id,
            title: criterion.title,
            category: criterion.category.label(),
            rating: ratings.get(criterion.id),
            max_score: criterion.max_score,
            rated: ratings.is_rated(criterion.id),
        })?;
    }

    csv.flush()?;
    Ok(())
}

pub fn write_csv_to_path<P: AsRef<Path>>(
    path: P,
    ratings: &RatingSet,
    catalog: &[EvaluationCriterion],
) -> Result<(), ScoreSheetError> {
    let file = std::fs::File::create(path)?;
    write_csv(file, ratings, catalog)
}
