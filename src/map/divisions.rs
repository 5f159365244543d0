use crate::map::models::Division;
use rand::Rng;
use std::collections::HashSet;
use std::io::{self, BufRead};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DivisionsError {
    #[error("failed to read the divisions source: {0}")]
    Io(#[from] io::Error),
    #[error("line {line} is not a valid division: {source}")]
    Malformed {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
    #[error("division `{name}` has a centroid outside lat [-90, 90], lng (-180, 180]")]
    InvalidCentroid { name: String },
    #[error("division `{0}` is listed more than once")]
    DuplicateName(String),
    #[error("the divisions source contains no divisions")]
    Empty,
}

/// The fixed set of divisions a game is played on, in source order.
#[derive(Clone, Debug)]
pub struct Divisions {
    divisions: Vec<Division>,
}

impl Divisions {
    pub fn new(divisions: Vec<Division>) -> Result<Self, DivisionsError> {
        if divisions.is_empty() {
            return Err(DivisionsError::Empty);
        }
        let mut seen = HashSet::with_capacity(divisions.len());
        for division in divisions.iter() {
            if !division.centroid.is_valid() {
                return Err(DivisionsError::InvalidCentroid {
                    name: division.name.clone(),
                });
            }
            if !seen.insert(division.name.as_str()) {
                return Err(DivisionsError::DuplicateName(division.name.clone()));
            }
        }
        Ok(Self { divisions })
    }

    /// Reads one JSON object per line. Blank lines are skipped.
    pub fn from_ndjson<R: BufRead>(reader: R) -> Result<Self, DivisionsError> {
        let mut divisions = Vec::new();
        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let division: Division = serde_json::from_str(&line).map_err(|source| {
                DivisionsError::Malformed {
                    line: index + 1,
                    source,
                }
            })?;
            divisions.push(division);
        }
        Self::new(divisions)
    }

    pub fn names(&self) -> Vec<String> {
        self.divisions
            .iter()
            .map(|division| division.name.clone())
            .collect()
    }

    pub fn find(&self, name: &str) -> Option<&Division> {
        self.divisions.iter().find(|division| division.name == name)
    }

    /// The division a selection control shows before the player picks one.
    pub fn first(&self) -> &Division {
        &self.divisions[0]
    }

    pub fn random<R>(&self, rng: &mut R) -> &Division
    where
        R: Rng + ?Sized,
    {
        let index = rng.gen_range(0..self.divisions.len());
        &self.divisions[index]
    }

    pub fn len(&self) -> usize {
        self.divisions.len()
    }
}
