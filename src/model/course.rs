use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::error::AppError;

/// Starting position for a hole. Picked once at round setup and fixed for
/// the round's duration.
#[derive(
    Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString,
)]
pub enum TeeColor {
    Red,
    White,
    Blue,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct TeeDistances {
    pub red: i32,
    pub white: i32,
    pub blue: i32,
}

impl TeeDistances {
    #[must_use]
    pub fn for_tee(&self, tee: TeeColor) -> i32 {
        match tee {
            TeeColor::Red => self.red,
            TeeColor::White => self.white,
            TeeColor::Blue => self.blue,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Hole {
    pub hole: u8,
    pub par: i32,
    pub distances: TeeDistances,
    pub info: String,
    pub image: String,
}

/// Canonical course layout, loaded once at startup. The `version` field is
/// bumped whenever the layout data changes so stored rounds can be traced
/// back to the layout they were played on.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Course {
    pub name: String,
    pub version: i64,
    pub holes: Vec<Hole>,
}

impl Course {
    /// # Errors
    ///
    /// Will return `Err` if the file is not readable, is not valid json, or
    /// fails layout validation.
    pub fn from_json_file(file: &str) -> Result<Self, AppError> {
        let path = PathBuf::from(file);
        if !path.is_file() || fs::metadata(&path).is_err() {
            return Err(AppError::Config(format!(
                "The course file '{file}' is not readable."
            )));
        }
        let contents = fs::read_to_string(&path)?;
        Self::from_json(&contents)
    }

    /// # Errors
    ///
    /// Will return `Err` if the json is not valid or fails layout validation.
    pub fn from_json(contents: &str) -> Result<Self, AppError> {
        let course: Course = serde_json::from_str(contents)?;
        course.validate()?;
        Ok(course)
    }

    /// Layout rules: at least one hole, hole numbers sequential from 1,
    /// par and every tee distance at least 1.
    ///
    /// # Errors
    ///
    /// Will return `Err` naming the first rule violated.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.holes.is_empty() {
            return Err(AppError::Config(format!(
                "course '{}' has no holes",
                self.name
            )));
        }
        for (idx, hole) in self.holes.iter().enumerate() {
            let expected = u8::try_from(idx + 1)
                .map_err(|_| AppError::Config("course has more than 255 holes".to_string()))?;
            if hole.hole != expected {
                return Err(AppError::Config(format!(
                    "expected hole {expected}, found hole {} at position {idx}",
                    hole.hole
                )));
            }
            if hole.par < 1 {
                return Err(AppError::Config(format!(
                    "hole {} has par {}",
                    hole.hole, hole.par
                )));
            }
            let d = hole.distances;
            if d.red < 1 || d.white < 1 || d.blue < 1 {
                return Err(AppError::Config(format!(
                    "hole {} has a non-positive tee distance",
                    hole.hole
                )));
            }
        }
        Ok(())
    }

    /// Look up a hole by its 1-based number.
    ///
    /// # Panics
    ///
    /// Panics if the hole is not on this course. Callers pass hole numbers
    /// that came from this course, so an unknown number is a bug, not a
    /// recoverable condition.
    #[must_use]
    pub fn hole(&self, number: u8) -> &Hole {
        assert!(
            number >= 1 && usize::from(number) <= self.holes.len(),
            "hole {number} is not on course '{}'",
            self.name
        );
        &self.holes[usize::from(number) - 1]
    }

    #[must_use]
    pub fn hole_count(&self) -> u8 {
        // validate() rejects courses longer than u8 can number
        u8::try_from(self.holes.len()).unwrap_or(u8::MAX)
    }

    #[must_use]
    pub fn total_par(&self) -> i32 {
        self.holes.iter().map(|h| h.par).sum()
    }
}
