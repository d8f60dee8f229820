pub mod read;
pub mod write;

pub use read::*;
pub use write::*;

use crate::model::Course;

/// Per-hole column names for the active course, in hole order. The scorecard
/// table always carries exactly one `hole_N` column per hole on the course.
#[must_use]
pub fn hole_columns(course: &Course) -> Vec<String> {
    course.holes.iter().map(|h| format!("hole_{}", h.hole)).collect()
}

/// DDL for the scorecard table, generated from the course so the column set
/// tracks the active layout.
#[must_use]
pub fn scorecard_ddl(course: &Course) -> String {
    let mut columns = vec![
        "id INTEGER PRIMARY KEY AUTOINCREMENT".to_string(),
        "player_name TEXT NOT NULL".to_string(),
        "tee_color TEXT NOT NULL".to_string(),
        "game_mode TEXT NOT NULL".to_string(),
        "total_score INTEGER NOT NULL".to_string(),
    ];
    columns.extend(
        hole_columns(course)
            .iter()
            .map(|c| format!("{c} INTEGER NOT NULL")),
    );
    columns.push("created_at TEXT NOT NULL".to_string());
    format!(
        "CREATE TABLE IF NOT EXISTS scorecard (\n    {}\n);",
        columns.join(",\n    ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Hole, TeeDistances};

    #[test]
    fn ddl_columns_match_course_hole_count() {
        let course = Course {
            name: "test".to_string(),
            version: 1,
            holes: (1..=3)
                .map(|n| Hole {
                    hole: n,
                    par: 3,
                    distances: TeeDistances {
                        red: 200,
                        white: 240,
                        blue: 385,
                    },
                    info: String::new(),
                    image: String::new(),
                })
                .collect(),
        };
        let ddl = scorecard_ddl(&course);
        assert!(ddl.contains("hole_3 INTEGER NOT NULL"));
        assert!(!ddl.contains("hole_4"));
    }
}
