#![allow(dead_code)]

use rusty_disc::model::{Course, Hole, TeeDistances};
use sql_middleware::middleware::ConfigAndPool;

/// The canonical Mountain Valley layout shipped with the crate (5 holes).
pub fn mountain_valley() -> Course {
    Course::from_json(include_str!("../../data/mountain_valley.json")).unwrap()
}

/// Small synthetic course for engine tests.
pub fn course_with_pars(pars: &[i32]) -> Course {
    Course {
        name: "test course".to_string(),
        version: 1,
        holes: pars
            .iter()
            .enumerate()
            .map(|(i, &par)| Hole {
                hole: u8::try_from(i + 1).unwrap(),
                par,
                distances: TeeDistances {
                    red: 200,
                    white: 240,
                    blue: 385,
                },
                info: String::new(),
                image: String::new(),
            })
            .collect(),
    }
}

/// Fresh in-memory sqlite pool. Each test passes its own name so parallel
/// tests in one binary do not share a shared-cache database.
pub async fn sqlite_store(name: &str) -> ConfigAndPool {
    let conn_str = format!("file:{name}?mode=memory&cache=shared");
    ConfigAndPool::new_sqlite(conn_str).await.unwrap()
}
