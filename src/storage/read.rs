use std::str::FromStr;

use sql_middleware::middleware::{
    ConfigAndPool, ConversionMode, MiddlewarePool, MiddlewarePoolConnection, ResultSet,
};
use sql_middleware::middleware::{QueryAndParams as QueryAndParams2, RowValues as RowValues2};
use sql_middleware::{SqlMiddlewareDbError, SqliteParamsQuery, convert_sql_params};

use crate::model::{Course, GameMode, ScorecardRow, TeeColor};
use crate::storage::hole_columns;

fn get_int(row: &sql_middleware::middleware::CustomDbRow, field: &str) -> i64 {
    row.get(field).and_then(|v| v.as_int()).map_or(0, |&v| v)
}

fn get_string(row: &sql_middleware::middleware::CustomDbRow, field: &str) -> String {
    row.get(field)
        .and_then(|v| v.as_text())
        .unwrap_or_default()
        .to_string()
}

/// # Errors
///
/// Will return `Err` if the database query fails
pub async fn execute_query(
    conn: &MiddlewarePoolConnection,
    query: &str,
    params: Vec<RowValues2>,
) -> Result<ResultSet, SqlMiddlewareDbError> {
    let query_and_params = QueryAndParams2 {
        query: query.to_string(),
        params,
    };

    match conn {
        MiddlewarePoolConnection::Sqlite {
            conn: sqlite_conn, ..
        } => {
            let result = sqlite_conn
                .with_connection(move |db_conn| {
                    let converted_params = convert_sql_params::<SqliteParamsQuery>(
                        &query_and_params.params,
                        ConversionMode::Query,
                    )?;
                    let tx = db_conn.transaction()?;

                    let result_set = {
                        let mut stmt = tx.prepare(&query_and_params.query)?;

                        sql_middleware::sqlite_build_result_set(&mut stmt, &converted_params.0)?
                    };
                    tx.commit()?;
                    Ok::<_, SqlMiddlewareDbError>(result_set)
                })
                .await?;

            Ok(result)
        }
        _ => Err(SqlMiddlewareDbError::Other(
            "Database type not supported for this operation".to_string(),
        )),
    }
}

fn row_to_scorecard(
    row: &sql_middleware::middleware::CustomDbRow,
    course: &Course,
) -> Result<ScorecardRow, SqlMiddlewareDbError> {
    let tee_text = get_string(row, "tee_color");
    let tee_color = TeeColor::from_str(&tee_text)
        .map_err(|_| SqlMiddlewareDbError::Other(format!("bad tee_color '{tee_text}'")))?;
    let mode_text = get_string(row, "game_mode");
    let game_mode = GameMode::from_str(&mode_text)
        .map_err(|_| SqlMiddlewareDbError::Other(format!("bad game_mode '{mode_text}'")))?;

    let hole_scores = hole_columns(course)
        .iter()
        .map(|col| i32::try_from(get_int(row, col)).unwrap_or(0))
        .collect();

    Ok(ScorecardRow {
        id: Some(get_int(row, "id")),
        player_name: get_string(row, "player_name"),
        tee_color,
        game_mode,
        total_score: i32::try_from(get_int(row, "total_score")).unwrap_or(0),
        hole_scores,
        created_at: Some(get_string(row, "created_at")),
    })
}

/// All stored rounds, newest first. Tee filtering happens downstream in the
/// leaderboard so one fetch serves both the history list and the standings.
///
/// # Errors
///
/// Will return `Err` if the database query fails
pub async fn scorecards(
    config_and_pool: &ConfigAndPool,
    course: &Course,
) -> Result<Vec<ScorecardRow>, SqlMiddlewareDbError> {
    let pool = config_and_pool.pool.get().await?;
    let conn = MiddlewarePool::get_connection(pool, config_and_pool.translate_placeholders).await?;

    let query = "SELECT * FROM scorecard ORDER BY created_at DESC, id DESC;";
    let query_result = execute_query(&conn, query, vec![]).await?;

    query_result
        .results
        .iter()
        .map(|row| row_to_scorecard(row, course))
        .collect()
}

/// Fetch one stored round by id.
///
/// # Errors
///
/// Will return `Err` if the database query fails or no row has that id.
pub async fn scorecard(
    config_and_pool: &ConfigAndPool,
    course: &Course,
    id: i64,
) -> Result<ScorecardRow, SqlMiddlewareDbError> {
    let pool = config_and_pool.pool.get().await?;
    let conn = MiddlewarePool::get_connection(pool, config_and_pool.translate_placeholders).await?;

    let query = "SELECT * FROM scorecard WHERE id = ?1;";
    let query_result = execute_query(&conn, query, vec![RowValues2::Int(id)]).await?;

    let row = query_result
        .results
        .first()
        .ok_or_else(|| SqlMiddlewareDbError::Other(format!("no scorecard with id {id}")))?;
    row_to_scorecard(row, course)
}
