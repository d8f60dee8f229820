use sql_middleware::SqlMiddlewareDbError;
use sql_middleware::middleware::{ConfigAndPool, MiddlewarePoolConnection};
use sql_middleware::middleware::{QueryAndParams as QueryAndParams2, RowValues as RowValues2};

use crate::model::{Course, ScorecardRow};
use crate::storage::{hole_columns, scorecard_ddl};

/// # Errors
///
/// Will return `Err` if the database query fails
pub async fn execute_batch_sql(
    config_and_pool: &ConfigAndPool,
    query: &str,
) -> Result<(), SqlMiddlewareDbError> {
    let mut conn = config_and_pool.get_connection().await?;

    conn.execute_batch(query).await
}

/// Create the scorecard table for the active course if it does not exist.
///
/// # Errors
///
/// Will return `Err` if the database query fails
pub async fn create_scorecard_table(
    config_and_pool: &ConfigAndPool,
    course: &Course,
) -> Result<(), SqlMiddlewareDbError> {
    execute_batch_sql(config_and_pool, &scorecard_ddl(course)).await
}

/// Insert one row per finalized roster entry. `created_at` is stamped here,
/// not by the caller.
///
/// # Errors
///
/// Will return `Err` if the database query fails or a row's hole count does
/// not match the course.
pub async fn insert_scorecards(
    config_and_pool: &ConfigAndPool,
    course: &Course,
    rows: &[ScorecardRow],
) -> Result<(), SqlMiddlewareDbError> {
    let mut conn = config_and_pool.get_connection().await?;
    let queries = build_insert_queries(course, rows)?;

    if queries.is_empty() {
        return Ok(());
    }

    match &mut conn {
        sqlite_conn @ MiddlewarePoolConnection::Sqlite { .. } => {
            execute_sqlite_queries(sqlite_conn, queries).await?;
        }
        MiddlewarePoolConnection::Postgres { .. } => {
            return Err(SqlMiddlewareDbError::Other(
                "Database type not supported for this operation".to_string(),
            ));
        }
    }
    log::info!("stored {} scorecard(s)", rows.len());
    Ok(())
}

fn build_insert_queries(
    course: &Course,
    rows: &[ScorecardRow],
) -> Result<Vec<QueryAndParams2>, SqlMiddlewareDbError> {
    let hole_cols = hole_columns(course);
    let mut queries = vec![];
    for row in rows {
        if row.hole_scores.len() != hole_cols.len() {
            return Err(SqlMiddlewareDbError::Other(format!(
                "scorecard for {} has {} hole scores, course has {} holes",
                row.player_name,
                row.hole_scores.len(),
                hole_cols.len()
            )));
        }

        let columns = format!(
            "player_name, tee_color, game_mode, total_score, {}, created_at",
            hole_cols.join(", ")
        );
        let placeholders = (1..=hole_cols.len() + 5)
            .map(|i| format!("?{i}"))
            .collect::<Vec<_>>()
            .join(", ");
        let insert_stmt = format!("INSERT INTO scorecard ({columns}) VALUES ({placeholders});");

        let mut params = vec![
            RowValues2::Text(row.player_name.clone()),
            RowValues2::Text(row.tee_color.to_string()),
            RowValues2::Text(row.game_mode.to_string()),
            RowValues2::Int(i64::from(row.total_score)),
        ];
        params.extend(row.hole_scores.iter().map(|&s| RowValues2::Int(i64::from(s))));
        params.push(RowValues2::Text(chrono::Utc::now().to_rfc3339()));

        queries.push(QueryAndParams2 {
            query: insert_stmt,
            params,
        });
    }
    Ok(queries)
}

async fn execute_sqlite_queries(
    sqlite_conn: &mut MiddlewarePoolConnection,
    queries: Vec<QueryAndParams2>,
) -> Result<(), SqlMiddlewareDbError> {
    let Some(first) = queries.first() else {
        return Ok(());
    };

    let insert_sql = first.query.clone();
    let mut prepared = sqlite_conn.prepare_sqlite_statement(&insert_sql).await?;

    for query in queries {
        prepared.execute(&query.params).await?;
    }

    Ok(())
}

/// Overwrite a stored scorecard's per-hole values. The total is recomputed
/// as the plain sum of the new values.
///
/// # Errors
///
/// Will return `Err` if the database query fails or the hole count does not
/// match the course.
pub async fn update_scorecard(
    config_and_pool: &ConfigAndPool,
    course: &Course,
    id: i64,
    hole_scores: &[i32],
) -> Result<(), SqlMiddlewareDbError> {
    let hole_cols = hole_columns(course);
    if hole_scores.len() != hole_cols.len() {
        return Err(SqlMiddlewareDbError::Other(format!(
            "{} hole scores supplied, course has {} holes",
            hole_scores.len(),
            hole_cols.len()
        )));
    }

    let total: i32 = hole_scores.iter().sum();
    let assignments = hole_cols
        .iter()
        .enumerate()
        .map(|(i, c)| format!("{c} = ?{}", i + 2))
        .collect::<Vec<_>>()
        .join(", ");
    let query = format!(
        "UPDATE scorecard SET total_score = ?1, {assignments} WHERE id = ?{};",
        hole_cols.len() + 2
    );

    let mut params = vec![RowValues2::Int(i64::from(total))];
    params.extend(hole_scores.iter().map(|&s| RowValues2::Int(i64::from(s))));
    params.push(RowValues2::Int(id));

    execute_dml(config_and_pool, &query, params).await
}

/// Delete one stored round.
///
/// # Errors
///
/// Will return `Err` if the database query fails
pub async fn delete_scorecard(
    config_and_pool: &ConfigAndPool,
    id: i64,
) -> Result<(), SqlMiddlewareDbError> {
    execute_dml(
        config_and_pool,
        "DELETE FROM scorecard WHERE id = ?1;",
        vec![RowValues2::Int(id)],
    )
    .await
}

async fn execute_dml(
    config_and_pool: &ConfigAndPool,
    query: &str,
    params: Vec<RowValues2>,
) -> Result<(), SqlMiddlewareDbError> {
    let mut conn = config_and_pool.get_connection().await?;
    match &mut conn {
        sqlite_conn @ MiddlewarePoolConnection::Sqlite { .. } => {
            let mut prepared = sqlite_conn.prepare_sqlite_statement(query).await?;
            prepared.execute(&params).await?;
            Ok(())
        }
        MiddlewarePoolConnection::Postgres { .. } => Err(SqlMiddlewareDbError::Other(
            "Database type not supported for this operation".to_string(),
        )),
    }
}
