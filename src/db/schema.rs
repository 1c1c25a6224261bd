use serde::Serialize;
use sqlx::SqlitePool;
use std::collections::BTreeMap;

#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct ColumnInfo {
    pub name: String,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub column_type: String,
}

/// Name and declared column types of every user table in the store.
pub async fn describe(
    pool: &SqlitePool,
) -> Result<BTreeMap<String, Vec<ColumnInfo>>, sqlx::Error> {
    let tables: Vec<String> = sqlx::query_scalar(
        r#"
        SELECT name FROM sqlite_master
        WHERE type = 'table' AND name NOT LIKE 'sqlite_%' AND name <> '_sqlx_migrations'
        ORDER BY name
        "#,
    )
    .fetch_all(pool)
    .await
    .map_err(|err| {
        tracing::error!("Failed to list tables, error: {:?}", err);
        err
    })?;

    let mut tables_info = BTreeMap::new();
    for table in tables {
        let columns = sqlx::query_as::<_, ColumnInfo>(
            r#"SELECT name, "type" FROM pragma_table_info(?1)"#,
        )
        .bind(&table)
        .fetch_all(pool)
        .await
        .map_err(|err| {
            tracing::error!("Failed to describe table {}, error: {:?}", table, err);
            err
        })?;
        tables_info.insert(table, columns);
    }
    Ok(tables_info)
}
