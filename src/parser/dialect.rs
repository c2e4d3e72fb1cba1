use serde::{Deserialize, Serialize};
use sqlparser::dialect::{
    AnsiDialect, BigQueryDialect, ClickHouseDialect, DatabricksDialect, Dialect, DuckDbDialect,
    GenericDialect, HiveDialect, MsSqlDialect, MySqlDialect, PostgreSqlDialect,
    RedshiftSqlDialect, SQLiteDialect, SnowflakeDialect,
};
use std::fmt;

use crate::error::ConfigError;
use crate::parser::names::normalize_keyword;

/// SQL dialect used to parse both the answer and the ground truth.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SqlDialect {
    /// Permissive dialect accepting most common syntax.
    #[default]
    Generic,
    /// ANSI SQL.
    Ansi,
    /// Google `BigQuery`.
    BigQuery,
    /// `ClickHouse`.
    ClickHouse,
    /// Databricks SQL.
    Databricks,
    /// `DuckDB`.
    DuckDb,
    /// Apache Hive.
    Hive,
    /// Microsoft SQL Server.
    MsSql,
    /// `MySQL`.
    MySql,
    /// `PostgreSQL`.
    #[serde(alias = "postgres")]
    PostgreSql,
    /// Amazon Redshift.
    Redshift,
    /// Snowflake.
    Snowflake,
    /// `SQLite`.
    Sqlite,
}

impl SqlDialect {
    /// Every supported dialect, in declaration order.
    pub const ALL: [SqlDialect; 13] = [
        SqlDialect::Generic,
        SqlDialect::Ansi,
        SqlDialect::BigQuery,
        SqlDialect::ClickHouse,
        SqlDialect::Databricks,
        SqlDialect::DuckDb,
        SqlDialect::Hive,
        SqlDialect::MsSql,
        SqlDialect::MySql,
        SqlDialect::PostgreSql,
        SqlDialect::Redshift,
        SqlDialect::Snowflake,
        SqlDialect::Sqlite,
    ];

    /// Canonical lowercase name, as accepted by [`std::str::FromStr`] and serde.
    pub fn name(self) -> &'static str {
        match self {
            SqlDialect::Generic => "generic",
            SqlDialect::Ansi => "ansi",
            SqlDialect::BigQuery => "bigquery",
            SqlDialect::ClickHouse => "clickhouse",
            SqlDialect::Databricks => "databricks",
            SqlDialect::DuckDb => "duckdb",
            SqlDialect::Hive => "hive",
            SqlDialect::MsSql => "mssql",
            SqlDialect::MySql => "mysql",
            SqlDialect::PostgreSql => "postgresql",
            SqlDialect::Redshift => "redshift",
            SqlDialect::Snowflake => "snowflake",
            SqlDialect::Sqlite => "sqlite",
        }
    }

    /// Fresh `sqlparser` dialect instance; dialects carry no state.
    pub fn parser_dialect(self) -> Box<dyn Dialect> {
        match self {
            SqlDialect::Generic => Box::new(GenericDialect {}),
            SqlDialect::Ansi => Box::new(AnsiDialect {}),
            SqlDialect::BigQuery => Box::new(BigQueryDialect {}),
            SqlDialect::ClickHouse => Box::new(ClickHouseDialect {}),
            SqlDialect::Databricks => Box::new(DatabricksDialect {}),
            SqlDialect::DuckDb => Box::new(DuckDbDialect {}),
            SqlDialect::Hive => Box::new(HiveDialect {}),
            SqlDialect::MsSql => Box::new(MsSqlDialect {}),
            SqlDialect::MySql => Box::new(MySqlDialect {}),
            SqlDialect::PostgreSql => Box::new(PostgreSqlDialect {}),
            SqlDialect::Redshift => Box::new(RedshiftSqlDialect {}),
            SqlDialect::Snowflake => Box::new(SnowflakeDialect {}),
            SqlDialect::Sqlite => Box::new(SQLiteDialect {}),
        }
    }
}

impl fmt::Display for SqlDialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for SqlDialect {
    type Err = ConfigError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = normalize_keyword(s);
        if normalized == "postgres" {
            return Ok(SqlDialect::PostgreSql);
        }
        SqlDialect::ALL
            .into_iter()
            .find(|dialect| dialect.name() == normalized)
            .ok_or_else(|| ConfigError::UnknownDialect(s.to_string()))
    }
}
