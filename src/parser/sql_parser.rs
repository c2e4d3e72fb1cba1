use sqlparser::ast::Statement;
use sqlparser::parser::Parser;

use crate::error::SqlParseError;
use crate::parser::dialect::SqlDialect;

/// Parse `sql` and return its first statement.
///
/// Later statements must still parse, but are ignored. Input with no
/// statement (blank, or only semicolons) is rejected.
pub fn parse_statement(sql: &str, dialect: SqlDialect) -> Result<Statement, SqlParseError> {
    if sql.trim().is_empty() {
        return Err(SqlParseError::Empty);
    }
    let parser_dialect = dialect.parser_dialect();
    Parser::parse_sql(parser_dialect.as_ref(), sql)?
        .into_iter()
        .next()
        .ok_or(SqlParseError::Empty)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_single_query() {
        let statement = parse_statement("SELECT a, b FROM t WHERE a > 1", SqlDialect::Generic)
            .expect("query should parse");
        assert!(matches!(statement, Statement::Query(_)));
        assert_eq!(statement.to_string(), "SELECT a, b FROM t WHERE a > 1");
    }

    #[test]
    fn keeps_the_first_of_several_statements() {
        let statement =
            parse_statement("SELECT a FROM t; SELECT b FROM u;", SqlDialect::Generic).unwrap();
        assert_eq!(statement.to_string(), "SELECT a FROM t");
    }

    #[test]
    fn rejects_blank_and_invalid_input() {
        assert_eq!(
            parse_statement("  \n", SqlDialect::Generic),
            Err(SqlParseError::Empty)
        );
        assert_eq!(parse_statement(";", SqlDialect::Generic), Err(SqlParseError::Empty));
        assert!(matches!(
            parse_statement("not valid sql !!!", SqlDialect::Generic),
            Err(SqlParseError::Syntax(_))
        ));
    }
}
