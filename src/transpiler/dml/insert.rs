//! INSERT / INSERT IGNORE / REPLACE generation, with ON DUPLICATE KEY UPDATE.

use crate::ast::{DuplicateKeyUpdate, InsertMode, Row};
use crate::error::{QueryError, QueryResult};
use crate::transpiler::compiler::{Clause, Compiler};

impl Compiler<'_> {
    /// `<mode> table (cols) VALUES (%s, ...), (%s, ...) [ON DUPLICATE KEY UPDATE ...]`
    ///
    /// The table carries no alias. Column order follows the first row, and
    /// every other row must declare exactly the same columns.
    pub fn insert_clause(&self, rows: &[Row], mode: InsertMode) -> QueryResult<Clause> {
        let first = rows
            .first()
            .ok_or_else(|| QueryError::invalid("insert requires at least one row"))?;
        if first.is_empty() {
            return Err(QueryError::invalid("insert rows must set at least one column"));
        }
        if let Some(index) = rows.iter().position(|row| !row.same_columns(first)) {
            return Err(QueryError::invalid(format!(
                "insert row {} does not match the columns of the first row",
                index
            )));
        }

        let columns: Vec<&str> = first.columns().collect();
        let placeholder = self.generator.placeholder();

        let mut clause = Clause::keyword(self.generator.encode_insert_mode(mode)?);
        clause.push(self.generator.table_name(self.table));
        clause.bracketed(|list| {
            list.separated(&columns, ", ", |c, column| {
                c.push(self.generator.quote_identifier(column));
                Ok(())
            })
        })?;
        clause.push("VALUES");
        clause.separated(rows, ", ", |values, row| {
            values.bracketed(|tuple| {
                tuple.separated(&columns, ", ", |c, column| {
                    let value = row.get(column).ok_or_else(|| {
                        QueryError::invalid(format!("insert row is missing column {}", column))
                    })?;
                    c.bind(placeholder, value.clone());
                    Ok(())
                })
            })
        })?;
        clause.append(self.duplicate_key_clause(&columns)?);
        Ok(clause)
    }

    /// `ON DUPLICATE KEY UPDATE ...`, or nothing when not requested.
    pub fn duplicate_key_clause(&self, columns: &[&str]) -> QueryResult<Clause> {
        let Some(update) = &self.query.on_duplicate_key else {
            return Ok(Clause::new());
        };

        let mut clause = Clause::keyword(self.generator.upsert_keyword());
        match update {
            DuplicateKeyUpdate::Proposed => {
                clause.separated(columns, ", ", |c, column| {
                    c.push(self.generator.quote_identifier(column));
                    c.push("=");
                    c.tokens.extend(self.generator.value_reference(column));
                    Ok(())
                })?;
            }
            DuplicateKeyUpdate::Assign(assignments) => {
                let placeholder = self.generator.placeholder();
                clause.separated(assignments.iter(), ", ", |c, (column, value)| {
                    c.push(self.generator.quote_identifier(column));
                    c.push("=");
                    c.bind(placeholder, value.clone());
                    Ok(())
                })?;
            }
        }
        Ok(clause)
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::{InsertMode, Query, Row, Value};
    use crate::error::QueryError;
    use crate::transpiler::alias::AliasAllocator;
    use crate::transpiler::compiler::{Clause, Compiler};
    use crate::transpiler::sql::MySqlGenerator;

    fn insert(query: &Query) -> Result<Clause, QueryError> {
        let mut aliases = AliasAllocator::new();
        let compiler = Compiler::new(query, &MySqlGenerator, &mut aliases)?;
        compiler.statement()
    }

    fn rows() -> Vec<Row> {
        vec![
            Row::new().set("test", 1).set("test2", 2),
            Row::new().set("test2", 4).set("test", 3),
        ]
    }

    #[test]
    fn test_insert_modes() {
        for (mode, keyword) in [
            (InsertMode::Insert, "INSERT INTO"),
            (InsertMode::Ignore, "INSERT IGNORE INTO"),
            (InsertMode::Replace, "REPLACE INTO"),
        ] {
            let query = Query::new()
                .with_insert(rows(), mode)
                .unwrap()
                .on_table("table");
            let clause = insert(&query).unwrap();
            assert_eq!(
                clause.sql(),
                format!(
                    "{} `table` (`test`, `test2`) VALUES (%s, %s), (%s, %s)",
                    keyword
                )
            );
            assert_eq!(
                clause.args,
                vec![Value::Int(1), Value::Int(2), Value::Int(3), Value::Int(4)]
            );
        }
    }

    #[test]
    fn test_mismatched_rows_are_invalid() {
        let query = Query::insert([
            Row::new().set("a", 1).set("b", 2),
            Row::new().set("a", 3),
        ])
        .unwrap()
        .on_table("t");
        assert!(matches!(insert(&query), Err(QueryError::InvalidQuery(_))));
    }

    #[test]
    fn test_duplicate_key_defaults_to_proposed_values() {
        let query = Query::insert(rows())
            .unwrap()
            .on_table("table")
            .on_duplicate_key_update();
        assert_eq!(
            insert(&query).unwrap().sql(),
            "INSERT INTO `table` (`test`, `test2`) VALUES (%s, %s), (%s, %s) \
             ON DUPLICATE KEY UPDATE `test` = VALUES(`test`), `test2` = VALUES(`test2`)"
        );
    }

    #[test]
    fn test_duplicate_key_explicit_assignments_bind_after_rows() {
        let query = Query::insert([Row::new().set("id", 1).set("hits", 1)])
            .unwrap()
            .on_table("counter")
            .on_duplicate_key_update_with(Row::new().set("hits", 10));
        let clause = insert(&query).unwrap();
        assert_eq!(
            clause.sql(),
            "INSERT INTO `counter` (`id`, `hits`) VALUES (%s, %s) \
             ON DUPLICATE KEY UPDATE `hits` = %s"
        );
        assert_eq!(clause.args, vec![Value::Int(1), Value::Int(1), Value::Int(10)]);
    }
}
