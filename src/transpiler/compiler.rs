//! Query compiler: alias resolution, verb dispatch and clause assembly.

use crate::ast::{Action, Field, Query, TableRef, Value};
use crate::error::{QueryError, QueryResult};
use crate::transpiler::alias::AliasAllocator;
use crate::transpiler::tokens::{Token, serialize_tokens};
use crate::transpiler::traits::SqlGenerator;

/// Tokens of one clause (or a whole statement) and the arguments they bind,
/// in placeholder order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Clause {
    pub tokens: Vec<Token>,
    pub args: Vec<Value>,
}

impl Clause {
    pub fn new() -> Self {
        Self::default()
    }

    /// A clause starting with `keyword`.
    pub fn keyword(keyword: &str) -> Self {
        Self {
            tokens: vec![Token::from(keyword)],
            args: Vec::new(),
        }
    }

    pub fn push(&mut self, token: impl Into<Token>) {
        self.tokens.push(token.into());
    }

    /// Emit one placeholder bound to `value`.
    pub fn bind(&mut self, placeholder: &str, value: Value) {
        self.tokens.push(Token::from(placeholder));
        self.args.push(value);
    }

    pub fn append(&mut self, other: Clause) {
        self.tokens.extend(other.tokens);
        self.args.extend(other.args);
    }

    /// Emit `(`, the tokens written by `body`, then `)`.
    ///
    /// On error nothing is closed; the error aborts the whole compile.
    pub fn bracketed<F>(&mut self, body: F) -> QueryResult<()>
    where
        F: FnOnce(&mut Clause) -> QueryResult<()>,
    {
        self.push("(");
        body(self)?;
        self.push(")");
        Ok(())
    }

    /// Emit each item through `emit`, with `separator` between them.
    pub fn separated<I, F>(&mut self, items: I, separator: &str, mut emit: F) -> QueryResult<()>
    where
        I: IntoIterator,
        F: FnMut(&mut Clause, I::Item) -> QueryResult<()>,
    {
        for (index, item) in items.into_iter().enumerate() {
            if index > 0 {
                self.push(separator);
            }
            emit(self, item)?;
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn sql(&self) -> String {
        serialize_tokens(&self.tokens)
    }
}

/// Lowers one [`Query`] to tokens and arguments.
///
/// Aliases are taken from the allocator when the compiler is created: the
/// main table first, then the joined table.
pub struct Compiler<'a> {
    pub(crate) query: &'a Query,
    pub(crate) generator: &'a dyn SqlGenerator,
    pub(crate) table: &'a TableRef,
    pub(crate) table_alias: String,
    pub(crate) join_alias: Option<String>,
}

impl<'a> Compiler<'a> {
    pub fn new(
        query: &'a Query,
        generator: &'a dyn SqlGenerator,
        aliases: &mut AliasAllocator,
    ) -> QueryResult<Self> {
        let table = query.table.as_ref().ok_or_else(|| {
            QueryError::Config("query requires a table: call on_table".to_string())
        })?;

        let table_alias = aliases.next_alias();
        let join_alias = query.join.as_ref().map(|_| aliases.next_alias());

        Ok(Self {
            query,
            generator,
            table,
            table_alias,
            join_alias,
        })
    }

    pub fn table_alias(&self) -> &str {
        &self.table_alias
    }

    pub fn join_alias(&self) -> Option<&str> {
        self.join_alias.as_deref()
    }

    /// Compile the full statement. Clauses are always emitted as
    /// verb, WHERE, GROUP BY, HAVING, ORDER BY, OFFSET, LIMIT.
    pub fn compile(&self, aliases: &mut AliasAllocator) -> QueryResult<Clause> {
        let mut statement = self.statement()?;
        statement.append(self.where_clause(aliases)?);
        statement.append(self.group_by_clause()?);
        statement.append(self.having_clause(aliases)?);
        statement.append(self.order_by_clause()?);
        statement.append(self.offset_clause());
        statement.append(self.limit_clause());
        Ok(statement)
    }

    /// The main verb clause, including FROM/JOIN where the verb needs them.
    pub fn statement(&self) -> QueryResult<Clause> {
        let action = self.query.action.as_ref().ok_or_else(|| {
            QueryError::invalid("no statement verb: call select, update, insert or delete")
        })?;

        if self.query.on_duplicate_key.is_some() && !matches!(action, Action::Insert { .. }) {
            return Err(QueryError::invalid(
                "on_duplicate_key_update requires an insert statement",
            ));
        }

        match action {
            Action::Select(fields) => self.select_clause(fields),
            Action::Update(assignments) => self.update_clause(assignments),
            Action::Insert { rows, mode } => self.insert_clause(rows, *mode),
            Action::Delete => self.delete_clause(),
        }
    }

    /// `alias.column` on the main table. A `"<table>.<column>"` name naming
    /// the main table drops its prefix.
    pub(crate) fn main_field(&self, name: &str) -> String {
        let column = strip_table(name, &self.table.name).unwrap_or(name);
        self.generator.qualified_field(&self.table_alias, column)
    }

    /// `alias.column` on the joined table, if there is one.
    pub(crate) fn join_field(&self, name: &str) -> Option<String> {
        let join = self.query.join.as_ref()?;
        let alias = self.join_alias.as_deref()?;
        let column = strip_table(name, &join.table.name).unwrap_or(name);
        Some(self.generator.qualified_field(alias, column))
    }

    /// Qualify a field with the joined table's alias when its name is
    /// prefixed by the joined table, otherwise with the main alias.
    pub(crate) fn resolve_field(&self, name: &str) -> String {
        if let Some(join) = &self.query.join {
            if strip_table(name, &join.table.name).is_some() {
                if let Some(qualified) = self.join_field(name) {
                    return qualified;
                }
            }
        }
        self.main_field(name)
    }

    /// Emit a field reference: qualified column, function call or raw text.
    pub(crate) fn field(&self, field: &Field, clause: &mut Clause) -> QueryResult<()> {
        match field {
            Field::Named(name) => {
                clause.push(self.resolve_field(name));
                Ok(())
            }
            Field::Function(call) => {
                clause.push(Token::function(self.generator.encode_function(&call.name)?));
                clause.bracketed(|inner| {
                    inner.separated(&call.args, ", ", |c, arg| self.field(arg, c))
                })
            }
            Field::Raw(text) => {
                clause.push(text.as_str());
                Ok(())
            }
        }
    }

    /// `table AS alias`
    pub(crate) fn aliased_table(&self, table: &TableRef, alias: &str, clause: &mut Clause) {
        clause.push(self.generator.table_name(table));
        clause.push("AS");
        clause.push(self.generator.quote_identifier(alias));
    }
}

fn strip_table<'n>(name: &'n str, table: &str) -> Option<&'n str> {
    name.strip_prefix(table)?.strip_prefix('.')
}
