use crate::{Query, Result, RowLabeled, RowsAffected, SqlWriter};

/// Ties together the pieces a backend must provide.
pub trait Driver {
    type Connection: Connection;
    type SqlWriter: SqlWriter;

    fn sql_writer(&self) -> Self::SqlWriter;
}

/// A live database connection.
///
/// Implementations prepare the statement, bind `Query::params` positionally
/// (1-indexed: `params[0]` goes to the first placeholder) and execute.
pub trait Connection {
    type Cursor: Cursor;

    /// Run a mutation statement, returning the affected row count.
    fn execute(&mut self, query: &Query) -> Result<RowsAffected>;

    /// Run a read statement. Consumes the connection so the returned cursor
    /// stays live for the caller to drain.
    fn fetch(self, query: &Query) -> Result<Self::Cursor>;
}

/// Server-side iterable result set returned by a SELECT execution.
pub trait Cursor {
    fn next_row(&mut self) -> Result<Option<RowLabeled>>;
}

/// Opens one connection per call.
///
/// Implementations typically re-read [`crate::ConnectionConfig`] on every
/// `connect`; nothing is pooled or reused between operations.
pub trait ConnectionProvider {
    type Driver: Driver;

    fn driver(&self) -> &Self::Driver;

    fn connect(&self) -> Result<<Self::Driver as Driver>::Connection>;
}
