use crate::{
    Connection, ConnectionProvider, Driver, Entity, Query, Result, SiloError, SqlWriter, Value,
};

/// Cursor type produced by a provider's connections.
pub type CursorOf<P> =
    <<<P as ConnectionProvider>::Driver as Driver>::Connection as Connection>::Cursor;

/// Entry point for the persistence operations.
///
/// SQL synthesis is pure and happens before any I/O; every operation then
/// opens a fresh connection from the injected provider, runs one statement
/// and returns. No state is retained across calls.
pub struct Repository<P: ConnectionProvider> {
    provider: P,
}

impl<P: ConnectionProvider> Repository<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// INSERT the entity, binding every mapped field in declaration order.
    /// Returns the number of affected rows.
    pub fn persist<E: Entity>(&self, entity: &E) -> Result<u64> {
        let mut sql = String::with_capacity(256);
        self.provider
            .driver()
            .sql_writer()
            .write_insert::<E>(&mut sql)?;
        let query = Query::with_params(sql, entity.row().into_vec());
        log::debug!("persist: {}", query);
        let mut connection = self.provider.connect()?;
        Ok(connection.execute(&query)?.rows_affected)
    }

    /// SELECT every row of the entity's table.
    pub fn select_all<E: Entity>(&self) -> Result<CursorOf<P>> {
        let mut sql = String::with_capacity(128);
        self.provider
            .driver()
            .sql_writer()
            .write_select::<E>(&mut sql, None)?;
        self.run_select(sql)
    }

    /// SELECT the rows whose primary key equals the given typed identifier.
    pub fn select_filtered<E: Entity>(&self, id: &Value) -> Result<CursorOf<P>> {
        let mut sql = String::with_capacity(128);
        self.provider
            .driver()
            .sql_writer()
            .write_select::<E>(&mut sql, Some(id))?;
        self.run_select(sql)
    }

    /// SELECT by a textual identifier.
    pub fn select_by_id<E: Entity>(&self, id: &str) -> Result<CursorOf<P>> {
        let mut sql = String::with_capacity(128);
        self.provider
            .driver()
            .sql_writer()
            .write_select_by_id::<E>(&mut sql, id)?;
        self.run_select(sql)
    }

    /// DELETE by primary key, or the whole table when no identifier is given.
    /// Returns whether any row was removed.
    pub fn delete<E: Entity>(&self, id: Option<&Value>) -> Result<bool> {
        let mut sql = String::with_capacity(128);
        self.provider
            .driver()
            .sql_writer()
            .write_delete::<E>(&mut sql, id)?;
        let query = Query::new(sql);
        log::debug!("delete: {}", query);
        let mut connection = self.provider.connect()?;
        Ok(connection.execute(&query)?.rows_affected > 0)
    }

    /// UPDATE the row matching the entity's current primary key value.
    /// Binds all non-key values in field order, then the key value, matching
    /// the placeholder order of the synthesized statement.
    pub fn update<E: Entity>(&self, entity: &E) -> Result<bool> {
        let mut sql = String::with_capacity(256);
        self.provider
            .driver()
            .sql_writer()
            .write_update::<E>(&mut sql)?;
        let mut params = Vec::with_capacity(E::columns().len());
        let mut key = None;
        for (column, value) in E::columns().iter().zip(entity.row().into_vec()) {
            if column.primary_key {
                key = Some(value);
            } else {
                params.push(value);
            }
        }
        // write_update succeeding guarantees a single key column
        let Some(key) = key else {
            return Err(SiloError::NoPrimaryKey {
                table: E::table_ref().name,
            }
            .into());
        };
        params.push(key);
        let query = Query::with_params(sql, params);
        log::debug!("update: {}", query);
        let mut connection = self.provider.connect()?;
        Ok(connection.execute(&query)?.rows_affected > 0)
    }

    fn run_select(&self, sql: String) -> Result<CursorOf<P>> {
        let query = Query::new(sql);
        log::debug!("select: {}", query);
        self.provider.connect()?.fetch(&query)
    }
}
