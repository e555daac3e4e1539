use crate::{ColumnDef, Result, Row, SiloError, TableRef};

/// A struct bound to a database table through a static descriptor.
///
/// Usually implemented with `#[derive(Entity)]`; types that need full control
/// can implement it by hand, the descriptor is plain data either way.
pub trait Entity {
    /// The backing table, optionally schema qualified.
    fn table_ref() -> &'static TableRef;

    /// Mapped columns in field declaration order. The order is load bearing:
    /// it fixes the INSERT column list and the positional binding order,
    /// which must agree for 1-indexed binding to be correct.
    fn columns() -> &'static [ColumnDef];

    /// Current field values, one per entry of [`Entity::columns`], in the
    /// same order.
    fn row(&self) -> Row;

    /// The single primary key column required by keyed statements.
    fn primary_key_def() -> Result<&'static ColumnDef> {
        let table = Self::table_ref().name;
        let mut keys = Self::columns().iter().filter(|c| c.primary_key);
        let Some(first) = keys.next() else {
            return Err(SiloError::NoPrimaryKey { table }.into());
        };
        let extra = keys.count();
        if extra > 0 {
            return Err(SiloError::AmbiguousPrimaryKey {
                table,
                count: extra + 1,
            }
            .into());
        }
        Ok(first)
    }
}
