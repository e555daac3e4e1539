/// Metadata attached to one mapped struct field: the backing column name and
/// whether the column is the primary key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnDef {
    pub name: &'static str,
    pub primary_key: bool,
}

impl ColumnDef {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            primary_key: false,
        }
    }

    pub const fn primary_key(name: &'static str) -> Self {
        Self {
            name,
            primary_key: true,
        }
    }
}
