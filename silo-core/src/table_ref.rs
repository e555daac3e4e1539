/// Reference to the table backing an entity. An empty `schema` means the
/// entity does not declare one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableRef {
    pub name: &'static str,
    pub schema: &'static str,
}

impl TableRef {
    pub const fn new(name: &'static str, schema: &'static str) -> Self {
        Self { name, schema }
    }

    pub fn full_name(&self) -> String {
        let mut result = String::new();
        if !self.schema.is_empty() {
            result.push_str(self.schema);
            result.push('.');
        }
        result.push_str(self.name);
        result
    }
}
