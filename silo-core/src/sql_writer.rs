use crate::{Entity, Result, SiloError, TableRef, Value, separated_by};
use std::fmt::Write;
use time::{Date, Time};

macro_rules! write_integer {
    ($out:ident, $value:expr) => {{
        let mut buffer = itoa::Buffer::new();
        $out.push_str(buffer.format($value));
    }};
}
macro_rules! write_float {
    ($out:ident, $value:expr) => {{
        let mut buffer = ryu::Buffer::new();
        $out.push_str(buffer.format($value));
    }};
}

/// Renders descriptors, literals and full statements into SQL text.
///
/// The default methods produce the generic dialect; a driver can override
/// individual pieces without touching the statement builders.
pub trait SqlWriter {
    fn write_table_ref(&self, out: &mut String, table: &TableRef) {
        if !table.schema.is_empty() {
            out.push_str(table.schema);
            out.push('.');
        }
        out.push_str(table.name);
    }

    fn write_value(&self, out: &mut String, value: &Value) {
        let _ = match value {
            Value::Null
            | Value::Boolean(None)
            | Value::Int8(None)
            | Value::Int16(None)
            | Value::Int32(None)
            | Value::Int64(None)
            | Value::Int128(None)
            | Value::UInt8(None)
            | Value::UInt16(None)
            | Value::UInt32(None)
            | Value::UInt64(None)
            | Value::UInt128(None)
            | Value::Float32(None)
            | Value::Float64(None)
            | Value::Decimal(None, ..)
            | Value::Varchar(None)
            | Value::Blob(None)
            | Value::Date(None)
            | Value::Time(None)
            | Value::Timestamp(None)
            | Value::TimestampWithTimezone(None)
            | Value::Uuid(None) => self.write_value_none(out),
            Value::Boolean(Some(v)) => self.write_value_bool(out, *v),
            Value::Int8(Some(v)) => write_integer!(out, *v),
            Value::Int16(Some(v)) => write_integer!(out, *v),
            Value::Int32(Some(v)) => write_integer!(out, *v),
            Value::Int64(Some(v)) => write_integer!(out, *v),
            Value::Int128(Some(v)) => write_integer!(out, *v),
            Value::UInt8(Some(v)) => write_integer!(out, *v),
            Value::UInt16(Some(v)) => write_integer!(out, *v),
            Value::UInt32(Some(v)) => write_integer!(out, *v),
            Value::UInt64(Some(v)) => write_integer!(out, *v),
            Value::UInt128(Some(v)) => write_integer!(out, *v),
            Value::Float32(Some(v)) => write_float!(out, *v),
            Value::Float64(Some(v)) => write_float!(out, *v),
            Value::Decimal(Some(v), ..) => drop(write!(out, "{}", v)),
            Value::Varchar(Some(v)) => self.write_value_string(out, v),
            Value::Blob(Some(v)) => self.write_value_blob(out, v.as_ref()),
            Value::Date(Some(v)) => {
                out.push('\'');
                self.write_value_date(out, v);
                out.push('\'');
            }
            Value::Time(Some(v)) => {
                out.push('\'');
                self.write_value_time(out, v);
                out.push('\'');
            }
            Value::Timestamp(Some(v)) => {
                out.push('\'');
                self.write_value_date(out, &v.date());
                out.push('T');
                self.write_value_time(out, &v.time());
                out.push('\'');
            }
            Value::TimestampWithTimezone(Some(v)) => {
                out.push('\'');
                self.write_value_date(out, &v.date());
                out.push('T');
                self.write_value_time(out, &v.time());
                let _ = write!(
                    out,
                    "{:+03}:{:02}",
                    v.offset().whole_hours(),
                    v.offset().minutes_past_hour().abs()
                );
                out.push('\'');
            }
            Value::Uuid(Some(v)) => drop(write!(out, "'{}'", v)),
        };
    }

    fn write_value_none(&self, out: &mut String) {
        out.push_str("NULL")
    }

    fn write_value_bool(&self, out: &mut String, value: bool) {
        out.push_str(["false", "true"][value as usize])
    }

    fn write_value_string(&self, out: &mut String, value: &str) {
        out.push('\'');
        let mut position = 0;
        for (i, c) in value.char_indices() {
            if c == '\'' {
                out.push_str(&value[position..i]);
                out.push_str("''");
                position = i + 1;
            }
        }
        out.push_str(&value[position..]);
        out.push('\'');
    }

    fn write_value_blob(&self, out: &mut String, value: &[u8]) {
        out.push('\'');
        for b in value {
            let _ = write!(out, "\\x{:02X}", b);
        }
        out.push('\'');
    }

    fn write_value_date(&self, out: &mut String, value: &Date) {
        let _ = write!(
            out,
            "{:04}-{:02}-{:02}",
            value.year(),
            value.month() as u8,
            value.day()
        );
    }

    fn write_value_time(&self, out: &mut String, value: &Time) {
        let mut subsecond = value.nanosecond();
        let mut width = 9;
        while width > 1 && subsecond % 10 == 0 {
            subsecond /= 10;
            width -= 1;
        }
        let _ = write!(
            out,
            "{:02}:{:02}:{:02}.{:0width$}",
            value.hour(),
            value.minute(),
            value.second(),
            subsecond
        );
    }

    /// `INSERT INTO {schema.}table(col1,col2) VALUES (?,?)`
    ///
    /// Column list and placeholder list are produced from the same column
    /// sequence, so their lengths and order always agree.
    fn write_insert<E: Entity>(&self, out: &mut String) -> Result<()>
    where
        Self: Sized,
    {
        let columns = E::columns();
        if columns.is_empty() {
            return Err(SiloError::NoColumns {
                table: E::table_ref().name,
            }
            .into());
        }
        out.push_str("INSERT INTO ");
        self.write_table_ref(out, E::table_ref());
        out.push('(');
        separated_by(out, columns, |out, c| out.push_str(c.name), ",");
        out.push_str(") VALUES (");
        separated_by(out, columns, |out, _| out.push('?'), ",");
        out.push(')');
        Ok(())
    }

    /// `SELECT * FROM {schema.}table`, with a `WHERE pk=<literal>;` suffix
    /// when an identifier is supplied.
    fn write_select<E: Entity>(&self, out: &mut String, filter: Option<&Value>) -> Result<()>
    where
        Self: Sized,
    {
        out.push_str("SELECT * FROM ");
        self.write_table_ref(out, E::table_ref());
        if let Some(id) = filter {
            self.write_key_filter::<E>(out, id)?;
            out.push(';');
        }
        Ok(())
    }

    /// Same shape as the filtered select, restricted to a textual identifier.
    fn write_select_by_id<E: Entity>(&self, out: &mut String, id: &str) -> Result<()>
    where
        Self: Sized,
    {
        self.write_select::<E>(out, Some(&Value::Varchar(Some(id.to_owned()))))
    }

    /// `DELETE FROM {schema.}table;`, filtered by primary key when an
    /// identifier is supplied.
    fn write_delete<E: Entity>(&self, out: &mut String, filter: Option<&Value>) -> Result<()>
    where
        Self: Sized,
    {
        out.push_str("DELETE FROM ");
        self.write_table_ref(out, E::table_ref());
        if let Some(id) = filter {
            self.write_key_filter::<E>(out, id)?;
        }
        out.push(';');
        Ok(())
    }

    /// `UPDATE {schema.}table SET nonPk1=?,nonPk2=? WHERE pk=?;`
    ///
    /// Requires exactly one primary key column; it is excluded from the SET
    /// list and bound last.
    fn write_update<E: Entity>(&self, out: &mut String) -> Result<()>
    where
        Self: Sized,
    {
        let table = E::table_ref();
        let columns = E::columns();
        if columns.is_empty() {
            return Err(SiloError::NoColumns { table: table.name }.into());
        }
        let key = E::primary_key_def()?;
        if columns.iter().all(|c| c.primary_key) {
            return Err(SiloError::NothingToUpdate { table: table.name }.into());
        }
        out.push_str("UPDATE ");
        self.write_table_ref(out, table);
        out.push_str(" SET ");
        separated_by(
            out,
            columns.iter().filter(|c| !c.primary_key),
            |out, c| {
                out.push_str(c.name);
                out.push_str("=?");
            },
            ",",
        );
        out.push_str(" WHERE ");
        out.push_str(key.name);
        out.push_str("=?;");
        Ok(())
    }

    /// ` WHERE pk=<literal>` fragment shared by filtered reads and deletes.
    /// Fails on types with zero or multiple primary key columns instead of
    /// emitting malformed SQL.
    fn write_key_filter<E: Entity>(&self, out: &mut String, id: &Value) -> Result<()>
    where
        Self: Sized,
    {
        let key = E::primary_key_def()?;
        out.push_str(" WHERE ");
        out.push_str(key.name);
        out.push('=');
        self.write_value(out, id);
        Ok(())
    }
}

pub struct GenericSqlWriter;

impl GenericSqlWriter {
    pub const fn new() -> Self {
        Self {}
    }
}

impl Default for GenericSqlWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl SqlWriter for GenericSqlWriter {}
