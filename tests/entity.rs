#[cfg(test)]
mod tests {
    use silo::{ColumnDef, Entity, Value};
    use time::macros::date;
    use uuid::Uuid;

    #[derive(Entity)]
    #[silo(table = "person", schema = "public")]
    struct Person {
        #[silo(primary_key)]
        id: i64,
        #[silo]
        name: String,
        #[silo]
        age: i32,
    }

    #[derive(Entity)]
    struct Ledger {
        #[silo(column = "entry_id", primary_key)]
        _id: Uuid,
        #[silo(column = "booked_on")]
        _day: time::Date,
        // Not persisted
        _dirty: bool,
        #[silo]
        _amount: rust_decimal::Decimal,
    }

    #[derive(Entity)]
    #[silo(table = "legacy", prefix_scan)]
    struct Legacy {
        #[silo(primary_key)]
        _id: i64,
        #[silo]
        _name: String,
        _cache: Option<String>,
        #[silo]
        _ignored_after_gap: i32,
    }

    #[derive(Entity)]
    struct Unmapped {
        _scratch: String,
    }

    #[test]
    fn table_defaults_to_type_name() {
        assert_eq!(Ledger::table_ref().name, "Ledger");
        assert_eq!(Ledger::table_ref().schema, "");
        assert_eq!(Ledger::table_ref().full_name(), "Ledger");
    }

    #[test]
    fn table_attribute_overrides() {
        assert_eq!(Person::table_ref().name, "person");
        assert_eq!(Person::table_ref().schema, "public");
        assert_eq!(Person::table_ref().full_name(), "public.person");
    }

    #[test]
    fn columns_in_declaration_order() {
        let names = Person::columns().iter().map(|c| c.name).collect::<Vec<_>>();
        assert_eq!(names, ["id", "name", "age"]);
        assert!(Person::columns()[0].primary_key);
        assert!(!Person::columns()[1].primary_key);
    }

    #[test]
    fn column_rename_and_underscore_stripping() {
        let names = Ledger::columns().iter().map(|c| c.name).collect::<Vec<_>>();
        assert_eq!(names, ["entry_id", "booked_on", "amount"]);
    }

    #[test]
    fn unattributed_fields_are_skipped() {
        // `_dirty` carries no attribute and does not appear anywhere
        assert!(Ledger::columns().iter().all(|c| c.name != "dirty"));
        assert_eq!(Ledger::columns().len(), 3);
    }

    #[test]
    fn prefix_scan_stops_at_first_gap() {
        let names = Legacy::columns().iter().map(|c| c.name).collect::<Vec<_>>();
        assert_eq!(names, ["id", "name"]);
    }

    #[test]
    fn struct_with_no_mapped_fields() {
        assert!(Unmapped::columns().is_empty());
        let row = Unmapped {
            _scratch: "x".into(),
        }
        .row();
        assert!(row.is_empty());
    }

    #[test]
    fn primary_key_def() {
        let key: &ColumnDef = Person::primary_key_def().unwrap();
        assert_eq!(key.name, "id");
    }

    #[test]
    fn row_values_follow_columns() {
        let person = Person {
            id: 7,
            name: "Ada".into(),
            age: 36,
        };
        assert_eq!(
            person.row().as_ref(),
            [
                Value::Int64(Some(7)),
                Value::Varchar(Some("Ada".into())),
                Value::Int32(Some(36)),
            ]
        );

        let uuid = Uuid::parse_str("5e915574-bb30-4430-98cf-c5854f61fbbd").unwrap();
        let ledger = Ledger {
            _id: uuid,
            _day: date!(2024 - 05 - 17),
            _dirty: true,
            _amount: rust_decimal::Decimal::new(12345, 2),
        };
        let row = ledger.row();
        assert_eq!(row.len(), 3);
        assert_eq!(row[0], Value::Uuid(Some(uuid)));
        assert_eq!(row[1], Value::Date(Some(date!(2024 - 05 - 17))));
        assert_eq!(
            row[2],
            Value::Decimal(Some(rust_decimal::Decimal::new(12345, 2)), 0, 0)
        );
    }
}
