#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use silo_core::{AsValue, GenericSqlWriter, SqlWriter, Value};
    use time::macros::{date, datetime, time};
    use uuid::Uuid;

    const WRITER: GenericSqlWriter = GenericSqlWriter::new();

    fn render(value: &Value) -> String {
        let mut out = String::new();
        WRITER.write_value(&mut out, value);
        out
    }

    #[test]
    fn value_bool() {
        let val: Value = true.into();
        assert_eq!(val, Value::Boolean(Some(true)));
        assert_ne!(val, Value::Boolean(Some(false)));
        assert_ne!(val, Value::Varchar(Some("true".into())));
        assert_eq!(render(&val), "true");
        assert_eq!(render(&false.into()), "false");
    }

    #[test]
    fn value_integers() {
        assert_eq!(Value::from(i8::MIN), Value::Int8(Some(-128)));
        assert_eq!(Value::from(9876543210u64), Value::UInt64(Some(9876543210)));
        assert_eq!(render(&7i32.into()), "7");
        assert_eq!(render(&(-42i64).into()), "-42");
        assert_eq!(render(&i128::MAX.into()), i128::MAX.to_string());
        assert_eq!(render(&255u8.into()), "255");
    }

    #[test]
    fn value_floats() {
        assert_eq!(Value::from(0.5f32), Value::Float32(Some(0.5)));
        assert_eq!(render(&1.5f64.into()), "1.5");
        assert_eq!(render(&3.0f64.into()), "3.0");
    }

    #[test]
    fn value_string() {
        let val: Value = "hello".into();
        assert_eq!(val, Value::Varchar(Some("hello".into())));
        assert_eq!(render(&val), "'hello'");
        // Embedded quotes are doubled
        assert_eq!(render(&"O'Brien".into()), "'O''Brien'");
        assert_eq!(render(&String::from("it''s").into()), "'it''''s'");
    }

    #[test]
    fn value_null() {
        assert_eq!(render(&Value::Null), "NULL");
        assert_eq!(render(&Value::Varchar(None)), "NULL");
        assert_eq!(render(&Value::Int32(None)), "NULL");
        let val = Option::<i32>::None.as_value();
        assert_eq!(val, Value::Int32(None));
        assert!(val.is_null());
        assert!(!Value::from(0i32).is_null());
    }

    #[test]
    fn value_option_and_box() {
        assert_eq!(Value::from(Some(9i16)), Value::Int16(Some(9)));
        assert_eq!(
            Value::from(Box::new("boxed".to_string())),
            Value::Varchar(Some("boxed".into()))
        );
        assert_eq!(Value::from(Option::<String>::None), Value::Varchar(None));
    }

    #[test]
    fn value_decimal() {
        let val: Value = Decimal::new(12345, 2).into();
        assert_eq!(val, Value::Decimal(Some(Decimal::new(12345, 2)), 0, 0));
        assert_eq!(render(&val), "123.45");
    }

    #[test]
    fn value_uuid() {
        let uuid = Uuid::parse_str("5e915574-bb30-4430-98cf-c5854f61fbbd").unwrap();
        assert_eq!(render(&uuid.into()), "'5e915574-bb30-4430-98cf-c5854f61fbbd'");
    }

    #[test]
    fn value_date_time() {
        assert_eq!(render(&date!(2024 - 05 - 17).into()), "'2024-05-17'");
        assert_eq!(render(&time!(09:30:00).into()), "'09:30:00.0'");
        assert_eq!(render(&time!(09:30:00.25).into()), "'09:30:00.25'");
        assert_eq!(
            render(&datetime!(2024-05-17 09:30:00).into()),
            "'2024-05-17T09:30:00.0'"
        );
    }

    #[test]
    fn value_blob() {
        let blob: Box<[u8]> = Box::new([0x01, 0xAB]);
        assert_eq!(render(&blob.into()), r"'\x01\xAB'");
    }
}
