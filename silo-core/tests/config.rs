#[cfg(test)]
mod tests {
    use silo_core::{ConnectionConfig, SiloError};
    use std::io::Write;

    const PROPERTIES: &str = "\
        # Connection settings\n\
        driver = org.duckdb.Driver\n\
        url=jdbc:duckdb:/var/data/app.db\n\
        user: admin\n\
        ! legacy comment style\n\
        password=hunter2\n\
        pool_size=16\n\
    ";

    #[test]
    fn parse_properties() {
        let config = ConnectionConfig::parse(PROPERTIES).unwrap();
        assert_eq!(config.driver, "org.duckdb.Driver");
        assert_eq!(config.url, "jdbc:duckdb:/var/data/app.db");
        assert_eq!(config.user, "admin");
        assert_eq!(config.password, "hunter2");
    }

    #[test]
    fn parse_missing_key() {
        let error = ConnectionConfig::parse("driver=x\nurl=y\nuser=z\n")
            .unwrap_err()
            .downcast::<SiloError>()
            .unwrap();
        assert_eq!(error, SiloError::MissingConfigKey("password"));
    }

    #[test]
    fn parse_colon_in_url_value() {
        // `url=...` splits on the first separator only, later colons survive
        let config =
            ConnectionConfig::parse("driver=d\nurl=jdbc:postgresql://host/db\nuser=u\npassword=p")
                .unwrap();
        assert_eq!(config.url, "jdbc:postgresql://host/db");
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(PROPERTIES.as_bytes()).unwrap();
        let config = ConnectionConfig::load(file.path()).unwrap();
        assert_eq!(config.user, "admin");
    }

    #[test]
    fn load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let error = ConnectionConfig::load(dir.path().join("nope.properties")).unwrap_err();
        assert!(error.to_string().contains("nope.properties"));
    }

    #[test]
    fn debug_redacts_password() {
        let config = ConnectionConfig {
            driver: "d".into(),
            url: "u".into(),
            user: "admin".into(),
            password: "hunter2".into(),
        };
        let rendered = format!("{:?}", config);
        assert!(rendered.contains("<redacted>"));
        assert!(!rendered.contains("hunter2"));
    }
}
