//! Tests for TOML configuration parsing.

use super::ConfigError;
use super::toml::{TomlConfig, default_config_template};

mod parsing {
    use super::*;

    #[test]
    fn parse_empty_config() {
        let config = TomlConfig::parse("").unwrap();

        assert!(config.enumerate.scope.is_none());
        assert!(config.enumerate.resource_type.is_none());
        assert!(config.enumerate.buffer_size.is_none());
        assert!(!config.enumerate.drain);
        assert!(config.filter.include.is_empty());
        assert!(config.filter.exclude.is_empty());
        assert!(config.filter.display_types.is_empty());
        assert!(config.output.format.is_none());
    }

    #[test]
    fn parse_enumerate_section() {
        let toml = r#"
            [enumerate]
            scope = "connected"
            resource_type = "disk"
            buffer_size = 4096
            drain = true
        "#;

        let config = TomlConfig::parse(toml).unwrap();
        let enumerate = &config.enumerate;

        assert_eq!(enumerate.scope.as_deref(), Some("connected"));
        assert_eq!(enumerate.resource_type.as_deref(), Some("disk"));
        assert_eq!(enumerate.buffer_size, Some(4096));
        assert!(enumerate.drain);
    }

    #[test]
    fn parse_filter_section() {
        let toml = r#"
            [filter]
            include = ["^\\\\\\\\FILESERVER", "public"]
            exclude = ['\$$']
            display_types = ["server", "share"]
        "#;

        let config = TomlConfig::parse(toml).unwrap();
        let filter = &config.filter;

        assert_eq!(filter.include.len(), 2);
        assert_eq!(filter.include[0], r"^\\\\FILESERVER");
        assert_eq!(filter.exclude, vec![r"\$$".to_string()]);
        assert_eq!(filter.display_types, vec!["server", "share"]);
    }

    #[test]
    fn parse_output_section() {
        let config = TomlConfig::parse("[output]\nformat = \"json\"\n").unwrap();
        assert_eq!(config.output.format.as_deref(), Some("json"));
    }

    #[test]
    fn values_are_kept_as_strings_until_validation() {
        let config = TomlConfig::parse("[enumerate]\nscope = \"nowhere\"\n").unwrap();
        assert_eq!(config.enumerate.scope.as_deref(), Some("nowhere"));
    }
}

mod rejection {
    use super::*;

    #[test]
    fn unknown_field_is_rejected() {
        let result = TomlConfig::parse("[enumerate]\ndepth = 3\n");
        assert!(matches!(result, Err(ConfigError::TomlParse(_))));
    }

    #[test]
    fn unknown_section_is_rejected() {
        let result = TomlConfig::parse("[connect]\nuser = \"admin\"\n");
        assert!(matches!(result, Err(ConfigError::TomlParse(_))));
    }

    #[test]
    fn wrong_value_type_is_rejected() {
        let result = TomlConfig::parse("[enumerate]\nbuffer_size = \"big\"\n");
        assert!(matches!(result, Err(ConfigError::TomlParse(_))));
    }

    #[test]
    fn malformed_toml_is_rejected() {
        let result = TomlConfig::parse("[enumerate\nscope = ");
        assert!(matches!(result, Err(ConfigError::TomlParse(_))));
    }
}

mod load {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[enumerate]\nscope = \"remembered\"").unwrap();

        let config = TomlConfig::load(file.path()).unwrap();
        assert_eq!(config.enumerate.scope.as_deref(), Some("remembered"));
    }

    #[test]
    fn load_missing_file_returns_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        let result = TomlConfig::load(&path);
        assert!(matches!(result, Err(ConfigError::FileRead { path: p, .. }) if p == path));
    }
}

mod template {
    use super::*;

    #[test]
    fn template_parses() {
        let config = TomlConfig::parse(&default_config_template()).unwrap();

        assert_eq!(config.enumerate.scope.as_deref(), Some("global"));
        assert_eq!(config.enumerate.resource_type.as_deref(), Some("any"));
        assert!(config.enumerate.buffer_size.is_none());
        assert!(!config.enumerate.drain);
        assert!(config.filter.include.is_empty());
        assert!(config.output.format.is_none());
    }

    #[test]
    fn template_mentions_every_section() {
        let template = default_config_template();

        assert!(template.contains("[enumerate]"));
        assert!(template.contains("[filter]"));
        assert!(template.contains("[output]"));
    }
}
