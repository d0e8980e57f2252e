#[cfg(test)]
mod tests {
    use mytasks::api::placeholder::API_URL;
    use mytasks::libs::config::{Config, SourceConfig, CONFIG_FILE_NAME, ENV_API_URL, ENV_LIMIT};
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ConfigTestContext {
        _temp_dir: TempDir,
        config_path: PathBuf,
        api_url: String,
        limit: usize,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let config_path = temp_dir.path().join(CONFIG_FILE_NAME);
            ConfigTestContext {
                _temp_dir: temp_dir,
                config_path,
                api_url: "http://localhost:3000/todos".to_string(),
                limit: 5,
            }
        }
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.source.is_none());

        let source = SourceConfig::default();
        assert_eq!(source.api_url, API_URL);
        assert_eq!(source.limit, 20);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_nonexistent_config(ctx: &mut ConfigTestContext) {
        let config = Config::read_from(&ctx.config_path).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_config(ctx: &mut ConfigTestContext) {
        let config = Config {
            source: Some(SourceConfig {
                api_url: ctx.api_url.clone(),
                limit: ctx.limit,
            }),
        };
        config.save_to(&ctx.config_path).unwrap();

        let read_config = Config::read_from(&ctx.config_path).unwrap();
        let source = read_config.source.unwrap();
        assert_eq!(source.api_url, ctx.api_url);
        assert_eq!(source.limit, ctx.limit);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_unconfigured_source_is_omitted(ctx: &mut ConfigTestContext) {
        Config::default().save_to(&ctx.config_path).unwrap();
        let raw = std::fs::read_to_string(&ctx.config_path).unwrap();
        assert!(!raw.contains("source"));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_corrupt_config_is_an_error(ctx: &mut ConfigTestContext) {
        std::fs::write(&ctx.config_path, "{ source: ").unwrap();
        assert!(Config::read_from(&ctx.config_path).is_err());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_overrides(ctx: &mut ConfigTestContext) {
        let source = SourceConfig::default().with_overrides(Some(ctx.api_url.clone()), Some(" 7 ".to_string()));
        assert_eq!(source.api_url, ctx.api_url);
        assert_eq!(source.limit, 7);
    }

    #[test]
    fn test_invalid_overrides_are_ignored() {
        let source = SourceConfig::default().with_overrides(Some("   ".to_string()), Some("zero".to_string()));
        assert_eq!(source, SourceConfig::default());

        let source = SourceConfig::default().with_overrides(None, Some("0".to_string()));
        assert_eq!(source.limit, 20);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_zero_limit_in_file_falls_back_to_default(ctx: &mut ConfigTestContext) {
        std::fs::write(
            &ctx.config_path,
            format!(r#"{{"source": {{"api_url": "{}", "limit": 0}}}}"#, ctx.api_url),
        )
        .unwrap();
        std::env::remove_var(ENV_API_URL);
        std::env::remove_var(ENV_LIMIT);

        let config = Config::read_from(&ctx.config_path).unwrap();
        assert_eq!(config.source.as_ref().unwrap().limit, 0);

        let source = config.resolved_source();
        assert_eq!(source.api_url, ctx.api_url);
        assert_eq!(source.limit, 20);
    }

    #[test]
    fn test_positive_limit_is_kept() {
        let source = SourceConfig {
            api_url: "http://localhost:3000/todos".to_string(),
            limit: 3,
        };
        assert_eq!(source.clone().validated(), source);
    }
}
