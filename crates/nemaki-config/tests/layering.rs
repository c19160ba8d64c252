use figment::Jail;
use nemaki_config::{AuthScheme, NemakiConfig};
use pretty_assertions::assert_eq;

#[test]
fn project_toml_overrides_defaults() {
    Jail::expect_with(|jail| {
        std::fs::create_dir(jail.directory().join(".nemaki")).map_err(|e| e.to_string())?;
        jail.create_file(
            ".nemaki/config.toml",
            r#"
            [server]
            base_url = "https://dms.example.com"

            [auth]
            scheme = "basic_token"

            [cascade]
            root_concurrency = 5
            "#,
        )?;

        let config = NemakiConfig::load().expect("config loads");
        assert_eq!(config.server.base_url, "https://dms.example.com");
        assert_eq!(config.auth.scheme, AuthScheme::BasicToken);
        assert_eq!(config.cascade.root_concurrency, 5);
        assert_eq!(config.cascade.descendant_concurrency, 3);
        Ok(())
    });
}

#[test]
fn env_beats_project_toml() {
    Jail::expect_with(|jail| {
        std::fs::create_dir(jail.directory().join(".nemaki")).map_err(|e| e.to_string())?;
        jail.create_file(
            ".nemaki/config.toml",
            "[repository]\ndefault_id = \"from-file\"\n",
        )?;
        jail.set_env("NEMAKI_REPOSITORY__DEFAULT_ID", "from-env");

        let config = NemakiConfig::load().expect("config loads");
        assert_eq!(config.repository.default_id, "from-env");
        Ok(())
    });
}

#[test]
fn invalid_values_fail_validation() {
    Jail::expect_with(|jail| {
        jail.set_env("NEMAKI_CASCADE__DESCENDANT_CONCURRENCY", "0");
        assert!(NemakiConfig::load().is_err());
        Ok(())
    });
}
