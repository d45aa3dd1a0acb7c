//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for sandboxed file and env var manipulation.

use cosmos_config::CosmosConfig;
use figment::{
    Figment, Jail,
    providers::{Env, Format, Serialized, Toml},
};
use pretty_assertions::assert_eq;

#[test]
fn loads_database_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[database]
path = "/var/lib/cosmos/missions.db"
foreign_keys = false
"#,
        )?;

        let config: CosmosConfig = Figment::from(Serialized::defaults(CosmosConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.database.path, "/var/lib/cosmos/missions.db");
        assert!(!config.database.foreign_keys);
        assert_eq!(config.general.default_limit, 50);
        Ok(())
    });
}

#[test]
fn project_config_is_picked_up_by_load() {
    Jail::expect_with(|jail| {
        jail.create_dir(".cosmos")?;
        jail.create_file(
            ".cosmos/config.toml",
            r#"
[general]
default_limit = 5
"#,
        )?;

        let config = CosmosConfig::load().expect("config loads");
        assert_eq!(config.general.default_limit, 5);
        assert_eq!(config.database.path, "cosmos.db");
        Ok(())
    });
}

#[test]
fn env_overrides_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[database]
path = "from-toml.db"
"#,
        )?;
        jail.set_env("COSMOS_DATABASE__PATH", "from-env.db");

        let config: CosmosConfig = Figment::from(Serialized::defaults(CosmosConfig::default()))
            .merge(Toml::file("config.toml"))
            .merge(Env::prefixed("COSMOS_").split("__"))
            .extract()?;

        assert_eq!(config.database.path, "from-env.db");
        Ok(())
    });
}

#[test]
fn invalid_limit_in_toml_fails_load() {
    Jail::expect_with(|jail| {
        jail.create_dir(".cosmos")?;
        jail.create_file(
            ".cosmos/config.toml",
            r#"
[general]
default_limit = 0
"#,
        )?;

        assert!(CosmosConfig::load().is_err());
        Ok(())
    });
}
