use figment::Jail;
use pretty_assertions::assert_eq;
use swatch_config::SwatchConfig;

#[test]
fn env_overrides_scalar_fields() {
    Jail::expect_with(|jail| {
        jail.set_env("SWATCH_PUBLISH", "dist");
        jail.set_env("SWATCH_FETCH_TIMEOUT_SECS", "30");

        let config = SwatchConfig::load(jail.directory()).expect("config loads");
        assert_eq!(config.publish, "dist");
        assert_eq!(config.fetch_timeout_secs, Some(30));
        Ok(())
    });
}

#[test]
fn env_beats_config_file() {
    Jail::expect_with(|jail| {
        jail.create_file("swatch.toml", "publish = \"from-file\"\ntemplates = \"theme\"\n")?;
        jail.set_env("SWATCH_PUBLISH", "from-env");

        let config = SwatchConfig::load(jail.directory()).expect("config loads");
        assert_eq!(config.publish, "from-env");
        assert_eq!(config.templates, "theme");
        Ok(())
    });
}

#[test]
fn double_underscore_reaches_nested_groups() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "swatch.toml",
            "[groups.buttons]\ndescription = \"Things you click\"\n",
        )?;
        jail.set_env("SWATCH_GROUPS__BUTTONS__LABEL", "Buttons & links");

        let config = SwatchConfig::load(jail.directory()).expect("config loads");
        let buttons = &config.groups["buttons"];
        assert_eq!(buttons.label.as_deref(), Some("Buttons & links"));
        assert_eq!(buttons.description.as_deref(), Some("Things you click"));
        Ok(())
    });
}

#[test]
fn log_filter_variable_is_ignored() {
    Jail::expect_with(|jail| {
        jail.set_env("SWATCH_LOG", "debug");

        let config = SwatchConfig::load(jail.directory()).expect("config loads");
        assert_eq!(config, SwatchConfig::default());
        Ok(())
    });
}
