use super::*;

use std::collections::HashMap;

use clap::error::ErrorKind;

fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |name| vars.get(name).cloned()
}

#[test]
fn defaults_without_file_or_env() {
    let settings = settings_from(None, env_from(&[]));
    assert_eq!(settings, Settings::default());
    assert_eq!(settings.bind_addr, "0.0.0.0:8080");
    assert_eq!(settings.shutdown_timeout, Duration::from_secs(5));
}

#[test]
fn file_overrides_defaults() {
    let file = r#"
bind_addr = "127.0.0.1:9000"
static_dir = "/srv/violin"
request_timeout_secs = 10
shutdown_timeout_secs = "2"
"#;
    let settings = settings_from(Some(file), env_from(&[]));
    assert_eq!(settings.bind_addr, "127.0.0.1:9000");
    assert_eq!(settings.static_dir, PathBuf::from("/srv/violin"));
    assert_eq!(settings.request_timeout, Duration::from_secs(10));
    assert_eq!(settings.shutdown_timeout, Duration::from_secs(2));
}

#[test]
fn env_overrides_file() {
    let file = r#"bind_addr = "127.0.0.1:9000""#;
    let settings = settings_from(
        Some(file),
        env_from(&[
            ("VIOLIN_BIND_ADDR", "127.0.0.1:7000"),
            ("VIOLIN_SHUTDOWN_TIMEOUT_SECS", "30"),
            ("RUST_LOG", "debug"),
        ]),
    );
    assert_eq!(settings.bind_addr, "127.0.0.1:7000");
    assert_eq!(settings.shutdown_timeout, Duration::from_secs(30));
    assert_eq!(settings.log_filter, "debug");
}

#[test]
fn app_prefixed_env_wins_over_violin_prefix() {
    let settings = settings_from(
        None,
        env_from(&[
            ("VIOLIN_STATIC_DIR", "./a"),
            ("APP__STATIC_DIR", "./b"),
        ]),
    );
    assert_eq!(settings.static_dir, PathBuf::from("./b"));
}

#[test]
fn unparseable_values_are_ignored() {
    let settings = settings_from(
        Some("this is not toml"),
        env_from(&[("VIOLIN_REQUEST_TIMEOUT_SECS", "soon")]),
    );
    assert_eq!(settings, Settings::default());
}

#[test]
fn command_line_wins_over_env() {
    let mut settings = settings_from(
        Some(r#"request_timeout_secs = 10"#),
        env_from(&[("VIOLIN_BIND_ADDR", "127.0.0.1:7000"), ("RUST_LOG", "debug")]),
    );
    let cli = Cli::try_parse_from([
        "server",
        "--bind-addr",
        "127.0.0.1:9999",
        "--static-dir",
        "/srv/assets",
        "--shutdown-timeout-secs",
        "9",
        "--log-filter",
        "warn",
    ])
    .expect("parse");
    cli.apply(&mut settings);

    assert_eq!(settings.bind_addr, "127.0.0.1:9999");
    assert_eq!(settings.static_dir, PathBuf::from("/srv/assets"));
    assert_eq!(settings.request_timeout, Duration::from_secs(10));
    assert_eq!(settings.shutdown_timeout, Duration::from_secs(9));
    assert_eq!(settings.log_filter, "warn");
}

#[test]
fn empty_command_line_changes_nothing() {
    let mut settings = settings_from(None, env_from(&[]));
    Cli::try_parse_from(["server"]).expect("parse").apply(&mut settings);
    assert_eq!(settings, Settings::default());
}

#[test]
fn command_line_rejects_bad_timeouts_and_offers_help() {
    let err = Cli::try_parse_from(["server", "--request-timeout-secs", "soon"])
        .expect_err("should fail");
    assert_eq!(err.kind(), ErrorKind::ValueValidation);

    let help = Cli::try_parse_from(["server", "--help"]).expect_err("help");
    assert_eq!(help.kind(), ErrorKind::DisplayHelp);
    assert!(help.to_string().contains("--bind-addr"));
}
