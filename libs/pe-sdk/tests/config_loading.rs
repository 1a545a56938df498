#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Layered configuration loading: YAML file overlaid with `PE_SDK_*` variables.

use pe_query::DecodeMode;
use pe_sdk::{ConfigError, SdkConfig, Service};
use secrecy::ExposeSecret;
use std::io::Write;
use std::time::Duration;

fn yaml_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

const BASE: &str = r"
orchestrator_url: https://pe.example.com:8143
puppetdb_url: https://pe.example.com:8081
strict: false
http:
  request_timeout: 20s
  token: from-file
";

#[test]
fn loads_yaml_file() {
    let file = yaml_file(BASE);

    let config = temp_env::with_vars_unset(
        ["PE_SDK_STRICT", "PE_SDK_RBAC_URL", "PE_SDK_HTTP__TOKEN"],
        || SdkConfig::load(Some(file.path())).unwrap(),
    );

    assert_eq!(
        config.base_url(Service::Orchestrator),
        Some("https://pe.example.com:8143")
    );
    assert!(config.base_url(Service::Rbac).is_none());
    assert_eq!(config.http.request_timeout, Duration::from_secs(20));
    assert_eq!(config.http.token.as_ref().unwrap().expose_secret(), "from-file");
    assert_eq!(config.decode_mode(), DecodeMode::Lenient);
}

#[test]
fn environment_overrides_file() {
    let file = yaml_file(BASE);

    let config = temp_env::with_vars(
        [
            ("PE_SDK_STRICT", Some("true")),
            ("PE_SDK_RBAC_URL", Some("https://pe.example.com:4433")),
            ("PE_SDK_HTTP__REQUEST_TIMEOUT", Some("3s")),
            ("PE_SDK_HTTP__TOKEN", Some("from-env")),
        ],
        || SdkConfig::load(Some(file.path())).unwrap(),
    );

    assert_eq!(config.decode_mode(), DecodeMode::Strict);
    assert_eq!(
        config.base_url(Service::Rbac),
        Some("https://pe.example.com:4433")
    );
    assert_eq!(config.http.request_timeout, Duration::from_secs(3));
    assert_eq!(config.http.token.as_ref().unwrap().expose_secret(), "from-env");
}

#[test]
fn missing_file_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.yaml");

    let config = temp_env::with_vars(
        [("PE_SDK_PUPPETDB_URL", Some("https://pdb.example.com:8081"))],
        || SdkConfig::load(Some(&path)).unwrap(),
    );

    assert_eq!(
        config.base_url(Service::PuppetDb),
        Some("https://pdb.example.com:8081")
    );
    let client = config.api_client(Service::PuppetDb).unwrap();
    assert_eq!(client.decode_mode(), DecodeMode::Lenient);
}

#[test]
fn bad_duration_is_a_load_error() {
    let file = yaml_file("http:\n  request_timeout: whenever\n");

    let result = temp_env::with_vars_unset(["PE_SDK_HTTP__REQUEST_TIMEOUT"], || {
        SdkConfig::load(Some(file.path()))
    });

    assert!(matches!(result, Err(ConfigError::Load(_))));
}

#[test]
fn unknown_http_key_is_a_load_error() {
    let file = yaml_file("http:\n  retries: 3\n");

    let result = SdkConfig::load(Some(file.path()));

    assert!(matches!(result, Err(ConfigError::Load(_))));
}
