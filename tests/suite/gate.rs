//! Credential gate scenarios.
//!
//! The gate runs against an injected environment snapshot, so no test
//! here touches real process environment variables.

use financescope::config::{ApiKeys, ScopeConfig};
use financescope::gate::{ApiKey, CREDENTIAL_VAR, check_credential};

use crate::common::{TEST_KEY, empty_env, env_with};

fn config_with_key(openai: &str) -> ScopeConfig {
    ScopeConfig {
        api_keys: Some(ApiKeys {
            openai: Some(openai.to_string()),
        }),
    }
}

#[test]
fn missing_credential_halts() {
    let env = empty_env();

    let err = check_credential(CREDENTIAL_VAR, &env, None)
        .expect_err("absent credential should halt");

    let message = err.to_string();
    assert!(message.contains(CREDENTIAL_VAR), "names the variable: {message}");
    assert!(message.contains(".env"), "points at the .env file: {message}");
    assert!(
        message.contains("config.toml"),
        "points at the config file: {message}"
    );
}

#[test]
fn empty_credential_treated_as_absent() {
    let env = env_with(&[(CREDENTIAL_VAR, "")]);

    check_credential(CREDENTIAL_VAR, &env, None)
        .expect_err("empty credential should halt");
}

#[test]
fn whitespace_credential_treated_as_absent() {
    let env = env_with(&[(CREDENTIAL_VAR, "   ")]);

    check_credential(CREDENTIAL_VAR, &env, None)
        .expect_err("whitespace-only credential should halt");
}

#[test]
fn present_credential_passes() {
    let env = env_with(&[(CREDENTIAL_VAR, TEST_KEY)]);

    let key = check_credential(CREDENTIAL_VAR, &env, None)
        .expect("present credential should pass");

    assert_eq!(key.as_str(), TEST_KEY);
}

#[test]
fn gate_is_idempotent() {
    let ready_env = env_with(&[(CREDENTIAL_VAR, TEST_KEY)]);
    let first = check_credential(CREDENTIAL_VAR, &ready_env, None);
    let second = check_credential(CREDENTIAL_VAR, &ready_env, None);
    assert_eq!(first, second, "same environment, same outcome");

    let halted_env = empty_env();
    let first = check_credential(CREDENTIAL_VAR, &halted_env, None);
    let second = check_credential(CREDENTIAL_VAR, &halted_env, None);
    assert_eq!(first, second, "halting twice yields the same error");
}

#[test]
fn config_file_is_the_fallback_source() {
    let env = empty_env();
    let config = config_with_key("sk-from-config");

    let key = check_credential(CREDENTIAL_VAR, &env, Some(&config))
        .expect("config-sourced credential should pass");

    assert_eq!(key.as_str(), "sk-from-config");
}

#[test]
fn environment_wins_over_config_file() {
    let env = env_with(&[(CREDENTIAL_VAR, "sk-from-env")]);
    let config = config_with_key("sk-from-config");

    let key = check_credential(CREDENTIAL_VAR, &env, Some(&config))
        .expect("credential should resolve");

    assert_eq!(key.as_str(), "sk-from-env");
}

#[test]
fn config_value_expands_env_references() {
    let env = env_with(&[("FINANCESCOPE_KEY", TEST_KEY)]);
    let config = config_with_key("${FINANCESCOPE_KEY}");

    let key = check_credential(CREDENTIAL_VAR, &env, Some(&config))
        .expect("expanded credential should pass");

    assert_eq!(key.as_str(), TEST_KEY);
}

#[test]
fn config_value_expanding_to_empty_halts() {
    let env = empty_env();
    let config = config_with_key("${UNSET_FINANCESCOPE_KEY}");

    check_credential(CREDENTIAL_VAR, &env, Some(&config))
        .expect_err("credential expanding to empty should halt");
}

#[test]
fn empty_config_value_halts() {
    let env = empty_env();
    let config = config_with_key("");

    check_credential(CREDENTIAL_VAR, &env, Some(&config))
        .expect_err("empty config credential should halt");
}

#[test]
fn api_key_rejects_empty_values() {
    assert!(ApiKey::new("").is_none());
    assert!(ApiKey::new("  \t ").is_none());
    assert!(ApiKey::new(TEST_KEY).is_some());
}

#[test]
fn api_key_debug_redacts_the_secret() {
    let key = ApiKey::new(TEST_KEY).expect("test key is non-empty");
    let debug = format!("{key:?}");

    assert!(!debug.contains(TEST_KEY), "secret leaked: {debug}");
    assert!(debug.contains("ApiKey"));
}
