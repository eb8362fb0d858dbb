use sensorpro_client::utils::config::{get_env_or_default, get_env_or_none};
use std::env;

#[test]
fn test_get_env_or_default_with_existing_var() {
    unsafe {
        env::set_var("SP_TEST_VAR_STRING", "test_value");
        let result: String = get_env_or_default("SP_TEST_VAR_STRING", "default".to_string());
        assert_eq!(result, "test_value");
        env::remove_var("SP_TEST_VAR_STRING");
    }
}

#[test]
fn test_get_env_or_default_with_missing_var() {
    unsafe {
        env::remove_var("SP_MISSING_VAR");
        let result: String = get_env_or_default("SP_MISSING_VAR", "default".to_string());
        assert_eq!(result, "default");
    }
}

#[test]
fn test_get_env_or_default_with_blank_var() {
    unsafe {
        env::set_var("SP_TEST_VAR_BLANK", "   ");
        let result: String = get_env_or_default("SP_TEST_VAR_BLANK", "default".to_string());
        assert_eq!(result, "default");
        env::remove_var("SP_TEST_VAR_BLANK");
    }
}

#[test]
fn test_get_env_or_default_with_invalid_parse() {
    unsafe {
        env::set_var("SP_TEST_VAR_INVALID", "not_a_number");
        let result: u64 = get_env_or_default("SP_TEST_VAR_INVALID", 30);
        assert_eq!(result, 30);
        env::remove_var("SP_TEST_VAR_INVALID");
    }
}

#[test]
fn test_get_env_or_none() {
    unsafe {
        env::set_var("SP_TEST_VAR_INT", " 42 ");
        env::set_var("SP_TEST_VAR_BAD_INT", "forty-two");
        assert_eq!(get_env_or_none::<u32>("SP_TEST_VAR_INT"), Some(42));
        assert_eq!(get_env_or_none::<u32>("SP_TEST_VAR_BAD_INT"), None);
        assert_eq!(get_env_or_none::<String>("SP_TEST_VAR_UNSET"), None);
        env::remove_var("SP_TEST_VAR_INT");
        env::remove_var("SP_TEST_VAR_BAD_INT");
    }
}
