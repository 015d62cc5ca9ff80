use dotenv::dotenv;
use std::env;

const DEFAULT_FUNCTION_NAME: &str = "hola-lambda";
const DEFAULT_FUNCTION_VERSION: &str = "$LATEST";

/// Initialize dotenv (only needs to be called once at startup)
pub fn init() {
    if dotenv().is_ok() {
        log::info!("Loaded .env file");
    } else {
        log::info!("No .env file loaded");
    }
}

/// Fetch an environment variable, falling back to `default` when unset
pub fn get_env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

pub fn get_function_name() -> String {
    get_env_var_or("AWS_LAMBDA_FUNCTION_NAME", DEFAULT_FUNCTION_NAME)
}

pub fn get_function_version() -> String {
    get_env_var_or("AWS_LAMBDA_FUNCTION_VERSION", DEFAULT_FUNCTION_VERSION)
}
