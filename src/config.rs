//! Resolution of server configuration from the environment.
//!
//! The database path comes from a secrets file when one is provided
//! (`DATABASE_PATH_FILE`), falling back to the `DATABASE_PATH` environment
//! variable for local development.

use std::{
    env::{self, VarError},
    fs,
};

/// Get a port number from the environment variable `env_key` if set, otherwise return `default_port`.
///
/// # Panics
/// This function may panic if the environment variable `env_key` is not valid unicode.
///
/// This function may panic if the environment variable `env_key` cannot be parsed as an integer.
pub fn parse_port_or_default(env_key: &str, default_port: u16) -> u16 {
    let port_string = match env::var(env_key) {
        Ok(string) => string,
        Err(VarError::NotPresent) => {
            tracing::debug!(
                "The environment variable '{}' was not set, using the default port {}.",
                env_key,
                default_port
            );
            return default_port;
        }
        Err(e) => {
            tracing::error!(
                "An error occurred retrieving the environment variable '{}': {}",
                env_key,
                e
            );
            panic!();
        }
    };

    match port_string.parse() {
        Ok(port_number) => port_number,
        Err(e) => {
            tracing::error!(
                "An error occurred parsing the port number '{}' from the environment variable '{}': {}",
                port_string,
                env_key,
                e
            );
            panic!();
        }
    }
}

/// Resolve the SQLite database path from the environment.
///
/// Checks, in order: the secrets file named by `DATABASE_PATH_FILE` (the
/// database path is the file's trimmed contents), then the `DATABASE_PATH`
/// environment variable. Returns `None` when neither yields a path.
pub fn resolve_database_path() -> Option<String> {
    if let Ok(secrets_file) = env::var("DATABASE_PATH_FILE") {
        match fs::read_to_string(&secrets_file) {
            Ok(contents) => return Some(contents.trim().to_string()),
            Err(error) => {
                tracing::warn!(
                    "Could not read the secrets file '{}', falling back to DATABASE_PATH: {}",
                    secrets_file,
                    error
                );
            }
        }
    }

    env::var("DATABASE_PATH").ok()
}

#[cfg(test)]
mod config_tests {
    use std::{env, fs};

    use super::{parse_port_or_default, resolve_database_path};

    #[test]
    fn parse_port_returns_default_when_unset() {
        assert_eq!(parse_port_or_default("KAKEIBO_TEST_PORT_UNSET", 3000), 3000);
    }

    #[test]
    fn parse_port_reads_environment() {
        unsafe { env::set_var("KAKEIBO_TEST_PORT", "4321") };

        assert_eq!(parse_port_or_default("KAKEIBO_TEST_PORT", 3000), 4321);

        unsafe { env::remove_var("KAKEIBO_TEST_PORT") };
    }

    // The resolution steps share environment variables, so they are
    // exercised in one test to avoid racing parallel test threads.
    #[test]
    fn database_path_resolution_order() {
        unsafe {
            env::remove_var("DATABASE_PATH_FILE");
            env::remove_var("DATABASE_PATH");
        }
        assert_eq!(resolve_database_path(), None);

        unsafe { env::set_var("DATABASE_PATH", "env.db") };
        assert_eq!(resolve_database_path(), Some("env.db".to_string()));

        let secrets_file = env::temp_dir().join("kakeibo_api_database_path_test");
        fs::write(&secrets_file, "secret.db\n").unwrap();
        unsafe { env::set_var("DATABASE_PATH_FILE", &secrets_file) };
        assert_eq!(resolve_database_path(), Some("secret.db".to_string()));

        unsafe {
            env::remove_var("DATABASE_PATH_FILE");
            env::remove_var("DATABASE_PATH");
        }
        fs::remove_file(&secrets_file).unwrap();
    }
}
