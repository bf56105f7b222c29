use core_config::{AppInfo, FromEnv, app_info, server::ServerConfig};

pub use core_config::Environment;

/// Application configuration, composed from the shared config sections.
///
/// The task store lives in memory, so there is nothing to configure beyond
/// the listen address and environment.
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?; // HOST=0.0.0.0, PORT=8080 unless set

        Ok(Self {
            app: app_info!(),
            server,
            environment,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env_defaults() {
        temp_env::with_vars(
            [
                ("APP_ENV", None::<&str>),
                ("HOST", None::<&str>),
                ("PORT", None::<&str>),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.app.name, "taskboard_api");
                assert_eq!(config.environment, Environment::Development);
                assert_eq!(config.server.address(), "0.0.0.0:8080");
            },
        );
    }

    #[test]
    fn test_config_from_env_rejects_bad_port() {
        temp_env::with_var("PORT", Some("eighty"), || {
            let err = Config::from_env().unwrap_err();
            assert!(err.to_string().contains("PORT"));
        });
    }
}
