use std::time::Duration;

use crate::{Result, TestInfraError};
use sqlx::mysql::MySqlPoolOptions;
use sqlx::MySqlPool;
use testcontainers::core::{IntoContainerPort, WaitFor};
use testcontainers::runners::AsyncRunner;
use testcontainers::ImageExt;
use testcontainers::{ContainerAsync, GenericImage};
use typed_builder::TypedBuilder;

const MYSQL_PORT: u16 = 3306;

/// Credentials and image for a throwaway MySQL server.
#[derive(Debug, Clone, TypedBuilder)]
pub struct MysqlConfig {
    #[builder(default = "linkhop".to_string(), setter(into))]
    database: String,
    #[builder(default = "linkhop".to_string(), setter(into))]
    username: String,
    #[builder(default = "linkhop".to_string(), setter(into))]
    password: String,
    #[builder(default = "8.4".to_string(), setter(into))]
    tag: String,
    /// How many times `connect` tries before giving up.
    #[builder(default = 20)]
    connect_attempts: u32,
}

impl Default for MysqlConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// A running MySQL container and the DSN that reaches it.
///
/// The container is removed when this value is dropped, so keep it alive for
/// as long as any pool from [`MySqlServer::connect`] is in use.
pub struct MySqlServer {
    _container: ContainerAsync<GenericImage>,
    database_url: String,
    connect_attempts: u32,
}

impl MySqlServer {
    pub async fn start(config: MysqlConfig) -> Result<Self> {
        let container = GenericImage::new("mysql", config.tag.as_str())
            .with_exposed_port(MYSQL_PORT.tcp())
            .with_wait_for(WaitFor::message_on_stderr("ready for connections"))
            .with_env_var("MYSQL_DATABASE", config.database.as_str())
            .with_env_var("MYSQL_USER", config.username.as_str())
            .with_env_var("MYSQL_PASSWORD", config.password.as_str())
            .with_env_var("MYSQL_ROOT_PASSWORD", "root")
            .start()
            .await?;

        let host = container.get_host().await?;
        let port = container.get_host_port_ipv4(MYSQL_PORT).await?;
        let database_url = format!(
            "mysql://{}:{}@{host}:{port}/{}",
            config.username, config.password, config.database
        );

        Ok(Self {
            _container: container,
            database_url,
            connect_attempts: config.connect_attempts.max(1),
        })
    }

    /// Opens a pool, retrying while the server finishes its first boot.
    ///
    /// MySQL logs "ready for connections" once for the temporary init server
    /// and again for the real one, so the first attempts can be refused.
    pub async fn connect(&self) -> Result<MySqlPool> {
        let mut attempt = 0;
        loop {
            attempt += 1;
            match MySqlPoolOptions::new()
                .max_connections(5)
                .connect(&self.database_url)
                .await
            {
                Ok(pool) => return Ok(pool),
                Err(err) if attempt >= self.connect_attempts => {
                    return Err(TestInfraError::Connect {
                        attempts: attempt,
                        source: err,
                    })
                }
                Err(_) => tokio::time::sleep(Duration::from_millis(500)).await,
            }
        }
    }
}
