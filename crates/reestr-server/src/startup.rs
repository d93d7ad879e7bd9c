//! Server startup utilities.

use reestr_config::AppConfig;
use tracing::info;

/// Prints the startup banner.
pub fn print_banner() {
    info!(
        r#"
    ____                  __
   / __ \___  ___  _____/ /______
  / /_/ / _ \/ _ \/ ___/ __/ ___/
 / _, _/  __/  __(__  ) /_/ /
/_/ |_|\___/\___/____/\__/_/

        Organization Directory
    "#
    );
}

/// Prints server startup information.
pub fn print_startup_info(config: &AppConfig) {
    let separator = "=".repeat(60);
    let addr = config.server.addr();
    info!("{}", separator);
    info!("Directory: http://{}/api/v1/organizations", addr);
    info!("Health:    http://{}/health", addr);
    info!("API Docs:  http://{}/swagger-ui", addr);
    info!("Registry:  {}", config.registry.url);
    if config.redis.enabled {
        info!("Cache:     {} (key '{}')", config.redis.url, config.redis.key);
    } else {
        info!("Cache:     in-process (key '{}')", config.redis.key);
    }
    info!("{}", separator);
}
