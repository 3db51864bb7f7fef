//! Server startup utilities.

use tracing::info;

/// Prints the startup banner.
pub fn print_banner() {
    info!(
        r#"
   _____ __   _ ____ _____
  / ___// /__(_) / /( ___/____  ____ _____
  \__ \/ //_/ / / / \__ \/ __ \/ __ `/ __ \
 ___/ / ,< / / / / ___/ / / / / /_/ / /_/ /
/____/_/|_/_/_/_/ /____/_/ /_/\__,_/ .___/
                                  /_/
    "#
    );
}

/// Prints server startup information.
pub fn print_startup_info(host: &str, port: u16) {
    let separator = "=".repeat(60);
    info!("{}", separator);
    info!("REST API:   http://{}:{}/api", host, port);
    info!("Health:     http://{}:{}/health", host, port);
    info!("Swagger UI: http://{}:{}/swagger-ui", host, port);
    info!("{}", separator);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_banner_does_not_panic() {
        let _ = tracing_subscriber::fmt::try_init();
        print_banner();
    }

    #[test]
    fn test_print_startup_info_does_not_panic() {
        let _ = tracing_subscriber::fmt::try_init();
        print_startup_info("0.0.0.0", 5000);
    }
}
