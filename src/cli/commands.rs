//! CLI command implementations

use std::path::Path;

use crate::http_server::{HttpServer, HttpServerConfig};
use crate::observability::{log_event, log_event_with_fields, Event};

use super::args::Command;
use super::errors::{CliError, CliResult};

/// Dispatch a parsed command
pub fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Serve { config, port } => {
            let mut config = load_config(config.as_deref())?;
            if let Some(port) = port {
                config.port = port;
            }
            serve(config)
        }
        Command::CheckConfig { config } => {
            let effective = check_config(&config)?;
            println!("{}", effective);
            Ok(())
        }
    }
}

/// Load the config file, or defaults when no path is given
pub fn load_config(path: Option<&Path>) -> CliResult<HttpServerConfig> {
    let config = match path {
        Some(path) => HttpServerConfig::load(path)?,
        None => HttpServerConfig::default(),
    };

    let source = path
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "defaults".to_string());
    log_event_with_fields(
        Event::ConfigLoaded,
        &[("port", &config.port.to_string()), ("source", &source)],
    );
    Ok(config)
}

/// Validate a config file and return the effective settings as pretty JSON
pub fn check_config(path: &Path) -> CliResult<String> {
    let config = HttpServerConfig::load(path)?;
    Ok(serde_json::to_string_pretty(&config)?)
}

/// Run the HTTP server until Ctrl-C
///
/// A failure to start the runtime, bind, or keep serving is logged as
/// `STUDENTDB_BOOT_FAILED` on stderr before it is returned.
pub fn serve(config: HttpServerConfig) -> CliResult<()> {
    log_event(Event::BootStart);

    let addr = config.socket_addr();
    let result = tokio::runtime::Runtime::new()
        .map_err(|e| format!("cannot start runtime: {}", e))
        .and_then(|runtime| {
            runtime.block_on(async move {
                HttpServer::with_config(config)
                    .start()
                    .await
                    .map_err(|e| format!("cannot serve on {}: {}", addr, e))
            })
        });

    result.map_err(|reason| {
        log_event_with_fields(Event::BootFailed, &[("reason", &reason)]);
        CliError::boot_failed(reason)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::CliErrorCode;
    use crate::students::IdStrategy;
    use std::fs;

    #[test]
    fn test_load_config_defaults() {
        let config = load_config(None).unwrap();
        assert_eq!(config, HttpServerConfig::default());
    }

    #[test]
    fn test_check_config_prints_effective_settings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("studentdb.json");
        fs::write(&path, r#"{"id_strategy": "uuid"}"#).unwrap();

        let output = check_config(&path).unwrap();
        let parsed: HttpServerConfig = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed.id_strategy, IdStrategy::Uuid);
        assert_eq!(parsed.port, 3000);
    }

    #[test]
    fn test_serve_on_taken_port_is_boot_failure() {
        let taken = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let config = HttpServerConfig {
            host: "127.0.0.1".to_string(),
            port: taken.local_addr().unwrap().port(),
            seed_sample_data: false,
            ..Default::default()
        };

        let err = serve(config).unwrap_err();
        assert_eq!(err.code(), &CliErrorCode::BootFailed);
        assert!(err.message().starts_with("cannot serve on 127.0.0.1:"));
    }

    #[test]
    fn test_missing_config_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config(Some(dir.path().join("nope.json").as_path())).unwrap_err();
        assert_eq!(err.code(), &CliErrorCode::ConfigError);
    }
}
