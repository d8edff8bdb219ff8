use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;

use clap::ArgMatches;
use tokio::task::LocalSet;
use tokio::time::MissedTickBehavior;
use tracing::{error, info, warn};

use webui_core::config::defaults::DEFAULT_WATCH_INTERVAL_SECS;
use webui_core::cookie::{self, SessionRecord};
use webui_core::events;
use webui_core::{ResponseOrdering, ViewPhase, WebUiConfig, WebUiError, bootstrap};

use crate::page::{OutputMode, TerminalPage};
use crate::transport::ReqwestTransport;

/// Load configuration with warning on errors.
///
/// Falls back to defaults if config loading fails, but notifies the user via:
/// - stderr message for immediate visibility
/// - structured log event `cli.config.load_failed` for debugging
fn load_config_with_warning() -> WebUiConfig {
    match WebUiConfig::load_hierarchy() {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: Could not load config: {}. Using defaults.\n\
                 Tip: Check ~/.webui/config.toml and ./.webui/config.toml for syntax errors.",
                e
            );
            warn!(
                event = "cli.config.load_failed",
                error = %e,
                error_code = e.error_code(),
                "Config load failed, using defaults"
            );
            WebUiConfig::default()
        }
    }
}

/// Apply `view` flags on top of the loaded configuration.
fn apply_view_overrides(config: &mut WebUiConfig, matches: &ArgMatches) {
    if let Some(endpoint) = matches.get_one::<String>("auth-endpoint") {
        config.auth.endpoint = Some(endpoint.clone());
    }
    if let Some(endpoint) = matches.get_one::<String>("instances-endpoint") {
        config.instances.endpoint = Some(endpoint.clone());
    }
    if let Some(ordering) = matches.get_one::<String>("ordering") {
        config.instances.ordering = Some(match ordering.as_str() {
            "issue" => ResponseOrdering::Issue,
            _ => ResponseOrdering::Arrival,
        });
    }
    if let Some(interval) = matches.get_one::<u64>("interval") {
        config.instances.refresh_interval_secs = Some(*interval);
    }
}

/// Parse `KEY=VALUE` arguments; the value may itself contain `=`.
fn parse_fields<'a>(
    fields: impl IntoIterator<Item = &'a String>,
) -> Result<SessionRecord, String> {
    fields
        .into_iter()
        .map(|field| {
            field
                .split_once('=')
                .filter(|(key, _)| !key.is_empty())
                .ok_or_else(|| format!("Invalid field '{field}': expected KEY=VALUE"))
        })
        .collect::<Result<Vec<_>, _>>()
        .map(SessionRecord::from_iter)
}

pub fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    events::log_app_startup();

    let result = match matches.subcommand() {
        Some(("view", sub_matches)) => handle_view_command(sub_matches),
        Some(("decode", sub_matches)) => handle_decode_command(sub_matches),
        Some(("encode", sub_matches)) => handle_encode_command(sub_matches),
        Some(("config", _)) => handle_config_command(),
        _ => {
            error!(event = "cli.command_unknown");
            Err("Unknown command".into())
        }
    };

    events::log_app_shutdown();
    result
}

fn handle_view_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = load_config_with_warning();
    apply_view_overrides(&mut config, matches);

    if let Err(e) = config.validate() {
        eprintln!("❌ Invalid configuration: {}", e);
        error!(event = "cli.view_failed", error = %e, error_code = e.error_code());
        events::log_app_error(&e);
        return Err(e.into());
    }

    let cookie = matches.get_one::<String>("cookie").cloned();
    let json_output = matches.get_flag("json");
    let interval = matches.get_flag("watch").then(|| {
        config
            .refresh_interval()
            .unwrap_or(Duration::from_secs(DEFAULT_WATCH_INTERVAL_SECS))
    });

    info!(
        event = "cli.view.started",
        instances_endpoint = config.instances_endpoint(),
        has_cookie = cookie.is_some(),
        watch_interval_secs = interval.map(|i| i.as_secs()),
        json_output = json_output
    );

    let transport = Rc::new(ReqwestTransport::new(&config, cookie.as_deref())?);

    let cookies: HashMap<String, String> = cookie
        .into_iter()
        .map(|raw| (config.cookie_name().to_string(), raw))
        .collect();
    let mode = if json_output {
        OutputMode::Json
    } else {
        OutputMode::Table
    };
    let page = Rc::new(TerminalPage::stdout(cookies, config.container(), mode));

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let local = LocalSet::new();

    local.block_on(&runtime, run_view(&config, transport, page, interval))
}

async fn run_view(
    config: &WebUiConfig,
    transport: Rc<ReqwestTransport>,
    page: Rc<TerminalPage>,
    interval: Option<Duration>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = bootstrap(config, transport, page);
    app.settle().await;

    if let Some(e) = app.decode_error() {
        eprintln!(
            "Warning: Could not decode session cookie: {}. Avatar probe skipped.",
            e
        );
        warn!(
            event = "cli.view.cookie_rejected",
            error = %e,
            error_code = e.error_code()
        );
    }

    let Some(table) = app.table() else {
        return Err(format!("Container '{}' is not available", config.container()).into());
    };

    let Some(period) = interval else {
        if table.phase() != ViewPhase::Populated {
            eprintln!(
                "❌ Failed to load instances from {}",
                config.instances_endpoint()
            );
            error!(
                event = "cli.view_failed",
                endpoint = config.instances_endpoint()
            );
            return Err("No instance data received".into());
        }

        info!(event = "cli.view.completed", rows = table.instances().len());
        return Ok(());
    };

    let mut ticker = tokio::time::interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // the first tick is immediate and the mount already fetched
    ticker.tick().await;

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                // completions land through the page; the handle is not needed
                drop(table.request_fetch());
            }
            result = &mut ctrl_c => {
                result?;
                info!(event = "cli.view.interrupted", phase = ?table.phase());
                return Ok(());
            }
        }
    }
}

fn handle_decode_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let raw = matches
        .get_one::<String>("raw")
        .ok_or("Cookie argument is required")?;
    let json_output = matches.get_flag("json");

    info!(event = "cli.decode_started", json_output = json_output);

    match cookie::decode(raw) {
        Ok(record) => {
            if json_output {
                println!("{}", serde_json::to_string_pretty(&record)?);
            } else if record.is_empty() {
                println!("Empty session.");
            } else {
                let key_width = record.keys().map(|k| k.chars().count()).max().unwrap_or(0);
                for (key, value) in record.iter() {
                    println!("{:<width$}  {}", key, value, width = key_width);
                }
            }

            info!(event = "cli.decode_completed", fields = record.len());
            Ok(())
        }
        Err(e) => {
            eprintln!("❌ Failed to decode cookie: {}", e);

            error!(
                event = "cli.decode_failed",
                error = %e,
                error_code = e.error_code()
            );

            events::log_app_error(&e);
            Err(e.into())
        }
    }
}

fn handle_encode_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let fields = matches
        .get_many::<String>("fields")
        .ok_or("At least one KEY=VALUE field is required")?;

    let record = match parse_fields(fields) {
        Ok(record) => record,
        Err(message) => {
            eprintln!("❌ {}", message);
            error!(event = "cli.encode_failed", error = %message);
            return Err(message.into());
        }
    };

    match cookie::encode(&record) {
        Ok(encoded) => {
            println!("{}", encoded);
            info!(event = "cli.encode_completed", fields = record.len());
            Ok(())
        }
        Err(e) => {
            eprintln!("❌ Failed to encode session: {}", e);

            error!(
                event = "cli.encode_failed",
                error = %e,
                error_code = e.error_code()
            );

            events::log_app_error(&e);
            Err(e.into())
        }
    }
}

fn handle_config_command() -> Result<(), Box<dyn std::error::Error>> {
    match WebUiConfig::load_hierarchy() {
        Ok(config) => {
            print!("{}", toml::to_string(&config.resolved())?);
            info!(event = "cli.config_completed");
            Ok(())
        }
        Err(e) => {
            eprintln!("❌ Failed to load config: {}", e);

            error!(
                event = "cli.config_failed",
                error = %e,
                error_code = e.error_code()
            );

            events::log_app_error(&e);
            Err(e.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::build_cli;

    fn view_matches(args: &[&str]) -> ArgMatches {
        let mut argv = vec!["webui", "view"];
        argv.extend_from_slice(args);
        build_cli()
            .try_get_matches_from(argv)
            .unwrap()
            .subcommand_matches("view")
            .unwrap()
            .clone()
    }

    #[test]
    fn test_view_overrides_apply() {
        let mut config = WebUiConfig::default();
        let matches = view_matches(&[
            "--instances-endpoint",
            "http://other/ec2/instances/",
            "--auth-endpoint",
            "https://auth/authenticated",
            "--ordering",
            "issue",
            "--watch",
            "--interval",
            "3",
        ]);

        apply_view_overrides(&mut config, &matches);

        assert_eq!(config.instances_endpoint(), "http://other/ec2/instances/");
        assert_eq!(config.auth_endpoint(), "https://auth/authenticated");
        assert_eq!(config.ordering(), ResponseOrdering::Issue);
        assert_eq!(config.refresh_interval(), Some(Duration::from_secs(3)));
    }

    #[test]
    fn test_view_without_flags_keeps_config() {
        let mut config = WebUiConfig::default();
        config.instances.endpoint = Some("http://configured/".to_string());

        apply_view_overrides(&mut config, &view_matches(&[]));

        assert_eq!(config.instances_endpoint(), "http://configured/");
        assert_eq!(config.ordering(), ResponseOrdering::Arrival);
    }

    #[test]
    fn test_parse_fields() {
        let args = vec!["id=42".to_string(), "token=a=b".to_string(), "empty=".to_string()];
        let record = parse_fields(&args).unwrap();

        assert_eq!(record.id(), Some("42"));
        assert_eq!(record.get("token"), Some("a=b"));
        assert_eq!(record.get("empty"), Some(""));
    }

    #[test]
    fn test_parse_fields_rejects_missing_separator() {
        let args = vec!["id".to_string()];
        assert_eq!(
            parse_fields(&args),
            Err("Invalid field 'id': expected KEY=VALUE".to_string())
        );

        let args = vec!["=x".to_string()];
        assert!(parse_fields(&args).is_err());
    }
}
