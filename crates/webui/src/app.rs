use clap::{Arg, ArgAction, Command};

pub fn build_cli() -> Command {
    Command::new("webui")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Live view of remote instances with a session-aware avatar")
        .long_about("webui reads the session cookie, asks the authentication service for the signed-in user's avatar and renders the instance list served by the instances endpoint as a table, optionally refreshing it on an interval.")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("view")
                .about("Fetch the instance list and print it as a table")
                .arg(
                    Arg::new("cookie")
                        .long("cookie")
                        .short('c')
                        .env("WEBUI_SESSION_COOKIE")
                        .help("Raw session cookie value, e.g. '{id:42}'")
                )
                .arg(
                    Arg::new("auth-endpoint")
                        .long("auth-endpoint")
                        .help("Authentication endpoint (overrides config)")
                )
                .arg(
                    Arg::new("instances-endpoint")
                        .long("instances-endpoint")
                        .help("Instance list endpoint (overrides config)")
                )
                .arg(
                    Arg::new("ordering")
                        .long("ordering")
                        .help("How overlapping responses are applied (overrides config)")
                        .value_parser(["arrival", "issue"])
                )
                .arg(
                    Arg::new("watch")
                        .long("watch")
                        .short('w')
                        .help("Keep refreshing the table until interrupted")
                        .action(ArgAction::SetTrue)
                )
                .arg(
                    Arg::new("interval")
                        .long("interval")
                        .short('i')
                        .help("Refresh interval in seconds for --watch (overrides config, default: 5)")
                        .value_parser(clap::value_parser!(u64).range(1..))
                        .requires("watch")
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Print one JSON object per update instead of a table")
                        .action(ArgAction::SetTrue)
                )
        )
        .subcommand(
            Command::new("decode")
                .about("Decode a session cookie and print its fields")
                .arg(
                    Arg::new("raw")
                        .help("Raw cookie value")
                        .required(true)
                        .allow_hyphen_values(true)
                        .index(1)
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Output in JSON format")
                        .action(ArgAction::SetTrue)
                )
        )
        .subcommand(
            Command::new("encode")
                .about("Encode KEY=VALUE pairs as a session cookie")
                .arg(
                    Arg::new("fields")
                        .help("Fields as KEY=VALUE")
                        .required(true)
                        .num_args(1..)
                        .index(1)
                )
        )
        .subcommand(
            Command::new("config")
                .about("Print the effective configuration as TOML")
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_build() {
        let app = build_cli();
        assert_eq!(app.get_name(), "webui");
        app.debug_assert();
    }

    #[test]
    fn test_view_defaults() {
        let matches = build_cli()
            .try_get_matches_from(vec!["webui", "view"])
            .unwrap();
        let (name, sub) = matches.subcommand().unwrap();
        assert_eq!(name, "view");
        assert!(!sub.get_flag("watch"));
        assert!(!sub.get_flag("json"));
        assert!(sub.get_one::<u64>("interval").is_none());
    }

    #[test]
    fn test_view_watch_with_interval() {
        let matches = build_cli()
            .try_get_matches_from(vec!["webui", "view", "--watch", "--interval", "2"])
            .unwrap();
        let sub = matches.subcommand_matches("view").unwrap();
        assert!(sub.get_flag("watch"));
        assert_eq!(sub.get_one::<u64>("interval"), Some(&2));
    }

    #[test]
    fn test_interval_requires_watch() {
        let result = build_cli().try_get_matches_from(vec!["webui", "view", "--interval", "2"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_interval_rejects_zero() {
        let result =
            build_cli().try_get_matches_from(vec!["webui", "view", "--watch", "--interval", "0"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_ordering_values() {
        let matches = build_cli()
            .try_get_matches_from(vec!["webui", "view", "--ordering", "issue"])
            .unwrap();
        let sub = matches.subcommand_matches("view").unwrap();
        assert_eq!(
            sub.get_one::<String>("ordering").map(String::as_str),
            Some("issue")
        );

        let result = build_cli().try_get_matches_from(vec!["webui", "view", "--ordering", "random"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_verbose_is_global() {
        let matches = build_cli()
            .try_get_matches_from(vec!["webui", "decode", "{}", "-v"])
            .unwrap();
        assert!(matches.get_flag("verbose"));
    }

    #[test]
    fn test_encode_requires_fields() {
        let result = build_cli().try_get_matches_from(vec!["webui", "encode"]);
        assert!(result.is_err());

        let matches = build_cli()
            .try_get_matches_from(vec!["webui", "encode", "id=1", "name=x"])
            .unwrap();
        let sub = matches.subcommand_matches("encode").unwrap();
        let fields: Vec<&String> = sub.get_many::<String>("fields").unwrap().collect();
        assert_eq!(fields, vec!["id=1", "name=x"]);
    }
}
