use std::error::Error;

use clap::error::ErrorKind;
use clap::Parser;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use clockify::{Account, Session, CLOCKIFY_API};

/// Display a user's Clockify account information.
///
/// The API token can be retrieved from the profile settings page at clockify.me.
#[derive(Debug, Parser)]
#[command(name = "clockify", version)]
struct Cli {
    /// Personal API token.
    #[arg(value_name = "API_TOKEN")]
    token: String,

    #[arg(long, env = "CLOCKIFY_API_URL", default_value = CLOCKIFY_API)]
    base_url: String,

    /// Log requests and decoded payloads to stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.print()?;
            return Ok(());
        }
        Err(_) => {
            let program = std::env::args().next().unwrap_or_else(|| "clockify".to_string());
            eprintln!("usage: {program} API_TOKEN");
            return Ok(());
        }
    };

    let filter = if cli.verbose { "clockify=debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();

    let session = match Session::builder(cli.token).base_url(&cli.base_url).build() {
        Ok(session) => session,
        Err(err) => {
            eprintln!("error: {err}");
            return Ok(());
        }
    };

    let account = match session.get_account() {
        Ok(account) => account,
        Err(err) => {
            eprintln!("error: {err}");
            return Ok(());
        }
    };

    println!("account: {}", render_account(&account)?);
    Ok(())
}

fn render_account(account: &Account) -> Result<String, serde_json::Error> {
    let mut out = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(b"    "));
    account.serialize(&mut serializer)?;
    Ok(String::from_utf8_lossy(&out).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn cli_requires_exactly_one_token() {
        assert!(Cli::try_parse_from(["clockify"]).is_err());
        assert!(Cli::try_parse_from(["clockify", "a", "b"]).is_err());
        let cli = Cli::try_parse_from(["clockify", "secret"]).unwrap();
        assert_eq!(cli.token, "secret");
        assert!(!cli.verbose);
    }

    #[test]
    fn account_renders_with_four_space_indent() {
        let account: Account =
            serde_json::from_str(r#"{"id":"u1","name":"Ada","email":"ada@example.com"}"#).unwrap();
        let rendered = render_account(&account).unwrap();
        assert!(rendered.starts_with("{\n    \"id\": \"u1\""));
    }
}
