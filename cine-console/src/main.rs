//! `cine` - command-line shell over `cine-client`

mod commands;
mod logger;
mod render;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use cine_client::ClientConfig;
use shared::models::Role;

use crate::render::ProductArg;

#[derive(Debug, Parser)]
#[command(name = "cine", version, about = "Cinema booking client")]
struct Cli {
    /// REST API base URL [default: CINE_API_URL or http://localhost:3000]
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Bearer token file [default: CINE_TOKEN_PATH or .cine/token.json]
    #[arg(long, global = true)]
    token_path: Option<PathBuf>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    timeout: Option<u64>,

    /// Log level, overridden by RUST_LOG
    #[arg(long, global = true, env = "CINE_LOG_LEVEL", default_value = "warn")]
    log_level: String,

    /// Emit logs as JSON lines
    #[arg(long, global = true, env = "CINE_LOG_JSON")]
    log_json: bool,

    #[command(subcommand)]
    command: Command,
}

/// List options shared by every list command
#[derive(Debug, clap::Args)]
pub struct ListArgs {
    /// Case-insensitive text search
    #[arg(long, short)]
    pub search: Option<String>,

    /// 1-based page number
    #[arg(long, short, default_value_t = 1)]
    pub page: usize,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Sign in and save the token
    Login {
        #[arg(long, env = "CINE_EMAIL")]
        email: String,
        #[arg(long, env = "CINE_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Forget the saved token
    Logout,
    /// Show the signed-in user
    Whoami,
    /// Movie catalog
    Movies {
        #[command(flatten)]
        list: ListArgs,
        /// now_playing, coming_soon or stopped
        #[arg(long)]
        status: Option<String>,
    },
    /// Users of one role
    Users {
        #[arg(long, value_parser = parse_role)]
        role: Role,
        #[command(flatten)]
        list: ListArgs,
    },
    /// Staff directory
    Employees {
        #[command(flatten)]
        list: ListArgs,
        #[arg(long)]
        shift: Option<String>,
        /// Read the directory without a token
        #[arg(long)]
        public: bool,
    },
    /// Movie reviews
    Reviews {
        #[command(flatten)]
        list: ListArgs,
        /// Only reviews with this many stars
        #[arg(long)]
        rating: Option<u8>,
        /// Only reviews written on this day (YYYY-MM-DD)
        #[arg(long)]
        date: Option<chrono::NaiveDate>,
    },
    /// Price a booking without buying it
    Quote {
        #[arg(long)]
        showtime: String,
        #[arg(long)]
        tickets: usize,
        /// Seat label such as A5, repeatable
        #[arg(long = "seat")]
        seats: Vec<String>,
        /// name=amount, repeatable
        #[arg(long = "product")]
        products: Vec<ProductArg>,
        /// Ticket price when not signed in and the showtime has none
        #[arg(long)]
        ticket_price: Option<rust_decimal::Decimal>,
    },
    /// Cinema settings
    Settings,
    /// Ask the assistant
    Chat {
        #[arg(required = true, num_args = 1..)]
        message: Vec<String>,
    },
}

fn parse_role(value: &str) -> Result<Role, String> {
    value.parse().map_err(|e: shared::AppError| e.message)
}

impl Cli {
    fn client_config(&self) -> ClientConfig {
        let mut config = ClientConfig::from_env();
        if let Some(url) = &self.api_url {
            config.base_url = url.clone();
        }
        if let Some(timeout) = self.timeout {
            config.timeout = timeout;
        }
        config.token_path = self
            .token_path
            .clone()
            .or(config.token_path)
            .or_else(|| Some(PathBuf::from(".cine/token.json")));
        config
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    logger::init_logger(&cli.log_level, cli.log_json)?;

    let config = cli.client_config();
    tracing::debug!(base_url = %config.base_url, "starting");
    let client = cine_client::CineClient::builder().config(config).build()?;

    match cli.command {
        Command::Login { email, password } => commands::login(client, &email, &password).await,
        Command::Logout => commands::logout(client).await,
        Command::Whoami => commands::whoami(client).await,
        Command::Movies { list, status } => commands::movies(client, list, status).await,
        Command::Users { role, list } => commands::users(client, role, list).await,
        Command::Employees {
            list,
            shift,
            public,
        } => commands::employees(client, list, shift, public).await,
        Command::Reviews { list, rating, date } => {
            commands::reviews(client, list, rating, date).await
        }
        Command::Quote {
            showtime,
            tickets,
            seats,
            products,
            ticket_price,
        } => {
            let request = commands::QuoteRequest {
                showtime,
                tickets,
                seats,
                products,
                ticket_price,
            };
            commands::quote(client, request).await
        }
        Command::Settings => commands::settings(client).await,
        Command::Chat { message } => commands::chat(client, &message.join(" ")).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_quote() {
        let cli = Cli::try_parse_from([
            "cine",
            "quote",
            "--showtime",
            "s1",
            "--tickets",
            "2",
            "--seat",
            "A1",
            "--seat",
            "A2",
            "--product",
            "Popcorn=3",
        ])
        .unwrap();
        match cli.command {
            Command::Quote {
                tickets,
                seats,
                products,
                ..
            } => {
                assert_eq!(tickets, 2);
                assert_eq!(seats, vec!["A1", "A2"]);
                assert_eq!(products[0].name, "Popcorn");
                assert_eq!(products[0].amount, 3);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_cli_rejects_unknown_role() {
        assert!(Cli::try_parse_from(["cine", "users", "--role", "manager"]).is_err());
        assert!(Cli::try_parse_from(["cine", "users", "--role", "admin", "-p", "2"]).is_ok());
    }

    #[test]
    fn test_flag_overrides_config() {
        let cli = Cli::try_parse_from(["cine", "--api-url", "http://cine.test", "whoami"]).unwrap();
        let config = cli.client_config();
        assert_eq!(config.base_url, "http://cine.test");
        assert!(config.token_path.is_some());
    }
}
