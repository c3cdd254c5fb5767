use anyhow::Result;
use clap::Parser;
use synapse::commands::{self, config::Config, config::parse_query_pair};
use synapse::constants::{AUTH_TOKEN_ENV, PROFILE_ENV, SERVER_URL_ENV};

/// synapse - Synapse REST API client
///
/// Issue authenticated GET requests against the Synapse repository service
/// and print the JSON or text response.
///
/// The bearer token is read from --auth-token or the SYNAPSE_AUTH_TOKEN
/// environment variable.
///
/// Examples:
///   synapse get /entity/syn123          # Fetch an entity as JSON
///   synapse get /version --timeout 10   # Plain request with a timeout
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Synapse repository endpoint (defaults to the production repository)
    #[arg(
        long = "server-url",
        env = SERVER_URL_ENV,
        value_name = "URL",
        global = true
    )]
    pub server_url: Option<String>,

    /// Bearer token used for authentication (also via SYNAPSE_AUTH_TOKEN)
    #[arg(
        long = "auth-token",
        env = AUTH_TOKEN_ENV,
        value_name = "TOKEN",
        hide_env_values = true,
        global = true
    )]
    pub auth_token: Option<String>,

    /// Credential profile name (also via SYNAPSE_PROFILE)
    #[arg(long, env = PROFILE_ENV, value_name = "NAME", global = true)]
    pub profile: Option<String>,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Perform a GET request on an endpoint path
    Get(GetArgs),
}

#[derive(clap::Args, Debug)]
pub struct GetArgs {
    /// Endpoint path of the resource, e.g. "/entity/syn123"
    #[arg(value_name = "ENDPOINT_PATH")]
    pub endpoint_path: String,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Query parameter to append (repeatable)
    #[arg(
        long = "query",
        short = 'q',
        value_name = "KEY=VALUE",
        value_parser = parse_query_pair
    )]
    pub query: Vec<(String, String)>,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Get(args) => {
            let config = Config::new(
                cli.auth_token,
                cli.profile,
                cli.server_url,
                args.timeout,
                args.query,
            )?;
            commands::get(&args.endpoint_path, config).await?
        }
    }
    Ok(())
}
