use std::net::IpAddr;

use clap::{Args, Parser, Subcommand};
use studybuddy_utils::args::llm::LlmServices;

#[derive(Debug, Parser)]
#[command(name = "studybuddy-server", about = "Turn study material into quizzes and flashcards")]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    Run(Run),
}

#[derive(Debug, Clone, Args)]
#[group(multiple = true, required = false)]
pub(crate) struct Db {
    #[arg(long, help = "Min connections")]
    pub(crate) db_min_connections: Option<u32>,

    #[arg(long, help = "Max connections")]
    pub(crate) db_max_connections: Option<u32>,
}

#[derive(Debug, Clone, Args)]
pub(crate) struct Auth {
    #[arg(long, env = "JWT_SECRET", hide_env_values = true, help = "HS256 secret the identity tokens are signed with")]
    pub(crate) jwt_secret: String,

    #[arg(long, env = "ORIGINS", value_delimiter = ',', help = "Origins allowed to call the api")]
    pub(crate) origins: Vec<String>,
}

#[derive(Debug, Clone, Parser)]
pub(crate) struct Run {
    #[arg(long, env = "HOST")]
    pub(crate) host: Option<IpAddr>,

    #[arg(short, long, env = "PORT")]
    pub(crate) port: Option<u16>,

    #[arg(long, env = "DATABASE_URL", help = "sqlite:// or postgres:// connection url")]
    pub(crate) database_url: String,

    #[command(flatten)]
    pub(crate) db: Db,

    #[command(flatten)]
    pub(crate) auth: Auth,

    #[command(flatten)]
    pub(crate) llm_services: LlmServices,

    #[arg(long, env = "APP_ENV", default_value = "dev", help = "Environment name attached to the logs")]
    pub(crate) env: String,

    #[arg(long, env = "LOG_JSON", help = "Log one json object per line")]
    pub(crate) log_json: bool,
}
