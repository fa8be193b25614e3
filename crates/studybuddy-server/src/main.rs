use crate::app::AuthConfig;
use crate::opt::{Commands, Db, Run};
use anyhow::Result;
use axum::serve;
use clap::Parser;
use sea_orm::{ConnectOptions, Database};
use std::error::Error;
use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;
use studybuddy_core::llm_config::LlmConfig;
use studybuddy_core::openai::{OpenAiGenerator, TextGenerator};
use studybuddy_db::migration::run_migrations;
use studybuddy_utils::net::create_listener;

mod app;
mod auth;
mod opt;
mod routes;
#[cfg(test)]
mod test_helpers;
mod user;

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);
const DEFAULT_PORT: u16 = 3000;

pub(crate) struct InnerAppConfig {
    quiz_generator: Arc<dyn TextGenerator>,
    flashcard_generator: Arc<dyn TextGenerator>,
}

/// Per-process state shared with every handler through an `Extension`.
#[derive(Clone)]
pub(crate) struct AppConfig(Arc<InnerAppConfig>);

impl AppConfig {
    fn new(quiz_generator: Arc<dyn TextGenerator>, flashcard_generator: Arc<dyn TextGenerator>) -> Self {
        Self(Arc::new(InnerAppConfig {
            quiz_generator,
            flashcard_generator,
        }))
    }

    fn from_llm_config(llm_config: &LlmConfig) -> Result<Self> {
        let quiz_generator = OpenAiGenerator::for_quizzes(llm_config)?;
        let flashcard_generator = OpenAiGenerator::for_flashcards(llm_config)?;
        tracing::info!(
            quiz_model = quiz_generator.model(),
            flashcard_model = flashcard_generator.model(),
            timeout = ?llm_config.timeout,
            "configured generative service"
        );
        Ok(Self::new(Arc::new(quiz_generator), Arc::new(flashcard_generator)))
    }

    pub fn quiz_generator(&self) -> &dyn TextGenerator {
        self.0.quiz_generator.as_ref()
    }

    pub fn flashcard_generator(&self) -> &dyn TextGenerator {
        self.0.flashcard_generator.as_ref()
    }
}

async fn run(opt: Run) -> Result<()> {
    studybuddy_utils::tracing::setup(
        studybuddy_utils::tracing::TracingConfig::builder()
            .package(env!("CARGO_PKG_NAME"))
            .version(env!("CARGO_PKG_VERSION"))
            .env(opt.env.clone())
            .json(opt.log_json)
            .build(),
    )?;

    let seaorm_pool = Database::connect(build_connect_options(&opt.db, &opt.database_url)).await?;
    run_migrations(&seaorm_pool)
        .await
        .inspect_err(|error| tracing::error!(error = error as &dyn Error, "failed to run migrations"))?;

    let llm_config: LlmConfig = opt.llm_services.into();
    let app_config = AppConfig::from_llm_config(&llm_config)?;
    let auth_config = AuthConfig::from_secret(&opt.auth.jwt_secret);

    let app = app::create_app(app_config, auth_config, &opt.auth.origins, seaorm_pool)?;

    let listener = create_listener((opt.host, opt.port), (DEFAULT_HOST, DEFAULT_PORT)).await?;

    let service = app.into_make_service();
    tracing::info!(local_addr = %listener.local_addr()?, "starting app");
    serve::serve(listener, service).await?;
    Ok(())
}

fn build_connect_options(db_options: &Db, database_url: &str) -> ConnectOptions {
    let mut seaorm_pool_options = ConnectOptions::new(database_url);
    if let Some(min_connections) = db_options.db_min_connections {
        seaorm_pool_options.min_connections(min_connections);
    }
    if let Some(max_connections) = db_options.db_max_connections {
        seaorm_pool_options.max_connections(max_connections);
    }
    seaorm_pool_options.sqlx_logging(false);
    seaorm_pool_options
}

fn main() -> Result<()> {
    let main = async {
        let opt = opt::Cli::parse();

        match opt.command {
            Commands::Run(o) => run(o).await?,
        }
        Ok(())
    };

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(main)
}
