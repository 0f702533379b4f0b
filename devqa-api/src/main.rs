use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use clap::Parser;
use devqa_api::config::{ApiConfig, LoggingConfig};
use devqa_api::helpers::llm::create_llm_client;
use devqa_api::{routes, AnswerService, QuestionStore};
use std::path::PathBuf;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Debug, Parser)]
#[command(name = "devqa-api")]
#[command(about = "Technical Q&A backend that answers questions with Gemini")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Args {
    /// Additional configuration file, applied after the default locations
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = ApiConfig::load(args.config)?;
    let _log_guard = init_logging(&config.logging)?;

    info!(model = %config.gemini.model, "Using Gemini model");

    let llm_client = create_llm_client(&config)?;
    let answers = web::Data::new(AnswerService::new(llm_client, config.gemini.model.clone()));
    let store = web::Data::new(QuestionStore::new());

    let bind_addr = config.bind_address();
    let allowed_origins = config.cors.allowed_origins.clone();
    info!("Starting devqa-api server at http://{}", bind_addr);

    HttpServer::new(move || {
        App::new()
            .app_data(answers.clone())
            .app_data(store.clone())
            .wrap(middleware::Logger::default())
            .wrap(security_headers())
            .wrap(build_cors(&allowed_origins))
            .configure(routes::configure_routes)
    })
    .bind(&bind_addr)?
    .run()
    .await?;

    Ok(())
}

fn init_logging(logging: &LoggingConfig) -> anyhow::Result<Option<WorkerGuard>> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&logging.level))?;

    let (file_layer, guard) = match &logging.file {
        Some(path) => {
            let directory = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| std::path::Path::new("."));
            let file_name = path
                .file_name()
                .ok_or_else(|| anyhow::anyhow!("Invalid log file path: {}", path.display()))?;
            std::fs::create_dir_all(directory)?;

            let appender = tracing_appender::rolling::never(directory, file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (
                Some(fmt::layer().with_ansi(false).with_writer(writer)),
                Some(guard),
            )
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer())
        .with(file_layer)
        .try_init()?;

    Ok(guard)
}

fn build_cors(allowed_origins: &[String]) -> Cors {
    if allowed_origins.iter().any(|origin| origin == "*") {
        return Cors::permissive();
    }

    allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allow_any_method()
        .allow_any_header()
        .max_age(3600)
}

fn security_headers() -> middleware::DefaultHeaders {
    middleware::DefaultHeaders::new()
        .add(("X-Content-Type-Options", "nosniff"))
        .add(("X-Frame-Options", "SAMEORIGIN"))
        .add(("Referrer-Policy", "no-referrer"))
}
