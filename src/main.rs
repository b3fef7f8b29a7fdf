//! Kiosk server binary: parse the CLI, load configuration, and serve the page.

use parking_lot::Mutex;
use signbot::{
    AppState,
    api::routes::create_router,
    cli::{Cli, Commands, output::Output},
    faq::FaqTable,
    llm::{Provider, ProviderFactory},
    session::KioskSession,
    utils::config::Config,
};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Snapshot uploads are base64 JPEGs from a webcam; 8 MiB is plenty.
const MAX_BODY_BYTES: usize = 8 * 1024 * 1024;

#[cfg(feature = "swagger-ui")]
mod docs {
    use utoipa::OpenApi;

    /// OpenAPI document for the kiosk API.
    #[derive(OpenApi)]
    #[openapi(
        paths(
            signbot::api::handlers::chat::chat,
            signbot::api::handlers::chat::history,
            signbot::api::handlers::chat::reset,
            signbot::api::handlers::vision::interpret,
            signbot::api::handlers::audio::chat_audio,
            signbot::api::handlers::audio::vision_audio,
            signbot::api::handlers::info::health,
            signbot::api::handlers::info::questions,
        ),
        components(schemas(
            signbot::types::ChatRequest,
            signbot::types::ChatResponse,
            signbot::types::AnswerSource,
            signbot::types::VisionRequest,
            signbot::types::VisionResponse,
            signbot::types::VisionMode,
            signbot::types::HistoryResponse,
            signbot::types::Turn,
            signbot::types::Role,
        ))
    )]
    pub struct ApiDoc;
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse_args();
    let out = if cli.no_color {
        Output::no_color()
    } else {
        Output::new()
    };

    let default_filter = if cli.verbose {
        "signbot=debug,tower_http=debug"
    } else {
        "signbot=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Some(Commands::Questions) = cli.command {
        out.question_table(&FaqTable::new());
        return Ok(());
    }

    let mut config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            out.error(&format!("configuration error: {}", e));
            std::process::exit(1);
        }
    };
    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    let provider = Provider::from_config(&config.openai);
    let provider_name = provider.name();

    let state = AppState {
        config: Arc::new(config.clone()),
        faq: Arc::new(FaqTable::new()),
        assistant_factory: Arc::new(ProviderFactory::new(provider)),
        session: Arc::new(Mutex::new(KioskSession::new())),
    };

    let app = create_router();

    #[cfg(feature = "swagger-ui")]
    let app = app.merge(
        utoipa_swagger_ui::SwaggerUi::new("/swagger-ui")
            .url("/api-docs/openapi.json", <docs::ApiDoc as utoipa::OpenApi>::openapi()),
    );

    let app = app
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .with_state(state);

    out.banner();
    out.kv("Provider", provider_name);
    out.kv("Chat model", &config.openai.chat_model);
    out.kv(
        "Listening",
        &format!("http://{}:{}", config.server.host, config.server.port),
    );

    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.server.host, config.server.port))
            .await?;
    tracing::info!("Kiosk assistant listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
