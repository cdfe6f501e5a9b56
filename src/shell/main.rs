use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{Extension, routing::get};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, fmt};

use staff_presence::modules::calendar::core::academic_calendar::AcademicCalendar;
use staff_presence::shared::core::clock::SystemClock;
use staff_presence::shared::infrastructure::teacher_repository::in_memory::InMemoryTeacherRepository;
use staff_presence::shell::config::AppConfig;
use staff_presence::shell::graphql::{AppSchema, build_schema};
use staff_presence::shell::http::router;
use staff_presence::shell::snapshot::{load_snapshot, save_snapshot, shutdown_signal};
use staff_presence::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = AppConfig::from_env()?;

    let repository = Arc::new(InMemoryTeacherRepository::new());
    if let Some(path) = &config.snapshot {
        load_snapshot(&repository, path).await?;
    }

    let calendar = AcademicCalendar::builtin()?;
    let state = AppState::new(repository.clone(), Arc::new(SystemClock), calendar);
    let schema = build_schema(state.clone());

    let app = router(state)
        .route("/gql", get(graphiql).post(graphql))
        .layer(Extension(schema))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr = config.socket_addr()?;
    tracing::info!("HTTP endpoint: http://{}/teachers", addr);
    tracing::info!("GraphQL endpoint: http://{}/gql", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Some(path) = &config.snapshot {
        save_snapshot(&repository, path).await?;
    }
    Ok(())
}

async fn graphql(Extension(schema): Extension<AppSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

async fn graphiql() -> axum::response::Html<String> {
    use async_graphql::http::GraphiQLSource;
    axum::response::Html(GraphiQLSource::build().endpoint("/gql").finish())
}
