//! Server construction and wiring.

mod config;

pub use config::{ConfigError, DEFAULT_BIND_ADDR, DEFAULT_DB_NAME, ServerConfig};

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::{info, warn};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[cfg(debug_assertions)]
use crate::doc::ApiDoc;
use crate::domain::ports::{QuestionStore, UserStore};
use crate::inbound::http::health::{HealthState, live, ready};
use crate::inbound::http::questions::list_questions;
use crate::inbound::http::quiz::{get_score, submit_answer};
use crate::inbound::http::registration::{get_user_by_referral_code, register};
use crate::inbound::http::state::HttpState;
use crate::middleware::trace::Trace;
use crate::outbound::persistence::{
    MemoryQuestionStore, MemoryUserStore, MongoQuestionStore, MongoUserStore, connect,
};
use crate::outbound::seed;

/// Select store adapters from the configuration.
///
/// MongoDB when a URI is configured, in-memory otherwise. With MongoDB, a
/// configured seed file populates an empty question collection at startup;
/// without MongoDB, the seed file (or the built-in dataset) backs the
/// in-memory question store directly.
pub async fn build_stores(
    config: &ServerConfig,
) -> std::io::Result<(Arc<dyn UserStore>, Arc<dyn QuestionStore>)> {
    match &config.mongodb_uri {
        Some(uri) => {
            let db = connect(uri, &config.mongodb_db)
                .await
                .map_err(std::io::Error::other)?;
            let questions = MongoQuestionStore::new(&db);
            if let Some(path) = &config.questions_file {
                let dataset = seed::load_from_file(path).map_err(std::io::Error::other)?;
                questions
                    .seed_if_empty(&dataset)
                    .await
                    .map_err(std::io::Error::other)?;
            }
            Ok((
                Arc::new(MongoUserStore::new(&db)),
                Arc::new(questions),
            ))
        }
        None => {
            warn!("MONGODB_URI not set; using in-memory stores, state dies with the process");
            let dataset = match &config.questions_file {
                Some(path) => seed::load_from_file(path).map_err(std::io::Error::other)?,
                None => seed::default_dataset(),
            };
            Ok((
                Arc::new(MemoryUserStore::new()),
                Arc::new(MemoryQuestionStore::new(dataset)),
            ))
        }
    }
}

/// Assemble the actix application: middleware, endpoints, and (in debug
/// builds) Swagger UI.
pub fn build_app(
    state: HttpState,
    health_state: web::Data<HealthState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    #[cfg_attr(not(debug_assertions), expect(unused_mut, reason = "mutated in debug builds"))]
    let mut app = App::new()
        .app_data(web::Data::new(state))
        .app_data(health_state)
        .wrap(Trace)
        .service(register)
        .service(get_user_by_referral_code)
        .service(list_questions)
        .service(submit_answer)
        .service(get_score)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    {
        app = app.service(SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()));
    }

    app
}

/// Build stores, bind, and run the HTTP server until shutdown.
pub async fn run(config: ServerConfig) -> std::io::Result<()> {
    let (users, questions) = build_stores(&config).await?;
    let state = HttpState::new(users, questions);

    let health_state = web::Data::new(HealthState::new());
    // Clone for the server factory so the readiness probe stays reachable.
    let server_health_state = health_state.clone();
    let server = HttpServer::new(move || {
        build_app(state.clone(), server_health_state.clone())
    })
    .bind(config.bind_addr)?;

    info!(addr = %config.bind_addr, "server listening");
    health_state.mark_ready();
    server.run().await
}
