//! Web server: create competitions from presets and read back their generated structure.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default.
//! Override with env: HOST (e.g. 127.0.0.1), PORT (e.g. 8080).

use actix_web::{
    get, post, put,
    web::{Data, Json, Path},
    App, HttpResponse, HttpServer, Responder,
};
use competition_engine::{
    create_competition, BuildError, CompetitionId, CompetitionParams, CompetitionStore,
    MemoryStore, StoreError,
};
use serde::Deserialize;

type AppState = Data<MemoryStore>;

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct ChampionBody {
    champion: String,
}

/// Path segment: competition id (e.g. /api/competitions/{id})
#[derive(Deserialize)]
struct CompetitionPath {
    id: CompetitionId,
}

fn store_error_response(e: StoreError) -> HttpResponse {
    match e {
        StoreError::NotFound(_) => {
            HttpResponse::NotFound().json(serde_json::json!({ "error": "No competition" }))
        }
        other => {
            log::error!("Store error: {}", other);
            HttpResponse::InternalServerError().json(serde_json::json!({ "error": other.to_string() }))
        }
    }
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "competition-engine",
    })
}

/// Create a competition and generate its structure. 422 with per-field messages if rejected.
#[post("/api/competitions")]
async fn api_create_competition(state: AppState, body: Json<CompetitionParams>) -> HttpResponse {
    let competition = match body.into_inner().into_competition() {
        Ok(c) => c,
        Err(errors) => {
            return HttpResponse::UnprocessableEntity().json(serde_json::json!({ "errors": errors }))
        }
    };
    match create_competition(state.get_ref(), competition) {
        Ok(c) => HttpResponse::Created().json(c),
        Err(BuildError::Invalid(errors)) => {
            HttpResponse::UnprocessableEntity().json(serde_json::json!({ "errors": errors }))
        }
        Err(e) => {
            log::error!("Failed to create competition: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({ "error": e.to_string() }))
        }
    }
}

/// List stored competitions with structure counts.
#[get("/api/competitions")]
async fn api_list_competitions(state: AppState) -> HttpResponse {
    match state.get_ref().list() {
        Ok(listings) => HttpResponse::Ok().json(listings),
        Err(e) => store_error_response(e),
    }
}

/// Get a competition with all its stages (404 if not found).
#[get("/api/competitions/{id}")]
async fn api_get_competition(state: AppState, path: Path<CompetitionPath>) -> HttpResponse {
    match state.get_ref().get(path.id) {
        Ok(Some(c)) => HttpResponse::Ok().json(c),
        Ok(None) => HttpResponse::NotFound().json(serde_json::json!({ "error": "No competition" })),
        Err(e) => store_error_response(e),
    }
}

/// Record the champion (the only change allowed after generation).
#[put("/api/competitions/{id}/champion")]
async fn api_set_champion(
    state: AppState,
    path: Path<CompetitionPath>,
    body: Json<ChampionBody>,
) -> HttpResponse {
    let champion = body.champion.trim();
    if champion.is_empty() {
        return HttpResponse::UnprocessableEntity()
            .json(serde_json::json!({ "errors": { "champion": ["can't be blank"] } }));
    }
    match state.get_ref().set_champion(path.id, champion) {
        Ok(c) => HttpResponse::Ok().json(c),
        Err(e) => store_error_response(e),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let bind = (host.as_str(), port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    let state = Data::new(MemoryStore::new());

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .service(api_health)
            .service(api_create_competition)
            .service(api_list_competitions)
            .service(api_get_competition)
            .service(api_set_champion)
    })
    .bind(bind)?
    .run()
    .await
}
