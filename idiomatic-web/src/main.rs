use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use idiomatic::{IdiomEntry, Language, TranslationResult};
use idiomatic_mt::{TranslationOrchestrator, TranslatorConfig, load_idiom_store};

const DEFAULT_ADDR: &str = "127.0.0.1:3000";

#[derive(Serialize, Deserialize)]
pub struct TranslateRequest {
    pub text: String,
    pub source_language: String,
    pub target_language: String,
    #[serde(default)]
    pub contains_idioms: bool,
}

#[derive(Serialize, Deserialize)]
pub struct AddIdiomRequest {
    pub phrase: String,
    pub source_language: String,
    pub target_language: String,
    pub translation: String,
}

#[derive(Serialize)]
pub struct AddIdiomResponse {
    pub phrase: String,
    pub source_language: Language,
    pub target_language: Language,
}

#[derive(Serialize)]
pub struct IdiomListResponse {
    pub language: Language,
    pub count: usize,
    pub idioms: Vec<IdiomEntry>,
}

#[derive(Serialize)]
pub struct LanguageInfo {
    pub code: Language,
    pub name: &'static str,
    pub native_name: &'static str,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub idiom_languages: Vec<Language>,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

#[derive(Clone)]
pub struct AppState {
    pub orchestrator: Arc<TranslationOrchestrator>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("info".parse()?),
        )
        .init();

    let config = TranslatorConfig::from_env()
        .map_err(|e| format!("Invalid translator configuration: {}", e))?;
    let store = load_idiom_store().map_err(|e| format!("Failed to load idiom data: {}", e))?;
    let orchestrator = TranslationOrchestrator::from_config(&config, store)
        .map_err(|e| format!("Failed to initialize translator: {}", e))?;
    let state = AppState {
        orchestrator: Arc::new(orchestrator),
    };

    info!("Starting idiomatic translation server");

    let app = build_router(state);

    let addr = std::env::var("IDIOMATIC_WEB_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("🚀 Server running at http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/languages", get(list_languages))
        .route("/api/translate", post(translate_text))
        .route("/api/idioms", post(add_idiom))
        .route("/api/idioms/{language}", get(list_idioms))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

fn bad_request(error: impl std::fmt::Display) -> ApiError {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: error.to_string(),
        }),
    )
}

fn parse_language(code: &str) -> Result<Language, ApiError> {
    code.parse().map_err(bad_request)
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        idiom_languages: state.orchestrator.idiom_languages().await,
    })
}

async fn list_languages() -> Json<Vec<LanguageInfo>> {
    Json(
        Language::ALL
            .iter()
            .map(|language| LanguageInfo {
                code: *language,
                name: language.name(),
                native_name: language.native_name(),
            })
            .collect(),
    )
}

async fn translate_text(
    State(state): State<AppState>,
    Json(request): Json<TranslateRequest>,
) -> Result<Json<TranslationResult>, ApiError> {
    let source = parse_language(&request.source_language)?;
    let target = parse_language(&request.target_language)?;
    info!(
        %source,
        %target,
        text_length = request.text.chars().count(),
        contains_idioms = request.contains_idioms,
        "Translation requested"
    );

    let result = state
        .orchestrator
        .translate(&request.text, source, target, request.contains_idioms)
        .await;

    info!(
        method = %result.translation_method,
        idiom_based = result.translation_method.is_idiom_based(),
        "Translation finished"
    );
    Ok(Json(result))
}

async fn add_idiom(
    State(state): State<AppState>,
    Json(request): Json<AddIdiomRequest>,
) -> Result<(StatusCode, Json<AddIdiomResponse>), ApiError> {
    let source = parse_language(&request.source_language)?;
    let target = parse_language(&request.target_language)?;

    state
        .orchestrator
        .add_idiom(&request.phrase, source, target, &request.translation)
        .await
        .map_err(bad_request)?;

    Ok((
        StatusCode::CREATED,
        Json(AddIdiomResponse {
            phrase: request.phrase.trim().to_string(),
            source_language: source,
            target_language: target,
        }),
    ))
}

async fn list_idioms(
    State(state): State<AppState>,
    Path(language): Path<String>,
) -> Result<Json<IdiomListResponse>, ApiError> {
    let language = parse_language(&language)?;
    let idioms = state.orchestrator.idioms(language).await;
    Ok(Json(IdiomListResponse {
        language,
        count: idioms.len(),
        idioms,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, header};
    use idiomatic::IdiomStore;
    use idiomatic_mt::{MockMode, MockTranslator};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    fn test_app() -> Router {
        let orchestrator = TranslationOrchestrator::new(IdiomStore::builtin())
            .with_libre_endpoint(Arc::new(MockTranslator::new(MockMode::Suffix)));
        build_router(AppState {
            orchestrator: Arc::new(orchestrator),
        })
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    // ========== Translate Endpoint ==========

    #[tokio::test]
    async fn test_translate_idiom() {
        let (status, body) = send(
            test_app(),
            post_json(
                "/api/translate",
                json!({"text": "Break a leg!", "source_language": "en", "target_language": "fr"}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["translated_text"], "Bonne chance (souhait de réussite)");
        assert_eq!(body["translation_method"], "idiom_database");
        assert_eq!(body["is_idiom"], true);
    }

    #[tokio::test]
    async fn test_translate_through_provider() {
        let (status, body) = send(
            test_app(),
            post_json(
                "/api/translate",
                json!({
                    "text": "See you tomorrow",
                    "source_language": "en-US",
                    "target_language": "es",
                    "contains_idioms": false
                }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["translated_text"], "See you tomorrow_es");
        assert_eq!(body["translation_method"], "libre_translate");
    }

    #[tokio::test]
    async fn test_translate_rejects_unknown_language() {
        let (status, body) = send(
            test_app(),
            post_json(
                "/api/translate",
                json!({"text": "Hello", "source_language": "en", "target_language": "xx"}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("xx"));
    }

    // ========== Idiom Endpoints ==========

    #[tokio::test]
    async fn test_add_then_list_idiom() {
        let app = test_app();
        let (status, body) = send(
            app.clone(),
            post_json(
                "/api/idioms",
                json!({
                    "phrase": "spill the beans",
                    "source_language": "en",
                    "target_language": "fr",
                    "translation": "Vendre la mèche"
                }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["phrase"], "spill the beans");
        assert_eq!(body["target_language"], "fr");

        let (status, body) = send(app.clone(), get("/api/idioms/en")).await;
        assert_eq!(status, StatusCode::OK);
        let idioms = body["idioms"].as_array().unwrap();
        assert_eq!(body["count"], idioms.len());
        assert_eq!(idioms[0]["phrase"], "break a leg");
        assert!(idioms.iter().any(|i| i["phrase"] == "spill the beans"));

        let (_, body) = send(
            app,
            post_json(
                "/api/translate",
                json!({"text": "spill the beans", "source_language": "en", "target_language": "fr"}),
            ),
        )
        .await;
        assert_eq!(body["translated_text"], "Vendre la mèche");
    }

    #[tokio::test]
    async fn test_add_idiom_rejects_empty_translation() {
        let (status, body) = send(
            test_app(),
            post_json(
                "/api/idioms",
                json!({
                    "phrase": "spill the beans",
                    "source_language": "en",
                    "target_language": "fr",
                    "translation": "  "
                }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("empty"));
    }

    #[tokio::test]
    async fn test_list_idioms_bad_language() {
        let (status, _) = send(test_app(), get("/api/idioms/e!")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    // ========== Languages ==========

    #[tokio::test]
    async fn test_list_languages() {
        let (status, body) = send(test_app(), get("/api/languages")).await;
        assert_eq!(status, StatusCode::OK);
        let languages = body.as_array().unwrap();
        assert_eq!(languages.len(), Language::ALL.len());
        assert_eq!(languages[0]["code"], "en");
        let french = languages.iter().find(|l| l["code"] == "fr").unwrap();
        assert_eq!(french["name"], "French");
        assert_eq!(french["native_name"], "Français");
        let chinese = languages.iter().find(|l| l["code"] == "zh-CN").unwrap();
        assert_eq!(chinese["name"], "Chinese (Simplified)");
    }

    // ========== Health ==========

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(test_app(), get("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert!(body["idiom_languages"].as_array().unwrap().contains(&json!("en")));
    }
}
