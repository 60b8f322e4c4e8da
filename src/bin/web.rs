use axum::extract::{Query, State};
use axum::response::Json;
use axum::{http::Method, http::StatusCode, routing::get, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::{error, info};
use wordscrape::{load_stopwords, Analysis, Analyzer, Config, Dictionary, Document, Error, Extractor, Fetcher};

struct AppState {
    analyzer: Analyzer,
    fetcher: Fetcher,
    extractor: Extractor,
    dictionary: Dictionary,
}

#[derive(Deserialize)]
struct AnalyzeParams {
    url: Option<String>,
    text: Option<String>,
    k: Option<usize>,
}

#[derive(Deserialize)]
struct LinksParams {
    url: String,
}

#[derive(Deserialize)]
struct DefineParams {
    word: String,
}

#[derive(Serialize)]
struct DefineResponse {
    word: String,
    definition: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let config = Config::from_env()?;
    let fetcher = Fetcher::new(&config)?;
    let state = Arc::new(AppState {
        analyzer: Analyzer::new(load_stopwords(&config)?),
        extractor: Extractor::from_config(&config)?,
        dictionary: Dictionary::from_config(fetcher.client().clone(), &config)?,
        fetcher,
    });

    let app = Router::new()
        .route("/analyze", get(handle_analyze))
        .route("/links", get(handle_links))
        .route("/define", get(handle_define))
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET]),
        );

    info!("server listening on {}...", config.bind_addr);
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn handle_analyze(
    Query(params): Query<AnalyzeParams>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<Analysis>, StatusCode> {
    let document = match corpus_input(&params)? {
        Input::Url(url) => Document::from_url(&state.fetcher, &state.extractor, url)
            .await
            .map_err(status)?,
        Input::Text(text) => Document::from_text(text),
    };
    let analysis = state
        .analyzer
        .analyze(&document.content, params.k)
        .map_err(status)?;
    Ok(Json(analysis))
}

#[derive(Debug, PartialEq)]
enum Input<'a> {
    Url(&'a str),
    Text(&'a str),
}

/// Exactly one of `url` and `text` must be given.
fn corpus_input(params: &AnalyzeParams) -> Result<Input<'_>, StatusCode> {
    match (&params.url, &params.text) {
        (Some(url), None) => Ok(Input::Url(url)),
        (None, Some(text)) => Ok(Input::Text(text)),
        _ => Err(StatusCode::BAD_REQUEST),
    }
}

async fn handle_links(
    Query(params): Query<LinksParams>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<String>>, StatusCode> {
    let document = Document::from_url(&state.fetcher, &state.extractor, &params.url)
        .await
        .map_err(status)?;
    Ok(Json(document.links))
}

async fn handle_define(
    Query(params): Query<DefineParams>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<DefineResponse>, StatusCode> {
    let definition = state.dictionary.define(&params.word).await.map_err(status)?;
    Ok(Json(DefineResponse {
        word: params.word,
        definition,
    }))
}

fn status(e: Error) -> StatusCode {
    match e {
        Error::InvalidArgument(_) => StatusCode::BAD_REQUEST,
        Error::NotFound(_) => StatusCode::NOT_FOUND,
        Error::Network(e) => {
            error!("upstream request failed: {}", e);
            StatusCode::BAD_GATEWAY
        }
        e => {
            error!("{}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}
