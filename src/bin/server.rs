use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::{net::SocketAddr, path::PathBuf, sync::Arc};

use rungs::{ladder_layout, load_word_text, normalize_input, solve, LadderLayout, Solution};

/// Command-line options for the HTTP server.
#[derive(Parser)]
#[command(
    author,
    version,
    about = "Rungs HTTP server for solving and laying out word ladders"
)]
struct Config {
    /// Path to the word-list file
    #[arg(short, long, value_name = "WORDS")]
    words: PathBuf,

    /// Address to bind the HTTP server to (e.g. 127.0.0.1:3000)
    #[arg(long, default_value = "127.0.0.1:3000")]
    addr: SocketAddr,

    /// Default maximum number of paths to return in one response
    #[arg(short = 'n', long, default_value_t = 100)]
    limit: usize,
}

/// Shared application state.
#[derive(Clone)]
struct AppState {
    dictionary: Arc<String>,
    default_limit: usize,
}

/// Error response.
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

/// Query parameters for /solve and /layout
#[derive(Deserialize)]
struct SolveParams {
    begin: String,
    end: String,
    limit: Option<usize>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();
    let cfg = Config::parse();

    let dictionary = load_word_text(&cfg.words)?;
    tracing::info!(
        "loaded word list {:?} ({} bytes)",
        cfg.words,
        dictionary.len()
    );

    let state = AppState {
        dictionary: Arc::new(dictionary),
        default_limit: cfg.limit,
    };

    // Build the router
    let app = Router::new()
        .route("/solve", get(solve_ladder))
        .route("/layout", get(layout_ladder))
        .with_state(state);

    tracing::info!("listening on {}", cfg.addr);
    axum::Server::bind(&cfg.addr)
        .serve(app.into_make_service())
        .await?;
    Ok(())
}

fn check_params(params: &SolveParams) -> Result<(), (StatusCode, Json<ErrorResponse>)> {
    if params.begin.trim().is_empty() || params.end.trim().is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "begin and end must be non-empty".to_string(),
            }),
        ));
    }
    Ok(())
}

async fn solve_ladder(
    State(state): State<AppState>,
    Query(params): Query<SolveParams>,
) -> Result<Json<Solution>, (StatusCode, Json<ErrorResponse>)> {
    check_params(&params)?;
    let norm = normalize_input(&params.begin, &params.end, &state.dictionary);
    let mut solution = solve(&norm.begin, &norm.end, &norm.words);
    let limit = params.limit.unwrap_or(state.default_limit);
    solution.paths.truncate(limit);
    Ok(Json(solution))
}

async fn layout_ladder(
    State(state): State<AppState>,
    Query(params): Query<SolveParams>,
) -> Result<Json<LadderLayout>, (StatusCode, Json<ErrorResponse>)> {
    check_params(&params)?;
    let norm = normalize_input(&params.begin, &params.end, &state.dictionary);
    let solution = solve(&norm.begin, &norm.end, &norm.words);
    Ok(Json(ladder_layout(&solution.frames, &solution.paths)))
}
