//! Report Server
//!
//! Serves internal-control reports for audit institutions. Provides REST
//! endpoints for:
//!
//! - Localized report content from COSO/INTOSAI metrics
//! - Paginated PDF rendering of report content
//! - Report type listing

use std::net::SocketAddr;

use axum::{
    routing::{get, post},
    Router,
};
use clap::Parser;
use report_pdf::PageGeometry;
use shared_types::Locale;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, Level};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod api;
mod error;
mod state;
#[cfg(test)]
mod tests;

use api::{handle_generate_content, handle_health, handle_list_report_types, handle_render_report};
use state::AppState;

/// Command-line arguments for the report server
#[derive(Parser, Debug)]
#[command(name = "report-server")]
#[command(about = "Internal-control report content and PDF rendering server")]
struct Args {
    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value = "3000")]
    port: u16,

    /// Host address to bind to
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    host: String,

    /// Page width in millimetres
    #[arg(long, env = "REPORT_PAGE_WIDTH_MM", default_value = "210")]
    page_width_mm: f64,

    /// Page height in millimetres
    #[arg(long, env = "REPORT_PAGE_HEIGHT_MM", default_value = "297")]
    page_height_mm: f64,

    /// Margin on every side in millimetres
    #[arg(long, env = "REPORT_MARGIN_MM", default_value = "20")]
    margin_mm: f64,

    /// Vertical advance per line in millimetres
    #[arg(long, env = "REPORT_LINE_HEIGHT_MM", default_value = "6")]
    line_height_mm: f64,

    /// Locale used when a request does not name one
    #[arg(long, env = "REPORT_LOCALE", default_value = "en")]
    locale: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn geometry(&self) -> PageGeometry {
        PageGeometry {
            width_mm: self.page_width_mm,
            height_mm: self.page_height_mm,
            margin_mm: self.margin_mm,
            line_height_mm: self.line_height_mm,
        }
    }
}

fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .expose_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(handle_health))
        // API endpoints
        .route("/api/report-types", get(handle_list_report_types))
        .route("/api/reports/content", post(handle_generate_content))
        .route("/api/reports/render", post(handle_render_report))
        // Apply middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    let log_level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(log_level.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let geometry = args.geometry();
    geometry.validate()?;

    let locale: Locale = args
        .locale
        .parse()
        .map_err(|e: String| anyhow::anyhow!(e))?;

    let state = AppState::new(geometry, locale);

    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("Server listening on http://{}", addr);
    info!(
        "Page geometry: {}x{}mm, margin {}mm, line height {}mm ({} rows per page)",
        geometry.width_mm,
        geometry.height_mm,
        geometry.margin_mm,
        geometry.line_height_mm,
        geometry.rows_per_page()
    );
    info!("Default locale: {}", locale.code());

    axum::serve(listener, app(state)).await?;

    Ok(())
}
