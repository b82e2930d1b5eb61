// Framework bootstrap for the referee runtime.

use crate::frameworks::config::{self, ServerSettings};
use crate::interface_adapters::routes;
use crate::interface_adapters::state::{AppState, RandomMoves, SystemClock};
use crate::use_cases::{MatchSession, RefereeSettings, countdown_ticker};

use std::net::SocketAddr;
use std::{io::Result, sync::Arc};

fn init_runtime() {
    let _ = dotenvy::dotenv();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "referee panicked");
    }));

    tracing::debug!(json_logs = json, "referee runtime initialised");
}

pub async fn run(listener: tokio::net::TcpListener) -> Result<()> {
    run_with_settings(listener, ServerSettings::from_env()).await
}

pub async fn run_with_settings(
    listener: tokio::net::TcpListener,
    settings: ServerSettings,
) -> Result<()> {
    let address = listener.local_addr()?;
    let state = build_state(&settings);

    // The ticker holds a weak handle and stops with the session.
    tokio::spawn(countdown_ticker(
        Arc::downgrade(&state.session),
        settings.tick_interval,
    ));

    let app = routes::app(state);

    tracing::info!(
        %address,
        winning_score = settings.winning_score,
        countdown_secs = settings.countdown.as_secs(),
        "referee listening"
    );

    // Serve app and report errors rather than panicking
    axum::serve(listener, app).await.inspect_err(|e| {
        tracing::error!(error = %e, "server error");
    })
}

pub async fn run_with_config() -> Result<()> {
    init_runtime();

    let settings = ServerSettings::from_env();
    let address = SocketAddr::from(([127, 0, 0, 1], config::http_port()));

    let listener = tokio::net::TcpListener::bind(address)
        .await
        .inspect_err(|e| {
            tracing::error!(%address, error = %e, "referee could not bind its port");
        })?;

    run_with_settings(listener, settings).await
}

fn build_state(settings: &ServerSettings) -> Arc<AppState> {
    let session = MatchSession::new(
        Box::new(RandomMoves::from_entropy()),
        Arc::new(SystemClock),
        RefereeSettings {
            countdown: settings.countdown,
        },
    );

    Arc::new(AppState {
        session: Arc::new(session),
        default_winning_score: settings.winning_score,
    })
}
