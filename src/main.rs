//! Gearscope: interactive tester for the gearbox catalog API
//!
//! Fill in filter fields (or hit a preset), fetch, and inspect the grouped
//! results. The endpoint and optional x-api-key credential are configured
//! in-app and persisted; the last payload can be exported as JSON.

mod api;
mod app;
mod config;
mod export;
mod filters;
mod render;

use app::Gearscope;
use iced::{window, Size};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> iced::Result {
    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    tracing::info!("Starting Gearscope");

    iced::application(Gearscope::title, Gearscope::update, Gearscope::view)
        .theme(Gearscope::theme)
        .window(window::Settings {
            size: Size::new(900.0, 700.0),
            position: window::Position::Centered,
            resizable: true,
            ..Default::default()
        })
        .antialiasing(true)
        .run()
}
