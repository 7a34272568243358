#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

mod app;
mod auth;
mod config;
mod domain;
mod infra;
mod ui;
mod util;

use dioxus::prelude::*;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[cfg(feature = "desktop")]
use dioxus_desktop::{tao::window::WindowBuilder, Config as DesktopConfig};

use crate::{
    auth::{now_unix, restore_session},
    config::ClientConfig,
    infra::{ApiClient, LocalStorage},
    util::version::APP_NAME,
};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("axivai=info")),
        )
        .init();

    // Wayland explicit-sync crashes on some drivers; fall back to GL unless the caller opts in.
    if std::env::var("WAYLAND_DISPLAY").is_ok() && std::env::var("WGPU_BACKEND").is_err() {
        std::env::set_var("WGPU_BACKEND", "gl");
    }

    // WebKit's DMABUF renderer opts into explicit sync; disable it unless the user overrides.
    if std::env::var("WAYLAND_DISPLAY").is_ok()
        && std::env::var("WEBKIT_DISABLE_DMABUF_RENDERER").is_err()
    {
        std::env::set_var("WEBKIT_DISABLE_DMABUF_RENDERER", "1");
    }

    let config = ClientConfig::from_env();
    let storage = LocalStorage::open();
    let session = restore_session(&storage, now_unix());

    let client = match ApiClient::new(&config) {
        Ok(client) => client.with_token(session.token.clone()),
        Err(err) => {
            error!("failed to build API client: {err}");
            std::process::exit(1);
        }
    };
    info!(
        candidates = ?client.candidates(),
        signed_in = session.is_authenticated(),
        "starting {APP_NAME}"
    );

    let builder = LaunchBuilder::new()
        .with_context(client)
        .with_context(storage)
        .with_context(session);

    #[cfg(feature = "desktop")]
    let builder = {
        let config = desktop! {
            DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title(APP_NAME)
            )
        };
        builder.with_cfg(config)
    };

    builder.launch(app::App);
}
