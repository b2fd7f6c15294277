//! Command handlers.

use std::sync::Arc;

use serde_json::json;
use tracing::info;

use surfacegate_config::{Config, ConfigValidator};
use surfacegate_core::{PageContext, SurfaceAdapter, ViewershipStateStore};
use surfacegate_protocols::Surface;
use surfacegate_store::LogTouchpoints;

use crate::wiring::App;

type CmdResult = Result<(), Box<dyn std::error::Error>>;

fn print_json(value: &serde_json::Value) -> CmdResult {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub(crate) async fn evaluate(app: &App, surface: Surface, page_load: bool) -> CmdResult {
    let engine = Arc::new(app.engine());
    let result = if page_load {
        let adapter = SurfaceAdapter::new(
            surface,
            engine,
            app.host.clone(),
            Arc::new(LogTouchpoints),
            app.analytics.clone(),
        );
        serde_json::to_value(adapter.on_page_load().await)?
    } else {
        serde_json::to_value(engine.evaluate(surface).await)?
    };

    print_json(&json!({
        "surface": surface,
        "result": result,
        "experimentCodes": app.tracker.active_codes(),
        "analytics": app.analytics.events(),
    }))
}

pub(crate) fn state(app: &App, surface: Surface) -> CmdResult {
    let store = ViewershipStateStore::new(app.kv.as_ref(), surface);
    let persisted = store.load()?;
    print_json(&json!({
        "surface": surface,
        "keys": {
            "enablementStatus": store.keys().enablement_status,
            "defaultViewership": store.keys().default_viewership,
            "implicitDvEnabled": store.keys().implicit_dv_enabled,
        },
        "state": persisted,
    }))
}

pub(crate) fn clear(app: &App, surface: Surface) -> CmdResult {
    ViewershipStateStore::new(app.kv.as_ref(), surface).clear()?;
    info!("Cleared viewership state for {}", surface);
    Ok(())
}

pub(crate) async fn touchpoint(app: &App, surface_name_key: Option<&str>) -> CmdResult {
    let config = app.convert_to_pdf_gate().resolve(surface_name_key).await;
    print_json(&json!({
        "touchpoint": config,
        "experimentCodes": app.tracker.active_codes(),
    }))
}

pub(crate) fn visit(app: &App, surface: Surface, url: &str, framed: bool) -> CmdResult {
    let page = PageContext::from_url(url, framed).ok_or_else(|| format!("Invalid URL: {url}"))?;
    let sent = app.visit_reporter().report(surface, &page);
    print_json(&json!({
        "surface": surface,
        "sent": sent,
        "analytics": app.analytics.events(),
    }))
}

pub(crate) fn check_config(config: &Config) -> CmdResult {
    let result = ConfigValidator::validate(config);
    for warning in &result.warnings {
        println!("warning: {}: {}", warning.path, warning.message);
    }
    for error in &result.errors {
        println!("error: {}: {}", error.path, error.message);
    }
    let warnings = result.into_result()?;
    println!("Configuration OK ({} warnings)", warnings.len());
    Ok(())
}
