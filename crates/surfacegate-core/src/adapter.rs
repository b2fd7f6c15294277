//! Per-surface glue between the engine and a page's touch points.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use serde::Serialize;
use tracing::debug;

use surfacegate_protocols::{AnalyticsSink, Decision, HostEnvironment, Surface, Touchpoints};

use crate::engine::ViewershipEngine;
use crate::gate::{self, SurfaceState};

/// What a page load resolved to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageLoadOutcome {
    pub decision: Decision,
    pub state: SurfaceState,
    pub is_default_viewer: bool,
    pub toast_shown: bool,
}

/// Applies engine decisions to one surface.
///
/// One adapter lives as long as the surface's page; the implicit toast is
/// shown at most once per adapter.
pub struct SurfaceAdapter {
    surface: Surface,
    engine: Arc<ViewershipEngine>,
    host: Arc<dyn HostEnvironment>,
    touchpoints: Arc<dyn Touchpoints>,
    analytics: Arc<dyn AnalyticsSink>,
    toast_shown: AtomicBool,
}

impl SurfaceAdapter {
    pub fn new(
        surface: Surface,
        engine: Arc<ViewershipEngine>,
        host: Arc<dyn HostEnvironment>,
        touchpoints: Arc<dyn Touchpoints>,
        analytics: Arc<dyn AnalyticsSink>,
    ) -> Self {
        Self {
            surface,
            engine,
            host,
            touchpoints,
            analytics,
            toast_shown: AtomicBool::new(false),
        }
    }

    pub fn surface(&self) -> Surface {
        self.surface
    }

    /// Evaluate the surface and apply the decision to its touch points.
    pub async fn on_page_load(&self) -> PageLoadOutcome {
        let decision = self.engine.evaluate(self.surface).await;
        let host = self.host.as_ref();
        let mut state = SurfaceState::from_decision(&decision);
        let mut toast_shown = false;

        if decision.enabled && !gate::is_default_viewer(self.surface, &state, host) {
            state = gate::take_default_viewership(
                self.surface,
                state,
                host,
                self.touchpoints.as_ref(),
            );
            toast_shown = self.show_toast_once(&decision.toast_message);
        }

        let is_default_viewer = gate::is_default_viewer(self.surface, &state, host);
        debug!(
            "{} page load: enabled={} default_viewer={}",
            self.surface, decision.enabled, is_default_viewer
        );

        PageLoadOutcome {
            decision,
            state,
            is_default_viewer,
            toast_shown,
        }
    }

    fn show_toast_once(&self, message: &str) -> bool {
        if message.is_empty() || self.toast_shown.swap(true, Ordering::SeqCst) {
            return false;
        }
        self.touchpoints.show_implicit_toast(self.surface, message);
        self.analytics.send(&format!(
            "DCBrowserExt:{}:ImplicitDV:Toast:Shown",
            self.surface.analytics_name()
        ));
        true
    }
}
