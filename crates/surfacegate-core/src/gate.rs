//! Default viewership gate for a live surface.
//!
//! A surface's live configuration is a plain [`SurfaceState`] value owned by
//! its adapter; the operations here are transitions returning the new value.

use serde::Serialize;
use tracing::debug;

use surfacegate_protocols::{Decision, HostEnvironment, Surface, Touchpoints};

/// Live default-viewership configuration of one surface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SurfaceState {
    pub feature_enabled: bool,
    pub is_acrobat_default_for_surface: bool,
}

impl SurfaceState {
    pub fn from_decision(decision: &Decision) -> Self {
        Self {
            feature_enabled: decision.enabled,
            is_acrobat_default_for_surface: decision.is_acrobat_default_for_surface,
        }
    }
}

/// Whether the extension currently acts as default viewer on `surface`.
///
/// Requires the feature, the surface default, a resolvable extension
/// identity and an add-on status that is explicitly not default.
pub fn is_default_viewer(
    surface: Surface,
    state: &SurfaceState,
    host: &dyn HostEnvironment,
) -> bool {
    state.feature_enabled
        && state.is_acrobat_default_for_surface
        && host.extension_id().is_some()
        && host.add_on_default(surface) == Some(false)
}

/// Claim default viewership and drop the now-stale touch points.
///
/// No-op unless the feature is enabled and the extension is not already the
/// default viewer by [`is_default_viewer`]. A surface marked default while
/// the add-on still holds the default is claimed again.
pub fn take_default_viewership(
    surface: Surface,
    state: SurfaceState,
    host: &dyn HostEnvironment,
    touchpoints: &dyn Touchpoints,
) -> SurfaceState {
    if !state.feature_enabled || is_default_viewer(surface, &state, host) {
        return state;
    }
    debug!("Taking default viewership on {}", surface);
    touchpoints.remove_all(surface);
    SurfaceState {
        is_acrobat_default_for_surface: true,
        ..state
    }
}

pub fn reset_default_viewership(state: SurfaceState) -> SurfaceState {
    SurfaceState {
        is_acrobat_default_for_surface: false,
        ..state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use surfacegate_store::StaticHost;

    #[derive(Default)]
    struct FakeTouchpoints {
        removed: Mutex<Vec<Surface>>,
    }

    impl Touchpoints for FakeTouchpoints {
        fn remove_all(&self, surface: Surface) {
            self.removed.lock().push(surface);
        }

        fn show_implicit_toast(&self, _surface: Surface, _message: &str) {}
    }

    fn ready_host() -> StaticHost {
        StaticHost::new(Some("ext-id".to_string())).with_add_on_default(Surface::GoogleDrive, false)
    }

    fn defaulted() -> SurfaceState {
        SurfaceState {
            feature_enabled: true,
            is_acrobat_default_for_surface: true,
        }
    }

    fn fresh() -> SurfaceState {
        SurfaceState {
            feature_enabled: true,
            is_acrobat_default_for_surface: false,
        }
    }

    #[test]
    fn test_is_default_viewer_requires_all_signals() {
        let host = ready_host();
        assert!(is_default_viewer(Surface::GoogleDrive, &defaulted(), &host));

        let off = SurfaceState {
            feature_enabled: false,
            ..defaulted()
        };
        assert!(!is_default_viewer(Surface::GoogleDrive, &off, &host));
        assert!(!is_default_viewer(Surface::GoogleDrive, &fresh(), &host));
    }

    #[test]
    fn test_is_default_viewer_unresolvable_identity() {
        let host = StaticHost::new(None).with_add_on_default(Surface::GoogleDrive, false);
        assert!(!is_default_viewer(Surface::GoogleDrive, &defaulted(), &host));
    }

    #[test]
    fn test_is_default_viewer_add_on_status() {
        let unknown = StaticHost::new(Some("ext-id".to_string()));
        assert!(!is_default_viewer(Surface::GoogleDrive, &defaulted(), &unknown));

        let add_on_default = unknown.with_add_on_default(Surface::GoogleDrive, true);
        assert!(!is_default_viewer(Surface::GoogleDrive, &defaulted(), &add_on_default));
    }

    #[test]
    fn test_take_default_viewership() {
        let touchpoints = FakeTouchpoints::default();

        let taken =
            take_default_viewership(Surface::GoogleDrive, fresh(), &ready_host(), &touchpoints);

        assert!(taken.is_acrobat_default_for_surface);
        assert_eq!(*touchpoints.removed.lock(), vec![Surface::GoogleDrive]);
    }

    #[test]
    fn test_take_is_idempotent() {
        let touchpoints = FakeTouchpoints::default();
        let host = ready_host();
        let once = take_default_viewership(Surface::GoogleDrive, fresh(), &host, &touchpoints);
        let twice = take_default_viewership(Surface::GoogleDrive, once, &host, &touchpoints);

        assert_eq!(once, twice);
        assert_eq!(touchpoints.removed.lock().len(), 1);
    }

    #[test]
    fn test_take_while_add_on_holds_default_removes_touch_points() {
        let touchpoints = FakeTouchpoints::default();
        let host = StaticHost::new(Some("ext-id".to_string()))
            .with_add_on_default(Surface::GoogleDrive, true);

        let after = take_default_viewership(Surface::GoogleDrive, defaulted(), &host, &touchpoints);

        assert_eq!(after, defaulted());
        assert_eq!(*touchpoints.removed.lock(), vec![Surface::GoogleDrive]);
    }

    #[test]
    fn test_take_with_unresolvable_identity_removes_touch_points() {
        let touchpoints = FakeTouchpoints::default();
        let host = StaticHost::new(None).with_add_on_default(Surface::Gmail, false);

        take_default_viewership(Surface::Gmail, defaulted(), &host, &touchpoints);

        assert_eq!(*touchpoints.removed.lock(), vec![Surface::Gmail]);
    }

    #[test]
    fn test_take_without_feature_is_noop() {
        let touchpoints = FakeTouchpoints::default();
        let state = SurfaceState::default();

        let after = take_default_viewership(Surface::Gmail, state, &ready_host(), &touchpoints);

        assert_eq!(after, state);
        assert!(touchpoints.removed.lock().is_empty());
    }

    #[test]
    fn test_reset_default_viewership() {
        let reset = reset_default_viewership(defaulted());
        assert!(!reset.is_acrobat_default_for_surface);
        assert!(reset.feature_enabled);
        assert_eq!(reset_default_viewership(reset), reset);
    }

    #[test]
    fn test_from_decision() {
        let decision = Decision {
            enabled: true,
            is_acrobat_default_for_surface: false,
            ..Decision::default()
        };
        assert_eq!(SurfaceState::from_decision(&decision), fresh());
    }
}
