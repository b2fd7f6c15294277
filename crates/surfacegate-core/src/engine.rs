//! Implicit default viewership decision engine.
//!
//! Combines remote flag state, locale bucketing and per-surface persisted
//! preferences into a single [`Decision`]. Every collaborator failure is
//! recovered here; callers only ever see a (possibly disabled) decision.

use std::sync::Arc;

use tracing::{debug, warn};

use surfacegate_protocols::{
    Arm, Decision, DefaultHandlerSignal, ExperimentAssignment, ExperimentTracker, FlagMetadata,
    FlagStore, FteStrings, Localization, PersistentKv, Surface, TriState,
};

use crate::locale;
use crate::state::{self, PersistedViewershipState, ViewershipStateStore};

/// External collaborators consumed by the engine.
#[derive(Clone)]
pub struct Collaborators {
    pub flags: Arc<dyn FlagStore>,
    pub kv: Arc<dyn PersistentKv>,
    pub tracker: Arc<dyn ExperimentTracker>,
    pub localization: Arc<dyn Localization>,
    pub default_handler: Arc<dyn DefaultHandlerSignal>,
}

/// Name of the implicit default viewership flag for one arm of a surface.
pub fn flag_name(surface: Surface, arm: Arm) -> String {
    match arm {
        Arm::Treatment => format!("dc-cv-{}-implicit-default-viewership", surface.key()),
        Arm::Control => format!("dc-cv-{}-implicit-default-viewership-control", surface.key()),
    }
}

/// Which flags are on for a surface in the current call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FlagPresence {
    treatment: bool,
    control: bool,
}

impl FlagPresence {
    /// The flag whose metadata drives eligibility. Treatment wins when both are on.
    fn leading_arm(self) -> Option<Arm> {
        match (self.treatment, self.control) {
            (true, _) => Some(Arm::Treatment),
            (false, true) => Some(Arm::Control),
            (false, false) => None,
        }
    }

    fn has(self, arm: Arm) -> bool {
        match arm {
            Arm::Treatment => self.treatment,
            Arm::Control => self.control,
        }
    }
}

/// The arm the surface is actively bucketed into.
///
/// The stored bucket only counts while its own flag is still on.
fn active_bucket(enablement_status: TriState, flags: FlagPresence) -> Option<Arm> {
    let arm = match enablement_status {
        TriState::Enabled => Arm::Treatment,
        TriState::Disabled => Arm::Control,
        TriState::Unset => return None,
    };
    flags.has(arm).then_some(arm)
}

/// Decides implicit default viewership for web surfaces.
pub struct ViewershipEngine {
    collaborators: Collaborators,
}

impl ViewershipEngine {
    pub fn new(collaborators: Collaborators) -> Self {
        Self { collaborators }
    }

    pub fn collaborators(&self) -> &Collaborators {
        &self.collaborators
    }

    /// Evaluate `surface`, updating persisted state and experiment attribution.
    ///
    /// With neither flag on this returns [`Decision::disabled`] without any
    /// side effect, so adapters may poll it freely.
    pub async fn evaluate(&self, surface: Surface) -> Decision {
        let treatment_flag = flag_name(surface, Arm::Treatment);
        let control_flag = flag_name(surface, Arm::Control);
        let (treatment, control) = tokio::join!(
            self.flag_present(&treatment_flag),
            self.flag_present(&control_flag)
        );
        let flags = FlagPresence { treatment, control };

        let Some(leading) = flags.leading_arm() else {
            debug!("No implicit default viewership flag for {}", surface);
            return Decision::disabled();
        };

        let metadata = match leading {
            Arm::Treatment => self.metadata(&treatment_flag),
            Arm::Control => self.metadata(&control_flag),
        };
        let kv = self.collaborators.kv.as_ref();
        let locale = state::read_locale(kv);
        let eligible = locale::is_eligible_for(locale.as_deref(), &metadata);

        let store = ViewershipStateStore::new(kv, surface);
        let mut persisted = match store.load() {
            Ok(persisted) => persisted,
            Err(e) => {
                warn!("Viewership state for {} unavailable: {}", surface, e);
                return Decision::disabled();
            }
        };

        if self.should_capture(&persisted, eligible) {
            persisted = Self::capture(&store, persisted, leading);
            debug!(
                "Captured {:?} bucket for {} (locale {:?})",
                leading, surface, locale
            );
        }

        let bucket = active_bucket(persisted.enablement_status, flags);
        self.reconcile_experiment_codes(surface.experiment_assignment(), bucket, eligible);

        let is_default = self.is_default_for_surface(surface).await;
        let enabled =
            flags.treatment && eligible && persisted.enablement_status == TriState::Enabled;
        store.set_implicit_dv_enabled(enabled);

        debug!(
            "Implicit default viewership for {}: enabled={} bucket={:?} default={}",
            surface, enabled, bucket, is_default
        );

        self.decision(surface, enabled, is_default)
    }

    async fn flag_present(&self, name: &str) -> bool {
        match self.collaborators.flags.has_flag(name).await {
            Ok(present) => present,
            Err(e) => {
                warn!("Flag {} unavailable, treating as off: {}", name, e);
                false
            }
        }
    }

    fn metadata(&self, name: &str) -> FlagMetadata {
        let raw = match self.collaborators.flags.feature_meta(name) {
            Ok(Some(raw)) => raw,
            Ok(None) => return FlagMetadata::default(),
            Err(e) => {
                warn!("Metadata for {} unavailable: {}", name, e);
                return FlagMetadata::default();
            }
        };
        match FlagMetadata::parse(&raw) {
            Ok(metadata) => metadata,
            Err(e) => {
                warn!("Ignoring malformed metadata for {}: {}", name, e);
                FlagMetadata::default()
            }
        }
    }

    fn should_capture(&self, persisted: &PersistedViewershipState, eligible: bool) -> bool {
        !persisted.default_viewership.is_set()
            && eligible
            && !state::pdf_viewer_opted_out(self.collaborators.kv.as_ref())
    }

    // One-time capture: once default viewership is set this never runs again.
    fn capture(
        store: &ViewershipStateStore<'_>,
        persisted: PersistedViewershipState,
        leading: Arm,
    ) -> PersistedViewershipState {
        let enablement_status = TriState::from(leading == Arm::Treatment);
        store.set_enablement_status(enablement_status);
        store.set_default_viewership(TriState::Enabled);
        PersistedViewershipState {
            enablement_status,
            default_viewership: TriState::Enabled,
            ..persisted
        }
    }

    /// Attribute the user to exactly the arm they are active in, or to none.
    fn reconcile_experiment_codes(
        &self,
        assignment: ExperimentAssignment,
        bucket: Option<Arm>,
        eligible: bool,
    ) {
        if assignment.is_none() {
            return;
        }
        let tracker = self.collaborators.tracker.as_ref();
        match bucket.filter(|_| eligible) {
            Some(Arm::Treatment) => {
                remove_code(tracker, assignment.control);
                set_code(tracker, assignment.treatment);
            }
            Some(Arm::Control) => {
                remove_code(tracker, assignment.treatment);
                set_code(tracker, assignment.control);
            }
            None => {
                remove_code(tracker, assignment.control);
                remove_code(tracker, assignment.treatment);
            }
        }
    }

    async fn is_default_for_surface(&self, surface: Surface) -> bool {
        match self
            .collaborators
            .default_handler
            .is_default_for_surface(surface)
            .await
        {
            Ok(is_default) => is_default,
            Err(e) => {
                debug!("Default handler status for {} unknown: {}", surface, e);
                false
            }
        }
    }

    fn decision(&self, surface: Surface, enabled: bool, is_default: bool) -> Decision {
        let l10n = self.collaborators.localization.as_ref();
        let prefix = surface.translation_prefix();
        Decision {
            enabled,
            is_acrobat_default_for_surface: is_default,
            toast_message: l10n.translation(&format!("{prefix}ImplicitDVNotification"), &[]),
            fte_strings: FteStrings {
                title: l10n.translation(&format!("{prefix}ImplicitDVFTEHeader"), &[]),
                description: l10n.translation(&format!("{prefix}ImplicitDVFTEBody"), &[]),
                button: l10n.translation("closeButton", &[]),
            },
        }
    }
}

fn set_code(tracker: &dyn ExperimentTracker, code: &str) {
    if !code.is_empty() {
        tracker.set_experiment_code(code);
    }
}

fn remove_code(tracker: &dyn ExperimentTracker, code: &str) {
    if !code.is_empty() {
        tracker.remove_experiment_code(code);
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
