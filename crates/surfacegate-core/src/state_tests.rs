use super::*;
use crate::test_support::{BrokenKv, CountingKv};

#[test]
fn test_keys_are_namespaced_by_surface() {
    let keys = ViewershipKeys::for_surface(Surface::Gmail);
    assert_eq!(keys.enablement_status, "gmail-pdf-implicit-dv-feature-enablement-status");
    assert_eq!(keys.default_viewership, "gmail-pdf-default-viewership");
    assert_eq!(keys.implicit_dv_enabled, "gmail-pdf-implicit-dv-feature-enabled");

    let drive = ViewershipKeys::for_surface(Surface::GoogleDrive);
    assert_eq!(drive.default_viewership, "gdrive-pdf-default-viewership");
}

#[test]
fn test_load_absent_is_unset() {
    let kv = CountingKv::default();
    let store = ViewershipStateStore::new(&kv, Surface::Gmail);
    assert_eq!(store.load().unwrap(), PersistedViewershipState::default());
}

#[test]
fn test_load_empty_string_is_unset() {
    let kv = CountingKv::with_entries(&[("gmail-pdf-default-viewership", "")]);
    let store = ViewershipStateStore::new(&kv, Surface::Gmail);
    assert_eq!(store.load().unwrap().default_viewership, TriState::Unset);
}

#[test]
fn test_write_and_load() {
    let kv = CountingKv::default();
    let store = ViewershipStateStore::new(&kv, Surface::OneNote);
    store.set_enablement_status(TriState::Disabled);
    store.set_default_viewership(TriState::Enabled);
    store.set_implicit_dv_enabled(false);

    let state = store.load().unwrap();
    assert_eq!(state.enablement_status, TriState::Disabled);
    assert_eq!(state.default_viewership, TriState::Enabled);
    assert_eq!(state.implicit_dv_enabled, TriState::Disabled);
    assert_eq!(kv.get("onenote-pdf-implicit-dv-feature-enabled").as_deref(), Some("false"));
}

#[test]
fn test_writing_unset_removes_key() {
    let kv = CountingKv::with_entries(&[("gmail-pdf-default-viewership", "true")]);
    let store = ViewershipStateStore::new(&kv, Surface::Gmail);
    store.set_default_viewership(TriState::Unset);
    assert_eq!(kv.get("gmail-pdf-default-viewership"), None);
}

#[test]
fn test_clear_only_touches_own_surface() {
    let kv = CountingKv::with_entries(&[
        ("gmail-pdf-default-viewership", "true"),
        ("gdrive-pdf-default-viewership", "true"),
    ]);
    ViewershipStateStore::new(&kv, Surface::Gmail).clear().unwrap();
    assert_eq!(kv.get("gmail-pdf-default-viewership"), None);
    assert_eq!(kv.get("gdrive-pdf-default-viewership").as_deref(), Some("true"));
}

#[test]
fn test_broken_store_load_fails_and_writes_do_not_panic() {
    let kv = BrokenKv;
    let store = ViewershipStateStore::new(&kv, Surface::Gmail);
    assert!(store.load().is_err());
    store.set_default_viewership(TriState::Enabled);
}

#[test]
fn test_global_preferences() {
    let kv = CountingKv::with_entries(&[("locale", "en-GB"), ("pdfViewer", "false")]);
    assert_eq!(read_locale(&kv).as_deref(), Some("en-GB"));
    assert!(pdf_viewer_opted_out(&kv));
    assert!(!touch_points_opted_out(&kv));

    let kv = CountingKv::with_entries(&[("pdfViewer", "true")]);
    assert!(!pdf_viewer_opted_out(&kv));
    assert_eq!(read_locale(&kv), None);
}

#[test]
fn test_global_preferences_fail_closed() {
    assert_eq!(read_locale(&BrokenKv), None);
    assert!(pdf_viewer_opted_out(&BrokenKv));
    assert!(touch_points_opted_out(&BrokenKv));
}
