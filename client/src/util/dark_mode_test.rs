use super::*;

#[test]
fn headless_is_not_interactive() {
    assert!(!Headless.is_interactive());
    assert_eq!(Headless.stored_theme(), None);
    assert!(!Headless.prefers_dark());
}

#[test]
fn headless_sinks_are_noops_but_callable() {
    let mut env = Headless;
    env.set_dark_class(true);
    env.store_theme(DisplayMode::Dark);
    assert_eq!(env, Headless);
}

#[test]
fn memory_env_is_interactive() {
    assert!(MemoryEnv::default().is_interactive());
}

#[test]
fn memory_env_reports_seeded_values() {
    let env = MemoryEnv::new(Some("light"), true);
    assert_eq!(env.stored_theme().as_deref(), Some("light"));
    assert!(env.prefers_dark());
    assert!(!env.dark_class);
    assert_eq!(env.writes, 0);
}

#[test]
fn memory_env_store_theme_writes_mode_string() {
    let mut env = MemoryEnv::default();
    env.store_theme(DisplayMode::Dark);
    assert_eq!(env.stored.as_deref(), Some("dark"));
    env.store_theme(DisplayMode::Light);
    assert_eq!(env.stored.as_deref(), Some("light"));
    assert_eq!(env.writes, 2);
}

#[test]
fn memory_env_set_dark_class_tracks_flag() {
    let mut env = MemoryEnv::default();
    env.set_dark_class(true);
    assert!(env.dark_class);
    env.set_dark_class(false);
    assert!(!env.dark_class);
}

#[test]
fn storage_key_and_class_are_stable() {
    assert_eq!(STORAGE_KEY, "themeSvelte");
    assert_eq!(DARK_CLASS, "dark");
    assert_eq!(PREFERS_DARK_QUERY, "(prefers-color-scheme: dark)");
}
