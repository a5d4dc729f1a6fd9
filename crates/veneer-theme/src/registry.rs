//! Built-in theme cache and the process-wide current theme.
//!
//! Built-in themes are derived once per mode and shared as `Arc`s. The
//! current theme is published through an `ArcSwap`, so readers take a
//! cheap atomic load and writers swap the whole theme in one store;
//! nothing ever observes a half-switched theme.

use std::sync::{Arc, Mutex, MutexGuard, OnceLock};

use arc_swap::ArcSwap;

use crate::mode::Mode;
use crate::theme::Theme;

static BUILTIN_THEMES: OnceLock<[Arc<Theme>; 2]> = OnceLock::new();

fn builtin_themes() -> &'static [Arc<Theme>; 2] {
    BUILTIN_THEMES.get_or_init(|| Mode::ALL.map(|mode| Arc::new(Theme::new(mode))))
}

/// The cached built-in theme for `mode`.
pub fn theme(mode: Mode) -> Arc<Theme> {
    Arc::clone(&builtin_themes()[mode.index()])
}

static CURRENT_THEME: OnceLock<ArcSwap<Theme>> = OnceLock::new();

fn current_cell() -> &'static ArcSwap<Theme> {
    CURRENT_THEME.get_or_init(|| ArcSwap::new(theme(Mode::Dark)))
}

/// The currently published theme. Dark until something publishes.
pub fn current_theme() -> Arc<Theme> {
    current_cell().load_full()
}

/// Publish `theme` as the process-wide current theme.
///
/// Existing `Arc`s handed out by [`current_theme`] keep their old
/// snapshot; only subsequent loads see the new one.
pub fn set_current_theme(theme: Arc<Theme>) {
    tracing::debug!(mode = theme.mode.name(), "switching current theme");
    current_cell().store(theme);
}

/// Publish the built-in theme for `mode`.
pub fn set_current_mode(mode: Mode) {
    set_current_theme(theme(mode));
}

static THEME_TEST_LOCK: Mutex<()> = Mutex::new(());

/// Serializes tests that touch the process-wide current theme.
///
/// Holds a global lock for its lifetime and restores the previous
/// current theme on drop, so `cargo test`'s parallel runner cannot
/// interleave two tests' theme switches.
pub struct ScopedThemeLock {
    previous: Arc<Theme>,
    _guard: MutexGuard<'static, ()>,
}

impl ScopedThemeLock {
    /// Take the lock and publish the built-in theme for `mode`.
    pub fn new(mode: Mode) -> Self {
        let guard = THEME_TEST_LOCK
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let previous = current_theme();
        set_current_mode(mode);
        Self {
            previous,
            _guard: guard,
        }
    }
}

impl Drop for ScopedThemeLock {
    fn drop(&mut self) {
        set_current_theme(Arc::clone(&self.previous));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_cache_returns_shared_instances() {
        let first = theme(Mode::Light);
        let second = theme(Mode::Light);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(first.mode, Mode::Light);
    }

    #[test]
    fn scoped_lock_publishes_and_restores() {
        let outer = ScopedThemeLock::new(Mode::Dark);
        assert_eq!(current_theme().mode, Mode::Dark);
        {
            // Switching inside the scope is visible immediately.
            set_current_mode(Mode::Light);
            assert_eq!(current_theme().mode, Mode::Light);
        }
        drop(outer);
    }

    #[test]
    fn published_snapshots_outlive_a_switch() {
        let _lock = ScopedThemeLock::new(Mode::Dark);
        let snapshot = current_theme();
        set_current_mode(Mode::Light);
        // The old handle still points at the dark theme.
        assert_eq!(snapshot.mode, Mode::Dark);
        assert_eq!(current_theme().mode, Mode::Light);
    }

    #[test]
    fn custom_themes_can_be_published() {
        let _lock = ScopedThemeLock::new(Mode::Dark);
        let custom = Arc::new(
            Theme::builder(Mode::Light)
                .primary("#ff6600")
                .build()
                .expect("builder seeds are valid"),
        );
        set_current_theme(Arc::clone(&custom));
        assert!(Arc::ptr_eq(&current_theme(), &custom));
    }
}
