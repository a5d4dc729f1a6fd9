//! Warning path: contrast targets that cannot be met must degrade
//! gracefully, not fail the build.

use tracing_test::traced_test;
use veneer_theme::{Mode, Theme};

/// A mid-gray background makes 4.5:1 unreachable in either direction,
/// so text derivation must exhaust its search and warn.
#[traced_test]
#[test]
fn unreachable_contrast_warns_instead_of_failing() {
    let theme = Theme::builder(Mode::Light)
        .background("#555555")
        .build()
        .expect("seeds parse; contrast shortfalls are not build errors");

    let warnings = theme.warnings();
    assert!(!warnings.is_empty());
    assert!(warnings.iter().any(|w| w.token == "text.primary"));
    for warning in warnings {
        assert!(warning.achieved < warning.target);
    }

    assert!(logs_contain("failed to reach its contrast target"));
}

#[traced_test]
#[test]
fn builtin_seeds_are_contrast_clean() {
    for mode in Mode::ALL {
        let theme = Theme::new(mode);
        assert!(theme.warnings().is_empty(), "{}", mode.name());
    }
    assert!(!logs_contain("failed to reach its contrast target"));
}
