#![cfg(test)]
/*!
Theme selector lint for the desktop build.

Purpose:
- Ensure that CSS classes emitted by the shared screens (landing, login form,
  dashboard grid, bottom tab bar) remain present in `ui/assets/theme/main.css`.
- Fail fast if a refactor renames a class on one side only.

If you intentionally rename or remove a selector:
    1. Update the component markup.
    2. Adjust REQUIRED_SELECTORS accordingly.
*/

/// Core selectors / tokens that must exist in the shared theme.
const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "body {",
    ".app-shell",
    ".page {",
    ".visually-hidden",
    // Buttons & shared UI
    ".button {",
    ".button--primary",
    ".button--accent",
    ".button--ghost",
    ".spinner",
    // Landing
    ".landing__hero",
    ".landing__actions",
    ".language-picker__select",
    // Login
    ".login-form",
    ".login-form__field",
    ".login-form__error",
    ".login-form__reveal",
    // Dashboard
    ".dashboard__header",
    ".dashboard__error",
    ".dashboard__grid",
    ".dashboard-tile",
    ".dashboard-tile__icon",
    ".dashboard-tile__label",
    ".bottom-tabs",
    ".bottom-tabs__tab",
    ".bottom-tabs__tab--active",
    // Placeholder
    ".page-coming-soon",
    // Media query token (sanity check responsive block exists)
    "@media (max-width: 720px)",
];

#[test]
fn unified_theme_contains_required_selectors() {
    let missing: Vec<_> = REQUIRED_SELECTORS
        .iter()
        .filter(|sel| !ui::THEME_CSS.contains(*sel))
        .copied()
        .collect();

    if !missing.is_empty() {
        panic!(
            "Missing {} required CSS selectors/tokens in unified theme:\n{}",
            missing.len(),
            missing.join("\n")
        );
    }
}

#[test]
fn unified_theme_not_trivially_empty() {
    let non_ws_len = ui::THEME_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 3_000,
        "Embedded theme appears unexpectedly small ({non_ws_len} non-whitespace chars) – \
         did the file get truncated or path change?"
    );
}

#[test]
fn grid_and_tab_bar_column_counts() {
    assert!(ui::THEME_CSS.contains("grid-template-columns: repeat(3, 1fr)"));
    assert!(ui::THEME_CSS.contains("grid-template-columns: repeat(5, 1fr)"));
}
