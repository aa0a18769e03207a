//! Process-wide theme state
//!
//! `ThemeState` holds the active theme bundle and color scheme behind a
//! global `RwLock`. Components take a cheap snapshot at build time:
//!
//! ```ignore
//! use petal_theme::ThemeState;
//!
//! let theme = ThemeState::get();
//! let bg = theme.color(ColorToken::Surface);
//! ```
//!
//! Every scheme or bundle change bumps a generation counter so a host can
//! detect staleness without comparing token tables field by field.

use crate::theme::{ColorScheme, DefaultTheme, Theme, ThemeBundle};
use crate::tokens::*;
use petal_core::Color;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{OnceLock, RwLock};

/// Global theme store instance
static THEME_STORE: OnceLock<RwLock<ThemeStore>> = OnceLock::new();

/// Monotonic counter bumped on every theme change
static THEME_GENERATION: AtomicU64 = AtomicU64::new(0);

struct ThemeStore {
    bundle: ThemeBundle,
    scheme: ColorScheme,
}

/// An owned snapshot of the active theme
///
/// Snapshots are taken once per build pass and read without locking after
/// that. A snapshot does not observe later theme changes; compare
/// [`generation`](Self::generation) against [`ThemeState::current_generation`]
/// to detect staleness.
#[derive(Clone, Debug)]
pub struct ThemeState {
    name: String,
    scheme: ColorScheme,
    colors: ColorTokens,
    typography: TypographyTokens,
    spacing: SpacingTokens,
    radii: RadiusTokens,
    shadows: ShadowTokens,
    generation: u64,
}

impl ThemeState {
    /// Initialize the global store with the built-in theme bundle
    ///
    /// Safe to call more than once; later calls are no-ops so tests and
    /// embedders do not need to coordinate startup order.
    pub fn init_default() {
        THEME_STORE.get_or_init(|| {
            RwLock::new(ThemeStore {
                bundle: DefaultTheme::bundle(),
                scheme: ColorScheme::default(),
            })
        });
    }

    /// Initialize the global store with a custom bundle and starting scheme
    ///
    /// Returns `false` when the store was already initialized, in which case
    /// the bundle is dropped and the existing store is kept.
    pub fn init_with_bundle(bundle: ThemeBundle, scheme: ColorScheme) -> bool {
        let mut installed = false;
        THEME_STORE.get_or_init(|| {
            installed = true;
            RwLock::new(ThemeStore { bundle, scheme })
        });
        if installed {
            tracing::debug!(scheme = ?scheme, "theme store initialized");
        }
        installed
    }

    /// Whether the global store has been initialized
    pub fn is_initialized() -> bool {
        THEME_STORE.get().is_some()
    }

    /// Snapshot the active theme
    ///
    /// # Panics
    ///
    /// Panics if neither `init_default()` nor `init_with_bundle()` has been
    /// called.
    pub fn get() -> ThemeState {
        Self::try_get()
            .expect("ThemeState not initialized. Call ThemeState::init_default() at app startup.")
    }

    /// Snapshot the active theme, or `None` when uninitialized
    pub fn try_get() -> Option<ThemeState> {
        let store = THEME_STORE.get()?.read().ok()?;
        let theme = store.bundle.variant(store.scheme);
        Some(Self::snapshot(
            store.bundle.name(),
            theme,
            THEME_GENERATION.load(Ordering::Acquire),
        ))
    }

    /// Build a snapshot directly from a theme, bypassing the global store
    ///
    /// Lets tests and offline tools resolve styles without initializing the
    /// process-wide state.
    pub fn from_theme(theme: &dyn Theme) -> ThemeState {
        Self::snapshot(theme.name(), theme, 0)
    }

    fn snapshot(name: &str, theme: &dyn Theme, generation: u64) -> ThemeState {
        ThemeState {
            name: name.to_string(),
            scheme: theme.color_scheme(),
            colors: theme.colors().clone(),
            typography: theme.typography().clone(),
            spacing: theme.spacing().clone(),
            radii: theme.radii().clone(),
            shadows: theme.shadows().clone(),
            generation,
        }
    }

    /// Switch the active color scheme
    ///
    /// No-op when the scheme is already active or the store is uninitialized.
    pub fn set_scheme(scheme: ColorScheme) {
        let Some(lock) = THEME_STORE.get() else {
            return;
        };
        let Ok(mut store) = lock.write() else {
            return;
        };
        if store.scheme == scheme {
            return;
        }
        store.scheme = scheme;
        let generation = THEME_GENERATION.fetch_add(1, Ordering::AcqRel) + 1;
        tracing::debug!(scheme = ?scheme, generation, "color scheme changed");
    }

    /// Flip between light and dark
    pub fn toggle_scheme() {
        let current = THEME_STORE
            .get()
            .and_then(|lock| lock.read().ok())
            .map(|store| store.scheme);
        match current {
            Some(ColorScheme::Light) => Self::set_scheme(ColorScheme::Dark),
            Some(ColorScheme::Dark) => Self::set_scheme(ColorScheme::Light),
            None => {}
        }
    }

    /// Replace the installed bundle, keeping the active scheme
    ///
    /// No-op when the store is uninitialized.
    pub fn set_bundle(bundle: ThemeBundle) {
        let Some(lock) = THEME_STORE.get() else {
            return;
        };
        let Ok(mut store) = lock.write() else {
            return;
        };
        let name = bundle.name().to_string();
        store.bundle = bundle;
        let generation = THEME_GENERATION.fetch_add(1, Ordering::AcqRel) + 1;
        tracing::debug!(bundle = %name, generation, "theme bundle replaced");
    }

    /// Generation of the live store, for staleness checks against a snapshot
    pub fn current_generation() -> u64 {
        THEME_GENERATION.load(Ordering::Acquire)
    }

    // =========================================================================
    // Snapshot accessors
    // =========================================================================

    /// Bundle name this snapshot was taken from
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Color scheme this snapshot renders
    pub fn scheme(&self) -> ColorScheme {
        self.scheme
    }

    /// Generation at snapshot time
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Resolve a color token
    pub fn color(&self, token: ColorToken) -> Color {
        self.colors.get(token)
    }

    /// Resolve a spacing token to pixels
    pub fn spacing_value(&self, token: SpacingToken) -> f32 {
        self.spacing.get(token)
    }

    /// Resolve a radius token to pixels
    pub fn radius(&self, token: RadiusToken) -> f32 {
        self.radii.get(token)
    }

    /// Resolve a font size token to pixels
    pub fn font_size(&self, token: FontSizeToken) -> f32 {
        self.typography.size(token)
    }

    /// Resolve a shadow token
    pub fn shadow(&self, token: ShadowToken) -> Shadow {
        self.shadows.get(token)
    }

    /// The full color token table
    pub fn colors(&self) -> &ColorTokens {
        &self.colors
    }

    /// The full typography table
    pub fn typography(&self) -> &TypographyTokens {
        &self.typography
    }

    /// The full spacing table
    pub fn spacing(&self) -> &SpacingTokens {
        &self.spacing
    }

    /// The full radius table
    pub fn radii(&self) -> &RadiusTokens {
        &self.radii
    }

    /// The full shadow table
    pub fn shadows(&self) -> &ShadowTokens {
        &self.shadows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Global-store tests share one process-wide singleton, so they assert
    // properties that hold regardless of interleaving.

    #[test]
    fn test_init_default_is_idempotent() {
        ThemeState::init_default();
        ThemeState::init_default();
        assert!(ThemeState::is_initialized());
        assert!(ThemeState::try_get().is_some());
    }

    #[test]
    fn test_set_scheme_bumps_generation() {
        ThemeState::init_default();
        let before = ThemeState::current_generation();
        let snapshot = ThemeState::get();

        let other = match snapshot.scheme() {
            ColorScheme::Light => ColorScheme::Dark,
            ColorScheme::Dark => ColorScheme::Light,
        };
        ThemeState::set_scheme(other);
        assert!(ThemeState::current_generation() > before);

        // Snapshot taken before the change is unaffected
        assert_eq!(snapshot.generation(), before);
    }

    #[test]
    fn test_snapshot_from_theme_bypasses_store() {
        let dark = DefaultTheme::dark();
        let theme = ThemeState::from_theme(&dark);
        assert_eq!(theme.scheme(), ColorScheme::Dark);
        assert_eq!(theme.name(), "petal");
        assert_eq!(
            theme.color(ColorToken::Background),
            dark.colors().background
        );
    }

    #[test]
    fn test_token_accessors_resolve() {
        let light = DefaultTheme::light();
        let theme = ThemeState::from_theme(&light);

        assert_eq!(theme.spacing_value(SpacingToken::Space4), 16.0);
        assert_eq!(theme.radius(RadiusToken::Md), 8.0);
        assert_eq!(theme.font_size(FontSizeToken::TextBase), 16.0);
        assert!(theme.shadow(ShadowToken::Lg).blur > 0.0);
    }
}
