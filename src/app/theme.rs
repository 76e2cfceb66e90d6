use std::fmt;
use std::str::FromStr;

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use codee::string::FromToStringCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_local_storage;

use super::icons::{Icon, IconGlyph};

/// Key the preference is persisted under, stored as plain "light"/"dark".
#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "theme";

/// Marker class on the document root that scopes the dark style variants.
const DARK_MARKER: &str = "dark";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    pub fn flipped(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unrecognized theme preference: {0:?}")]
pub struct UnknownTheme(String);

impl FromStr for ThemePreference {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(UnknownTheme(other.to_string())),
        }
    }
}

/// Owns the read-modify-persist cycle for the display mode. The root marker
/// class is applied here and nowhere else.
#[derive(Clone, Copy)]
pub struct ThemeController {
    preference: Signal<ThemePreference>,
    set_preference: WriteSignal<ThemePreference>,
}

impl ThemeController {
    fn new() -> Self {
        // A missing or mangled stored value decodes to the default (light);
        // storage failures leave us with a session-only preference.
        #[cfg(feature = "hydrate")]
        let (preference, set_preference, _) =
            use_local_storage::<ThemePreference, FromToStringCodec>(STORAGE_KEY);
        #[cfg(not(feature = "hydrate"))]
        let (preference, set_preference) = {
            let (read, write) = signal(ThemePreference::default());
            (Signal::from(read), write)
        };

        Effect::new(move |_| apply_marker(preference.get()));

        Self {
            preference,
            set_preference,
        }
    }

    pub fn preference(&self) -> Signal<ThemePreference> {
        self.preference
    }

    /// Flips the in-memory preference; the marker and the stored value follow
    /// reactively.
    pub fn toggle(&self) {
        self.set_preference.update(|p| *p = p.flipped());
    }
}

pub fn provide_theme() {
    provide_context(ThemeController::new());
}

pub fn use_theme() -> ThemeController {
    expect_context::<ThemeController>()
}

fn apply_marker(preference: ThemePreference) {
    let Some(root) = document().document_element() else {
        log::warn!("no document root to apply theme marker to");
        return;
    };
    let classes = root.class_list();
    let applied = if preference.is_dark() {
        classes.add_1(DARK_MARKER)
    } else {
        classes.remove_1(DARK_MARKER)
    };
    if applied.is_err() {
        log::warn!("failed to update theme marker for {preference}");
    }
}

/// Sun/moon button flipping the display mode. Shows the mode a click would
/// switch away from, matching the usual toggle affordance.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = use_theme();
    let preference = theme.preference();

    view! {
        <button
            type="button"
            class="p-2 rounded-full bg-gray-200 dark:bg-dark-700 text-gray-700 dark:text-gray-300 hover:bg-gray-300 dark:hover:bg-dark-600 transition-colors duration-200"
            aria-label="Toggle theme"
            on:click=move |_| theme.toggle()
        >
            {move || {
                if preference.get().is_dark() {
                    view! { <IconGlyph icon=Icon::Sun /> }
                } else {
                    view! { <IconGlyph icon=Icon::Moon /> }
                }
            }}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_light() {
        assert_eq!(ThemePreference::default(), ThemePreference::Light);
    }

    #[test]
    fn test_toggle_round_trip_is_identity() {
        for start in [ThemePreference::Light, ThemePreference::Dark] {
            assert_eq!(start.flipped().flipped(), start);
        }
    }

    #[test]
    fn test_persisted_text_round_trips() {
        for pref in [ThemePreference::Light, ThemePreference::Dark] {
            let stored = pref.to_string();
            assert_eq!(stored.parse::<ThemePreference>().unwrap(), pref);
        }
    }

    #[test]
    fn test_unknown_stored_value_is_rejected() {
        assert!("solarized".parse::<ThemePreference>().is_err());
        assert!("".parse::<ThemePreference>().is_err());
        // decode failure surfaces as the codec falling back to the default,
        // never as a crash
        assert!("Dark".parse::<ThemePreference>().is_err());
    }
}
