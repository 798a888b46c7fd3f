use log::{debug, warn};
use web_sys::window;
use yew::prelude::*;

use crate::config::THEME_STORAGE_KEY;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "dark" => Some(Theme::Dark),
            "light" => Some(Theme::Light),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// The stored preference, falling back to dark.
    pub fn load() -> Self {
        window()
            .and_then(|w| w.local_storage().ok().flatten())
            .and_then(|storage| storage.get_item(THEME_STORAGE_KEY).ok().flatten())
            .and_then(|value| Theme::parse(&value))
            .unwrap_or_default()
    }

    /// Sets `data-theme` on the root element and remembers the choice.
    pub fn apply(self) {
        let Some(window) = window() else {
            return;
        };
        if let Some(root) = window.document().and_then(|d| d.document_element()) {
            if let Err(err) = root.set_attribute("data-theme", self.as_str()) {
                warn!("Could not apply theme: {:?}", err);
            }
        }
        if let Ok(Some(storage)) = window.local_storage() {
            if let Err(err) = storage.set_item(THEME_STORAGE_KEY, self.as_str()) {
                warn!("Could not store theme: {:?}", err);
            }
        }
        debug!("Theme set to {}", self.as_str());
    }
}

#[function_component(ThemeToggle)]
pub fn theme_toggle() -> Html {
    let theme = use_state(Theme::load);

    use_effect_with_deps(
        |theme| {
            theme.apply();
            || ()
        },
        *theme,
    );

    let toggle = {
        let theme = theme.clone();
        Callback::from(move |_: MouseEvent| theme.set(theme.toggled()))
    };

    let (icon, label) = match *theme {
        Theme::Dark => ("☀", "Switch to light theme"),
        Theme::Light => ("☾", "Switch to dark theme"),
    };

    html! {
        <button class="theme-toggle" onclick={toggle} aria-label={label} title={label}>
            {icon}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_stored_values() {
        assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
        assert_eq!(Theme::parse(" light\n"), Some(Theme::Light));
        assert_eq!(Theme::parse("system"), None);
    }

    #[test]
    fn toggling_twice_is_identity() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
    }

    #[test]
    fn storage_value_round_trips() {
        for theme in [Theme::Dark, Theme::Light] {
            assert_eq!(Theme::parse(theme.as_str()), Some(theme));
        }
    }
}
