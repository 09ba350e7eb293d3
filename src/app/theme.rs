use codee::string::FromToStringCodec;
use leptos::prelude::*;
use leptos_use::{storage::use_local_storage, use_preferred_dark};

use crate::config::SiteConfig;
use crate::theme::{PreferenceStore, ThemeController, ThemePreference};

/// Browser local storage, reached through leptos-use signals.
#[derive(Debug, Clone, Copy)]
pub struct LocalStorageStore {
    value: Signal<String>,
    set_value: WriteSignal<String>,
}

impl PreferenceStore for LocalStorageStore {
    fn load(&self) -> Option<String> {
        let value = self.value.get_untracked();
        (!value.is_empty()).then_some(value)
    }

    fn save(&mut self, value: &str) {
        self.set_value.set(value.to_string());
    }
}

/// The single source of truth for the theme, shared through context.
#[derive(Debug, Clone, Copy)]
pub struct ThemeContext {
    preference: RwSignal<ThemePreference>,
    controller: StoredValue<Option<ThemeController<LocalStorageStore>>>,
}

impl ThemeContext {
    pub fn preference(&self) -> ThemePreference {
        self.preference.get()
    }

    pub fn is_dark(&self) -> bool {
        self.preference().is_dark()
    }

    pub fn toggle(&self) {
        // before the controller is loaded there is nothing to persist to
        let mut next = self.preference.get_untracked().toggled();
        self.controller.update_value(|controller| {
            if let Some(controller) = controller {
                next = controller.toggle();
            }
        });
        log::debug!("theme set to {next}");
        self.preference.set(next);
    }
}

pub fn provide_theme_context() -> ThemeContext {
    let config = expect_context::<SiteConfig>();
    let (value, set_value, _) =
        use_local_storage::<String, FromToStringCodec>(config.theme_storage_key);
    let prefers_dark = use_preferred_dark();

    let ctx = ThemeContext {
        preference: RwSignal::new(ThemePreference::default()),
        controller: StoredValue::new(None),
    };

    // storage is only read in the browser, once hydration is done
    Effect::watch(
        || (),
        move |_, _, _| {
            let store = LocalStorageStore { value, set_value };
            let system_default = ThemePreference::from_system(prefers_dark.get_untracked());
            let controller = ThemeController::load(store, system_default);
            ctx.preference.set(controller.preference());
            ctx.controller.set_value(Some(controller));
        },
        true,
    );

    provide_context(ctx);
    ctx
}

pub fn use_theme() -> ThemeContext {
    expect_context::<ThemeContext>()
}
