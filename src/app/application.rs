//! Application - App Initialization and Window Management
//!
//! Main entry point for the GPUI application.

use gpui::{
    px, App, AppContext, Application, Bounds, TitlebarOptions, WindowBounds,
    WindowOptions,
};
use tracing::{error, info, warn};

use crate::app::entities::AppEntities;
use crate::app::workspace::Workspace;
use crate::assets::Assets;
use crate::constants::{MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};
use crate::domain::DemoDataset;
use crate::helpers::action::{new_key_bindings, AppAction, StoryAction};
use crate::i18n::t;
use crate::state::app_config::AppConfig;

/// Run the storybook application
pub fn run_app() {
    Application::new().with_assets(Assets).run(|cx: &mut App| {
        gpui_component::init(cx);

        cx.bind_keys(new_key_bindings());

        // Quit the app when all windows are closed (macOS behavior)
        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        let config = AppConfig::try_load().unwrap_or_else(|e| {
            warn!(error = %e, "Failed to load config, using defaults");
            AppConfig::default()
        });
        let dataset = DemoDataset::builtin().unwrap_or_else(|e| {
            error!(error = %e, "Built-in demo data is invalid");
            DemoDataset::default()
        });

        let window_size = gpui::size(px(config.window_width), px(config.window_height));
        let title = t(config.locale(), "app-title");

        let entities = AppEntities::init(config, dataset, cx);
        cx.set_global(entities.clone());

        let action_entities = entities.clone();
        cx.on_action(move |action: &AppAction, cx: &mut App| match action {
            AppAction::Quit => cx.quit(),
            AppAction::ToggleLocale => action_entities.toggle_locale(cx),
        });

        let story_entities = entities.clone();
        cx.on_action(move |action: &StoryAction, cx: &mut App| {
            let story = action.story();
            story_entities.gallery.update(cx, |gallery, cx| {
                if gallery.select(story) {
                    cx.notify();
                }
            });
        });

        let bounds = Bounds::centered(None, window_size, cx);
        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            window_min_size: Some(gpui::size(px(MIN_WINDOW_WIDTH), px(MIN_WINDOW_HEIGHT))),
            titlebar: Some(TitlebarOptions {
                title: Some(title),
                appears_transparent: true,
                traffic_light_position: Some(gpui::point(px(9.0), px(9.0))),
            }),
            ..Default::default()
        };

        if let Err(e) = cx.open_window(window_options, |_window, cx| {
            cx.new(|cx| Workspace::new(entities.clone(), cx))
        }) {
            error!(error = %e, "Failed to open main window");
            cx.quit();
            return;
        }

        info!("Main window opened");
        cx.activate(true);
    });
}
