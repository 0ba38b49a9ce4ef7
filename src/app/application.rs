//! Application - App Initialization and Window Management
//!
//! Main entry point for the GPUI application.

use gpui::{
    actions, px, App, AppContext, Application, Bounds, KeyBinding, SharedString,
    TitlebarOptions, WindowBounds, WindowOptions,
};
use tracing::{error, info};

use crate::app::entities::AppEntities;
use crate::app::workspace::Workspace;
use crate::domain::config::{AppConfig, PanelConfig};
use crate::eventing::app_event::{AppEvent, PanelHandle};

actions!(lab_sidepanel, [Quit, ToggleSidePanel]);

/// Run the lab side panel application.
///
/// `panel` must already be validated; the host can reach the panel from any
/// GPUI context through the [`PanelHandle`] global.
pub fn run_app(config: AppConfig, panel: PanelConfig) {
    Application::new().run(move |cx: &mut App| {
        cx.bind_keys([
            KeyBinding::new("secondary-q", Quit, None),
            KeyBinding::new("secondary-b", ToggleSidePanel, None),
        ]);

        cx.on_action(|_: &Quit, cx: &mut App| cx.quit());
        cx.on_action(|_: &ToggleSidePanel, cx: &mut App| {
            let entities = cx.global::<AppEntities>().clone();
            entities.toggle_panel(cx);
        });

        // Quit the app when all windows are closed
        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        let entities = AppEntities::init(panel, cx);
        cx.set_global(entities.clone());

        // Host -> UI event channel
        let (event_tx, event_rx) = flume::unbounded::<AppEvent>();
        cx.set_global(PanelHandle::new(event_tx));

        let bounds = Bounds::centered(
            None,
            gpui::size(px(config.window.width), px(config.window.height)),
            cx,
        );
        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            titlebar: Some(TitlebarOptions {
                title: Some(SharedString::from("Lab Manager")),
                appears_transparent: false,
                traffic_light_position: None,
            }),
            ..Default::default()
        };

        let opened = cx.open_window(window_options, |window, cx| {
            cx.new(|cx| Workspace::new(entities.clone(), event_rx, window, cx))
        });

        match opened {
            Ok(_) => {
                info!(
                    collapsed = %panel.collapsed_width,
                    expanded = %panel.expanded_width,
                    "Lab side panel window opened"
                );
                cx.activate(true);
            }
            Err(e) => {
                error!("Failed to open main window: {e}");
                cx.quit();
            }
        }
    });
}
