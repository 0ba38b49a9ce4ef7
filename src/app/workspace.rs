//! Workspace - Main Layout, Drag Tracking and Event Pump
//!
//! The workspace lays out the navigation rail, the main content area and the
//! side panel. While a resize drag is active it also owns the window-level
//! move/release listeners, and it bridges host events into entity updates.

use gpui::{
    div, prelude::*, px, App, Context, Entity, IntoElement, MouseButton, MouseMoveEvent,
    MouseUpEvent, ParentElement, Render, Styled, Window,
};
use tracing::debug;

use crate::app::entities::AppEntities;
use crate::components::layout::nav_rail::NavRail;
use crate::components::layout::side_panel::SidePanel;
use crate::eventing::app_event::AppEvent;
use crate::state::resize_state::{ContainerGeometry, DragEnd};
use crate::theme::colors::LabColors;
use crate::theme::typography::Typography;

/// Main workspace containing the application layout
pub struct Workspace {
    entities: AppEntities,
    nav_rail: Entity<NavRail>,
    side_panel: Entity<SidePanel>,
}

impl Workspace {
    pub fn new(
        entities: AppEntities,
        event_rx: flume::Receiver<AppEvent>,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let nav_rail = cx.new(|cx| NavRail::new(entities.clone(), cx));
        let side_panel = cx.new(|cx| SidePanel::new(entities.clone(), cx));

        Self::start_event_pump(event_rx, entities.clone(), cx);

        // Re-render to install or remove the drag listeners
        cx.observe(&entities.resize, |_this, _, cx| cx.notify())
            .detach();
        cx.observe(&entities.panel, |_this, _, cx| cx.notify())
            .detach();

        // A drag cannot survive the window losing focus
        cx.observe_window_activation(window, |this, window, cx| {
            if !window.is_window_active() {
                this.end_drag(DragEnd::WindowDeactivated, cx);
            }
        })
        .detach();

        Self {
            entities,
            nav_rail,
            side_panel,
        }
    }

    /// Start the event pump that dispatches host events to the UI
    fn start_event_pump(
        event_rx: flume::Receiver<AppEvent>,
        entities: AppEntities,
        cx: &mut Context<Self>,
    ) {
        cx.spawn(async move |_this, cx| {
            while let Ok(event) = event_rx.recv_async().await {
                let entities = entities.clone();
                let _ = cx.update(|cx: &mut App| {
                    dispatch_event(event, &entities, cx);
                });
            }
        })
        .detach();
    }

    fn on_drag_move(&mut self, event: &MouseMoveEvent, window: &mut Window, cx: &mut Context<Self>) {
        // Button released somewhere we never saw, e.g. outside the window
        if event.pressed_button != Some(MouseButton::Left) {
            self.end_drag(DragEnd::CaptureLost, cx);
            return;
        }

        // Measured bounds; before the first layout assume it fits the window
        let geometry = self.entities.resize.read(cx).geometry().unwrap_or_else(|| {
            let rem_size: f32 = window.rem_size().into();
            let right: f32 = window.viewport_size().width.into();
            let width = self.entities.panel.read(cx).width().to_pixels(rem_size);
            ContainerGeometry::right_anchored(right, width)
        });
        let pointer_x: f32 = event.position.x.into();

        let applied = self
            .entities
            .resize
            .update(cx, |resize, _| resize.start_drag(pointer_x, geometry));

        if let Some(width) = applied {
            self.entities.panel.update(cx, |panel, cx| {
                panel.apply_drag_width(width);
                cx.notify();
            });
        }
    }

    fn on_drag_release(&mut self, _event: &MouseUpEvent, _window: &mut Window, cx: &mut Context<Self>) {
        self.end_drag(DragEnd::Released, cx);
    }

    fn end_drag(&mut self, reason: DragEnd, cx: &mut Context<Self>) {
        end_drag(&self.entities, reason, cx);
    }
}

impl Render for Workspace {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let resize = self.entities.resize.read(cx);
        let dragging = resize.is_dragging();
        let panel = self.entities.panel.read(cx);
        let mut status = format!("Side panel {:?}, width {}", panel.mode(), panel.width());
        if let Some(session) = resize.session() {
            status.push_str(&format!(", resizing ({} moves)", session.moves));
        } else if !panel.is_at_rest() {
            status.push_str(", resized");
        }

        div()
            .size_full()
            .flex()
            .flex_row()
            .overflow_hidden()
            .bg(LabColors::background())
            // Window-level listeners exist only for the life of a drag
            .when(dragging, |el| {
                el.cursor_col_resize()
                    .on_mouse_move(cx.listener(Self::on_drag_move))
                    .on_mouse_up(MouseButton::Left, cx.listener(Self::on_drag_release))
                    .on_mouse_up_out(MouseButton::Left, cx.listener(Self::on_drag_release))
            })
            .child(self.nav_rail.clone())
            .child(
                // Main content
                div()
                    .flex_1()
                    .flex()
                    .flex_col()
                    .gap_2()
                    .p_4()
                    .overflow_hidden()
                    .bg(LabColors::content_bg())
                    .child(
                        div()
                            .text_color(LabColors::text_primary())
                            .text_size(px(Typography::TEXT_LG))
                            .child("Lab Manager"),
                    )
                    .child(
                        div()
                            .text_color(LabColors::text_muted())
                            .text_size(px(Typography::TEXT_XS))
                            .child(status),
                    ),
            )
            .child(self.side_panel.clone())
    }
}

fn end_drag(entities: &AppEntities, reason: DragEnd, cx: &mut App) {
    entities.resize.update(cx, |resize, cx| {
        if resize.stop_drag(reason).is_some() {
            cx.notify();
        }
    });
}

/// Dispatch an AppEvent to the appropriate entity
fn dispatch_event(event: AppEvent, entities: &AppEntities, cx: &mut App) {
    match event {
        AppEvent::ContentSwapped { content } => {
            debug!(title = %content.title, "Host swapped panel content");
            entities.tabs.update(cx, |tabs, cx| {
                tabs.swap_content(content);
                cx.notify();
            });
            entities.content_swapped(cx);
        }
        AppEvent::TogglePanel => entities.toggle_panel(cx),
        AppEvent::CancelDrag => end_drag(entities, DragEnd::Cancelled, cx),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gpui::{point, Modifiers, TestAppContext, VisualTestContext};

    use crate::domain::config::PanelConfig;
    use crate::domain::length::CssLength;

    const ROW_Y: f32 = 100.0;

    /// Open a workspace window; returns the entities and the host sender
    fn open_workspace(
        cx: &mut TestAppContext,
    ) -> (AppEntities, flume::Sender<AppEvent>, &mut VisualTestContext) {
        let entities = cx.update(|cx| AppEntities::init(PanelConfig::default(), cx));
        let (event_tx, event_rx) = flume::unbounded();

        let workspace_entities = entities.clone();
        let (_workspace, vcx) = cx.add_window_view(move |window, cx| {
            Workspace::new(workspace_entities, event_rx, window, cx)
        });
        vcx.run_until_parked();

        (entities, event_tx, vcx)
    }

    fn measured(entities: &AppEntities, vcx: &VisualTestContext) -> ContainerGeometry {
        entities
            .resize
            .read_with(vcx, |resize, _| resize.geometry())
            .expect("side panel laid out")
    }

    fn is_dragging(entities: &AppEntities, vcx: &VisualTestContext) -> bool {
        entities.resize.read_with(vcx, |resize, _| resize.is_dragging())
    }

    fn panel_width(entities: &AppEntities, vcx: &VisualTestContext) -> CssLength {
        entities.panel.read_with(vcx, |panel, _| panel.width())
    }

    /// Press the left button on the resizer handle
    fn press_resizer(entities: &AppEntities, vcx: &mut VisualTestContext) {
        let geometry = measured(entities, vcx);
        vcx.simulate_mouse_down(
            point(px(geometry.left + 3.0), px(ROW_Y)),
            MouseButton::Left,
            Modifiers::none(),
        );
        vcx.run_until_parked();
    }

    fn drag_to(x: f32, button: Option<MouseButton>, vcx: &mut VisualTestContext) {
        vcx.simulate_mouse_move(point(px(x), px(ROW_Y)), button, Modifiers::none());
        vcx.run_until_parked();
    }

    #[gpui::test]
    fn test_press_move_release_then_move_is_ignored(cx: &mut TestAppContext) {
        let (entities, _tx, vcx) = open_workspace(cx);
        let right = measured(&entities, vcx).right();

        press_resizer(&entities, vcx);
        assert!(is_dragging(&entities, vcx), "press on resizer starts a drag");

        drag_to(right - 300.0, Some(MouseButton::Left), vcx);
        assert_eq!(panel_width(&entities, vcx), CssLength::px(300.0));

        vcx.simulate_mouse_up(
            point(px(right - 300.0), px(ROW_Y)),
            MouseButton::Left,
            Modifiers::none(),
        );
        vcx.run_until_parked();
        assert!(!is_dragging(&entities, vcx), "release ends the drag");

        // No listeners left: a later move, even with the button held, does nothing
        drag_to(right - 400.0, Some(MouseButton::Left), vcx);
        assert_eq!(panel_width(&entities, vcx), CssLength::px(300.0));
        assert!(!is_dragging(&entities, vcx));
    }

    #[gpui::test]
    fn test_move_without_button_ends_drag(cx: &mut TestAppContext) {
        let (entities, _tx, vcx) = open_workspace(cx);
        let right = measured(&entities, vcx).right();
        let before = panel_width(&entities, vcx);

        press_resizer(&entities, vcx);
        assert!(is_dragging(&entities, vcx));

        drag_to(right - 300.0, None::<MouseButton>, vcx);
        assert!(!is_dragging(&entities, vcx), "lost capture ends the drag");
        assert_eq!(panel_width(&entities, vcx), before);
    }

    #[gpui::test]
    fn test_cancel_drag_through_event_pump(cx: &mut TestAppContext) {
        let (entities, tx, vcx) = open_workspace(cx);

        press_resizer(&entities, vcx);
        assert!(is_dragging(&entities, vcx));

        tx.send(AppEvent::CancelDrag).expect("pump is running");
        vcx.run_until_parked();
        assert!(!is_dragging(&entities, vcx), "host cancel ends the drag");
    }

    #[gpui::test]
    fn test_content_swap_through_event_pump_expands(cx: &mut TestAppContext) {
        let (entities, tx, vcx) = open_workspace(cx);
        let config = PanelConfig::default();
        assert_eq!(panel_width(&entities, vcx), config.collapsed_width);

        tx.send(AppEvent::ContentSwapped {
            content: crate::app::navigation::PanelContent::new("Station 7", "proxied view"),
        })
        .expect("pump is running");
        vcx.run_until_parked();

        assert_eq!(panel_width(&entities, vcx), config.expanded_width);
        let glyph = entities.panel.read_with(vcx, |panel, _| panel.glyph());
        assert_eq!(glyph, "◀");
    }
}
