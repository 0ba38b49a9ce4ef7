//! Side Panel Component
//!
//! Right-anchored container with a toggle button and a resizer handle on
//! its left edge. Width and glyph come from [`PanelState`]; the drag itself
//! is tracked at window level by the workspace.
//!
//! [`PanelState`]: crate::state::panel_state::PanelState

use gpui::{
    canvas, div, prelude::*, px, rems, ClickEvent, Context, InteractiveElement, IntoElement,
    Length, MouseButton, MouseDownEvent, ParentElement, Render, Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::constants::{
    CONTAINER_BORDER, CONTAINER_ID, HEADER_PADDING_X, RESIZER_ID, RESIZER_WIDTH,
    TOGGLE_BUTTON_ID, TOGGLE_BUTTON_REM,
};
use crate::domain::length::CssLength;
use crate::state::resize_state::ContainerGeometry;
use crate::theme::colors::LabColors;
use crate::theme::typography::Typography;

/// GPUI length for a panel width
pub fn to_length(width: CssLength) -> Length {
    match width {
        CssLength::Rem(value) => rems(value).into(),
        CssLength::Px(value) => px(value).into(),
    }
}

/// Pixels the collapsed panel needs to show the toggle button unclipped
pub fn collapsed_chrome_width(rem_size: f32) -> f32 {
    CONTAINER_BORDER + RESIZER_WIDTH + 2.0 * HEADER_PADDING_X + TOGGLE_BUTTON_REM * rem_size
}

/// Side panel component
pub struct SidePanel {
    entities: AppEntities,
}

impl SidePanel {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        cx.observe(&entities.panel, |_this, _, cx| cx.notify())
            .detach();
        cx.observe(&entities.resize, |_this, _, cx| cx.notify())
            .detach();
        cx.observe(&entities.tabs, |_this, _, cx| cx.notify())
            .detach();

        Self { entities }
    }

    fn render_resizer(&self, dragging: bool) -> impl IntoElement {
        let resize = self.entities.resize.clone();

        let bg = if dragging {
            LabColors::accent()
        } else {
            LabColors::resizer()
        };

        div()
            .id(RESIZER_ID)
            .w(px(RESIZER_WIDTH))
            .h_full()
            .flex_none()
            .bg(bg)
            .cursor_col_resize()
            .hover(|s| s.bg(LabColors::accent()))
            .on_mouse_down(
                MouseButton::Left,
                move |_event: &MouseDownEvent, _window, cx| {
                    resize.update(cx, |resize, cx| {
                        resize.init_drag();
                        cx.notify();
                    });
                },
            )
    }

    fn render_toggle_button(&self, glyph: &'static str) -> impl IntoElement {
        let entities = self.entities.clone();

        div()
            .id(TOGGLE_BUTTON_ID)
            .flex_none()
            .w(rems(TOGGLE_BUTTON_REM))
            .h(rems(TOGGLE_BUTTON_REM))
            .flex()
            .items_center()
            .justify_center()
            .rounded_sm()
            .text_color(LabColors::text_secondary())
            .text_size(px(Typography::GLYPH))
            .cursor_pointer()
            .hover(|s| s.bg(LabColors::accent_soft()))
            .on_click(move |_event: &ClickEvent, _window, cx| {
                entities.toggle_panel(cx);
            })
            .child(glyph)
    }
}

impl Render for SidePanel {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let panel = self.entities.panel.read(cx);
        let width = to_length(panel.width());
        let glyph = panel.glyph();
        let dragging = self.entities.resize.read(cx).is_dragging();
        let content = self.entities.tabs.read(cx).content.clone();

        let (title, body) = match content {
            Some(content) => (content.title, content.body),
            None => ("Details".into(), "Select a page to load it here.".into()),
        };

        // Record the laid-out bounds; the drag measures against them
        let resize = self.entities.resize.clone();
        let measure = canvas(
            move |bounds, _window, cx| {
                resize.update(cx, |resize, _| {
                    resize.record_geometry(ContainerGeometry {
                        left: bounds.left().into(),
                        width: bounds.size.width.into(),
                    })
                });
            },
            |_, _, _, _| {},
        )
        .absolute()
        .size_full();

        div()
            .id(CONTAINER_ID)
            .relative()
            .w(width)
            .h_full()
            .flex_none()
            .flex()
            .flex_row()
            .overflow_hidden()
            .bg(LabColors::panel_bg())
            .border_l_1()
            .border_color(LabColors::border())
            .child(measure)
            .child(self.render_resizer(dragging))
            .child(
                div()
                    .flex_1()
                    .flex()
                    .flex_col()
                    .overflow_hidden()
                    // Header
                    .child(
                        div()
                            .w_full()
                            .px(px(HEADER_PADDING_X))
                            .py_1()
                            .flex()
                            .items_center()
                            .gap_2()
                            .border_b_1()
                            .border_color(LabColors::border())
                            .child(self.render_toggle_button(glyph))
                            .child(
                                div()
                                    .text_color(LabColors::text_primary())
                                    .text_size(px(Typography::TEXT_LG))
                                    .font_weight(gpui::FontWeight::MEDIUM)
                                    .whitespace_nowrap()
                                    .child(title),
                            ),
                    )
                    // Swapped content
                    .child(
                        div()
                            .p_4()
                            .text_color(LabColors::text_secondary())
                            .text_size(px(Typography::TEXT_SM))
                            .child(body),
                    ),
            )
    }
}
