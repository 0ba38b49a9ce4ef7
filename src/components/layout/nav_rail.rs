//! Navigation Rail Component
//!
//! Lab resource pages. Selecting one swaps it into the side panel.

use gpui::{
    div, prelude::*, px, ClickEvent, Context, InteractiveElement, IntoElement, ParentElement,
    Render, SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::app::navigation::LabPage;
use crate::constants::NAV_RAIL_WIDTH;
use crate::theme::colors::LabColors;
use crate::theme::typography::Typography;

/// Navigation rail component
pub struct NavRail {
    entities: AppEntities,
}

impl NavRail {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        cx.observe(&entities.tabs, |_this, _, cx| cx.notify())
            .detach();

        Self { entities }
    }

    fn render_nav_item(&self, page: LabPage, active_page: Option<LabPage>) -> impl IntoElement {
        let is_active = active_page == Some(page);
        let entities = self.entities.clone();

        let (bg_color, border_color) = if is_active {
            (LabColors::accent_soft(), LabColors::accent())
        } else {
            (LabColors::transparent(), LabColors::transparent())
        };

        div()
            .id(SharedString::from(format!("nav-{:?}", page)))
            .w_full()
            .px_4()
            .py_2()
            .bg(bg_color)
            .border_l_2()
            .border_color(border_color)
            .text_color(LabColors::text_light())
            .text_size(px(Typography::TEXT_SM))
            .cursor_pointer()
            .hover(|s| s.bg(LabColors::accent_soft()))
            .on_click(move |_event: &ClickEvent, _window, cx| {
                entities.tabs.update(cx, |tabs, cx| {
                    tabs.set_active_page(page);
                    cx.notify();
                });
                entities.content_swapped(cx);
            })
            .child(page.title())
    }
}

impl Render for NavRail {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let active_page = self.entities.tabs.read(cx).active_page;

        div()
            .w(px(NAV_RAIL_WIDTH))
            .h_full()
            .flex_none()
            .bg(LabColors::rail_bg())
            .flex()
            .flex_col()
            .pt_4()
            .children(
                LabPage::all()
                    .iter()
                    .map(|page| self.render_nav_item(*page, active_page)),
            )
    }
}
