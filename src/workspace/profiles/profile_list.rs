//! Server profile list item.

use gpui::{prelude::FluentBuilder as _, *};
use gpui_component::{
    ActiveTheme as _, Icon, Selectable, StyledExt, h_flex, label::Label, list::ListItem, v_flex,
};

use crate::services::store::ServerProfile;

/// List item for a saved server profile.
#[derive(IntoElement)]
pub struct ProfileListItem {
    base: ListItem,
    ix: usize,
    profile: ServerProfile,
    selected: bool,
}

impl ProfileListItem {
    pub fn new(id: impl Into<ElementId>, profile: ServerProfile, ix: usize, selected: bool) -> Self {
        Self {
            profile,
            ix,
            base: ListItem::new(id),
            selected,
        }
    }

    pub fn on_click(
        mut self,
        handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.base = self.base.on_click(handler);
        self
    }
}

impl Selectable for ProfileListItem {
    fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    fn is_selected(&self) -> bool {
        self.selected
    }
}

impl RenderOnce for ProfileListItem {
    fn render(self, _: &mut Window, cx: &mut App) -> impl IntoElement {
        let text_color = if self.selected {
            cx.theme().accent_foreground
        } else {
            cx.theme().foreground
        };

        let bg_color = if self.selected {
            cx.theme().list_active
        } else if self.ix % 2 == 0 {
            cx.theme().list
        } else {
            cx.theme().list_even
        };

        self.base
            .px_3()
            .py_2()
            .overflow_x_hidden()
            .bg(bg_color)
            .border_1()
            .border_color(bg_color)
            .when(self.selected, |this| {
                this.border_color(cx.theme().list_active_border)
            })
            .rounded(cx.theme().radius)
            .child(
                h_flex()
                    .items_center()
                    .gap_3()
                    .text_color(text_color)
                    .child(
                        Icon::empty()
                            .path("icons/server.svg")
                            .size_4()
                            .text_color(text_color.opacity(0.7)),
                    )
                    .child(
                        v_flex()
                            .gap_1()
                            .flex_1()
                            .overflow_x_hidden()
                            .child(
                                Label::new(self.profile.name.clone())
                                    .font_semibold()
                                    .whitespace_nowrap(),
                            )
                            .child(
                                Label::new(self.profile.endpoint.clone())
                                    .text_xs()
                                    .text_color(text_color.opacity(0.6))
                                    .whitespace_nowrap(),
                            ),
                    ),
            )
    }
}
