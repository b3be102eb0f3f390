//! Server profile manager panel.
//!
//! Shown while the session is disconnected: a sidebar of saved profiles and
//! the profile form.

use gpui::*;
use gpui_component::{
    ActiveTheme as _, Icon, Sizable as _, StyledExt as _,
    button::{Button, ButtonVariants as _},
    h_flex,
    label::Label,
    v_flex,
};
use uuid::Uuid;

use crate::{services::store::ServerProfile, state::SessionState};

use super::{profile_form::ProfileForm, profile_list::ProfileListItem};

/// Panel combining the saved-profile list with the profile form.
pub struct ProfileManager {
    form: Entity<ProfileForm>,
    profiles: Vec<ServerProfile>,
    selected: Option<Uuid>,
    _subscriptions: Vec<Subscription>,
}

impl ProfileManager {
    /// Create a new profile manager view.
    pub fn view(window: &mut Window, cx: &mut App) -> Entity<Self> {
        cx.new(|cx| Self::new(window, cx))
    }

    fn new(window: &mut Window, cx: &mut Context<Self>) -> Self {
        let form = ProfileForm::view(window, cx);

        let _subscriptions = vec![cx.observe_global_in::<SessionState>(
            window,
            move |this, _win, cx| {
                this.profiles = cx.global::<SessionState>().saved_profiles.clone();
                cx.notify();
            },
        )];

        Self {
            form,
            profiles: cx.global::<SessionState>().saved_profiles.clone(),
            selected: None,
            _subscriptions,
        }
    }

    fn select_profile(&mut self, ix: usize, window: &mut Window, cx: &mut Context<Self>) {
        if let Some(profile) = self.profiles.get(ix).cloned() {
            self.selected = Some(profile.id);
            self.form
                .update(cx, |form, cx| form.set_profile(profile, window, cx));
            cx.notify();
        }
    }

    fn new_profile(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        self.selected = None;
        self.form.update(cx, |form, cx| form.clear(window, cx));
        cx.notify();
    }

    fn render_sidebar(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let mut list = v_flex().p_2().gap_1().flex_1().overflow_hidden();

        if self.profiles.is_empty() {
            list = list.child(
                div().p_3().child(
                    Label::new("No saved servers yet")
                        .text_sm()
                        .text_color(cx.theme().muted_foreground),
                ),
            );
        } else {
            for (ix, profile) in self.profiles.iter().enumerate() {
                let selected = self.selected == Some(profile.id);
                list = list.child(
                    ProfileListItem::new(ix, profile.clone(), ix, selected).on_click(cx.listener(
                        move |this, _, window, cx| {
                            this.select_profile(ix, window, cx);
                        },
                    )),
                );
            }
        }

        v_flex()
            .w(px(320.))
            .h_full()
            .border_r_1()
            .border_color(cx.theme().border)
            .child(
                h_flex()
                    .px_3()
                    .py_2()
                    .items_center()
                    .justify_between()
                    .border_b_1()
                    .border_color(cx.theme().border)
                    .child(Label::new("Servers").font_semibold())
                    .child(
                        Button::new("new-profile")
                            .icon(Icon::empty().path("icons/plus.svg"))
                            .ghost()
                            .small()
                            .tooltip("New server")
                            .on_click(cx.listener(|this, _, window, cx| {
                                this.new_profile(window, cx)
                            })),
                    ),
            )
            .child(list)
    }
}

impl Render for ProfileManager {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        h_flex()
            .size_full()
            .child(self.render_sidebar(cx))
            .child(
                div()
                    .flex_1()
                    .h_full()
                    .overflow_hidden()
                    .p_8()
                    .child(self.form.clone()),
            )
    }
}
