//! Create-bucket modal form.
//!
//! Owns name validation and the creation request; the browser only opens
//! and closes it.

use gpui::*;
use gpui_component::{
    ActiveTheme as _,
    Sizable as _,
    button::{Button, ButtonVariants as _},
    form::{field, v_form},
    h_flex,
    input::{Input, InputEvent, InputState},
    label::Label,
};

use crate::{services::api::validate_bucket_name, state::SessionState};

/// Events emitted by the create-bucket form.
pub enum AddBucketEvent {
    /// The bucket was created; the listing should refresh.
    Created { name: String },
    /// The form was dismissed without creating anything.
    Cancelled,
}

impl EventEmitter<AddBucketEvent> for AddBucketForm {}

/// Form for creating a new bucket.
pub struct AddBucketForm {
    name: Entity<InputState>,
    error: Option<SharedString>,
    is_submitting: bool,
    _subscriptions: Vec<Subscription>,
}

impl AddBucketForm {
    /// Create a new form view.
    pub fn view(window: &mut Window, cx: &mut App) -> Entity<Self> {
        cx.new(|cx| Self::new(window, cx))
    }

    fn new(window: &mut Window, cx: &mut Context<Self>) -> Self {
        let name = cx.new(|cx| {
            InputState::new(window, cx)
                .placeholder("my-bucket")
                .clean_on_escape()
        });

        let _subscriptions = vec![cx.subscribe_in(
            &name,
            window,
            |this, _, event: &InputEvent, window, cx| {
                if let InputEvent::PressEnter { .. } = event {
                    this.submit(window, cx);
                }
            },
        )];

        Self {
            name,
            error: None,
            is_submitting: false,
            _subscriptions,
        }
    }

    /// Reset the form to its empty state.
    pub fn clear(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let _ = self
            .name
            .update(cx, |this, cx| this.set_value("", window, cx));
        self.error = None;
        self.is_submitting = false;
        cx.notify();
    }

    fn cancel(&mut self, cx: &mut Context<Self>) {
        cx.emit(AddBucketEvent::Cancelled);
    }

    fn submit(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        if self.is_submitting {
            return;
        }

        let name = self.name.read(cx).value().to_string();
        if let Err(message) = validate_bucket_name(&name) {
            self.error = Some(message.into());
            cx.notify();
            return;
        }

        let Some(client) = cx.global::<SessionState>().client.clone() else {
            self.error = Some("Not connected to a server.".into());
            cx.notify();
            return;
        };

        self.is_submitting = true;
        self.error = None;
        cx.notify();

        let entity = cx.entity();

        cx.spawn_in(window, async move |_this, cx| {
            let result = client.create_bucket(&name).await;

            let _ = cx.update(|_window, cx| {
                cx.update_entity(&entity, |form, cx| {
                    form.is_submitting = false;
                    match result {
                        Ok(_) => {
                            cx.emit(AddBucketEvent::Created { name: name.clone() });
                        }
                        Err(e) => {
                            tracing::error!("Failed to create bucket: {}", e);
                            form.error = Some(e.to_string().into());
                        }
                    }
                    cx.notify();
                });
            });
        })
        .detach();
    }
}

impl Render for AddBucketForm {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .child(div().text_xl().mb_4().child("Create Bucket"))
            .child(
                v_form().columns(1).small().child(
                    field()
                        .label("Bucket Name")
                        .required(true)
                        .description("3-63 lowercase letters, digits, dots and hyphens")
                        .child(Input::new(&self.name)),
                ),
            )
            .children(self.error.clone().map(|error| {
                Label::new(error)
                    .text_sm()
                    .mt_2()
                    .text_color(cx.theme().danger)
            }))
            .child(
                h_flex()
                    .mt_4()
                    .gap_2()
                    .justify_end()
                    .child(
                        Button::new("cancel-create")
                            .ghost()
                            .child("Cancel")
                            .on_click(cx.listener(|this, _, _, cx| this.cancel(cx))),
                    )
                    .child(
                        Button::new("confirm-create")
                            .primary()
                            .child("Create")
                            .loading(self.is_submitting)
                            .on_click(cx.listener(|this, _, window, cx| this.submit(window, cx))),
                    ),
            )
            .text_sm()
    }
}
