//! Server profile form.

use gpui::{prelude::FluentBuilder as _, *};
use gpui_component::{
    Sizable as _,
    WindowExt as _,
    button::{Button, ButtonVariants as _},
    form::{field, v_form},
    h_flex,
    input::{Input, InputState},
    notification::NotificationType,
};

use crate::{
    services::store::ServerProfile,
    state::{add_profile, delete_profile, session_connect, test_profile, update_profile},
};

/// Form for creating and editing server profiles.
pub struct ProfileForm {
    name: Entity<InputState>,
    endpoint: Entity<InputState>,
    access_key: Entity<InputState>,
    secret_key: Entity<InputState>,

    active_profile: Option<ServerProfile>,
    is_testing: bool,
}

impl ProfileForm {
    /// Create a new profile form.
    pub fn view(window: &mut Window, cx: &mut App) -> Entity<Self> {
        cx.new(|cx| Self::new(window, cx))
    }

    fn new(window: &mut Window, cx: &mut Context<Self>) -> Self {
        let name = cx.new(|cx| {
            InputState::new(window, cx)
                .placeholder("Local MinIO")
                .clean_on_escape()
        });
        let endpoint = cx.new(|cx| {
            InputState::new(window, cx)
                .placeholder("http://localhost:9090")
                .clean_on_escape()
        });
        let access_key = cx.new(|cx| {
            InputState::new(window, cx)
                .placeholder("minioadmin")
                .clean_on_escape()
        });
        let secret_key = cx.new(|cx| {
            InputState::new(window, cx)
                .masked(true)
                .placeholder("Secret Key")
                .clean_on_escape()
        });

        Self {
            name,
            endpoint,
            access_key,
            secret_key,
            active_profile: None,
            is_testing: false,
        }
    }

    /// Clear the form.
    pub fn clear(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let _ = self
            .name
            .update(cx, |this, cx| this.set_value("", window, cx));
        let _ = self
            .endpoint
            .update(cx, |this, cx| this.set_value("", window, cx));
        let _ = self
            .access_key
            .update(cx, |this, cx| this.set_value("", window, cx));
        let _ = self
            .secret_key
            .update(cx, |this, cx| this.set_value("", window, cx));

        self.active_profile = None;
        cx.notify();
    }

    /// Set the form to edit an existing profile.
    pub fn set_profile(
        &mut self,
        profile: ServerProfile,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        let _ = self.name.update(cx, |this, cx| {
            this.set_value(profile.name.clone(), window, cx)
        });
        let _ = self.endpoint.update(cx, |this, cx| {
            this.set_value(profile.endpoint.clone(), window, cx)
        });
        let _ = self.access_key.update(cx, |this, cx| {
            this.set_value(profile.access_key.clone(), window, cx)
        });
        let _ = self
            .secret_key
            .update(cx, |this, cx| this.set_value("", window, cx));

        self.active_profile = Some(profile);
        cx.notify();
    }

    /// Get the current profile from form values.
    fn get_profile(&self, window: &mut Window, cx: &mut Context<Self>) -> Option<ServerProfile> {
        let name = self.name.read(cx).value().to_string();
        let endpoint = self.endpoint.read(cx).value().to_string();
        let access_key = self.access_key.read(cx).value().to_string();

        let profile = if let Some(ref existing) = self.active_profile {
            ServerProfile::with_id(existing.id, name, endpoint, access_key)
        } else {
            ServerProfile::new(name, endpoint, access_key)
        };

        if let Err(message) = profile.validate() {
            window.push_notification((NotificationType::Error, SharedString::from(message)), cx);
            return None;
        }

        Some(profile)
    }

    /// Get the secret key from the form.
    fn get_secret(&self, cx: &Context<Self>) -> Option<String> {
        let secret = self.secret_key.read(cx).value().to_string();
        if secret.is_empty() { None } else { Some(secret) }
    }

    /// Save the profile.
    fn save_profile(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        if let Some(profile) = self.get_profile(window, cx) {
            let secret = self.get_secret(cx);
            add_profile(profile, secret, cx);
            self.clear(window, cx);
            window.push_notification((NotificationType::Success, "Server profile saved."), cx);
        }
    }

    /// Update an existing profile.
    fn update_profile(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        if let Some(profile) = self.get_profile(window, cx) {
            let secret = self.get_secret(cx);
            update_profile(profile, secret, cx);
            window.push_notification((NotificationType::Success, "Server profile updated."), cx);
        }
    }

    /// Delete the profile.
    fn delete_profile(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        if let Some(profile) = self.active_profile.clone() {
            delete_profile(profile, cx);
            self.clear(window, cx);
        }
    }

    /// Connect to the server.
    fn connect(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        if let Some(profile) = self.get_profile(window, cx) {
            session_connect(&profile, cx);
        }
    }

    /// Test the endpoint and credentials.
    fn test_connection(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        if self.is_testing {
            return;
        }

        if let Some(profile) = self.get_profile(window, cx) {
            self.is_testing = true;
            cx.notify();

            let secret = self.get_secret(cx);
            let entity = cx.entity();

            cx.spawn_in(window, async move |_this, cx| {
                let result = test_profile(profile, secret).await;

                let _ = cx.update(|window, cx| {
                    match result {
                        Ok(_) => {
                            window.push_notification(
                                (NotificationType::Success, "Connection successful!"),
                                cx,
                            );
                        }
                        Err(e) => {
                            let error_msg: SharedString =
                                format!("Connection failed: {}", e).into();
                            tracing::error!("{}", error_msg.clone());
                            window.push_notification((NotificationType::Error, error_msg), cx);
                        }
                    }

                    cx.update_entity(&entity, |form, cx| {
                        form.is_testing = false;
                        cx.notify();
                    });
                });
            })
            .detach();
        }
    }
}

impl Render for ProfileForm {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let is_editing = self.active_profile.is_some();
        let title = if is_editing {
            "Edit Server"
        } else {
            "Add Server"
        };

        div()
            .mb_4()
            .child(div().text_3xl().mb_4().child(title))
            .child(
                v_form()
                    .columns(2)
                    .small()
                    .child(
                        field()
                            .col_span(2)
                            .label("Name")
                            .required(true)
                            .child(Input::new(&self.name)),
                    )
                    .child(
                        field()
                            .col_span(2)
                            .label("Endpoint")
                            .required(true)
                            .description("Console API endpoint, e.g. http://localhost:9090")
                            .child(Input::new(&self.endpoint)),
                    )
                    .child(
                        field()
                            .label("Access Key")
                            .required(true)
                            .child(Input::new(&self.access_key)),
                    )
                    .child(
                        field()
                            .label("Secret Key")
                            .child(Input::new(&self.secret_key)),
                    ),
            )
            .child(
                h_flex()
                    .mt_4()
                    .gap_2()
                    .child(
                        Button::new("test-profile")
                            .child("Test Connection")
                            .loading(self.is_testing)
                            .on_click(cx.listener(|this, _, win, cx| this.test_connection(win, cx))),
                    )
                    .when(!is_editing, |d| {
                        d.child(
                            Button::new("save-profile")
                                .primary()
                                .child("Save")
                                .on_click(cx.listener(|this, _, win, cx| this.save_profile(win, cx))),
                        )
                    })
                    .when(is_editing, |d| {
                        d.child(
                            Button::new("delete-profile")
                                .child("Delete")
                                .danger()
                                .on_click(
                                    cx.listener(|this, _, win, cx| this.delete_profile(win, cx)),
                                ),
                        )
                        .child(
                            Button::new("update-profile")
                                .primary()
                                .child("Update")
                                .on_click(
                                    cx.listener(|this, _, win, cx| this.update_profile(win, cx)),
                                ),
                        )
                    })
                    .child(
                        Button::new("connect-profile")
                            .primary()
                            .child("Connect")
                            .on_click(cx.listener(|this, _, win, cx| this.connect(win, cx))),
                    ),
            )
            .text_sm()
    }
}
