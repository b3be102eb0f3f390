//! Bucket detail view.
//!
//! Reached from the browser's view action; carries only the bucket name and
//! fetches the rest.

use gpui::{prelude::FluentBuilder as _, *};
use gpui_component::{
    ActiveTheme as _, Icon, IconName, Sizable as _, StyledExt as _,
    button::{Button, ButtonVariants as _},
    h_flex,
    label::Label,
    spinner::Spinner,
    v_flex,
};

use crate::{
    services::{api::Bucket, format::nice_bytes},
    state::SessionState,
};

/// Events emitted by the bucket detail view.
pub enum BucketDetailEvent {
    /// Return to the bucket listing.
    Back,
    /// The bucket was deleted; the listing should refresh.
    Deleted { name: String },
}

impl EventEmitter<BucketDetailEvent> for BucketDetail {}

/// Detail screen for a single bucket.
pub struct BucketDetail {
    name: String,
    bucket: Option<Bucket>,
    is_loading: bool,
    is_deleting: bool,
    error: Option<String>,
}

impl BucketDetail {
    /// Create a detail view for the named bucket.
    pub fn view(name: String, _window: &mut Window, cx: &mut App) -> Entity<Self> {
        cx.new(|cx| Self::new(name, cx))
    }

    fn new(name: String, cx: &mut Context<Self>) -> Self {
        let mut this = Self {
            name,
            bucket: None,
            is_loading: false,
            is_deleting: false,
            error: None,
        };
        this.load(cx);
        this
    }

    fn load(&mut self, cx: &mut Context<Self>) {
        let Some(client) = cx.global::<SessionState>().client.clone() else {
            return;
        };

        self.is_loading = true;
        self.error = None;
        cx.notify();

        let name = self.name.clone();

        cx.spawn(async move |this, cx| {
            let result = client.bucket_info(&name).await;

            this.update(cx, |this, cx| {
                this.is_loading = false;
                match result {
                    Ok(bucket) => {
                        this.bucket = Some(bucket);
                        this.error = None;
                    }
                    Err(e) => this.error = Some(e.to_string()),
                }
                cx.notify();
            })
            .ok();
        })
        .detach();
    }

    fn delete(&mut self, cx: &mut Context<Self>) {
        if self.is_deleting {
            return;
        }
        let Some(client) = cx.global::<SessionState>().client.clone() else {
            return;
        };

        self.is_deleting = true;
        cx.notify();

        let name = self.name.clone();

        cx.spawn(async move |this, cx| {
            let result = client.delete_bucket(&name).await;

            this.update(cx, |this, cx| {
                this.is_deleting = false;
                match result {
                    Ok(_) => cx.emit(BucketDetailEvent::Deleted { name: name.clone() }),
                    Err(e) => {
                        tracing::error!("Failed to delete bucket {}: {}", name, e);
                        this.error = Some(e.to_string());
                    }
                }
                cx.notify();
            })
            .ok();
        })
        .detach();
    }

    fn render_info_row(
        &self,
        label: &'static str,
        value: String,
        cx: &Context<Self>,
    ) -> impl IntoElement {
        h_flex()
            .justify_between()
            .child(
                Label::new(label)
                    .text_sm()
                    .text_color(cx.theme().muted_foreground),
            )
            .child(Label::new(value).text_sm())
    }

    fn render_body(&self, cx: &mut Context<Self>) -> AnyElement {
        if self.is_loading {
            return div()
                .flex()
                .flex_1()
                .items_center()
                .justify_center()
                .child(Spinner::new())
                .into_any_element();
        }

        if let Some(ref error) = self.error {
            return div()
                .flex()
                .flex_1()
                .flex_col()
                .items_center()
                .justify_center()
                .gap_2()
                .child(
                    Icon::new(IconName::TriangleAlert)
                        .size_8()
                        .text_color(cx.theme().danger),
                )
                .child(Label::new("Failed to load").font_semibold())
                .child(
                    Label::new(error.clone())
                        .text_sm()
                        .text_color(cx.theme().muted_foreground),
                )
                .into_any_element();
        }

        let Some(ref bucket) = self.bucket else {
            return div().into_any_element();
        };

        v_flex()
            .w(px(420.))
            .p_4()
            .gap_2()
            .border_1()
            .border_color(cx.theme().border)
            .rounded(cx.theme().radius)
            .child(self.render_info_row("Name", bucket.name.clone(), cx))
            .child(self.render_info_row("Used Space", nice_bytes(bucket.size), cx))
            .when_some(bucket.creation_date, |d, created| {
                d.child(self.render_info_row(
                    "Created",
                    created.format("%Y-%m-%d %H:%M").to_string(),
                    cx,
                ))
            })
            .into_any_element()
    }
}

impl Render for BucketDetail {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        v_flex()
            .size_full()
            .p_4()
            .gap_3()
            .child(
                h_flex()
                    .gap_2()
                    .items_center()
                    .child(
                        Button::new("back-to-buckets")
                            .icon(Icon::empty().path("icons/arrow-left.svg"))
                            .ghost()
                            .small()
                            .tooltip("Back to buckets")
                            .on_click(cx.listener(|_, _, _, cx| cx.emit(BucketDetailEvent::Back))),
                    )
                    .child(Label::new(self.name.clone()).text_lg().font_semibold())
                    .child(div().flex_1())
                    .child(
                        Button::new("delete-bucket")
                            .danger()
                            .child("Delete Bucket")
                            .loading(self.is_deleting)
                            .on_click(cx.listener(|this, _, _, cx| this.delete(cx))),
                    ),
            )
            .child(self.render_body(cx))
    }
}
