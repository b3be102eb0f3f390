use gpui::{prelude::FluentBuilder as _, *};
use gpui_component::{
    ActiveTheme, Icon, Root, Sizable as _, StyledExt as _, WindowExt as _,
    button::{Button, ButtonVariants as _},
    h_flex,
    label::Label,
    notification::NotificationType,
    spinner::Spinner,
};

#[cfg(feature = "keyboard-nav")]
use super::help_overlay::HelpOverlay;
use super::{
    buckets::{BucketBrowser, BucketBrowserEvent, BucketDetail, BucketDetailEvent},
    profiles::ProfileManager,
};
#[cfg(feature = "keyboard-nav")]
use crate::keybindings::global;
use crate::state::{SessionState, SessionStatus, session_disconnect};

pub struct Workspace {
    /// Session status mirrored from the global state.
    session_status: SessionStatus,

    profile_manager: Entity<ProfileManager>,
    bucket_browser: Entity<BucketBrowser>,
    /// Detail view pushed on top of the browser, if any.
    bucket_detail: Option<Entity<BucketDetail>>,
    detail_subscription: Option<Subscription>,

    _subscriptions: Vec<Subscription>,

    /// Whether to show the help overlay.
    #[cfg(feature = "keyboard-nav")]
    show_help: bool,
}

impl Workspace {
    pub fn new(window: &mut Window, cx: &mut Context<Self>) -> Self {
        let profile_manager = ProfileManager::view(window, cx);
        let bucket_browser = BucketBrowser::view(window, cx);

        let _subscriptions = vec![
            cx.observe_global::<SessionState>(move |this, cx| {
                let status = cx.global::<SessionState>().status;
                if status != this.session_status {
                    this.session_status = status;
                    match status {
                        SessionStatus::Connected => {
                            this.bucket_browser.update(cx, |browser, cx| browser.reload(cx));
                        }
                        SessionStatus::Disconnected => {
                            this.bucket_detail = None;
                            this.detail_subscription = None;
                        }
                        SessionStatus::Connecting => {}
                    }
                }
                cx.notify();
            }),
            cx.subscribe_in(
                &bucket_browser,
                window,
                |this, _, event: &BucketBrowserEvent, window, cx| match event {
                    BucketBrowserEvent::ViewBucket(name) => {
                        this.open_bucket_detail(name.clone(), window, cx);
                    }
                },
            ),
        ];

        Self {
            session_status: SessionStatus::Disconnected,
            profile_manager,
            bucket_browser,
            bucket_detail: None,
            detail_subscription: None,
            _subscriptions,
            #[cfg(feature = "keyboard-nav")]
            show_help: false,
        }
    }

    pub fn view(window: &mut Window, cx: &mut App) -> Entity<Self> {
        cx.new(|cx| Self::new(window, cx))
    }

    fn open_bucket_detail(&mut self, name: String, window: &mut Window, cx: &mut Context<Self>) {
        let detail = BucketDetail::view(name, window, cx);

        self.detail_subscription = Some(cx.subscribe_in(
            &detail,
            window,
            |this, _, event: &BucketDetailEvent, window, cx| match event {
                BucketDetailEvent::Back => {
                    this.close_bucket_detail(cx);
                }
                BucketDetailEvent::Deleted { name } => {
                    window.push_notification(
                        (
                            NotificationType::Success,
                            SharedString::from(format!("Bucket \"{}\" deleted.", name)),
                        ),
                        cx,
                    );
                    this.close_bucket_detail(cx);
                    this.bucket_browser.update(cx, |browser, cx| browser.reload(cx));
                }
            },
        ));
        self.bucket_detail = Some(detail);
        cx.notify();
    }

    fn close_bucket_detail(&mut self, cx: &mut Context<Self>) {
        self.bucket_detail = None;
        self.detail_subscription = None;
        cx.notify();
    }

    // ========================================================================
    // Keyboard Action Handlers
    // ========================================================================

    #[cfg(feature = "keyboard-nav")]
    fn on_show_help(&mut self, _: &global::ShowHelp, _window: &mut Window, cx: &mut Context<Self>) {
        self.show_help = true;
        cx.notify();
    }

    #[cfg(feature = "keyboard-nav")]
    fn on_hide_help(&mut self, _: &global::HideHelp, _window: &mut Window, cx: &mut Context<Self>) {
        self.show_help = false;
        cx.notify();
    }

    #[cfg(feature = "keyboard-nav")]
    fn on_disconnect(
        &mut self,
        _: &global::Disconnect,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        session_disconnect(cx);
    }

    #[cfg(feature = "keyboard-nav")]
    fn on_escape(&mut self, _: &global::Escape, _window: &mut Window, cx: &mut Context<Self>) {
        // Close help overlay if open
        if self.show_help {
            self.show_help = false;
            cx.notify();
            return;
        }
        // Then the create-bucket modal
        let dismissed = self
            .bucket_browser
            .update(cx, |browser, cx| browser.dismiss_add_modal(cx));
        if dismissed {
            return;
        }
        // Then leave the detail view
        if self.bucket_detail.is_some() {
            self.close_bucket_detail(cx);
        }
    }

    fn render_header(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let endpoint = cx.global::<SessionState>().active_endpoint();
        let connected = self.session_status == SessionStatus::Connected;

        h_flex()
            .px_4()
            .py_2()
            .items_center()
            .justify_between()
            .bg(cx.theme().title_bar)
            .border_b_1()
            .border_color(cx.theme().border)
            .child(
                h_flex()
                    .gap_2()
                    .items_center()
                    .child(Icon::empty().path("icons/bucket.svg").size_5())
                    .child(Label::new("bgui").font_semibold()),
            )
            .when(connected, |d| {
                d.child(
                    h_flex()
                        .gap_2()
                        .items_center()
                        .children(endpoint.map(|endpoint| {
                            Label::new(endpoint)
                                .text_xs()
                                .text_color(cx.theme().muted_foreground)
                        }))
                        .child(
                            Button::new("disconnect")
                                .ghost()
                                .small()
                                .child("Disconnect")
                                .on_click(cx.listener(|_, _, _, cx| session_disconnect(cx))),
                        ),
                )
            })
    }

    fn render_loading(&mut self, cx: &mut Context<Self>) -> Stateful<Div> {
        div()
            .id("loading-content")
            .flex()
            .flex_grow()
            .bg(cx.theme().background)
            .justify_center()
            .items_center()
            .child(
                div()
                    .flex()
                    .flex_col()
                    .items_center()
                    .child(Spinner::new())
                    .child("Connecting"),
            )
    }

    fn render_content(&mut self, cx: &mut Context<Self>) -> Stateful<Div> {
        match self.session_status {
            SessionStatus::Disconnected => div()
                .id("profile-manager")
                .flex()
                .flex_1()
                .bg(cx.theme().background)
                .child(self.profile_manager.clone()),
            SessionStatus::Connecting => self.render_loading(cx),
            SessionStatus::Connected => {
                let content: AnyView = match self.bucket_detail {
                    Some(ref detail) => detail.clone().into(),
                    None => self.bucket_browser.clone().into(),
                };
                div()
                    .id("console-content")
                    .flex()
                    .flex_1()
                    .bg(cx.theme().background)
                    .child(content)
            }
        }
    }
}

impl Render for Workspace {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let content = self.render_content(cx);

        #[cfg(feature = "keyboard-nav")]
        let show_help = self.show_help;
        #[cfg(not(feature = "keyboard-nav"))]
        let show_help = false;

        let root = div().flex().flex_col().size_full();

        // Register keyboard action handlers (feature-gated)
        #[cfg(feature = "keyboard-nav")]
        let root = root
            .on_action(cx.listener(Self::on_show_help))
            .on_action(cx.listener(Self::on_hide_help))
            .on_action(cx.listener(Self::on_disconnect))
            .on_action(cx.listener(Self::on_escape));

        let root = root
            .child(self.render_header(cx))
            .child(content)
            .children(Root::render_dialog_layer(window, cx))
            .children(Root::render_sheet_layer(window, cx))
            .children(Root::render_notification_layer(window, cx));

        // Help overlay (rendered on top when visible)
        #[cfg(feature = "keyboard-nav")]
        let root = if show_help {
            root.child(HelpOverlay::new())
        } else {
            root
        };

        root
    }
}
