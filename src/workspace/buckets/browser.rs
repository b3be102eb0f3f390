//! Bucket browser screen.
//!
//! Paginated, searchable list of buckets with a create-bucket modal. Data
//! flows mount -> fetch(offset, limit) -> store -> filter/truncate -> render;
//! the state bookkeeping lives in [`BrowserState`].

use std::rc::Rc;

use gpui::{prelude::FluentBuilder as _, *};
use gpui_component::{
    ActiveTheme as _, Disableable, Icon, IconName, Sizable as _, StyledExt as _, WindowExt as _,
    button::{Button, ButtonVariants as _},
    h_flex,
    input::{Input, InputEvent, InputState},
    label::Label,
    notification::NotificationType,
    v_flex,
};

#[cfg(feature = "keyboard-nav")]
use crate::keybindings::buckets;
use crate::{
    services::{api::Bucket, format::nice_bytes},
    state::SessionState,
    workspace::data_table::{Column, DataTable, PageHandler, Paginator, RowHandler},
};

use super::{
    add_bucket::{AddBucketEvent, AddBucketForm},
    view_state::{BrowserState, FetchOutcome, ROWS_PER_PAGE_OPTIONS},
};

/// Events emitted by the bucket browser.
pub enum BucketBrowserEvent {
    /// Navigate to the detail view for the named bucket.
    ViewBucket(String),
}

impl EventEmitter<BucketBrowserEvent> for BucketBrowser {}

/// Screen listing the server's buckets.
pub struct BucketBrowser {
    state: BrowserState,
    search_input: Entity<InputState>,
    add_form: Entity<AddBucketForm>,
    _subscriptions: Vec<Subscription>,
}

impl BucketBrowser {
    /// Create a new bucket browser view.
    pub fn view(window: &mut Window, cx: &mut App) -> Entity<Self> {
        cx.new(|cx| Self::new(window, cx))
    }

    fn new(window: &mut Window, cx: &mut Context<Self>) -> Self {
        let search_input = cx.new(|cx| {
            InputState::new(window, cx)
                .placeholder("Search Buckets")
                .clean_on_escape()
        });
        let add_form = AddBucketForm::view(window, cx);

        let _subscriptions = vec![
            cx.subscribe_in(
                &search_input,
                window,
                |this, input, event: &InputEvent, _window, cx| {
                    if let InputEvent::Change = event {
                        let filter = input.read(cx).value().to_string();
                        this.state.set_filter(filter);
                        cx.notify();
                    }
                },
            ),
            cx.subscribe_in(
                &add_form,
                window,
                |this, _, event: &AddBucketEvent, window, cx| match event {
                    AddBucketEvent::Created { name } => {
                        this.state.add_open = false;
                        window.push_notification(
                            (
                                NotificationType::Success,
                                SharedString::from(format!("Bucket \"{}\" created.", name)),
                            ),
                            cx,
                        );
                        this.reload(cx);
                        cx.notify();
                    }
                    AddBucketEvent::Cancelled => {
                        this.state.add_open = false;
                        cx.notify();
                    }
                },
            ),
        ];

        let mut this = Self {
            state: BrowserState::new(),
            search_input,
            add_form,
            _subscriptions,
        };
        this.reload(cx);
        this
    }

    /// Fetch the current page.
    ///
    /// Each call supersedes any in-flight fetch: the spawned task carries a
    /// generation token and a completion with a stale token is discarded.
    pub fn reload(&mut self, cx: &mut Context<Self>) {
        let Some(client) = cx.global::<SessionState>().client.clone() else {
            self.state.loading = false;
            return;
        };

        let token = self.state.begin_fetch();
        let offset = self.state.offset();
        let limit = self.state.rows_per_page;
        cx.notify();

        cx.spawn(async move |this, cx| {
            let result = client.list_buckets(offset, limit).await;

            this.update(cx, |this, cx| {
                match result {
                    Ok(buckets) => {
                        // An empty page past the first walks back one page
                        // and fetches again at the recomputed offset.
                        if this.state.fetch_succeeded(token, buckets) == FetchOutcome::Refetch {
                            this.reload(cx);
                        }
                    }
                    Err(e) => this.state.fetch_failed(token, e.to_string()),
                }
                cx.notify();
            })
            .ok();
        })
        .detach();
    }

    fn change_page(&mut self, page: usize, cx: &mut Context<Self>) {
        if page == self.state.page {
            return;
        }
        self.state.set_page(page);
        self.reload(cx);
    }

    fn change_rows_per_page(&mut self, rows_per_page: usize, cx: &mut Context<Self>) {
        if rows_per_page == self.state.rows_per_page {
            return;
        }
        self.state.set_rows_per_page(rows_per_page);
        self.reload(cx);
    }

    fn open_add_modal(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        self.add_form.update(cx, |form, cx| form.clear(window, cx));
        self.state.add_open = true;
        cx.notify();
    }

    /// Close the create-bucket modal if open. Returns whether it was open.
    pub fn dismiss_add_modal(&mut self, cx: &mut Context<Self>) -> bool {
        if self.state.add_open {
            self.state.add_open = false;
            cx.notify();
            true
        } else {
            false
        }
    }

    // ========================================================================
    // Keyboard Action Handlers
    // ========================================================================

    #[cfg(feature = "keyboard-nav")]
    fn on_refresh(&mut self, _: &buckets::Refresh, _window: &mut Window, cx: &mut Context<Self>) {
        self.reload(cx);
    }

    #[cfg(feature = "keyboard-nav")]
    fn on_new_bucket(
        &mut self,
        _: &buckets::NewBucket,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        self.open_add_modal(window, cx);
    }

    #[cfg(feature = "keyboard-nav")]
    fn on_prev_page(&mut self, _: &buckets::PrevPage, _window: &mut Window, cx: &mut Context<Self>) {
        let page = self.state.page.saturating_sub(1);
        self.change_page(page, cx);
    }

    #[cfg(feature = "keyboard-nav")]
    fn on_next_page(&mut self, _: &buckets::NextPage, _window: &mut Window, cx: &mut Context<Self>) {
        if self.state.may_have_more() {
            self.change_page(self.state.page + 1, cx);
        }
    }

    fn render_toolbar(&self, cx: &mut Context<Self>) -> impl IntoElement {
        h_flex()
            .gap_2()
            .items_center()
            .child(Label::new("Buckets").text_lg().font_semibold())
            .child(div().flex_1())
            .child(div().w(px(260.)).child(Input::new(&self.search_input)))
            .child(
                Button::new("refresh-buckets")
                    .icon(Icon::empty().path("icons/rotate-ccw.svg"))
                    .ghost()
                    .small()
                    .tooltip("Refresh")
                    .disabled(self.state.loading)
                    .on_click(cx.listener(|this, _, _, cx| this.reload(cx))),
            )
            .child(
                Button::new("add-bucket")
                    .primary()
                    .child(
                        h_flex()
                            .gap_1()
                            .items_center()
                            .child(Icon::empty().path("icons/plus.svg").size_4())
                            .child("Add Bucket"),
                    )
                    .on_click(cx.listener(|this, _, window, cx| this.open_add_modal(window, cx))),
            )
    }

    fn render_error(&self, error: &str, cx: &mut Context<Self>) -> impl IntoElement {
        h_flex()
            .gap_2()
            .items_center()
            .px_3()
            .py_2()
            .rounded(cx.theme().radius)
            .border_1()
            .border_color(cx.theme().danger)
            .child(
                Icon::new(IconName::TriangleAlert)
                    .size_4()
                    .text_color(cx.theme().danger),
            )
            .child(
                Label::new(error.to_string())
                    .text_sm()
                    .text_color(cx.theme().danger),
            )
    }

    fn render_table(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let visible = self.state.visible_rows();
        let shown = visible.len();

        let entity = cx.entity();
        let on_page: PageHandler = Rc::new({
            let entity = entity.clone();
            move |page, _window, cx| {
                entity.update(cx, |this, cx| this.change_page(page, cx));
            }
        });
        let on_rows_per_page: PageHandler = Rc::new({
            let entity = entity.clone();
            move |rows_per_page, _window, cx| {
                entity.update(cx, |this, cx| this.change_rows_per_page(rows_per_page, cx));
            }
        });
        let on_view: RowHandler<Bucket> = Rc::new(move |bucket: &Bucket, _window, cx| {
            let name = bucket.name.clone();
            entity.update(cx, |_, cx| cx.emit(BucketBrowserEvent::ViewBucket(name)));
        });

        DataTable::new()
            .column(Column::new("Name", |b: &Bucket| b.name.clone().into()))
            .column(Column::new("Used Space", |b: &Bucket| nice_bytes(b.size).into()).width(px(150.)))
            .rows(visible)
            .loading(self.state.loading)
            .entity_name("Buckets")
            .paginator(Paginator {
                page: self.state.page,
                rows_per_page: self.state.rows_per_page,
                options: ROWS_PER_PAGE_OPTIONS,
                shown,
                has_more: self.state.may_have_more(),
            })
            .on_page_change(on_page)
            .on_rows_per_page_change(on_rows_per_page)
            .on_view(on_view)
    }

    fn render_add_overlay(&self, cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .absolute()
            .inset_0()
            .bg(gpui::rgba(0x00000088))
            .flex()
            .items_center()
            .justify_center()
            .child(
                v_flex()
                    .w(px(480.))
                    .p_6()
                    .bg(cx.theme().background)
                    .border_1()
                    .border_color(cx.theme().border)
                    .rounded_lg()
                    .child(self.add_form.clone()),
            )
    }
}

impl Render for BucketBrowser {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let root = v_flex().size_full().relative().p_4().gap_3();

        #[cfg(feature = "keyboard-nav")]
        let root = root
            .key_context("BucketBrowser")
            .on_action(cx.listener(Self::on_refresh))
            .on_action(cx.listener(Self::on_new_bucket))
            .on_action(cx.listener(Self::on_prev_page))
            .on_action(cx.listener(Self::on_next_page));

        root.child(self.render_toolbar(cx))
            .when_some(self.state.error.clone(), |d, error| {
                d.child(self.render_error(&error, cx))
            })
            .child(self.render_table(cx))
            .when(self.state.add_open, |d| d.child(self.render_add_overlay(cx)))
    }
}
