//! Generic data table.
//!
//! Renders a column/row table with a loading state, an empty-state message,
//! optional per-row view action, and a paginator. Screens describe their
//! table with [`Column`] descriptors and callbacks; the table owns all the
//! rendering.

use std::rc::Rc;

use gpui::{prelude::FluentBuilder as _, *};
use gpui_component::{
    ActiveTheme as _, Disableable, Icon, IconName, Selectable as _, Sizable as _, StyledExt as _,
    button::{Button, ButtonVariants as _},
    h_flex,
    label::Label,
    list::ListItem,
    spinner::Spinner,
    v_flex,
};

/// Handler for page and page-size changes. Receives the new value.
pub type PageHandler = Rc<dyn Fn(usize, &mut Window, &mut App)>;

/// Handler for a per-row action.
pub type RowHandler<R> = Rc<dyn Fn(&R, &mut Window, &mut App)>;

/// A column descriptor: label, optional fixed width, and a formatter that
/// produces the cell text for a row.
pub struct Column<R> {
    label: SharedString,
    width: Option<Pixels>,
    format: fn(&R) -> SharedString,
}

impl<R> Column<R> {
    pub fn new(label: impl Into<SharedString>, format: fn(&R) -> SharedString) -> Self {
        Self {
            label: label.into(),
            width: None,
            format,
        }
    }

    /// Give the column a fixed width instead of an equal flex share.
    pub fn width(mut self, width: Pixels) -> Self {
        self.width = Some(width);
        self
    }
}

/// Paginator configuration.
pub struct Paginator {
    /// Zero-based page index.
    pub page: usize,
    /// Current page size.
    pub rows_per_page: usize,
    /// Page size choices.
    pub options: &'static [usize],
    /// Number of rows currently shown.
    pub shown: usize,
    /// Whether a further page may exist.
    pub has_more: bool,
}

/// Column/row table with pagination, loading and empty states.
#[derive(IntoElement)]
pub struct DataTable<R: Clone + 'static> {
    columns: Vec<Column<R>>,
    rows: Vec<R>,
    loading: bool,
    entity_name: SharedString,
    paginator: Option<Paginator>,
    on_page_change: Option<PageHandler>,
    on_rows_per_page_change: Option<PageHandler>,
    on_view: Option<RowHandler<R>>,
}

impl<R: Clone + 'static> DataTable<R> {
    pub fn new() -> Self {
        Self {
            columns: vec![],
            rows: vec![],
            loading: false,
            entity_name: "Records".into(),
            paginator: None,
            on_page_change: None,
            on_rows_per_page_change: None,
            on_view: None,
        }
    }

    pub fn column(mut self, column: Column<R>) -> Self {
        self.columns.push(column);
        self
    }

    pub fn rows(mut self, rows: Vec<R>) -> Self {
        self.rows = rows;
        self
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// Entity label used in the empty-state message.
    pub fn entity_name(mut self, name: impl Into<SharedString>) -> Self {
        self.entity_name = name.into();
        self
    }

    pub fn paginator(mut self, paginator: Paginator) -> Self {
        self.paginator = Some(paginator);
        self
    }

    pub fn on_page_change(mut self, handler: PageHandler) -> Self {
        self.on_page_change = Some(handler);
        self
    }

    pub fn on_rows_per_page_change(mut self, handler: PageHandler) -> Self {
        self.on_rows_per_page_change = Some(handler);
        self
    }

    /// Add a view action to every row.
    pub fn on_view(mut self, handler: RowHandler<R>) -> Self {
        self.on_view = Some(handler);
        self
    }

    fn cell(width: Option<Pixels>) -> Div {
        match width {
            Some(width) => div().w(width).flex_none().overflow_hidden(),
            None => div().flex_1().overflow_hidden(),
        }
    }

    fn render_header(&self, cx: &mut App) -> impl IntoElement {
        h_flex()
            .px_3()
            .py_2()
            .gap_2()
            .items_center()
            .border_b_1()
            .border_color(cx.theme().border)
            .children(self.columns.iter().map(|col| {
                Self::cell(col.width).child(
                    Label::new(col.label.clone())
                        .text_xs()
                        .font_semibold()
                        .text_color(cx.theme().muted_foreground),
                )
            }))
            .when(self.on_view.is_some(), |d| d.child(div().w(px(40.)).flex_none()))
    }

    fn render_row(&self, ix: usize, row: &R, cx: &mut App) -> impl IntoElement {
        let bg_color = if ix % 2 == 0 {
            cx.theme().list
        } else {
            cx.theme().list_even
        };

        let on_view = self.on_view.clone();
        let row_clone = row.clone();

        ListItem::new(ix)
            .w_full()
            .px_3()
            .py_2()
            .bg(bg_color)
            .rounded(cx.theme().radius)
            .child(
                h_flex()
                    .gap_2()
                    .items_center()
                    .children(self.columns.iter().map(|col| {
                        Self::cell(col.width).child(
                            Label::new((col.format)(row)).text_sm().whitespace_nowrap(),
                        )
                    }))
                    .when_some(on_view, |d, handler| {
                        d.child(
                            div().w(px(40.)).flex_none().child(
                                Button::new(("view", ix))
                                    .icon(Icon::empty().path("icons/eye.svg"))
                                    .ghost()
                                    .small()
                                    .tooltip("View")
                                    .on_click(move |_, window, cx| {
                                        handler(&row_clone, window, cx);
                                    }),
                            ),
                        )
                    }),
            )
    }

    fn render_body(&self, cx: &mut App) -> AnyElement {
        if self.loading {
            return div()
                .flex()
                .flex_1()
                .items_center()
                .justify_center()
                .py_8()
                .child(Spinner::new())
                .into_any_element();
        }

        if self.rows.is_empty() {
            return div()
                .flex()
                .flex_1()
                .flex_col()
                .items_center()
                .justify_center()
                .py_8()
                .gap_2()
                .child(
                    Icon::new(IconName::FolderOpen)
                        .size_8()
                        .text_color(cx.theme().muted_foreground),
                )
                .child(
                    Label::new(format!("No {} to display", self.entity_name))
                        .text_color(cx.theme().muted_foreground),
                )
                .into_any_element();
        }

        let mut body = v_flex().flex_1().overflow_hidden().p_2().gap_1();
        for (ix, row) in self.rows.iter().enumerate() {
            body = body.child(self.render_row(ix, row, cx));
        }
        body.into_any_element()
    }

    fn render_paginator(&self, paginator: &Paginator, cx: &mut App) -> impl IntoElement {
        let page = paginator.page;
        let start = if paginator.shown == 0 {
            0
        } else {
            page * paginator.rows_per_page + 1
        };
        let end = page * paginator.rows_per_page + paginator.shown;
        let range = if paginator.has_more {
            format!("{}-{} of many", start, end)
        } else {
            format!("{}-{}", start, end)
        };

        let on_page_change = self.on_page_change.clone();
        let on_rows_change = self.on_rows_per_page_change.clone();

        h_flex()
            .px_3()
            .py_2()
            .gap_2()
            .items_center()
            .justify_between()
            .border_t_1()
            .border_color(cx.theme().border)
            .child(
                h_flex()
                    .gap_1()
                    .items_center()
                    .child(
                        Label::new("Rows per page:")
                            .text_xs()
                            .text_color(cx.theme().muted_foreground),
                    )
                    .children(paginator.options.iter().map(|&option| {
                        let handler = on_rows_change.clone();
                        Button::new(("rows-per-page", option))
                            .ghost()
                            .small()
                            .child(option.to_string())
                            .selected(option == paginator.rows_per_page)
                            .when_some(handler, |b, handler| {
                                b.on_click(move |_, window, cx| handler(option, window, cx))
                            })
                    })),
            )
            .child(
                h_flex()
                    .gap_2()
                    .items_center()
                    .child(
                        Label::new(range)
                            .text_xs()
                            .text_color(cx.theme().muted_foreground),
                    )
                    .child(
                        Button::new("prev-page")
                            .icon(Icon::new(IconName::ChevronLeft))
                            .ghost()
                            .small()
                            .tooltip("Previous page")
                            .disabled(page == 0)
                            .when_some(on_page_change.clone(), |b, handler| {
                                b.on_click(move |_, window, cx| {
                                    handler(page.saturating_sub(1), window, cx)
                                })
                            }),
                    )
                    .child(
                        Button::new("next-page")
                            .icon(Icon::new(IconName::ChevronRight))
                            .ghost()
                            .small()
                            .tooltip("Next page")
                            .disabled(!paginator.has_more)
                            .when_some(on_page_change, |b, handler| {
                                b.on_click(move |_, window, cx| handler(page + 1, window, cx))
                            }),
                    ),
            )
    }
}

impl<R: Clone + 'static> RenderOnce for DataTable<R> {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        v_flex()
            .flex_1()
            .overflow_hidden()
            .border_1()
            .border_color(cx.theme().border)
            .rounded(cx.theme().radius)
            .child(self.render_header(cx))
            .child(self.render_body(cx))
            .when_some(self.paginator.as_ref(), |d, paginator| {
                d.child(self.render_paginator(paginator, cx))
            })
    }
}
