//! UserAccessTable Component
//!
//! Sortable, multi-select table of users with module access and data access
//! columns. The table keeps no state of its own: rows, selection and sort come
//! from the host on every render, and every interaction is reported back as
//! the complete new value.

use std::rc::Rc;

use gpui::{
    div, prelude::*, px, AnyElement, App, ClickEvent, FontWeight, InteractiveElement,
    IntoElement, ParentElement, RenderOnce, Rgba, SharedString, StatefulInteractiveElement, Styled,
    Window,
};
use gpui_component::Icon;

use crate::assets::IconName;
use crate::components::primitives::{Badge, Button, ButtonSize, Checkbox};
use crate::constants::{
    CHECKBOX_COLUMN_WIDTH, DATA_COLUMN_WIDTH, DEFAULT_CAPABILITY_COLUMNS, ICON_COLUMN_WIDTH,
    NAME_COLUMN_WIDTH, TABLE_HEADER_HEIGHT, TABLE_ROW_HEIGHT,
};
use crate::domain::{
    AccessCell, CapabilityCatalog, CapabilityColumn, RowTarget, Selection, SortConfig, SortKey,
    TableDisplay, UserRecord, UserTableView, ViewRow,
};
use crate::i18n::{t, Locale};
use crate::theme::colors::ArkemColors;
use crate::theme::typography::Typography;

const USER_ID_COLUMN_WIDTH: f32 = 120.0;
const ROLE_COLUMN_WIDTH: f32 = 90.0;
const ACTIONS_COLUMN_WIDTH: f32 = 64.0;

type SelectionHandler = Rc<dyn Fn(Selection, &mut Window, &mut App) + 'static>;
type SortHandler = Rc<dyn Fn(SortConfig, &mut Window, &mut App) + 'static>;
type EditHandler = Rc<dyn Fn(UserRecord, &mut Window, &mut App) + 'static>;

/// Translation keys of the data access columns, in display order
const DATA_COLUMNS: [&str; 5] = [
    "col-record-limit",
    "col-time-window",
    "col-mask-shodan",
    "col-hash-identifiers",
    "col-ai-assistant",
];

/// User access table
#[derive(IntoElement)]
pub struct UserAccessTable {
    users: Vec<UserRecord>,
    catalog: CapabilityCatalog,
    selection: Selection,
    sort: SortConfig,
    is_loading: bool,
    error: Option<SharedString>,
    capability_columns: usize,
    locale: Locale,
    on_selection_change: Option<SelectionHandler>,
    on_sort_change: Option<SortHandler>,
    on_edit: Option<EditHandler>,
}

impl UserAccessTable {
    pub fn new(users: Vec<UserRecord>, catalog: CapabilityCatalog) -> Self {
        Self {
            users,
            catalog,
            selection: Selection::new(),
            sort: SortConfig::default(),
            is_loading: false,
            error: None,
            capability_columns: DEFAULT_CAPABILITY_COLUMNS,
            locale: Locale::default(),
            on_selection_change: None,
            on_sort_change: None,
            on_edit: None,
        }
    }

    pub fn selection(mut self, selection: Selection) -> Self {
        self.selection = selection;
        self
    }

    pub fn sort(mut self, sort: SortConfig) -> Self {
        self.sort = sort;
        self
    }

    pub fn loading(mut self, is_loading: bool) -> Self {
        self.is_loading = is_loading;
        self
    }

    /// Host error message; any non-empty value switches the body to the error state
    pub fn error(mut self, error: Option<impl Into<SharedString>>) -> Self {
        self.error = error.map(Into::into);
        self
    }

    /// Number of module columns; the catalog is padded or truncated to fit
    pub fn capability_columns(mut self, count: usize) -> Self {
        self.capability_columns = count;
        self
    }

    pub fn locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Called with the complete new selection
    pub fn on_selection_change(
        mut self,
        handler: impl Fn(Selection, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_selection_change = Some(Rc::new(handler));
        self
    }

    /// Called with the new sort key and direction
    pub fn on_sort_change(mut self, handler: impl Fn(SortConfig, &mut Window, &mut App) + 'static) -> Self {
        self.on_sort_change = Some(Rc::new(handler));
        self
    }

    /// Called when a row's edit button is clicked
    pub fn on_edit(mut self, handler: impl Fn(UserRecord, &mut Window, &mut App) + 'static) -> Self {
        self.on_edit = Some(Rc::new(handler));
        self
    }

    // ==================== Header ====================

    fn render_group_header(&self) -> impl IntoElement {
        let module_width = ICON_COLUMN_WIDTH * self.capability_columns as f32;
        let data_width = DATA_COLUMN_WIDTH * DATA_COLUMNS.len() as f32;
        let users_width =
            CHECKBOX_COLUMN_WIDTH + NAME_COLUMN_WIDTH + USER_ID_COLUMN_WIDTH + ROLE_COLUMN_WIDTH;

        let group = |key: &str, width: f32| {
            div()
                .w(px(width))
                .flex_shrink_0()
                .px_3()
                .text_size(px(Typography::TEXT_2XS))
                .font_weight(FontWeight::SEMIBOLD)
                .text_color(ArkemColors::text_muted())
                .child(t(self.locale, key))
        };

        div()
            .h(px(TABLE_HEADER_HEIGHT - 8.0))
            .flex()
            .items_center()
            .bg(ArkemColors::table_header_bg())
            .child(group("group-users", users_width))
            .child(group("group-module-access", module_width))
            .child(group("group-data-access", data_width))
            .child(group("col-actions", ACTIONS_COLUMN_WIDTH))
    }

    fn render_sort_header(&self, key: SortKey, width: f32) -> impl IntoElement {
        let direction = self.sort.direction_for(key);
        let next = self.sort.change(key);

        let indicator: AnyElement = match direction {
            Some(dir) => div()
                .text_size(px(Typography::TEXT_2XS))
                .text_color(ArkemColors::accent())
                .child(if dir.is_ascending() { "▲" } else { "▼" })
                .into_any_element(),
            None => Icon::from(IconName::ArrowUpDown)
                .size_3()
                .text_color(ArkemColors::text_muted())
                .into_any_element(),
        };

        let mut header = div()
            .id(SharedString::from(format!("sort-{}", key.title_key())))
            .w(px(width))
            .flex_shrink_0()
            .px_3()
            .flex()
            .items_center()
            .gap_1()
            .text_size(px(Typography::TEXT_XS))
            .font_weight(FontWeight::MEDIUM)
            .text_color(if direction.is_some() {
                ArkemColors::text_primary()
            } else {
                ArkemColors::text_secondary()
            })
            .child(t(self.locale, key.title_key()))
            .child(indicator);

        if let Some(handler) = self.on_sort_change.clone() {
            header = header
                .cursor_pointer()
                .hover(|s| s.text_color(ArkemColors::text_primary()))
                .on_click(move |_event: &ClickEvent, window, cx| handler(next, window, cx));
        }

        header
    }

    fn render_column_header(&self, view: &UserTableView<'_>) -> impl IntoElement {
        let visible_ids: Vec<String> = view.visible_ids().map(str::to_string).collect();
        let selection = self.selection.clone();

        let mut select_all = Checkbox::new("select-all").state(view.header_state());
        if let Some(handler) = self.on_selection_change.clone() {
            select_all = select_all.on_change(move |_checked, window, cx| {
                handler(
                    selection.toggled_all(visible_ids.iter().map(String::as_str)),
                    window,
                    cx,
                )
            });
        }

        let columns = self.catalog.columns(self.capability_columns);

        div()
            .h(px(TABLE_HEADER_HEIGHT))
            .flex()
            .items_center()
            .bg(ArkemColors::table_header_bg())
            .border_b_1()
            .border_color(ArkemColors::border())
            .child(
                div()
                    .w(px(CHECKBOX_COLUMN_WIDTH))
                    .flex_shrink_0()
                    .flex()
                    .justify_center()
                    .child(select_all),
            )
            .child(self.render_sort_header(SortKey::Name, NAME_COLUMN_WIDTH))
            .child(self.render_sort_header(SortKey::UserId, USER_ID_COLUMN_WIDTH))
            .child(self.render_sort_header(SortKey::Role, ROLE_COLUMN_WIDTH))
            .children(columns.into_iter().map(|column| {
                let cell = div()
                    .w(px(ICON_COLUMN_WIDTH))
                    .flex_shrink_0()
                    .flex()
                    .justify_center();
                match column {
                    CapabilityColumn::Configured(capability) => cell.child(
                        Icon::from(capability.icon)
                            .size_4()
                            .text_color(ArkemColors::text_secondary()),
                    ),
                    CapabilityColumn::Unconfigured => cell.child(
                        div()
                            .text_color(ArkemColors::text_muted())
                            .text_size(px(Typography::TEXT_XS))
                            .child("·"),
                    ),
                }
            }))
            .children(DATA_COLUMNS.iter().map(|key| {
                div()
                    .w(px(DATA_COLUMN_WIDTH))
                    .flex_shrink_0()
                    .px_3()
                    .text_size(px(Typography::TEXT_XS))
                    .text_color(ArkemColors::text_secondary())
                    .child(t(self.locale, key))
            }))
            .child(div().w(px(ACTIONS_COLUMN_WIDTH)).flex_shrink_0())
    }

    // ==================== Body ====================

    fn render_access_cell(cell: AccessCell) -> impl IntoElement {
        let (icon, color) = match cell {
            AccessCell::Allowed => (Some(IconName::Check), ArkemColors::success()),
            AccessCell::Denied => (Some(IconName::Minus), ArkemColors::text_muted()),
            AccessCell::NotConfigured => (None, ArkemColors::text_muted()),
        };

        div()
            .w(px(ICON_COLUMN_WIDTH))
            .flex_shrink_0()
            .flex()
            .justify_center()
            .when_some(icon, |el, icon| el.child(Icon::from(icon).size_4().text_color(color)))
    }

    fn data_cell(content: impl IntoElement) -> gpui::Div {
        div()
            .w(px(DATA_COLUMN_WIDTH))
            .flex_shrink_0()
            .px_3()
            .text_size(px(Typography::TEXT_SM))
            .text_color(ArkemColors::text_primary())
            .child(content)
    }

    fn flag_cell(on: bool) -> gpui::Div {
        let (icon, color): (IconName, Rgba) = if on {
            (IconName::Check, ArkemColors::success())
        } else {
            (IconName::Minus, ArkemColors::text_muted())
        };
        Self::data_cell(Icon::from(icon).size_4().text_color(color))
    }

    fn render_row(&self, row: ViewRow<'_>) -> impl IntoElement {
        let user = row.user;
        let id = user.id.clone();

        let bg = if row.selected {
            ArkemColors::table_row_selected()
        } else if row.index % 2 == 0 {
            ArkemColors::surface()
        } else {
            ArkemColors::table_row_alt()
        };

        let mut checkbox = Checkbox::new(SharedString::from(format!("select-{id}"))).checked(row.selected);
        let mut edit = Button::icon(SharedString::from(format!("edit-{id}")))
            .leading_icon(IconName::Pencil)
            .size(ButtonSize::Small);

        let mut element = div()
            .id(SharedString::from(format!("row-{id}")))
            .h(px(TABLE_ROW_HEIGHT))
            .flex()
            .items_center()
            .bg(bg)
            .hover(|s| s.bg(ArkemColors::table_row_hover()))
            .border_b_1()
            .border_color(ArkemColors::border());

        if let Some(handler) = self.on_selection_change.clone() {
            let next = self.selection.toggled(&id);
            checkbox = checkbox.on_change({
                let handler = handler.clone();
                move |_checked, window, cx| handler(next.clone(), window, cx)
            });
            if let Some(row_next) = row.clicked(RowTarget::Cell, &self.selection) {
                element = element
                    .cursor_pointer()
                    .on_click(move |_event: &ClickEvent, window, cx| {
                        handler(row_next.clone(), window, cx)
                    });
            }
        }

        if let Some(handler) = self.on_edit.clone() {
            let user = user.clone();
            edit = edit.on_click(move |_event, window, cx| handler(user.clone(), window, cx));
        }

        element
            .child(
                Self::control_cell(&id, RowTarget::Checkbox)
                    .w(px(CHECKBOX_COLUMN_WIDTH))
                    .child(checkbox),
            )
            // Name with initials avatar
            .child(
                div()
                    .w(px(NAME_COLUMN_WIDTH))
                    .flex_shrink_0()
                    .px_3()
                    .flex()
                    .items_center()
                    .gap_2()
                    .overflow_hidden()
                    .child(
                        div()
                            .size(px(24.0))
                            .flex_shrink_0()
                            .rounded_full()
                            .bg(ArkemColors::surface_raised())
                            .flex()
                            .items_center()
                            .justify_center()
                            .text_size(px(Typography::TEXT_2XS))
                            .font_weight(FontWeight::SEMIBOLD)
                            .text_color(ArkemColors::text_secondary())
                            .child(user.initials()),
                    )
                    .child(
                        div()
                            .text_size(px(Typography::TEXT_SM))
                            .text_color(ArkemColors::text_primary())
                            .child(user.name.clone()),
                    ),
            )
            .child(
                div()
                    .w(px(USER_ID_COLUMN_WIDTH))
                    .flex_shrink_0()
                    .px_3()
                    .text_size(px(Typography::TEXT_SM))
                    .text_color(ArkemColors::text_secondary())
                    .child(user.user_id.clone()),
            )
            .child(
                div()
                    .w(px(ROLE_COLUMN_WIDTH))
                    .flex_shrink_0()
                    .px_3()
                    .flex()
                    .child(Badge::role(user.role)),
            )
            .children(
                self.catalog
                    .access_cells(user, self.capability_columns)
                    .into_iter()
                    .map(Self::render_access_cell),
            )
            .child(Self::data_cell(user.record_limit.to_string()))
            .child(Self::data_cell(user.time_window_days.to_string()))
            .child(Self::flag_cell(user.mask_shodan))
            .child(Self::flag_cell(user.hash_identifiers))
            .child(Self::flag_cell(user.ai_assistant))
            .child(
                Self::control_cell(&id, RowTarget::Action)
                    .w(px(ACTIONS_COLUMN_WIDTH))
                    .child(edit),
            )
    }

    /// Column hosting a control; clicks anywhere in it stay out of the row
    fn control_cell(id: &str, target: RowTarget) -> gpui::Stateful<gpui::Div> {
        div()
            .id(SharedString::from(format!("{target:?}-{id}")))
            .flex_shrink_0()
            .flex()
            .justify_center()
            .on_click(move |_event: &ClickEvent, _window, cx| {
                if !target.toggles_row() {
                    cx.stop_propagation();
                }
            })
    }

    fn render_placeholder(&self, display: TableDisplay<'_>) -> impl IntoElement {
        let (message, detail, color) = match display {
            TableDisplay::Loading => (t(self.locale, "table-loading"), None, ArkemColors::text_muted()),
            TableDisplay::Error(error) => (
                t(self.locale, "table-error"),
                Some(SharedString::from(error.to_string())),
                ArkemColors::danger(),
            ),
            _ => (t(self.locale, "table-empty"), None, ArkemColors::text_muted()),
        };

        div()
            .py_8()
            .flex()
            .flex_col()
            .items_center()
            .justify_center()
            .gap_1()
            .child(
                div()
                    .text_size(px(Typography::TEXT_SM))
                    .text_color(color)
                    .child(message),
            )
            .when_some(detail, |el, detail| {
                el.child(
                    div()
                        .text_size(px(Typography::TEXT_XS))
                        .text_color(ArkemColors::text_muted())
                        .child(detail),
                )
            })
    }

    fn render_batch_toolbar(&self, label: String) -> impl IntoElement {
        div()
            .h(px(TABLE_HEADER_HEIGHT))
            .px_4()
            .flex()
            .items_center()
            .bg(ArkemColors::accent_subtle())
            .border_b_1()
            .border_color(ArkemColors::border())
            .text_size(px(Typography::TEXT_SM))
            .text_color(ArkemColors::accent())
            .child(label)
    }
}

impl RenderOnce for UserAccessTable {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let view = UserTableView::derive(&self.users, &self.selection, self.sort);
        let display = TableDisplay::classify(
            self.is_loading,
            self.error.as_ref().map(|error| error.as_str()),
            view.rows.len(),
        );

        let mut table = div()
            .id("user-access-table")
            .w_full()
            .flex()
            .flex_col()
            .bg(ArkemColors::surface())
            .border_1()
            .border_color(ArkemColors::border())
            .rounded_md()
            .overflow_x_scroll();

        if let Some(label) = view.batch_label() {
            table = table.child(self.render_batch_toolbar(label));
        }

        table = table
            .child(self.render_group_header())
            .child(self.render_column_header(&view));

        match display {
            TableDisplay::Populated => {
                table = table.children(view.rows.iter().map(|row| self.render_row(*row)));
            }
            other => {
                table = table.child(self.render_placeholder(other));
            }
        }

        table
    }
}
