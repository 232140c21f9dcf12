//! Toast Component
//!
//! Notification card with a status header, a message and up to three
//! label/value rows.

use gpui::{
    div, prelude::*, px, App, ClickEvent, InteractiveElement, IntoElement, ParentElement,
    RenderOnce, SharedString, StatefulInteractiveElement, Styled, Window,
};
use gpui_component::Icon;

use crate::assets::IconName;
use crate::components::layout::{HeaderXs, StatusVariant};
use crate::components::primitives::Field;
use crate::constants::TOAST_MAX_DATA_ROWS;
use crate::theme::colors::ArkemColors;
use crate::theme::typography::Typography;

/// One label/value row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastData {
    pub label: SharedString,
    pub value: SharedString,
}

impl ToastData {
    pub fn new(label: impl Into<SharedString>, value: impl Into<SharedString>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Which sections a toast shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastLayout {
    pub title: bool,
    pub message: bool,
    pub data_rows: usize,
    /// The title separator closes the card
    pub separator_last: bool,
    /// Separator between message and data
    pub separator_between: bool,
}

#[derive(IntoElement)]
pub struct Toast {
    title: Option<SharedString>,
    message: Option<SharedString>,
    data: Vec<ToastData>,
    data_rows: Option<usize>,
    variant: StatusVariant,
    leading_icon: bool,
    on_close: Option<Box<dyn Fn(&mut Window, &mut App) + 'static>>,
}

impl Toast {
    pub fn new() -> Self {
        Self {
            title: None,
            message: None,
            data: Vec::new(),
            data_rows: None,
            variant: StatusVariant::default(),
            leading_icon: false,
            on_close: None,
        }
    }

    pub fn title(mut self, title: impl Into<SharedString>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn message(mut self, message: impl Into<SharedString>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn data(mut self, data: Vec<ToastData>) -> Self {
        self.data = data;
        self
    }

    /// Limit the number of data rows; capped at three and zero hides them
    pub fn data_rows(mut self, rows: usize) -> Self {
        self.data_rows = Some(rows);
        self
    }

    pub fn variant(mut self, variant: StatusVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn leading_icon(mut self, show: bool) -> Self {
        self.leading_icon = show;
        self
    }

    /// Show a close button that calls `handler`
    pub fn on_close(mut self, handler: impl Fn(&mut Window, &mut App) + 'static) -> Self {
        self.on_close = Some(Box::new(handler));
        self
    }

    /// Data rows actually shown. Without a limit every row is shown.
    pub fn visible_data(&self) -> &[ToastData] {
        let count = match self.data_rows {
            Some(rows) => rows.min(TOAST_MAX_DATA_ROWS).min(self.data.len()),
            None => self.data.len(),
        };
        &self.data[..count]
    }

    pub fn layout(&self) -> ToastLayout {
        let title = self.title.as_ref().is_some_and(|t| !t.is_empty());
        let message = self.message.as_ref().is_some_and(|m| !m.is_empty());
        let data_rows = self.visible_data().len();

        ToastLayout {
            title,
            message,
            data_rows,
            separator_last: title && !message && data_rows == 0,
            separator_between: message && data_rows > 0,
        }
    }
}

impl Default for Toast {
    fn default() -> Self {
        Self::new()
    }
}

fn separator() -> gpui::Div {
    div().h(px(1.0)).w_full().bg(ArkemColors::border())
}

impl RenderOnce for Toast {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let layout = self.layout();
        let data = self.visible_data().to_vec();

        div()
            .relative()
            .w(px(360.0))
            .flex()
            .flex_col()
            .gap_3()
            .p_4()
            .rounded_lg()
            .bg(ArkemColors::surface_raised())
            .border_1()
            .border_color(ArkemColors::border())
            .shadow_lg()
            .when_some(self.on_close, |el, handler| {
                el.child(
                    div()
                        .id("toast-close")
                        .absolute()
                        .top_2()
                        .right_2()
                        .size(px(24.0))
                        .rounded_sm()
                        .flex()
                        .items_center()
                        .justify_center()
                        .cursor_pointer()
                        .hover(|s| s.bg(ArkemColors::table_row_hover()))
                        .on_click(move |_event: &ClickEvent, window, cx| {
                            cx.stop_propagation();
                            handler(window, cx);
                        })
                        .child(Icon::from(IconName::Close).size_4().text_color(ArkemColors::text_muted())),
                )
            })
            .when_some(self.title.filter(|_| layout.title), |el, title| {
                el.child(
                    HeaderXs::new(title)
                        .variant(self.variant)
                        .leading_icon(self.leading_icon),
                )
                .child(separator().when(layout.separator_last, |s| s.bg(self.variant.color())))
            })
            .when_some(self.message.filter(|_| layout.message), |el, message| {
                el.child(
                    div()
                        .text_size(px(Typography::TEXT_SM))
                        .text_color(ArkemColors::text_secondary())
                        .child(message),
                )
            })
            .when(layout.separator_between, |el| el.child(separator()))
            .when(layout.data_rows > 0, |el| {
                el.child(
                    div()
                        .flex()
                        .flex_col()
                        .gap_2()
                        .children(data.into_iter().map(|row| Field::new(row.label, row.value))),
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(n: usize) -> Vec<ToastData> {
        (0..n).map(|i| ToastData::new(format!("L{i}"), format!("V{i}"))).collect()
    }

    #[test]
    fn data_rows_are_capped_at_three() {
        let toast = Toast::new().data(rows(5)).data_rows(10);
        assert_eq!(toast.visible_data().len(), 3);
    }

    #[test]
    fn zero_data_rows_hides_data() {
        let toast = Toast::new().message("m").data(rows(2)).data_rows(0);
        let layout = toast.layout();
        assert_eq!(layout.data_rows, 0);
        assert!(!layout.separator_between);
    }

    #[test]
    fn unlimited_shows_all_rows() {
        let toast = Toast::new().data(rows(5));
        assert_eq!(toast.visible_data().len(), 5);
    }

    #[test]
    fn title_only_puts_separator_last() {
        let layout = Toast::new().title("Saved").layout();
        assert!(layout.title);
        assert!(layout.separator_last);

        let layout = Toast::new().title("Saved").message("Done").layout();
        assert!(!layout.separator_last);
    }

    #[test]
    fn empty_strings_count_as_absent() {
        let layout = Toast::new().title("").message("").layout();
        assert!(!layout.title);
        assert!(!layout.message);
        assert!(!layout.separator_last);
    }

    #[test]
    fn separator_between_message_and_data() {
        let layout = Toast::new().title("t").message("m").data(rows(2)).layout();
        assert!(layout.separator_between);
        assert_eq!(layout.data_rows, 2);
    }
}
