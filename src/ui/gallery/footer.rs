// SPDX-License-Identifier: MPL-2.0
//! Everything below the grid: loader, load-more button, result counter,
//! plus the error banner shown above it.

use super::Message;
use crate::application::port::SearchError;
use crate::i18n::fluent::I18n;
use crate::search::SearchState;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use crate::ui::widgets::AnimatedSpinner;
use iced::widget::{button, rule, text, Column, Container, Row, Text};
use iced::{alignment, Element, Length};

pub fn view<'a>(
    search: &'a SearchState,
    spinner_rotation: f32,
    colors: &ColorScheme,
    i18n: &'a I18n,
) -> Element<'a, Message> {
    let mut footer = Column::new()
        .spacing(spacing::SM)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center);

    if search.is_pending() {
        footer = footer.push(AnimatedSpinner::new(colors.brand_primary, spinner_rotation).into_element());
    }

    if search.load_more_visible() {
        footer = footer.push(
            button(Text::new(i18n.tr("load-more-button")).size(typography::BODY))
                .padding([spacing::XS, spacing::LG])
                .on_press(Message::LoadMore)
                .style(styles::button::primary),
        );
    }

    if let Some(counter) = counter_text(search, i18n) {
        footer = footer.push(
            Text::new(counter)
                .size(typography::CAPTION)
                .color(colors.text_secondary),
        );
    }

    Container::new(footer)
        .width(Length::Fill)
        .padding(spacing::SM)
        .into()
}

/// "Showing N of TOTAL", only once results are displayed.
fn counter_text(search: &SearchState, i18n: &I18n) -> Option<String> {
    if search.results().is_empty() {
        return None;
    }
    let shown = search.results().len().to_string();
    let total = search.total().to_string();
    Some(i18n.tr_with_args(
        "gallery-counter",
        &[("shown", shown.as_str()), ("total", total.as_str())],
    ))
}

/// Banner describing the last failed fetch.
///
/// The localized explanation is always shown; the raw error text only after
/// the user asks for details.
pub fn error_banner<'a>(error: &SearchError, show_details: bool, i18n: &I18n) -> Element<'a, Message> {
    let mut body = Column::new()
        .spacing(spacing::XXS)
        .width(Length::Fill)
        .push(
            Text::new(i18n.tr("error-search-title"))
                .size(typography::BODY_LG)
                .style(text::danger),
        )
        .push(Text::new(i18n.tr(error.i18n_key())).size(typography::BODY));

    if show_details {
        body = body.push(rule::horizontal(1)).push(
            Text::new(error.to_string())
                .size(typography::CAPTION)
                .style(text::secondary),
        );
    }

    let toggle_key = if show_details {
        "error-details-hide"
    } else {
        "error-details-show"
    };
    let toggle = button(Text::new(i18n.tr(toggle_key)).size(typography::BODY_SM))
        .on_press(Message::ToggleErrorDetails)
        .style(button::text);

    let row = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(Text::new("!").size(typography::TITLE_MD).style(text::danger))
        .push(body)
        .push(toggle);

    Container::new(row)
        .width(Length::Fill)
        .padding(spacing::SM)
        .style(styles::container::error_banner)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::config::Config;
    use crate::domain::search::{ImageResult, SearchPage};
    use crate::search::{Effect, Event};

    fn i18n() -> I18n {
        I18n::new(Some("en-US".to_string()), &Config::default())
    }

    #[test]
    fn counter_hidden_without_results() {
        assert!(counter_text(&SearchState::new(), &i18n()).is_none());
    }

    #[test]
    fn counter_reports_shown_and_total() {
        let mut state = SearchState::new();
        let Effect::Fetch(request) = state.update(Event::SubmitQuery("cats".into())) else {
            panic!("expected a fetch");
        };
        let items = (0..12)
            .map(|id| ImageResult {
                id,
                thumbnail_url: String::new(),
                full_url: String::new(),
                alt: String::new(),
            })
            .collect();
        state.update(Event::FetchCompleted {
            request,
            outcome: Ok(SearchPage { total: 30, items }),
        });

        let text = counter_text(&state, &i18n()).expect("counter should be shown");
        assert!(text.contains("12"), "got {text}");
        assert!(text.contains("30"), "got {text}");
    }

    #[test]
    fn error_banner_builds_for_every_error() {
        let i18n = i18n();
        for error in [
            SearchError::MissingApiKey,
            SearchError::Transport("refused".into()),
            SearchError::Status(429),
            SearchError::Decode("eof".into()),
        ] {
            let _ = error_banner(&error, true, &i18n);
            assert!(!i18n.tr(error.i18n_key()).starts_with("MISSING"));
        }
    }
}
