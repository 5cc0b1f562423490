//! Core application state and Iced implementation
//!
//! Uses the Iced 0.13 API. State flows one way: filter edits mutate
//! `FilterState`, a user action turns it into query parameters and starts a
//! fetch, the completed fetch is normalized and projected through the pure
//! renderer in `crate::render`.

use std::path::PathBuf;

use iced::widget::{button, column, container, row, scrollable, text, text_input, Space};
use iced::{Background, Border, Color, Element, Length, Padding, Task, Theme};
use serde_json::Value;

use crate::api::client::{CatalogClient, FetchError};
use crate::api::types::ApiResponse;
use crate::config::{self, AppConfig};
use crate::export;
use crate::filters::{self, FilterState, PRESETS};
use crate::render::{
    build_results_view, CategoryView, ProductsSection, RenderOptions, ResultsView,
};

// ============================================================================
// Theme Colors
// ============================================================================

mod colors {
    use iced::Color;

    pub const BACKGROUND: Color = Color::from_rgb(0.09, 0.09, 0.11);
    pub const SURFACE: Color = Color::from_rgb(0.12, 0.12, 0.14);
    pub const BORDER: Color = Color::from_rgb(0.25, 0.25, 0.28);
    pub const PRIMARY: Color = Color::from_rgb(0.4, 0.55, 1.0);
    pub const TEXT: Color = Color::from_rgb(0.95, 0.95, 0.95);
    pub const TEXT_MUTED: Color = Color::from_rgb(0.55, 0.55, 0.6);
    pub const TEXT_PLACEHOLDER: Color = Color::from_rgb(0.4, 0.4, 0.45);
    pub const SUCCESS: Color = Color::from_rgb(0.45, 0.8, 0.5);
    pub const ERROR: Color = Color::from_rgb(0.9, 0.45, 0.45);
}

// ============================================================================
// Application State
// ============================================================================

/// Outcome line shown under the action buttons
#[derive(Debug, Clone)]
enum Status {
    Info(String),
    Error(String),
}

pub struct Gearscope {
    filters: FilterState,
    endpoint_input: String,
    api_key_input: String,
    config_path: PathBuf,
    render_options: RenderOptions,
    /// Raw payload as received, kept for export
    last_payload: Option<Value>,
    results: Option<ResultsView>,
    status: Option<Status>,
    loading: bool,
    /// Monotonic token; completions from an older fetch are discarded
    request_seq: u64,
}

#[derive(Debug, Clone)]
pub enum Message {
    CategoryChanged(String),
    TypeChanged(String),
    ManufacturerChanged(String),
    MinTorqueChanged(String),
    MinPerformanceChanged(String),
    PriceRangeChanged(String),
    EndpointChanged(String),
    ApiKeyChanged(String),
    SaveSettings,
    ApplyFilters,
    ShowAll,
    ClearFilters,
    ApplyPreset(&'static str),
    Export,
    FetchComplete {
        seq: u64,
        result: Result<Value, FetchError>,
    },
}

impl Default for Gearscope {
    fn default() -> Self {
        let config_path = config::config_path();
        let config = AppConfig::load(&config_path);
        Self {
            filters: FilterState::default(),
            endpoint_input: config.endpoint,
            api_key_input: config.api_key,
            config_path,
            render_options: RenderOptions::default(),
            last_payload: None,
            results: None,
            status: None,
            loading: false,
            request_seq: 0,
        }
    }
}

impl Gearscope {
    pub fn title(&self) -> String {
        String::from("Gearscope")
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::CategoryChanged(value) => {
                self.filters.category = value;
                Task::none()
            }
            Message::TypeChanged(value) => {
                self.filters.gearbox_type = value;
                Task::none()
            }
            Message::ManufacturerChanged(value) => {
                self.filters.manufacturer = value;
                Task::none()
            }
            Message::MinTorqueChanged(value) => {
                self.filters.min_torque = value;
                Task::none()
            }
            Message::MinPerformanceChanged(value) => {
                self.filters.min_performance = value;
                Task::none()
            }
            Message::PriceRangeChanged(value) => {
                self.filters.price_range = value;
                Task::none()
            }

            Message::EndpointChanged(value) => {
                self.endpoint_input = value;
                Task::none()
            }
            Message::ApiKeyChanged(value) => {
                self.api_key_input = value;
                Task::none()
            }
            Message::SaveSettings => {
                let config = AppConfig {
                    endpoint: self.endpoint_input.trim().to_string(),
                    api_key: self.api_key_input.trim().to_string(),
                };
                match config.save(&self.config_path) {
                    Ok(()) => self.status = Some(Status::Info("Settings saved".to_string())),
                    Err(e) => {
                        tracing::error!("could not save config: {}", e);
                        self.status =
                            Some(Status::Error(format!("Could not save settings: {}", e)));
                    }
                }
                Task::none()
            }

            Message::ApplyFilters => {
                tracing::info!("applying filters: {}", self.filters.describe());
                self.start_fetch(self.filters.query_pairs())
            }
            Message::ShowAll => {
                tracing::info!("fetching unfiltered catalog");
                self.start_fetch(Vec::new())
            }
            Message::ClearFilters => {
                // Clearing filters also discards the current result set.
                self.filters = FilterState::default();
                self.last_payload = None;
                self.results = None;
                self.status = None;
                Task::none()
            }
            Message::ApplyPreset(id) => {
                tracing::info!("applying preset: {}", id);
                self.filters = filters::apply_preset(id);
                self.start_fetch(self.filters.query_pairs())
            }

            Message::Export => {
                let today = chrono::Local::now().date_naive();
                let export = export::export_payload(self.last_payload.as_ref(), today).and_then(
                    |(filename, body)| {
                        export::write_download(&export::download_dir(), &filename, &body)
                    },
                );
                self.status = Some(match export {
                    Ok(path) => Status::Info(format!("Exported to {}", path.display())),
                    Err(e) => Status::Error(e.to_string()),
                });
                Task::none()
            }

            Message::FetchComplete { seq, result } => {
                if seq != self.request_seq {
                    tracing::debug!("dropping stale fetch completion (seq {})", seq);
                    return Task::none();
                }
                self.loading = false;
                match result {
                    Ok(payload) => {
                        let normalized = ApiResponse::normalize(&payload);
                        self.results = Some(build_results_view(
                            &normalized,
                            &self.filters,
                            &self.render_options,
                        ));
                        self.last_payload = Some(payload);
                        self.status = None;
                    }
                    Err(e) => {
                        // Prior results stay on screen.
                        tracing::warn!("fetch failed: {}", e);
                        self.status = Some(Status::Error(e.to_string()));
                    }
                }
                Task::none()
            }
        }
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    // ========================================================================
    // Fetch orchestration
    // ========================================================================

    fn start_fetch(&mut self, pairs: Vec<(&'static str, String)>) -> Task<Message> {
        let client = match CatalogClient::new(&self.endpoint_input, Some(&self.api_key_input)) {
            Ok(client) => client,
            Err(e) => {
                self.status = Some(Status::Error(e.to_string()));
                return Task::none();
            }
        };

        self.request_seq += 1;
        let seq = self.request_seq;
        self.loading = true;
        self.status = None;

        Task::perform(async move { client.fetch(&pairs).await }, move |result| {
            Message::FetchComplete { seq, result }
        })
    }

    // ========================================================================
    // Views
    // ========================================================================

    pub fn view(&self) -> Element<'_, Message> {
        let content = column![
            self.view_settings(),
            Space::with_height(12),
            self.view_filter_form(),
            Space::with_height(12),
            self.view_actions(),
            self.view_status(),
            Space::with_height(12),
            self.view_results(),
        ]
        .spacing(0);

        container(
            container(content)
                .padding(16)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .style(|_theme| container::Style {
            background: Some(Background::Color(colors::BACKGROUND)),
            ..Default::default()
        })
        .into()
    }

    fn view_settings(&self) -> Element<'_, Message> {
        surface(
            row![
                field_input(
                    "API endpoint URL",
                    &self.endpoint_input,
                    Message::EndpointChanged
                ),
                field_input(
                    "API key (optional)",
                    &self.api_key_input,
                    Message::ApiKeyChanged
                ),
                action_button("Save", Message::SaveSettings),
            ]
            .spacing(8)
            .align_y(iced::Alignment::Center)
            .into(),
        )
    }

    fn view_filter_form(&self) -> Element<'_, Message> {
        let top = row![
            field_input(
                "Category (e.g. automotive)",
                &self.filters.category,
                Message::CategoryChanged
            ),
            field_input(
                "Type (e.g. planetary)",
                &self.filters.gearbox_type,
                Message::TypeChanged
            ),
            field_input(
                "Manufacturer",
                &self.filters.manufacturer,
                Message::ManufacturerChanged
            ),
        ]
        .spacing(8);

        let bottom = row![
            field_input(
                "Min torque (Nm)",
                &self.filters.min_torque,
                Message::MinTorqueChanged
            ),
            field_input(
                "Min performance (%)",
                &self.filters.min_performance,
                Message::MinPerformanceChanged
            ),
            field_input(
                "Price range (low/medium/high)",
                &self.filters.price_range,
                Message::PriceRangeChanged
            ),
        ]
        .spacing(8);

        let presets = row(PRESETS
            .iter()
            .map(|preset| preset_button(preset.label, Message::ApplyPreset(preset.id)))
            .collect::<Vec<_>>())
        .spacing(8);

        surface(
            column![
                text("Filters").size(14).color(colors::TEXT_MUTED),
                Space::with_height(8),
                top,
                Space::with_height(8),
                bottom,
                Space::with_height(8),
                text("Presets").size(14).color(colors::TEXT_MUTED),
                Space::with_height(8),
                presets,
            ]
            .spacing(0)
            .into(),
        )
    }

    fn view_actions(&self) -> Element<'_, Message> {
        row![
            action_button("Apply Filters", Message::ApplyFilters),
            action_button("Show All", Message::ShowAll),
            action_button("Clear", Message::ClearFilters),
            action_button("Export JSON", Message::Export),
            Space::with_width(Length::Fill),
            text(if self.loading { "Fetching..." } else { "" })
                .size(13)
                .color(colors::TEXT_MUTED),
        ]
        .spacing(8)
        .align_y(iced::Alignment::Center)
        .into()
    }

    fn view_status(&self) -> Element<'_, Message> {
        match &self.status {
            Some(Status::Info(line)) => column![
                Space::with_height(8),
                text(line).size(13).color(colors::SUCCESS)
            ]
            .into(),
            Some(Status::Error(line)) => column![
                Space::with_height(8),
                text(line).size(13).color(colors::ERROR)
            ]
            .into(),
            None => Space::with_height(0).into(),
        }
    }

    fn view_results(&self) -> Element<'_, Message> {
        let Some(view) = &self.results else {
            return container(
                text("Configure the endpoint, then apply filters or show all.")
                    .size(14)
                    .color(colors::TEXT_MUTED),
            )
            .width(Length::Fill)
            .center_x(Length::Fill)
            .into();
        };

        let mut sections: Vec<Element<'_, Message>> = Vec::new();
        sections.push(self.view_summary(view));

        // Hidden entirely when the response carried no categories.
        if let Some(categories) = &view.categories {
            sections.push(section_heading("Categories"));
            for category in categories {
                sections.push(category_row(category));
            }
        }

        sections.push(section_heading("Gearboxes"));
        match &view.products {
            ProductsSection::Empty { placeholder } => {
                sections.push(text(*placeholder).size(14).color(colors::TEXT_MUTED).into());
            }
            ProductsSection::Rows(rows) => {
                for product in rows {
                    let detail = format!(
                        "{} | {} | torque: {} | performance: {} | {} | price: {}",
                        product.manufacturer,
                        product.gearbox_type,
                        product.torque,
                        product.performance,
                        product.application,
                        product.price_range,
                    );
                    let mut lines = column![
                        text(product.model.clone()).size(15).color(colors::TEXT),
                        text(detail).size(12).color(colors::TEXT_MUTED),
                    ]
                    .spacing(2);
                    if let Some(id) = &product.id {
                        lines =
                            lines.push(text(id.clone()).size(11).color(colors::TEXT_PLACEHOLDER));
                    }
                    sections.push(
                        container(lines)
                            .padding(Padding::from([8.0, 12.0]))
                            .width(Length::Fill)
                            .into(),
                    );
                }
            }
        }

        scrollable(column(sections).spacing(6))
            .height(Length::Fill)
            .into()
    }

    fn view_summary(&self, view: &ResultsView) -> Element<'_, Message> {
        let counts = format!(
            "{} items | {} categories | {} gearboxes",
            view.summary.total_items, view.summary.category_count, view.summary.product_count,
        );

        let mut lines = column![
            text(view.message.clone()).size(17).color(colors::TEXT),
            text(counts).size(13).color(colors::TEXT_MUTED),
        ]
        .spacing(4);

        if let Some(filters_line) = &view.summary.filters_line {
            lines = lines.push(
                text(format!("Filtered by {}", filters_line))
                    .size(13)
                    .color(colors::PRIMARY),
            );
        }
        if let Some(notice) = view.summary.no_results_notice {
            lines = lines.push(text(notice).size(13).color(colors::ERROR));
        }

        surface(lines.into())
    }
}

// ============================================================================
// Widget helpers
// ============================================================================

fn surface(content: Element<'_, Message>) -> Element<'_, Message> {
    container(content)
        .padding(Padding::from([12.0, 16.0]))
        .width(Length::Fill)
        .style(|_theme| container::Style {
            background: Some(Background::Color(colors::SURFACE)),
            border: Border {
                color: colors::BORDER,
                width: 1.0,
                radius: 12.0.into(),
            },
            ..Default::default()
        })
        .into()
}

fn section_heading(label: &'static str) -> Element<'static, Message> {
    column![
        Space::with_height(8),
        text(label).size(14).color(colors::TEXT_MUTED),
    ]
    .into()
}

fn category_row(category: &CategoryView) -> Element<'_, Message> {
    let mut meta = Vec::new();
    if let Some(id) = &category.id {
        meta.push(id.clone());
    }
    if let Some(created_at) = &category.created_at {
        meta.push(format!("created {}", created_at));
    }

    let mut lines = column![
        text(category.name.clone()).size(15).color(colors::TEXT),
        text(category.description.clone())
            .size(12)
            .color(colors::TEXT_MUTED),
    ]
    .spacing(2);
    if !meta.is_empty() {
        lines = lines.push(
            text(meta.join(" | "))
                .size(11)
                .color(colors::TEXT_PLACEHOLDER),
        );
    }

    container(lines)
        .padding(Padding::from([8.0, 12.0]))
        .width(Length::Fill)
        .into()
}

fn field_input<'a>(
    placeholder: &'a str,
    value: &'a str,
    on_input: impl Fn(String) -> Message + 'a,
) -> Element<'a, Message> {
    text_input(placeholder, value)
        .on_input(on_input)
        .padding(Padding::new(10.0))
        .size(14)
        .style(|_theme, _status| text_input::Style {
            background: Background::Color(colors::BACKGROUND),
            border: Border {
                color: colors::BORDER,
                width: 1.0,
                radius: 8.0.into(),
            },
            icon: colors::TEXT_MUTED,
            placeholder: colors::TEXT_PLACEHOLDER,
            value: colors::TEXT,
            selection: colors::PRIMARY,
        })
        .into()
}

fn action_button(label: &'static str, message: Message) -> Element<'static, Message> {
    button(text(label).size(13).color(colors::TEXT))
        .on_press(message)
        .padding(Padding::from([8.0, 14.0]))
        .style(|_theme, _status| button::Style {
            background: Some(Background::Color(colors::PRIMARY)),
            text_color: colors::TEXT,
            border: Border::default().rounded(8),
            ..Default::default()
        })
        .into()
}

fn preset_button(label: &'static str, message: Message) -> Element<'static, Message> {
    button(text(label).size(12).color(colors::TEXT))
        .on_press(message)
        .padding(Padding::from([6.0, 10.0]))
        .style(|_theme, _status| button::Style {
            background: Some(Background::Color(Color::TRANSPARENT)),
            text_color: colors::TEXT,
            border: Border {
                color: colors::BORDER,
                width: 1.0,
                radius: 8.0.into(),
            },
            ..Default::default()
        })
        .into()
}
