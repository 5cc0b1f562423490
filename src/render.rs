//! Result rendering as a pure view model
//!
//! `build_results_view` turns (response, filters) into a widget-free tree;
//! the Iced layer only projects it. One renderer serves every surface, with
//! cosmetic variance expressed through `RenderOptions` flags instead of
//! per-page reimplementations.
//!
//! The empty-state asymmetry is deliberate: an empty category list hides the
//! whole section, while an empty product list shows an explicit placeholder.

use crate::api::types::{ApiResponse, Category, Gearbox};
use crate::filters::FilterState;

/// Placeholder for any missing product field
pub const NOT_AVAILABLE: &str = "N/A";

/// Placeholder for a category record without a description
pub const NO_DESCRIPTION: &str = "No description available";

/// Shown in place of product rows when the product list is empty
pub const NO_PRODUCTS_PLACEHOLDER: &str = "No gearboxes found";

/// Appended to the summary when the whole result set is empty
pub const NO_RESULTS_NOTICE: &str = "No results - try adjusting your filters";

/// Cosmetic rendering flags (the per-page formatting differences of old)
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    /// Include record ids on category and product rows
    pub show_record_ids: bool,
    /// Include category creation timestamps
    pub show_timestamps: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            show_record_ids: true,
            show_timestamps: true,
        }
    }
}

/// The three logical result sections, display-ready
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultsView {
    pub message: String,
    pub summary: SummaryView,
    /// `None` means the section is hidden, not merely empty
    pub categories: Option<Vec<CategoryView>>,
    pub products: ProductsSection,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryView {
    pub total_items: u64,
    pub category_count: u64,
    pub product_count: u64,
    /// "key: value" pairs joined by commas, when any filters are in play
    pub filters_line: Option<String>,
    /// Present only when both categories and products came back empty
    pub no_results_notice: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryView {
    pub name: String,
    pub description: String,
    pub id: Option<String>,
    pub created_at: Option<String>,
}

/// Products never hide; an empty list renders its placeholder
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductsSection {
    Empty { placeholder: &'static str },
    Rows(Vec<ProductView>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductView {
    pub model: String,
    pub manufacturer: String,
    pub gearbox_type: String,
    pub torque: String,
    pub performance: String,
    pub application: String,
    pub price_range: String,
    pub id: Option<String>,
}

/// Build the display tree for a normalized response and the filter set that
/// produced it.
pub fn build_results_view(
    response: &ApiResponse,
    filters: &FilterState,
    options: &RenderOptions,
) -> ResultsView {
    let no_results = response.categories.is_empty() && response.gearboxes.is_empty();

    let summary = SummaryView {
        total_items: response.summary.total_items,
        category_count: response.summary.categories,
        product_count: response.summary.gearbox_products,
        filters_line: filters_line(response, filters),
        no_results_notice: no_results.then_some(NO_RESULTS_NOTICE),
    };

    let categories = if response.categories.is_empty() {
        None
    } else {
        Some(
            response
                .categories
                .iter()
                .map(|category| category_view(category, options))
                .collect(),
        )
    };

    let products = if response.gearboxes.is_empty() {
        ProductsSection::Empty {
            placeholder: NO_PRODUCTS_PLACEHOLDER,
        }
    } else {
        ProductsSection::Rows(
            response
                .gearboxes
                .iter()
                .map(|gearbox| product_view(gearbox, options))
                .collect(),
        )
    };

    ResultsView {
        message: response.message.clone(),
        summary,
        categories,
        products,
    }
}

/// Prefer the server's echo of applied filters; fall back to the client-side
/// filter set when the server echoes nothing.
fn filters_line(response: &ApiResponse, filters: &FilterState) -> Option<String> {
    if let Some(echo) = &response.filters_applied {
        let line = echo
            .iter()
            .map(|(key, value)| {
                let shown = match value {
                    serde_json::Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                format!("{}: {}", key, shown)
            })
            .collect::<Vec<_>>()
            .join(", ");
        if !line.is_empty() {
            return Some(line);
        }
    }

    if filters.is_empty() {
        None
    } else {
        Some(filters.describe())
    }
}

fn category_view(category: &Category, options: &RenderOptions) -> CategoryView {
    CategoryView {
        name: fill(&category.category_name),
        description: category
            .description
            .clone()
            .unwrap_or_else(|| NO_DESCRIPTION.to_string()),
        id: options
            .show_record_ids
            .then(|| category.id.clone())
            .flatten(),
        created_at: options
            .show_timestamps
            .then(|| category.created_at.clone())
            .flatten(),
    }
}

fn product_view(gearbox: &Gearbox, options: &RenderOptions) -> ProductView {
    ProductView {
        model: fill(&gearbox.model_name),
        manufacturer: fill(&gearbox.manufacturer),
        gearbox_type: fill(&gearbox.gearbox_type),
        torque: fill(&gearbox.torque_rating),
        performance: fill(&gearbox.performance_rating),
        application: fill(&gearbox.application_type),
        price_range: fill(&gearbox.price_range),
        id: options.show_record_ids.then(|| fill(&gearbox.gearbox_id)),
    }
}

fn fill(value: &Option<String>) -> String {
    value.clone().unwrap_or_else(|| NOT_AVAILABLE.to_string())
}
