//! Declarative configuration for a list view: columns, filters, orderings,
//! detail fields and the hooks a page may plug in.

use contracts::bot_analytics::Record;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use super::render::CellContent;

/// Full custom cell for one column.
pub type CellRenderer = Arc<dyn Fn(&Record) -> CellContent + Send + Sync>;
/// Page-level renderer keyed by column key; also receives the column.
pub type CustomCellRenderer = Arc<dyn Fn(&Record, &ColumnDescriptor) -> CellContent + Send + Sync>;
/// Custom value extraction; the result still goes through default formatting.
pub type ValueAccessor = Arc<dyn Fn(&Record) -> Value + Send + Sync>;
/// Replaces the default row click entirely.
pub type RowClickHandler = Arc<dyn Fn(&Record) + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColumnType {
    #[default]
    Plain,
    Date,
}

/// Where a column's cell comes from.
#[derive(Clone, Default)]
pub enum CellSource {
    #[default]
    Default,
    Render(CellRenderer),
    Accessor(ValueAccessor),
}

impl fmt::Debug for CellSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellSource::Default => f.write_str("Default"),
            CellSource::Render(_) => f.write_str("Render(..)"),
            CellSource::Accessor(_) => f.write_str("Accessor(..)"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ColumnDescriptor {
    pub key: String,
    pub label: String,
    pub column_type: ColumnType,
    pub source: CellSource,
    pub cell_class: Option<String>,
}

impl ColumnDescriptor {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            column_type: ColumnType::Plain,
            source: CellSource::Default,
            cell_class: None,
        }
    }

    pub fn date(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            column_type: ColumnType::Date,
            ..Self::new(key, label)
        }
    }

    pub fn render(mut self, f: impl Fn(&Record) -> CellContent + Send + Sync + 'static) -> Self {
        self.source = CellSource::Render(Arc::new(f));
        self
    }

    pub fn accessor(mut self, f: impl Fn(&Record) -> Value + Send + Sync + 'static) -> Self {
        self.source = CellSource::Accessor(Arc::new(f));
        self
    }

    pub fn cell_class(mut self, class: impl Into<String>) -> Self {
        self.cell_class = Some(class.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Builds a `SelectOption` list from `(value, label)` pairs.
pub fn options(pairs: &[(&str, &str)]) -> Vec<SelectOption> {
    pairs
        .iter()
        .map(|(value, label)| SelectOption::new(*value, *label))
        .collect()
}

/// One discrete-choice query parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterDescriptor {
    pub key: String,
    pub label: String,
    pub default_value: String,
    pub options: Vec<SelectOption>,
}

impl FilterDescriptor {
    pub fn new(key: impl Into<String>, label: impl Into<String>, options: Vec<SelectOption>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            default_value: String::new(),
            options,
        }
    }

    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default_value = value.into();
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetailFieldType {
    #[default]
    Text,
    Date,
    Json,
    Array,
    Boolean,
}

/// How one record field shows up in the detail drawer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailField {
    pub value: String,
    pub label: String,
    pub field_type: DetailFieldType,
}

impl DetailField {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            field_type: DetailFieldType::Text,
        }
    }

    pub fn typed(value: impl Into<String>, label: impl Into<String>, field_type: DetailFieldType) -> Self {
        Self {
            field_type,
            ..Self::new(value, label)
        }
    }
}

/// Everything a list view needs, supplied once by the page.
#[derive(Clone)]
pub struct ListConfig {
    pub base_url: String,
    pub columns: Vec<ColumnDescriptor>,
    pub ordering_options: Vec<SelectOption>,
    pub filters: Vec<FilterDescriptor>,
    pub default_ordering: String,
    pub additional_params: Vec<(String, String)>,
    pub custom_cell_renderers: HashMap<String, CustomCellRenderer>,
    pub detail_fields: Option<Vec<DetailField>>,
    pub use_detail_view: bool,
    pub custom_row_click: Option<RowClickHandler>,
    pub title: String,
    pub description: String,
    pub search_placeholder: String,
    pub empty_message: String,
    pub loading_message: String,
    pub hide_search: bool,
    pub hide_pagination: bool,
    pub hide_header: bool,
    pub compact: bool,
}

impl ListConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            columns: Vec::new(),
            ordering_options: Vec::new(),
            filters: Vec::new(),
            default_ordering: "-created_at".to_string(),
            additional_params: Vec::new(),
            custom_cell_renderers: HashMap::new(),
            detail_fields: None,
            use_detail_view: true,
            custom_row_click: None,
            title: "Results".to_string(),
            description: "Browse results with pagination".to_string(),
            search_placeholder: "Search...".to_string(),
            empty_message: "No results found.".to_string(),
            loading_message: "Loading...".to_string(),
            hide_search: false,
            hide_pagination: false,
            hide_header: false,
            compact: false,
        }
    }

    pub fn columns(mut self, columns: Vec<ColumnDescriptor>) -> Self {
        self.columns = columns;
        self
    }

    pub fn ordering_options(mut self, options: Vec<SelectOption>) -> Self {
        self.ordering_options = options;
        self
    }

    pub fn filters(mut self, filters: Vec<FilterDescriptor>) -> Self {
        self.filters = filters;
        self
    }

    pub fn default_ordering(mut self, ordering: impl Into<String>) -> Self {
        self.default_ordering = ordering.into();
        self
    }

    pub fn additional_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.additional_params.push((key.into(), value.into()));
        self
    }

    pub fn additional_params(mut self, params: Vec<(String, String)>) -> Self {
        self.additional_params.extend(params);
        self
    }

    pub fn cell_renderer(
        mut self,
        key: impl Into<String>,
        f: impl Fn(&Record, &ColumnDescriptor) -> CellContent + Send + Sync + 'static,
    ) -> Self {
        self.custom_cell_renderers.insert(key.into(), Arc::new(f));
        self
    }

    pub fn detail_fields(mut self, fields: Vec<DetailField>) -> Self {
        self.detail_fields = Some(fields);
        self
    }

    pub fn use_detail_view(mut self, enabled: bool) -> Self {
        self.use_detail_view = enabled;
        self
    }

    pub fn on_row_click(mut self, f: impl Fn(&Record) + Send + Sync + 'static) -> Self {
        self.custom_row_click = Some(Arc::new(f));
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn search_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.search_placeholder = placeholder.into();
        self
    }

    pub fn empty_message(mut self, message: impl Into<String>) -> Self {
        self.empty_message = message.into();
        self
    }

    pub fn loading_message(mut self, message: impl Into<String>) -> Self {
        self.loading_message = message.into();
        self
    }

    pub fn hide_search(mut self, hide: bool) -> Self {
        self.hide_search = hide;
        self
    }

    pub fn hide_pagination(mut self, hide: bool) -> Self {
        self.hide_pagination = hide;
        self
    }

    pub fn hide_header(mut self, hide: bool) -> Self {
        self.hide_header = hide;
        self
    }

    pub fn compact(mut self, compact: bool) -> Self {
        self.compact = compact;
        self
    }

    /// Filter values as declared, each at its default.
    pub fn default_filter_values(&self) -> Vec<(String, String)> {
        self.filters
            .iter()
            .map(|f| (f.key.clone(), f.default_value.clone()))
            .collect()
    }
}
