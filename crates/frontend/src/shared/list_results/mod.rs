//! Generic list view over a paginated collection endpoint.

pub mod controller;
pub mod descriptors;
pub mod query;
pub mod render;
pub mod view;

pub use controller::{FetchTicket, ListController, RowClickAction};
pub use descriptors::{
    options, ColumnDescriptor, DetailField, DetailFieldType, FilterDescriptor, ListConfig,
    SelectOption,
};
pub use render::{BadgeSpec, CellContent, PLACEHOLDER};
pub use view::{CellView, ListResults};
