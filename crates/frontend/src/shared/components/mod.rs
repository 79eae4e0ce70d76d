pub mod flag_toggle;
pub mod inline_edit;
pub mod search_input;
pub mod sortable_header_cell;

pub use flag_toggle::FlagToggle;
pub use inline_edit::InlineEdit;
pub use search_input::SearchInput;
pub use sortable_header_cell::SortableHeaderCell;
