pub mod category_count;
pub mod chart_data;
pub mod chart_outcome;
pub mod dashboard_entry;
pub mod header_index;
pub mod raw_title_batch;
pub mod raw_title_row;
