pub mod cleaned_table;
pub mod title_record;
