pub mod title_csv_repository_impl;
