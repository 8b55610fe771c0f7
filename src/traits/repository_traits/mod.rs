pub mod title_repository;
