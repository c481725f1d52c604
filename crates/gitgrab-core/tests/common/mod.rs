pub mod source_repo;
