pub mod add;
pub mod search_by_category;
pub mod summary;
