pub mod ordering;
pub mod query;
