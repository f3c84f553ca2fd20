pub mod predicate;
pub mod value;
