pub mod condition;
pub mod convert;
pub mod operator;
pub mod utils;
pub mod value_type;
