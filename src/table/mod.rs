pub mod parser;
pub mod record;
pub mod value;


pub use parser::{parse_table, Table};
pub use record::Record;
pub use value::FieldValue;
