pub mod line_item;
pub mod resolver;

pub use line_item::{parse_amount, LineItem, Period, StatementScope, StatementSection};
pub use resolver::{resolve, resolve_opt, select};
