pub mod issue_type;
pub mod project;
pub mod query;

pub use issue_type::*;
pub use project::*;
pub use query::*;
