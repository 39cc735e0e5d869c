//! Assembly of resolved pages into an ordered, paginated result

mod assembler;
mod paginated;

pub use assembler::ResultAssembler;
pub use paginated::{PagedRecord, PaginatedResultSet};
