mod arena;
pub mod forward_list;
pub mod index;
pub mod indexed_list;
pub mod safety;
pub mod stack;

pub use forward_list::ForwardList;
pub use index::{check_bounds, normalize_index, traversal_plan, Traversal};
pub use indexed_list::IndexedList;
pub use safety::ValidationError;
pub use stack::{Stack, StackMode};
