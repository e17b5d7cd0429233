pub mod grouping;
pub mod normalize;
pub mod operation_id;
pub mod schema_tree;

pub use grouping::{DEFAULT_TAG, group_by_tag, primary_tag};
pub use normalize::to_model;
pub use operation_id::{INTRO_IDS, IdAllocator, operation_id};
pub use schema_tree::{ExpandOptions, PropertyRow, expand};
