use std::collections::HashSet;

use crate::model::{HttpMethod, OperationIds};

/// Fixed identifiers of the introductory sections, in display order.
pub const INTRO_IDS: [&str; 4] = ["introduction", "authentication", "base-url", "status-codes"];

/// Derive the legible identifier for an operation: lowercase method, a dash,
/// then the path with every non-alphanumeric character replaced by `-`.
///
/// - `GET /orders` → `get--orders`
/// - `POST /orders/{id}/items` → `post--orders--id--items`
pub fn operation_id(path: &str, method: &str) -> String {
    let normalized: String = path
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect();
    format!("{}-{}", method.to_lowercase(), normalized)
}

impl OperationIds {
    /// Derive every correlated identifier from one operation id.
    pub fn from_operation_id(operation_id: String) -> Self {
        Self {
            content_section_id: operation_id.clone(),
            code_request_id: format!("{operation_id}-request"),
            code_response_id: format!("{operation_id}-response"),
            operation_id,
        }
    }
}

/// Hands out operation ids that are unique within one generation pass.
///
/// The first operation to claim a base id keeps it; later operations whose
/// path normalizes to the same id get `-2`, `-3`, ... appended in traversal
/// order.
#[derive(Debug, Default)]
pub struct IdAllocator {
    taken: HashSet<String>,
}

impl IdAllocator {
    pub fn new() -> Self {
        let mut taken = HashSet::new();
        taken.extend(INTRO_IDS.iter().map(|id| id.to_string()));
        Self { taken }
    }

    pub fn allocate(&mut self, path: &str, method: HttpMethod) -> OperationIds {
        let base = operation_id(path, method.as_lower());
        let mut candidate = base.clone();
        let mut n = 2;
        while self.taken.contains(&candidate) {
            candidate = format!("{base}-{n}");
            n += 1;
        }
        if candidate != base {
            log::warn!("operation id `{base}` for {method} {path} collides, using `{candidate}`");
        }
        self.taken.insert(candidate.clone());
        OperationIds::from_operation_id(candidate)
    }
}
