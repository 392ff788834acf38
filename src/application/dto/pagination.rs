use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Fixed offset/limit page. The audit console pages with plain offsets;
/// there are no cursor semantics.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(bound(
    serialize = "T: Serialize",
    deserialize = "T: serde::de::DeserializeOwned"
))]
pub struct OffsetPage<T> {
    pub items: Vec<T>,
    pub limit: u32,
    pub offset: u32,
    pub count: usize,
}

impl<T> OffsetPage<T> {
    pub fn new(items: Vec<T>, limit: u32, offset: u32) -> Self {
        let count = items.len();
        Self {
            items,
            limit,
            offset,
            count,
        }
    }
}
