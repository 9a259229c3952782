use serde::{Deserialize, Serialize};
use serde_json::Number;

pub type CafeId = i64;

/// A single item of the coffee menu.
///
/// Field names are part of the wire format. `precio` is kept as the number
/// the client sent, so `2500` is echoed back as `2500` and not `2500.0`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cafe {
    pub id: CafeId,
    pub nombre: String,
    pub precio: Number,
}

impl Cafe {
    pub fn new(id: CafeId, nombre: impl Into<String>, precio: impl Into<Number>) -> Self {
        Self {
            id,
            nombre: nombre.into(),
            precio: precio.into(),
        }
    }
}

/// Coerces an `:id` path segment into a [`CafeId`].
///
/// Returns `None` when the segment is not an integer; such an id can never
/// match a stored cafe.
pub fn parse_cafe_id(segment: &str) -> Option<CafeId> {
    segment.trim().parse().ok()
}
