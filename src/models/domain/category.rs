use serde::{Deserialize, Serialize};

/// Category seed data. The display name is serialized as `type`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Category {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: String,
}

impl Category {
    pub fn new(id: i64, kind: &str) -> Self {
        Category {
            id,
            kind: kind.to_string(),
        }
    }
}
