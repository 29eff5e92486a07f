//! Domain types representing transaction categories.

use serde::{Deserialize, Serialize};

use crate::domain::common::{Displayable, EntryKind, Identifiable};

/// Static reference data classifying transactions, with display metadata.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    pub icon: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    pub color: String,
}

impl Identifiable for Category {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Displayable for Category {
    fn display_label(&self) -> String {
        format!("{} ({})", self.name, self.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_serializes_as_lowercase_type_field() {
        let category = Category {
            id: "c1".into(),
            name: "Food".into(),
            icon: "🍜".into(),
            kind: EntryKind::Expense,
            color: "#ef4444".into(),
        };
        let json = serde_json::to_value(&category).unwrap();
        assert_eq!(json["type"], "expense");
    }

    #[test]
    fn deserializes_remote_payload() {
        let category: Category = serde_json::from_str(
            r##"{"id":"c2","name":"Salary","icon":"💰","type":"income","color":"#22c55e"}"##,
        )
        .unwrap();
        assert_eq!(category.kind, EntryKind::Income);
    }
}
