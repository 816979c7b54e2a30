//! Normalized tool metadata records.

use serde::{Deserialize, Serialize};

/// One extracted tool capability.
///
/// `inputs` and `outputs` are opaque descriptive strings: their exact shape
/// varies by extraction path (comma-joined `name: type` pairs from one path,
/// newline-joined `name (type)` lines from another) and callers must not
/// parse them back into structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolRecord {
    /// Identifier of the tool, unique within its source collection.
    pub name: String,
    /// Free-text description of what the tool does.
    pub description: String,
    /// Rendering of parameter names, types, and defaults.
    pub inputs: String,
    /// Description of the return type/value; may be empty.
    pub outputs: String,
}

impl ToolRecord {
    /// Prefixes the record name with its source collection, e.g.
    /// `cactus/CalculateMolWt`. Duplicate bare names across collections are
    /// expected; this is how they are disambiguated.
    pub fn namespaced(mut self, collection: &str) -> Self {
        self.name = format!("{}/{}", collection, self.name);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_namespaced_prefixes_name() {
        let record = ToolRecord {
            name: "balance".to_string(),
            description: "Balances an equation".to_string(),
            inputs: String::new(),
            outputs: String::new(),
        };

        let record = record.namespaced("chemlib");
        assert_eq!(record.name, "chemlib/balance");
        assert_eq!(record.description, "Balances an equation");
    }

    #[test]
    fn test_json_field_names() {
        let record = ToolRecord {
            name: "n".to_string(),
            description: "d".to_string(),
            inputs: "i".to_string(),
            outputs: "o".to_string(),
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["name"], "n");
        assert_eq!(json["description"], "d");
        assert_eq!(json["inputs"], "i");
        assert_eq!(json["outputs"], "o");
    }
}
