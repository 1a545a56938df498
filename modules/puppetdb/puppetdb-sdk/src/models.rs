use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A fact from the `facts` or `fact-contents` endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fact {
    pub name: String,
    /// String, number, boolean or structured value
    pub value: Value,
    pub certname: String,
    pub environment: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,
    /// Path segments (`fact-contents` only): strings, or integers for array indexes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<Value>>,
}

/// A fact path from the `fact-paths` endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactPath {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub path: Vec<Value>,
    /// Value type, e.g. `string`, `integer`, `map`
    #[serde(rename = "type")]
    pub value_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,
}
