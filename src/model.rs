//! Data model for the JSON documentation tree.
//!
//! Nodes are read as-is; a node's body is kept as raw JSON until it is
//! rendered, so an unknown `kind` never fails parsing of the whole tree.

use crate::error::{Error, Result};
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// One page of documentation plus its child pages.
#[derive(Debug, Clone, Deserialize)]
pub struct DocumentationNode {
    /// Absolute, book-relative route (e.g. `/reference/text/`)
    pub route: String,
    pub title: String,
    /// Parsed for completeness; not rendered.
    #[allow(dead_code)]
    pub description: String,
    pub body: Body,
    pub children: Vec<DocumentationNode>,
}

/// Tagged body as it appears in the JSON input.
#[derive(Debug, Clone, Deserialize)]
pub struct Body {
    pub kind: String,
    pub content: Value,
}

/// Resolved body content, one variant per supported kind.
#[derive(Debug, Clone)]
pub enum BodyContent {
    Html(String),
    Category(CategoryDoc),
    Func(FunctionDoc),
    Type(TypeDoc),
    Symbols(SymbolsDoc),
    Group(GroupDoc),
    /// Any kind this renderer does not know about (yet).
    Unsupported(String),
}

#[derive(Debug, Clone, Deserialize)]
pub struct CategoryDoc {
    pub details: String,
    pub items: Vec<CategoryItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CategoryItem {
    pub name: String,
    pub route: String,
    pub oneliner: String,
}

/// A documented function. `scope` holds nested definitions.
#[derive(Debug, Clone, Deserialize)]
pub struct FunctionDoc {
    pub path: Vec<String>,
    pub name: String,
    pub details: String,
    pub params: Vec<ParamDoc>,
    pub returns: Vec<String>,
    #[serde(default)]
    pub example: Option<String>,
    pub scope: Vec<FunctionDoc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ParamDoc {
    pub name: String,
    pub types: Vec<String>,
    pub required: bool,
    pub named: bool,
    pub positional: bool,
    pub details: String,
    #[serde(default)]
    pub example: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TypeDoc {
    pub title: String,
    pub details: String,
    #[serde(default)]
    pub constructor: Option<FunctionDoc>,
    pub scope: Vec<FunctionDoc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SymbolsDoc {
    pub title: String,
    pub details: String,
    pub list: Vec<SymbolEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SymbolEntry {
    pub codepoint: u32,
    pub name: String,
    #[serde(rename = "mathClass")]
    pub math_class: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GroupDoc {
    pub name: String,
    pub details: String,
    pub functions: Vec<FunctionDoc>,
}

impl Body {
    /// Resolve the raw JSON content according to `kind`.
    pub fn content(&self) -> std::result::Result<BodyContent, serde_json::Error> {
        let content = &self.content;
        Ok(match self.kind.as_str() {
            "html" => BodyContent::Html(String::deserialize(content)?),
            "category" => BodyContent::Category(CategoryDoc::deserialize(content)?),
            "func" => BodyContent::Func(FunctionDoc::deserialize(content)?),
            "type" => BodyContent::Type(TypeDoc::deserialize(content)?),
            "symbols" => BodyContent::Symbols(SymbolsDoc::deserialize(content)?),
            "group" => BodyContent::Group(GroupDoc::deserialize(content)?),
            other => BodyContent::Unsupported(other.to_string()),
        })
    }
}

/// Read and parse the documentation tree from a JSON file.
pub fn load_nodes(path: &Path) -> Result<Vec<DocumentationNode>> {
    let raw = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    serde_json::from_str(&raw).map_err(|source| Error::Json {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn body(kind: &str, content: Value) -> Body {
        Body {
            kind: kind.to_string(),
            content,
        }
    }

    #[test]
    fn html_body() {
        let content = body("html", json!("<p>hi</p>")).content().unwrap();
        assert!(matches!(content, BodyContent::Html(ref s) if s == "<p>hi</p>"));
    }

    #[test]
    fn unknown_kind_is_unsupported() {
        let content = body("widget", json!({"anything": 1})).content().unwrap();
        assert!(matches!(content, BodyContent::Unsupported(ref k) if k == "widget"));
    }

    #[test]
    fn missing_field_is_an_error() {
        assert!(body("category", json!({"details": ""})).content().is_err());
    }

    #[test]
    fn optional_fields_accept_null_and_absence() {
        let func = json!({
            "path": [], "name": "f", "details": "", "returns": [], "scope": [],
            "example": null,
            "params": [{
                "name": "x", "types": ["int"], "required": true, "named": false,
                "positional": true, "details": ""
            }]
        });
        match body("func", func).content().unwrap() {
            BodyContent::Func(f) => {
                assert!(f.example.is_none());
                assert!(f.params[0].example.is_none());
            }
            other => panic!("unexpected content: {:?}", other),
        }
    }

    #[test]
    fn symbols_math_class_renamed() {
        let symbols = json!({
            "title": "Sym", "details": "",
            "list": [{"codepoint": 65, "name": "A", "mathClass": "Normal"}]
        });
        match body("symbols", symbols).content().unwrap() {
            BodyContent::Symbols(s) => assert_eq!(s.list[0].math_class, "Normal"),
            other => panic!("unexpected content: {:?}", other),
        }
    }

    #[test]
    fn node_tree_parses() {
        let nodes: Vec<DocumentationNode> = serde_json::from_value(json!([{
            "route": "/a/", "title": "A", "description": "",
            "body": {"kind": "html", "content": ""},
            "children": [{
                "route": "/a/b/", "title": "B", "description": "",
                "body": {"kind": "widget", "content": null},
                "children": []
            }]
        }]))
        .unwrap();
        assert_eq!(nodes[0].children[0].title, "B");
    }
}
