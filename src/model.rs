//! Data model for dox documentation comments and package metadata.
//!
//! Mirrors the JSON emitted by `dox` closely enough to deserialize it
//! directly; fields the renderer never reads are dropped by serde.

use anyhow::{Context as _, Result};
use serde::Deserialize;

/// One documented symbol: a single comment block and its tags.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DocEntry {
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(default)]
    pub description: Option<Description>,
    /// Code context inferred from the line following the comment.
    #[serde(default, rename = "ctx")]
    pub context: Option<CodeContext>,
}

/// Free-text part of a comment.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Description {
    pub full: String,
    pub summary: String,
    pub body: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CodeContext {
    /// e.g. "function", "method", "property"
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
}

/// A typed `@tag` annotation, discriminated by the JSON `type` field.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Tag {
    Api {
        #[serde(default)]
        visibility: Visibility,
    },
    Alias {
        #[serde(default)]
        string: String,
    },
    Module {
        #[serde(default)]
        string: String,
    },
    Param(FieldTag),
    Property(FieldTag),
    Example {
        #[serde(default)]
        string: String,
    },
    #[serde(alias = "return")]
    Returns(ReturnsTag),
    /// `@see`, `@throws`, `@type` and anything else the renderer ignores.
    #[serde(other)]
    Other,
}

/// `@api public` / `@api private`. Anything but "private" counts as public.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum Visibility {
    #[default]
    Public,
    Private,
}

impl From<String> for Visibility {
    fn from(value: String) -> Self {
        if value == "private" {
            Visibility::Private
        } else {
            Visibility::Public
        }
    }
}

/// Shared shape of `@param` and `@property`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FieldTag {
    pub name: String,
    pub types: Vec<String>,
    /// Raw type expression as written, e.g. "{String|Array}"
    pub types_description: String,
    pub optional: bool,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ReturnsTag {
    pub types: Vec<String>,
    pub description: String,
}

/// The subset of `package.json` used by the README scaffold.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PackageDescriptor {
    pub name: String,
    pub description: String,
    pub repository: Option<Repository>,
    pub scripts: Option<Scripts>,
}

/// `"repository"` is either an object with a `url` or npm's string shorthand.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Repository {
    Shorthand(String),
    Detailed { url: Option<String> },
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Scripts {
    pub test: Option<String>,
}

impl PackageDescriptor {
    /// Parse a `package.json` document.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("failed to parse package descriptor")
    }

    pub fn repository_url(&self) -> Option<&str> {
        match self.repository.as_ref()? {
            Repository::Shorthand(url) => Some(url),
            Repository::Detailed { url } => url.as_deref(),
        }
    }

    /// Whether a non-empty `scripts.test` command is declared.
    pub fn has_test_script(&self) -> bool {
        self.scripts
            .as_ref()
            .and_then(|s| s.test.as_deref())
            .is_some_and(|t| !t.is_empty())
    }
}

/// Parse the JSON array produced by `dox`.
pub fn parse_entries(json: &str) -> Result<Vec<DocEntry>> {
    serde_json::from_str(json).context("failed to parse dox JSON")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_deserialize_by_type() {
        let entries = parse_entries(
            r#"[{
                "tags": [
                    {"type": "api", "visibility": "private"},
                    {"type": "param", "name": "x", "types": ["Number"],
                     "typesDescription": "<code>Number</code>", "optional": true,
                     "description": "the x"},
                    {"type": "return", "types": ["String"], "description": "out"},
                    {"type": "see", "string": "elsewhere"}
                ],
                "description": {"full": "<p>Hello</p>", "summary": "<p>Hello</p>", "body": ""},
                "ctx": {"type": "function", "name": "hello", "string": "hello()"},
                "line": 3
            }]"#,
        )
        .unwrap();

        let tags = &entries[0].tags;
        assert_eq!(tags[0], Tag::Api { visibility: Visibility::Private });
        match &tags[1] {
            Tag::Param(field) => {
                assert_eq!(field.name, "x");
                assert_eq!(field.types, vec!["Number"]);
                assert!(field.optional);
            }
            other => panic!("expected param, got {:?}", other),
        }
        assert!(matches!(tags[2], Tag::Returns(_)));
        assert_eq!(tags[3], Tag::Other);
        assert_eq!(entries[0].context.as_ref().unwrap().name, "hello");
    }

    #[test]
    fn unknown_visibility_is_public() {
        let tag: Tag = serde_json::from_str(r#"{"type": "api", "visibility": "protected"}"#).unwrap();
        assert_eq!(tag, Tag::Api { visibility: Visibility::Public });
    }

    #[test]
    fn param_fields_default_when_missing() {
        let tag: Tag = serde_json::from_str(r#"{"type": "param", "name": "cb"}"#).unwrap();
        assert_eq!(
            tag,
            Tag::Param(FieldTag {
                name: "cb".to_string(),
                ..FieldTag::default()
            })
        );
    }

    #[test]
    fn package_repository_object() {
        let pkg = PackageDescriptor::from_json(
            r#"{"name": "widget", "description": "A widget",
                "repository": {"type": "git", "url": "git://github.com/acme/widget.git"},
                "scripts": {"test": "tap test/*.js"}}"#,
        )
        .unwrap();
        assert_eq!(pkg.repository_url(), Some("git://github.com/acme/widget.git"));
        assert!(pkg.has_test_script());
    }

    #[test]
    fn package_repository_shorthand() {
        let pkg = PackageDescriptor::from_json(
            r#"{"name": "widget", "repository": "https://github.com/acme/widget.git"}"#,
        )
        .unwrap();
        assert_eq!(pkg.repository_url(), Some("https://github.com/acme/widget.git"));
        assert!(!pkg.has_test_script());
    }

    #[test]
    fn empty_test_script_is_absent() {
        let pkg = PackageDescriptor::from_json(r#"{"name": "w", "scripts": {"test": ""}}"#).unwrap();
        assert!(!pkg.has_test_script());
    }

    #[test]
    fn malformed_json_is_an_error() {
        let err = parse_entries("{not json").unwrap_err();
        assert!(err.to_string().contains("failed to parse dox JSON"));
    }
}
