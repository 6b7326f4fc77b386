use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::seo::{SeoFields, SeoPatch};
use super::slug::slugify;

/// Category tag of a tool. The set is closed; the admin UI renders it as a
/// select with the labels from [`ToolType::label`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolType {
    Converter,
    Editor,
    Analyzer,
    Generator,
    Utility,
}

impl ToolType {
    pub const ALL: [ToolType; 5] = [
        ToolType::Converter,
        ToolType::Editor,
        ToolType::Analyzer,
        ToolType::Generator,
        ToolType::Utility,
    ];

    /// Wire value, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ToolType::Converter => "converter",
            ToolType::Editor => "editor",
            ToolType::Analyzer => "analyzer",
            ToolType::Generator => "generator",
            ToolType::Utility => "utility",
        }
    }

    /// Human-readable label for select options.
    pub fn label(&self) -> &'static str {
        match self {
            ToolType::Converter => "Converter",
            ToolType::Editor => "Editor",
            ToolType::Analyzer => "Analyzer",
            ToolType::Generator => "Generator",
            ToolType::Utility => "Utility",
        }
    }
}

impl fmt::Display for ToolType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tool entity - one entry in the tools catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tool {
    pub id: String,
    pub name: String,
    pub slug: String,
    /// Short description shown in listings.
    pub description: String,
    /// Rich HTML body.
    pub content: String,
    #[serde(rename = "type")]
    pub kind: ToolType,
    pub featured_image: String,
    pub is_active: bool,
    pub seo: SeoFields,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields accepted when creating a tool. The store assigns the identifier
/// and both timestamps; a missing slug is derived from the name.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewTool {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ToolType,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub featured_image: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub seo: SeoFields,
}

fn default_active() -> bool {
    true
}

impl NewTool {
    /// A tool needs at least a name; the type is already enforced by the
    /// enum at the deserialization boundary.
    pub fn validate(&self) -> Result<(), crate::error::DomainError> {
        if self.name.trim().is_empty() {
            return Err(crate::error::DomainError::Validation(
                "name is required".to_string(),
            ));
        }
        Ok(())
    }
}

/// Partial update for a tool. Absent fields keep their stored values;
/// unknown fields are rejected when deserializing. The slug is applied
/// verbatim when present and never re-derived from the name.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToolPatch {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub content: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<ToolType>,
    pub featured_image: Option<String>,
    pub is_active: Option<bool>,
    pub seo: Option<SeoPatch>,
}

impl ToolPatch {
    /// A patched name may not be blanked out.
    pub fn validate(&self) -> Result<(), crate::error::DomainError> {
        if self
            .name
            .as_deref()
            .is_some_and(|name| name.trim().is_empty())
        {
            return Err(crate::error::DomainError::Validation(
                "name is required".to_string(),
            ));
        }
        Ok(())
    }
}

impl Tool {
    /// Build a stored tool from a draft: fresh identifier, both timestamps,
    /// and a slug derived from the name when the draft does not bring one.
    pub fn new(draft: NewTool) -> Self {
        let now = Utc::now();
        let slug = match draft.slug {
            Some(s) if !s.is_empty() => s,
            _ => slugify(&draft.name),
        };
        Self {
            id: Uuid::new_v4().to_string(),
            name: draft.name,
            slug,
            description: draft.description,
            content: draft.content,
            kind: draft.kind,
            featured_image: draft.featured_image,
            is_active: draft.is_active,
            seo: draft.seo,
            created_at: now,
            updated_at: now,
        }
    }

    /// Merge a patch over the tool and refresh `updated_at`.
    pub fn apply(&mut self, patch: ToolPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(slug) = patch.slug {
            self.slug = slug;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(content) = patch.content {
            self.content = content;
        }
        if let Some(kind) = patch.kind {
            self.kind = kind;
        }
        if let Some(featured_image) = patch.featured_image {
            self.featured_image = featured_image;
        }
        if let Some(is_active) = patch.is_active {
            self.is_active = is_active;
        }
        if let Some(seo) = patch.seo {
            self.seo.apply(seo);
        }
        self.updated_at = Utc::now();
    }
}
