use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::seo::{SeoFields, SeoPatch};
use super::slug::slugify;

/// Publication state of a blog post.
///
/// `published_at` records the latest transition to published. Unpublishing
/// keeps the timestamp for display; the next publish stamps a fresh one. On
/// the wire the state flattens to `is_published` plus a nullable
/// `published_at`; a published post without a timestamp is rejected as
/// malformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PublicationWire", into = "PublicationWire")]
pub enum Publication {
    Draft { published_at: Option<DateTime<Utc>> },
    Published { published_at: DateTime<Utc> },
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct PublicationWire {
    is_published: bool,
    #[serde(default)]
    published_at: Option<DateTime<Utc>>,
}

impl TryFrom<PublicationWire> for Publication {
    type Error = String;

    fn try_from(wire: PublicationWire) -> Result<Self, Self::Error> {
        match (wire.is_published, wire.published_at) {
            (true, Some(published_at)) => Ok(Publication::Published { published_at }),
            (true, None) => Err("published post is missing published_at".to_string()),
            (false, published_at) => Ok(Publication::Draft { published_at }),
        }
    }
}

impl From<Publication> for PublicationWire {
    fn from(publication: Publication) -> Self {
        match publication {
            Publication::Draft { published_at } => PublicationWire {
                is_published: false,
                published_at,
            },
            Publication::Published { published_at } => PublicationWire {
                is_published: true,
                published_at: Some(published_at),
            },
        }
    }
}

impl Default for Publication {
    fn default() -> Self {
        Publication::Draft { published_at: None }
    }
}

impl Publication {
    pub fn is_published(&self) -> bool {
        matches!(self, Publication::Published { .. })
    }

    pub fn published_at(&self) -> Option<DateTime<Utc>> {
        match self {
            Publication::Draft { published_at } => *published_at,
            Publication::Published { published_at } => Some(*published_at),
        }
    }

    /// Go live. Every Draft→Published transition stamps `now`; publishing
    /// an already-published post keeps its timestamp.
    pub fn publish(self, now: DateTime<Utc>) -> Publication {
        match self {
            Publication::Draft { .. } => Publication::Published { published_at: now },
            published => published,
        }
    }

    /// Back to draft, retaining the publication timestamp.
    pub fn unpublish(self) -> Publication {
        match self {
            Publication::Published { published_at } => Publication::Draft {
                published_at: Some(published_at),
            },
            draft => draft,
        }
    }
}

/// Blog post entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub slug: String,
    /// Teaser shown in listings.
    pub excerpt: String,
    /// Rich HTML body.
    pub content: String,
    pub featured_image: String,
    #[serde(flatten)]
    pub publication: Publication,
    pub seo: SeoFields,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields accepted when creating a blog post. The store assigns the
/// identifier and timestamps; a missing slug is derived from the title.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewBlogPost {
    pub title: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub excerpt: String,
    pub content: String,
    #[serde(default)]
    pub featured_image: String,
    #[serde(default)]
    pub is_published: bool,
    #[serde(default)]
    pub seo: SeoFields,
}

impl NewBlogPost {
    pub fn validate(&self) -> Result<(), crate::error::DomainError> {
        if self.title.trim().is_empty() {
            return Err(crate::error::DomainError::Validation(
                "title is required".to_string(),
            ));
        }
        if self.content.trim().is_empty() {
            return Err(crate::error::DomainError::Validation(
                "content is required".to_string(),
            ));
        }
        Ok(())
    }
}

/// Partial update for a blog post. `is_published` drives the publication
/// transitions; everything else merges field by field.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BlogPostPatch {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub featured_image: Option<String>,
    pub is_published: Option<bool>,
    pub seo: Option<SeoPatch>,
}

impl BlogPostPatch {
    /// Patched required fields may not be blanked out.
    pub fn validate(&self) -> Result<(), crate::error::DomainError> {
        if self
            .title
            .as_deref()
            .is_some_and(|title| title.trim().is_empty())
        {
            return Err(crate::error::DomainError::Validation(
                "title is required".to_string(),
            ));
        }
        if self
            .content
            .as_deref()
            .is_some_and(|content| content.trim().is_empty())
        {
            return Err(crate::error::DomainError::Validation(
                "content is required".to_string(),
            ));
        }
        Ok(())
    }
}

impl BlogPost {
    /// Build a stored post from a draft. A draft created as published is
    /// stamped immediately.
    pub fn new(draft: NewBlogPost) -> Self {
        let now = Utc::now();
        let slug = match draft.slug {
            Some(s) if !s.is_empty() => s,
            _ => slugify(&draft.title),
        };
        let publication = if draft.is_published {
            Publication::Published { published_at: now }
        } else {
            Publication::default()
        };
        Self {
            id: Uuid::new_v4().to_string(),
            title: draft.title,
            slug,
            excerpt: draft.excerpt,
            content: draft.content,
            featured_image: draft.featured_image,
            publication,
            seo: draft.seo,
            created_at: now,
            updated_at: now,
        }
    }

    /// Merge a patch over the post and refresh `updated_at`.
    pub fn apply(&mut self, patch: BlogPostPatch) {
        let now = Utc::now();
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(slug) = patch.slug {
            self.slug = slug;
        }
        if let Some(excerpt) = patch.excerpt {
            self.excerpt = excerpt;
        }
        if let Some(content) = patch.content {
            self.content = content;
        }
        if let Some(featured_image) = patch.featured_image {
            self.featured_image = featured_image;
        }
        if let Some(is_published) = patch.is_published {
            self.publication = if is_published {
                self.publication.publish(now)
            } else {
                self.publication.unpublish()
            };
        }
        if let Some(seo) = patch.seo {
            self.seo.apply(seo);
        }
        self.updated_at = now;
    }
}
