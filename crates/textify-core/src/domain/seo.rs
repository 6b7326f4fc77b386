use serde::{Deserialize, Serialize};

/// Search and social metadata carried by every entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SeoFields {
    pub meta_title: String,
    pub meta_description: String,
    /// Comma-separated keyword list.
    pub keywords: String,
    pub og_image: String,
    pub twitter_image: String,
    pub facebook_image: String,
    pub canonical: String,
    /// Search engines may include the entity's page in their index.
    pub is_indexed: bool,
    /// Crawlers may follow outbound links on the entity's page.
    pub is_followed: bool,
}

impl Default for SeoFields {
    fn default() -> Self {
        Self {
            meta_title: String::new(),
            meta_description: String::new(),
            keywords: String::new(),
            og_image: String::new(),
            twitter_image: String::new(),
            facebook_image: String::new(),
            canonical: String::new(),
            is_indexed: true,
            is_followed: true,
        }
    }
}

/// Partial update for the SEO group. Absent fields keep their stored
/// values; unknown fields are rejected when deserializing.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SeoPatch {
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub keywords: Option<String>,
    pub og_image: Option<String>,
    pub twitter_image: Option<String>,
    pub facebook_image: Option<String>,
    pub canonical: Option<String>,
    pub is_indexed: Option<bool>,
    pub is_followed: Option<bool>,
}

impl SeoFields {
    /// Merge a patch over the group, field by field.
    pub fn apply(&mut self, patch: SeoPatch) {
        if let Some(meta_title) = patch.meta_title {
            self.meta_title = meta_title;
        }
        if let Some(meta_description) = patch.meta_description {
            self.meta_description = meta_description;
        }
        if let Some(keywords) = patch.keywords {
            self.keywords = keywords;
        }
        if let Some(og_image) = patch.og_image {
            self.og_image = og_image;
        }
        if let Some(twitter_image) = patch.twitter_image {
            self.twitter_image = twitter_image;
        }
        if let Some(facebook_image) = patch.facebook_image {
            self.facebook_image = facebook_image;
        }
        if let Some(canonical) = patch.canonical {
            self.canonical = canonical;
        }
        if let Some(is_indexed) = patch.is_indexed {
            self.is_indexed = is_indexed;
        }
        if let Some(is_followed) = patch.is_followed {
            self.is_followed = is_followed;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_allow_indexing_and_following() {
        let seo = SeoFields::default();
        assert!(seo.is_indexed);
        assert!(seo.is_followed);
        assert!(seo.canonical.is_empty());
    }

    #[test]
    fn test_apply_touches_only_patched_fields() {
        let mut seo = SeoFields {
            meta_title: "Old title".to_string(),
            keywords: "old,keywords".to_string(),
            ..SeoFields::default()
        };

        seo.apply(SeoPatch {
            keywords: Some("new,keywords".to_string()),
            is_indexed: Some(false),
            ..SeoPatch::default()
        });

        assert_eq!(seo.meta_title, "Old title");
        assert_eq!(seo.keywords, "new,keywords");
        assert!(!seo.is_indexed);
        assert!(seo.is_followed);
    }

    #[test]
    fn test_patch_rejects_unknown_fields() {
        let result: Result<SeoPatch, _> =
            serde_json::from_str(r#"{"keywords": "a,b", "robots": "noarchive"}"#);
        assert!(result.is_err());
    }
}
