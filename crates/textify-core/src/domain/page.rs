use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::seo::{SeoFields, SeoPatch};
use crate::error::DomainError;

/// Identifier of a static legal page. The set is closed: pages are seeded,
/// never created or deleted, and the identifier doubles as the slug.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PageId {
    PrivacyPolicy,
    TermsConditions,
    DmcaPolicy,
    Disclaimer,
}

impl PageId {
    pub const ALL: [PageId; 4] = [
        PageId::PrivacyPolicy,
        PageId::TermsConditions,
        PageId::DmcaPolicy,
        PageId::Disclaimer,
    ];

    /// Wire value, also the page slug.
    pub fn as_str(&self) -> &'static str {
        match self {
            PageId::PrivacyPolicy => "privacy-policy",
            PageId::TermsConditions => "terms-conditions",
            PageId::DmcaPolicy => "dmca-policy",
            PageId::Disclaimer => "disclaimer",
        }
    }

    /// Default display title.
    pub fn title(&self) -> &'static str {
        match self {
            PageId::PrivacyPolicy => "Privacy Policy",
            PageId::TermsConditions => "Terms and Conditions",
            PageId::DmcaPolicy => "DMCA Policy",
            PageId::Disclaimer => "Disclaimer",
        }
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PageId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PageId::ALL
            .iter()
            .copied()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| DomainError::Validation(format!("unknown page: {s}")))
    }
}

/// Static legal page entity. `last_updated` is the editorially visible
/// revision time, kept alongside the bookkeeping `updated_at`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaticPage {
    pub id: String,
    pub title: String,
    pub slug: String,
    /// Rich HTML body.
    pub content: String,
    pub seo: SeoFields,
    pub last_updated: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial update for a static page. The slug is fixed with the page
/// identity, so patches cannot carry one.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PagePatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub seo: Option<SeoPatch>,
}

impl PagePatch {
    /// A patched body may not be blanked out.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self
            .content
            .as_deref()
            .is_some_and(|content| content.trim().is_empty())
        {
            return Err(DomainError::Validation(
                "content is required".to_string(),
            ));
        }
        Ok(())
    }
}

impl StaticPage {
    /// Merge a patch over the page and refresh both revision timestamps.
    pub fn apply(&mut self, patch: PagePatch) {
        let now = Utc::now();
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(content) = patch.content {
            self.content = content;
        }
        if let Some(seo) = patch.seo {
            self.seo.apply(seo);
        }
        self.last_updated = now;
        self.updated_at = now;
    }
}
