//! Fixed seed catalog: two tools, one published blog post, and the four
//! legal pages. Timestamps are stamped at construction time.

use chrono::Utc;
use textify_core::domain::{
    BlogPost, PageId, Publication, SeoFields, StaticPage, Tool, ToolType,
};

const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

fn seo(meta_title: &str, meta_description: &str, keywords: &str, canonical: &str) -> SeoFields {
    SeoFields {
        meta_title: meta_title.to_string(),
        meta_description: meta_description.to_string(),
        keywords: keywords.to_string(),
        og_image: PLACEHOLDER_IMAGE.to_string(),
        twitter_image: PLACEHOLDER_IMAGE.to_string(),
        facebook_image: PLACEHOLDER_IMAGE.to_string(),
        canonical: canonical.to_string(),
        is_indexed: true,
        is_followed: true,
    }
}

pub fn tools() -> Vec<Tool> {
    let now = Utc::now();
    vec![
        Tool {
            id: "1".to_string(),
            name: "Image to Text Converter".to_string(),
            slug: "image-to-text".to_string(),
            description: "Convert your images to text with high accuracy".to_string(),
            content: "<p>Our advanced image to text converter uses OCR technology to extract text from images.</p>".to_string(),
            kind: ToolType::Converter,
            featured_image: PLACEHOLDER_IMAGE.to_string(),
            is_active: true,
            seo: seo(
                "Image to Text Converter | Extract Text from Images",
                "Convert your images to text with high accuracy",
                "image to text, ocr, optical character recognition, extract text from image",
                "https://example.com/tools/image-to-text",
            ),
            created_at: now,
            updated_at: now,
        },
        Tool {
            id: "2".to_string(),
            name: "Text Editor".to_string(),
            slug: "text-editor".to_string(),
            description: "Simple text editor for your needs".to_string(),
            content: "<p>A versatile text editor with formatting options and more.</p>".to_string(),
            kind: ToolType::Editor,
            featured_image: PLACEHOLDER_IMAGE.to_string(),
            is_active: true,
            seo: seo(
                "Online Text Editor | Format and Edit Text",
                "Simple text editor for your needs",
                "text editor, online text editor, format text",
                "https://example.com/tools/text-editor",
            ),
            created_at: now,
            updated_at: now,
        },
    ]
}

pub fn blog_posts() -> Vec<BlogPost> {
    let now = Utc::now();
    vec![BlogPost {
        id: "1".to_string(),
        title: "How to Extract Text from Images".to_string(),
        slug: "how-to-extract-text-from-images".to_string(),
        excerpt: "Learn the best ways to extract text from images using OCR technology".to_string(),
        content: "<p>In this guide, we'll show you how to efficiently extract text from images using OCR (Optical Character Recognition) technology.</p>".to_string(),
        featured_image: PLACEHOLDER_IMAGE.to_string(),
        publication: Publication::Published { published_at: now },
        seo: seo(
            "How to Extract Text from Images",
            "Learn the best ways to extract text from images using OCR technology. Step-by-step guide with examples.",
            "extract text from images, ocr guide, image to text tutorial",
            "https://example.com/blog/how-to-extract-text-from-images",
        ),
        created_at: now,
        updated_at: now,
    }]
}

pub fn pages() -> Vec<StaticPage> {
    let now = Utc::now();
    PageId::ALL
        .into_iter()
        .map(|id| {
            let (content, meta_description, keywords) = match id {
                PageId::PrivacyPolicy => (
                    "<h1>Privacy Policy</h1><p>This is the privacy policy for our website.</p>",
                    "Privacy Policy for TextiFy - Learn how we handle your data",
                    "privacy policy, privacy, data protection",
                ),
                PageId::TermsConditions => (
                    "<h1>Terms and Conditions</h1><p>These are the terms and conditions for using our website.</p>",
                    "Terms and Conditions for using TextiFy services",
                    "terms, conditions, legal, terms of service",
                ),
                PageId::DmcaPolicy => (
                    "<h1>DMCA Policy</h1><p>This is our DMCA policy.</p>",
                    "DMCA Policy for TextiFy - Copyright information",
                    "dmca, copyright, takedown",
                ),
                PageId::Disclaimer => (
                    "<h1>Disclaimer</h1><p>This is our disclaimer.</p>",
                    "Disclaimer for TextiFy services",
                    "disclaimer, liability",
                ),
            };
            StaticPage {
                id: id.as_str().to_string(),
                title: id.title().to_string(),
                slug: id.as_str().to_string(),
                content: content.to_string(),
                seo: seo(
                    id.title(),
                    meta_description,
                    keywords,
                    &format!("https://example.com/{id}"),
                ),
                last_updated: now,
                created_at: now,
                updated_at: now,
            }
        })
        .collect()
}
