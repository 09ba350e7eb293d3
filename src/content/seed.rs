use chrono::NaiveDate;
use gray_matter::{engine::YAML, Matter};
use rust_embed::Embed;
use serde::Deserialize;
use thiserror::Error;

use super::{BlogPost, ItemId, Project, Testimonial};

#[derive(Embed)]
#[folder = "content"]
pub struct Assets;

#[derive(Error, Debug, Clone)]
pub enum ContentError {
    #[error("content asset not found: {0}")]
    NotFound(String),
    #[error("content asset is not valid UTF-8: {0}")]
    Encoding(String),
    #[error("couldn't parse front matter of {0}")]
    FrontMatter(String),
    #[error("couldn't parse {name}: {reason}")]
    Json { name: String, reason: String },
}

#[derive(Deserialize, Debug, Default)]
struct FrontMatter {
    title: String,
    excerpt: String,
    date: NaiveDate,
    #[serde(default)]
    read_time: String,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    category: String,
}

fn asset_text(name: &str) -> Result<String, ContentError> {
    let file = Assets::get(name).ok_or_else(|| ContentError::NotFound(name.to_string()))?;
    String::from_utf8(file.data.into()).map_err(|_| ContentError::Encoding(name.to_string()))
}

fn parse_post(name: &str, text: &str) -> Result<BlogPost, ContentError> {
    let matter = Matter::<YAML>::new();
    let parsed = matter
        .parse_with_struct::<FrontMatter>(text)
        .ok_or_else(|| ContentError::FrontMatter(name.to_string()))?;
    let fm = parsed.data;
    let read_time = if fm.read_time.is_empty() {
        super::post::estimate_read_time(&parsed.content)
    } else {
        fm.read_time
    };
    Ok(BlogPost {
        id: ItemId::new(),
        title: fm.title,
        excerpt: fm.excerpt,
        content: parsed.content.trim().to_string(),
        date: fm.date,
        read_time,
        tags: fm.tags,
        category: fm.category,
    })
}

/// Sample posts under `content/posts`, newest first.
pub fn load_posts() -> Result<Vec<BlogPost>, ContentError> {
    let mut posts = Assets::iter()
        .filter(|name| name.starts_with("posts/") && name.ends_with(".md"))
        .map(|name| {
            let text = asset_text(&name)?;
            parse_post(&name, &text)
        })
        .collect::<Result<Vec<_>, _>>()?;
    posts.sort_by(|a, b| b.date.cmp(&a.date));
    Ok(posts)
}

fn load_json<T: for<'de> Deserialize<'de>>(name: &str) -> Result<Vec<T>, ContentError> {
    let text = asset_text(name)?;
    serde_json::from_str(&text).map_err(|e| ContentError::Json {
        name: name.to_string(),
        reason: e.to_string(),
    })
}

pub fn load_projects() -> Result<Vec<Project>, ContentError> {
    load_json("projects.json")
}

pub fn load_testimonials() -> Result<Vec<Testimonial>, ContentError> {
    load_json("testimonials.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_posts_sorted() {
        let posts = load_posts().expect("sample posts should parse");
        assert!(!posts.is_empty());
        assert!(posts.windows(2).all(|w| w[0].date >= w[1].date));
        for post in &posts {
            assert!(!post.title.is_empty());
            assert!(!post.content.is_empty());
            assert!(!post.content.starts_with("---"));
        }
    }

    #[test]
    fn test_seed_ids_unique() {
        let projects = load_projects().expect("sample projects should parse");
        assert!(projects.len() >= 2);
        assert_ne!(projects[0].id, projects[1].id);

        let testimonials = load_testimonials().expect("sample testimonials should parse");
        assert!(testimonials.iter().all(|t| (1..=5).contains(&t.rating)));
    }

    #[test]
    fn test_parse_post_front_matter() {
        let text = "---\ntitle: Hello\nexcerpt: A greeting\ndate: 2025-02-03\ntags:\n  - Intro\n---\nBody text here.\n";
        let post = parse_post("posts/hello.md", text).unwrap();
        assert_eq!(post.title, "Hello");
        assert_eq!(post.date, NaiveDate::from_ymd_opt(2025, 2, 3).unwrap());
        assert_eq!(post.tags, vec!["Intro"]);
        assert_eq!(post.read_time, "1 min read");
        assert_eq!(post.content, "Body text here.");
    }

    #[test]
    fn test_parse_post_rejects_missing_front_matter() {
        let err = parse_post("posts/bad.md", "no front matter at all").unwrap_err();
        assert!(matches!(err, ContentError::FrontMatter(_)));
    }

    #[test]
    fn test_missing_asset() {
        let err = load_json::<Project>("nope.json").unwrap_err();
        assert!(matches!(err, ContentError::NotFound(_)));
    }
}
