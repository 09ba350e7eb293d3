use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{require, ContentItem, DraftError, ItemId, Validate};

pub static POST_CATEGORIES: [&str; 4] = [
    "Development Tips",
    "Personal Growth",
    "Problem Solving",
    "Tutorials",
];

static WORDS_PER_MINUTE: usize = 200;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: ItemId,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub date: NaiveDate,
    pub read_time: String,
    pub tags: Vec<String>,
    pub category: String,
}

impl BlogPost {
    /// e.g. "January 15, 2025"
    pub fn display_date(&self) -> String {
        self.date.format("%B %-d, %Y").to_string()
    }
}

/// What the "Write New Post" form collects.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PostDraft {
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub read_time: String,
    pub tags: Vec<String>,
    pub category: String,
}

impl Validate for PostDraft {
    fn validate(&self) -> Result<(), DraftError> {
        require("title", &self.title)?;
        require("excerpt", &self.excerpt)?;
        require("content", &self.content)
    }
}

impl ContentItem for BlogPost {
    type Draft = PostDraft;

    fn id(&self) -> ItemId {
        self.id
    }

    fn from_draft(draft: PostDraft, id: ItemId, today: NaiveDate) -> Result<Self, DraftError> {
        draft.validate()?;
        let read_time = match draft.read_time.trim() {
            "" => estimate_read_time(&draft.content),
            s => s.to_string(),
        };
        Ok(Self {
            id,
            title: draft.title.trim().to_string(),
            excerpt: draft.excerpt.trim().to_string(),
            content: draft.content,
            date: today,
            read_time,
            tags: draft.tags,
            category: draft.category,
        })
    }
}

pub fn estimate_read_time(content: &str) -> String {
    let words = content.split_whitespace().count();
    let minutes = words.div_ceil(WORDS_PER_MINUTE).max(1);
    format!("{minutes} min read")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> PostDraft {
        PostDraft {
            title: "  Learning Leptos ".to_string(),
            excerpt: "Signals everywhere".to_string(),
            content: "word ".repeat(450),
            ..Default::default()
        }
    }

    #[test]
    fn test_validation_order() {
        let mut d = PostDraft::default();
        assert_eq!(d.validate(), Err(DraftError::MissingField("title")));
        d.title = "t".to_string();
        assert_eq!(d.validate(), Err(DraftError::MissingField("excerpt")));
        d.excerpt = "e".to_string();
        assert_eq!(d.validate(), Err(DraftError::MissingField("content")));
        d.content = "c".to_string();
        assert!(d.is_complete());
    }

    #[test]
    fn test_read_time_estimate() {
        let today = NaiveDate::from_ymd_opt(2025, 1, 10).unwrap();
        let post = BlogPost::from_draft(draft(), ItemId::new(), today).unwrap();
        assert_eq!(post.read_time, "3 min read");
        assert_eq!(post.title, "Learning Leptos");

        let mut d = draft();
        d.read_time = "7 min read".to_string();
        let post = BlogPost::from_draft(d, ItemId::new(), today).unwrap();
        assert_eq!(post.read_time, "7 min read");

        assert_eq!(estimate_read_time("short"), "1 min read");
    }

    #[test]
    fn test_display_date() {
        let today = NaiveDate::from_ymd_opt(2025, 1, 5).unwrap();
        let post = BlogPost::from_draft(draft(), ItemId::new(), today).unwrap();
        assert_eq!(post.display_date(), "January 5, 2025");
    }
}
