use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{require, ContentItem, DraftError, ItemId, Validate};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(default)]
    pub id: ItemId,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub stack: Vec<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub live_url: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub stack: Vec<String>,
    pub github_url: String,
    pub live_url: String,
    pub tags: Vec<String>,
}

impl Validate for ProjectDraft {
    fn validate(&self) -> Result<(), DraftError> {
        require("title", &self.title)?;
        require("description", &self.description)
    }
}

fn non_blank(s: String) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

impl ContentItem for Project {
    type Draft = ProjectDraft;

    fn id(&self) -> ItemId {
        self.id
    }

    fn from_draft(draft: ProjectDraft, id: ItemId, _today: NaiveDate) -> Result<Self, DraftError> {
        draft.validate()?;
        Ok(Self {
            id,
            title: draft.title.trim().to_string(),
            description: draft.description.trim().to_string(),
            stack: draft.stack,
            github_url: non_blank(draft.github_url),
            live_url: non_blank(draft.live_url),
            image: None,
            tags: draft.tags,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_urls_dropped() {
        let draft = ProjectDraft {
            title: "Hotel Management System".to_string(),
            description: "CRUD app".to_string(),
            github_url: " https://github.com/example/hotel ".to_string(),
            live_url: "   ".to_string(),
            ..Default::default()
        };
        let today = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        let project = Project::from_draft(draft, ItemId::new(), today).unwrap();
        assert_eq!(
            project.github_url.as_deref(),
            Some("https://github.com/example/hotel")
        );
        assert_eq!(project.live_url, None);
        assert_eq!(project.image, None);
    }

    #[test]
    fn test_requires_description() {
        let draft = ProjectDraft {
            title: "Title only".to_string(),
            ..Default::default()
        };
        assert_eq!(draft.validate(), Err(DraftError::MissingField("description")));
    }
}
