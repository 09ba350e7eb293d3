use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{require, ContentItem, DraftError, ItemId, Validate};

pub static MAX_RATING: u8 = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    #[serde(default)]
    pub id: ItemId,
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub company: String,
    pub content: String,
    pub rating: u8,
}

impl Testimonial {
    /// Letter shown in the avatar bubble.
    pub fn initial(&self) -> String {
        self.name
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }

    pub fn byline(&self) -> String {
        match (self.role.trim(), self.company.trim()) {
            ("", "") => String::new(),
            (role, "") => role.to_string(),
            ("", company) => company.to_string(),
            (role, company) => format!("{role} at {company}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestimonialDraft {
    pub name: String,
    pub role: String,
    pub company: String,
    pub content: String,
    pub rating: u8,
}

impl Default for TestimonialDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            role: String::new(),
            company: String::new(),
            content: String::new(),
            rating: MAX_RATING,
        }
    }
}

impl Validate for TestimonialDraft {
    fn validate(&self) -> Result<(), DraftError> {
        require("name", &self.name)?;
        require("content", &self.content)?;
        if !(1..=MAX_RATING).contains(&self.rating) {
            return Err(DraftError::InvalidRating(self.rating));
        }
        Ok(())
    }
}

impl ContentItem for Testimonial {
    type Draft = TestimonialDraft;

    fn id(&self) -> ItemId {
        self.id
    }

    fn from_draft(
        draft: TestimonialDraft,
        id: ItemId,
        _today: NaiveDate,
    ) -> Result<Self, DraftError> {
        draft.validate()?;
        Ok(Self {
            id,
            name: draft.name.trim().to_string(),
            role: draft.role.trim().to_string(),
            company: draft.company.trim().to_string(),
            content: draft.content.trim().to_string(),
            rating: draft.rating,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn testimonial(name: &str, role: &str, company: &str) -> Testimonial {
        let draft = TestimonialDraft {
            name: name.to_string(),
            role: role.to_string(),
            company: company.to_string(),
            content: "Great to work with".to_string(),
            ..Default::default()
        };
        let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        Testimonial::from_draft(draft, ItemId::new(), today).unwrap()
    }

    #[test]
    fn test_byline() {
        assert_eq!(
            testimonial("Sarah", "Senior Developer", "Tech Solutions Inc").byline(),
            "Senior Developer at Tech Solutions Inc"
        );
        assert_eq!(testimonial("Sarah", "Tech Lead", "").byline(), "Tech Lead");
        assert_eq!(testimonial("Sarah", "", "StartupHub").byline(), "StartupHub");
        assert_eq!(testimonial("Sarah", " ", "").byline(), "");
    }

    #[test]
    fn test_initial() {
        assert_eq!(testimonial("emily", "", "").initial(), "E");
        assert_eq!(testimonial("Élodie", "", "").initial(), "É");
    }

    #[test]
    fn test_rating_bounds() {
        let mut draft = TestimonialDraft {
            name: "Michael".to_string(),
            content: "Clean code".to_string(),
            ..Default::default()
        };
        assert!(draft.is_complete());
        draft.rating = 0;
        assert_eq!(draft.validate(), Err(DraftError::InvalidRating(0)));
        draft.rating = 6;
        assert_eq!(draft.validate(), Err(DraftError::InvalidRating(6)));
        draft.rating = 1;
        assert!(draft.is_complete());
    }
}
