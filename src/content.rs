mod post;
mod project;
mod seed;
mod testimonial;

pub use post::{BlogPost, PostDraft, POST_CATEGORIES};
pub use project::{Project, ProjectDraft};
pub use seed::{load_posts, load_projects, load_testimonials, Assets, ContentError};
pub use testimonial::{Testimonial, TestimonialDraft};

use std::{fmt, str::FromStr};

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(Uuid);

impl ItemId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for ItemId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("rating must be between 1 and 5, got {0}")]
    InvalidRating(u8),
}

pub trait Validate {
    fn validate(&self) -> Result<(), DraftError>;

    fn is_complete(&self) -> bool {
        self.validate().is_ok()
    }
}

/// Returns an error naming `field` when `value` is blank.
pub(crate) fn require(field: &'static str, value: &str) -> Result<(), DraftError> {
    if value.trim().is_empty() {
        Err(DraftError::MissingField(field))
    } else {
        Ok(())
    }
}

/// A displayable record that users can add to and remove from a [`ContentList`].
pub trait ContentItem: Sized {
    type Draft: Validate;

    fn id(&self) -> ItemId;

    /// Builds the item from a draft. `today` is used by items that carry a creation date.
    fn from_draft(draft: Self::Draft, id: ItemId, today: NaiveDate) -> Result<Self, DraftError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Front,
    Back,
}

#[derive(Debug, Clone)]
pub struct ContentList<T> {
    items: Vec<T>,
    placement: Placement,
}

impl<T: ContentItem> ContentList<T> {
    pub fn new(placement: Placement) -> Self {
        Self::with_items(placement, Vec::new())
    }

    pub fn with_items(placement: Placement, items: Vec<T>) -> Self {
        Self { items, placement }
    }

    pub fn add(&mut self, draft: T::Draft) -> Result<ItemId, DraftError> {
        self.add_on(draft, Utc::now().date_naive())
    }

    pub fn add_on(&mut self, draft: T::Draft, today: NaiveDate) -> Result<ItemId, DraftError> {
        draft.validate()?;
        let mut id = ItemId::new();
        while self.get(id).is_some() {
            id = ItemId::new();
        }
        let item = T::from_draft(draft, id, today)?;
        match self.placement {
            Placement::Front => self.items.insert(0, item),
            Placement::Back => self.items.push(item),
        }
        Ok(id)
    }

    /// Returns whether anything was removed.
    pub fn remove(&mut self, id: ItemId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id() != id);
        self.items.len() != before
    }

    pub fn get(&self, id: ItemId) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Splits a comma separated input into tags, dropping blanks.
pub fn parse_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn post_draft(title: &str) -> PostDraft {
        PostDraft {
            title: title.to_string(),
            excerpt: "A short summary".to_string(),
            content: "Some words about things".to_string(),
            read_time: "2 min read".to_string(),
            tags: parse_tags("Rust, Leptos"),
            category: "Tutorials".to_string(),
        }
    }

    fn project_draft(title: &str) -> ProjectDraft {
        ProjectDraft {
            title: title.to_string(),
            description: "Does a thing".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_parse_tags() {
        assert_eq!(parse_tags("React, Node.js ,, SQL "), vec!["React", "Node.js", "SQL"]);
        assert!(parse_tags("  ,  ").is_empty());
        assert!(parse_tags("").is_empty());
    }

    #[test]
    fn test_add_valid_item() {
        let mut posts = ContentList::<BlogPost>::new(Placement::Front);
        let id = posts
            .add_on(post_draft("First"), date(2025, 1, 15))
            .expect("complete draft should be accepted");
        assert_eq!(posts.len(), 1);

        let post = posts.get(id).expect("new post should be retrievable");
        assert_eq!(post.title, "First");
        assert_eq!(post.date, date(2025, 1, 15));
        assert_eq!(post.tags, vec!["Rust", "Leptos"]);
    }

    #[test]
    fn test_add_missing_field_is_noop() {
        let mut posts = ContentList::<BlogPost>::new(Placement::Front);
        posts.add_on(post_draft("Keep me"), date(2025, 1, 1)).unwrap();

        let mut draft = post_draft("No excerpt");
        draft.excerpt = "   ".to_string();
        assert_eq!(
            posts.add_on(draft, date(2025, 1, 2)),
            Err(DraftError::MissingField("excerpt"))
        );
        assert_eq!(posts.len(), 1);

        let mut projects = ContentList::<Project>::new(Placement::Back);
        assert_eq!(
            projects.add(project_draft("")),
            Err(DraftError::MissingField("title"))
        );
        assert!(projects.is_empty());
    }

    #[test]
    fn test_placement() {
        let mut posts = ContentList::<BlogPost>::new(Placement::Front);
        posts.add_on(post_draft("older"), date(2025, 1, 1)).unwrap();
        posts.add_on(post_draft("newer"), date(2025, 1, 2)).unwrap();
        let titles = posts.iter().map(|p| p.title.as_str()).collect::<Vec<_>>();
        assert_eq!(titles, vec!["newer", "older"]);

        let mut projects = ContentList::<Project>::new(Placement::Back);
        projects.add(project_draft("one")).unwrap();
        projects.add(project_draft("two")).unwrap();
        let titles = projects.iter().map(|p| p.title.as_str()).collect::<Vec<_>>();
        assert_eq!(titles, vec!["one", "two"]);
    }

    #[test]
    fn test_remove() {
        let mut projects = ContentList::<Project>::new(Placement::Back);
        let a = projects.add(project_draft("a")).unwrap();
        let b = projects.add(project_draft("b")).unwrap();
        let c = projects.add(project_draft("c")).unwrap();

        assert!(projects.remove(b));
        assert_eq!(projects.len(), 2);
        assert!(projects.get(b).is_none());

        // absent ids leave the list alone
        assert!(!projects.remove(b));
        assert!(!projects.remove(ItemId::new()));
        assert_eq!(projects.len(), 2);

        let ids = projects.iter().map(|p| p.id).collect::<Vec<_>>();
        assert_eq!(ids, vec![a, c]);
    }

    #[test]
    fn test_testimonials_add_and_remove() {
        let mut testimonials = ContentList::<Testimonial>::new(Placement::Back);
        let id = testimonials
            .add(TestimonialDraft {
                name: " Grace ".to_string(),
                content: "Great to work with".to_string(),
                rating: 4,
                ..Default::default()
            })
            .unwrap();
        let added = testimonials.get(id).unwrap();
        assert_eq!(added.name, "Grace");
        assert_eq!(added.rating, 4);

        let out_of_range = TestimonialDraft {
            name: "Linus".to_string(),
            content: "Six stars".to_string(),
            rating: 6,
            ..Default::default()
        };
        assert_eq!(
            testimonials.add(out_of_range),
            Err(DraftError::InvalidRating(6))
        );
        assert_eq!(testimonials.len(), 1);

        assert!(testimonials.remove(id));
        assert!(testimonials.is_empty());
    }

    #[test]
    fn test_rapid_adds_get_unique_ids() {
        let mut projects = ContentList::<Project>::new(Placement::Back);
        let mut ids = (0..200)
            .map(|i| projects.add(project_draft(&format!("p{i}"))).unwrap())
            .collect::<Vec<_>>();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 200);
        assert_eq!(projects.len(), 200);
    }

    #[test]
    fn test_item_id_round_trip_through_string() {
        let id = ItemId::new();
        let parsed = id.to_string().parse::<ItemId>().unwrap();
        assert_eq!(id, parsed);
        assert!("not-a-uuid".parse::<ItemId>().is_err());
    }
}
