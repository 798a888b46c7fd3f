use std::cell::RefCell;
use std::rc::Rc;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::AppError;

const POSTS_JSON: &str = include_str!("../../content/posts.json");

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub date: NaiveDate,
    pub author: String,
    pub image: String,
    pub tags: Vec<String>,
}

impl BlogPost {
    /// Body paragraphs, split on blank lines.
    pub fn paragraphs(&self) -> impl Iterator<Item = &str> {
        self.content
            .split("\n\n")
            .map(str::trim)
            .filter(|p| !p.is_empty())
    }

    pub fn short_date(&self) -> String {
        self.date.format("%b %d, %Y").to_string()
    }

    pub fn long_date(&self) -> String {
        self.date.format("%B %d, %Y").to_string()
    }
}

thread_local! {
    static POSTS: RefCell<Option<Rc<[BlogPost]>>> = RefCell::new(None);
}

pub fn parse_posts(json: &str) -> Result<Vec<BlogPost>, AppError> {
    Ok(serde_json::from_str(json)?)
}

/// All posts in source order. Parsed once, then served from the cache.
pub fn posts() -> Result<Rc<[BlogPost]>, AppError> {
    POSTS.with(|cache| {
        if let Some(posts) = cache.borrow().as_ref() {
            return Ok(posts.clone());
        }
        let posts: Rc<[BlogPost]> = parse_posts(POSTS_JSON)?.into();
        *cache.borrow_mut() = Some(posts.clone());
        Ok(posts)
    })
}

pub fn find_post<'a>(posts: &'a [BlogPost], id: &str) -> Option<&'a BlogPost> {
    posts.iter().find(|post| post.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    #[test]
    fn embedded_posts_parse() {
        let posts = posts().unwrap();
        assert!(!posts.is_empty());
    }

    #[test]
    fn slugs_are_unique() {
        let posts = posts().unwrap();
        let ids: HashSet<_> = posts.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), posts.len());
    }

    #[test]
    fn finds_post_by_slug() {
        let posts = posts().unwrap();
        let post = find_post(&posts, "future-of-web-development").unwrap();
        assert_eq!(post.title, "The Future of Web Development in 2024");
        assert_eq!(post.tags.len(), 3);
    }

    #[test]
    fn unknown_slug_is_none() {
        let posts = posts().unwrap();
        assert!(find_post(&posts, "does-not-exist").is_none());
        assert!(find_post(&posts, "").is_none());
    }

    #[test]
    fn splits_paragraphs_on_blank_lines() {
        let post = BlogPost {
            id: "x".into(),
            title: "x".into(),
            excerpt: String::new(),
            content: "first\n\n  second  \n\n\n\nthird\nstill third".into(),
            date: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            author: "me".into(),
            image: String::new(),
            tags: vec![],
        };
        let paragraphs: Vec<_> = post.paragraphs().collect();
        assert_eq!(paragraphs, vec!["first", "second", "third\nstill third"]);
        assert_eq!(post.short_date(), "Jan 05, 2024");
        assert_eq!(post.long_date(), "January 05, 2024");
    }

    #[test]
    fn malformed_content_is_an_error() {
        let err = parse_posts(r#"[{"id": "missing-fields"}]"#).unwrap_err();
        assert!(matches!(err, AppError::Content(_)));
    }
}
