use crate::domain::model::{BlogPost, BloggerPost};
use crate::utils::error::{FeedError, Result};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use regex::Regex;
use std::sync::LazyLock;

static SLUG_SEPARATOR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-z0-9]+").unwrap());

static IMG_SRC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"<img[^>]+src="([^">]+)""#).unwrap());

pub fn slugify(title: &str) -> String {
    let lowered = title.to_lowercase();
    SLUG_SEPARATOR
        .replace_all(&lowered, "-")
        .trim_matches('-')
        .to_string()
}

/// First `<img src="...">` in the content, otherwise `placeholder`.
pub fn extract_thumbnail(content: &str, placeholder: &str) -> String {
    IMG_SRC
        .captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| placeholder.to_string())
}

/// Date portion of an upstream timestamp, taken verbatim.
pub fn iso_date(published: &str) -> &str {
    published.split('T').next().unwrap_or(published)
}

/// Parses an upstream `published` value, keeping the offset it was written in.
///
/// Blogger sends RFC 3339 in the blog's own timezone, so the calendar day
/// matches the date prefix. Offset-less timestamps and bare dates are read as UTC.
pub fn parse_published(published: &str) -> Option<DateTime<FixedOffset>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(published) {
        return Some(dt);
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(published, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc().fixed_offset());
    }
    NaiveDate::parse_from_str(published, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc().fixed_offset())
}

/// en-US long form, e.g. `June 1, 2025`.
pub fn format_long_date(instant: &DateTime<FixedOffset>) -> String {
    instant.format("%B %-d, %Y").to_string()
}

pub fn normalize_post(post: BloggerPost, placeholder: &str) -> Result<BlogPost> {
    let instant = parse_published(&post.published).ok_or_else(|| FeedError::InvalidPost {
        id: post.id.clone(),
        message: format!("unparseable published timestamp '{}'", post.published),
    })?;

    let published_date_iso = iso_date(&post.published).to_string();
    if NaiveDate::parse_from_str(&published_date_iso, "%Y-%m-%d").is_err() {
        return Err(FeedError::InvalidPost {
            id: post.id,
            message: format!("date part '{}' is not a calendar date", published_date_iso),
        });
    }

    Ok(BlogPost {
        thumbnail: extract_thumbnail(&post.content, placeholder),
        published_date: format_long_date(&instant),
        published_date_iso,
        slug: slugify(&post.title),
        id: post.id,
        title: post.title,
        content: post.content,
    })
}

/// Newest first by calendar date; equal dates keep their upstream order.
pub fn sort_newest_first(posts: &mut [BlogPost]) {
    posts.sort_by(|a, b| b.published_on().cmp(&a.published_on()));
}
