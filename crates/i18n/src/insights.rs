//! Insights article listing: filtering by category and pagination.

use serde::Serialize;
use serde_json::Value;

use crate::bundle::Bundle;

/// Default number of articles per page.
pub const DEFAULT_PER_PAGE: usize = 6;

/// What the listing shows for one article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArticleSummary {
    pub id: String,
    pub title: String,
    pub category: String,
    pub date: String,
}

impl ArticleSummary {
    /// Reads the listing fields of article `id` from its own node. The id is
    /// a map key, so it never goes back through key-path parsing. Missing or
    /// non-string fields show their key path, like any unresolved translation.
    fn read(namespace: &str, id: &str, node: &Value) -> Self {
        let field = |name: &str| match node.get(name).and_then(Value::as_str) {
            Some(text) => text.to_string(),
            None => format!("{namespace}.{id}.{name}"),
        };
        Self {
            id: id.to_string(),
            title: field("title"),
            category: field("category"),
            date: field("date"),
        }
    }
}

fn article_nodes<'a>(
    bundle: &'a Bundle,
    namespace: &str,
) -> impl Iterator<Item = (&'a String, &'a Value)> {
    bundle
        .resolve_raw(namespace)
        .and_then(Value::as_object)
        .into_iter()
        .flat_map(|articles| articles.iter())
}

/// Articles in bundle order, optionally only those in `category`.
pub fn list_articles(
    bundle: &Bundle,
    namespace: &str,
    category: Option<&str>,
) -> Vec<ArticleSummary> {
    article_nodes(bundle, namespace)
        .map(|(id, node)| ArticleSummary::read(namespace, id, node))
        .filter(|article| category.is_none_or(|c| article.category == c))
        .collect()
}

/// Distinct categories in order of first appearance, for filter controls.
pub fn categories(bundle: &Bundle, namespace: &str) -> Vec<String> {
    let mut seen = Vec::new();
    for article in list_articles(bundle, namespace, None) {
        if !seen.contains(&article.category) {
            seen.push(article.category);
        }
    }
    seen
}

/// One page of a listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_count: usize,
    /// 1-based page number.
    pub page: usize,
    pub per_page: usize,
}

impl<T> Page<T> {
    /// Number of pages; a page built by hand with `per_page == 0` has none.
    pub fn total_pages(&self) -> usize {
        match self.per_page {
            0 => 0,
            per_page => self.total_count.div_ceil(per_page),
        }
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }
}

/// Cuts page `page` (1-based; 0 is treated as 1) out of `items`.
/// A `per_page` of 0 uses [`DEFAULT_PER_PAGE`]. Pages past the end are empty.
pub fn paginate<T>(items: Vec<T>, page: usize, per_page: usize) -> Page<T> {
    let per_page = if per_page == 0 {
        DEFAULT_PER_PAGE
    } else {
        per_page
    };
    let page = page.max(1);
    let total_count = items.len();
    let items = items
        .into_iter()
        .skip((page - 1).saturating_mul(per_page))
        .take(per_page)
        .collect();

    Page {
        items,
        total_count,
        page,
        per_page,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::bundle::DEFAULT_NAMESPACE;

    fn bundle() -> Bundle {
        Bundle::new(json!({
            "insights": { "articles": {
                "ski-season": { "title": "Ski season", "category": "Guides", "date": "2024-01-10" },
                "guest-app": { "title": "Guest app", "category": "Product", "date": "2024-02-02" },
                "summer-trails": { "title": "Summer trails", "category": "Guides" }
            } }
        }))
    }

    #[test]
    fn test_list_in_bundle_order() {
        let articles = list_articles(&bundle(), DEFAULT_NAMESPACE, None);
        let ids: Vec<_> = articles.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, ["ski-season", "guest-app", "summer-trails"]);
        assert_eq!(articles[1].title, "Guest app");
    }

    #[test]
    fn test_missing_field_shows_key() {
        let articles = list_articles(&bundle(), DEFAULT_NAMESPACE, None);
        assert_eq!(articles[2].date, "insights.articles.summer-trails.date");
    }

    #[test]
    fn test_ids_with_dots_and_brackets_keep_fields() {
        let bundle = Bundle::new(json!({
            "insights": { "articles": {
                "release-2.0": { "title": "Release 2.0", "category": "News", "date": "2024-03-01" },
                "top[1]": { "title": "Top pick", "category": "News" },
                "other": { "title": "Other", "category": "Guides", "date": 5 }
            } }
        }));

        let news = list_articles(&bundle, DEFAULT_NAMESPACE, Some("News"));
        assert_eq!(news.len(), 2);
        assert_eq!(news[0].title, "Release 2.0");
        assert_eq!(news[0].date, "2024-03-01");
        assert_eq!(news[1].id, "top[1]");
        assert_eq!(news[1].title, "Top pick");
        assert_eq!(news[1].date, "insights.articles.top[1].date");

        let other = list_articles(&bundle, DEFAULT_NAMESPACE, Some("Guides"));
        assert_eq!(other[0].date, "insights.articles.other.date");
    }

    #[test]
    fn test_filter_by_category() {
        let guides = list_articles(&bundle(), DEFAULT_NAMESPACE, Some("Guides"));
        assert_eq!(guides.len(), 2);
        assert!(guides.iter().all(|a| a.category == "Guides"));
        assert!(list_articles(&bundle(), DEFAULT_NAMESPACE, Some("Events")).is_empty());
    }

    #[test]
    fn test_missing_namespace_lists_nothing() {
        assert!(list_articles(&bundle(), "blog.posts", None).is_empty());
    }

    #[test]
    fn test_categories() {
        assert_eq!(categories(&bundle(), DEFAULT_NAMESPACE), ["Guides", "Product"]);
    }

    #[test]
    fn test_paginate() {
        let page = paginate((1..=14).collect::<Vec<_>>(), 2, 6);
        assert_eq!(page.items, vec![7, 8, 9, 10, 11, 12]);
        assert_eq!(page.total_count, 14);
        assert_eq!(page.total_pages(), 3);
        assert!(page.has_previous());
        assert!(page.has_next());

        let last = paginate((1..=14).collect::<Vec<_>>(), 3, 6);
        assert_eq!(last.items, vec![13, 14]);
        assert!(!last.has_next());
    }

    #[test]
    fn test_paginate_edges() {
        let first = paginate(vec!['a', 'b'], 0, 0);
        assert_eq!(first.page, 1);
        assert_eq!(first.per_page, DEFAULT_PER_PAGE);
        assert_eq!(first.items, vec!['a', 'b']);

        let past_end = paginate(vec!['a', 'b'], 5, 1);
        assert!(past_end.items.is_empty());
        assert_eq!(past_end.total_pages(), 2);

        let empty = paginate(Vec::<u8>::new(), 1, 6);
        assert_eq!(empty.total_pages(), 0);
        assert!(!empty.has_next());
    }

    #[test]
    fn test_hand_built_page_with_zero_per_page() {
        let page = Page {
            items: Vec::<u8>::new(),
            total_count: 3,
            page: 1,
            per_page: 0,
        };
        assert_eq!(page.total_pages(), 0);
        assert!(!page.has_next());
        assert!(!page.has_previous());
    }
}
