//! Full-catalog text search with match highlighting.
//!
//! The query is always treated as literal text: matching is a
//! case-insensitive substring scan, never pattern syntax, so queries
//! containing `.`, `*` or other special characters match only themselves.

use super::catalog::NavigationCatalog;

/// Scanning stops as soon as this many hits are collected.
pub const MAX_RESULTS: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub module_id: &'static str,
    pub module_label: &'static str,
    pub category_title: &'static str,
    pub item_key: &'static str,
    pub item_label: &'static str,
}

/// Scans the (already permission-filtered) catalog for `query`.
///
/// An item is a hit when any of item label, category title or module label
/// contains the query. Hits come out in catalog traversal order (module,
/// then category, then item), capped at [`MAX_RESULTS`]. A blank query
/// yields no hits (the browse view is shown instead).
pub fn search(catalog: &NavigationCatalog, query: &str) -> Vec<SearchHit> {
    let query = query.trim();
    if query.is_empty() {
        return Vec::new();
    }

    let mut hits = Vec::new();
    'scan: for module in &catalog.modules {
        for category in &module.categories {
            for item in &category.items {
                if contains_ignore_case(item.label, query)
                    || contains_ignore_case(category.title, query)
                    || contains_ignore_case(module.label, query)
                {
                    hits.push(SearchHit {
                        module_id: module.id,
                        module_label: module.label,
                        category_title: category.title,
                        item_key: item.key,
                        item_label: item.label,
                    });
                    if hits.len() == MAX_RESULTS {
                        break 'scan;
                    }
                }
            }
        }
    }
    hits
}

/// Splits `text` into `(segment, is_match)` runs, marking every
/// case-insensitive occurrence of `query`. Segments always break on char
/// boundaries and concatenate back to the original text.
pub fn highlight(text: &str, query: &str) -> Vec<(String, bool)> {
    let query = query.trim();
    if query.is_empty() {
        return vec![(text.to_string(), false)];
    }

    let mut segments = Vec::new();
    let mut cursor = 0;
    while let Some((start, len)) = find_ignore_case(text, query, cursor) {
        if start > cursor {
            segments.push((text[cursor..start].to_string(), false));
        }
        segments.push((text[start..start + len].to_string(), true));
        cursor = start + len;
    }
    if cursor < text.len() {
        segments.push((text[cursor..].to_string(), false));
    }
    segments
}

pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    find_ignore_case(haystack, needle, 0).is_some()
}

fn chars_eq_ignore_case(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

/// Byte length of the prefix of `haystack` matching `needle`
/// case-insensitively, if any. Whole chars only.
fn match_len_at(haystack: &str, needle: &str) -> Option<usize> {
    let mut len = 0;
    let mut haystack_chars = haystack.chars();
    for needle_char in needle.chars() {
        let haystack_char = haystack_chars.next()?;
        if !chars_eq_ignore_case(haystack_char, needle_char) {
            return None;
        }
        len += haystack_char.len_utf8();
    }
    Some(len)
}

/// First case-insensitive occurrence of `needle` in `haystack[from..]`,
/// as `(byte_start, byte_len)` in `haystack` coordinates.
fn find_ignore_case(haystack: &str, needle: &str, from: usize) -> Option<(usize, usize)> {
    let tail = haystack.get(from..)?;
    for (offset, _) in tail.char_indices() {
        if let Some(len) = match_len_at(&tail[offset..], needle) {
            return Some((from + offset, len));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::catalog::{NavCategory, NavItem, NavModule, NavigationCatalog};

    fn synthetic_catalog(labels: Vec<&'static str>) -> NavigationCatalog {
        NavigationCatalog {
            modules: vec![NavModule {
                id: "m1",
                label: "Module",
                description: "",
                icon: "home",
                permission: None,
                categories: vec![NavCategory {
                    title: "Catégorie",
                    items: labels
                        .into_iter()
                        .map(|label| NavItem {
                            key: label,
                            label,
                            icon: "list",
                            permission: None,
                        })
                        .collect(),
                }],
            }],
        }
    }

    #[test]
    fn test_blank_query_returns_nothing() {
        let catalog = synthetic_catalog(vec!["Partenaires"]);
        assert!(search(&catalog, "").is_empty());
        assert!(search(&catalog, "   ").is_empty());
    }

    #[test]
    fn test_case_insensitive_substring() {
        let catalog = synthetic_catalog(vec!["Validation BC", "Blocages clients"]);
        let hits = search(&catalog, "VALID");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].item_label, "Validation BC");
    }

    #[test]
    fn test_matches_category_and_module_labels_too() {
        let catalog = synthetic_catalog(vec!["Sans rapport"]);
        // "Catégorie" and "Module" both cover every item of the synthetic
        // catalog, so any of the three fields brings the item in.
        assert_eq!(search(&catalog, "catégorie").len(), 1);
        assert_eq!(search(&catalog, "module").len(), 1);
        assert_eq!(search(&catalog, "rapport").len(), 1);
        assert!(search(&catalog, "absent").is_empty());
    }

    #[test]
    fn test_query_is_literal_not_a_pattern() {
        let catalog = synthetic_catalog(vec!["version a.b", "version axb"]);
        let hits = search(&catalog, "a.b");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].item_label, "version a.b");
    }

    #[test]
    fn test_cap_at_50_in_traversal_order() {
        let labels: Vec<&'static str> = (0..60)
            .map(|i| {
                let s: &'static str = Box::leak(format!("article {i:02}").into_boxed_str());
                s
            })
            .collect();
        let catalog = synthetic_catalog(labels);
        let hits = search(&catalog, "a");
        assert_eq!(hits.len(), MAX_RESULTS);
        assert_eq!(hits[0].item_label, "article 00");
        assert_eq!(hits[49].item_label, "article 49");
    }

    #[test]
    fn test_highlight_segments() {
        let segments = highlight("Validation Partenaires", "a");
        let rebuilt: String = segments.iter().map(|(s, _)| s.as_str()).collect();
        assert_eq!(rebuilt, "Validation Partenaires");
        assert_eq!(
            segments
                .iter()
                .filter(|(s, hit)| *hit && s.eq_ignore_ascii_case("a"))
                .count(),
            segments.iter().filter(|(_, hit)| *hit).count()
        );
        assert_eq!(segments.iter().filter(|(_, hit)| *hit).count(), 4);
    }

    #[test]
    fn test_highlight_is_case_insensitive_and_exact() {
        let segments = highlight("BC à valider / Validation BC", "bc");
        let marked: Vec<&str> = segments
            .iter()
            .filter(|(_, hit)| *hit)
            .map(|(s, _)| s.as_str())
            .collect();
        assert_eq!(marked, vec!["BC", "BC"]);
    }

    #[test]
    fn test_highlight_handles_accented_text() {
        let segments = highlight("Paramétrage", "MÉTRA");
        assert_eq!(
            segments,
            vec![
                ("Para".to_string(), false),
                ("métra".to_string(), true),
                ("ge".to_string(), false),
            ]
        );
    }

    #[test]
    fn test_highlight_without_match_is_one_plain_segment() {
        assert_eq!(
            highlight("Stocks", "zzz"),
            vec![("Stocks".to_string(), false)]
        );
    }
}
