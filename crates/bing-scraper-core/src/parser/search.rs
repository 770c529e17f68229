//! Search results parser for Bing
//!
//! Parses HTML from a results page and extracts the organic entries.

use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use crate::error::{Result, ScrapeError};
use crate::types::SearchResult;

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Selectors used on every results page
struct ResultSelectors {
    entry: Selector,
    link: Selector,
    title: Selector,
    caption: Selector,
}

impl ResultSelectors {
    fn new() -> Result<Self> {
        Ok(Self {
            entry: selector("li.b_algo")?,
            link: selector("a")?,
            title: selector("h2")?,
            caption: selector("div.b_caption p")?,
        })
    }
}

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css)
        .map_err(|e| ScrapeError::ParseError(format!("Invalid selector '{}': {:?}", css, e)))
}

/// Parses a results page and returns its organic results
///
/// # Arguments
/// * `html` - Raw HTML of one results page
/// * `rank_offset` - Number of results already collected in this run;
///   the first result here gets `rank_offset + 1`
///
/// # Returns
/// Results in document order. Entries whose link is empty, `#` or
/// site-relative are dropped without consuming a rank.
///
/// # Errors
/// Returns `ParseError` if a selector cannot be compiled
pub fn parse_search_results(html: &str, rank_offset: usize) -> Result<Vec<SearchResult>> {
    let selectors = ResultSelectors::new()?;
    let document = Html::parse_document(html);

    let mut results = Vec::new();
    let mut rank = rank_offset + 1;

    for entry in document.select(&selectors.entry) {
        if let Some(result) = parse_entry(&entry, &selectors, rank) {
            results.push(result);
            rank += 1;
        }
    }

    Ok(results)
}

/// Parses a single `li.b_algo` entry
///
/// # Returns
/// `Some(SearchResult)` if the entry links to an external page, `None` otherwise
fn parse_entry(
    entry: &ElementRef,
    selectors: &ResultSelectors,
    rank: usize,
) -> Option<SearchResult> {
    let link = entry
        .select(&selectors.link)
        .next()
        .and_then(|a| a.value().attr("href"))
        .unwrap_or_default()
        .trim();

    if !is_organic_link(link) {
        return None;
    }

    Some(SearchResult {
        rank,
        url: link.to_string(),
        title: collect_text(entry, &selectors.title),
        description: collect_text(entry, &selectors.caption),
    })
}

/// Keeps absolute links, drops empty, `#` and same-site paths
fn is_organic_link(link: &str) -> bool {
    !link.is_empty() && link != "#" && !link.starts_with('/')
}

/// Concatenated text of every match, with whitespace runs collapsed
fn collect_text(entry: &ElementRef, selector: &Selector) -> String {
    let text: String = entry
        .select(selector)
        .flat_map(|el| el.text())
        .collect();
    WHITESPACE.replace_all(text.trim(), " ").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(href: Option<&str>, title: &str, desc: &str) -> String {
        let anchor = match href {
            Some(href) => format!(r#"<a href="{}">{}</a>"#, href, title),
            None => format!("<a>{}</a>", title),
        };
        format!(
            r#"<li class="b_algo"><h2>{}</h2><div class="b_caption"><p>{}</p></div></li>"#,
            anchor, desc
        )
    }

    fn page(entries: &[String]) -> String {
        format!(
            r#"<html><body><ol id="b_results">{}</ol></body></html>"#,
            entries.concat()
        )
    }

    #[test]
    fn test_parse_empty_html() {
        let results = parse_search_results("<html><body></body></html>", 0).unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn test_parse_single_result() {
        let html = page(&[entry(
            Some("https://github.com/"),
            "GitHub: Let's build from here",
            "GitHub is where over 100 million developers shape the future of software.",
        )]);

        let results = parse_search_results(&html, 0).unwrap();
        assert_eq!(results.len(), 1);

        let result = &results[0];
        assert_eq!(result.rank, 1);
        assert_eq!(result.url, "https://github.com/");
        assert_eq!(result.title, "GitHub: Let's build from here");
        assert_eq!(
            result.description,
            "GitHub is where over 100 million developers shape the future of software."
        );
    }

    #[test]
    fn test_filter_skips_without_consuming_rank() {
        let html = page(&[
            entry(Some("#"), "Anchor", ""),
            entry(Some("https://first.example/"), "First", "one"),
            entry(Some(""), "Empty", ""),
            entry(Some("/images/search?q=rust"), "Internal", ""),
            entry(Some("https://second.example/page"), "Second", "two"),
        ]);

        let results = parse_search_results(&html, 10).unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].rank, 11);
        assert_eq!(results[0].url, "https://first.example/");
        assert_eq!(results[1].rank, 12);
        assert_eq!(results[1].url, "https://second.example/page");
    }

    #[test]
    fn test_anchor_without_href_is_skipped() {
        let html = page(&[
            entry(None, "No link", ""),
            entry(Some("https://kept.example/"), "Kept", ""),
        ]);

        let results = parse_search_results(&html, 0).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].rank, 1);
        assert_eq!(results[0].title, "Kept");
    }

    #[test]
    fn test_href_is_trimmed() {
        let html = page(&[entry(Some("  https://padded.example/  "), "Padded", "")]);
        let results = parse_search_results(&html, 0).unwrap();
        assert_eq!(results[0].url, "https://padded.example/");
    }

    #[test]
    fn test_missing_title_and_caption_are_empty() {
        let html = r#"
        <html><body><ol>
            <li class="b_algo"><a href="https://bare.example/"></a></li>
        </ol></body></html>
        "#;

        let results = parse_search_results(html, 0).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "");
        assert_eq!(results[0].description, "");
    }

    #[test]
    fn test_text_whitespace_is_collapsed() {
        let html = r#"
        <html><body><ol>
            <li class="b_algo">
                <h2>
                    <a href="https://spaced.example/">Rust
                        Programming   Language</a>
                </h2>
                <div class="b_caption">
                    <p>A language empowering
                       everyone.</p>
                </div>
            </li>
        </ol></body></html>
        "#;

        let results = parse_search_results(html, 0).unwrap();
        assert_eq!(results[0].title, "Rust Programming Language");
        assert_eq!(results[0].description, "A language empowering everyone.");
    }

    #[test]
    fn test_non_organic_entries_are_ignored() {
        let html = r#"
        <html><body><ol>
            <li class="b_ad"><a href="https://ad.example/">Ad</a></li>
            <li class="b_algo"><h2><a href="https://organic.example/">Organic</a></h2></li>
            <li class="b_ans"><a href="https://widget.example/">Related</a></li>
        </ol></body></html>
        "#;

        let results = parse_search_results(html, 0).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].url, "https://organic.example/");
    }

    #[test]
    fn test_is_organic_link() {
        assert!(is_organic_link("https://example.com"));
        assert!(is_organic_link("http://example.com/path"));
        assert!(!is_organic_link(""));
        assert!(!is_organic_link("#"));
        assert!(!is_organic_link("/search?q=x"));
    }
}
