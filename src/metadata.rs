use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use url::Url;

// Static selectors to avoid recompiling them on every request
static OG_TITLE: Lazy<Selector> = Lazy::new(|| parse_selector(r#"meta[property="og:title"]"#));
static TWITTER_TITLE: Lazy<Selector> = Lazy::new(|| parse_selector(r#"meta[name="twitter:title"]"#));
static TITLE_TAG: Lazy<Selector> = Lazy::new(|| parse_selector("title"));

static OG_DESCRIPTION: Lazy<Selector> =
    Lazy::new(|| parse_selector(r#"meta[property="og:description"]"#));
static TWITTER_DESCRIPTION: Lazy<Selector> =
    Lazy::new(|| parse_selector(r#"meta[name="twitter:description"]"#));
static META_DESCRIPTION: Lazy<Selector> =
    Lazy::new(|| parse_selector(r#"meta[name="description"]"#));

static OG_IMAGE: Lazy<Selector> = Lazy::new(|| parse_selector(r#"meta[property="og:image"]"#));
static TWITTER_IMAGE: Lazy<Selector> =
    Lazy::new(|| parse_selector(r#"meta[name="twitter:image"]"#));
static IMAGE_SRC_LINK: Lazy<Selector> = Lazy::new(|| parse_selector(r#"link[rel="image_src"]"#));

fn parse_selector(css: &str) -> Selector {
    Selector::parse(css).expect("Failed to parse selector")
}

/// Best-effort metadata pulled from a page. Values are trimmed and never
/// empty strings.
#[derive(Debug, Clone, Default)]
pub struct PageMetadata {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
}

/// Extraction capability: given HTML and the page URL, return candidate
/// title/description/image values.
pub trait MetadataExtractor: Send + Sync {
    fn extract(&self, html: &str, url: &Url) -> PageMetadata;
}

/// Extractor composed of per-field rule chains; for each field the first
/// rule yielding a non-empty value wins.
pub struct MetaTagExtractor;

impl MetadataExtractor for MetaTagExtractor {
    fn extract(&self, html: &str, url: &Url) -> PageMetadata {
        let document = Html::parse_document(html);

        let title = meta_content(&document, &OG_TITLE)
            .or_else(|| meta_content(&document, &TWITTER_TITLE))
            .or_else(|| element_text(&document, &TITLE_TAG));

        let description = meta_content(&document, &OG_DESCRIPTION)
            .or_else(|| meta_content(&document, &TWITTER_DESCRIPTION))
            .or_else(|| meta_content(&document, &META_DESCRIPTION));

        let image = meta_content(&document, &OG_IMAGE)
            .or_else(|| meta_content(&document, &TWITTER_IMAGE))
            .or_else(|| link_href(&document, &IMAGE_SRC_LINK))
            .and_then(|candidate| resolve_image(url, &candidate));

        PageMetadata {
            title,
            description,
            image,
        }
    }
}

fn meta_content(document: &Html, selector: &Selector) -> Option<String> {
    document
        .select(selector)
        .next()
        .and_then(|element| element.value().attr("content"))
        .map(|content| content.trim().to_owned())
        .filter(|content| !content.is_empty())
}

fn element_text(document: &Html, selector: &Selector) -> Option<String> {
    document
        .select(selector)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_owned())
        .filter(|text| !text.is_empty())
}

fn link_href(document: &Html, selector: &Selector) -> Option<String> {
    document
        .select(selector)
        .next()
        .and_then(|element| element.value().attr("href"))
        .map(|href| href.trim().to_owned())
        .filter(|href| !href.is_empty())
}

/// Resolves protocol-relative and page-relative image candidates against
/// the page URL; candidates that cannot be resolved are discarded.
fn resolve_image(page: &Url, candidate: &str) -> Option<String> {
    if candidate.starts_with("http://") || candidate.starts_with("https://") {
        Some(candidate.to_owned())
    } else if let Some(rest) = candidate.strip_prefix("//") {
        Some(format!("https://{rest}"))
    } else {
        page.join(candidate).ok().map(|resolved| resolved.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(html: &str) -> PageMetadata {
        let url = Url::parse("https://example.com/post/1").unwrap();
        MetaTagExtractor.extract(html, &url)
    }

    #[test]
    fn prefers_open_graph_tags() {
        let meta = extract(
            r#"<html><head>
                <meta property="og:title" content="OG Title" />
                <meta property="og:description" content="OG description" />
                <meta property="og:image" content="https://example.com/cover.png" />
                <title>Document Title</title>
                <meta name="description" content="Plain description" />
            </head><body></body></html>"#,
        );

        assert_eq!(meta.title.as_deref(), Some("OG Title"));
        assert_eq!(meta.description.as_deref(), Some("OG description"));
        assert_eq!(meta.image.as_deref(), Some("https://example.com/cover.png"));
    }

    #[test]
    fn falls_back_to_document_tags() {
        let meta = extract(
            r#"<html><head>
                <title>  Document Title  </title>
                <meta name="description" content="Plain description" />
            </head><body></body></html>"#,
        );

        assert_eq!(meta.title.as_deref(), Some("Document Title"));
        assert_eq!(meta.description.as_deref(), Some("Plain description"));
        assert_eq!(meta.image, None);
    }

    #[test]
    fn twitter_tags_beat_document_tags() {
        let meta = extract(
            r#"<html><head>
                <meta name="twitter:title" content="Card Title" />
                <title>Document Title</title>
            </head><body></body></html>"#,
        );

        assert_eq!(meta.title.as_deref(), Some("Card Title"));
    }

    #[test]
    fn empty_tag_values_are_skipped() {
        let meta = extract(
            r#"<html><head>
                <meta property="og:title" content="   " />
                <title>Document Title</title>
            </head><body></body></html>"#,
        );

        assert_eq!(meta.title.as_deref(), Some("Document Title"));
    }

    #[test]
    fn bare_page_yields_nothing() {
        let meta = extract("<html><head></head><body><p>hi</p></body></html>");

        assert_eq!(meta.title, None);
        assert_eq!(meta.description, None);
        assert_eq!(meta.image, None);
    }

    #[test]
    fn relative_images_resolve_against_the_page() {
        let meta = extract(
            r#"<html><head>
                <meta property="og:image" content="/img/cover.png" />
            </head><body></body></html>"#,
        );

        assert_eq!(
            meta.image.as_deref(),
            Some("https://example.com/img/cover.png")
        );
    }

    #[test]
    fn protocol_relative_images_get_a_scheme() {
        let meta = extract(
            r#"<html><head>
                <meta property="og:image" content="//cdn.example.com/cover.png" />
            </head><body></body></html>"#,
        );

        assert_eq!(
            meta.image.as_deref(),
            Some("https://cdn.example.com/cover.png")
        );
    }
}
