use crate::api::models::PreviewResult;
use crate::extract::ExtractedUrl;
use crate::metadata::PageMetadata;

/// Builds the final preview from whatever extraction produced, substituting
/// a deterministic fallback for each missing field. The domain always comes
/// from the URL itself, never from page metadata, so every field of the
/// result is a non-empty string.
pub fn synthesize(
    metadata: PageMetadata,
    link: &ExtractedUrl,
    fallback_image: &str,
) -> PreviewResult {
    let domain = link.host().to_owned();

    PreviewResult {
        title: metadata
            .title
            .filter(|title| !title.is_empty())
            .unwrap_or_else(|| domain.clone()),
        description: metadata
            .description
            .filter(|description| !description.is_empty())
            .unwrap_or_else(|| link.raw.clone()),
        image: metadata
            .image
            .filter(|image| !image.is_empty())
            .unwrap_or_else(|| fallback_image.to_owned()),
        domain,
    }
}
