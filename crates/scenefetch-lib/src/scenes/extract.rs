use super::error::ScenesError;
use super::model::{Product, ProductSelection, Scene, SceneCollection};
use url::Url;

/// Resolves the download URL of the selected product for every scene.
pub fn product_urls(
    scenes: &SceneCollection,
    selection: &ProductSelection,
) -> Result<Vec<String>, ScenesError> {
    scenes
        .features
        .iter()
        .map(|scene| product_url(scene, selection))
        .collect()
}

pub fn product_url(scene: &Scene, selection: &ProductSelection) -> Result<String, ScenesError> {
    let missing = || ScenesError::MissingProduct {
        scene: scene.display_id().to_string(),
        product: selection.product.to_string(),
    };

    match selection.product {
        Product::Thumbnail => {
            let link = scene.properties.links.thumbnail.as_deref().ok_or_else(missing)?;
            thumbnail_url(link, selection).map_err(|source| ScenesError::InvalidLink {
                scene: scene.display_id().to_string(),
                product: selection.product.to_string(),
                url: link.to_string(),
                source,
            })
        }
        product => scene
            .properties
            .data
            .as_ref()
            .and_then(|data| data.products.get(product.as_str()))
            .and_then(|links| links.full.clone())
            .ok_or_else(missing),
    }
}

/// Sets the `size` and `format` query parameters on a thumbnail link, keeping any other
/// parameters already present.
fn thumbnail_url(link: &str, selection: &ProductSelection) -> Result<String, url::ParseError> {
    let mut url = Url::parse(link)?;
    let kept: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(key, _)| key != "size" && key != "format")
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    url.query_pairs_mut()
        .clear()
        .extend_pairs(kept)
        .append_pair("size", selection.size.as_str())
        .append_pair("format", selection.format.as_str());

    Ok(url.into())
}
