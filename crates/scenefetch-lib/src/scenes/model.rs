use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// A scene search result as returned by the imagery API.
///
/// Only the fields needed to locate products are modelled; everything else in the
/// document is ignored.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct SceneCollection {
    #[serde(default)]
    pub features: Vec<Scene>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct Scene {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub properties: SceneProperties,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct SceneProperties {
    #[serde(default)]
    pub links: SceneLinks,
    #[serde(default)]
    pub data: Option<SceneData>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct SceneLinks {
    #[serde(default)]
    pub thumbnail: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct SceneData {
    #[serde(default)]
    pub products: HashMap<String, ProductLinks>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ProductLinks {
    #[serde(default)]
    pub full: Option<String>,
}

impl Scene {
    pub fn display_id(&self) -> &str {
        self.id.as_deref().unwrap_or("<unnamed>")
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Product {
    #[default]
    Thumbnail,
    Analytic,
    Visual,
    Qa,
}

impl Product {
    pub fn as_str(&self) -> &'static str {
        match self {
            Product::Thumbnail => "thumbnail",
            Product::Analytic => "analytic",
            Product::Visual => "visual",
            Product::Qa => "qa",
        }
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ThumbnailSize {
    Sm,
    Md,
    #[default]
    Lg,
}

impl ThumbnailSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThumbnailSize::Sm => "sm",
            ThumbnailSize::Md => "md",
            ThumbnailSize::Lg => "lg",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ThumbnailFormat {
    #[default]
    Png,
    Jpg,
}

impl ThumbnailFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThumbnailFormat::Png => "png",
            ThumbnailFormat::Jpg => "jpg",
        }
    }
}

/// Which rendition of each scene to fetch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ProductSelection {
    pub product: Product,
    pub size: ThumbnailSize,
    pub format: ThumbnailFormat,
}
