mod error;
mod extract;
mod model;
mod source;

pub use error::ScenesError;
pub use extract::{product_url, product_urls};
pub use model::{
    Product, ProductLinks, ProductSelection, Scene, SceneCollection, SceneData, SceneLinks,
    SceneProperties, ThumbnailFormat, ThumbnailSize,
};
pub use source::{load_scenes, parse_scenes};
