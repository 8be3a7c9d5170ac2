use super::Config;
use crate::error::SceneFetchError;
use config::Config as ConfigBuilder;

pub fn load_config(config_path: &str) -> Result<Config, SceneFetchError> {
    let config_builder = ConfigBuilder::builder()
        .add_source(config::File::with_name(config_path))
        .build()?;

    config_builder.try_deserialize().map_err(Into::into)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenes::{Product, ThumbnailFormat, ThumbnailSize};
    use std::path::PathBuf;

    #[test]
    fn test_load_yaml_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scenefetch.yaml");
        std::fs::write(
            &path,
            "download:\n  directory: /data/scenes\n  product: visual\n  concurrency: 4\n",
        )
        .unwrap();

        let config = load_config(path.to_str().unwrap()).unwrap();

        assert_eq!(
            config.download.directory,
            Some(PathBuf::from("/data/scenes"))
        );
        assert_eq!(config.download.product, Product::Visual);
        assert_eq!(config.download.concurrency, 4);
        assert_eq!(config.download.size, ThumbnailSize::Lg);
        assert_eq!(config.download.format, ThumbnailFormat::Png);
        assert_eq!(config.http.connect_timeout_secs, Some(30));
    }

    #[test]
    fn test_load_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scenefetch.toml");
        std::fs::write(
            &path,
            "[download]\nsize = \"sm\"\nformat = \"jpg\"\n\n[http]\ntimeout_secs = 120\n",
        )
        .unwrap();

        let config = load_config(path.to_str().unwrap()).unwrap();

        assert_eq!(config.download.size, ThumbnailSize::Sm);
        assert_eq!(config.download.format, ThumbnailFormat::Jpg);
        assert_eq!(config.download.concurrency, 16);
        assert_eq!(config.http.timeout_secs, Some(120));
    }

    #[test]
    fn test_unknown_fields_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scenefetch.yaml");
        std::fs::write(&path, "download:\n  concurency: 4\n").unwrap();

        let err = load_config(path.to_str().unwrap()).unwrap_err();

        assert!(matches!(err, SceneFetchError::Config(_)));
    }
}
