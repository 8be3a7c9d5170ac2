use crate::cli::TileUrlParams;
use crate::error::SceneFetchError;
use crate::tiles::TileLayer;

pub fn run_tile_url(params: TileUrlParams) -> Result<(), SceneFetchError> {
    let layer = TileLayer::from_template(&params.template, params.api_key.as_deref())?;
    tracing::debug!(subdomains = %layer.subdomains, "Expanded tile template");

    if params.json {
        println!("{}", serde_json::to_string_pretty(&layer)?);
    } else {
        println!("{}", layer.url_template);
        println!("subdomains: {}", layer.subdomains);
    }
    Ok(())
}
