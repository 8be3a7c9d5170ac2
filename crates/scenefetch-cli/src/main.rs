use scenefetch_lib::cli::{
    ResolvedCommand, parse_args, resolve_command, run_download, run_tile_url,
};
use scenefetch_lib::error::SceneFetchError;

#[tokio::main(flavor = "multi_thread")]
async fn main() -> Result<(), SceneFetchError> {
    color_eyre::install()?;

    let args = parse_args();
    let command = resolve_command(args.command)?;

    match command {
        ResolvedCommand::Download(params) => {
            run_download(params).await?;
        }
        ResolvedCommand::TileUrl(params) => run_tile_url(params)?,
    }

    Ok(())
}
