mod args;
mod download;
mod params;
mod resolved_command;
mod tile_url;

pub use args::{Args, Command, parse_args};
pub use download::run_download;
pub use params::{DownloadParams, TileUrlParams};
pub use resolved_command::{ResolvedCommand, resolve_command};
pub use tile_url::run_tile_url;
