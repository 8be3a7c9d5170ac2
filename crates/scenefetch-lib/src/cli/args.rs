use crate::scenes::{Product, ThumbnailFormat, ThumbnailSize};
use clap::{ArgAction, Parser, Subcommand};
use tracing::Level;
use tracing_subscriber;

#[derive(Debug, Clone)]
pub enum Command {
    Download {
        config_path: Option<String>,
        scenes_path: Option<String>,
        directory: Option<String>,
        product: Option<Product>,
        size: Option<ThumbnailSize>,
        format: Option<ThumbnailFormat>,
        concurrency: Option<usize>,
    },
    TileUrl {
        template: String,
        api_key: Option<String>,
        json: bool,
    },
}

pub struct Args {
    pub command: Command,
    pub log_level: Level,
}

#[derive(Debug, Parser)]
#[command(
    name = "scenefetch",
    version,
    about = "Download satellite scene products listed in a scene search result"
)]
struct Cli {
    #[arg(
        short = 'v',
        long = "verbose",
        help = "Sets the level of verbosity",
        action = ArgAction::Count,
        global = true
    )]
    verbose: u8,

    #[command(subcommand)]
    command: CliCommand,
}

#[derive(Debug, Subcommand)]
enum CliCommand {
    /// Download one product per scene into a directory
    Download {
        #[arg(
            long = "config",
            value_name = "FILE",
            help = "Optional config file with download and HTTP defaults"
        )]
        config: Option<String>,

        #[arg(
            short = 's',
            long = "scenes",
            value_name = "FILE",
            help = "Scenes list (if omitted, stdin is used)"
        )]
        scenes: Option<String>,

        #[arg(
            short = 'd',
            long = "directory",
            value_name = "DIR",
            help = "Output directory (must be an existing directory) [default: current directory]"
        )]
        directory: Option<String>,

        #[arg(
            short = 'p',
            long = "product",
            value_name = "PRODUCT",
            help = "Product to download [default: thumbnail]"
        )]
        product: Option<Product>,

        #[arg(
            short = 'z',
            long = "size",
            value_name = "SIZE",
            help = "Size for thumbnails [default: lg]"
        )]
        size: Option<ThumbnailSize>,

        #[arg(
            short = 'f',
            long = "format",
            value_name = "FORMAT",
            help = "Format for thumbnails [default: png]"
        )]
        format: Option<ThumbnailFormat>,

        #[arg(
            short = 'c',
            long = "concurrency",
            value_name = "N",
            help = "Number of concurrent downloads [default: 16]"
        )]
        concurrency: Option<usize>,
    },

    /// Expand a mosaic tile URL template into a {s} template and subdomain list
    #[command(name = "tile-url", visible_alias = "tile_url")]
    TileUrl {
        #[arg(
            value_name = "TEMPLATE",
            help = "Tile URL template, e.g. https://tiles{0-3}.example.com/{z}/{x}/{y}.png"
        )]
        template: String,

        #[arg(
            long = "api-key",
            value_name = "KEY",
            help = "API key appended to the tile URL"
        )]
        api_key: Option<String>,

        #[arg(long = "json", help = "Print the result as JSON")]
        json: bool,
    },
}

pub fn parse_args() -> Args {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(log_level.into())
                .from_env_lossy(),
        )
        .init();

    let command = match cli.command {
        CliCommand::Download {
            config,
            scenes,
            directory,
            product,
            size,
            format,
            concurrency,
        } => Command::Download {
            config_path: config,
            scenes_path: scenes,
            directory,
            product,
            size,
            format,
            concurrency,
        },
        CliCommand::TileUrl {
            template,
            api_key,
            json,
        } => Command::TileUrl {
            template,
            api_key,
            json,
        },
    };

    Args { command, log_level }
}
