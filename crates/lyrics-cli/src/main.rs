use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use lyrics_acquire::{
    AcquireRequest, AlbumFilter, AssembleOptions, GeniusClient, GeniusConfig, DEFAULT_MAX_RETRIES,
};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "lyrics")]
#[command(about = "Build lyrics training corpora from the Genius API")]
#[command(version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("BUILD_HASH"), ")"))]
struct Cli {
    /// Log level: error, warn, info, debug, trace
    #[arg(long, global = true, default_value = "info", value_enum)]
    log_level: LogLevel,

    /// Use UTC timestamps instead of local time
    #[arg(long, global = true)]
    utc: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, clap::ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch an artist's lyrics and write them as a corpus file
    Acquire {
        #[command(flatten)]
        catalog: CatalogArgs,

        /// Output file; .txt for training text, .json for lyrics grouped by album
        /// [default: data/lyrics/<artist>.txt]
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Attempts per song before a timeout aborts the run
        #[arg(long, default_value_t = DEFAULT_MAX_RETRIES)]
        max_retries: u32,

        /// Stop after collecting this many songs
        #[arg(long)]
        max_songs: Option<usize>,
    },

    /// List the albums that would be used, without fetching lyrics
    Albums {
        #[command(flatten)]
        catalog: CatalogArgs,
    },

    /// Validate a written corpus file (.txt or .json)
    Validate {
        /// Path to the corpus file
        file: String,
    },
}

/// Artist selection and connection settings shared by the catalog commands.
#[derive(Args)]
struct CatalogArgs {
    /// Artist to search for (e.g., "Green Day")
    #[arg(short, long)]
    artist: String,

    /// Skip albums released before this year
    #[arg(long)]
    min_year: Option<u16>,

    /// Skip albums released after this year
    #[arg(long)]
    max_year: Option<u16>,

    /// Skip albums whose title contains this text (case-insensitive; repeatable)
    #[arg(short, long = "exclude", value_name = "TEXT")]
    exclude: Vec<String>,

    /// Genius API access token
    #[arg(long, env = "GENIUS_ACCESS_TOKEN", hide_env_values = true)]
    token: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = lyrics_acquire::config::DEFAULT_TIMEOUT_SECS)]
    timeout_secs: u64,
}

impl CatalogArgs {
    fn filter(&self) -> AlbumFilter {
        AlbumFilter {
            min_year: self.min_year,
            max_year: self.max_year,
            exclude_if_title_contains: self.exclude.clone(),
        }
    }

    fn client(&self) -> Result<GeniusClient> {
        let config = GeniusConfig::new(self.token.as_str())
            .with_timeout(Duration::from_secs(self.timeout_secs));
        GeniusClient::new(config).context("Failed to build HTTP client")
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Map log level, suppressing noisy HTML-parsing crates at debug/trace
    let level = match cli.log_level {
        LogLevel::Error => "error",
        LogLevel::Warn  => "warn",
        LogLevel::Info  => "info",
        LogLevel::Debug => "debug,selectors=warn,html5ever=warn,hyper_util=info",
        LogLevel::Trace => "trace,selectors=warn,html5ever=warn,hyper_util=info",
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    // Timestamp format: 2026-02-14 19:44:09.123 -08:00
    let time_format = "%Y-%m-%d %H:%M:%S%.3f %:z";

    if cli.utc {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_timer(tracing_subscriber::fmt::time::ChronoUtc::new(time_format.to_string()))
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_timer(tracing_subscriber::fmt::time::ChronoLocal::new(time_format.to_string()))
            .init();
    }

    match cli.command {
        Commands::Acquire {
            catalog,
            output,
            max_retries,
            max_songs,
        } => {
            let output = output
                .unwrap_or_else(|| PathBuf::from("data/lyrics").join(format!("{}.txt", catalog.artist)));
            tracing::info!(artist = %catalog.artist, output = %output.display(), "Acquiring lyrics");

            let client = catalog.client()?;
            let request = AcquireRequest {
                artist: catalog.artist.clone(),
                filter: catalog.filter(),
                options: AssembleOptions {
                    max_retries,
                    max_songs,
                },
                output,
            };
            lyrics_acquire::acquire(&client, &request).await?;
        }
        Commands::Albums { catalog } => {
            let client = catalog.client()?;
            let artist = lyrics_acquire::find_artist(&client, &catalog.artist).await?;
            tracing::info!(artist = %artist.name, id = artist.id, "Found artist");

            let albums = lyrics_acquire::fetch_albums(&client, artist.id, &catalog.filter()).await?;
            for album in &albums {
                println!("{}\t{}\t{}", album.id, album.release, album.title);
            }
            tracing::info!(albums = albums.len(), "Listed albums");
        }
        Commands::Validate { file } => {
            tracing::info!(file = %file, "Validating");
            let errors = lyrics_validate::validate(&file)?;
            if !errors.is_empty() {
                anyhow::bail!("{} validation errors in {file}", errors.len());
            }
            tracing::info!("Corpus is valid");
        }
    }

    Ok(())
}
