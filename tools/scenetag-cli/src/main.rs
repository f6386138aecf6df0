//! scenetag
//!
//! Reads a video's tracks with MediaInfo, classifies the release and prints
//! (or applies) a scene-style filename and tracker title.

mod inspect;
mod settings;

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use scenetag_core::{Engine, LookupCandidate, NamingOutcome, TrackSet};
use scenetag_lookup::{TmdbClient, best_match};

use crate::settings::Settings;

/// CLI arguments
#[derive(Parser)]
#[command(name = "scenetag")]
#[command(about = "Build scene-style release names from video files")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Settings file (default: <config dir>/scenetag/config.toml)
    #[arg(short, long, env = "SCENETAG_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// TMDb API key; enables title lookup
    #[arg(long, env = "TMDB_API_KEY", hide_env_values = true, global = true)]
    tmdb_key: Option<String>,

    /// TMDb language for localized titles, e.g. it-IT
    #[arg(long, global = true)]
    language: Option<String>,

    /// Seconds to wait for mediainfo
    #[arg(long, default_value_t = 30, global = true)]
    mediainfo_timeout: u64,

    /// Debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the scene name and tracker title for a file
    Name {
        file: PathBuf,
        /// Saved MediaInfo JSON report or track set instead of running mediainfo
        #[arg(short, long)]
        tracks: Option<PathBuf>,
        /// Also print the extracted metadata
        #[arg(short, long)]
        report: bool,
        /// Print the full outcome as JSON
        #[arg(long)]
        json: bool,
        /// Skip the TMDb title lookup
        #[arg(long)]
        no_lookup: bool,
    },
    /// Rename a file to its scene name
    Rename {
        file: PathBuf,
        #[arg(short, long)]
        tracks: Option<PathBuf>,
        /// Show the new name without renaming
        #[arg(short = 'n', long)]
        dry_run: bool,
        #[arg(long)]
        no_lookup: bool,
    },
    /// Print the title search query derived from a filename
    Query {
        name: String,
        #[arg(long)]
        json: bool,
    },
    /// Print the tracks read from a file as JSON (usable with --tracks)
    Inspect { file: PathBuf },
    /// Name JSON lines `{"filename": ..., "tracks": ...}` from stdin
    Batch,
}

struct App {
    engine: Engine,
    settings: Settings,
    tmdb: Option<TmdbClient>,
    mediainfo_timeout: Duration,
}

impl App {
    fn new(cli: &Cli) -> Result<Self> {
        let mut settings = Settings::load(cli.config.as_deref())?;
        if let Some(language) = &cli.language {
            settings.lookup.language = Some(language.clone());
        }
        let engine = Engine::new(settings.naming.clone()).context("invalid naming settings")?;

        let tmdb = match cli.tmdb_key.as_deref().filter(|k| !k.trim().is_empty()) {
            Some(key) => {
                let mut client = TmdbClient::new(key, settings.lookup.timeout())?;
                if let Some(url) = &settings.lookup.base_url {
                    client = client.with_base_url(url);
                }
                if let Some(language) = &settings.lookup.language {
                    client = client.with_language(language);
                }
                Some(client)
            }
            None => {
                debug!("no TMDb key, title lookup disabled");
                None
            }
        };

        Ok(Self {
            engine,
            settings,
            tmdb,
            mediainfo_timeout: Duration::from_secs(cli.mediainfo_timeout.max(1)),
        })
    }

    fn tracks(&self, file: &Path, saved: Option<&Path>) -> Result<TrackSet> {
        match saved {
            Some(path) => inspect::load_tracks_file(path),
            None => inspect::run_mediainfo(file, self.mediainfo_timeout),
        }
    }

    /// Looks the title up; failures fall back to the filename title.
    fn lookup(&self, file_name: &str) -> Option<LookupCandidate> {
        let client = self.tmdb.as_ref()?;
        let query = self.engine.search_query(file_name);
        match client.search(&query.query, query.kind) {
            Ok(hits) => {
                let best = best_match(&query.query, hits, self.settings.lookup.min_score);
                match &best {
                    Some(c) => info!(title = %c.title, date = ?c.date, "matched title"),
                    None => info!(query = %query.query, "no confident title match"),
                }
                best
            }
            Err(e) => {
                warn!(error = %e, query = %query.query, "title lookup failed, using filename title");
                None
            }
        }
    }

    fn outcome(&self, file: &Path, saved: Option<&Path>, lookup: bool) -> Result<NamingOutcome> {
        let name = file_name_of(file)?;
        let tracks = self.tracks(file, saved)?;
        let candidate = if lookup { self.lookup(&name) } else { None };
        Ok(self.engine.classify_and_name(&name, &tracks, candidate.as_ref()))
    }
}

fn file_name_of(path: &Path) -> Result<String> {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .with_context(|| format!("{} has no file name", path.display()))
}

/// Target path for a rename, or `None` when the file already has that name.
fn plan_rename(file: &Path, new_name: &str) -> Result<Option<PathBuf>> {
    if Path::new(new_name).file_name().and_then(|n| n.to_str()) != Some(new_name) {
        bail!("{new_name:?} is not a plain file name");
    }
    let target = file.with_file_name(new_name);
    if target == file {
        return Ok(None);
    }
    if target.exists() {
        bail!("refusing to overwrite existing {}", target.display());
    }
    Ok(Some(target))
}

#[derive(Debug, Deserialize)]
struct BatchInput {
    filename: String,
    #[serde(default)]
    tracks: TrackSet,
}

#[derive(Debug, Serialize)]
struct BatchOutput {
    input: String,
    #[serde(flatten)]
    outcome: Option<NamingOutcome>,
    error: Option<String>,
}

/// One batch line: a JSON object or a bare filename.
fn batch_line(engine: &Engine, line: &str) -> BatchOutput {
    let parsed = if line.starts_with('{') {
        serde_json::from_str::<BatchInput>(line)
    } else {
        Ok(BatchInput {
            filename: line.to_string(),
            tracks: TrackSet::default(),
        })
    };

    match parsed {
        Ok(input) => BatchOutput {
            outcome: Some(engine.classify_and_name(&input.filename, &input.tracks, None)),
            input: input.filename,
            error: None,
        },
        Err(e) => BatchOutput {
            input: line.to_string(),
            outcome: None,
            error: Some(e.to_string()),
        },
    }
}

fn run_batch(engine: &Engine) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for line in stdin.lock().lines() {
        let line = line.context("failed to read stdin")?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let output = batch_line(engine, line);
        writeln!(out, "{}", serde_json::to_string(&output)?)?;
    }
    Ok(())
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let app = App::new(&cli)?;

    match &cli.command {
        Commands::Name {
            file,
            tracks,
            report,
            json,
            no_lookup,
        } => {
            let outcome = app.outcome(file, tracks.as_deref(), !no_lookup)?;
            if *json {
                println!("{}", serde_json::to_string_pretty(&outcome)?);
            } else {
                if *report {
                    println!("{}\n", outcome.metadata);
                }
                println!("{}", outcome.filename);
                println!("{}", outcome.tracker_title);
            }
        }
        Commands::Rename {
            file,
            tracks,
            dry_run,
            no_lookup,
        } => {
            let outcome = app.outcome(file, tracks.as_deref(), !no_lookup)?;
            match plan_rename(file, &outcome.filename)? {
                None => println!("{} is already named", file.display()),
                Some(target) if *dry_run => {
                    println!("{} -> {}", file.display(), target.display());
                }
                Some(target) => {
                    std::fs::rename(file, &target).with_context(|| {
                        format!("failed to rename {} to {}", file.display(), target.display())
                    })?;
                    info!(from = %file.display(), to = %target.display(), "renamed");
                    println!("{}", target.display());
                }
            }
        }
        Commands::Query { name, json } => {
            let query = app.engine.search_query(name);
            if *json {
                println!("{}", serde_json::to_string(&query)?);
            } else {
                println!("{}\t{}", query.kind, query.query);
            }
        }
        Commands::Inspect { file } => {
            let tracks = app.tracks(file, None)?;
            println!("{}", serde_json::to_string_pretty(&tracks)?);
        }
        Commands::Batch => run_batch(&app.engine)?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_subcommands() {
        let cli = Cli::try_parse_from([
            "scenetag",
            "name",
            "Movie.mkv",
            "--tracks",
            "report.json",
            "--no-lookup",
            "--report",
        ])
        .unwrap();
        match cli.command {
            Commands::Name {
                file,
                tracks,
                report,
                json,
                no_lookup,
            } => {
                assert_eq!(file, PathBuf::from("Movie.mkv"));
                assert_eq!(tracks, Some(PathBuf::from("report.json")));
                assert!(report && no_lookup && !json);
            }
            _ => panic!("expected name"),
        }

        let cli = Cli::try_parse_from(["scenetag", "rename", "-n", "a.mkv"]).unwrap();
        assert!(matches!(cli.command, Commands::Rename { dry_run: true, .. }));
    }

    #[test]
    fn file_names() {
        assert_eq!(
            file_name_of(Path::new("/media/films/Black.Dog.mkv")).unwrap(),
            "Black.Dog.mkv"
        );
        assert!(file_name_of(Path::new("/")).is_err());
    }

    #[test]
    fn batch_accepts_objects_and_bare_names() {
        let engine = Engine::with_defaults().unwrap();

        let out = batch_line(
            &engine,
            r#"{"filename": "Black.Dog.2024.1080p.BluRay.DD5.1.x264-iSlaNd.mkv", "tracks": {"tracks": [
                {"track_type": "Video", "width": 1920, "height": 1080, "format": "AVC",
                 "writing_library": "x264 - core 164"},
                {"track_type": "Audio", "format": "AC-3", "channels": 6, "language": "en"}
            ]}}"#,
        );
        assert!(out.error.is_none());
        assert_eq!(
            out.outcome.as_ref().map(|o| o.filename.as_str()),
            Some("Black.Dog.2024.1080p.BluRay.DD5.1.x264-iSlaNd.mkv")
        );

        let out = batch_line(&engine, "Some Film 2010.mkv");
        assert_eq!(out.input, "Some Film 2010.mkv");
        assert!(out.outcome.is_some());

        let out = batch_line(&engine, "{not json");
        assert!(out.outcome.is_none());
        let json = serde_json::to_value(&out).unwrap();
        assert_eq!(json["input"], "{not json");
        assert!(json["error"].is_string());
    }

    #[test]
    fn rename_planning() {
        let dir = std::env::temp_dir().join(format!("scenetag-rename-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let file = dir.join("old.mkv");
        fs::write(&file, b"").unwrap();

        assert_eq!(plan_rename(&file, "old.mkv").unwrap(), None);
        assert_eq!(
            plan_rename(&file, "New.Name.mkv").unwrap(),
            Some(dir.join("New.Name.mkv"))
        );

        fs::write(dir.join("taken.mkv"), b"").unwrap();
        assert!(plan_rename(&file, "taken.mkv").is_err());
        assert!(plan_rename(&file, "Face/Off.1997.mkv").is_err());
        assert!(plan_rename(&file, "..").is_err());

        fs::remove_dir_all(&dir).unwrap();
    }
}
