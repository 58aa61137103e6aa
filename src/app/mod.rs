//! Command-line entry point: asset preparation and quick access to the helpers.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Result, bail};
use clap::{Args, Parser, Subcommand, ValueEnum, ValueHint};
use tracing_subscriber::EnvFilter;

use sharedkit::assets::{Assets, MobileAssets, SyncOutcome, WebAssets, sync_assets};
use sharedkit::models::{AssetManifest, AssetSource, Platform};
use sharedkit::utils::{format_bytes, sanitize_asset_path, slugify};

#[derive(Debug, Parser)]
#[command(name = "sharedkit", version, about = "Shared asset and formatting tools")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Copy shared images into the app asset directory under legal names.
    SyncAssets(SyncArgs),
    /// Print the resource-legal form of each file name.
    Sanitize {
        #[arg(required = true, value_hint = ValueHint::FilePath)]
        names: Vec<String>,
    },
    /// Resolve a symbolic asset name for a platform.
    Resolve(ResolveArgs),
    /// Turn text into a URL slug.
    Slugify {
        #[arg(required = true)]
        text: Vec<String>,
    },
    /// Format a byte count with binary units.
    Bytes { bytes: u64 },
}

#[derive(Debug, Args)]
struct SyncArgs {
    /// JSON asset manifest; defaults to the monorepo layout.
    #[arg(long, value_hint = ValueHint::FilePath)]
    manifest: Option<PathBuf>,
    /// Shared image directory (overrides the manifest).
    #[arg(long, env = "SHAREDKIT_SOURCE_DIR", value_hint = ValueHint::DirPath)]
    source: Option<PathBuf>,
    /// App asset directory (overrides the manifest).
    #[arg(long, env = "SHAREDKIT_TARGET_DIR", value_hint = ValueHint::DirPath)]
    target: Option<PathBuf>,
}

#[derive(Debug, Args)]
struct ResolveArgs {
    /// Symbolic name such as `logo`.
    name: String,
    #[arg(long, value_enum, default_value_t = PlatformArg::Web)]
    platform: PlatformArg,
    #[arg(long, value_hint = ValueHint::FilePath)]
    manifest: Option<PathBuf>,
    /// App asset directory scanned for mobile lookups.
    #[arg(long, env = "SHAREDKIT_TARGET_DIR", value_hint = ValueHint::DirPath)]
    asset_dir: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PlatformArg {
    Web,
    Mobile,
}

impl From<PlatformArg> for Platform {
    fn from(arg: PlatformArg) -> Self {
        match arg {
            PlatformArg::Web => Platform::Web,
            PlatformArg::Mobile => Platform::Mobile,
        }
    }
}

/// Parse arguments, run the command, and map failures to a non-zero exit.
pub fn run() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();
    match dispatch(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::SyncAssets(args) => run_sync(args),
        Command::Sanitize { names } => {
            for name in names {
                let sanitized = sanitize_asset_path(Path::new(&name));
                println!("{name} -> {}", sanitized.display());
            }
            Ok(())
        }
        Command::Resolve(args) => {
            println!("{}", resolve(args)?);
            Ok(())
        }
        Command::Slugify { text } => {
            println!("{}", slugify(&text.join(" ")));
            Ok(())
        }
        Command::Bytes { bytes } => {
            println!("{}", format_bytes(bytes));
            Ok(())
        }
    }
}

fn load_manifest(path: Option<&Path>) -> Result<AssetManifest> {
    match path {
        Some(path) => AssetManifest::load(path),
        None => Ok(AssetManifest::default()),
    }
}

fn run_sync(args: SyncArgs) -> Result<()> {
    let mut manifest = load_manifest(args.manifest.as_deref())?;
    if let Some(source) = args.source {
        manifest.source_dir = source;
    }
    if let Some(target) = args.target {
        manifest.target_dir = target;
    }

    let report = sync_assets(&manifest)?;
    for asset in &report.assets {
        let verb = match asset.outcome {
            SyncOutcome::Copied => "copied",
            SyncOutcome::Unchanged => "unchanged",
        };
        println!(
            "{verb:<9} {} -> {}",
            asset.source.display(),
            asset.target.display()
        );
    }
    for mismatch in &report.mismatches {
        eprintln!(
            "warning: {} has extension .{} but contains {:?} data",
            mismatch.path.display(),
            mismatch.extension,
            mismatch.detected
        );
    }
    println!(
        "{} copied, {} unchanged, {} skipped",
        report.copied(),
        report.unchanged(),
        report.skipped.len()
    );
    Ok(())
}

/// Line printed for a resolved asset: the web path, or a mobile handle
/// followed by the file behind it.
fn resolve(args: ResolveArgs) -> Result<String> {
    let manifest = load_manifest(args.manifest.as_deref())?;
    let platform = Platform::from(args.platform);

    let line = match platform {
        Platform::Web => Assets::new(WebAssets::from_manifest(&manifest))
            .get_image_source_str(&args.name)
            .map(|source| source.to_string()),
        Platform::Mobile => {
            let dir = args.asset_dir.unwrap_or_else(|| manifest.target_dir.clone());
            let mobile = Assets::new(MobileAssets::scan(&dir, &manifest)?);
            mobile
                .get_image_source_str(&args.name)
                .map(|source| match source {
                    AssetSource::Handle(handle) => match mobile.provider().path_of(handle) {
                        Some(path) => format!("{handle} {}", path.display()),
                        None => handle.to_string(),
                    },
                    other => other.to_string(),
                })
        }
    };

    match line {
        Some(line) => Ok(line),
        None => bail!("No asset named {:?} for {platform}", args.name),
    }
}
