use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "adcraft", version)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render every creative of a campaign as PNG files.
    Generate(GenerateArgs),
    /// Print the creatives a campaign expands to without rendering them.
    Plan(PlanArgs),
    /// Write an interactive HTML editor page for a campaign.
    Editor(EditorArgs),
    /// List the built-in ad sizes.
    Sizes(SizesArgs),
}

#[derive(Parser, Debug)]
struct GenerateArgs {
    /// Input campaign JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output directory.
    #[arg(long)]
    out: PathBuf,

    /// Render creatives in parallel.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,

    /// Creatives rendered per parallel chunk.
    #[arg(long, default_value_t = 32)]
    chunk_size: usize,

    /// Also write gallery.html with previews and download links.
    #[arg(long, default_value_t = false)]
    gallery: bool,
}

#[derive(Parser, Debug)]
struct PlanArgs {
    /// Input campaign JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Print jobs as JSON instead of one line each.
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Parser, Debug)]
struct EditorArgs {
    /// Input campaign JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output HTML path.
    #[arg(long)]
    out: PathBuf,

    /// Only include the first N creatives.
    #[arg(long)]
    limit: Option<usize>,
}

#[derive(Parser, Debug)]
struct SizesArgs {
    /// Only list one channel.
    #[arg(long)]
    channel: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Generate(args) => cmd_generate(args),
        Command::Plan(args) => cmd_plan(args),
        Command::Editor(args) => cmd_editor(args),
        Command::Sizes(args) => cmd_sizes(args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn load_campaign(path: &Path) -> anyhow::Result<adcraft::Campaign> {
    let campaign = adcraft::Campaign::from_path(path)
        .with_context(|| format!("load campaign '{}'", path.display()))?;
    campaign.validate()?;
    Ok(campaign)
}

fn cmd_generate(args: GenerateArgs) -> anyhow::Result<()> {
    let campaign = load_campaign(&args.in_path)?;
    let jobs = adcraft::plan_campaign(&campaign)?;

    let opts = adcraft::BatchOpts {
        parallel: args.parallel,
        chunk_size: args.chunk_size,
        threads: args.threads,
    };
    let runner = adcraft::BatchRunner::with_opts(&campaign, opts)?;

    let mut sink = adcraft::DirSink::new(&args.out);
    if args.gallery {
        sink = sink.with_gallery();
    }
    let stats = runner
        .run(&jobs, &mut sink)
        .with_context(|| format!("render into '{}'", args.out.display()))?;

    eprintln!(
        "wrote {} of {} creatives to {}",
        stats.rendered,
        stats.planned,
        args.out.display()
    );
    Ok(())
}

fn cmd_plan(args: PlanArgs) -> anyhow::Result<()> {
    let campaign = load_campaign(&args.in_path)?;
    let jobs = adcraft::plan_campaign(&campaign)?;
    if args.json {
        let json = serde_json::to_string_pretty(&jobs).context("serialize plan")?;
        println!("{json}");
    } else {
        for job in &jobs {
            println!("{}", job.summary());
        }
        eprintln!("{} creatives", jobs.len());
    }
    Ok(())
}

fn cmd_editor(args: EditorArgs) -> anyhow::Result<()> {
    let campaign = load_campaign(&args.in_path)?;
    let mut jobs = adcraft::plan_campaign(&campaign)?;
    if let Some(n) = args.limit {
        jobs.truncate(n);
    }

    let runner = adcraft::BatchRunner::new(&campaign)?;
    let items = runner.editor_items(&jobs)?;
    let html = adcraft::render_editor_html(&items)?;

    if let Some(parent) = args.out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(&args.out, html)
        .with_context(|| format!("write editor '{}'", args.out.display()))?;

    eprintln!("wrote {} ({} creatives)", args.out.display(), items.len());
    Ok(())
}

fn cmd_sizes(args: SizesArgs) -> anyhow::Result<()> {
    let channels = match &args.channel {
        Some(c) => vec![c.as_str()],
        None => adcraft::catalog::channels(),
    };
    for channel in channels {
        let sizes = adcraft::catalog::channel_sizes(channel)
            .with_context(|| format!("unknown channel '{channel}'"))?;
        let labels = sizes.iter().map(|s| s.label()).collect::<Vec<_>>();
        println!("{channel}: {}", labels.join(" "));
    }
    Ok(())
}
