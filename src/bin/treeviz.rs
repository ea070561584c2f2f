use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "treeviz", version)]
struct Cli {
    /// Log debug output to stderr.
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a laid-out tree as an SVG document.
    Render(RenderArgs),
    /// Print one connector path per link.
    Paths(ViewArgs),
}

#[derive(Parser, Debug)]
struct ViewArgs {
    /// Input tree JSON (nodes carry `id`, `depth`, `x`, `y`, `children`).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Optional view config JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the configured orientation.
    #[arg(long, value_enum)]
    orientation: Option<OrientationChoice>,

    /// Override the configured connector style (unknown names fall back to diagonal).
    #[arg(long)]
    path_func: Option<String>,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    #[command(flatten)]
    view: ViewArgs,

    /// Output SVG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OrientationChoice {
    Horizontal,
    Vertical,
}

impl From<OrientationChoice> for treeviz::Orientation {
    fn from(value: OrientationChoice) -> Self {
        match value {
            OrientationChoice::Horizontal => Self::Horizontal,
            OrientationChoice::Vertical => Self::Vertical,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Paths(args) => cmd_paths(args),
    }
}

fn read_tree_json(path: &Path) -> anyhow::Result<treeviz::TreeNode> {
    let f = File::open(path).with_context(|| format!("open tree '{}'", path.display()))?;
    let r = BufReader::new(f);
    let root: treeviz::TreeNode =
        serde_json::from_reader(r).with_context(|| "parse tree JSON")?;
    root.validate()?;
    Ok(root)
}

fn load_config(args: &ViewArgs) -> anyhow::Result<treeviz::TreeConfig> {
    let mut cfg = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("read config '{}'", path.display()))?;
            treeviz::TreeConfig::from_json_str(&text)
                .with_context(|| format!("parse config '{}'", path.display()))?
        }
        None => treeviz::TreeConfig::default(),
    };
    if let Some(o) = args.orientation {
        cfg.orientation = o.into();
    }
    if let Some(name) = &args.path_func {
        cfg.path_func = treeviz::PathStyle::from_name(name);
    }
    cfg.validate()?;
    Ok(cfg)
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let root = read_tree_json(&args.view.in_path)?;
    let cfg = load_config(&args.view)?;

    let svg = treeviz::render_svg(&root, &cfg, &treeviz::RenderHooks::default())?;

    if let Some(parent) = args.out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(&args.out, svg).with_context(|| format!("write svg '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_paths(args: ViewArgs) -> anyhow::Result<()> {
    let root = read_tree_json(&args.in_path)?;
    let cfg = load_config(&args)?;
    let topology = treeviz::Topology::Builtin(cfg.path_func);

    for link in root.links() {
        let d = treeviz::generate_path(&link, cfg.orientation, &topology, cfg.geometry());
        println!("{}\t{}\t{d}", link.source.id, link.target.id);
    }
    Ok(())
}
