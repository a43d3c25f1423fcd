use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

use blobposter::{
    ColorRgba, FloatRange, PosterConfig, PosterSession, RandomStream, RenderParameters,
    RenderTrigger, generate_palette, ui_bounds,
};

#[derive(Parser, Debug)]
#[command(name = "blobposter", version)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a poster and write it as PNG.
    Render(RenderArgs),
    /// Print the pastel palette a seed produces.
    Palette(PaletteArgs),
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// JSON config with `params` and `settings`; flags override it.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output PNG path.
    #[arg(long, default_value = "poster.png")]
    out: PathBuf,

    /// Random seed.
    #[arg(long, value_parser = clap::value_parser!(u64).range(0..=ui_bounds::SEED_MAX))]
    seed: Option<u64>,

    /// Pick a random seed instead of `--seed`.
    #[arg(long, conflicts_with = "seed")]
    shuffle_seed: bool,

    /// Background color (#RRGGBB).
    #[arg(long, value_parser = parse_color)]
    background: Option<ColorRgba>,

    /// Number of blob layers.
    #[arg(long, value_parser = clap::value_parser!(u32).range(ui_bounds::LAYERS.0 as i64..=ui_bounds::LAYERS.1 as i64))]
    layers: Option<u32>,

    /// Palette size.
    #[arg(long, value_parser = clap::value_parser!(u32).range(ui_bounds::PALETTE.0 as i64..=ui_bounds::PALETTE.1 as i64))]
    palette: Option<u32>,

    /// Points per blob outline.
    #[arg(long, value_parser = clap::value_parser!(u32).range(ui_bounds::POINTS.0 as i64..=ui_bounds::POINTS.1 as i64))]
    points: Option<u32>,

    /// Wobble range as MIN,MAX.
    #[arg(long, value_parser = parse_wobble)]
    wobble: Option<FloatRange>,

    /// Radius range as MIN,MAX.
    #[arg(long, value_parser = parse_radius)]
    radius: Option<FloatRange>,

    /// Alpha range as MIN,MAX.
    #[arg(long, value_parser = parse_alpha)]
    alpha: Option<FloatRange>,

    /// Hide the title and subtitle.
    #[arg(long)]
    no_label: bool,

    /// Override the export resolution.
    #[arg(long)]
    dpi: Option<u32>,

    /// Extra directory with label fonts.
    #[arg(long)]
    font_dir: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct PaletteArgs {
    /// Random seed.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Number of colors.
    #[arg(long, default_value_t = 6)]
    count: usize,

    /// Skip the pastel lift.
    #[arg(long)]
    no_pastel: bool,

    /// Print a JSON array instead of one hex color per line.
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Palette(args) => cmd_palette(args),
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
        .with_writer(std::io::stderr)
        .init();
}

fn read_config(path: Option<&Path>) -> anyhow::Result<PosterConfig> {
    match path {
        Some(p) => PosterConfig::from_path(p).with_context(|| format!("load '{}'", p.display())),
        None => Ok(PosterConfig::default()),
    }
}

fn apply_overrides(mut params: RenderParameters, args: &RenderArgs) -> RenderParameters {
    if let Some(seed) = args.seed {
        params.seed = seed;
    }
    if let Some(bg) = args.background {
        params.background = bg;
    }
    if let Some(n) = args.layers {
        params.n_layers = n;
    }
    if let Some(k) = args.palette {
        params.k_palette = k;
    }
    if let Some(p) = args.points {
        params.points = p;
    }
    if let Some(r) = args.wobble {
        params.wobble = r;
    }
    if let Some(r) = args.radius {
        params.radius = r;
    }
    if let Some(r) = args.alpha {
        params.alpha = r;
    }
    if args.no_label {
        params.label_on = false;
    }
    params
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let mut cfg = read_config(args.config.as_deref())?;
    if let Some(dpi) = args.dpi {
        cfg.settings.export_dpi = dpi;
    }
    if let Some(dir) = &args.font_dir {
        cfg.settings.font_dir = Some(dir.clone());
    }
    let params = apply_overrides(cfg.params.clone(), &args);
    params
        .validate_ui_bounds()
        .context("poster parameters out of range")?;

    let mut session = PosterSession::new(cfg.settings, params, RenderTrigger::OnGenerate);
    if args.shuffle_seed {
        let seed = session.shuffle_seed()?;
        eprintln!("seed {seed}");
    }

    let png = session.export_png()?;

    if let Some(parent) = args.out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(&args.out, &png.bytes)
        .with_context(|| format!("write png '{}'", args.out.display()))?;

    tracing::info!(
        seed = session.params().seed,
        width = png.width,
        height = png.height,
        bytes = png.bytes.len(),
        "exported poster"
    );
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_palette(args: PaletteArgs) -> anyhow::Result<()> {
    let mut stream = RandomStream::new(args.seed);
    let palette = generate_palette(args.count, !args.no_pastel, Some(args.seed), &mut stream)?;
    if args.json {
        println!("{}", serde_json::to_string(&palette.to_hex())?);
    } else {
        for hex in palette.to_hex() {
            println!("{hex}");
        }
    }
    Ok(())
}

fn parse_color(s: &str) -> Result<ColorRgba, String> {
    ColorRgba::from_hex(s)
}

fn parse_range(s: &str, (lo, hi): (f64, f64)) -> Result<FloatRange, String> {
    let (a, b) = s
        .split_once(',')
        .ok_or_else(|| format!("expected MIN,MAX, got \"{s}\""))?;
    let parse = |v: &str| {
        v.trim()
            .parse::<f64>()
            .map_err(|e| format!("invalid number \"{v}\": {e}"))
    };
    let range = FloatRange::new(parse(a)?, parse(b)?);
    if range.min > range.max {
        return Err(format!("min {} is greater than max {}", range.min, range.max));
    }
    if range.min < lo || range.max > hi {
        return Err(format!("range must lie within [{lo}, {hi}]"));
    }
    Ok(range)
}

fn parse_wobble(s: &str) -> Result<FloatRange, String> {
    parse_range(s, ui_bounds::WOBBLE)
}

fn parse_radius(s: &str) -> Result<FloatRange, String> {
    parse_range(s, ui_bounds::RADIUS)
}

fn parse_alpha(s: &str) -> Result<FloatRange, String> {
    parse_range(s, ui_bounds::ALPHA)
}
