use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use framemap::{
    FramemapConfig, LineSource, MappingParser, MappingTable, ParseOptions, Program, ReaderLines,
    StrLines, TRANSFORM_ALPHABET,
};

#[derive(Parser, Debug)]
#[command(name = "framemap", version)]
struct Cli {
    /// JSON configuration file; flags override its values.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Apply indexed mappings to an identity table and print it as JSON.
    Remap(RemapArgs),
    /// Build a table from a plain list of source frames.
    Simple(SimpleArgs),
    /// Mark frames and ranges as replaced and print the table as JSON.
    Replace(ReplaceArgs),
    /// Rewrite frame ranges through a postfix expression.
    Transform(TransformArgs),
    /// Join range lists with a single space.
    Merge(MergeArgs),
}

#[derive(Args, Debug)]
struct MappingsInput {
    /// Mapping text given inline.
    #[arg(long, conflicts_with = "file")]
    mappings: Option<String>,

    /// Mapping text file.
    #[arg(long)]
    file: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct RemapArgs {
    #[command(flatten)]
    input: MappingsInput,

    /// Number of output frames.
    #[arg(long)]
    frames: Option<u32>,

    /// Number of source frames; defaults to `--frames`.
    #[arg(long)]
    source_frames: Option<u32>,

    /// Clamp or drop out-of-bounds values instead of failing.
    #[arg(long)]
    tolerant: bool,
}

#[derive(Args, Debug)]
struct SimpleArgs {
    #[command(flatten)]
    input: MappingsInput,

    /// Number of source frames.
    #[arg(long)]
    source_frames: Option<u32>,

    /// Clamp out-of-bounds values instead of failing.
    #[arg(long)]
    tolerant: bool,
}

#[derive(Args, Debug)]
struct ReplaceArgs {
    #[command(flatten)]
    input: MappingsInput,

    /// Number of frames shared by both clips.
    #[arg(long)]
    frames: Option<u32>,

    /// Clamp or drop out-of-bounds values instead of failing.
    #[arg(long)]
    tolerant: bool,
}

#[derive(Args, Debug)]
struct TransformArgs {
    #[command(flatten)]
    input: MappingsInput,

    /// Postfix expression over `x`, `r` and `y`.
    #[arg(long)]
    op: Option<String>,

    /// Treat range ends as inclusive.
    #[arg(long)]
    closed: bool,

    /// Evaluate every frame instead of the range boundaries.
    #[arg(long)]
    discrete: bool,
}

#[derive(Args, Debug)]
struct MergeArgs {
    /// Range lists to join.
    parts: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => FramemapConfig::from_path(path)?,
        None => FramemapConfig::default(),
    };

    match cli.cmd {
        Command::Remap(args) => cmd_remap(args, &config),
        Command::Simple(args) => cmd_simple(args, &config),
        Command::Replace(args) => cmd_replace(args, &config),
        Command::Transform(args) => cmd_transform(args, &config),
        Command::Merge(args) => cmd_merge(args),
    }
}

fn open_file(path: &Path) -> anyhow::Result<BufReader<File>> {
    let f = File::open(path).with_context(|| format!("open mappings '{}'", path.display()))?;
    Ok(BufReader::new(f))
}

/// Run `f` over the selected mapping text; no input at all reads as empty.
fn with_source<T>(
    input: &MappingsInput,
    f: impl FnOnce(&mut dyn LineSource) -> anyhow::Result<T>,
) -> anyhow::Result<T> {
    match (&input.mappings, &input.file) {
        (_, Some(path)) => {
            let mut source = ReaderLines::new(open_file(path)?);
            f(&mut source)
        }
        (text, None) => {
            let mut source = StrLines::new(text.as_deref().unwrap_or(""));
            f(&mut source)
        }
    }
}

fn parse_options(tolerant: bool, config: &FramemapConfig) -> ParseOptions {
    ParseOptions {
        tolerant: tolerant || config.parse.tolerant,
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(value).context("serialize table")?;
    println!("{s}");
    Ok(())
}

fn cmd_remap(args: RemapArgs, config: &FramemapConfig) -> anyhow::Result<()> {
    let frames = args
        .frames
        .or(config.frames)
        .context("remap: --frames is required")?;
    let source_frames = args
        .source_frames
        .or(config.source_frames)
        .unwrap_or(frames);
    let options = parse_options(args.tolerant, config);

    let mut table = MappingTable::identity(frames, source_frames);
    with_source(&args.input, |source| {
        MappingParser::new(source, options)
            .parse(&mut table)
            .context("remap: invalid mappings")
    })?;
    print_json(&table)
}

fn cmd_simple(args: SimpleArgs, config: &FramemapConfig) -> anyhow::Result<()> {
    let source_frames = args
        .source_frames
        .or(config.source_frames)
        .context("simple: --source-frames is required")?;
    let options = parse_options(args.tolerant, config);

    let mut table = MappingTable::empty(source_frames);
    let frames = with_source(&args.input, |source| {
        MappingParser::new(source, options)
            .parse_simple(&mut table)
            .context("simple: invalid mappings")
    })?;
    if frames == 0 {
        anyhow::bail!("simple: mappings produced no frame");
    }
    print_json(&serde_json::json!({ "frames": frames, "table": table }))
}

fn cmd_replace(args: ReplaceArgs, config: &FramemapConfig) -> anyhow::Result<()> {
    let frames = args
        .frames
        .or(config.frames)
        .context("replace: --frames is required")?;
    let options = parse_options(args.tolerant, config);

    let mut table = MappingTable::identity(frames, frames);
    with_source(&args.input, |source| {
        MappingParser::new(source, options)
            .parse_replace_simple(&mut table)
            .context("replace: invalid mappings")
    })?;
    print_json(&table)
}

fn cmd_transform(args: TransformArgs, config: &FramemapConfig) -> anyhow::Result<()> {
    let expr = args.op.as_deref().unwrap_or(&config.transform.expr);
    let half_open = config.transform.half_open && !args.closed;
    let discrete = config.transform.discrete || args.discrete;

    let program = Program::compile(expr, TRANSFORM_ALPHABET)
        .with_context(|| format!("transform: invalid op '{expr}'"))?;
    let out = with_source(&args.input, |source| {
        framemap::transform(source, &program, half_open, discrete)
            .context("transform: invalid mappings")
    })?;
    println!("{out}");
    Ok(())
}

fn cmd_merge(args: MergeArgs) -> anyhow::Result<()> {
    if let Some(out) = framemap::merge(args.parts.iter().map(|p| Some(p.as_str()))) {
        println!("{out}");
    }
    Ok(())
}
