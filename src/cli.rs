// src/cli.rs
use std::{path::PathBuf, thread, time::Duration};

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use color_eyre::eyre::{bail, eyre, Result, WrapErr};

use crate::{
    config::{self, consts::REFETCH_DELAY_SECS, options::{AppOptions, DataSource, Paper}},
    csv::{self, Delimiter},
    export::{self, CancelToken, CaptureRegion, ExportJob, ExportOutcome, ImageFileRasterizer, PdfWriter},
    file,
    ingest::{self, refresh, ResultSet, Snapshot},
    logging,
    progress::Progress,
    sort,
    specs,
};

#[derive(Parser, Debug)]
#[command(name = "radio-cli", version, about = "Listenership, commentator and podcast tables from the command line")]
pub struct Cli {
    /// Settings file (default: ./dashboard.toml when present)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory holding the JSON result sets
    #[arg(long, global = true, value_name = "DIR", conflicts_with = "url")]
    pub data: Option<PathBuf>,

    /// Base URL the JSON result sets are served under
    #[arg(long, global = true, value_name = "URL")]
    pub url: Option<String>,

    /// More output on stderr (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum Format {
    Csv,
    Tsv,
}

impl From<Format> for Delimiter {
    fn from(f: Format) -> Self {
        match f {
            Format::Csv => Delimiter::Csv,
            Format::Tsv => Delimiter::Tsv,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List result sets and their row counts
    Sets,

    /// Print one result set as a sorted table
    Show {
        /// Result set name (see `sets`), e.g. all-matches
        set: String,

        /// Column key to click; repeat to click again (toggles direction)
        #[arg(long = "sort", value_name = "KEY")]
        sort: Vec<String>,

        #[arg(long, value_enum, default_value_t = Format::Tsv)]
        format: Format,

        /// Write to a file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        out: Option<PathBuf>,
    },

    /// Paginate an image (e.g. a dashboard screenshot) into a PDF
    Export {
        #[arg(long, value_name = "PNG")]
        image: PathBuf,

        #[arg(short, long, value_name = "PDF")]
        out: PathBuf,

        /// a4 | letter (default from settings)
        #[arg(long, value_parser = parse_paper)]
        page: Option<Paper>,
    },

    /// Ask the data pipeline to rebuild the result sets
    Refresh {
        /// Reload the data after the pipeline had time to deploy
        #[arg(long)]
        wait: bool,
    },
}

fn parse_paper(s: &str) -> Result<Paper, String> {
    Paper::parse(s).ok_or_else(|| format!("unknown page size `{s}` (a4 | letter)"))
}

/// Progress on stderr through the logger (visible with -v).
struct CliProgress {
    done: usize,
    total: usize,
}

impl Progress for CliProgress {
    fn begin(&mut self, total: usize) { self.total = total; }
    fn log(&mut self, msg: &str) { logf!("{msg}"); }
    fn item_done(&mut self, name: &str) {
        self.done += 1;
        logd!("Loaded {} ({}/{})", name, self.done, self.total);
    }
}

pub fn run() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    logging::init_cli(cli.verbose);
    run_with(cli)
}

fn resolve_options(cli: &Cli) -> Result<AppOptions> {
    let mut opts = config::file::load(cli.config.as_deref())?;
    if let Some(dir) = &cli.data {
        opts.data.source = DataSource::Dir(dir.clone());
    }
    if let Some(url) = &cli.url {
        opts.data.source = DataSource::Url(url.clone());
    }
    Ok(opts)
}

fn load(opts: &AppOptions) -> Result<Snapshot> {
    let source = ingest::source_for(&opts.data)?;
    let mut prog = CliProgress { done: 0, total: 0 };
    ingest::load_all(source.as_ref(), Some(&mut prog)).wrap_err("Loading data failed")
}

pub fn run_with(cli: Cli) -> Result<()> {
    let opts = resolve_options(&cli)?;

    match cli.command {
        Command::Sets => {
            let snap = load(&opts)?;
            for set in ResultSet::ALL {
                println!("{:<24}{:>7}  {}", set.slug(), snap.row_count(set), set.title());
            }
        }

        Command::Show { set, sort: clicks, format, out } => {
            let set = ResultSet::from_slug(&set)
                .ok_or_else(|| eyre!("Unknown result set `{set}`. Try `radio-cli sets`."))?;
            let schema = specs::schema_for(set);

            let mut state = schema.initial_state();
            for key in &clicks {
                match schema.column(key) {
                    Some(c) if c.sortable => state = schema.next_state(&state, key),
                    Some(_) => bail!("Column `{key}` is not sortable"),
                    None => {
                        let keys: Vec<&str> = schema.columns.iter().map(|c| c.key).collect();
                        bail!("Unknown column `{key}` for {}. Columns: {}", set.slug(), keys.join(", "));
                    }
                }
            }
            logf!("Show: set={} sort={} {}", set.slug(), state.key, state.direction.label());

            let snap = load(&opts)?;
            let records = snap.records(set);
            let row_ix = sort::sort_indices(records, schema, &state);
            let text = csv::table_to_string(records, &row_ix, schema, Delimiter::from(format).sep());

            match out {
                Some(path) => {
                    file::write_atomic(&path, text.as_bytes())
                        .wrap_err_with(|| format!("Writing {}", path.display()))?;
                    eprintln!("Wrote {} rows → {}", row_ix.len(), path.display());
                }
                None => print!("{text}"),
            }
        }

        Command::Export { image, out, page } => {
            let paper = page.unwrap_or(opts.export.paper);
            let mut job = ExportJob::new(
                CaptureRegion::new(image.to_string_lossy()),
                paper.page_size(),
                out,
            );
            job.oversample = opts.export.oversample;

            let mut rasterizer = ImageFileRasterizer::new(PathBuf::new());
            match export::export_region(&job, &mut rasterizer, &PdfWriter, &CancelToken::new())? {
                ExportOutcome::Written { path, pages } => {
                    println!("Exported {pages} page(s) → {}", path.display());
                }
                ExportOutcome::Skipped => {
                    eprintln!("Nothing to export: {} not found", image.display());
                }
            }
        }

        Command::Refresh { wait } => {
            let msg = refresh::trigger(&opts.refresh)?;
            println!("{msg}");

            if wait {
                eprintln!("Waiting {REFETCH_DELAY_SECS}s before reloading…");
                thread::sleep(Duration::from_secs(REFETCH_DELAY_SECS));
                let snap = load(&opts)?;
                let rows: usize = ResultSet::ALL.into_iter().map(|s| snap.row_count(s)).sum();
                println!("Reloaded {} sets ({} rows) at {}", ResultSet::ALL.len(), rows, snap.loaded_at.format("%H:%M:%S"));
            }
        }
    }
    Ok(())
}
