// src/cli.rs
//
// Command-line front end: load, filter, sort, print one page (and charts),
// or export the whole filtered view.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use color_eyre::eyre::{eyre, Result};

use crate::{
    config::{
        options::{DatasetScope, LoadPolicy, ViewerOptions},
        settings,
    },
    controller::{Controller, LoadOutcome},
    file,
    progress::{LogProgress, Progress},
    query::{FilterSpec, SortDirection, SortSpec},
    render::{self, ChartView, TableView},
};

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

impl From<Direction> for SortDirection {
    fn from(d: Direction) -> Self {
        match d {
            Direction::Asc => SortDirection::Ascending,
            Direction::Desc => SortDirection::Descending,
        }
    }
}

#[derive(Parser, Debug)]
#[command(version, about = "View and query sports-statistics CSV datasets")]
pub struct Args {
    /// Settings file (default: ./stat_viewer.toml if present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Dataset name from the settings (default: the first one)
    #[arg(short, long)]
    pub dataset: Option<String>,

    /// Explicit CSV source(s), tried in order; overrides --dataset
    #[arg(short, long = "source")]
    pub sources: Vec<String>,

    /// Concatenate every --source instead of taking the first usable one
    #[arg(long, requires = "sources")]
    pub merge: bool,

    /// Case-insensitive substring of the player name
    #[arg(long)]
    pub player: Option<String>,

    #[arg(long)]
    pub season_min: Option<String>,

    #[arg(long)]
    pub season_max: Option<String>,

    /// Lower bound on the primary metric
    #[arg(long)]
    pub min_metric: Option<String>,

    /// Column to sort by (default: the primary metric)
    #[arg(long)]
    pub sort: Option<String>,

    /// Sort direction
    #[arg(long, value_enum)]
    pub dir: Option<Direction>,

    /// 1-based page to print (clamped)
    #[arg(short, long, default_value_t = 1)]
    pub page: usize,

    #[arg(long)]
    pub rows_per_page: Option<usize>,

    /// Include columns hidden by default
    #[arg(long)]
    pub all_columns: bool,

    /// Also print the ranked chart panels
    #[arg(long)]
    pub charts: bool,

    /// Write the whole filtered view as CSV instead of printing a page
    #[arg(short, long)]
    pub out: Option<String>,

    /// List configured datasets and exit
    #[arg(long)]
    pub list_datasets: bool,

    /// Print each source attempt
    #[arg(short, long)]
    pub verbose: bool,
}

pub fn run(args: Args) -> Result<()> {
    let mut opts = settings::load(args.config.as_deref())?;

    if args.list_datasets {
        for d in &opts.datasets {
            println!("{}\t{:?}\t{}", d.name, d.policy, d.sources.join(", "));
        }
        return Ok(());
    }

    let scope = pick_scope(&mut opts, &args)?;
    if let Some(rpp) = args.rows_per_page {
        opts.rows_per_page = rpp.max(1);
    }

    let mut ctl = Controller::new(opts);

    let mut prog = LogProgress::default();
    let outcome = ctl.load_blocking(scope, Some(&mut prog as &mut dyn Progress));
    if args.verbose {
        for line in &prog.lines {
            eprintln!("{line}");
        }
    }
    if outcome != LoadOutcome::Applied {
        return Err(eyre!("{}", crate::config::consts::FALLBACK_MESSAGE));
    }

    apply_args(&mut ctl, &args);

    if let Some(out) = &args.out {
        let name = ctl.options().dataset(ctl.state().scope).map(|d| d.name.as_str()).unwrap_or("export");
        let path = file::resolve_out_path(out, &file::export_filename(name)).map_err(|e| eyre!("{e}"))?;
        let (headers, rows) = ctl.export_rows();
        let written = file::write_csv(&path, &headers, &rows).map_err(|e| eyre!("{e}"))?;
        println!("Wrote {} row(s) to {}", rows.len(), written.display());
        return Ok(());
    }

    if let Some(src) = &ctl.state().source {
        println!("Loaded: {src}");
    }
    println!("{}", render::summary(&ctl).join(" | "));
    print!("{}", text_table(&render::table_view(&ctl), &ctl.options().integer_columns));

    if args.charts {
        for chart in render::chart_views(&ctl) {
            println!();
            print!("{}", text_chart(&chart));
        }
    }
    Ok(())
}

fn pick_scope(opts: &mut ViewerOptions, args: &Args) -> Result<usize> {
    if !args.sources.is_empty() {
        let policy = if args.merge { LoadPolicy::Merge } else { LoadPolicy::FirstAvailable };
        opts.datasets.insert(0, DatasetScope { name: s!("command line"), sources: args.sources.clone(), policy });
        return Ok(0);
    }
    match &args.dataset {
        None => Ok(0),
        Some(name) => opts
            .dataset_index(name)
            .ok_or_else(|| eyre!("Unknown dataset: {name} (try --list-datasets)")),
    }
}

/// Filters, sort, columns and page, in that order (each resets the page).
pub fn apply_args(ctl: &mut Controller, args: &Args) {
    ctl.set_filters(FilterSpec {
        player_query: args.player.clone().unwrap_or_default(),
        season_min: args.season_min.clone().unwrap_or_default(),
        season_max: args.season_max.clone().unwrap_or_default(),
        min_metric: args.min_metric.clone().unwrap_or_default(),
    });

    if args.sort.is_some() || args.dir.is_some() {
        let cur = ctl.state().sort.clone();
        let field = args.sort.clone().unwrap_or(cur.field);
        let dir = args.dir.map(SortDirection::from).unwrap_or(cur.direction);
        ctl.set_sort(SortSpec::new(&field, dir));
    }

    if args.all_columns {
        ctl.show_all_columns();
    }
    ctl.set_page(args.page);
}

/// Plain aligned text; numeric columns right-aligned.
pub fn text_table(view: &TableView, integer_columns: &[String]) -> String {
    if view.columns.is_empty() {
        return format!("{}\n", view.message.as_deref().unwrap_or("(no data)"));
    }

    let head: Vec<String> = view
        .columns
        .iter()
        .map(|c| match c.sorted {
            Some(d) => format!("{}{}", c.label, d.arrow()),
            None => c.label.clone(),
        })
        .collect();

    let mut widths: Vec<usize> = head.iter().map(|l| l.chars().count()).collect();
    for row in &view.rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }
    let numeric: Vec<bool> = view
        .columns
        .iter()
        .enumerate()
        .map(|(i, c)| render::is_numeric_column(&c.name, integer_columns, &view.rows, i))
        .collect();

    let line = |cells: &[String]| -> String {
        let parts: Vec<String> = cells
            .iter()
            .enumerate()
            .map(|(i, c)| {
                let w = widths.get(i).copied().unwrap_or(0);
                if numeric.get(i).copied().unwrap_or(false) {
                    format!("{c:>w$}")
                } else {
                    format!("{c:<w$}")
                }
            })
            .collect();
        let mut l = s!(parts.join("  ").trim_end());
        l.push('\n');
        l
    };

    let mut out = line(&head);
    if let Some(msg) = &view.message {
        out.push_str(msg);
        out.push('\n');
    }
    for row in &view.rows {
        out.push_str(&line(row));
    }
    out
}

pub fn text_chart(chart: &ChartView) -> String {
    const WIDTH: f32 = 30.0;
    let mut out = format!("{} ({})\n", chart.title, chart.metric_label);
    if chart.bars.is_empty() {
        out.push_str("  (no data)\n");
        return out;
    }
    let label_w = chart.bars.iter().map(|b| b.label.chars().count()).max().unwrap_or(0);
    for b in &chart.bars {
        let n = (b.fraction * WIDTH).round() as usize;
        out.push_str(&format!("  {:<lw$}  {:>7}  {}\n", b.label, b.text, "#".repeat(n.max(1)), lw = label_w));
    }
    out
}
