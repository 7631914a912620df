// File: crates/demo/src/main.rs
// Summary: Demo loads a name/number CSV (or a built-in sample), replays taps, and renders each state to PNG.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use pie_core::{ArcStyle, DataItem, LayoutOptions, Margins, PieConfig, PieLayout, PieSort, Point};
use pie_render_skia::{theme, RenderOptions, RenderPie};
use tracing_subscriber::fmt::SubscriberBuilder;

#[derive(Parser)]
#[command(name = "pie-demo")]
#[command(about = "Render an interactive pie chart and replay taps against it")]
struct Cmd {
    /// CSV with `name` and `number` columns; a sample series is used when omitted
    #[arg(long)]
    input: Option<PathBuf>,

    /// Tap position `X,Y` in view pixels; repeat to replay several taps
    #[arg(long = "tap", value_parser = parse_point)]
    taps: Vec<Point>,

    /// Output directory for the rendered PNGs
    #[arg(long, default_value = "target/out")]
    out: PathBuf,

    #[arg(long, default_value_t = 300.0)]
    width: f64,
    #[arg(long, default_value_t = 300.0)]
    height: f64,
    /// Pie diameter in pixels
    #[arg(long, default_value_t = 200.0)]
    pie_size: f64,
    /// Ring thickness in pixels
    #[arg(long, default_value_t = pie_core::types::ARC_WIDTH)]
    arc_width: f64,
    /// Offset of the pie box inside the view
    #[arg(long, default_value_t = 40.0)]
    margin_left: f64,
    #[arg(long, default_value_t = 40.0)]
    margin_top: f64,
    /// Extra outer radius of the highlighted wedge
    #[arg(long, default_value_t = pie_core::types::HIGHLIGHT_BOOST)]
    boost: f64,

    #[arg(long, value_enum, default_value_t = SortArg::Input)]
    sort: SortArg,

    /// Lay out an all-zero series as equal wedges instead of failing
    #[arg(long)]
    equal_fallback: bool,

    /// Theme preset name (dark, light, solarized-dark)
    #[arg(long, default_value = "dark")]
    theme: String,

    #[arg(long)]
    no_labels: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum SortArg {
    Input,
    Descending,
    Ascending,
}

impl From<SortArg> for PieSort {
    fn from(s: SortArg) -> Self {
        match s {
            SortArg::Input => PieSort::Input,
            SortArg::Descending => PieSort::Descending,
            SortArg::Ascending => PieSort::Ascending,
        }
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();

    let data = match &cmd.input {
        Some(path) => load_series_csv(path).with_context(|| format!("failed to load CSV '{}'", path.display()))?,
        None => sample_series(),
    };
    tracing::info!(items = data.len(), "series loaded");

    let cfg = PieConfig::new(cmd.width, cmd.height, cmd.pie_size, cmd.pie_size)
        .with_arc_width(cmd.arc_width)
        .with_margins(Margins::new(cmd.margin_left, cmd.margin_top));
    let pie = if cmd.equal_fallback {
        PieLayout::with_equal_fallback(data, cfg)
    } else {
        PieLayout::new(data, cfg)
    };
    let mut pie = pie
        .context("invalid series or geometry")?
        .with_style(ArcStyle { highlight_boost: cmd.boost, ..ArcStyle::default() })
        .with_options(LayoutOptions { sort: cmd.sort.into() })?;

    let mut opts = RenderOptions::for_config(&cfg);
    opts.theme = theme::find(&cmd.theme);
    opts.draw_labels = !cmd.no_labels;

    let first = cmd.out.join("pie_0.png");
    pie.render_to_png(&opts, &first)?;
    tracing::info!(path = %first.display(), "wrote initial state");

    for (n, &tap) in cmd.taps.iter().enumerate() {
        let mut selected = Vec::new();
        let hit = pie.tap(tap, &mut |i: usize| selected.push(i));
        match hit {
            Some(index) => {
                let name = &pie.data()[index].name;
                tracing::info!(x = tap.x, y = tap.y, index, name = %name, "tap selected item");
            }
            None => tracing::info!(x = tap.x, y = tap.y, "tap missed; selection unchanged"),
        }
        let out = cmd.out.join(format!("pie_{}.png", n + 1));
        pie.render_to_png(&opts, &out)?;
        tracing::info!(path = %out.display(), notified = ?selected, "wrote state");
    }
    Ok(())
}

fn parse_point(s: &str) -> Result<Point, String> {
    let (x, y) = s.split_once(',').ok_or_else(|| format!("expected X,Y but got '{s}'"))?;
    let x = x.trim().parse::<f64>().map_err(|e| format!("bad X in '{s}': {e}"))?;
    let y = y.trim().parse::<f64>().map_err(|e| format!("bad Y in '{s}': {e}"))?;
    Ok(Point::new(x, y))
}

fn sample_series() -> Vec<DataItem> {
    pie_core::series::from_pairs([("Housing", 1200.0), ("Food", 450.0), ("Transport", 260.0), ("Leisure", 180.0), ("Savings", 400.0)])
}

/// Load a name/number CSV. Column names are matched case-insensitively; rows whose
/// number does not parse are skipped with a warning.
fn load_series_csv(path: &Path) -> Result<Vec<DataItem>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect::<Vec<_>>();
    tracing::debug!(?headers, "csv headers");

    let idx = |names: &[&str]| headers.iter().position(|h| names.contains(&h.as_str()));
    let i_name = idx(&["name", "label", "category"]).context("no name/label/category column")?;
    let i_number = idx(&["number", "value", "count", "amount"]).context("no number/value/count/amount column")?;

    let mut out = Vec::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let name = rec.get(i_name).unwrap_or_default().trim();
        match rec.get(i_number).and_then(|s| s.trim().parse::<f64>().ok()) {
            Some(number) => out.push(DataItem::new(name, number)),
            None => tracing::warn!(row, name, "skipping row without a numeric value"),
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tap_points() {
        assert_eq!(parse_point("12.5, 40").unwrap(), Point::new(12.5, 40.0));
        assert!(parse_point("12").is_err());
        assert!(parse_point("a,1").is_err());
    }

    #[test]
    fn margin_and_boost_flags_parse() {
        let cmd = Cmd::try_parse_from(["pie-demo", "--margin-left", "0", "--margin-top", "12.5", "--boost", "5"]).unwrap();
        assert_eq!((cmd.margin_left, cmd.margin_top, cmd.boost), (0.0, 12.5, 5.0));
        let cmd = Cmd::try_parse_from(["pie-demo"]).unwrap();
        assert_eq!(cmd.boost, pie_core::types::HIGHLIGHT_BOOST);
    }

    #[test]
    fn loads_csv_with_aliased_headers() {
        let dir = std::env::temp_dir().join(format!("pie-demo-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("series.csv");
        std::fs::write(&path, "Label,Value\nA,1\nB,oops\nC,2.5\n").unwrap();
        let data = load_series_csv(&path).unwrap();
        assert_eq!(data, vec![DataItem::new("A", 1.0), DataItem::new("C", 2.5)]);
        std::fs::remove_dir_all(&dir).ok();
    }
}
