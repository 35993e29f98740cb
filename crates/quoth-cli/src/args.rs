use anyhow::{Context, Result, bail};
use clap::Parser;
use quoth_engine::{Point, PosRange, Subpath};

#[derive(Debug, Parser)]
#[command(name = "quoth", version)]
#[command(about = "Shortest unique subpath for a range of a markdown file")]
#[command(after_help = "Lines and columns are 1-based. Relative files are looked up under \
                        `notes_path` from the config file when it is set.")]
pub struct Cli {
    /// Markdown file to address
    pub file: String,

    /// Range to address, as LINE[:COL][-LINE[:COL]]
    #[arg(value_name = "RANGE", value_parser = parse_range)]
    #[arg(required_unless_present = "resolve", conflicts_with = "resolve")]
    pub range: Option<PosRange>,

    /// Print the text a subpath such as `#Section#Sub` or `#^id` addresses
    #[arg(long, value_name = "SUBPATH")]
    pub resolve: Option<Subpath>,
}

/// Parse `L[:C][-L[:C]]` (1-based) into a 0-based range. A missing end
/// repeats the start; endpoints may be given in either order.
pub fn parse_range(input: &str) -> Result<PosRange> {
    let (start, end) = match input.split_once('-') {
        Some((start, end)) => (parse_point(start)?, parse_point(end)?),
        None => {
            let point = parse_point(input)?;
            (point, point)
        }
    };
    Ok(PosRange::new(start, end))
}

fn parse_point(input: &str) -> Result<Point> {
    let (line, col) = match input.split_once(':') {
        Some((line, col)) => (line, Some(col)),
        None => (input, None),
    };
    let line = parse_one_based(line, "line")?;
    let col = col.map(|c| parse_one_based(c, "column")).transpose()?;
    Ok(Point::new(line, col.unwrap_or(0)))
}

fn parse_one_based(value: &str, what: &str) -> Result<usize> {
    let n: usize = value
        .trim()
        .parse()
        .with_context(|| format!("invalid {what} {value:?}"))?;
    if n == 0 {
        bail!("{what} numbers start at 1");
    }
    Ok(n - 1)
}
