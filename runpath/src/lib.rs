//! runpath: cheapest run-constrained path across a digit grid.
//!
//! Reads a grid file and prints the minimum path cost. Without explicit run
//! limits both canonical queries are answered: runs of 1 to 3 cells
//! (`Part 1`) and runs of 4 to 10 cells (`Part 2`).

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::thread;

use anyhow::{Context, Result, anyhow};
use clap::Parser;

use runpath_core::CostGrid;
use runpath_paths::{PathSolver, RunLimits, Solution};

/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(name = "runpath")]
#[command(about = "Minimum-cost run-constrained path from the top-left to the bottom-right cell")]
pub struct Args {
    /// Grid file: one row per line, one digit per cell
    pub input: PathBuf,

    /// Shortest run before a turn (requires --max-run)
    #[arg(long, requires = "max_run")]
    pub min_run: Option<u32>,

    /// Longest run before a turn (requires --min-run)
    #[arg(long, requires = "min_run")]
    pub max_run: Option<u32>,

    /// Answer the two canonical queries on separate threads
    #[arg(long)]
    pub parallel: bool,

    /// Log solve summaries
    #[arg(short, long)]
    pub verbose: bool,
}

/// Read and parse a grid file.
pub fn load_grid(path: &Path) -> Result<CostGrid> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    CostGrid::parse(&text).with_context(|| format!("parsing {}", path.display()))
}

/// Run the queries selected by `args`, writing results to `out`.
pub fn run(args: &Args, out: &mut impl Write) -> Result<()> {
    let grid = load_grid(&args.input)?;
    log::debug!(
        "loaded {}x{} grid from {}",
        grid.width(),
        grid.height(),
        args.input.display()
    );
    let solver = PathSolver::new();

    if let (Some(min), Some(max)) = (args.min_run, args.max_run) {
        let limits = RunLimits::new(min, max)?;
        let sol = solver.solve(&grid, limits)?;
        writeln!(out, "{}", render(sol.as_ref()))?;
        return Ok(());
    }

    let (part1, part2) = if args.parallel {
        thread::scope(|s| {
            let standard = s.spawn(|| solver.solve(&grid, RunLimits::STANDARD));
            let ultra = solver.solve(&grid, RunLimits::ULTRA);
            let standard = standard
                .join()
                .map_err(|_| anyhow!("solver thread panicked"))?;
            Ok::<_, anyhow::Error>((standard?, ultra?))
        })?
    } else {
        (
            solver.solve(&grid, RunLimits::STANDARD)?,
            solver.solve(&grid, RunLimits::ULTRA)?,
        )
    };

    writeln!(out, "Part 1: {}", render(part1.as_ref()))?;
    writeln!(out, "Part 2: {}", render(part2.as_ref()))?;
    Ok(())
}

fn render(sol: Option<&Solution>) -> String {
    match sol {
        Some(sol) => sol.cost.to_string(),
        None => "no path".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    const EXAMPLE: &str = "\
2413432311323
3215453535623
3255245654254
3446585845452
4546657867536
1438598798454
4457876987766
3637877979653
4654967986887
4564679986453
1224686865563
2546548887735
4322674655533
";

    fn grid_file(content: &str) -> tempfile::NamedTempFile {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(content.as_bytes()).unwrap();
        f
    }

    fn run_with(argv: &[&str]) -> Result<String> {
        let args = Args::try_parse_from(argv.iter().copied())?;
        let mut out = Vec::new();
        run(&args, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn canonical_queries() {
        let f = grid_file(EXAMPLE);
        let path = f.path().to_str().unwrap();
        let out = run_with(&["runpath", path]).unwrap();
        assert_eq!(out, "Part 1: 102\nPart 2: 94\n");
    }

    #[test]
    fn parallel_matches_sequential() {
        let f = grid_file(EXAMPLE);
        let path = f.path().to_str().unwrap();
        let out = run_with(&["runpath", path, "--parallel"]).unwrap();
        assert_eq!(out, "Part 1: 102\nPart 2: 94\n");
    }

    #[test]
    fn explicit_limits() {
        let f = grid_file(EXAMPLE);
        let path = f.path().to_str().unwrap();
        let out = run_with(&["runpath", path, "--min-run", "4", "--max-run", "10"]).unwrap();
        assert_eq!(out, "94\n");
    }

    #[test]
    fn unreachable_prints_no_path() {
        let f = grid_file("123\n456\n789\n");
        let path = f.path().to_str().unwrap();
        let out = run_with(&["runpath", path]).unwrap();
        assert_eq!(out, "Part 1: 20\nPart 2: no path\n");
    }

    #[test]
    fn limits_must_come_in_pairs() {
        assert!(Args::try_parse_from(["runpath", "grid.txt", "--min-run", "2"]).is_err());
    }

    #[test]
    fn invalid_limits_are_reported() {
        let f = grid_file(EXAMPLE);
        let path = f.path().to_str().unwrap();
        let err = run_with(&["runpath", path, "--min-run", "5", "--max-run", "2"]).unwrap_err();
        assert!(err.to_string().contains("invalid run limits"));
    }

    #[test]
    fn malformed_grid_is_reported_with_path() {
        let f = grid_file("12\n3a\n");
        let path = f.path().to_str().unwrap();
        let err = run_with(&["runpath", path]).unwrap_err();
        assert!(err.to_string().starts_with("parsing "));
        assert!(format!("{err:#}").contains("invalid digit"));
    }

    #[test]
    fn missing_file_is_reported() {
        let err = run_with(&["runpath", "/nonexistent/grid.txt"]).unwrap_err();
        assert!(err.to_string().contains("reading /nonexistent/grid.txt"));
    }
}
