//! `npad` command line tool: writes tileable block noise as a plain PGM image.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use npad_core::{NoiseGrid, generate_octaves_with, generate_with};
use npad_utils::Sample;
use npad_utils::random::Mt19937;
use tracing_subscriber::EnvFilter;

mod cli;
mod config;
mod pgm;

use cli::{Args, Settings};
use config::NpadConfig;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> ExitCode {
    init_logging();

    match run(&Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let config = NpadConfig::load(args.config.as_deref())?;
    let settings = Settings::resolve(args, &config);
    tracing::debug!("Resolved settings: {settings:?}");

    let mut rng = settings.seed.map_or_else(Mt19937::from_clock, Mt19937::new);
    if settings.single_precision {
        render::<f32>(&settings, &mut rng, args.output.as_deref())
    } else {
        render::<f64>(&settings, &mut rng, args.output.as_deref())
    }
}

/// Generates the grid, then writes it. The output file is only created once
/// generation has succeeded.
fn render<T: Sample>(
    settings: &Settings,
    rng: &mut Mt19937,
    output: Option<&Path>,
) -> Result<()> {
    let roughness = T::constant(settings.roughness);
    let grid: NoiseGrid<T> = if settings.octaves {
        generate_octaves_with(settings.width, settings.height, roughness, rng)
    } else {
        generate_with(settings.width, settings.height, roughness, rng)
    }
    .context("Failed to generate noise")?;

    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            write_image(&grid, BufWriter::new(file))?;
            tracing::info!(
                "Wrote {}x{} noise to {}",
                grid.width(),
                grid.height(),
                path.display()
            );
        }
        None => write_image(&grid, BufWriter::new(io::stdout().lock()))?,
    }
    Ok(())
}

fn write_image<T: Sample, W: Write>(grid: &NoiseGrid<T>, mut out: W) -> Result<()> {
    pgm::write_pgm(&mut out, grid).context("Failed to write image")?;
    out.flush().context("Failed to flush image")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::env;
    use std::fs;
    use std::path::PathBuf;
    use std::process;

    use super::*;

    fn scratch_file(name: &str) -> PathBuf {
        env::temp_dir().join(format!("npad-{}-{name}.pgm", process::id()))
    }

    fn args(extra: &[&str]) -> Args {
        Args::try_parse_from(["npad"].iter().chain(extra).copied()).unwrap()
    }

    #[test]
    fn invalid_dimensions_leave_existing_output_alone() {
        let path = scratch_file("keep");
        fs::write(&path, "precious").unwrap();
        let output = path.to_str().unwrap();

        let err = run(&args(&["6", "-o", output, "-s", "1"])).unwrap_err();
        assert!(format!("{err:#}").contains("not divisible by 4"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "precious");

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn seeded_run_writes_reproducible_image() {
        let first = scratch_file("first");
        let second = scratch_file("second");

        for path in [&first, &second] {
            let output = path.to_str().unwrap();
            run(&args(&["8", "4", "--octaves", "-s", "42", "-o", output])).unwrap();
        }

        let image = fs::read_to_string(&first).unwrap();
        assert!(image.starts_with("P2\n8 4\n255\n"));
        assert_eq!(image.lines().count(), 3 + 4);
        assert_eq!(image, fs::read_to_string(&second).unwrap());

        fs::remove_file(&first).unwrap();
        fs::remove_file(&second).unwrap();
    }
}
