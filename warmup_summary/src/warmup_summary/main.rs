//!
//! The warmup summary binary.
//!

pub(crate) mod arguments;

use std::path::PathBuf;

use clap::Parser;

use self::arguments::Arguments;

///
/// The application entry point.
///
fn main() -> anyhow::Result<()> {
    let arguments = Arguments::try_parse()?;

    let default_level = if arguments.quiet { "error" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let input_paths = resolve_input_paths(arguments.input_paths)?;
    let summary = if arguments.from_summary {
        let [path] = input_paths.as_slice() else {
            anyhow::bail!(
                "Expected exactly one summary record, but got {} files",
                input_paths.len()
            );
        };
        warmup_summary::Summary::try_from(path.as_path())?
    } else {
        let mut data_set = warmup_summary::DataSet::default();
        for path in input_paths.into_iter() {
            match warmup_summary::Input::try_from(path.as_path()) {
                Ok(input) => data_set.extend(input),
                Err(warmup_summary::InputError::EmptyFile { path }) => {
                    tracing::warn!("Input file {path:?} is empty and will be skipped");
                    continue;
                }
                Err(error) => Err(error)?,
            }
        }
        let settings = warmup_summary::Settings::new(arguments.delta, arguments.quality);
        let estimator = warmup_summary::Resampler::new(arguments.seed);
        warmup_summary::Summary::collect(&data_set, &settings, &estimator)?
    };

    let previous = match arguments.previous {
        Some(path) => Some(warmup_summary::Summary::try_from(path.as_path())?),
        None => None,
    };
    let diff = match previous.as_ref() {
        Some(previous) => Some(warmup_summary::Diff::new(previous, &summary)?),
        None => None,
    };

    let report = warmup_summary::Report {
        summary: &summary,
        diff: diff.as_ref(),
        previous: previous.as_ref(),
        vm_filter: arguments.vm_filter.as_ref(),
        latex_preamble: arguments.latex_preamble,
        latex_longtable: arguments.latex_longtable,
    };
    match (arguments.output_format, arguments.output_path) {
        (warmup_summary::OutputFormat::Terminal, None) => {
            warmup_summary::TerminalOutput::new(&report).write_all(&mut std::io::stdout())?;
        }
        (_, Some(output_path)) => {
            let output: warmup_summary::Output = (&report, arguments.output_format).try_into()?;
            output.write_to_file(output_path)?;
        }
        (output_format, None) => {
            anyhow::bail!("The `{output_format}` output format requires `--output-path`")
        }
    }

    Ok(())
}

///
/// Expands a single directory argument into the JSON files it contains.
///
fn resolve_input_paths(input_paths: Vec<PathBuf>) -> anyhow::Result<Vec<PathBuf>> {
    match input_paths.as_slice() {
        [] => anyhow::bail!("No input files provided"),
        [directory] if directory.is_dir() => {
            let resolution_pattern = format!("{}/**/*.json", directory.to_string_lossy());
            let mut paths: Vec<PathBuf> = glob::glob(resolution_pattern.as_str())?
                .filter_map(Result::ok)
                .collect();
            paths.sort();
            if paths.is_empty() {
                anyhow::bail!("No JSON files found in {directory:?}");
            }
            Ok(paths)
        }
        _ => Ok(input_paths),
    }
}
