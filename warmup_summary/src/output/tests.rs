//!
//! Tests for the report renderers.
//!

use std::collections::BTreeMap;

use pretty_assertions::assert_eq;

use crate::diff::Diff;
use crate::model::category::Category;
use crate::model::classification::Classification;
use crate::model::detailed_classification::DetailedClassification;
use crate::output::format::Format;
use crate::output::html::Html;
use crate::output::latex::Latex;
use crate::output::report::Report;
use crate::output::style::Style;
use crate::output::terminal::Terminal;
use crate::output::xlsx::worksheet::Worksheet;
use crate::output::Output;
use crate::summary::benchmark::BenchmarkSummary;
use crate::summary::error::Error;
use crate::summary::Summary;

fn warmup(iteration: f64, time: f64) -> BenchmarkSummary {
    BenchmarkSummary {
        classification: Category::Warmup,
        detailed_classification: [Classification::Warmup, Classification::Warmup]
            .into_iter()
            .collect(),
        steady_state_iteration: Some(iteration),
        steady_state_iteration_iqr: Some((iteration - 0.5, iteration + 0.5)),
        steady_state_iteration_list: vec![iteration as usize, iteration as usize],
        steady_state_time_to_reach_secs: Some(30.0),
        steady_state_time_to_reach_secs_iqr: Some((29.0, 31.0)),
        steady_state_time_to_reach_secs_list: vec![29.0, 31.0],
        steady_state_time: Some(time),
        steady_state_time_ci: Some(0.001),
        steady_state_time_list: vec![time, time],
        process_executions: vec![],
    }
}

fn inconsistent() -> BenchmarkSummary {
    BenchmarkSummary {
        classification: Category::GoodInconsistent,
        detailed_classification: [Classification::Warmup, Classification::Flat]
            .into_iter()
            .collect(),
        ..warmup(4.0, 1.0)
    }
}

fn summary(benchmarks: Vec<(&str, &str, BenchmarkSummary)>) -> Summary {
    let mut vms: BTreeMap<String, BTreeMap<String, BenchmarkSummary>> = BTreeMap::new();
    for (vm, name, benchmark) in benchmarks.into_iter() {
        vms.entry(vm.to_owned())
            .or_default()
            .insert(name.to_owned(), benchmark);
    }
    Summary {
        warmup_format_version: Summary::FORMAT_VERSION.to_owned(),
        machines: BTreeMap::from([("bencher".to_owned(), vms)]),
    }
}

fn current() -> Summary {
    summary(vec![
        ("PyPy", "fannkuch_redux", warmup(4.0, 0.5)),
        ("PyPy", "richards", inconsistent()),
        ("V8", "fannkuch_redux", warmup(8.0, 1.0)),
    ])
}

fn previous() -> Summary {
    summary(vec![
        ("PyPy", "fannkuch_redux", warmup(12.0, 0.5)),
        ("PyPy", "nbody", warmup(4.0, 1.0)),
        ("V8", "fannkuch_redux", warmup(8.0, 2.0)),
    ])
}

fn render(report: &Report, format: Format) -> String {
    let output = Output::try_from((report, format)).expect("Failed to render report");
    match output {
        Output::SingleFile(content) => content,
        Output::SingleFileXlsx(_) => panic!("Expected a text report"),
    }
}

#[test]
fn format_parsing() {
    for format in Format::ALL.into_iter() {
        let parsed: Format = format.to_string().parse().expect("Failed to parse format");
        assert_eq!(parsed, format);
    }
    assert_eq!("tex".parse::<Format>().expect("Failed to parse format"), Format::Latex);
    assert!("csv".parse::<Format>().is_err());
}

#[test]
fn style_describes_classifications() {
    let summary = warmup(4.0, 1.0);
    assert_eq!(Style::Latex.describe(&summary), "\\warmupc");
    assert_eq!(Style::Html.describe(&summary), "&#8600;");

    let summary = inconsistent();
    assert_eq!(
        Style::Latex.describe(&summary),
        "\\goodinconsistentc \\scriptsize($1$\\flatc, $1$\\warmupc)"
    );
    assert_eq!(
        Style::Html.describe(&summary),
        "&#8801; (1 &#8594;, 1 &#8600;)"
    );

    let mut detailed = DetailedClassification::default();
    detailed.add(Classification::Warmup);
    detailed.add(Classification::Warmup);
    detailed.add(Classification::Errored);
    let summary = BenchmarkSummary {
        detailed_classification: detailed,
        ..warmup(4.0, 1.0)
    };
    assert_eq!(
        Style::Latex.describe(&summary),
        " \\warmupc\\scriptsize{($2$)}"
    );
    assert_eq!(Style::Html.describe(&summary), " &#8600; 2");
}

#[test]
fn json_report() {
    let summary = current();
    let report = Report::new(&summary);
    let content = render(&report, Format::Json);
    let parsed: Summary = content.parse().expect("Failed to parse summary");
    assert_eq!(parsed, summary);
}

#[test]
fn latex_report() {
    let summary = current();
    let report = Report {
        latex_preamble: true,
        ..Report::new(&summary)
    };
    let content = render(&report, Format::Latex);

    assert!(content.starts_with("\\documentclass"));
    assert!(content.contains("\\newcommand{\\warmupc}"));
    assert!(content.contains("fannkuch\\_redux"));
    assert!(content.contains("\\rotatebox[origin=c]{90}{PyPy}"));
    assert!(content.contains("\\midrule\n"));
    assert!(content.contains("\\begin{tabular}"));
    assert!(content.trim_end().ends_with("\\end{document}"));
    assert_eq!(content.matches("\\rotatebox[origin=c]{90}").count(), 2);
}

#[test]
fn latex_longtable_report() {
    let summary = current();
    let report = Report {
        latex_longtable: true,
        ..Report::new(&summary)
    };
    let latex = Latex::try_from(&report).expect("Failed to render LaTeX");
    assert!(latex.content.contains("\\begin{longtable}"));
    assert!(latex.content.contains("\\hline\n"));
    assert!(!latex.content.contains("\\documentclass"));
}

#[test]
fn latex_escape() {
    assert_eq!(Latex::escape("a_b&c%"), "a\\_b\\&c\\%");
    assert_eq!(Latex::escape("~"), "\\textasciitilde{}");
}

#[test]
fn html_report() {
    let summary = current();
    let report = Report::new(&summary);
    let html = Html::try_from(&report).expect("Failed to render HTML");

    assert!(html.content.contains("<h2>PyPy</h2>"));
    assert!(html.content.contains("<h2>V8</h2>"));
    assert!(html.content.contains("<td>richards</td>"));
    assert!(html.content.contains("&plusmn;0.001000"));
    assert!(!html.content.contains("lightgreen\">"));
}

#[test]
fn html_diff_report() {
    let summary = current();
    let previous = previous();
    let diff = Diff::new(&previous, &summary).expect("Failed to compare summaries");
    let report = Report {
        diff: Some(&diff),
        previous: Some(&previous),
        ..Report::new(&summary)
    };
    let html = Html::try_from(&report).expect("Failed to render HTML");

    assert!(html.content.contains("<em>Skipped</em>"));
    assert!(html.content.contains(">nbody</td>"));
    assert!(html.content.contains(">richards</td>"));
    assert!(html.content.contains("id=\"lightgreen\""));
    assert!(html.content.contains("&delta;=-8.0"));
    assert!(html.content.contains("&delta;=-1.00000"));
    assert!(html.content.contains("Steady iteration variation"));
}

#[test]
fn diff_needs_previous_summary() {
    let summary = current();
    let previous = previous();
    let diff = Diff::new(&previous, &summary).expect("Failed to compare summaries");
    let report = Report {
        diff: Some(&diff),
        ..Report::new(&summary)
    };
    assert!(matches!(report.comparison(), Err(Error::DiffPairing)));
    assert!(matches!(Html::try_from(&report), Err(Error::DiffPairing)));
    assert!(Output::try_from((&report, Format::Latex)).is_err());
}

#[test]
fn vm_filter() {
    let summary = current();
    let filter = regex::Regex::new("^V8$").expect("Failed to compile filter");
    let report = Report {
        vm_filter: Some(&filter),
        ..Report::new(&summary)
    };
    let (_, vms) = report.vms().expect("Failed to select VMs");
    assert_eq!(
        vms.iter().map(|(vm, _)| *vm).collect::<Vec<&str>>(),
        vec!["V8"]
    );
    let html = Html::try_from(&report).expect("Failed to render HTML");
    assert!(!html.content.contains("PyPy"));
}

#[test]
fn terminal_report() {
    colored::control::set_override(false);
    let summary = current();
    let report = Report::new(&summary);
    let mut buffer = Vec::new();
    Terminal::new(&report)
        .write_all(&mut buffer)
        .expect("Failed to print report");
    let content = String::from_utf8(buffer).expect("Always valid");

    assert!(content.contains("Warmup summary of bencher"));
    assert!(content.contains("fannkuch_redux"));
    assert!(content.contains("good inconsistent"));
    assert!(content.contains("#4.0 @ 30.000s"));
}

#[test]
fn xlsx_report() {
    let summary = current();
    let report = Report::new(&summary);
    let output = Output::try_from((&report, Format::Xlsx)).expect("Failed to render report");
    assert!(matches!(output, Output::SingleFileXlsx(_)));

    let directory = tempfile::tempdir().expect("Failed to create a temporary directory");
    let path = directory.path().join("summary.xlsx");
    output
        .write_to_file(path.clone())
        .expect("Failed to write the workbook");
    assert!(path.exists());
}

#[test]
fn worksheet_column_identifiers() {
    assert_eq!(Worksheet::column_identifier(0), "A");
    assert_eq!(Worksheet::column_identifier(3), "D");
    assert_eq!(Worksheet::column_identifier(25), "Z");
    assert_eq!(Worksheet::column_identifier(26), "AA");
    assert_eq!(Worksheet::column_identifier(27), "AB");
    assert_eq!(Worksheet::column_identifier(701), "ZZ");
    assert_eq!(Worksheet::column_identifier(702), "AAA");
}
