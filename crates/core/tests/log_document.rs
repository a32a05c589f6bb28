//! Integration test: parse the sample logs end to end and turn every case
//! into plot commands.

use makespan_plot_core::parsers::{self, LogFormat, ParseError};
use makespan_plot_core::views::line_plot::render_line_plot;
use makespan_plot_core::writer::LogWriter;
use makespan_plot_core::{LogDocument, LogRow};
use makespan_plot_protocol::{RenderCommand, Viewport};

const SINGLE: &str = include_str!("fixtures/single.log");
const MULTI: &str = include_str!("fixtures/multi.log");

#[test]
fn single_case_fixture() {
    assert_eq!(parsers::detect_format(SINGLE), LogFormat::Single);
    let doc = parsers::parse(SINGLE, LogFormat::Single).expect("failed to parse single.log");

    assert_eq!(doc.len(), 1);
    let case = &doc.cases()[0];
    assert_eq!(case.len(), 8);
    assert_eq!(case.indices(), (0..8).collect::<Vec<i64>>());
    assert_eq!(case.rows()[0], LogRow::new(0, 1203));
    assert_eq!(case.best(), Some(LogRow::new(7, 1098)));
}

#[test]
fn multi_case_fixture() {
    assert_eq!(parsers::detect_format(MULTI), LogFormat::Multi);
    let doc = parsers::parse_auto(MULTI).expect("failed to parse multi.log");

    // Four delimiters, the last one trailing.
    assert_eq!(doc.len(), 3);
    let sizes: Vec<usize> = doc.iter().map(|c| c.len()).collect();
    assert_eq!(sizes, vec![4, 3, 3]);
    assert_eq!(doc.cases()[1].makespans(), vec![880, 861, 844]);
    assert_eq!(doc.total_rows(), 10);
}

#[test]
fn parsing_is_repeatable() {
    let a = parsers::parse_auto(MULTI).unwrap();
    let b = parsers::parse_auto(MULTI).unwrap();
    assert_eq!(a, b);
}

#[test]
fn multi_fixture_is_not_a_single_case_log() {
    // Read as single-case, the delimiter line is a one-field data row.
    let err = parsers::parse(MULTI, LogFormat::Single).unwrap_err();
    assert!(
        matches!(err, ParseError::MissingField { line: 5, found: 1 }),
        "{err:?}"
    );
}

#[test]
fn every_case_renders_a_titled_figure() {
    let doc = parsers::parse_auto(MULTI).unwrap();
    let vp = Viewport::new(100.0, 30.0);

    for (i, case) in doc.iter().enumerate() {
        let cmds = render_line_plot(case, i + 1, &vp);
        let title = format!("Case {}", i + 1);
        assert!(cmds.iter().any(
            |c| matches!(c, RenderCommand::DrawText { text, .. } if *text == title)
        ));
        let points = cmds.iter().find_map(|c| match c {
            RenderCommand::DrawPolyline { points, .. } => Some(points.len()),
            _ => None,
        });
        assert_eq!(points, Some(case.len()));
    }
}

#[test]
fn writer_output_reads_back() {
    let doc = parsers::parse_auto(MULTI).unwrap();

    let mut writer = LogWriter::without_header(Vec::new());
    for case in &doc {
        for row in case.rows() {
            writer.record(row.index, row.makespan).unwrap();
        }
        writer.end_case().unwrap();
    }
    let text = String::from_utf8(writer.into_inner().unwrap()).unwrap();

    let reread: LogDocument = parsers::parse(&text, LogFormat::Multi).unwrap();
    assert_eq!(reread, doc);
}
