//! End-to-end tests running the built-in rules through the engine on real files.

use std::path::Path;

use gostyle_core::{Diagnostic, Engine, EngineError, FileRole, RunReport, SourceInput};
use gostyle_go::GoParser;
use gostyle_rules::default_rules;

fn engine(parallelism: Option<usize>) -> Engine {
    Engine::builder()
        .parser(GoParser::new())
        .rules(default_rules())
        .parallelism(parallelism)
        .build()
        .expect("engine should build")
}

fn write_inputs(dir: &Path, files: &[(&str, &str)]) -> Vec<SourceInput> {
    files
        .iter()
        .map(|(name, content)| {
            let path = dir.join(name);
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent).expect("create dirs");
            }
            std::fs::write(&path, content).expect("write file");
            let role = FileRole::from_path(&path).expect("known suffix");
            SourceInput::new(path, role)
        })
        .collect()
}

fn run(files: &[(&str, &str)]) -> RunReport {
    let dir = tempfile::tempdir().expect("tempdir");
    let inputs = write_inputs(dir.path(), files);
    engine(None).analyze(&inputs).expect("analysis should succeed")
}

fn with_code<'a>(report: &'a RunReport, code: &str) -> Vec<&'a Diagnostic> {
    report.diagnostics.iter().filter(|d| d.code == code).collect()
}

const TABLE_DRIVEN_TEST: &str = r#"package foo_test

import (
	"os"
	"testing"
)

func TestMain(m *testing.M) {
	os.Exit(m.Run())
}

func TestFoo(t *testing.T) {
	tests := []struct {
		name string
	}{
		{name: "a"},
	}
	for _, tc := range tests {
		t.Run(tc.name, func(t *testing.T) {})
	}
}
"#;

#[test]
fn test_missing_doc_reports_only_missing() {
    let report = run(&[("pkg/run.go", "package pkg\n\nfunc Run() {}\n")]);
    let docs = with_code(&report, "GS001");
    assert_eq!(docs.len(), 1);
    assert_eq!(docs[0].message, "exported function Run must have doc comment");
    assert_eq!(docs[0].location.line, 3);
    assert!(!report
        .diagnostics
        .iter()
        .any(|d| d.message == "function comment should end with '.'"));
}

#[test]
fn test_doc_with_period_is_clean() {
    let report = run(&[(
        "pkg/run.go",
        "package pkg\n\n// Run starts the loop.\nfunc Run() {}\n",
    )]);
    assert!(report.is_clean(), "{:?}", report.diagnostics);
    assert_eq!(report.files_checked, 1);
}

#[test]
fn test_doc_without_period() {
    let report = run(&[(
        "pkg/run.go",
        "package pkg\n\n// Run starts the loop\nfunc Run() {}\n",
    )]);
    let docs = with_code(&report, "GS001");
    assert_eq!(docs.len(), 1);
    assert_eq!(docs[0].message, "function comment should end with '.'");
}

#[test]
fn test_malformed_file_isolated() {
    let report = run(&[
        (
            "pkg/broken.go",
            "package pkg\n\nfunc Broken_name( {\n\ttime.Sleep(1)\n",
        ),
        ("pkg/ok.go", "package pkg\n\nfunc get_value() {}\n"),
    ]);

    let failures = with_code(&report, "GS000");
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].message, "failed parsing");
    assert!(failures[0].location.is_file_level());
    assert!(failures[0].location.file.ends_with("pkg/broken.go"));

    let broken_structural = report.diagnostics.iter().filter(|d| {
        d.location.file.ends_with("pkg/broken.go") && d.code.starts_with("GS00") && d.code != "GS000"
    });
    assert_eq!(broken_structural.count(), 0);

    // Text rules still see the broken file.
    let sleeps = with_code(&report, "GS101");
    assert_eq!(sleeps.len(), 1);
    assert_eq!(sleeps[0].location.line, 4);

    // The next file is analyzed normally.
    assert!(report
        .diagnostics
        .iter()
        .any(|d| d.location.file.ends_with("pkg/ok.go") && d.code == "GS003"));
}

#[test]
fn test_invalid_utf8_file_isolated() {
    let dir = tempfile::tempdir().expect("tempdir");
    let latin1 = dir.path().join("a/latin1.go");
    std::fs::create_dir_all(latin1.parent().expect("parent")).expect("create dirs");
    std::fs::write(
        &latin1,
        b"package a\n\n// caf\xE9\nfunc run() {\n\ttime.Sleep(1)\n}\n",
    )
    .expect("write file");
    let mut inputs = vec![SourceInput::new(&latin1, FileRole::Source)];
    inputs.extend(write_inputs(
        dir.path(),
        &[("b/ok.go", "package b\n\nfunc get_value() {}\n")],
    ));

    let report = engine(None).analyze(&inputs).expect("analysis should succeed");
    assert_eq!(report.files_checked, 2);

    let failures = with_code(&report, "GS000");
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].location.file, latin1);

    let sleeps = with_code(&report, "GS101");
    assert_eq!(sleeps.len(), 1);
    assert_eq!(sleeps[0].location.line, 5);

    assert!(report
        .diagnostics
        .iter()
        .any(|d| d.location.file.ends_with("b/ok.go") && d.code == "GS003"));
}

#[test]
fn test_multiple_entries_without_test_main() {
    let report = run(&[(
        "pkg/multi_test.go",
        "package pkg\n\nimport \"testing\"\n\nfunc TestAlpha(t *testing.T) {}\n\nfunc TestBeta(t *testing.T) {}\n",
    )]);
    let messages: Vec<_> = with_code(&report, "GS006")
        .iter()
        .map(|d| d.message.as_str())
        .collect();
    assert!(messages.contains(&"missing TestMain function"));
    assert!(messages
        .iter()
        .any(|m| m.starts_with("multiple top-level test functions found")));
    assert!(!messages
        .iter()
        .any(|m| m.contains("does not follow table-driven test pattern")));
}

#[test]
fn test_table_driven_file_passes_structure() {
    let report = run(&[("pkg/foo_test.go", TABLE_DRIVEN_TEST)]);
    assert!(with_code(&report, "GS006").is_empty(), "{:?}", report.diagnostics);
    assert!(with_code(&report, "GS007").is_empty());
}

#[test]
fn test_helper_and_casing_in_test_file() {
    let source = format!(
        "{TABLE_DRIVEN_TEST}\nfunc Setup(t *testing.T) {{\n\tt.Log(\"setup\")\n}}\n"
    );
    let report = run(&[("pkg/foo_test.go", &source)]);
    let helper = with_code(&report, "GS007");
    assert_eq!(helper.len(), 1);
    assert_eq!(helper[0].message, "test helper function Setup should call t.Helper()");
    let casing = with_code(&report, "GS008");
    assert_eq!(casing.len(), 1);
    assert_eq!(casing[0].message, "test function Setup must start with lowercase letter");
}

#[test]
fn test_error_string_both_findings() {
    let report = run(&[(
        "pkg/errs.go",
        "package pkg\n\nimport \"errors\"\n\nvar errFailed = errors.New(\"Something failed.\")\n",
    )]);
    let messages: Vec<_> = with_code(&report, "GS104")
        .iter()
        .map(|d| (d.location.line, d.message.as_str()))
        .collect();
    assert_eq!(
        messages,
        vec![
            (5, "error string should not be capitalized"),
            (5, "error string should not end with '.'"),
        ]
    );
}

#[test]
fn test_proto_bug_reference() {
    let report = run(&[(
        "proto/acl.proto",
        "syntax = \"proto3\";\n\n// fix this b/123456789\nmessage Acl {}\n",
    )]);
    assert_eq!(report.diagnostics.len(), 1);
    let d = &report.diagnostics[0];
    assert_eq!(d.code, "GS106");
    assert_eq!(d.location.line, 3);
    assert!(d.message.contains("123456789"));
}

#[test]
fn test_determinism_and_parallelism() {
    let dir = tempfile::tempdir().expect("tempdir");
    let inputs = write_inputs(
        dir.path(),
        &[
            ("a/one.go", "package a\n\nfunc GetOne() int { return 1 }\n"),
            ("a/two_test.go", TABLE_DRIVEN_TEST),
            ("b/three.go", "package b\n\nvar nameString string\n"),
            ("b/bad.go", "package b\n\nfunc (\n"),
            ("c/x.proto", "// todo b/987654321\n"),
        ],
    );

    let first = engine(None).analyze(&inputs).expect("first run");
    let second = engine(None).analyze(&inputs).expect("second run");
    let bounded = engine(Some(2)).analyze(&inputs).expect("bounded run");

    assert_eq!(first.diagnostics, second.diagnostics);
    assert_eq!(first.diagnostics, bounded.diagnostics);
    assert_eq!(first.files_checked, 5);

    // Diagnostics follow input order.
    let order: Vec<_> = first
        .diagnostics
        .iter()
        .map(|d| inputs.iter().position(|i| i.path == d.location.file))
        .collect();
    let mut sorted = order.clone();
    sorted.sort();
    assert_eq!(order, sorted);
}

#[test]
fn test_missing_input_is_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let inputs = vec![SourceInput::new(dir.path().join("gone.go"), FileRole::Source)];
    let err = engine(None).analyze(&inputs).unwrap_err();
    assert!(matches!(err, EngineError::Io { .. }));
}
