// dnbuild: .NET build tool orchestration
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use insta::assert_snapshot;

use super::{AssemblyMetadata, LINE_ENDING, safe_version};
use crate::project::ProjectLanguage;

const GUID: &str = "4b2a7c1e-9f0d-4c55-8a31-1d3f6e7b9a20";

fn full() -> AssemblyMetadata {
    AssemblyMetadata::builder()
        .with_title("Billing")
        .with_company("Acme")
        .with_description("Invoice \"core\" services")
        .with_guid(GUID)
        .with_version("0.1.0.989-SNAPSHOT-1.0")
        .build()
}

#[test]
fn test_safe_version() {
    assert_eq!(safe_version("0.1.0.989-SNAPSHOT-1.0"), "0.1.0.989");
    assert_eq!(safe_version("1.2.3"), "1.2.3");
    assert_eq!(safe_version("2.0-beta"), "2.0");
    assert_eq!(safe_version("3."), "3");
    assert_eq!(safe_version("v1.0"), "");
    assert_eq!(safe_version(""), "");
}

#[test]
fn test_guid_and_version_only() {
    let metadata = AssemblyMetadata::builder()
        .with_guid(GUID)
        .with_version("0.1.0.989-SNAPSHOT-1.0")
        .build();

    assert_snapshot!(metadata.lines(ProjectLanguage::CSharp).join("\n"), @r#"
    using System.Reflection;
    using System.Runtime.InteropServices;

    [assembly: Guid("4b2a7c1e-9f0d-4c55-8a31-1d3f6e7b9a20")]
    [assembly: AssemblyVersion("0.1.0.989")]
    [assembly: AssemblyFileVersion("0.1.0.989")]
    [assembly: AssemblyInformationalVersion("0.1.0.989-SNAPSHOT-1.0")]
    "#);
}

#[test]
fn test_all_fields_csharp() {
    assert_snapshot!(full().lines(ProjectLanguage::CSharp).join("\n"), @r#"
    using System.Reflection;
    using System.Runtime.InteropServices;

    [assembly: AssemblyTitle("Billing")]
    [assembly: AssemblyProduct("Acme Billing")]
    [assembly: AssemblyDescription("Invoice \"core\" services")]
    [assembly: Guid("4b2a7c1e-9f0d-4c55-8a31-1d3f6e7b9a20")]
    [assembly: AssemblyVersion("0.1.0.989")]
    [assembly: AssemblyFileVersion("0.1.0.989")]
    [assembly: AssemblyInformationalVersion("0.1.0.989-SNAPSHOT-1.0")]
    "#);
}

#[test]
fn test_all_fields_visual_basic() {
    assert_snapshot!(full().lines(ProjectLanguage::VisualBasic).join("\n"), @r#"
    Imports System.Reflection
    Imports System.Runtime.InteropServices

    <Assembly: AssemblyTitle("Billing")>
    <Assembly: AssemblyProduct("Acme Billing")>
    <Assembly: AssemblyDescription("Invoice ""core"" services")>
    <Assembly: Guid("4b2a7c1e-9f0d-4c55-8a31-1d3f6e7b9a20")>
    <Assembly: AssemblyVersion("0.1.0.989")>
    <Assembly: AssemblyFileVersion("0.1.0.989")>
    <Assembly: AssemblyInformationalVersion("0.1.0.989-SNAPSHOT-1.0")>
    "#);
}

#[test]
fn test_empty_metadata_emits_header_only() {
    let lines = AssemblyMetadata::default().lines(ProjectLanguage::CSharp);
    assert_eq!(
        lines,
        [
            "using System.Reflection;",
            "using System.Runtime.InteropServices;",
            "",
        ]
    );
}

#[test]
fn test_blank_fields_are_skipped() {
    let metadata = AssemblyMetadata::builder()
        .with_title("  ")
        .with_company("Acme")
        .with_description("")
        .build();

    assert_eq!(metadata.title(), None);
    assert_eq!(metadata.product().as_deref(), Some("Acme"));
    let lines = metadata.lines(ProjectLanguage::CSharp);
    assert_eq!(lines.last().map(String::as_str), Some("[assembly: AssemblyProduct(\"Acme\")]"));
}

#[test]
fn test_version_without_numeric_prefix_keeps_informational_line() {
    let metadata = AssemblyMetadata::builder().with_version("SNAPSHOT").build();
    let lines = metadata.lines(ProjectLanguage::VisualBasic);
    assert_eq!(
        lines[3..],
        ["<Assembly: AssemblyInformationalVersion(\"SNAPSHOT\")>"]
    );
}

#[test]
fn test_csharp_escapes_backslashes() {
    let metadata = AssemblyMetadata::builder()
        .with_description(r"C:\builds\out")
        .build();
    let lines = metadata.lines(ProjectLanguage::CSharp);
    assert_eq!(lines[3], r#"[assembly: AssemblyDescription("C:\\builds\\out")]"#);
}

#[test]
fn test_render_uses_platform_line_endings() {
    let text = full().render(ProjectLanguage::CSharp);
    assert!(text.ends_with(LINE_ENDING));
    assert_eq!(text.matches(LINE_ENDING).count(), 10);
}

#[test]
fn test_write_replaces_file() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join(ProjectLanguage::VisualBasic.assembly_info_path());

    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, "stale").unwrap();

    let metadata = AssemblyMetadata::builder().with_title("Tools").build();
    metadata.write(ProjectLanguage::VisualBasic, &path).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, metadata.render(ProjectLanguage::VisualBasic));
    assert!(written.contains("<Assembly: AssemblyTitle(\"Tools\")>"));
}
