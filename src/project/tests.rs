// dnbuild: .NET build tool orchestration
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::Path;

use super::parser::{ProjectParser, configuration_key, split_constants};
use super::{ClosedSet, DebugType, ErrorReport, ProjectLanguage};
use crate::error::ProjectError;

const LIBRARY_CSPROJ: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<Project ToolsVersion="3.5" DefaultTargets="Build" xmlns="http://schemas.microsoft.com/developer/msbuild/2003">
  <PropertyGroup>
    <Configuration Condition=" '$(Configuration)' == '' ">Debug</Configuration>
    <Platform Condition=" '$(Platform)' == '' ">AnyCPU</Platform>
    <ProjectGuid>{6B3A1D2E-9C4F-4E8A-B1D7-0F2C3E4A5B6C}</ProjectGuid>
    <OutputType>Library</OutputType>
    <RootNamespace>Acme.Widgets</RootNamespace>
    <AssemblyName>Acme.Widgets</AssemblyName>
    <TargetFrameworkVersion>v3.5</TargetFrameworkVersion>
  </PropertyGroup>
  <PropertyGroup Condition=" '$(Configuration)|$(Platform)' == 'Debug|AnyCPU' ">
    <DebugSymbols>true</DebugSymbols>
    <DebugType>full</DebugType>
    <Optimize>false</Optimize>
    <OutputPath>bin\Debug\</OutputPath>
    <DefineConstants>DEBUG;TRACE</DefineConstants>
    <ErrorReport>prompt</ErrorReport>
    <WarningLevel>4</WarningLevel>
    <DocumentationFile>bin\Debug\Acme.Widgets.xml</DocumentationFile>
  </PropertyGroup>
  <PropertyGroup Condition=" '$(Configuration)|$(Platform)' == 'Release|AnyCPU' ">
    <DebugSymbols>false</DebugSymbols>
    <DebugType>pdbonly</DebugType>
    <Optimize>true</Optimize>
    <OutputPath>bin\Release\</OutputPath>
    <DefineConstants>TRACE</DefineConstants>
    <ErrorReport>prompt</ErrorReport>
    <WarningLevel>4</WarningLevel>
  </PropertyGroup>
  <ItemGroup>
    <Compile Include="Widget.cs" />
  </ItemGroup>
  <Import Project="$(MSBuildToolsPath)\Microsoft.CSharp.targets" />
</Project>
"#;

fn parse(path: &str, content: &str) -> Result<super::ProjectModel, ProjectError> {
    ProjectParser::new().parse_str(Path::new(path), content)
}

/// Wraps configuration blocks in a minimal valid project.
fn project_with(groups: &str) -> String {
    format!(
        r"<Project>
  <PropertyGroup>
    <TargetFrameworkVersion>v2.0</TargetFrameworkVersion>
  </PropertyGroup>
{groups}
</Project>"
    )
}

#[test]
fn test_parse_project_level_properties() {
    let model = parse("Acme.Widgets.csproj", LIBRARY_CSPROJ).unwrap();

    assert_eq!(model.language(), ProjectLanguage::CSharp);
    assert_eq!(model.target_framework(), "v3.5");
    assert_eq!(model.root_namespace(), "Acme.Widgets");
    assert_eq!(model.assembly_name(), "Acme.Widgets");
    assert_eq!(
        model.project_guid(),
        Some("{6B3A1D2E-9C4F-4E8A-B1D7-0F2C3E4A5B6C}")
    );
    assert_eq!(model.output_type(), Some("Library"));
    assert_eq!(model.path(), Path::new("Acme.Widgets.csproj"));
}

#[test]
fn test_parse_configuration_count_matches_blocks() {
    let model = parse("Acme.Widgets.csproj", LIBRARY_CSPROJ).unwrap();

    assert_eq!(model.configurations().len(), 2);
    let names: Vec<&str> = model.configurations().names().collect();
    assert_eq!(names, vec!["Debug", "Release"]);
}

#[test]
fn test_parse_debug_configuration_verbatim() {
    let model = parse("Acme.Widgets.csproj", LIBRARY_CSPROJ).unwrap();
    let debug = model.configuration("Debug").unwrap();

    assert_eq!(debug.name(), "Debug");
    assert_eq!(debug.platform(), Some("AnyCPU"));
    assert!(!debug.optimize());
    assert!(debug.debug_symbols());
    assert_eq!(debug.debug_type(), DebugType::Full);
    assert_eq!(debug.define_constants(), ["DEBUG", "TRACE"]);
    assert_eq!(debug.warning_level(), Some(4));
    assert_eq!(debug.error_report(), ErrorReport::Prompt);
    assert_eq!(debug.output_path(), Path::new(r"bin\Debug\"));
    assert_eq!(
        debug.documentation_file(),
        Some(Path::new(r"bin\Debug\Acme.Widgets.xml"))
    );
}

#[test]
fn test_parse_release_configuration_verbatim() {
    let model = parse("Acme.Widgets.csproj", LIBRARY_CSPROJ).unwrap();
    let release = model.configuration("Release").unwrap();

    assert!(release.optimize());
    assert!(!release.debug_symbols());
    assert_eq!(release.debug_type(), DebugType::PdbOnly);
    assert_eq!(release.define_constants(), ["TRACE"]);
    assert_eq!(release.warning_level(), Some(4));
    assert_eq!(release.output_path().to_str(), Some(r"bin\Release\"));
    assert_eq!(release.documentation_file(), None);
}

#[test]
fn test_parse_defaults_for_absent_fields() {
    let content = project_with(
        r#"  <PropertyGroup Condition="">
  </PropertyGroup>
  <PropertyGroup Condition=" '$(Configuration)' == 'Bare' ">
    <OutputPath>out</OutputPath>
    <DefineConstants></DefineConstants>
  </PropertyGroup>"#,
    );
    let model = parse("Bare.csproj", &content).unwrap();
    let bare = model.configuration("Bare").unwrap();

    assert!(!bare.optimize());
    assert!(!bare.debug_symbols());
    assert_eq!(bare.debug_type(), DebugType::None);
    assert_eq!(bare.error_report(), ErrorReport::None);
    assert!(bare.define_constants().is_empty());
    assert_eq!(bare.warning_level(), None);
    assert_eq!(bare.platform(), None);
    assert_eq!(model.root_namespace(), "");
}

#[test]
fn test_parse_enum_lookup_is_case_insensitive() {
    let content = project_with(
        r#"  <PropertyGroup Condition="'$(Configuration)' == 'Debug'">
    <DebugType>PDBONLY</DebugType>
    <ErrorReport>Send</ErrorReport>
    <Optimize>TRUE</Optimize>
    <OutputPath>bin</OutputPath>
  </PropertyGroup>"#,
    );
    let model = parse("Case.csproj", &content).unwrap();
    let debug = model.configuration("Debug").unwrap();

    assert_eq!(debug.debug_type(), DebugType::PdbOnly);
    assert_eq!(debug.error_report(), ErrorReport::Send);
    assert!(debug.optimize());
}

#[test]
fn test_parse_unknown_debug_type() {
    let content = project_with(
        r#"  <PropertyGroup Condition="'$(Configuration)' == 'Debug'">
    <DebugType>portable</DebugType>
    <OutputPath>bin</OutputPath>
  </PropertyGroup>"#,
    );
    let err = parse("Enum.csproj", &content).unwrap_err();

    insta::assert_snapshot!(err.to_string(), @"unknown value 'portable' for 'DebugType' in project file 'Enum.csproj'");
}

#[test]
fn test_parse_unknown_boolean() {
    let content = project_with(
        r#"  <PropertyGroup Condition="'$(Configuration)' == 'Debug'">
    <Optimize>yes</Optimize>
    <OutputPath>bin</OutputPath>
  </PropertyGroup>"#,
    );
    let err = parse("Flag.csproj", &content).unwrap_err();

    assert!(
        matches!(&err, ProjectError::UnknownEnumValue { field, value, .. } if field == "Optimize" && value == "yes"),
        "got {err:?}"
    );
}

#[test]
fn test_parse_warning_level_not_integer() {
    let content = project_with(
        r#"  <PropertyGroup Condition="'$(Configuration)' == 'Debug'">
    <OutputPath>bin</OutputPath>
    <WarningLevel>high</WarningLevel>
  </PropertyGroup>"#,
    );
    let err = parse("Warn.csproj", &content).unwrap_err();

    insta::assert_snapshot!(err.to_string(), @"malformed project file 'Warn.csproj': <WarningLevel> 'high' in configuration 'Debug' is not an integer");
}

#[test]
fn test_parse_missing_target_framework() {
    let content = r#"<Project>
  <PropertyGroup Condition="'$(Configuration)' == 'Debug'">
    <OutputPath>bin</OutputPath>
  </PropertyGroup>
</Project>"#;
    let err = parse("NoFx.csproj", content).unwrap_err();

    insta::assert_snapshot!(err.to_string(), @"malformed project file 'NoFx.csproj': missing <TargetFrameworkVersion>");
}

#[test]
fn test_parse_without_configurations() {
    let err = parse("Empty.csproj", &project_with("")).unwrap_err();

    insta::assert_snapshot!(err.to_string(), @"malformed project file 'Empty.csproj': no build configuration blocks");
}

#[test]
fn test_parse_missing_output_path() {
    let content = project_with(
        r#"  <PropertyGroup Condition="'$(Configuration)' == 'Debug'">
    <Optimize>false</Optimize>
  </PropertyGroup>"#,
    );
    let err = parse("NoOut.csproj", &content).unwrap_err();

    insta::assert_snapshot!(err.to_string(), @"malformed project file 'NoOut.csproj': configuration 'Debug' has no <OutputPath>");
}

#[test]
fn test_parse_duplicate_configuration() {
    let content = project_with(
        r#"  <PropertyGroup Condition="'$(Configuration)|$(Platform)' == 'Debug|AnyCPU'">
    <OutputPath>bin\Debug\</OutputPath>
  </PropertyGroup>
  <PropertyGroup Condition="'$(Configuration)|$(Platform)' == 'Debug|x86'">
    <OutputPath>bin\x86\Debug\</OutputPath>
  </PropertyGroup>"#,
    );
    let err = parse("Dup.csproj", &content).unwrap_err();

    insta::assert_snapshot!(err.to_string(), @"malformed project file 'Dup.csproj': duplicate configuration 'Debug' (platform 'x86'); configurations are keyed by name only");
}

#[test]
fn test_parse_compound_condition_is_rejected() {
    let content = project_with(
        r#"  <PropertyGroup Condition=" '$(Configuration)' == 'Debug' And '$(Platform)' == 'x86' ">
    <OutputPath>bin\x86\Debug\</OutputPath>
  </PropertyGroup>"#,
    );
    let err = parse("Compound.csproj", &content).unwrap_err();

    assert!(
        matches!(err, ProjectError::MalformedProjectFile { .. }),
        "got {err:?}"
    );
    insta::assert_snapshot!(err.to_string(), @r#"malformed project file 'Compound.csproj': unsupported Condition "'$(Configuration)' == 'Debug' And '$(Platform)' == 'x86'", expected a single quoted value"#);
}

#[test]
fn test_parse_path_fields_keep_authored_text() {
    let content = project_with(
        r#"  <PropertyGroup Condition="'$(Configuration)' == 'Debug'">
    <OutputPath> bin\Debug\ </OutputPath>
    <DocumentationFile>doc\App.xml </DocumentationFile>
    <DebugType> full </DebugType>
  </PropertyGroup>"#,
    );
    let model = parse("Spaces.csproj", &content).unwrap();
    let debug = model.configuration("Debug").unwrap();

    assert_eq!(debug.output_path(), Path::new(r" bin\Debug\ "));
    assert_eq!(debug.documentation_file(), Some(Path::new(r"doc\App.xml ")));
    assert_eq!(debug.debug_type(), DebugType::Full);
}

#[test]
fn test_parse_invalid_xml() {
    let err = parse("Broken.csproj", "<Project><PropertyGroup></Project>").unwrap_err();
    assert!(
        matches!(err, ProjectError::MalformedProjectFile { .. }),
        "got {err:?}"
    );
}

#[test]
fn test_parse_wrong_root_element() {
    let err = parse("Pom.csproj", "<project/>").unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"malformed project file 'Pom.csproj': root element is <project>, expected <Project>");
}

#[test]
fn test_language_from_extension() {
    let content = project_with(
        r#"  <PropertyGroup Condition="'$(Configuration)' == 'Debug'">
    <OutputPath>bin</OutputPath>
  </PropertyGroup>"#,
    );
    let model = parse("Legacy.VBPROJ", &content).unwrap();
    assert_eq!(model.language(), ProjectLanguage::VisualBasic);
}

#[test]
fn test_language_from_targets_import() {
    let content = LIBRARY_CSPROJ.replace("Microsoft.CSharp.targets", "Microsoft.VisualBasic.targets");
    let model = parse("build.proj", &content).unwrap();
    assert_eq!(model.language(), ProjectLanguage::VisualBasic);
}

#[test]
fn test_language_override_wins() {
    let model = ProjectParser::new()
        .language(Some(ProjectLanguage::VisualBasic))
        .parse_str(Path::new("Acme.Widgets.csproj"), LIBRARY_CSPROJ)
        .unwrap();
    assert_eq!(model.language(), ProjectLanguage::VisualBasic);
}

#[test]
fn test_unsupported_language() {
    let content = project_with(
        r#"  <PropertyGroup Condition="'$(Configuration)' == 'Debug'">
    <OutputPath>bin</OutputPath>
  </PropertyGroup>"#,
    );
    let err = parse("Script.fsproj", &content).unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"unsupported project language in 'Script.fsproj'");
}

#[test]
fn test_parse_file_reads_bom_prefixed_document() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("Acme.Widgets.csproj");
    let mut bytes = b"\xEF\xBB\xBF".to_vec();
    bytes.extend_from_slice(LIBRARY_CSPROJ.as_bytes());
    std::fs::write(&path, bytes).unwrap();

    let model = ProjectParser::new().parse_file(&path).unwrap();
    assert_eq!(model.path(), path);
    assert_eq!(model.directory(), temp.path());
    assert_eq!(model.configurations().len(), 2);
}

#[test]
fn test_parse_file_missing() {
    let err = ProjectParser::new()
        .parse_file(Path::new("does/not/exist.csproj"))
        .unwrap_err();
    assert!(matches!(err, ProjectError::Read { .. }), "got {err:?}");
}

#[test]
fn test_configuration_key_with_platform() {
    let key = configuration_key(" '$(Configuration)|$(Platform)' == 'Debug|AnyCPU' ");
    assert_eq!(key, Ok(Some(("Debug".to_string(), Some("AnyCPU".to_string())))));
}

#[test]
fn test_configuration_key_configuration_only() {
    let key = configuration_key("'$(Configuration)' == 'Release'");
    assert_eq!(key, Ok(Some(("Release".to_string(), None))));
}

#[test]
fn test_configuration_key_unrelated_condition() {
    assert_eq!(configuration_key("'$(OS)' == 'Windows_NT'"), Ok(None));
    assert_eq!(configuration_key("Exists('foo.targets')"), Ok(None));
    assert_eq!(configuration_key("'$(Configuration)' == ''"), Ok(Some((String::new(), None))));
}

#[test]
fn test_configuration_key_requires_single_literal() {
    let err = configuration_key("'$(Configuration)' == 'Debug' And '$(Platform)' == 'x86'")
        .unwrap_err();
    assert!(err.contains("unsupported Condition"), "{err}");

    assert!(configuration_key("'$(Configuration)' == $(Other)").is_err());
}

#[test]
fn test_split_constants() {
    assert_eq!(split_constants("DEBUG;TRACE"), vec!["DEBUG", "TRACE"]);
    assert_eq!(split_constants(" A ; ;B;"), vec!["A", "B"]);
    assert!(split_constants("").is_empty());
}

#[test]
fn test_closed_set_lookup() {
    assert_eq!(DebugType::lookup(" Full "), Some(DebugType::Full));
    assert_eq!(DebugType::lookup("fullish"), None);
    assert_eq!(ErrorReport::Prompt.as_str(), "prompt");
    assert_eq!(ProjectLanguage::lookup("C#"), Some(ProjectLanguage::CSharp));
    assert!("fsharp".parse::<ProjectLanguage>().is_err());
}
