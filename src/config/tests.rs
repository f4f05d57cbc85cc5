// dnbuild: .NET build tool orchestration
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::loader::parse_override;
use super::{Config, ConfigLoader};
use crate::command::devenv::DevEnvAction;
use crate::command::msbuild::Verbosity;
use crate::logging::LogLevel;
use crate::project::ProjectLanguage;
use crate::utility::encoding::Encoding;
use std::path::PathBuf;

#[test]
fn test_default_config() {
    let config = Config::default();
    insta::assert_yaml_snapshot!(
        serde_json::json!({
            "global.dry": config.global.dry,
            "global.output_log_level": config.global.output_log_level.as_u8(),
            "project.configuration": config.project.configuration,
            "project.platform": config.project.platform,
            "msbuild.targets": config.msbuild.targets,
            "msbuild.node_reuse": config.msbuild.node_reuse,
            "tools.msbuild": config.tools.msbuild,
        }),
        @r#"
    global.dry: false
    global.output_log_level: 3
    msbuild.node_reuse: false
    msbuild.targets:
      - Build
    project.configuration: Debug
    project.platform: Any CPU
    tools.msbuild: msbuild.exe
    "#
    );
}

#[test]
fn test_config_parse() {
    let config = Config::parse(
        r#"
            [global]
            dry = true
            output_log_level = 4

            [tools]
            msbuild = 'C:\Program Files\MSBuild\msbuild.exe'

            [project]
            file = "App/App.csproj"
            language = "vb"
            configuration = "Release"
            platform = "x86"

            [msbuild]
            targets = ["Clean", "Build"]
            max_cpu_count = true
            verbosity = "minimal"

            [msbuild.properties]
            define = "TRACE"

            [devenv]
            action = "rebuild"
            project = "App"

            [assembly_info]
            company = "Acme"
            version = "1.2.3-beta"
        "#,
    )
    .unwrap();

    assert!(config.global.dry);
    assert_eq!(config.global.output_log_level, LogLevel::DEBUG);
    assert_eq!(
        config.tools.msbuild,
        PathBuf::from(r"C:\Program Files\MSBuild\msbuild.exe")
    );
    assert_eq!(config.tools.mstest, PathBuf::from("mstest.exe"));
    assert_eq!(config.project.file, Some(PathBuf::from("App/App.csproj")));
    assert_eq!(config.project.language, Some(ProjectLanguage::VisualBasic));
    assert_eq!(config.project.configuration, "Release");
    assert_eq!(config.msbuild.targets, ["Clean", "Build"]);
    assert!(config.msbuild.max_cpu_count);
    assert_eq!(config.msbuild.verbosity, Some(Verbosity::Minimal));
    assert_eq!(
        config.msbuild.properties.get("define").map(String::as_str),
        Some("TRACE")
    );
    assert_eq!(config.devenv.action, DevEnvAction::Rebuild);
    assert_eq!(config.devenv.project.as_deref(), Some("App"));
    assert_eq!(config.assembly_info.version.as_deref(), Some("1.2.3-beta"));
}

#[test]
fn test_deny_unknown_fields_top_level() {
    let err = Config::parse("[cmake]\ngenerator = \"Ninja\"").unwrap_err();
    assert!(err.to_string().contains("failed to parse config file"), "{err}");
}

#[test]
fn test_deny_unknown_fields_section() {
    assert!(Config::parse("[project]\nconfig = \"Release\"").is_err());
}

#[test]
fn test_log_level_out_of_range_rejected() {
    assert!(Config::parse("[global]\noutput_log_level = 9").is_err());
}

#[test]
fn test_validate_empty_configuration() {
    let err = Config::parse("[project]\nconfiguration = \"  \"").unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @"missing required config key 'configuration' in section '[project]'"
    );
}

#[test]
fn test_validate_empty_tool() {
    let err = Config::parse("[tools]\nmstest = \"\"").unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @"missing required config key 'mstest' in section '[tools]'"
    );
}

#[test]
fn test_later_source_wins() {
    let config = Config::builder()
        .add_toml_str("[project]\nconfiguration = \"Release\"\nplatform = \"x64\"")
        .add_toml_str("[project]\nconfiguration = \"Debug\"")
        .build()
        .unwrap();

    assert_eq!(config.project.configuration, "Debug");
    assert_eq!(config.project.platform, "x64");
}

#[test]
fn test_set_pairs_override_files() {
    let config = Config::builder()
        .add_toml_str("[project]\nconfiguration = \"Release\"")
        .set_pairs(["project.configuration=Debug", "global.dry = true"])
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(config.project.configuration, "Debug");
    assert!(config.global.dry);
}

#[test]
fn test_set_pairs_log_level_string() {
    let config = Config::builder()
        .set_pairs(["global.output_log_level=5"])
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(config.global.output_log_level, LogLevel::TRACE);
}

#[test]
fn test_parse_override() {
    assert_eq!(
        parse_override("msbuild.properties.define=A=B").unwrap(),
        ("msbuild.properties.define", "A=B")
    );
    insta::assert_snapshot!(
        parse_override("global.dry").unwrap_err().to_string(),
        @"invalid value for 'set' in section '[cli]': expected KEY=VALUE: 'global.dry'"
    );
    assert!(parse_override(" =1").is_err());
}

#[test]
fn test_config_loader_tracks_files() {
    let loader = ConfigLoader::new().add_toml_str("[global]\n dry = true");

    let loaded_files = loader.loaded_files();
    let files: Vec<_> = loaded_files
        .iter()
        .map(|(source, path)| (source.as_str(), path.to_string_lossy().into_owned()))
        .collect();
    insta::assert_yaml_snapshot!(files, @r#"
    - - string
      - "<string>"
    "#);
}

#[test]
fn test_config_loader_format_loaded_files() {
    let loader = ConfigLoader::new()
        .add_toml_str("[global]\n dry = true")
        .add_toml_str("[project]\n platform = \"x86\"");

    insta::assert_yaml_snapshot!(loader.format_loaded_files(), @r#"
    - "1. [string] <string>"
    - "2. [string] <string>"
    "#);
}

#[test]
fn test_config_loader_optional_only_tracks_existing() {
    let loader = ConfigLoader::new().add_toml_file_optional("/nonexistent/dnbuild.toml");

    assert!(loader.loaded_files().is_empty());
    assert!(loader.build().is_ok());
}

#[test]
fn test_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dnbuild.toml");
    std::fs::write(&path, "[devenv]\naction = \"clean\"\n").unwrap();

    let config = Config::from_file(&path).unwrap();
    assert_eq!(config.devenv.action, DevEnvAction::Clean);
}

#[test]
fn test_from_file_missing() {
    assert!(Config::from_file("/nonexistent/dnbuild.toml").is_err());
}

#[test]
fn test_format_options_deterministic() {
    let config = Config::parse(
        r#"
            [msbuild.properties]
            define = "TRACE"

            [assembly_info]
            title = "App"
        "#,
    )
    .unwrap();

    let first = config.format_options();
    assert_eq!(first, config.format_options());

    let mut sorted = first.clone();
    sorted.sort();
    assert_eq!(first, sorted);

    let joined = first.join("\n");
    assert!(joined.contains("msbuild.properties.define"));
    assert!(joined.contains("= TRACE"));
    assert!(joined.contains("assembly_info.title"));
    assert!(joined.contains("project.platform"));
}

#[test]
fn test_format_options_aligned() {
    let options = Config::default().format_options();
    let columns: Vec<_> = options.iter().map(|line| line.find(" = ")).collect();

    assert!(columns.iter().all(Option::is_some));
    assert!(columns.windows(2).all(|w| w[0] == w[1]));
}

#[test]
fn test_tools_output_encoding() {
    assert_eq!(Config::default().tools.output_encoding, Encoding::Utf8);

    let config = Config::parse("[tools]\noutput_encoding = \"oem\"").unwrap();
    assert_eq!(config.tools.output_encoding, Encoding::Oem);
    assert!(
        config
            .format_options()
            .iter()
            .any(|line| line.starts_with("tools.output_encoding") && line.ends_with("= oem"))
    );

    assert!(Config::parse("[tools]\noutput_encoding = \"ebcdic\"").is_err());
}
