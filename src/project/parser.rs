// dnbuild: .NET build tool orchestration
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `MSBuild` project file parser.
//!
//! ```text
//! bytes --decode_document--> text --roxmltree--> <Project>
//!   <PropertyGroup>                          project-level properties
//!     TargetFrameworkVersion, RootNamespace, AssemblyName, ...
//!   <PropertyGroup Condition=" '$(Configuration)|$(Platform)' == 'Debug|AnyCPU' ">
//!     Optimize, DebugSymbols, DebugType, OutputPath, DefineConstants,
//!     ErrorReport, WarningLevel, DocumentationFile
//!   <Import Project="...\Microsoft.CSharp.targets" />   language marker
//! ```
//!
//! Any failure yields an error naming the file and the field; no partial
//! model is ever returned.

use std::path::{Path, PathBuf};

use roxmltree::{Document, Node};
use tracing::{debug, trace};

use super::{
    BuildConfiguration, ClosedSet, Configurations, DebugType, ErrorReport, ProjectLanguage,
    ProjectModel,
};
use crate::error::ProjectError;
use crate::utility::encoding::decode_document;

const CONFIGURATION_VAR: &str = "$(Configuration)";
const PLATFORM_VAR: &str = "$(Platform)";

/// Booleans as `MSBuild` authors them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Flag(bool);

impl ClosedSet for Flag {
    const VARIANTS: &'static [(&'static str, Self)] = &[("true", Self(true)), ("false", Self(false))];
}

/// Parser turning project documents into [`ProjectModel`]s.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProjectParser {
    language: Option<ProjectLanguage>,
}

impl ProjectParser {
    #[must_use]
    pub const fn new() -> Self {
        Self { language: None }
    }

    /// Forces the project language instead of detecting it.
    #[must_use]
    pub const fn language(mut self, language: Option<ProjectLanguage>) -> Self {
        self.language = language;
        self
    }

    /// Reads and parses the project file at `path`.
    ///
    /// # Errors
    ///
    /// Returns `ProjectError::Read` if the file cannot be read, otherwise
    /// the errors of [`Self::parse_str`].
    pub fn parse_file(&self, path: &Path) -> Result<ProjectModel, ProjectError> {
        debug!(path = %path.display(), "reading project file");
        let bytes = std::fs::read(path).map_err(|source| ProjectError::Read {
            path: path.display().to_string(),
            source,
        })?;
        self.parse_str(path, &decode_document(&bytes))
    }

    /// Parses a project document already held in memory.
    ///
    /// `path` is used for language detection and error messages only.
    ///
    /// # Errors
    ///
    /// - `MalformedProjectFile` if the XML is not well-formed, the root is not
    ///   `<Project>`, `TargetFrameworkVersion` is missing, no configuration
    ///   block exists, a block lacks `OutputPath`, a configuration name repeats,
    ///   or `WarningLevel` is not an integer.
    /// - `UnknownEnumValue` for unrecognized `DebugType`, `ErrorReport`,
    ///   `Optimize` or `DebugSymbols` text.
    /// - `UnsupportedProjectLanguage` if no language can be determined.
    pub fn parse_str(&self, path: &Path, content: &str) -> Result<ProjectModel, ProjectError> {
        let ctx = ParseContext::new(path);

        let doc = Document::parse(content)
            .map_err(|e| ctx.malformed(format!("invalid XML: {e}")))?;
        let root = doc.root_element();
        if root.tag_name().name() != "Project" {
            return Err(ctx.malformed(format!(
                "root element is <{}>, expected <Project>",
                root.tag_name().name()
            )));
        }

        let language = self.detect_language(&ctx, root)?;

        let mut properties = ProjectProperties::default();
        let mut configurations = Configurations::default();

        for group in children_named(root, "PropertyGroup") {
            let key = match group.attribute("Condition") {
                Some(condition) => configuration_key(condition).map_err(|e| ctx.malformed(e))?,
                None => None,
            };
            match key {
                Some((name, platform)) if !name.is_empty() => {
                    let configuration = ctx.configuration(group, name, platform)?;
                    trace!(
                        path = %path.display(),
                        configuration = configuration.name(),
                        "parsed configuration block"
                    );
                    configurations
                        .insert(configuration)
                        .map_err(|dup| ctx.malformed(duplicate_message(&dup)))?;
                }
                _ => properties.collect(group),
            }
        }

        let target_framework = properties
            .target_framework
            .ok_or_else(|| ctx.malformed("missing <TargetFrameworkVersion>"))?;
        if configurations.is_empty() {
            return Err(ctx.malformed("no build configuration blocks"));
        }

        debug!(
            path = %path.display(),
            language = %language,
            target_framework = %target_framework,
            configurations = ?configurations.names().collect::<Vec<_>>(),
            "parsed project"
        );

        Ok(ProjectModel {
            path: path.to_path_buf(),
            language,
            target_framework,
            root_namespace: properties.root_namespace.unwrap_or_default(),
            assembly_name: properties.assembly_name.unwrap_or_default(),
            project_guid: properties.project_guid,
            output_type: properties.output_type,
            configurations,
        })
    }

    fn detect_language(
        &self,
        ctx: &ParseContext<'_>,
        root: Node<'_, '_>,
    ) -> Result<ProjectLanguage, ProjectError> {
        if let Some(language) = self.language {
            return Ok(language);
        }
        if let Some(language) = ProjectLanguage::from_project_path(ctx.path) {
            return Ok(language);
        }
        children_named(root, "Import")
            .filter_map(|import| import.attribute("Project"))
            .find_map(ProjectLanguage::from_targets_import)
            .ok_or_else(|| ProjectError::UnsupportedProjectLanguage {
                path: ctx.display.clone(),
            })
    }
}

/// Project-level properties, first authored value wins.
#[derive(Debug, Default)]
struct ProjectProperties {
    target_framework: Option<String>,
    root_namespace: Option<String>,
    assembly_name: Option<String>,
    project_guid: Option<String>,
    output_type: Option<String>,
}

impl ProjectProperties {
    fn collect(&mut self, group: Node<'_, '_>) {
        let slots = [
            ("TargetFrameworkVersion", &mut self.target_framework),
            ("RootNamespace", &mut self.root_namespace),
            ("AssemblyName", &mut self.assembly_name),
            ("ProjectGuid", &mut self.project_guid),
            ("OutputType", &mut self.output_type),
        ];
        for (name, slot) in slots {
            if slot.is_none() {
                *slot = property(group, name).map(str::to_string);
            }
        }
    }
}

struct ParseContext<'p> {
    path: &'p Path,
    display: String,
}

impl<'p> ParseContext<'p> {
    fn new(path: &'p Path) -> Self {
        Self {
            path,
            display: path.display().to_string(),
        }
    }

    fn malformed(&self, message: impl Into<String>) -> ProjectError {
        ProjectError::malformed(self.display.clone(), message)
    }

    fn lookup<T: ClosedSet>(&self, field: &str, text: &str) -> Result<T, ProjectError> {
        T::lookup(text).ok_or_else(|| ProjectError::UnknownEnumValue {
            path: self.display.clone(),
            field: field.to_string(),
            value: text.to_string(),
        })
    }

    fn flag(&self, group: Node<'_, '_>, field: &'static str) -> Result<bool, ProjectError> {
        property(group, field).map_or(Ok(false), |text| {
            self.lookup::<Flag>(field, text).map(|flag| flag.0)
        })
    }

    fn enumerated<T: ClosedSet + Default>(
        &self,
        group: Node<'_, '_>,
        field: &'static str,
    ) -> Result<T, ProjectError> {
        property(group, field).map_or_else(|| Ok(T::default()), |text| self.lookup(field, text))
    }

    fn configuration(
        &self,
        group: Node<'_, '_>,
        name: String,
        platform: Option<String>,
    ) -> Result<BuildConfiguration, ProjectError> {
        let output_path = raw_property(group, "OutputPath").ok_or_else(|| {
            self.malformed(format!("configuration '{name}' has no <OutputPath>"))
        })?;

        let warning_level = property(group, "WarningLevel")
            .map(|text| {
                text.parse::<u32>().map_err(|_| {
                    self.malformed(format!(
                        "<WarningLevel> '{text}' in configuration '{name}' is not an integer"
                    ))
                })
            })
            .transpose()?;

        Ok(BuildConfiguration {
            debug_type: self.enumerated::<DebugType>(group, "DebugType")?,
            optimize: self.flag(group, "Optimize")?,
            debug_symbols: self.flag(group, "DebugSymbols")?,
            output_path: PathBuf::from(output_path),
            documentation_file: raw_property(group, "DocumentationFile").map(PathBuf::from),
            error_report: self.enumerated::<ErrorReport>(group, "ErrorReport")?,
            define_constants: split_constants(property(group, "DefineConstants").unwrap_or("")),
            warning_level,
            name,
            platform,
        })
    }
}

fn children_named<'a, 'input: 'a>(
    node: Node<'a, 'input>,
    name: &'static str,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children()
        .filter(move |n| n.is_element() && n.tag_name().name() == name)
}

/// Trimmed text of the first `<name>` child; empty elements count as absent.
fn property<'a>(group: Node<'a, '_>, name: &'static str) -> Option<&'a str> {
    raw_property(group, name).map(str::trim)
}

/// Text of the first `<name>` child as authored; blank elements count as absent.
fn raw_property<'a>(group: Node<'a, '_>, name: &'static str) -> Option<&'a str> {
    children_named(group, name)
        .next()
        .and_then(|n| n.text())
        .filter(|text| !text.trim().is_empty())
}

fn duplicate_message(duplicate: &BuildConfiguration) -> String {
    match duplicate.platform() {
        Some(platform) => format!(
            "duplicate configuration '{}' (platform '{platform}'); configurations are keyed by name only",
            duplicate.name()
        ),
        None => format!("duplicate configuration '{}'", duplicate.name()),
    }
}

/// Splits `DEBUG;TRACE` into its symbols, keeping authored order.
pub(super) fn split_constants(text: &str) -> Vec<String> {
    text.split(';')
        .map(str::trim)
        .filter(|symbol| !symbol.is_empty())
        .map(str::to_string)
        .collect()
}

/// Configuration name and optional platform selected by a group condition.
pub(super) type ConfigurationKey = (String, Option<String>);

/// Extracts configuration and platform from a group condition such as
/// `'$(Configuration)|$(Platform)' == 'Debug|AnyCPU'`.
///
/// Returns `Ok(None)` if the condition does not select on `$(Configuration)`.
///
/// # Errors
///
/// Returns a message when `$(Configuration)` is compared against anything
/// other than a single quoted literal, e.g. a compound `And` expression.
pub(super) fn configuration_key(condition: &str) -> Result<Option<ConfigurationKey>, String> {
    let Some((lhs, rhs)) = condition.split_once("==") else {
        return Ok(None);
    };
    let Some(lhs) = quoted_literal(lhs) else {
        return Ok(None);
    };
    if !lhs.split('|').any(|var| var.trim() == CONFIGURATION_VAR) {
        return Ok(None);
    }
    let rhs = quoted_literal(rhs).ok_or_else(|| {
        format!("unsupported Condition \"{}\", expected a single quoted value", condition.trim())
    })?;

    let mut name = None;
    let mut platform = None;
    for (var, value) in lhs.split('|').zip(rhs.split('|')) {
        match var.trim() {
            CONFIGURATION_VAR => name = Some(value.trim().to_string()),
            PLATFORM_VAR => platform = Some(value.trim().to_string()),
            _ => {}
        }
    }
    Ok(name.map(|name| (name, platform.filter(|p| !p.is_empty()))))
}

/// Contents of `'...'` with no quote inside.
fn quoted_literal(text: &str) -> Option<&str> {
    let inner = text.trim().strip_prefix('\'')?.strip_suffix('\'')?;
    (!inner.contains('\'')).then_some(inner)
}
