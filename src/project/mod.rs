// dnbuild: .NET build tool orchestration
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! In-memory model of an `MSBuild` project file.
//!
//! ```text
//! ProjectModel
//!   path, language (CSharp | VisualBasic), target_framework,
//!   root_namespace, assembly_name, [project_guid, output_type]
//!   configurations: Configurations
//!        "Debug"   --> BuildConfiguration
//!        "Release" --> BuildConfiguration
//!
//! BuildConfiguration
//!   debug_type (None | Full | PdbOnly), optimize, debug_symbols,
//!   output_path, documentation_file?, error_report (None | Prompt | Send),
//!   define_constants [..], warning_level?
//! ```
//!
//! Models are produced by [`parser::ProjectParser`] and never mutated
//! afterwards.

pub mod parser;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Enumerations parsed from free project text.
///
/// Lookup is case-insensitive and exact against a closed set; anything else
/// is rejected rather than mapped to a default.
pub trait ClosedSet: Sized + Copy + 'static {
    /// Authored spelling and value of every variant.
    const VARIANTS: &'static [(&'static str, Self)];

    /// Looks up `text` (surrounding whitespace ignored).
    #[must_use]
    fn lookup(text: &str) -> Option<Self> {
        let text = text.trim();
        Self::VARIANTS
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(text))
            .map(|(_, value)| *value)
    }

    /// Returns the authored spelling of `self`.
    #[must_use]
    fn as_str(self) -> &'static str
    where
        Self: PartialEq,
    {
        Self::VARIANTS
            .iter()
            .find(|(_, value)| *value == self)
            .map_or("", |(name, _)| name)
    }
}

/// Source language of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectLanguage {
    #[serde(rename = "csharp", alias = "CSharp", alias = "cs")]
    CSharp,
    #[serde(rename = "visualbasic", alias = "VisualBasic", alias = "vb")]
    VisualBasic,
}

impl ClosedSet for ProjectLanguage {
    const VARIANTS: &'static [(&'static str, Self)] = &[
        ("csharp", Self::CSharp),
        ("c#", Self::CSharp),
        ("cs", Self::CSharp),
        ("visualbasic", Self::VisualBasic),
        ("vb", Self::VisualBasic),
    ];
}

impl ProjectLanguage {
    /// Detects the language from a project file extension.
    #[must_use]
    pub fn from_project_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        if ext.eq_ignore_ascii_case("csproj") {
            Some(Self::CSharp)
        } else if ext.eq_ignore_ascii_case("vbproj") {
            Some(Self::VisualBasic)
        } else {
            None
        }
    }

    /// Detects the language from an imported targets file, e.g.
    /// `$(MSBuildToolsPath)\Microsoft.CSharp.targets`.
    #[must_use]
    pub fn from_targets_import(import: &str) -> Option<Self> {
        let file = import.rsplit(['\\', '/']).next().unwrap_or(import);
        if file.eq_ignore_ascii_case("Microsoft.CSharp.targets") {
            Some(Self::CSharp)
        } else if file.eq_ignore_ascii_case("Microsoft.VisualBasic.targets") {
            Some(Self::VisualBasic)
        } else {
            None
        }
    }

    /// Where Visual Studio keeps `AssemblyInfo`, relative to the project directory.
    #[must_use]
    pub fn assembly_info_path(self) -> PathBuf {
        match self {
            Self::CSharp => Path::new("Properties").join("AssemblyInfo.cs"),
            Self::VisualBasic => Path::new("My Project").join("AssemblyInfo.vb"),
        }
    }
}

impl std::fmt::Display for ProjectLanguage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CSharp => write!(f, "C#"),
            Self::VisualBasic => write!(f, "VisualBasic"),
        }
    }
}

impl std::str::FromStr for ProjectLanguage {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::lookup(s).ok_or_else(|| ConfigError::InvalidValue {
            section: "project".to_string(),
            key: "language".to_string(),
            message: format!("expected 'csharp' or 'visualbasic', got '{s}'"),
        })
    }
}

/// Kind of debug information the compiler emits (`<DebugType>`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum DebugType {
    #[default]
    None,
    Full,
    PdbOnly,
}

impl ClosedSet for DebugType {
    const VARIANTS: &'static [(&'static str, Self)] = &[
        ("none", Self::None),
        ("full", Self::Full),
        ("pdbonly", Self::PdbOnly),
    ];
}

/// Compiler internal error reporting policy (`<ErrorReport>`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum ErrorReport {
    #[default]
    None,
    Prompt,
    Send,
}

impl ClosedSet for ErrorReport {
    const VARIANTS: &'static [(&'static str, Self)] = &[
        ("none", Self::None),
        ("prompt", Self::Prompt),
        ("send", Self::Send),
    ];
}

/// Compiler settings of one named configuration (e.g. "Debug").
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildConfiguration {
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    platform: Option<String>,
    debug_type: DebugType,
    optimize: bool,
    debug_symbols: bool,
    output_path: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    documentation_file: Option<PathBuf>,
    error_report: ErrorReport,
    define_constants: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    warning_level: Option<u32>,
}

impl BuildConfiguration {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Platform half of the condition key (`AnyCPU` in `Debug|AnyCPU`).
    #[must_use]
    pub fn platform(&self) -> Option<&str> {
        self.platform.as_deref()
    }

    #[must_use]
    pub const fn debug_type(&self) -> DebugType {
        self.debug_type
    }

    #[must_use]
    pub const fn optimize(&self) -> bool {
        self.optimize
    }

    #[must_use]
    pub const fn debug_symbols(&self) -> bool {
        self.debug_symbols
    }

    /// Output directory exactly as authored, separators untouched.
    #[must_use]
    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    #[must_use]
    pub fn documentation_file(&self) -> Option<&Path> {
        self.documentation_file.as_deref()
    }

    #[must_use]
    pub const fn error_report(&self) -> ErrorReport {
        self.error_report
    }

    /// Preprocessor symbols in authored order.
    #[must_use]
    pub fn define_constants(&self) -> &[String] {
        &self.define_constants
    }

    #[must_use]
    pub const fn warning_level(&self) -> Option<u32> {
        self.warning_level
    }
}

/// Configurations of a project keyed by name, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Configurations(Vec<BuildConfiguration>);

impl Configurations {
    /// Adds a configuration, handing it back if the name is already taken.
    pub(crate) fn insert(
        &mut self,
        configuration: BuildConfiguration,
    ) -> std::result::Result<(), BuildConfiguration> {
        if self.get(configuration.name()).is_some() {
            return Err(configuration);
        }
        self.0.push(configuration);
        Ok(())
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&BuildConfiguration> {
        self.0.iter().find(|c| c.name == name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(BuildConfiguration::name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BuildConfiguration> {
        self.0.iter()
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a Configurations {
    type Item = &'a BuildConfiguration;
    type IntoIter = std::slice::Iter<'a, BuildConfiguration>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// A parsed `.csproj` / `.vbproj` file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectModel {
    path: PathBuf,
    language: ProjectLanguage,
    target_framework: String,
    root_namespace: String,
    assembly_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    project_guid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    output_type: Option<String>,
    configurations: Configurations,
}

impl ProjectModel {
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Directory holding the project file (`.` for a bare file name).
    #[must_use]
    pub fn directory(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }

    #[must_use]
    pub const fn language(&self) -> ProjectLanguage {
        self.language
    }

    /// Target framework version, e.g. `v3.5`.
    #[must_use]
    pub fn target_framework(&self) -> &str {
        &self.target_framework
    }

    #[must_use]
    pub fn root_namespace(&self) -> &str {
        &self.root_namespace
    }

    #[must_use]
    pub fn assembly_name(&self) -> &str {
        &self.assembly_name
    }

    #[must_use]
    pub fn project_guid(&self) -> Option<&str> {
        self.project_guid.as_deref()
    }

    #[must_use]
    pub fn output_type(&self) -> Option<&str> {
        self.output_type.as_deref()
    }

    #[must_use]
    pub const fn configurations(&self) -> &Configurations {
        &self.configurations
    }

    #[must_use]
    pub fn configuration(&self, name: &str) -> Option<&BuildConfiguration> {
        self.configurations.get(name)
    }
}
