// dnbuild: .NET build tool orchestration
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `AssemblyInfo` source generation.
//!
//! ```text
//! AssemblyMetadata { title, company, description, guid, version }
//!        |
//!        v  lines(language)
//! using System.Reflection;                      Imports System.Reflection
//! using System.Runtime.InteropServices;         Imports System.Runtime.InteropServices
//!
//! [assembly: AssemblyTitle("..")]               <Assembly: AssemblyTitle("..")>
//! [assembly: AssemblyProduct("company title")]
//! [assembly: AssemblyDescription("..")]
//! [assembly: Guid("..")]
//! [assembly: AssemblyVersion("<safe>")]
//! [assembly: AssemblyFileVersion("<safe>")]
//! [assembly: AssemblyInformationalVersion("<version>")]
//! ```
//!
//! Attribute lines appear only for non-empty fields, always in this order.

use std::path::Path;
use std::sync::OnceLock;

use bon::Builder;
use regex::Regex;
use tracing::debug;

use crate::error::FsError;
use crate::project::ProjectLanguage;
use crate::utility::fs::write_atomic;

#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

/// Metadata fields of a generated `AssemblyInfo` file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Builder)]
pub struct AssemblyMetadata {
    #[builder(into, setters(name = with_title))]
    title: Option<String>,
    #[builder(into, setters(name = with_company))]
    company: Option<String>,
    #[builder(into, setters(name = with_description))]
    description: Option<String>,
    #[builder(into, setters(name = with_guid))]
    guid: Option<String>,
    #[builder(into, setters(name = with_version))]
    version: Option<String>,
}

impl AssemblyMetadata {
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        non_empty(self.title.as_deref())
    }

    #[must_use]
    pub fn company(&self) -> Option<&str> {
        non_empty(self.company.as_deref())
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        non_empty(self.description.as_deref())
    }

    #[must_use]
    pub fn guid(&self) -> Option<&str> {
        non_empty(self.guid.as_deref())
    }

    #[must_use]
    pub fn version(&self) -> Option<&str> {
        non_empty(self.version.as_deref())
    }

    /// Company and title joined by a space, whichever are present.
    #[must_use]
    pub fn product(&self) -> Option<String> {
        let parts: Vec<&str> = [self.company(), self.title()].into_iter().flatten().collect();
        (!parts.is_empty()).then(|| parts.join(" "))
    }

    /// Source lines without line terminators.
    #[must_use]
    pub fn lines(&self, language: ProjectLanguage) -> Vec<String> {
        let mut lines: Vec<String> = header(language).iter().map(ToString::to_string).collect();
        lines.push(String::new());

        let mut push = |name: &str, value: &str| lines.push(attribute(language, name, value));

        if let Some(title) = self.title() {
            push("AssemblyTitle", title);
        }
        if let Some(product) = self.product() {
            push("AssemblyProduct", &product);
        }
        if let Some(description) = self.description() {
            push("AssemblyDescription", description);
        }
        if let Some(guid) = self.guid() {
            push("Guid", guid);
        }
        if let Some(version) = self.version() {
            let safe = safe_version(version);
            if !safe.is_empty() {
                push("AssemblyVersion", safe);
                push("AssemblyFileVersion", safe);
            }
            push("AssemblyInformationalVersion", version);
        }
        lines
    }

    /// Full source text with platform line endings.
    #[must_use]
    pub fn render(&self, language: ProjectLanguage) -> String {
        let mut out = self.lines(language).join(LINE_ENDING);
        out.push_str(LINE_ENDING);
        out
    }

    /// Writes the generated source to `path`, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns `FsError::IoError` if the file or its directory cannot be written.
    pub fn write(&self, language: ProjectLanguage, path: &Path) -> Result<(), FsError> {
        debug!(path = %path.display(), language = %language, "writing AssemblyInfo");
        write_atomic(path, &self.render(language))
    }
}

/// Leading digits-and-dots prefix of `version`.
///
/// ```
/// use dnbuild::assembly_info::safe_version;
///
/// assert_eq!(safe_version("0.1.0.989-SNAPSHOT-1.0"), "0.1.0.989");
/// assert_eq!(safe_version("SNAPSHOT"), "");
/// ```
#[must_use]
pub fn safe_version(version: &str) -> &str {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"^[0-9]+(?:\.[0-9]+)*").ok())
        .as_ref()
        .and_then(|re| re.find(version.trim()))
        .map_or("", |m| m.as_str())
}

const fn header(language: ProjectLanguage) -> [&'static str; 2] {
    match language {
        ProjectLanguage::CSharp => [
            "using System.Reflection;",
            "using System.Runtime.InteropServices;",
        ],
        ProjectLanguage::VisualBasic => [
            "Imports System.Reflection",
            "Imports System.Runtime.InteropServices",
        ],
    }
}

fn attribute(language: ProjectLanguage, name: &str, value: &str) -> String {
    match language {
        ProjectLanguage::CSharp => {
            let value = value.replace('\\', "\\\\").replace('"', "\\\"");
            format!("[assembly: {name}(\"{value}\")]")
        }
        ProjectLanguage::VisualBasic => {
            let value = value.replace('"', "\"\"");
            format!("<Assembly: {name}(\"{value}\")>")
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests;
