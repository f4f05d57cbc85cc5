// dnbuild: .NET build tool orchestration
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Legacy Windows encoding conversion.
//!
//! ```text
//! project file bytes --(BOM sniff)--> UTF-8 | UTF-16LE | UTF-16BE
//!                    --(no BOM, invalid UTF-8)--> Windows-1252
//! tool output bytes  --(Encoding)--> UTF-8
//! ```
//!
//! Uses `encoding_rs`. Invalid sequences → U+FFFD.

use encoding_rs::{IBM866, UTF_8, WINDOWS_1252};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// Encoding of tool output, set by `tools.output_encoding`.
///
/// Maps to Windows code pages:
/// - `Utf8`: UTF-8 (65001)
/// - `Acp`: Active Code Page, typically Windows-1252 (1252)
/// - `Oem`: OEM Code Page, console tools such as `MSBuild` write in it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    /// UTF-8, invalid sequences replaced
    #[default]
    Utf8,
    /// Active Code Page - typically Windows-1252
    Acp,
    /// OEM Code Page - Cyrillic consoles (866)
    Oem,
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Utf8 => "utf8",
            Self::Acp => "acp",
            Self::Oem => "oem",
        })
    }
}

/// Converts bytes from the given encoding to UTF-8.
///
/// # Example
/// ```
/// use dnbuild::utility::encoding::{bytes_to_utf8, Encoding};
///
/// let cp1252_bytes = b"caf\xe9";
/// assert_eq!(bytes_to_utf8(Encoding::Acp, cp1252_bytes), "café");
/// ```
#[must_use]
pub fn bytes_to_utf8(encoding: Encoding, bytes: &[u8]) -> Cow<'_, str> {
    match encoding {
        Encoding::Utf8 => String::from_utf8_lossy(bytes),
        Encoding::Acp => WINDOWS_1252.decode_without_bom_handling(bytes).0,
        Encoding::Oem => IBM866.decode_without_bom_handling(bytes).0,
    }
}

/// Decodes a text document as written by Visual Studio.
///
/// A byte order mark selects UTF-8 or UTF-16 and is stripped. Without one,
/// valid UTF-8 is borrowed as is and anything else is read as Windows-1252.
#[must_use]
pub fn decode_document(bytes: &[u8]) -> Cow<'_, str> {
    if let Some((encoding, bom_len)) = encoding_rs::Encoding::for_bom(bytes) {
        return encoding.decode_without_bom_handling(&bytes[bom_len..]).0;
    }
    match UTF_8.decode_without_bom_handling_and_without_replacement(bytes) {
        Some(text) => text,
        None => WINDOWS_1252.decode_without_bom_handling(bytes).0,
    }
}

/// Strips a trailing `\r` left behind by CRLF line splitting.
#[must_use]
pub fn trim_line_ending(line: &str) -> &str {
    line.strip_suffix('\r').unwrap_or(line)
}
