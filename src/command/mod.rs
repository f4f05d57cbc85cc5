// dnbuild: .NET build tool orchestration
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Deterministic command lines for the .NET tools.
//!
//! ```text
//! CommandLine::new("msbuild.exe")
//!   .switch("target", "Build")                  /target:Build
//!   .switch_verbatim("property", props)         /property:A="x y";B=z
//!   .spaced_switch("Project", "Core")           /Project Core
//!   .positional("MySolution.sln")               MySolution.sln
//!        |
//!        +--> render()  single display string
//!        +--> argv()    unquoted tokens for spawning
//!
//! Tool builders: msbuild (MsBuildCommand), mstest (MsTestCommand),
//!                devenv (DevEnvCommand)
//! ```
//!
//! Atomic tokens are quoted only when they contain whitespace. Rendering is
//! a pure function of the builder state, so equal builders render equal
//! strings.

pub mod devenv;
pub mod msbuild;
pub mod mstest;


use std::borrow::Cow;

/// How a switch is joined to its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Separator {
    /// `/name:value`
    Colon,
    /// `/name value`
    Space,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Value {
    /// Quoted if it contains whitespace.
    Atom(String),
    /// Already rendered, emitted as is.
    Verbatim(String),
}

impl Value {
    fn rendered(&self) -> Cow<'_, str> {
        match self {
            Self::Atom(s) => quote(s),
            Self::Verbatim(s) => Cow::Borrowed(s),
        }
    }

    fn raw(&self) -> &str {
        match self {
            Self::Atom(s) | Self::Verbatim(s) => s,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Arg {
    Switch {
        name: String,
        value: Option<Value>,
        separator: Separator,
    },
    Positional(String),
}

/// An executable plus its ordered arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    program: String,
    args: Vec<Arg>,
    trailing_space: bool,
}

impl CommandLine {
    #[must_use]
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            trailing_space: false,
        }
    }

    /// Adds a bare switch such as `/nologo`.
    #[must_use]
    pub fn flag(mut self, name: impl Into<String>) -> Self {
        self.args.push(Arg::Switch {
            name: name.into(),
            value: None,
            separator: Separator::Colon,
        });
        self
    }

    /// Adds `/name:value`, quoting the value if it contains whitespace.
    #[must_use]
    pub fn switch(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.args.push(Arg::Switch {
            name: name.into(),
            value: Some(Value::Atom(value.into())),
            separator: Separator::Colon,
        });
        self
    }

    /// Adds `/name:value` with a value that is already rendered.
    #[must_use]
    pub fn switch_verbatim(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.args.push(Arg::Switch {
            name: name.into(),
            value: Some(Value::Verbatim(value.into())),
            separator: Separator::Colon,
        });
        self
    }

    /// Adds `/name value`, quoting the value if it contains whitespace.
    #[must_use]
    pub fn spaced_switch(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.args.push(Arg::Switch {
            name: name.into(),
            value: Some(Value::Atom(value.into())),
            separator: Separator::Space,
        });
        self
    }

    /// Adds a positional argument, quoted if it contains whitespace.
    #[must_use]
    pub fn positional(mut self, value: impl Into<String>) -> Self {
        self.args.push(Arg::Positional(value.into()));
        self
    }

    /// Follows every argument with a space, as older plugin versions did.
    ///
    /// The rendered string then ends in a space whenever there is at least
    /// one argument. Only [`Self::render`] is affected.
    #[must_use]
    pub const fn trailing_space(mut self, enabled: bool) -> Self {
        self.trailing_space = enabled;
        self
    }

    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Renders the arguments without the program.
    #[must_use]
    pub fn render_args(&self) -> String {
        let mut out = String::new();
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            match arg {
                Arg::Switch {
                    name,
                    value,
                    separator,
                } => {
                    out.push('/');
                    out.push_str(name);
                    if let Some(value) = value {
                        let sep = match separator {
                            Separator::Colon => ':',
                            Separator::Space => ' ',
                        };
                        out.push(sep);
                        out.push_str(&value.rendered());
                    }
                }
                Arg::Positional(value) => out.push_str(&quote(value)),
            }
        }
        if self.trailing_space && !self.args.is_empty() {
            out.push(' ');
        }
        out
    }

    /// Renders the whole command line.
    #[must_use]
    pub fn render(&self) -> String {
        let program = quote(&self.program);
        if self.args.is_empty() {
            return program.into_owned();
        }
        format!("{program} {}", self.render_args())
    }

    /// Argument vector without shell quoting, for direct process spawning.
    #[must_use]
    pub fn argv(&self) -> Vec<String> {
        let mut argv = Vec::with_capacity(self.args.len());
        for arg in &self.args {
            match arg {
                Arg::Switch {
                    name,
                    value: None,
                    ..
                } => argv.push(format!("/{name}")),
                Arg::Switch {
                    name,
                    value: Some(value),
                    separator: Separator::Colon,
                } => argv.push(format!("/{name}:{}", value.raw())),
                Arg::Switch {
                    name,
                    value: Some(value),
                    separator: Separator::Space,
                } => {
                    argv.push(format!("/{name}"));
                    argv.push(value.raw().to_string());
                }
                Arg::Positional(value) => argv.push(value.clone()),
            }
        }
        argv
    }
}

impl std::fmt::Display for CommandLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}

/// Wraps `token` in double quotes if it contains whitespace.
#[must_use]
pub fn quote(token: &str) -> Cow<'_, str> {
    if token.chars().any(char::is_whitespace) {
        Cow::Owned(format!("\"{token}\""))
    } else {
        Cow::Borrowed(token)
    }
}

/// Renders `Key=Value` pairs joined by `;`, quoting values with whitespace.
///
/// ```
/// use dnbuild::command::join_properties;
///
/// let props = [("Platform", "Any CPU"), ("Configuration", "Debug")];
/// assert_eq!(join_properties(props), r#"Platform="Any CPU";Configuration=Debug"#);
/// ```
#[must_use]
pub fn join_properties<I, K, V>(properties: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    properties
        .into_iter()
        .map(|(key, value)| format!("{}={}", key.as_ref(), quote(value.as_ref())))
        .collect::<Vec<_>>()
        .join(";")
}
