//! Print-mode configuration
//!
//! [`PrintMode`] fixes how much each construct is indented and which
//! [`Layout`] blocks use. Values are validated when they are built, so a
//! `PrintMode` never carries a negative width or an unknown layout.
//!
//! Settings files may be TOML or JSON, chosen by extension:
//!
//! ```toml
//! layout = "semicolon"
//! do_indent = 2
//! spacing = false
//! ```

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

/// How blocks of declarations and statements are delimited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Layout {
    /// Indentation alone delimits blocks
    #[default]
    OffsideRule,
    /// Indented blocks, also wrapped in braces with `;` separators
    SemiColon,
    /// Brace blocks on one line; top-level declarations on separate lines
    InLine,
    /// Everything on a single line
    NoLayout,
}

impl Layout {
    /// Whether blocks are stacked vertically rather than joined on one line.
    pub fn prefers_vertical(self) -> bool {
        matches!(self, Layout::OffsideRule | Layout::SemiColon)
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Layout::OffsideRule => "offside",
            Layout::SemiColon => "semicolon",
            Layout::InLine => "inline",
            Layout::NoLayout => "no-layout",
        };
        f.write_str(name)
    }
}

impl FromStr for Layout {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "offside" | "offside-rule" => Ok(Layout::OffsideRule),
            "semicolon" | "semi-colon" | "explicit-semicolon" => Ok(Layout::SemiColon),
            "inline" | "in-line" => Ok(Layout::InLine),
            "no-layout" | "nolayout" | "none" => Ok(Layout::NoLayout),
            _ => Err(ConfigError::UnknownLayout(s.to_string())),
        }
    }
}

/// Pretty-printing parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintMode {
    /// Indentation of class and instance bodies
    pub class_indent: usize,
    pub do_indent: usize,
    /// Indentation of case alternatives
    pub case_indent: usize,
    pub let_indent: usize,
    pub where_indent: usize,
    /// Extra indentation of continuation lines
    pub onside_indent: usize,
    /// Blank line before type, class and other non-binding declarations
    pub spacing: bool,
    pub layout: Layout,
    /// Emit `{-# LINE #-}` pragmas for located nodes
    pub line_pragmas: bool,
    /// Reserved. Comment preservation is not supported and this flag has no
    /// effect on output; see [`PrintMode::comments_supported`].
    pub comments: bool,
}

impl Default for PrintMode {
    fn default() -> Self {
        Self {
            class_indent: 8,
            do_indent: 3,
            case_indent: 4,
            let_indent: 4,
            where_indent: 6,
            onside_indent: 2,
            spacing: true,
            layout: Layout::OffsideRule,
            line_pragmas: false,
            comments: false,
        }
    }
}

impl PrintMode {
    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_line_pragmas(mut self, line_pragmas: bool) -> Self {
        self.line_pragmas = line_pragmas;
        self
    }

    pub fn with_spacing(mut self, spacing: bool) -> Self {
        self.spacing = spacing;
        self
    }

    /// Source comments are never preserved, whatever `comments` says.
    pub fn comments_supported() -> bool {
        false
    }

    /// Load from a settings file, JSON for `.json` and TOML otherwise.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mode = if path.extension().is_some_and(|ext| ext == "json") {
            Self::from_json_str(&content)?
        } else {
            Self::from_toml_str(&content)?
        };
        debug!(path = %path.display(), layout = %mode.layout, "Loaded print mode");
        Ok(mode)
    }

    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let settings: PrintSettings = toml::from_str(s)?;
        settings.try_into()
    }

    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let settings: PrintSettings = serde_json::from_str(s)?;
        settings.try_into()
    }
}

/// Unvalidated print settings as they appear in a settings file.
///
/// Missing keys take the [`PrintMode`] defaults. Keys may be written in
/// snake_case or camelCase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrintSettings {
    #[serde(alias = "classIndent")]
    pub class_indent: i64,
    #[serde(alias = "doIndent")]
    pub do_indent: i64,
    #[serde(alias = "caseIndent")]
    pub case_indent: i64,
    #[serde(alias = "letIndent")]
    pub let_indent: i64,
    #[serde(alias = "whereIndent")]
    pub where_indent: i64,
    #[serde(alias = "onsideIndent")]
    pub onside_indent: i64,
    pub spacing: bool,
    pub layout: String,
    #[serde(alias = "linePragmas")]
    pub line_pragmas: bool,
    pub comments: bool,
}

impl Default for PrintSettings {
    fn default() -> Self {
        PrintMode::default().into()
    }
}

impl From<PrintMode> for PrintSettings {
    fn from(mode: PrintMode) -> Self {
        Self {
            class_indent: mode.class_indent as i64,
            do_indent: mode.do_indent as i64,
            case_indent: mode.case_indent as i64,
            let_indent: mode.let_indent as i64,
            where_indent: mode.where_indent as i64,
            onside_indent: mode.onside_indent as i64,
            spacing: mode.spacing,
            layout: mode.layout.to_string(),
            line_pragmas: mode.line_pragmas,
            comments: mode.comments,
        }
    }
}

fn width(field: &'static str, value: i64) -> Result<usize, ConfigError> {
    usize::try_from(value).map_err(|_| ConfigError::NegativeIndent { field, value })
}

impl TryFrom<PrintSettings> for PrintMode {
    type Error = ConfigError;

    fn try_from(s: PrintSettings) -> Result<Self, Self::Error> {
        Ok(Self {
            class_indent: width("class_indent", s.class_indent)?,
            do_indent: width("do_indent", s.do_indent)?,
            case_indent: width("case_indent", s.case_indent)?,
            let_indent: width("let_indent", s.let_indent)?,
            where_indent: width("where_indent", s.where_indent)?,
            onside_indent: width("onside_indent", s.onside_indent)?,
            spacing: s.spacing,
            layout: s.layout.parse()?,
            line_pragmas: s.line_pragmas,
            comments: s.comments,
        })
    }
}
