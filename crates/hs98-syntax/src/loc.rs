use serde::{Deserialize, Serialize};
use std::fmt;

/// Position of a node in its source file.
///
/// Locations only feed optional `LINE` pragmas in printed output; they never
/// change what a tree means. Hand-built trees use [`SrcLoc::unknown`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SrcLoc {
    /// Source file name, empty when unknown
    #[serde(default)]
    pub filename: String,
    /// 1-based line, 0 when unknown
    #[serde(default)]
    pub line: u32,
    /// 1-based column, 0 when unknown
    #[serde(default)]
    pub column: u32,
}

impl SrcLoc {
    pub fn new(filename: impl Into<String>, line: u32, column: u32) -> Self {
        Self {
            filename: filename.into(),
            line,
            column,
        }
    }

    /// The "no location" sentinel: empty file name, line 0, column 0.
    pub fn unknown() -> Self {
        Self::default()
    }

    pub fn is_unknown(&self) -> bool {
        self.line == 0
    }
}

impl fmt::Display for SrcLoc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unknown() {
            write!(f, "<unknown>")
        } else {
            write!(f, "{}:{}:{}", self.filename, self.line, self.column)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_sentinel() {
        assert!(SrcLoc::unknown().is_unknown());
        assert!(!SrcLoc::new("Main.hs", 1, 1).is_unknown());
        assert_eq!(SrcLoc::unknown().to_string(), "<unknown>");
    }

    #[test]
    fn test_display() {
        assert_eq!(SrcLoc::new("Foo.hs", 12, 5).to_string(), "Foo.hs:12:5");
    }

    #[test]
    fn test_missing_fields_deserialize_to_unknown() {
        let loc: SrcLoc = serde_json::from_str("{}").unwrap();
        assert!(loc.is_unknown());
    }
}
