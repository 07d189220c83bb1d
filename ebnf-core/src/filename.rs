//! 可选 (`[]`)：零或一次
//!
//! ```text
//! FileExtension = [ "." identifier ] .
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::PARSER;

/// 文件名与可选扩展名（缺省为空串）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileName {
    pub name: String,
    pub extension: String,
}

impl fmt::Display for FileName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{Name:{} Extension:{}}}", self.name, self.extension)
    }
}

/// Split a file name on `.`.
///
/// Only the first two parts are kept: `"archive.tar.gz"` has the extension
/// `"tar"`.
pub fn parse_filename(filename: &str) -> FileName {
    let mut parts = filename.split('.');
    let name = parts.next().unwrap_or_default();
    let extension = parts.next().unwrap_or_default();

    debug!(target: PARSER, filename, name, extension, "filename");
    FileName {
        name: name.to_string(),
        extension: extension.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str, extension: &str) -> FileName {
        FileName {
            name: name.to_string(),
            extension: extension.to_string(),
        }
    }

    #[test]
    fn test_with_extension() {
        assert_eq!(parse_filename("document.txt"), file("document", "txt"));
    }

    #[test]
    fn test_without_extension() {
        assert_eq!(parse_filename("README"), file("README", ""));
        assert_eq!(parse_filename(""), file("", ""));
    }

    #[test]
    fn test_only_first_two_parts() {
        assert_eq!(parse_filename("archive.tar.gz"), file("archive", "tar"));
        assert_eq!(parse_filename(".bashrc"), file("", "bashrc"));
        assert_eq!(parse_filename("trailing."), file("trailing", ""));
    }

    #[test]
    fn test_display() {
        assert_eq!(
            parse_filename("document.txt").to_string(),
            "{Name:document Extension:txt}"
        );
    }
}
