//! Loading regular expressions from files, for hosts that pick a language by file extension.

use crate::propositions::AtomicPropositionEvaluator;
use crate::semantics::DerivativeRelation;
use crate::{parse_regex, ParseError};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;

/// File extensions (without the leading dot) handled by [`Plugin`].
pub const EXTENSIONS: [&str; 1] = ["regexp"];

/// Errors raised while loading a language module.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The file could not be read.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// The file does not contain a regular expression.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
    /// The file does not have one of the [`EXTENSIONS`].
    #[error("{0} is not a regular expression file")]
    UnsupportedExtension(PathBuf),
}

/// Everything a host needs to explore one regular expression.
pub struct LanguageModule {
    /// The transition relation of the expression.
    pub relation: DerivativeRelation<char>,
    /// Atomic propositions over its configurations.
    pub propositions: AtomicPropositionEvaluator<char>,
}

/// Entry point for hosts: maps files to [`LanguageModule`]s.
#[derive(Debug, Default, Clone, Copy)]
pub struct Plugin;

impl Plugin {
    /// The name of the language.
    pub fn name(&self) -> &'static str {
        "LRegExp"
    }

    /// The file extensions this plugin loads.
    pub fn extensions(&self) -> &'static [&'static str] {
        &EXTENSIONS
    }

    /// Whether `path` has one of the [`EXTENSIONS`].
    pub fn handles(&self, path: impl AsRef<Path>) -> bool {
        path.as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| EXTENSIONS.contains(&ext))
    }

    /// Reads and parses the file at `path`. The module is named after the file.
    pub fn load(&self, path: impl AsRef<Path>) -> Result<LanguageModule, LoadError> {
        let path = path.as_ref();
        if !self.handles(path) {
            return Err(LoadError::UnsupportedExtension(path.to_path_buf()));
        }

        let text = fs::read_to_string(path)?;
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        log::info!("loading {} from {}", name, path.display());

        self.load_str(name, &text)
    }

    /// Parses `text` into a module called `name`.
    pub fn load_str(
        &self,
        name: impl Into<String>,
        text: &str,
    ) -> Result<LanguageModule, LoadError> {
        let expression = Arc::new(parse_regex(text)?);

        Ok(LanguageModule {
            relation: DerivativeRelation::new(name, expression.clone()),
            propositions: AtomicPropositionEvaluator::new(expression),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{LoadError, Plugin};
    use crate::{parse_regex, ParseError, RegexMatcher};
    use std::fs;
    use std::path::PathBuf;

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("brzozowski-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn handles_extension() {
        let plugin = Plugin;
        assert!(plugin.handles("even.regexp"));
        assert!(plugin.handles("/some/dir/x.regexp"));
        assert!(!plugin.handles("even.txt"));
        assert!(!plugin.handles("regexp"));
        assert_eq!(plugin.extensions(), &["regexp"]);
        assert_eq!(plugin.name(), "LRegExp");
    }

    #[test]
    fn load_file() {
        let path = temp_file("pairs.regexp", "(ab)*");
        let module = Plugin.load(&path).unwrap();

        assert_eq!(module.relation.name(), "pairs.regexp");
        assert_eq!(**module.relation.expression(), parse_regex("(ab)*").unwrap());
        assert_eq!(module.propositions.model(), module.relation.expression());
        assert!(module.relation.matcher().accepts("abab".chars()));
    }

    #[test]
    fn load_errors() {
        assert!(matches!(
            Plugin.load("pairs.txt"),
            Err(LoadError::UnsupportedExtension(_))
        ));
        assert!(matches!(
            Plugin.load("does/not/exist.regexp"),
            Err(LoadError::Io(_))
        ));

        let path = temp_file("broken.regexp", "(a");
        assert!(matches!(
            Plugin.load(&path),
            Err(LoadError::Parse(ParseError::UnterminatedGroup { offset: 0 }))
        ));
    }

    #[test]
    fn load_str() {
        let module = Plugin.load_str("inline", "a|b").unwrap();
        assert_eq!(module.relation.name(), "inline");
        assert!(matches!(
            Plugin.load_str("inline", "|"),
            Err(LoadError::Parse(ParseError::NoExpression { offset: 0 }))
        ));
    }
}
