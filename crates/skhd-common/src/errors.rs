use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KeyError {
    #[error("unknown modifier: {0}")]
    UnknownModifier(String),

    #[error("unknown key: {0}")]
    UnknownKey(String),

    #[error("unknown icon: {0}")]
    UnknownIcon(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum CompileError {
    #[error("duplicate shortcuts: {}", .0.join(", "))]
    DuplicateBindings(Vec<String>),

    #[error("duplicate shortcuts without modifiers: {}", .0.join(", "))]
    DuplicateUnmodifiedBindings(Vec<String>),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("shortcut references unknown mode '{0}'")]
    UnknownMode(String),

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CompileError {
    /// The colliding canonical bindings, if this is a duplicate error.
    pub fn duplicates(&self) -> &[String] {
        match self {
            Self::DuplicateBindings(d) | Self::DuplicateUnmodifiedBindings(d) => d,
            _ => &[],
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DocsError {
    #[error("skhd config not found: {0}")]
    SourceMissing(PathBuf),

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum SkhdError {
    #[error(transparent)]
    Key(#[from] KeyError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Compile(#[from] CompileError),

    #[error(transparent)]
    Docs(#[from] DocsError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}
