pub mod errors;
pub mod keys;
pub mod menu_bar;
pub mod paths;

pub use errors::{CompileError, ConfigError, DocsError, KeyError, SkhdError};
pub use keys::{Icon, Key, KeyLiteral, Modifier};
pub use menu_bar::{MenuBarIcon, MenuBarState};

pub type Result<T> = std::result::Result<T, SkhdError>;
