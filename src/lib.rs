pub mod configuration;
pub mod loader;
pub mod models;
pub mod path_filter;
pub mod reader;
pub mod run;

pub use configuration::Settings;
pub use loader::{ComicLoader, LoadError, LoaderFactory};
pub use models::{Cli, Comic, Page};
pub use reader::Reader;
pub use run::run;
