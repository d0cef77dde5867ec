//! Console presentation and file export

pub mod console;
pub mod export;

pub use self::console::{present, present_repository, PresentError, NO_DESCRIPTION, UNKNOWN_LANGUAGE};
pub use self::export::{export_to_csv, ExportError, CSV_HEADERS};
