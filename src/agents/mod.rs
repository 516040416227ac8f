pub mod go_list;
pub mod project_scanner;

pub use go_list::GoListAgent;
pub use project_scanner::ProjectScannerAgent;
