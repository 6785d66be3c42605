pub mod answer_sheet;
pub mod export;

pub use answer_sheet::{AnswerSheet, ANSWER_COUNT};
pub use export::{export_file_name, ExportFormat};
