pub mod json_writer;
pub mod report_pdf;
pub mod summary;
