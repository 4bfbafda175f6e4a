/// Filesystem adapters for reading saved reports and writing output
mod file_reader;
mod file_writer;

pub use file_reader::FileReportReader;
pub use file_writer::{FileSystemWriter, StdoutPresenter};
