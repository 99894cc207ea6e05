//! Question file adapters.

mod csv_reader;

pub use csv_reader::CsvQuestionReader;
