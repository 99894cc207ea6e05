//! CSV question reader
//!
//! Implements [`QuestionReader`] on top of the `csv` crate. Columns keep their
//! header order, cells are not trimmed, and rows may be shorter or longer
//! than the header.

use draviz_application::{QuestionReadError, QuestionReader};
use draviz_domain::{QuestionSource, QuestionTable};
use std::io::Read;
use tracing::{debug, info};

/// Reads question tables from CSV files or uploaded CSV bytes
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvQuestionReader;

impl CsvQuestionReader {
    pub fn new() -> Self {
        Self
    }

    /// Parse CSV from any reader. `origin` names the input in errors.
    pub fn parse<R: Read>(&self, input: R, origin: &str) -> Result<QuestionTable, QuestionReadError> {
        let malformed = |err: csv::Error| QuestionReadError::Malformed {
            origin: origin.to_string(),
            message: err.to_string(),
        };

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(input);

        let columns: Vec<String> = reader
            .headers()
            .map_err(malformed)?
            .iter()
            .map(|h| h.trim_start_matches('\u{feff}').to_string())
            .collect();

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record.map_err(malformed)?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        debug!("{}: columns {:?}, {} rows", origin, columns, rows.len());
        Ok(QuestionTable::new(columns, rows))
    }
}

impl QuestionReader for CsvQuestionReader {
    fn read_table(&self, source: &QuestionSource) -> Result<QuestionTable, QuestionReadError> {
        match source {
            QuestionSource::None => Err(QuestionReadError::NoSource),
            QuestionSource::BuiltIn(path) => {
                info!("Reading questions from {}", path.display());
                let file = std::fs::File::open(path).map_err(|source| QuestionReadError::Io {
                    path: path.display().to_string(),
                    source,
                })?;
                self.parse(file, &path.display().to_string())
            }
            QuestionSource::Uploaded(upload) => {
                info!("Reading uploaded questions from {}", upload.name);
                self.parse(upload.content.as_slice(), &upload.name)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use draviz_domain::{Language, Question, UploadedFile};
    use std::path::{Path, PathBuf};

    const VALID: &str = "question_id,shorthand,question_text\n\
                         1,Data,Is data available?\n\
                         2,Access,\"Can you access it, legally?\"\n";

    #[test]
    fn test_parse_valid_file() {
        let table = CsvQuestionReader::new().parse(VALID.as_bytes(), "test").unwrap();
        assert_eq!(table.columns(), &["question_id", "shorthand", "question_text"]);
        let questions = table.questions().unwrap();
        assert_eq!(questions[0], Question::new(1, "Data", "Is data available?"));
        assert_eq!(questions[1].question_text(), "Can you access it, legally?");
    }

    #[test]
    fn test_missing_column_surfaces_from_table() {
        let csv = "question_id,shorthand\n1,Data\n";
        let table = CsvQuestionReader::new().parse(csv.as_bytes(), "test").unwrap();
        let err = table.questions().unwrap_err();
        assert!(err.user_message().ends_with("Instead got question_id, shorthand."));
    }

    #[test]
    fn test_byte_order_mark_is_stripped() {
        let csv = "\u{feff}question_id,shorthand,question_text\n1,A,a\n";
        let table = CsvQuestionReader::new().parse(csv.as_bytes(), "bom").unwrap();
        assert_eq!(table.columns()[0], "question_id");
    }

    #[test]
    fn test_ragged_rows_are_tolerated() {
        let csv = "question_id,shorthand,question_text,phase\n1,A,a\n2,B,b,x,extra\n";
        let table = CsvQuestionReader::new().parse(csv.as_bytes(), "ragged").unwrap();
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.questions().unwrap().len(), 2);
    }

    #[test]
    fn test_reads_uploaded_bytes() {
        let upload = UploadedFile::new("mine.csv", VALID.as_bytes().to_vec());
        let table = CsvQuestionReader::new()
            .read_table(&QuestionSource::Uploaded(upload))
            .unwrap();
        assert_eq!(table.row_count(), 2);
    }

    #[test]
    fn test_reads_builtin_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("defaultq_en.csv");
        std::fs::write(&path, VALID).unwrap();
        let table = CsvQuestionReader::new()
            .read_table(&QuestionSource::BuiltIn(path))
            .unwrap();
        assert_eq!(table.questions().unwrap()[1].label(), "2. Access");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = CsvQuestionReader::new()
            .read_table(&QuestionSource::BuiltIn(PathBuf::from("/no/such/defaultq_sv.csv")))
            .unwrap_err();
        assert!(matches!(err, QuestionReadError::Io { .. }));
    }

    #[test]
    fn test_no_source() {
        assert!(matches!(
            CsvQuestionReader::new().read_table(&QuestionSource::None),
            Err(QuestionReadError::NoSource)
        ));
    }

    #[test]
    fn test_invalid_utf8_is_malformed() {
        let bytes = b"question_id,shorthand,question_text\n1,\xff\xfe,a\n".to_vec();
        let upload = UploadedFile::new("bin.csv", bytes);
        let err = CsvQuestionReader::new()
            .read_table(&QuestionSource::Uploaded(upload))
            .unwrap_err();
        assert!(matches!(err, QuestionReadError::Malformed { .. }));
    }

    #[test]
    fn test_bundled_question_files_are_valid() {
        let data_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("../data");
        for language in Language::ALL {
            let path = QuestionSource::default_path(&data_dir, language);
            let table = CsvQuestionReader::new()
                .read_table(&QuestionSource::BuiltIn(path))
                .unwrap();
            let questions = table.questions().unwrap();
            assert!(!questions.is_empty());
            assert_eq!(questions[0].question_id(), 1);
        }
    }
}
