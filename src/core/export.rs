//! Export roster records to a flat delimited file

use crate::core::error::{Result, RosterError};
use crate::core::models::{Enrollment, Student};
use crate::core::roster::Roster;
use crate::{debug, info};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Default export file name
pub const DEFAULT_EXPORT_FILE: &str = "students.csv";

/// Field delimiter for exported records
pub const CSV_DELIMITER: &str = ",";

/// Trait for exporting a roster in different formats
pub trait RosterExporter {
    /// Export every (student, enrollment) pair of the roster
    ///
    /// Returns the number of records written.
    ///
    /// # Errors
    /// Returns `RosterError::Export` if the file cannot be created or written
    fn export(&self, roster: &Roster, output_path: &Path) -> Result<usize>;
}

/// Comma-delimited exporter.
///
/// No header row and no quoting; one line per enrollment with the fields
/// `student_id, full_name, email, level, course_id, course_name, score`.
/// Students without enrollments produce no lines.
pub struct CsvExporter;

impl RosterExporter for CsvExporter {
    fn export(&self, roster: &Roster, output_path: &Path) -> Result<usize> {
        let file = File::create(output_path).map_err(|e| export_error(output_path, e))?;
        let mut writer = BufWriter::new(file);
        let mut records = 0;

        for student in roster.students() {
            for enrollment in student.enrollments() {
                writeln!(writer, "{}", format_record(student, enrollment))
                    .map_err(|e| export_error(output_path, e))?;
                records += 1;
            }
            if student.enrollments().is_empty() {
                debug!("Student {} has no enrollments; nothing exported", student.id);
            }
        }
        writer.flush().map_err(|e| export_error(output_path, e))?;

        info!(
            "Exported {records} record(s) to {}",
            output_path.display()
        );
        Ok(records)
    }
}

/// Format one export line for a student's enrollment
#[must_use]
pub fn format_record(student: &Student, enrollment: &Enrollment) -> String {
    [
        student.id.as_str(),
        student.full_name.as_str(),
        student.email.as_str(),
        student.level_label(),
        enrollment.course.id.as_str(),
        enrollment.course.name.as_str(),
        &enrollment.score.to_string(),
    ]
    .join(CSV_DELIMITER)
}

/// Convenience function to export a roster using the CSV exporter
///
/// Any existing file at `output_path` is overwritten.
///
/// # Errors
/// Returns `RosterError::Export` if file writing fails
pub fn export_roster_csv<P: AsRef<Path>>(roster: &Roster, output_path: P) -> Result<usize> {
    CsvExporter.export(roster, output_path.as_ref())
}

fn export_error(path: &Path, source: io::Error) -> RosterError {
    RosterError::Export {
        path: path.to_path_buf(),
        source,
    }
}
