//! Menu-driven interaction loop over a roster.
//!
//! The loop reads one line per prompt from any `BufRead` and writes prompts and
//! results to any `Write`, so the CLI drives it with stdin/stdout and tests
//! drive it with in-memory buffers.

use crate::core::error::{Result, RosterError};
use crate::core::export::export_roster_csv;
use crate::core::roster::Roster;
use crate::debug;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Menu header line
pub const MENU_HEADER: &str = "======== MENU ========";

/// One menu entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// 1. Add a student
    AddStudent,
    /// 2. Register a student for a course
    RegisterCourse,
    /// 3. Record an exam score
    RecordScore,
    /// 4. List all students
    ListStudents,
    /// 5. Export the roster to file
    Export,
    /// 6. Leave the loop
    Exit,
}

impl MenuChoice {
    /// All entries in menu order
    pub const ALL: [Self; 6] = [
        Self::AddStudent,
        Self::RegisterCourse,
        Self::RecordScore,
        Self::ListStudents,
        Self::Export,
        Self::Exit,
    ];

    /// Entry for a menu number, if it is in range
    #[must_use]
    pub const fn from_number(number: i64) -> Option<Self> {
        match number {
            1 => Some(Self::AddStudent),
            2 => Some(Self::RegisterCourse),
            3 => Some(Self::RecordScore),
            4 => Some(Self::ListStudents),
            5 => Some(Self::Export),
            6 => Some(Self::Exit),
            _ => None,
        }
    }

    /// Menu number of this entry
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::AddStudent => 1,
            Self::RegisterCourse => 2,
            Self::RecordScore => 3,
            Self::ListStudents => 4,
            Self::Export => 5,
            Self::Exit => 6,
        }
    }

    /// Menu label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::AddStudent => "Add student",
            Self::RegisterCourse => "Register course",
            Self::RecordScore => "Record score",
            Self::ListStudents => "List students",
            Self::Export => "Export to file",
            Self::Exit => "Exit",
        }
    }
}

/// Parse a menu line into a choice
///
/// # Errors
/// - `InvalidChoiceInput` if the line is not an integer
/// - `InvalidChoice` if the integer is not a menu number
pub fn parse_choice(line: &str) -> Result<MenuChoice> {
    let trimmed = line.trim();
    let number: i64 = trimmed
        .parse()
        .map_err(|_| RosterError::InvalidChoiceInput(trimmed.to_string()))?;
    MenuChoice::from_number(number).ok_or(RosterError::InvalidChoice(number))
}

/// Parse a score line
///
/// # Errors
/// Returns `InvalidScore` if the line is not a finite number
pub fn parse_score(line: &str) -> Result<f64> {
    let trimmed = line.trim();
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|score| score.is_finite())
        .ok_or_else(|| RosterError::InvalidScore(trimmed.to_string()))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Interactive session: owns the roster for the lifetime of the loop
pub struct Session<R, W> {
    roster: Roster,
    input: R,
    output: W,
    export_path: PathBuf,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Create a session over a roster and console handles
    pub fn new(roster: Roster, input: R, output: W, export_path: impl Into<PathBuf>) -> Self {
        Self {
            roster,
            input,
            output,
            export_path: export_path.into(),
        }
    }

    /// The roster as mutated so far
    #[must_use]
    pub const fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Consume the session and hand back the roster
    #[must_use]
    pub fn into_roster(self) -> Roster {
        self.roster
    }

    /// Run the menu loop until the operator picks Exit or input ends
    ///
    /// Operator mistakes are reported and the menu is shown again.
    ///
    /// # Errors
    /// Returns an error only if reading from or writing to the console fails
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.print_menu()?;
            let Some(line) = self.read_line()? else {
                debug!("Input closed; leaving menu loop");
                return Ok(());
            };

            let flow = match parse_choice(&line) {
                Ok(choice) => self.dispatch(choice)?,
                Err(err) => {
                    self.report(&err)?;
                    Flow::Continue
                }
            };
            if flow == Flow::Exit {
                return Ok(());
            }
        }
    }

    fn dispatch(&mut self, choice: MenuChoice) -> io::Result<Flow> {
        debug!("Menu choice: {}", choice.label());
        match choice {
            MenuChoice::AddStudent => self.add_student(),
            MenuChoice::RegisterCourse => self.register_course(),
            MenuChoice::RecordScore => self.record_score(),
            MenuChoice::ListStudents => {
                self.roster.list_students(&mut self.output)?;
                Ok(Flow::Continue)
            }
            MenuChoice::Export => {
                self.export()?;
                Ok(Flow::Continue)
            }
            MenuChoice::Exit => Ok(Flow::Exit),
        }
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "{MENU_HEADER}")?;
        for choice in MenuChoice::ALL {
            writeln!(self.output, "{}. {}", choice.number(), choice.label())?;
        }
        write!(self.output, "Choice: ")?;
        self.output.flush()
    }

    /// Read one line without its line terminator; `None` at end of input.
    ///
    /// Bytes that are not valid UTF-8 are replaced, so a badly encoded line
    /// is handled like any other operator input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}: ")?;
        self.output.flush()?;
        self.read_line()
    }

    fn report(&mut self, err: &RosterError) -> io::Result<()> {
        debug!("Operation failed: {err}");
        writeln!(self.output, "✗ {err}")
    }

    fn add_student(&mut self) -> io::Result<Flow> {
        let Some(id) = self.prompt("ID")? else {
            return Ok(Flow::Exit);
        };
        let Some(name) = self.prompt("Name")? else {
            return Ok(Flow::Exit);
        };
        let Some(email) = self.prompt("Email")? else {
            return Ok(Flow::Exit);
        };

        self.roster.add_student(id, name, email);
        writeln!(self.output, "✓ Student added.")?;
        Ok(Flow::Continue)
    }

    fn register_course(&mut self) -> io::Result<Flow> {
        let Some(student_id) = self.prompt("Student ID")? else {
            return Ok(Flow::Exit);
        };
        if self.roster.find_student(&student_id).is_none() {
            self.report(&RosterError::StudentNotFound(student_id))?;
            return Ok(Flow::Continue);
        }

        writeln!(self.output, "Available courses:")?;
        for course in self.roster.catalog().iter() {
            writeln!(self.output, "{course}")?;
        }

        let Some(course_id) = self.prompt("Course ID")? else {
            return Ok(Flow::Exit);
        };
        match self
            .roster
            .register_course_for_student(&student_id, &course_id)
        {
            Ok(enrollment) => {
                let name = enrollment.course.name.clone();
                writeln!(self.output, "✓ Registered for course: {name}")?;
            }
            Err(err) => self.report(&err)?,
        }
        Ok(Flow::Continue)
    }

    fn record_score(&mut self) -> io::Result<Flow> {
        let Some(student_id) = self.prompt("Student ID")? else {
            return Ok(Flow::Exit);
        };
        if self.roster.find_student(&student_id).is_none() {
            self.report(&RosterError::StudentNotFound(student_id))?;
            return Ok(Flow::Continue);
        }

        let Some(course_id) = self.prompt("Course ID")? else {
            return Ok(Flow::Exit);
        };
        let Some(score_line) = self.prompt("Score")? else {
            return Ok(Flow::Exit);
        };

        let outcome = parse_score(&score_line)
            .and_then(|score| self.roster.record_score(&student_id, &course_id, score));
        match outcome {
            Ok(()) => writeln!(self.output, "✓ Score recorded.")?,
            Err(err) => self.report(&err)?,
        }
        Ok(Flow::Continue)
    }

    fn export(&mut self) -> io::Result<()> {
        match export_roster_csv(&self.roster, &self.export_path) {
            Ok(records) => writeln!(
                self.output,
                "✓ Saved {records} record(s) to {}",
                self.export_path.display()
            ),
            Err(err) => self.report(&err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_session(input: &str) -> (Roster, String) {
        let mut out = Vec::new();
        let mut session = Session::new(
            Roster::seeded(),
            input.as_bytes(),
            &mut out,
            std::env::temp_dir().join("nuroster-session-unit.csv"),
        );
        session.run().unwrap();
        let roster = session.into_roster();
        (roster, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_parse_choice() {
        assert_eq!(parse_choice("1").unwrap(), MenuChoice::AddStudent);
        assert_eq!(parse_choice(" 6 \n").unwrap(), MenuChoice::Exit);
        assert!(matches!(
            parse_choice("abc"),
            Err(RosterError::InvalidChoiceInput(ref s)) if s == "abc"
        ));
        assert!(matches!(parse_choice("7"), Err(RosterError::InvalidChoice(7))));
        assert!(matches!(parse_choice("0"), Err(RosterError::InvalidChoice(0))));
        assert!(matches!(parse_choice(""), Err(RosterError::InvalidChoiceInput(_))));
    }

    #[test]
    fn test_menu_numbers_round_trip() {
        for choice in MenuChoice::ALL {
            assert_eq!(
                MenuChoice::from_number(i64::from(choice.number())),
                Some(choice)
            );
        }
    }

    #[test]
    fn test_parse_score() {
        assert!((parse_score("8.5").unwrap() - 8.5).abs() < f64::EPSILON);
        assert!((parse_score(" 7 ").unwrap() - 7.0).abs() < f64::EPSILON);
        assert!(matches!(parse_score("ten"), Err(RosterError::InvalidScore(_))));
        assert!(matches!(parse_score("NaN"), Err(RosterError::InvalidScore(_))));
        assert!(matches!(parse_score("inf"), Err(RosterError::InvalidScore(_))));
    }

    #[test]
    fn test_exit_immediately() {
        let (roster, out) = run_session("6\n");
        assert!(roster.students().is_empty());
        assert_eq!(out.matches(MENU_HEADER).count(), 1);
    }

    #[test]
    fn test_eof_ends_loop() {
        let (_, out) = run_session("");
        assert_eq!(out.matches(MENU_HEADER).count(), 1);
    }

    #[test]
    fn test_non_integer_choice_keeps_looping() {
        let (_, out) = run_session("abc\n6\n");
        assert!(out.contains("✗ Please enter an integer, got 'abc'"));
        assert_eq!(out.matches(MENU_HEADER).count(), 2);
    }

    #[test]
    fn test_invalid_utf8_choice_keeps_looping() {
        let mut out = Vec::new();
        let mut session = Session::new(
            Roster::seeded(),
            &b"\xff\xfe\n6\n"[..],
            &mut out,
            std::env::temp_dir().join("nuroster-session-unit.csv"),
        );
        assert!(session.run().is_ok());
        drop(session);

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("✗ Please enter an integer"));
        assert_eq!(text.matches(MENU_HEADER).count(), 2);
    }

    #[test]
    fn test_invalid_utf8_name_is_kept_lossily() {
        let mut input = b"1\nS001\nAd\xffa\nada@example.com\n".to_vec();
        input.extend_from_slice(b"6\n");

        let mut out = Vec::new();
        let mut session = Session::new(
            Roster::seeded(),
            input.as_slice(),
            &mut out,
            std::env::temp_dir().join("nuroster-session-unit.csv"),
        );
        session.run().unwrap();

        let student = session.roster().find_student("S001").unwrap();
        assert_eq!(student.full_name, "Ad\u{FFFD}a");
    }

    #[test]
    fn test_out_of_range_choice() {
        let (_, out) = run_session("9\n6\n");
        assert!(out.contains("✗ Invalid choice: 9"));
        assert_eq!(out.matches(MENU_HEADER).count(), 2);
    }

    #[test]
    fn test_add_student_flow() {
        let (roster, out) = run_session("1\nS001\nAda Lovelace\nada@example.com\n6\n");
        assert!(out.contains("✓ Student added."));
        let student = roster.find_student("S001").unwrap();
        assert_eq!(student.full_name, "Ada Lovelace");
        assert_eq!(student.email, "ada@example.com");
    }

    #[test]
    fn test_register_unknown_student_skips_catalog() {
        let (_, out) = run_session("2\nS404\n6\n");
        assert!(out.contains("✗ Student not found: S404"));
        assert!(!out.contains("Available courses:"));
    }

    #[test]
    fn test_register_course_flow() {
        let (roster, out) = run_session("1\nS001\nAda\nada@x\n2\nS001\nC002\n6\n");
        assert!(out.contains("Available courses:"));
        assert!(out.contains("C001: C# Fundamentals (Beginner)"));
        assert!(out.contains("✓ Registered for course: Advanced Java"));
        assert_eq!(roster.find_student("S001").unwrap().enrollments().len(), 1);
    }

    #[test]
    fn test_register_unknown_course() {
        let (roster, out) = run_session("1\nS001\nAda\nada@x\n2\nS001\nC999\n6\n");
        assert!(out.contains("✗ Course not found: C999"));
        assert!(roster.find_student("S001").unwrap().enrollments().is_empty());
    }

    #[test]
    fn test_record_score_rejects_non_numeric() {
        let (roster, out) =
            run_session("1\nS001\nAda\nada@x\n2\nS001\nC001\n3\nS001\nC001\nten\n6\n");
        assert!(out.contains("✗ Score must be a number, got 'ten'"));
        let student = roster.find_student("S001").unwrap();
        assert!(student.enrollments()[0].score.abs() < f64::EPSILON);
        assert!(student.level().is_none());
    }

    #[test]
    fn test_record_score_flow() {
        let (roster, out) =
            run_session("1\nS001\nAda\nada@x\n2\nS001\nC001\n3\nS001\nC001\n9\n4\n6\n");
        assert!(out.contains("✓ Score recorded."));
        assert!(out.contains("ID: S001 | Level: Advanced"));
        assert!(out.contains("   - C# Fundamentals (Beginner) | Score: 9"));
        assert!((roster.find_student("S001").unwrap().enrollments()[0].score - 9.0).abs()
            < f64::EPSILON);
    }
}
