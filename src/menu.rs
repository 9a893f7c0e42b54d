//! The interactive menu loop.
//!
//! A [`Session`] owns a reader, a writer, and the current roster snapshot.
//! Each iteration prints the menu, reads a selection, dispatches the chosen
//! operation against the snapshot, and carries the resulting snapshot into
//! the next iteration. The session is generic over its streams so tests can
//! script a whole run against in-memory buffers.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::{
    prompt::{self, PromptError},
    QueryField, Roster, Student,
};

/// The integer choice read at each menu iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Add,
    Remove,
    QueryByName,
    QueryByCourse,
    QueryByModule,
    ListAll,
    Exit,
    /// Any integer outside 0–6. The loop reports it and continues.
    Other(i32),
}

impl From<i32> for Selection {
    fn from(choice: i32) -> Self {
        match choice {
            0 => Self::Exit,
            1 => Self::Add,
            2 => Self::Remove,
            3 => Self::QueryByName,
            4 => Self::QueryByCourse,
            5 => Self::QueryByModule,
            6 => Self::ListAll,
            other => Self::Other(other),
        }
    }
}

/// An interactive register session over a pair of streams.
#[derive(Debug)]
pub struct Session<R, W> {
    reader: R,
    writer: W,
    roster: Roster,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session with an empty roster.
    pub fn new(reader: R, writer: W) -> Self {
        Self::with_roster(reader, writer, Roster::new())
    }

    /// Creates a session starting from an existing snapshot.
    pub fn with_roster(reader: R, writer: W, roster: Roster) -> Self {
        Self {
            reader,
            writer,
            roster,
        }
    }

    /// Runs the menu loop until the user selects exit.
    ///
    /// Returns the final roster snapshot, for whatever the caller wants to do
    /// with it (the binary simply drops it).
    ///
    /// # Errors
    ///
    /// Returns an error if the streams fail or if an integer prompt receives
    /// malformed input. Malformed input is fatal by design; see
    /// [`PromptError::Parse`].
    pub fn run(mut self) -> Result<Roster, PromptError> {
        loop {
            self.print_menu()?;
            let choice = prompt::read_int(&mut self.reader, &mut self.writer, "Enter your choice: ")?;

            match Selection::from(choice) {
                Selection::Add => self.add_student()?,
                Selection::Remove => self.remove_student()?,
                Selection::QueryByName => self.query(QueryField::Name)?,
                Selection::QueryByCourse => self.query(QueryField::Course)?,
                Selection::QueryByModule => self.query(QueryField::Module)?,
                Selection::ListAll => write!(self.writer, "{}", self.roster)?,
                Selection::Exit => {
                    writeln!(self.writer, "Exiting the program. Goodbye!")?;
                    return Ok(self.roster);
                }
                Selection::Other(choice) => {
                    debug!(choice, "selection out of range");
                    writeln!(self.writer, "Invalid choice. Please try again.")?;
                }
            }
        }
    }

    fn print_menu(&mut self) -> Result<(), PromptError> {
        writeln!(self.writer)?;
        writeln!(self.writer, "University Register Menu")?;
        writeln!(self.writer, "1. Add Student")?;
        writeln!(self.writer, "2. Remove Student")?;
        writeln!(self.writer, "3. Query Students by Name")?;
        writeln!(self.writer, "4. Query Students by Course")?;
        writeln!(self.writer, "5. Query Students by Module")?;
        writeln!(self.writer, "6. Display All Students")?;
        writeln!(self.writer, "0. Exit")?;
        Ok(())
    }

    /// Prompts for the four fields and appends the new record.
    fn add_student(&mut self) -> Result<(), PromptError> {
        let id = prompt::read_int(&mut self.reader, &mut self.writer, "Enter student ID: ")?;
        let name = prompt::read_string(&mut self.reader, &mut self.writer, "Enter student name: ")?;
        let course =
            prompt::read_string(&mut self.reader, &mut self.writer, "Enter student course: ")?;
        let module =
            prompt::read_string(&mut self.reader, &mut self.writer, "Enter student module: ")?;

        debug!(id, %name, "adding student");
        self.roster = std::mem::take(&mut self.roster).with(Student::new(id, &name, course, module));

        writeln!(
            self.writer,
            "Student '{name}' has been successfully added."
        )?;
        Ok(())
    }

    /// Prompts for an id and drops every record carrying it.
    ///
    /// When duplicate ids are present all of them go, but only the first
    /// removed name is reported. That quirk is preserved deliberately.
    fn remove_student(&mut self) -> Result<(), PromptError> {
        let id = prompt::read_int(
            &mut self.reader,
            &mut self.writer,
            "Enter student ID to remove: ",
        )?;

        let (roster, removed) = std::mem::take(&mut self.roster).without_id(id);
        self.roster = roster;

        match removed {
            Some(student) => {
                debug!(id, name = student.name(), "removed student");
                writeln!(
                    self.writer,
                    "Student '{}' has been successfully removed.",
                    student.name()
                )?;
            }
            None => {
                debug!(id, "no student to remove");
                writeln!(self.writer, "Student with ID {id} not found.")?;
            }
        }
        Ok(())
    }

    /// Prompts for a search value and displays the exact matches.
    ///
    /// The roster itself is left untouched.
    fn query(&mut self, field: QueryField) -> Result<(), PromptError> {
        let prompt_text = match field {
            QueryField::Name => "Enter student name to search: ",
            QueryField::Course => "Enter course to search: ",
            QueryField::Module => "Enter module to search: ",
        };
        let value = prompt::read_string(&mut self.reader, &mut self.writer, prompt_text)?;

        let matches: Roster = self.roster.matching(field, &value).cloned().collect();
        debug!(?field, %value, count = matches.len(), "query");
        write!(self.writer, "{matches}")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::{Selection, Session};
    use crate::{prompt::PromptError, Roster, Student};

    /// Runs a scripted session and returns the final roster and everything
    /// written to the output stream.
    fn run_script(input: &str) -> (Roster, String) {
        let mut out = Vec::new();
        let roster = Session::new(Cursor::new(input), &mut out)
            .run()
            .expect("scripted session should not fail");
        (roster, String::from_utf8(out).expect("output is UTF-8"))
    }

    #[test]
    fn selection_dispatch_covers_the_menu() {
        assert_eq!(Selection::from(0), Selection::Exit);
        assert_eq!(Selection::from(1), Selection::Add);
        assert_eq!(Selection::from(6), Selection::ListAll);
        assert_eq!(Selection::from(7), Selection::Other(7));
        assert_eq!(Selection::from(-1), Selection::Other(-1));
    }

    #[test]
    fn add_then_list_shows_the_record() {
        let (roster, output) = run_script("1\n1\nAlice\nCS\nAlgorithms\n6\n0\n");

        assert_eq!(roster.len(), 1);
        assert!(output.contains("Student 'Alice' has been successfully added."));
        assert!(output.contains("Students:"));
        assert!(output.contains(" Alice:"));
        assert!(output.contains("ID = 1"));
        assert!(output.contains("Course = 'CS'"));
        assert!(output.contains("Module = 'Algorithms'"));
    }

    #[test]
    fn removing_from_an_empty_roster_reports_not_found() {
        let (roster, output) = run_script("2\n999\n0\n");
        assert!(roster.is_empty());
        assert!(output.contains("Student with ID 999 not found."));
    }

    #[test]
    fn remove_preserves_the_other_records_in_order() {
        let script = "1\n1\nAlice\nCS\nAlgorithms\n\
                      1\n2\nBob\nCS\nDatabases\n\
                      1\n3\nCarol\nMaths\nLogic\n\
                      2\n2\n0\n";
        let (roster, output) = run_script(script);

        assert!(output.contains("Student 'Bob' has been successfully removed."));
        let names: Vec<_> = roster.iter().map(Student::name).collect();
        assert_eq!(names, ["Alice", "Carol"]);
    }

    #[test]
    fn query_with_no_matches_leaves_the_roster_unchanged() {
        let script = "1\n1\nAlice\nCS\nAlgorithms\n3\nBob\n6\n0\n";
        let (roster, output) = run_script(script);

        assert!(output.contains("No students found."));
        // The follow-up list-all still shows the original record.
        assert!(output.contains(" Alice:"));
        assert_eq!(roster.len(), 1);
    }

    #[test]
    fn queries_are_idempotent() {
        let script = "1\n1\nAlice\nCS\nAlgorithms\n4\nCS\n4\nCS\n0\n";
        let (roster, output) = run_script(script);

        assert_eq!(roster.len(), 1);
        assert_eq!(output.matches(" Alice:").count(), 2);
    }

    #[test]
    fn queries_are_case_sensitive() {
        let script = "1\n1\nAlice\nCS\nAlgorithms\n3\nalice\n0\n";
        let (_, output) = run_script(script);
        assert!(output.contains("No students found."));
    }

    #[test]
    fn two_adds_list_in_insertion_order() {
        let script = "1\n1\nAlice\nCS\nAlgorithms\n1\n2\nBob\nCS\nDatabases\n6\n0\n";
        let (_, output) = run_script(script);

        let alice = output.find(" Alice:").expect("Alice listed");
        let bob = output.find(" Bob:").expect("Bob listed");
        assert!(alice < bob);
    }

    #[test]
    fn out_of_range_selection_loops_with_the_roster_intact() {
        let script = "1\n1\nAlice\nCS\nAlgorithms\n9\n6\n0\n";
        let (roster, output) = run_script(script);

        assert!(output.contains("Invalid choice. Please try again."));
        assert_eq!(roster.len(), 1);
    }

    #[test]
    fn exit_prints_the_farewell() {
        let (_, output) = run_script("0\n");
        assert!(output.contains("Exiting the program. Goodbye!"));
        assert!(output.contains("University Register Menu"));
    }

    #[test]
    fn malformed_selection_is_fatal() {
        let mut out = Vec::new();
        let err = Session::new(Cursor::new("abc\n"), &mut out)
            .run()
            .unwrap_err();
        assert!(matches!(err, PromptError::Parse(_)));
    }

    #[test]
    fn malformed_id_during_add_is_fatal() {
        let mut out = Vec::new();
        let err = Session::new(Cursor::new("1\nnot-a-number\n"), &mut out)
            .run()
            .unwrap_err();
        assert!(matches!(err, PromptError::Parse(_)));
    }

    #[test]
    fn removing_a_duplicate_id_reports_only_the_first_name() {
        let script = "1\n1\nAlice\nCS\nAlgorithms\n\
                      1\n1\nAlicia\nMaths\nLogic\n\
                      2\n1\n0\n";
        let (roster, output) = run_script(script);

        assert!(roster.is_empty());
        assert!(output.contains("Student 'Alice' has been successfully removed."));
        assert!(!output.contains("Alicia' has been successfully removed."));
    }
}
