use std::fmt;

use crate::Student;

/// An ordered collection of [`Student`] records.
///
/// The roster is a snapshot: state-changing operations consume it and return
/// a new value, queries only borrow. The menu loop threads the current
/// snapshot through each iteration, so there is never shared mutable state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    students: Vec<Student>,
}

/// The record field a query matches against.
///
/// Matching is always exact, case-sensitive equality. That is a deliberate
/// simplicity choice, not a gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryField {
    Name,
    Course,
    Module,
}

impl QueryField {
    fn get(self, student: &Student) -> &str {
        match self {
            Self::Name => student.name(),
            Self::Course => student.course(),
            Self::Module => student.module(),
        }
    }
}

impl Roster {
    /// An empty roster.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            students: Vec::new(),
        }
    }

    /// Returns a new snapshot with `student` appended at the end.
    #[must_use]
    pub fn with(mut self, student: Student) -> Self {
        self.students.push(student);
        self
    }

    /// Returns a new snapshot without any record whose id equals `id`,
    /// along with the first removed record if there was one.
    ///
    /// Duplicate ids are permitted, so this can remove more than one record.
    /// Only the first match is reported back. Relative order of the
    /// surviving records is preserved.
    #[must_use]
    pub fn without_id(self, id: i32) -> (Self, Option<Student>) {
        let mut removed = None;
        let students = self
            .students
            .into_iter()
            .filter(|student| {
                if student.id() == id {
                    if removed.is_none() {
                        removed = Some(student.clone());
                    }
                    false
                } else {
                    true
                }
            })
            .collect();

        (Self { students }, removed)
    }

    /// The records whose `field` exactly equals `value`.
    pub fn matching<'a>(
        &'a self,
        field: QueryField,
        value: &'a str,
    ) -> impl Iterator<Item = &'a Student> {
        self.students
            .iter()
            .filter(move |student| field.get(student) == value)
    }

    /// All records, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Student> {
        self.students.iter()
    }

    /// The number of records in the snapshot.
    #[must_use]
    pub fn len(&self) -> usize {
        self.students.len()
    }

    /// Whether the snapshot holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }
}

impl FromIterator<Student> for Roster {
    fn from_iter<I: IntoIterator<Item = Student>>(iter: I) -> Self {
        Self {
            students: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Roster {
    /// Renders every record, or the standard empty message.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.students.is_empty() {
            writeln!(f, "No students found.")
        } else {
            writeln!(f, "Students:")?;
            for student in &self.students {
                write!(f, "{student}")?;
            }
            Ok(())
        }
    }
}
