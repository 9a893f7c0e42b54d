use std::fmt;

/// A student record held in the register.
///
/// Students are plain values: once constructed the fields never change.
/// Nothing is enforced about the fields themselves. Duplicate ids and empty
/// names are permitted, and removal is the only thing that ever interprets
/// the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    id: i32,
    name: String,
    course: String,
    module: String,
}

impl Student {
    /// Construct a new [`Student`] from its four fields.
    #[must_use]
    pub fn new(
        id: i32,
        name: impl Into<String>,
        course: impl Into<String>,
        module: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            course: course.into(),
            module: module.into(),
        }
    }

    /// The student's numeric identifier.
    ///
    /// Uniqueness is not enforced; see [`Roster::without_id`].
    ///
    /// [`Roster::without_id`]: crate::Roster::without_id
    #[must_use]
    pub const fn id(&self) -> i32 {
        self.id
    }

    /// The student's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The course the student is enrolled on.
    #[must_use]
    pub fn course(&self) -> &str {
        &self.course
    }

    /// The module the student is taking.
    #[must_use]
    pub fn module(&self) -> &str {
        &self.module
    }
}

impl fmt::Display for Student {
    /// Renders the record as a name heading with indented field lines.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, " {}:", self.name)?;
        writeln!(f, "  ID = {},", self.id)?;
        writeln!(f, "  Course = '{}',", self.course)?;
        writeln!(f, "  Module = '{}'", self.module)
    }
}

#[cfg(test)]
mod tests {
    use super::Student;

    #[test]
    fn display_contains_all_four_fields() {
        let student = Student::new(7, "Alice", "CS", "Algorithms");
        let rendered = student.to_string();
        assert!(rendered.contains("Alice"));
        assert!(rendered.contains("ID = 7"));
        assert!(rendered.contains("Course = 'CS'"));
        assert!(rendered.contains("Module = 'Algorithms'"));
    }

    #[test]
    fn empty_fields_are_permitted() {
        let student = Student::new(0, "", "", "");
        assert_eq!(student.name(), "");
        assert_eq!(student.course(), "");
    }
}
