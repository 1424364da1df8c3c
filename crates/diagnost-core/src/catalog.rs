//! Registry of diagnostic quizzes by course and section.

use crate::parser::QuizDefinition;

/// All known quiz definitions, in load order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    definitions: Vec<QuizDefinition>,
}

impl Catalog {
    pub fn new(definitions: Vec<QuizDefinition>) -> Self {
        Self { definitions }
    }

    /// The quiz for a course section. Course matching ignores case.
    pub fn get(&self, course: &str, section: &str) -> Option<&QuizDefinition> {
        self.definitions.iter().find(|d| {
            d.quiz.course.eq_ignore_ascii_case(course) && d.quiz.section == section
        })
    }

    /// Distinct course tags, in first-seen order.
    pub fn courses(&self) -> Vec<&str> {
        let mut courses: Vec<&str> = Vec::new();
        for d in &self.definitions {
            if !courses
                .iter()
                .any(|c| c.eq_ignore_ascii_case(&d.quiz.course))
            {
                courses.push(&d.quiz.course);
            }
        }
        courses
    }

    /// Section tags available for a course, in load order.
    pub fn sections(&self, course: &str) -> Vec<&str> {
        self.definitions
            .iter()
            .filter(|d| d.quiz.course.eq_ignore_ascii_case(course))
            .map(|d| d.quiz.section.as_str())
            .collect()
    }

    /// Single-exam courses have exactly one diagnostic, so hosts can skip
    /// the section picker.
    pub fn is_single_exam(&self, course: &str) -> bool {
        self.sections(course).len() == 1
    }

    pub fn definitions(&self) -> &[QuizDefinition] {
        &self.definitions
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::area::AreaNames;
    use crate::model::Quiz;

    fn def(course: &str, section: &str) -> QuizDefinition {
        QuizDefinition {
            quiz: Quiz {
                id: format!("{course}-{section}"),
                course: course.into(),
                section: section.into(),
                title: section.into(),
                description: String::new(),
                time_limit_minutes: 35,
                passing_score: 70,
                questions: vec![],
            },
            area_names: AreaNames::new(),
        }
    }

    #[test]
    fn lookup_by_course_and_section() {
        let catalog = Catalog::new(vec![
            def("ea", "SEE1"),
            def("ea", "SEE2"),
            def("cisa", "CISA"),
            def("ea", "SEE3"),
        ]);

        assert_eq!(catalog.len(), 4);
        assert_eq!(catalog.courses(), vec!["ea", "cisa"]);
        assert_eq!(catalog.sections("ea"), vec!["SEE1", "SEE2", "SEE3"]);
        assert_eq!(catalog.get("EA", "SEE2").unwrap().quiz.id, "ea-SEE2");
        assert!(catalog.get("ea", "SEE9").is_none());

        assert!(catalog.is_single_exam("cisa"));
        assert!(!catalog.is_single_exam("ea"));
        assert!(!catalog.is_single_exam("cpa"));
    }
}
