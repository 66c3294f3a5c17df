use crate::gradation::Gradation;
use crate::render::courses::{
    CourseRenderer, render_admin_course, render_base_course, render_lector_course,
};
use crate::user::Course;

/// The kind of card a user gets. Anything outside the known set renders with
/// the base course layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Student,
    Admin,
    Lector,
    Unknown,
}

/// Course renderer per role. Roles not listed here use [`render_base_course`].
static COURSE_RENDERERS: &[(Role, CourseRenderer)] = &[
    (Role::Student, render_base_course),
    (Role::Admin, render_admin_course),
    (Role::Lector, render_lector_course),
];

impl Role {
    /// Case-insensitive match against `student`, `admin` and `lector`.
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "student" => Role::Student,
            "admin" => Role::Admin,
            "lector" => Role::Lector,
            _ => Role::Unknown,
        }
    }

    pub fn course_renderer(self) -> CourseRenderer {
        COURSE_RENDERERS
            .iter()
            .find(|(role, _)| *role == self)
            .map(|(_, render)| *render)
            .unwrap_or(render_base_course)
    }

    /// Renders one course entry in this role's layout.
    pub fn render_course(
        self,
        course: &Course,
        gradation: &Gradation,
    ) -> askama::Result<String> {
        (self.course_renderer())(course, gradation)
    }

    /// The score fields a card of this role displays for `course`, by input
    /// field name.
    pub fn displayed_scores(self, course: &Course) -> Vec<(&'static str, Option<f64>)> {
        match self {
            Role::Student | Role::Unknown => vec![("mark", course.mark)],
            Role::Admin => vec![("score", course.score)],
            Role::Lector => vec![
                ("score", course.score),
                ("studentsScore", course.students_score),
            ],
        }
    }
}
