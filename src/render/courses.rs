//! Course entry layouts, one per role.

use askama::Template;

use crate::gradation::Gradation;
use crate::user::Course;

/// Renders a single course entry of a card.
pub type CourseRenderer = fn(&Course, &Gradation) -> askama::Result<String>;

#[derive(Template)]
#[template(path = "course.html")]
struct BaseCourse<'a> {
    title: &'a str,
    grade: &'a str,
}

#[derive(Template)]
#[template(path = "course_admin.html")]
struct AdminCourse<'a> {
    title: &'a str,
    grade: &'a str,
    lector: &'a str,
}

#[derive(Template)]
#[template(path = "course_lector.html")]
struct LectorCourse<'a> {
    title: &'a str,
    grade: &'a str,
    students_grade: &'a str,
}

/// Student and fallback layout: title plus the grade of `mark`.
pub fn render_base_course(course: &Course, gradation: &Gradation) -> askama::Result<String> {
    BaseCourse {
        title: &course.title,
        grade: gradation.score_class(course.mark),
    }
    .render()
}

/// Admin layout: title, grade of `score`, and the course lecturer.
pub fn render_admin_course(course: &Course, gradation: &Gradation) -> askama::Result<String> {
    AdminCourse {
        title: &course.title,
        grade: gradation.score_class(course.score),
        lector: course.lector.as_deref().unwrap_or(""),
    }
    .render()
}

/// Lecturer layout: title, grade of `score`, and grade of the class average.
pub fn render_lector_course(course: &Course, gradation: &Gradation) -> askama::Result<String> {
    LectorCourse {
        title: &course.title,
        grade: gradation.score_class(course.score),
        students_grade: gradation.score_class(course.students_score),
    }
    .render()
}
