use askama::Template;

use crate::config::RenderConfig;
use crate::gradation::Gradation;
use crate::render::role::Role;
use crate::user::User;

/// A user paired with the role its card is rendered as.
#[derive(Debug, Clone, Copy)]
pub struct UserCard<'a> {
    pub user: &'a User,
    pub role: Role,
}

#[derive(Template)]
#[template(path = "card.html")]
struct CardTemplate<'a> {
    role_class: &'a str,
    user_img: &'a str,
    name: &'a str,
    age: u32,
    role_img: &'a str,
    role: &'a str,
    /// Already rendered course entries.
    courses: Vec<String>,
}

impl<'a> UserCard<'a> {
    pub fn new(user: &'a User) -> Self {
        Self {
            user,
            role: Role::from_name(&user.role),
        }
    }

    /// Modifier class and role image name: the role text lowercased, as given.
    pub fn role_class(&self) -> String {
        self.user.role.to_lowercase()
    }

    /// Renders the full card. The courses block is omitted when the user has
    /// no courses.
    pub fn render(&self, gradation: &Gradation, config: &RenderConfig) -> askama::Result<String> {
        let user = self.user;
        let role_class = self.role_class();

        let courses = user
            .courses
            .iter()
            .map(|course| self.role.render_course(course, gradation))
            .collect::<askama::Result<Vec<_>>>()?;

        CardTemplate {
            role_class: &role_class,
            user_img: &config.user_image(&user.img),
            name: &user.name,
            age: user.age,
            role_img: &config.role_image(&role_class),
            role: &user.role,
            courses,
        }
        .render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user::Course;

    fn render(user: &User) -> String {
        UserCard::new(user)
            .render(&Gradation::default(), &RenderConfig::default())
            .unwrap()
    }

    #[test]
    fn test_card_header() {
        let user = User::new("Ann", 21, "ann", "Student");
        let html = render(&user);

        assert!(html.starts_with(r#"<div class="user-card student">"#));
        assert!(html.contains(r#"<img src="images/users/ann.png" alt="Ann" class="user-img">"#));
        assert!(html.contains(r#"<p class="user-age">Age: <span>21</span></p>"#));
        assert!(html.contains(
            r#"<img src="images/roles/student.png" alt="Student" class="role-img">"#
        ));
        assert!(html.contains(r#"<span class="role-text">Student</span>"#));
    }

    #[test]
    fn test_no_courses_no_block() {
        let user = User::new("Ann", 21, "ann", "student");
        assert!(!render(&user).contains("user-courses"));
    }

    #[test]
    fn test_courses_block_in_order() {
        let user = User::new("Ann", 21, "ann", "student").with_courses(vec![
            Course::new("First").with_mark(50.0),
            Course::new("Second").with_mark(90.0),
        ]);
        let html = render(&user);

        assert!(html.contains(r#"<div class="user-courses">"#));
        assert_eq!(html.matches(r#"<div class="course">"#).count(), 2);
        let first = html.find("First").unwrap();
        let second = html.find("Second").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_unknown_role_keeps_its_class() {
        let user = User::new("Gus", 30, "gus", "Guest");
        let card = UserCard::new(&user);
        assert_eq!(card.role, Role::Unknown);
        let html = render(&user);
        assert!(html.starts_with(r#"<div class="user-card guest">"#));
        assert!(html.contains("images/roles/guest.png"));
    }

    #[test]
    fn test_custom_image_root() {
        let user = User::new("Ann", 21, "ann", "admin");
        let config = RenderConfig {
            image_root: "static/img".to_string(),
            ..Default::default()
        };
        let html = UserCard::new(&user)
            .render(&Gradation::default(), &config)
            .unwrap();
        assert!(html.contains(r#"src="static/img/users/ann.png""#));
        assert!(html.contains(r#"src="static/img/roles/admin.png""#));
    }

    #[test]
    fn test_name_is_escaped() {
        let user = User::new("<script>", 21, "x", "student");
        let html = render(&user);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_course_markup_is_not_escaped_twice() {
        let user = User::new("Ann", 21, "ann", "student")
            .with_courses(vec![Course::new("R&D").with_mark(70.0)]);
        let html = render(&user);
        assert!(html.contains(r#"<span class="course-title">R&amp;D</span>"#));
    }
}
