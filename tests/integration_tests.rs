use user_cards::config::RenderConfig;
use user_cards::gradation::Gradation;
use user_cards::output::grade_records;
use user_cards::render::{render_into, render_users};
use user_cards::sink::HostPage;
use user_cards::user::{User, parse_users};

const PAGE: &str = include_str!("fixtures/page.html");

fn fixtures() -> (Vec<User>, Gradation) {
    let users = parse_users(include_str!("fixtures/users.json")).expect("Failed to parse users");
    let gradation = Gradation::from_json(include_str!("fixtures/gradation.json"))
        .expect("Failed to parse gradation");
    (users, gradation)
}

fn cards(html: &str) -> Vec<&str> {
    html.split(r#"<div class="user-card "#).skip(1).collect()
}

#[test]
fn test_gradation_reference_values() {
    let (_, gradation) = fixtures();
    assert_eq!(gradation.score_class(Some(60.0)), "C");
    assert_eq!(gradation.score_class(Some(61.0)), "B");
    assert_eq!(gradation.score_class(Some(80.0)), "B");
    assert_eq!(gradation.score_class(Some(100.0)), "A");
    assert_eq!(gradation.score_class(Some(101.0)), "");
}

#[test]
fn test_full_render_role_shapes() {
    let (users, gradation) = fixtures();
    let html =
        render_users(&users, &gradation, &RenderConfig::default()).expect("Failed to render");
    let cards = cards(&html);

    assert_eq!(cards.len(), 5);

    // marks 75, 80 (upper boundary of B) and 60 (upper boundary of C)
    let student = cards[0];
    assert!(student.starts_with(r#"student">"#));
    assert!(student.contains("Anna Kowalska"));
    assert_eq!(student.matches(r#"<div class="course">"#).count(), 3);
    assert_eq!(student.matches(r#"<span class="course-score B">B</span>"#).count(), 2);
    assert_eq!(student.matches(r#"<span class="course-score C">C</span>"#).count(), 1);
    assert!(!student.contains("course-score A"));

    let admin = cards[1];
    assert!(admin.starts_with(r#"admin">"#));
    assert!(admin.contains(r#"<div class="course--admin">"#));
    assert!(admin.contains(r#"<span class="course-score B">B</span>"#));
    assert!(admin.contains(r#"<span class="course-lector">Leo Smith</span>"#));

    let lector = cards[2];
    assert!(lector.starts_with(r#"lector">"#));
    assert!(lector.contains(r#"<div class="course--lector">"#));
    assert!(lector.contains(r#"Lector's score: <span class="course-score A">A</span>"#));
    assert!(
        lector.contains(r#"Average student's score: <span class="course-score B">B</span>"#)
    );

    let guest = cards[3];
    assert!(guest.starts_with(r#"guest">"#));
    assert!(guest.contains(r#"<div class="course">"#));
    assert!(!guest.contains("course--"));
    assert!(guest.contains(r#"<span class="course-score"></span>"#));

    let newcomer = cards[4];
    assert!(newcomer.contains("Sam Newcomer"));
    assert!(!newcomer.contains("user-courses"));
}

#[test]
fn test_host_page_injection() {
    let (users, gradation) = fixtures();
    let mut page = HostPage::from_html(PAGE);

    let stats = render_into(&mut page, &users, &gradation, &RenderConfig::default())
        .expect("Failed to render into page");

    let html = page.html();
    assert_eq!(stats.cards, 5);
    assert_eq!(stats.unknown_roles, 1);
    assert_eq!(stats.ungraded_scores, 1);
    assert_eq!(cards(html).len(), 5);
    assert!(html.contains(
        r#"<div id="usersContainer" class="users"><div class="user-card student">"#
    ));
    assert!(html.contains(r#"<link rel="stylesheet" href="style.css">"#));
    assert!(html.contains(r#"<div class="wrapper">"#));
    assert!(html.trim_end().ends_with("</html>"));
}

#[test]
fn test_host_page_wrong_container() {
    let (users, gradation) = fixtures();
    let mut page = HostPage::from_html(PAGE);
    let config = RenderConfig {
        container_id: "missing".to_string(),
        ..Default::default()
    };

    assert!(render_into(&mut page, &users, &gradation, &config).is_err());
    assert_eq!(page.html(), PAGE);
}

#[test]
fn test_report_matches_cards() {
    let (users, gradation) = fixtures();
    let records = grade_records(&users, &gradation);

    // 3 student marks, 1 admin score, 2 lector scores, 1 guest mark
    assert_eq!(records.len(), 7);
    assert_eq!(records.iter().filter(|r| r.grade.is_empty()).count(), 1);
    assert_eq!(records[1].score, Some(80.0));
    assert_eq!(records[1].grade, "B");
    assert_eq!(records[5].field, "studentsScore");
    assert_eq!(records[5].grade, "B");
}
