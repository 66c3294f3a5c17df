use serde::Serialize;

use crate::gradation::Gradation;
use crate::render::Role;
use crate::user::User;

/// Counts for one render pass.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct RenderStats {
    pub cards: usize,

    // cards by role
    pub students: usize,
    pub admins: usize,
    pub lectors: usize,
    pub unknown_roles: usize,

    // course entries
    pub courses: usize,
    pub cards_without_courses: usize,

    // displayed scores
    pub graded_scores: usize,
    pub ungraded_scores: usize,
}

impl RenderStats {
    pub fn from_users(users: &[User], gradation: &Gradation) -> Self {
        let mut s = RenderStats {
            cards: users.len(),
            ..Default::default()
        };

        for user in users {
            let role = Role::from_name(&user.role);
            match role {
                Role::Student => s.students += 1,
                Role::Admin => s.admins += 1,
                Role::Lector => s.lectors += 1,
                Role::Unknown => s.unknown_roles += 1,
            }

            if user.courses.is_empty() {
                s.cards_without_courses += 1;
            }
            s.courses += user.courses.len();

            for course in &user.courses {
                for (_, score) in role.displayed_scores(course) {
                    if gradation.score_class(score).is_empty() {
                        s.ungraded_scores += 1;
                    } else {
                        s.graded_scores += 1;
                    }
                }
            }
        }

        s
    }

    pub fn pct(part: usize, total: usize) -> f64 {
        if total == 0 {
            0.0
        } else {
            (part as f64 / total as f64) * 100.0
        }
    }

    pub fn graded_pct(&self) -> f64 {
        Self::pct(self.graded_scores, self.graded_scores + self.ungraded_scores)
    }
}
