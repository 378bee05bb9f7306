//! Instructors page: sorted instructor cards with normalized bios.

use serde::Serialize;

use crate::adapters::InstructorSource;
use crate::core::{normalize_bio, BioInput};
use crate::domain::{Instructor, ResourceId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstructorCard {
    pub id: ResourceId,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Sanitized bio HTML
    pub bio_html: String,
    /// Image on the right instead of the left (every other card)
    pub reversed: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InstructorsPage {
    pub instructors: Vec<InstructorCard>,
}

impl InstructorsPage {
    /// Sort by numeric id and render each card
    pub fn build(mut instructors: Vec<Instructor>) -> Self {
        instructors.sort_by(|a, b| a.id.numeric_cmp(&b.id));

        let instructors = instructors
            .into_iter()
            .enumerate()
            .map(|(index, instructor)| InstructorCard {
                bio_html: normalize_bio(&BioInput::from_value(&instructor.bio)),
                id: instructor.id,
                name: instructor.name,
                title: instructor.title.filter(|t| !t.is_empty()),
                image: instructor.image,
                reversed: index % 2 == 1,
            })
            .collect();

        Self { instructors }
    }

    /// Load and build; a failed list read yields an empty page
    pub async fn load(source: &dyn InstructorSource) -> Self {
        match source.list_instructors().await {
            Ok(instructors) => Self::build(instructors),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to fetch instructors");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn instructor(id: ResourceId, name: &str, bio: serde_json::Value) -> Instructor {
        Instructor {
            id,
            name: name.to_string(),
            title: None,
            bio,
            image: None,
        }
    }

    #[test]
    fn test_sorted_by_numeric_id() {
        let page = InstructorsPage::build(vec![
            instructor(ResourceId::from("10"), "Ten", json!("")),
            instructor(ResourceId::Number(2), "Two", json!("")),
            instructor(ResourceId::from("1"), "One", json!("")),
        ]);

        let names: Vec<&str> = page.instructors.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["One", "Two", "Ten"]);

        let reversed: Vec<bool> = page.instructors.iter().map(|c| c.reversed).collect();
        assert_eq!(reversed, vec![false, true, false]);
    }

    #[test]
    fn test_bio_shapes() {
        let page = InstructorsPage::build(vec![
            instructor(ResourceId::Number(1), "A", json!(["#Coach A", "*Black Belt", "Teaches kids."])),
            instructor(ResourceId::Number(2), "B", json!("<p>Already <strong>HTML</strong></p>")),
        ]);

        assert_eq!(
            page.instructors[0].bio_html,
            "<h3>Coach A</h3><p><strong>Black Belt</strong></p><p>Teaches kids.</p>"
        );
        assert_eq!(
            page.instructors[1].bio_html,
            "<p>Already <strong>HTML</strong></p>"
        );
    }
}
