use serde::{Deserialize, Serialize};

use crate::catalog;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectType {
    #[default]
    #[serde(rename = "lp")]
    LandingPage,
    #[serde(rename = "hp")]
    Homepage,
    #[serde(rename = "ec")]
    ECommerce,
}

impl ProjectType {
    pub const ALL: [ProjectType; 3] = [
        ProjectType::LandingPage,
        ProjectType::Homepage,
        ProjectType::ECommerce,
    ];

    pub fn id(self) -> &'static str {
        match self {
            ProjectType::LandingPage => "lp",
            ProjectType::Homepage => "hp",
            ProjectType::ECommerce => "ec",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|project_type| project_type.id() == id)
    }

    pub fn label(self) -> &'static str {
        catalog::label_of(catalog::PROJECT_TYPES, self.id())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Questionnaire {
    pub project_name: String,
    pub project_type: ProjectType,
    pub target_audience: String,
    pub purpose: String,
    pub tone: String,
    pub design_style: String,
    pub color_scheme: String,
    pub features: Vec<String>,
    pub pages: Vec<String>,
    pub copywriting: String,
    pub images: String,
    pub animations: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_info: Option<String>,
}

/// 부분 갱신. `None`인 필드는 기존 값을 유지한다.
#[derive(Debug, Clone, Default)]
pub struct QuestionnaireUpdate {
    pub project_name: Option<String>,
    pub project_type: Option<ProjectType>,
    pub target_audience: Option<String>,
    pub purpose: Option<String>,
    pub tone: Option<String>,
    pub design_style: Option<String>,
    pub color_scheme: Option<String>,
    pub features: Option<Vec<String>>,
    pub pages: Option<Vec<String>>,
    pub copywriting: Option<String>,
    pub images: Option<String>,
    pub animations: Option<String>,
    pub additional_info: Option<String>,
}

impl Questionnaire {
    /// `update`를 병합한 새 값을 반환한다.
    /// 프로젝트 유형이 바뀌면 새 유형의 카탈로그에 없는 페이지는 제거된다.
    pub fn merged(&self, update: QuestionnaireUpdate) -> Questionnaire {
        let mut next = self.clone();

        if let Some(value) = update.project_name {
            next.project_name = value;
        }
        if let Some(value) = update.target_audience {
            next.target_audience = value;
        }
        if let Some(value) = update.purpose {
            next.purpose = value;
        }
        if let Some(value) = update.tone {
            next.tone = value;
        }
        if let Some(value) = update.design_style {
            next.design_style = value;
        }
        if let Some(value) = update.color_scheme {
            next.color_scheme = value;
        }
        if let Some(value) = update.features {
            next.features = value;
        }
        if let Some(value) = update.pages {
            next.pages = value;
        }
        if let Some(value) = update.copywriting {
            next.copywriting = value;
        }
        if let Some(value) = update.images {
            next.images = value;
        }
        if let Some(value) = update.animations {
            next.animations = value;
        }
        if let Some(value) = update.additional_info {
            next.additional_info = Some(value);
        }

        if let Some(project_type) = update.project_type {
            if project_type != next.project_type {
                next.project_type = project_type;
                let valid_pages = catalog::pages_for(project_type);
                next.pages.retain(|page| catalog::contains(valid_pages, page));
            }
        }

        next
    }

    pub fn with_feature_toggled(&self, feature_id: &str) -> Questionnaire {
        self.merged(QuestionnaireUpdate {
            features: Some(toggled(&self.features, feature_id)),
            ..Default::default()
        })
    }

    pub fn with_page_toggled(&self, page_id: &str) -> Questionnaire {
        self.merged(QuestionnaireUpdate {
            pages: Some(toggled(&self.pages, page_id)),
            ..Default::default()
        })
    }

    pub fn additional_requests(&self) -> Option<&str> {
        self.additional_info.as_deref().filter(|info| !info.is_empty())
    }
}

fn toggled(selection: &[String], id: &str) -> Vec<String> {
    if selection.iter().any(|selected| selected == id) {
        selection
            .iter()
            .filter(|selected| selected.as_str() != id)
            .cloned()
            .collect()
    } else {
        let mut next = selection.to_vec();
        next.push(id.to_string());
        next
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn demo_questionnaire() -> Questionnaire {
        Questionnaire {
            project_name: "Demo".to_string(),
            project_type: ProjectType::LandingPage,
            target_audience: "A".to_string(),
            purpose: "B".to_string(),
            tone: "friendly".to_string(),
            design_style: "modern".to_string(),
            color_scheme: "blue".to_string(),
            animations: "none".to_string(),
            images: "photo".to_string(),
            copywriting: "casual".to_string(),
            pages: vec!["hero".to_string(), "cta".to_string()],
            features: vec!["responsive".to_string()],
            additional_info: Some(String::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_pages(project_type: ProjectType, pages: &[&str]) -> Questionnaire {
        Questionnaire {
            project_type,
            pages: pages.iter().map(|p| p.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn default_is_empty_landing_page() {
        let questionnaire = Questionnaire::default();
        assert_eq!(questionnaire.project_type, ProjectType::LandingPage);
        assert!(questionnaire.project_name.is_empty());
        assert!(questionnaire.features.is_empty());
        assert!(questionnaire.additional_info.is_none());
    }

    #[test]
    fn merged_replaces_only_present_fields() {
        let original = Questionnaire {
            project_name: "Demo".to_string(),
            purpose: "B".to_string(),
            ..Default::default()
        };
        let next = original.merged(QuestionnaireUpdate {
            purpose: Some("C".to_string()),
            ..Default::default()
        });

        assert_eq!(next.project_name, "Demo");
        assert_eq!(next.purpose, "C");
        assert_eq!(original.purpose, "B");
    }

    #[test]
    fn changing_project_type_prunes_invalid_pages() {
        let original = with_pages(ProjectType::LandingPage, &["hero", "faq", "cta"]);
        let next = original.merged(QuestionnaireUpdate {
            project_type: Some(ProjectType::Homepage),
            ..Default::default()
        });

        assert_eq!(next.project_type, ProjectType::Homepage);
        assert!(next.pages.is_empty());
    }

    #[test]
    fn same_project_type_keeps_pages() {
        let original = with_pages(ProjectType::LandingPage, &["hero", "cta"]);
        let next = original.merged(QuestionnaireUpdate {
            project_type: Some(ProjectType::LandingPage),
            ..Default::default()
        });
        assert_eq!(next.pages, vec!["hero", "cta"]);
    }

    #[test]
    fn project_type_change_prunes_pages_set_in_same_update() {
        let original = Questionnaire::default();
        let next = original.merged(QuestionnaireUpdate {
            project_type: Some(ProjectType::ECommerce),
            pages: Some(vec!["cart".to_string(), "hero".to_string()]),
            ..Default::default()
        });
        assert_eq!(next.pages, vec!["cart"]);
    }

    #[test]
    fn toggle_appends_then_removes() {
        let questionnaire = Questionnaire::default()
            .with_feature_toggled("seo-basic")
            .with_feature_toggled("responsive");
        assert_eq!(questionnaire.features, vec!["seo-basic", "responsive"]);

        let questionnaire = questionnaire.with_feature_toggled("seo-basic");
        assert_eq!(questionnaire.features, vec!["responsive"]);

        let questionnaire = questionnaire.with_page_toggled("hero").with_page_toggled("hero");
        assert!(questionnaire.pages.is_empty());
    }

    #[test]
    fn additional_requests_ignores_empty_string() {
        let mut questionnaire = Questionnaire::default();
        assert_eq!(questionnaire.additional_requests(), None);

        questionnaire.additional_info = Some(String::new());
        assert_eq!(questionnaire.additional_requests(), None);

        questionnaire.additional_info = Some("ダークモード".to_string());
        assert_eq!(questionnaire.additional_requests(), Some("ダークモード"));
    }

    #[test]
    fn deserializes_camel_case_with_missing_fields() {
        let json = serde_json::json!({
            "projectName": "Demo",
            "projectType": "ec",
            "designStyle": "modern",
            "pages": ["cart"]
        });
        let questionnaire: Questionnaire = serde_json::from_value(json).unwrap();

        assert_eq!(questionnaire.project_name, "Demo");
        assert_eq!(questionnaire.project_type, ProjectType::ECommerce);
        assert_eq!(questionnaire.design_style, "modern");
        assert_eq!(questionnaire.pages, vec!["cart"]);
        assert!(questionnaire.features.is_empty());
    }

    #[test]
    fn project_type_ids_round_trip_through_from_id() {
        for project_type in ProjectType::ALL {
            assert_eq!(ProjectType::from_id(project_type.id()), Some(project_type));
        }
        assert_eq!(ProjectType::from_id("blog"), None);
        assert_eq!(ProjectType::ECommerce.label(), "ECサイト");
    }
}
