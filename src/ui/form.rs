use crate::catalog::{self, CatalogOption};
use crate::questionnaire::{ProjectType, Questionnaire, QuestionnaireUpdate};
use crate::wizard::Step;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKey {
    ProjectName,
    ProjectType,
    TargetAudience,
    Purpose,
    ToneText,
    DesignStyle,
    ColorScheme,
    ToneChoice,
    Features,
    AdditionalInfo,
    Pages,
    Copywriting,
    Images,
    Animations,
}

#[derive(Debug, Clone, Copy)]
pub struct ChoiceOption {
    pub group: Option<&'static str>,
    pub option: &'static CatalogOption,
}

#[derive(Debug, Clone)]
pub enum FieldKind {
    Text {
        multiline: bool,
        placeholder: &'static str,
    },
    Choice {
        options: Vec<ChoiceOption>,
        multiple: bool,
    },
}

#[derive(Debug, Clone)]
pub struct Field {
    pub key: FieldKey,
    pub label: &'static str,
    pub required: bool,
    pub kind: FieldKind,
}

impl Field {
    fn text(key: FieldKey, label: &'static str, multiline: bool, placeholder: &'static str) -> Self {
        Self {
            key,
            label,
            required: !matches!(key, FieldKey::AdditionalInfo),
            kind: FieldKind::Text { multiline, placeholder },
        }
    }

    fn single(key: FieldKey, label: &'static str, required: bool, catalog: &'static [CatalogOption]) -> Self {
        Self {
            key,
            label,
            required,
            kind: FieldKind::Choice {
                options: ungrouped(catalog),
                multiple: false,
            },
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self.kind, FieldKind::Text { .. })
    }

    pub fn is_multiline(&self) -> bool {
        matches!(self.kind, FieldKind::Text { multiline: true, .. })
    }

    pub fn options(&self) -> &[ChoiceOption] {
        match &self.kind {
            FieldKind::Choice { options, .. } => options,
            FieldKind::Text { .. } => &[],
        }
    }

    pub fn text_value<'a>(&self, questionnaire: &'a Questionnaire) -> &'a str {
        match self.key {
            FieldKey::ProjectName => questionnaire.project_name.as_str(),
            FieldKey::TargetAudience => questionnaire.target_audience.as_str(),
            FieldKey::Purpose => questionnaire.purpose.as_str(),
            FieldKey::ToneText => questionnaire.tone.as_str(),
            FieldKey::AdditionalInfo => questionnaire.additional_info.as_deref().unwrap_or(""),
            _ => "",
        }
    }

    pub fn text_update(&self, value: String) -> QuestionnaireUpdate {
        let mut update = QuestionnaireUpdate::default();
        match self.key {
            FieldKey::ProjectName => update.project_name = Some(value),
            FieldKey::TargetAudience => update.target_audience = Some(value),
            FieldKey::Purpose => update.purpose = Some(value),
            FieldKey::ToneText => update.tone = Some(value),
            FieldKey::AdditionalInfo => update.additional_info = Some(value),
            _ => {}
        }
        update
    }

    pub fn is_selected(&self, questionnaire: &Questionnaire, id: &str) -> bool {
        match self.key {
            FieldKey::ProjectType => questionnaire.project_type.id() == id,
            FieldKey::DesignStyle => questionnaire.design_style == id,
            FieldKey::ColorScheme => questionnaire.color_scheme == id,
            FieldKey::ToneChoice => questionnaire.tone == id,
            FieldKey::Copywriting => questionnaire.copywriting == id,
            FieldKey::Images => questionnaire.images == id,
            FieldKey::Animations => questionnaire.animations == id,
            FieldKey::Features => questionnaire.features.iter().any(|f| f == id),
            FieldKey::Pages => questionnaire.pages.iter().any(|p| p == id),
            _ => false,
        }
    }

    /// 단일 선택은 값을 덮어쓰고, 복수 선택은 토글한다.
    pub fn choose(&self, questionnaire: &Questionnaire, id: &str) -> Questionnaire {
        let value = Some(id.to_string());
        let update = match self.key {
            FieldKey::ProjectType => QuestionnaireUpdate {
                project_type: ProjectType::from_id(id),
                ..Default::default()
            },
            FieldKey::DesignStyle => QuestionnaireUpdate {
                design_style: value,
                ..Default::default()
            },
            FieldKey::ColorScheme => QuestionnaireUpdate {
                color_scheme: value,
                ..Default::default()
            },
            FieldKey::ToneChoice => QuestionnaireUpdate {
                tone: value,
                ..Default::default()
            },
            FieldKey::Copywriting => QuestionnaireUpdate {
                copywriting: value,
                ..Default::default()
            },
            FieldKey::Images => QuestionnaireUpdate {
                images: value,
                ..Default::default()
            },
            FieldKey::Animations => QuestionnaireUpdate {
                animations: value,
                ..Default::default()
            },
            FieldKey::Features => return questionnaire.with_feature_toggled(id),
            FieldKey::Pages => return questionnaire.with_page_toggled(id),
            _ => QuestionnaireUpdate::default(),
        };
        questionnaire.merged(update)
    }
}

fn ungrouped(catalog: &'static [CatalogOption]) -> Vec<ChoiceOption> {
    catalog
        .iter()
        .map(|option| ChoiceOption { group: None, option })
        .collect()
}

fn feature_options() -> Vec<ChoiceOption> {
    catalog::FEATURE_GROUPS
        .iter()
        .flat_map(|group| {
            group.options.iter().map(move |option| ChoiceOption {
                group: Some(group.title),
                option,
            })
        })
        .collect()
}

/// 단계별 입력 항목. 페이지 후보는 현재 프로젝트 유형의 카탈로그에서 가져온다.
pub fn fields_for(step: Step, project_type: ProjectType) -> Vec<Field> {
    match step {
        Step::BasicInfo => vec![
            Field::text(
                FieldKey::ProjectName,
                "プロジェクト名",
                false,
                "例：新商品紹介ランディングページ",
            ),
            Field::single(FieldKey::ProjectType, "サイトの種類", true, catalog::PROJECT_TYPES),
            Field::text(
                FieldKey::TargetAudience,
                "ターゲット顧客",
                false,
                "例：20-30代の女性、IT企業の経営者",
            ),
            Field::text(
                FieldKey::Purpose,
                "サイトの目的",
                true,
                "例：新商品の認知度向上と購入促進",
            ),
            Field::text(
                FieldKey::ToneText,
                "サイトのトーン・雰囲気",
                false,
                "例：親しみやすく明るい、プロフェッショナルで信頼感のある",
            ),
        ],
        Step::Design => vec![
            Field::single(FieldKey::DesignStyle, "デザインスタイル", true, catalog::DESIGN_STYLES),
            Field::single(FieldKey::ColorScheme, "カラースキーム", true, catalog::COLOR_SCHEMES),
            Field::single(FieldKey::ToneChoice, "サイトのトーン・雰囲気", true, catalog::SITE_TONES),
        ],
        Step::Features => vec![
            Field {
                key: FieldKey::Features,
                label: "必要な機能",
                required: false,
                kind: FieldKind::Choice {
                    options: feature_options(),
                    multiple: true,
                },
            },
            Field::text(
                FieldKey::AdditionalInfo,
                "その他の要望（任意）",
                true,
                "特別な要望や追加機能があれば記入してください",
            ),
        ],
        Step::Content => vec![
            Field {
                key: FieldKey::Pages,
                label: "必要なページ・セクション",
                required: false,
                kind: FieldKind::Choice {
                    options: ungrouped(catalog::pages_for(project_type)),
                    multiple: true,
                },
            },
            Field::single(
                FieldKey::Copywriting,
                "コピーライティングの方向性",
                false,
                catalog::COPYWRITING_STYLES,
            ),
            Field::single(
                FieldKey::Images,
                "画像・ビジュアルの方向性",
                false,
                catalog::VISUAL_DIRECTIONS,
            ),
            Field::single(
                FieldKey::Animations,
                "アニメーション・動きの要望",
                false,
                catalog::ANIMATION_LEVELS,
            ),
        ],
        Step::Preview => Vec::new(),
    }
}
