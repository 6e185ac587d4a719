use crate::questionnaire::Questionnaire;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    BasicInfo,
    Design,
    Features,
    Content,
    Preview,
}

impl Step {
    pub const ALL: [Step; 5] = [
        Step::BasicInfo,
        Step::Design,
        Step::Features,
        Step::Content,
        Step::Preview,
    ];

    pub fn number(self) -> usize {
        match self {
            Step::BasicInfo => 1,
            Step::Design => 2,
            Step::Features => 3,
            Step::Content => 4,
            Step::Preview => 5,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Step::BasicInfo => "基本情報",
            Step::Design => "デザイン選択",
            Step::Features => "機能選択",
            Step::Content => "コンテンツ詳細",
            Step::Preview => "確認・ダウンロード",
        }
    }

    pub fn heading(self) -> &'static str {
        match self {
            Step::BasicInfo => "基本情報の入力",
            Step::Design => "デザインの選択",
            Step::Features => "必要な機能の選択",
            Step::Content => "コンテンツの詳細設定",
            Step::Preview => "AIプロンプトの確認",
        }
    }

    fn next(self) -> Option<Step> {
        Self::ALL.get(self.number()).copied()
    }

    fn previous(self) -> Option<Step> {
        self.number().checked_sub(2).map(|index| Self::ALL[index])
    }

    /// 다음 단계로 넘어가기 위해 비어 있으면 안 되는 필드의 라벨 목록.
    pub fn missing_fields(self, questionnaire: &Questionnaire) -> Vec<&'static str> {
        let required: Vec<(&'static str, &str)> = match self {
            Step::BasicInfo => vec![
                ("プロジェクト名", questionnaire.project_name.as_str()),
                ("ターゲット顧客", questionnaire.target_audience.as_str()),
                ("サイトの目的", questionnaire.purpose.as_str()),
                ("サイトのトーン・雰囲気", questionnaire.tone.as_str()),
            ],
            Step::Design => vec![
                ("デザインスタイル", questionnaire.design_style.as_str()),
                ("カラースキーム", questionnaire.color_scheme.as_str()),
                ("サイトのトーン・雰囲気", questionnaire.tone.as_str()),
            ],
            Step::Features | Step::Content | Step::Preview => Vec::new(),
        };

        required
            .into_iter()
            .filter(|(_, value)| value.is_empty())
            .map(|(label, _)| label)
            .collect()
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum Advance {
    Moved(Step),
    Blocked(Vec<&'static str>),
    AtEnd,
}

#[derive(Debug)]
pub struct Wizard {
    step: Step,
}

impl Wizard {
    pub fn new() -> Self {
        Self { step: Step::BasicInfo }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn can_advance(&self, questionnaire: &Questionnaire) -> bool {
        self.step.next().is_some() && self.step.missing_fields(questionnaire).is_empty()
    }

    pub fn advance(&mut self, questionnaire: &Questionnaire) -> Advance {
        let Some(next) = self.step.next() else {
            return Advance::AtEnd;
        };

        let missing = self.step.missing_fields(questionnaire);
        if !missing.is_empty() {
            tracing::debug!(step = self.step.number(), ?missing, "step advance blocked");
            return Advance::Blocked(missing);
        }

        tracing::info!(from = self.step.number(), to = next.number(), "step advanced");
        self.step = next;
        Advance::Moved(next)
    }

    /// 첫 단계에서는 아무 일도 하지 않는다.
    pub fn go_back(&mut self) -> Option<Step> {
        let previous = self.step.previous()?;
        tracing::info!(from = self.step.number(), to = previous.number(), "step went back");
        self.step = previous;
        Some(previous)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::questionnaire::fixtures::demo_questionnaire;

    #[test]
    fn starts_at_basic_info() {
        let wizard = Wizard::new();
        assert_eq!(wizard.step(), Step::BasicInfo);
        assert_eq!(wizard.step().number(), 1);
    }

    #[test]
    fn basic_info_requires_free_text_fields_to_be_present() {
        let mut wizard = Wizard::new();
        let questionnaire = Questionnaire {
            project_name: "Demo".to_string(),
            purpose: "   ".to_string(),
            ..Default::default()
        };

        assert!(!wizard.can_advance(&questionnaire));
        assert_eq!(
            wizard.advance(&questionnaire),
            Advance::Blocked(vec!["ターゲット顧客", "サイトのトーン・雰囲気"])
        );
        assert_eq!(wizard.step(), Step::BasicInfo);
    }

    #[test]
    fn whitespace_only_answer_counts_as_filled() {
        let mut wizard = Wizard::new();
        let questionnaire = Questionnaire {
            project_name: " ".to_string(),
            target_audience: "A".to_string(),
            purpose: "B".to_string(),
            tone: "  ".to_string(),
            ..Default::default()
        };

        assert!(Step::BasicInfo.missing_fields(&questionnaire).is_empty());
        assert_eq!(wizard.advance(&questionnaire), Advance::Moved(Step::Design));
    }

    #[test]
    fn design_step_requires_style_color_and_tone() {
        let mut wizard = Wizard::new();
        let mut questionnaire = demo_questionnaire();
        assert_eq!(wizard.advance(&questionnaire), Advance::Moved(Step::Design));

        questionnaire.color_scheme.clear();
        assert_eq!(
            wizard.advance(&questionnaire),
            Advance::Blocked(vec!["カラースキーム"])
        );

        questionnaire.color_scheme = "green".to_string();
        assert_eq!(wizard.advance(&questionnaire), Advance::Moved(Step::Features));
    }

    #[test]
    fn features_and_content_steps_are_never_blocked() {
        let mut wizard = Wizard::new();
        let questionnaire = demo_questionnaire();
        wizard.advance(&questionnaire);
        wizard.advance(&questionnaire);

        let empty = Questionnaire::default();
        assert_eq!(wizard.advance(&empty), Advance::Moved(Step::Content));
        assert_eq!(wizard.advance(&empty), Advance::Moved(Step::Preview));
        assert_eq!(wizard.advance(&empty), Advance::AtEnd);
        assert!(!wizard.can_advance(&empty));
    }

    #[test]
    fn go_back_stops_at_first_step() {
        let mut wizard = Wizard::new();
        assert_eq!(wizard.go_back(), None);

        wizard.advance(&demo_questionnaire());
        assert_eq!(wizard.go_back(), Some(Step::BasicInfo));
        assert_eq!(wizard.step(), Step::BasicInfo);
    }

    #[test]
    fn step_numbers_follow_order() {
        for (index, step) in Step::ALL.iter().enumerate() {
            assert_eq!(step.number(), index + 1);
        }
    }
}
