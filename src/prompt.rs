use crate::catalog;
use crate::questionnaire::Questionnaire;

const BLOCK_SEPARATOR: &str = "\n\n";

pub const TECHNICAL_REQUIREMENTS: [&str; 4] = [
    "- レスポンシブデザイン対応（スマホ・タブレット・PC）",
    "- モダンなフレームワーク（React/Next.js推奨）",
    "- 高速なページ読み込み",
    "- SEO最適化",
];

pub const IMPLEMENTATION_POLICY: [&str; 4] = [
    "1. 上記の要件を満たすウェブサイトを作成してください",
    "2. コードは再利用可能でメンテナンスしやすい構造にしてください",
    "3. ユーザビリティとアクセシビリティに配慮してください",
    "4. パフォーマンスを重視し、最適化を行ってください",
];

pub const ADDITIONAL_REQUESTS_HEADING: &str = "## その他の要望";

/// 설문 응답을 AI 코드 생성 도구용 프롬프트 문서로 변환한다.
///
/// 순수 함수다. 시각이나 전역 상태를 읽지 않으므로 같은 입력은 항상 같은 바이트열을 만든다.
/// 각 블록은 독립적으로 평가되고, 생략된 블록을 제외한 나머지가 빈 줄 하나로 이어진다.
pub fn compile(questionnaire: &Questionnaire) -> String {
    let blocks = [
        Some(opening_block(questionnaire)),
        Some(overview_block(questionnaire)),
        Some(design_block(questionnaire)),
        Some(content_block(questionnaire)),
        Some(feature_block(questionnaire)),
        Some(fixed_block("## 技術要件", &TECHNICAL_REQUIREMENTS)),
        additional_requests_block(questionnaire),
        Some(fixed_block("## 実装方針", &IMPLEMENTATION_POLICY)),
    ];

    blocks
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(BLOCK_SEPARATOR)
}

fn opening_block(questionnaire: &Questionnaire) -> String {
    format!(
        "以下の要件で{}を作成してください。",
        questionnaire.project_type.label()
    )
}

fn overview_block(questionnaire: &Questionnaire) -> String {
    [
        "## プロジェクト概要".to_string(),
        format!("- プロジェクト名: {}", questionnaire.project_name),
        format!("- ターゲット顧客: {}", questionnaire.target_audience),
        format!("- サイトの目的: {}", questionnaire.purpose),
        format!("- トーン・雰囲気: {}", questionnaire.tone),
    ]
    .join("\n")
}

fn design_block(questionnaire: &Questionnaire) -> String {
    [
        "## デザイン要件".to_string(),
        format!(
            "- デザインスタイル: {}",
            catalog::label_of(catalog::DESIGN_STYLES, &questionnaire.design_style)
        ),
        format!(
            "- カラースキーム: {}",
            catalog::label_of(catalog::COLOR_SCHEMES, &questionnaire.color_scheme)
        ),
        format!(
            "- アニメーション: {}",
            catalog::label_of(catalog::ANIMATION_LEVELS, &questionnaire.animations)
        ),
        format!("- 画像・ビジュアル: {}", questionnaire.images),
    ]
    .join("\n")
}

fn content_block(questionnaire: &Questionnaire) -> String {
    let mut lines = vec![
        "## コンテンツ要件".to_string(),
        format!("- コピーライティング: {}", questionnaire.copywriting),
        "- 必要なページ/セクション:".to_string(),
    ];
    lines.extend(
        questionnaire
            .pages
            .iter()
            .map(|page| format!("  - {}", catalog::page_label(page))),
    );
    lines.join("\n")
}

fn feature_block(questionnaire: &Questionnaire) -> String {
    let mut lines = vec!["## 機能要件".to_string()];
    lines.extend(
        questionnaire
            .features
            .iter()
            .map(|feature| format!("- {}", catalog::feature_label(feature))),
    );
    lines.join("\n")
}

fn fixed_block(heading: &str, lines: &[&str]) -> String {
    let mut block = heading.to_string();
    for line in lines {
        block.push('\n');
        block.push_str(line);
    }
    block
}

fn additional_requests_block(questionnaire: &Questionnaire) -> Option<String> {
    questionnaire
        .additional_requests()
        .map(|info| format!("{}\n{}", ADDITIONAL_REQUESTS_HEADING, info))
}
