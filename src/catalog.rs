use crate::questionnaire::ProjectType;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogOption {
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

const fn option(
    id: &'static str,
    label: &'static str,
    description: &'static str,
) -> CatalogOption {
    CatalogOption { id, label, description }
}

pub struct FeatureGroup {
    pub title: &'static str,
    pub options: &'static [CatalogOption],
}

pub const PROJECT_TYPES: &[CatalogOption] = &[
    option("lp", "ランディングページ", "1ページ完結型"),
    option("hp", "ホームページ", "複数ページの企業サイト"),
    option("ec", "ECサイト", "オンラインショップ"),
];

pub const DESIGN_STYLES: &[CatalogOption] = &[
    option("modern", "モダン", "シンプルで洗練されたデザイン"),
    option("business", "ビジネス", "信頼感のある企業向けデザイン"),
    option("creative", "クリエイティブ", "個性的で印象的なデザイン"),
    option("elegant", "エレガント", "高級感のある上品なデザイン"),
    option("playful", "ポップ", "楽しく親しみやすいデザイン"),
    option("tech", "テック", "技術的で先進的なデザイン"),
];

pub const COLOR_SCHEMES: &[CatalogOption] = &[
    option("blue", "ブルー系", "#1E40AF / #3B82F6 / #93C5FD"),
    option("green", "グリーン系", "#166534 / #16A34A / #86EFAC"),
    option("purple", "パープル系", "#6B21A8 / #9333EA / #D8B4FE"),
    option("red", "レッド系", "#991B1B / #EF4444 / #FCA5A5"),
    option("mono", "モノクロ", "#111827 / #6B7280 / #E5E7EB"),
    option("warm", "暖色系", "#F59E0B / #FB923C / #FED7AA"),
];

pub const SITE_TONES: &[CatalogOption] = &[
    option("professional", "プロフェッショナル・洗練された", "高級感・信頼感"),
    option("friendly", "フレンドリー・親しみやすい", "温かみ・アットホーム"),
    option("modern", "モダン・先進的", "革新的・最先端"),
    option("energetic", "エネルギッシュ・活発", "躍動感・情熱的"),
    option("calm", "落ち着いた・誠実", "安心感・堅実"),
];

pub const LANDING_PAGE_SECTIONS: &[CatalogOption] = &[
    option("hero", "ヒーローセクション", "メインビジュアルとキャッチコピー"),
    option("features", "特徴・メリット", "商品・サービスの特徴"),
    option("problem", "課題提起", "顧客の悩みや問題"),
    option("solution", "解決策", "提供する解決方法"),
    option("testimonial", "お客様の声", "実績・体験談"),
    option("price", "料金", "価格表示"),
    option("cta", "CTA", "行動喚起ボタン"),
    option("faq", "FAQ", "よくある質問"),
];

pub const HOMEPAGE_PAGES: &[CatalogOption] = &[
    option("home", "トップページ", "メインページ"),
    option("about", "会社概要", "企業情報"),
    option("service", "サービス", "サービス一覧"),
    option("works", "実績", "事例紹介"),
    option("contact", "お問い合わせ", "コンタクトフォーム"),
    option("blog", "ブログ", "お知らせ・記事"),
    option("recruit", "採用情報", "求人情報"),
];

pub const EC_PAGES: &[CatalogOption] = &[
    option("top", "トップページ", "メインページ"),
    option("category", "カテゴリー", "商品分類"),
    option("product", "商品詳細", "個別商品ページ"),
    option("cart", "カート", "買い物かご"),
    option("checkout", "購入手続き", "決済ページ"),
    option("mypage", "マイページ", "会員ページ"),
    option("guide", "ご利用ガイド", "使い方説明"),
];

pub const COPYWRITING_STYLES: &[CatalogOption] = &[
    option("casual", "親しみやすい・カジュアル", "フレンドリーな話し言葉調"),
    option("professional", "専門的・信頼感重視", "丁寧な敬語調"),
    option("motivational", "情熱的・モチベーショナル", "熱意のある語り口調"),
    option("minimal", "シンプル・ミニマル", "簡潔で要点のみ"),
    option("story", "ストーリー重視", "体験談や事例を交えた展開"),
];

pub const VISUAL_DIRECTIONS: &[CatalogOption] = &[
    option("photo", "写真メイン", "リアルな人物や風景写真"),
    option("illustration", "イラストメイン", "親しみやすいイラスト"),
    option("icon", "アイコン・図解メイン", "分かりやすい図解"),
    option("minimal", "ミニマル", "必要最小限のビジュアル"),
    option("infographic", "インフォグラフィック", "データや情報を視覚化"),
];

pub const ANIMATION_LEVELS: &[CatalogOption] = &[
    option("none", "アニメーションなし", ""),
    option("minimal", "最小限のアニメーション", ""),
    option("smooth", "スムーズなアニメーション", ""),
    option("dynamic", "ダイナミックなアニメーション", ""),
    option("interactive", "インタラクティブな動き", ""),
];

const BASIC_FEATURES: &[CatalogOption] = &[
    option("responsive", "レスポンシブ対応", "スマホ・タブレット対応"),
    option(
        "seo-basic",
        "基本的な検索エンジン対策（SEO対策）",
        "Googleなどで見つかりやすくする基本設定",
    ),
    option(
        "seo-title",
        "ページタイトルの最適化（SEO対策）",
        "検索結果に表示される見出しを効果的に設定",
    ),
    option(
        "seo-meta",
        "説明文の最適化（SEO対策）",
        "検索結果に表示される説明文を魅力的に設定",
    ),
    option("analytics", "アクセス解析", "Google Analytics設置"),
    option("contact", "お問い合わせフォーム", "メール送信機能付き"),
];

const CONTENT_FEATURES: &[CatalogOption] = &[
    option("blog", "ブログ機能", "記事投稿・管理機能"),
    option("gallery", "ギャラリー", "画像・動画表示"),
    option("news", "お知らせ機能", "新着情報の配信"),
    option("faq", "FAQ", "よくある質問"),
];

const SOCIAL_FEATURES: &[CatalogOption] = &[
    option("sns", "SNS連携", "シェアボタン設置"),
    option("chat", "チャット機能", "リアルタイムサポート"),
    option("review", "レビュー機能", "お客様の声"),
    option("member", "会員機能", "ログイン・マイページ"),
];

const ADVANCED_FEATURES: &[CatalogOption] = &[
    option("ec", "EC機能", "オンライン決済"),
    option("reservation", "予約システム", "カレンダー予約"),
    option("multilang", "多言語対応", "複数言語切り替え"),
    option("api", "外部API連携", "他サービスとの連携"),
    option(
        "llm-chatbot",
        "AI対話システム（LLM対策）",
        "ChatGPTのような自動応答機能",
    ),
    option(
        "llm-content",
        "AI用コンテンツ最適化（LLM対策）",
        "AIが理解しやすい情報構造にする",
    ),
    option(
        "llm-structured",
        "構造化データ対応（LLM対策）",
        "AIが情報を読み取りやすくする設定",
    ),
];

pub const FEATURE_GROUPS: &[FeatureGroup] = &[
    FeatureGroup { title: "基本機能", options: BASIC_FEATURES },
    FeatureGroup { title: "コンテンツ機能", options: CONTENT_FEATURES },
    FeatureGroup { title: "ソーシャル機能", options: SOCIAL_FEATURES },
    FeatureGroup { title: "高度な機能", options: ADVANCED_FEATURES },
];

pub fn pages_for(project_type: ProjectType) -> &'static [CatalogOption] {
    match project_type {
        ProjectType::LandingPage => LANDING_PAGE_SECTIONS,
        ProjectType::Homepage => HOMEPAGE_PAGES,
        ProjectType::ECommerce => EC_PAGES,
    }
}

pub fn find<'a>(catalog: &'a [CatalogOption], id: &str) -> Option<&'a CatalogOption> {
    catalog.iter().find(|option| option.id == id)
}

pub fn contains(catalog: &[CatalogOption], id: &str) -> bool {
    find(catalog, id).is_some()
}

/// ID에 해당하는 표시 라벨을 반환한다. 카탈로그에 없는 ID는 그대로 돌려준다.
pub fn label_of<'a>(catalog: &'static [CatalogOption], id: &'a str) -> &'a str {
    find(catalog, id).map_or(id, |option| option.label)
}

/// 페이지 ID는 모든 프로젝트 유형의 카탈로그를 순서대로 검색한다.
pub fn page_label(id: &str) -> &str {
    [LANDING_PAGE_SECTIONS, HOMEPAGE_PAGES, EC_PAGES]
        .into_iter()
        .find_map(|catalog| find(catalog, id))
        .map_or(id, |option| option.label)
}

pub fn feature_label(id: &str) -> &str {
    FEATURE_GROUPS
        .iter()
        .find_map(|group| find(group.options, id))
        .map_or(id, |option| option.label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn label_of_resolves_known_id() {
        assert_eq!(label_of(DESIGN_STYLES, "modern"), "モダン");
        assert_eq!(label_of(COLOR_SCHEMES, "warm"), "暖色系");
        assert_eq!(label_of(ANIMATION_LEVELS, "none"), "アニメーションなし");
    }

    #[test]
    fn label_of_falls_back_to_raw_id() {
        assert_eq!(label_of(DESIGN_STYLES, "brutalist"), "brutalist");
        assert_eq!(label_of(DESIGN_STYLES, ""), "");
    }

    #[test]
    fn page_label_searches_every_project_type() {
        assert_eq!(page_label("hero"), "ヒーローセクション");
        assert_eq!(page_label("recruit"), "採用情報");
        assert_eq!(page_label("checkout"), "購入手続き");
        assert_eq!(page_label("unknown-page"), "unknown-page");
    }

    #[test]
    fn feature_label_covers_every_group() {
        assert_eq!(feature_label("responsive"), "レスポンシブ対応");
        assert_eq!(feature_label("faq"), "FAQ");
        assert_eq!(feature_label("member"), "会員機能");
        assert_eq!(feature_label("llm-structured"), "構造化データ対応（LLM対策）");
        assert_eq!(feature_label("seo"), "seo");
    }

    #[test]
    fn pages_for_returns_catalog_per_project_type() {
        assert!(contains(pages_for(ProjectType::LandingPage), "cta"));
        assert!(contains(pages_for(ProjectType::Homepage), "about"));
        assert!(contains(pages_for(ProjectType::ECommerce), "cart"));
        assert!(!contains(pages_for(ProjectType::ECommerce), "hero"));
    }

    #[test]
    fn catalog_ids_are_unique_within_each_catalog() {
        let catalogs: Vec<&[CatalogOption]> = vec![
            PROJECT_TYPES,
            DESIGN_STYLES,
            COLOR_SCHEMES,
            SITE_TONES,
            LANDING_PAGE_SECTIONS,
            HOMEPAGE_PAGES,
            EC_PAGES,
            COPYWRITING_STYLES,
            VISUAL_DIRECTIONS,
            ANIMATION_LEVELS,
        ];
        for catalog in catalogs {
            let ids: HashSet<&str> = catalog.iter().map(|o| o.id).collect();
            assert_eq!(ids.len(), catalog.len());
        }

        let feature_ids: HashSet<&str> = FEATURE_GROUPS
            .iter()
            .flat_map(|group| group.options.iter().map(|o| o.id))
            .collect();
        let feature_count: usize = FEATURE_GROUPS.iter().map(|g| g.options.len()).sum();
        assert_eq!(feature_ids.len(), feature_count);
    }
}
