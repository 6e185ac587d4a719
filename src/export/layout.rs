use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

const PT_TO_MM: f32 = 0.352_778;
// 반각 문자 한 칸의 평균 폭(em 단위). 전각 문자는 두 칸으로 센다.
const HALF_WIDTH_ADVANCE_EM: f32 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub page_width_mm: f32,
    pub page_height_mm: f32,
    pub margin_mm: f32,
    pub line_height_mm: f32,
    pub title_font_size_pt: f32,
    pub body_font_size_pt: f32,
}

impl PageGeometry {
    pub fn a4() -> Self {
        Self {
            page_width_mm: 210.0,
            page_height_mm: 297.0,
            margin_mm: 20.0,
            line_height_mm: 7.0,
            title_font_size_pt: 18.0,
            body_font_size_pt: 10.0,
        }
    }

    pub fn printable_width_mm(&self) -> f32 {
        self.page_width_mm - self.margin_mm * 2.0
    }

    /// 본문 글꼴 크기에서 인쇄 가능 폭에 들어가는 반각 칸 수.
    pub fn body_columns(&self) -> usize {
        let column_mm = column_width_mm(self.body_font_size_pt);
        ((self.printable_width_mm() / column_mm).floor() as usize).max(1)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PositionedLine {
    pub text: String,
    /// 페이지 위쪽 끝에서 기준선까지의 거리.
    pub y_mm: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PdfLayout {
    pub geometry: PageGeometry,
    pub title: String,
    pub title_x_mm: f32,
    pub title_y_mm: f32,
    pub pages: Vec<Vec<PositionedLine>>,
}

impl PdfLayout {
    pub fn line_count(&self) -> usize {
        self.pages.iter().map(Vec::len).sum()
    }
}

/// 첫 페이지 상단에 가운데 정렬된 제목을 두고, 문서를 줄바꿈 단위 문단으로 나눠
/// 인쇄 가능 폭에 맞게 감싼 뒤 페이지를 나눈다.
/// 다음 줄이 아래 여백을 넘으면 그 줄을 쓰기 전에 새 페이지를 시작한다.
pub fn layout_document(title: &str, document: &str, geometry: &PageGeometry) -> PdfLayout {
    let title_width_mm = title.width() as f32 * column_width_mm(geometry.title_font_size_pt);
    let title_x_mm = ((geometry.page_width_mm - title_width_mm) / 2.0).max(geometry.margin_mm);
    let title_y_mm = geometry.margin_mm;

    let bottom_limit = geometry.page_height_mm - geometry.margin_mm;
    let columns = geometry.body_columns();

    let mut pages: Vec<Vec<PositionedLine>> = vec![Vec::new()];
    let mut y = title_y_mm + geometry.line_height_mm * 2.0;

    for paragraph in document.split('\n') {
        for text in wrap_paragraph(paragraph, columns) {
            if y + geometry.line_height_mm > bottom_limit {
                pages.push(Vec::new());
                y = geometry.margin_mm;
            }
            if let Some(page) = pages.last_mut() {
                page.push(PositionedLine { text, y_mm: y });
            }
            y += geometry.line_height_mm;
        }
    }

    PdfLayout {
        geometry: *geometry,
        title: title.to_string(),
        title_x_mm,
        title_y_mm,
        pages,
    }
}

fn column_width_mm(font_size_pt: f32) -> f32 {
    font_size_pt * HALF_WIDTH_ADVANCE_EM * PT_TO_MM
}

/// 공백 단위로 감싸고, 한 단어가 폭을 넘으면(공백 없는 일본어 문장 등) 글자 단위로 자른다.
/// 앞쪽 들여쓰기는 이어지는 줄에도 유지한다. 빈 문단은 빈 줄 하나가 된다.
pub(crate) fn wrap_paragraph(paragraph: &str, max_columns: usize) -> Vec<String> {
    let body = paragraph.trim_start();
    let indent = &paragraph[..paragraph.len() - body.len()];
    let available = max_columns.saturating_sub(indent.width()).max(1);

    let mut lines: Vec<String> = Vec::new();
    let mut current_line = String::new();
    let mut current_width = 0;

    for word in body.split(' ').filter(|word| !word.is_empty()) {
        let word_width = word.width();

        if word_width > available {
            if !current_line.is_empty() {
                lines.push(std::mem::take(&mut current_line));
            }
            let mut chunks = break_by_width(word, available);
            if let Some(last) = chunks.pop() {
                lines.extend(chunks);
                current_width = last.width();
                current_line = last;
            }
        } else if current_line.is_empty() {
            current_line.push_str(word);
            current_width = word_width;
        } else if current_width + 1 + word_width <= available {
            current_line.push(' ');
            current_line.push_str(word);
            current_width += 1 + word_width;
        } else {
            lines.push(std::mem::replace(&mut current_line, word.to_string()));
            current_width = word_width;
        }
    }

    if !current_line.is_empty() || lines.is_empty() {
        lines.push(current_line);
    }

    lines
        .into_iter()
        .map(|line| format!("{}{}", indent, line))
        .collect()
}

fn break_by_width(text: &str, max_width: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for c in text.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width && !current.is_empty() {
            chunks.push(std::mem::take(&mut current));
            current_width = 0;
        }
        current.push(c);
        current_width += char_width;
    }

    if !current.is_empty() {
        chunks.push(current);
    }

    chunks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a4_body_fits_ninety_six_columns() {
        assert_eq!(PageGeometry::a4().body_columns(), 96);
    }

    #[test]
    fn wrap_keeps_short_line() {
        assert_eq!(wrap_paragraph("- SEO最適化", 96), vec!["- SEO最適化"]);
    }

    #[test]
    fn wrap_empty_paragraph_yields_blank_line() {
        assert_eq!(wrap_paragraph("", 96), vec![""]);
    }

    #[test]
    fn wrap_splits_on_spaces() {
        assert_eq!(
            wrap_paragraph("alpha beta gamma delta", 11),
            vec!["alpha beta", "gamma delta"]
        );
    }

    #[test]
    fn wrap_breaks_wide_text_by_display_width() {
        // 전각 문자는 2칸이므로 10칸에 5글자씩 들어간다.
        let lines = wrap_paragraph("あいうえおかきくけこさ", 10);
        assert_eq!(lines, vec!["あいうえお", "かきくけこ", "さ"]);
    }

    #[test]
    fn wrap_preserves_indent_on_every_line() {
        let lines = wrap_paragraph("  - あいうえおかき", 8);
        assert_eq!(lines, vec!["  -", "  あいう", "  えおか", "  き"]);
    }

    #[test]
    fn title_is_centered_on_first_page() {
        let geometry = PageGeometry::a4();
        let layout = layout_document("VIBE CODING Prompt", "body", &geometry);

        let title_width = 18.0 * column_width_mm(geometry.title_font_size_pt);
        assert!((layout.title_x_mm * 2.0 + title_width - geometry.page_width_mm).abs() < 0.01);
        assert_eq!(layout.title_y_mm, geometry.margin_mm);
        assert_eq!(layout.pages[0][0].y_mm, geometry.margin_mm + 14.0);
    }

    #[test]
    fn paginates_before_line_that_would_overflow() {
        let geometry = PageGeometry::a4();
        // 첫 페이지는 y=34부터 7mm 간격으로 y=270까지 34줄, 이후 페이지는 y=20부터 36줄.
        let document = vec!["line"; 34 + 36 + 1].join("\n");
        let layout = layout_document("t", &document, &geometry);

        assert_eq!(layout.pages.len(), 3);
        assert_eq!(layout.pages[0].len(), 34);
        assert_eq!(layout.pages[1].len(), 36);
        assert_eq!(layout.pages[2].len(), 1);
        assert_eq!(layout.pages[1][0].y_mm, geometry.margin_mm);
        assert_eq!(layout.line_count(), 71);

        for page in &layout.pages {
            for line in page {
                assert!(line.y_mm + geometry.line_height_mm <= 277.0 + f32::EPSILON);
            }
        }
    }

    #[test]
    fn every_paragraph_is_laid_out_in_order() {
        let layout = layout_document("t", "a\n\nb", &PageGeometry::a4());
        let texts: Vec<&str> = layout.pages[0].iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, vec!["a", "", "b"]);
    }
}
