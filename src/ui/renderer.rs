use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::app::{App, StatusKind};
use super::form::{Field, FieldKind};
use crate::export::wrap_paragraph;
use crate::wizard::Step;

const APP_TITLE: &str = "VIBE CODING プロンプトジェネレーター";
const COPIED_TEXT: &str = "コピーしました！";
const REQUIRED_HINT: &str = "必須項目（*）を入力すると [Enter] で次へ進めます";
const HEADER_LINE_COUNT: usize = 5;

pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    let [body_area, footer_area] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(3)]).areas(area);

    let mut lines = build_header_lines(app.step(), body_area.width);
    let focus_line = match app.step() {
        Step::Preview => {
            lines.extend(build_preview_lines(&app.compiled_prompt(), body_area.width));
            None
        }
        _ => {
            let (form_lines, focus_line) = build_form_lines(app);
            lines.extend(form_lines);
            focus_line.map(|line| line + HEADER_LINE_COUNT)
        }
    };

    let scroll = clamp_scroll(lines.len(), body_area.height, app.scroll_offset, focus_line);
    app.scroll_offset = scroll;

    frame.render_widget(Paragraph::new(lines).scroll((scroll, 0)), body_area);
    frame.render_widget(Paragraph::new(build_footer_lines(app, footer_area.width)), footer_area);
}

/// 스크롤 위치를 내용 범위 안으로 맞추고, 포커스된 줄은 항상 화면 안에 보이게 한다.
fn clamp_scroll(total_lines: usize, height: u16, offset: u16, focus_line: Option<usize>) -> u16 {
    let total_lines = u16::try_from(total_lines).unwrap_or(u16::MAX);
    let max_scroll = total_lines.saturating_sub(height);
    let mut scroll = offset.min(max_scroll);

    if let Some(focus_line) = focus_line {
        let focus_line = u16::try_from(focus_line).unwrap_or(u16::MAX);
        let visible = height.max(1);
        if focus_line < scroll {
            scroll = focus_line;
        } else if focus_line >= scroll.saturating_add(visible) {
            scroll = focus_line - (visible - 1);
        }
    }
    scroll
}

fn build_header_lines(current: Step, width: u16) -> Vec<Line<'static>> {
    let title_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let separator_style = Style::default().fg(Color::DarkGray);

    let mut indicator: Vec<Span<'static>> = Vec::new();
    for (i, step) in Step::ALL.iter().enumerate() {
        if i > 0 {
            indicator.push(Span::styled(" › ", separator_style));
        }
        let style = if *step == current {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else if step.number() < current.number() {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        indicator.push(Span::styled(format!("{} {}", step.number(), step.title()), style));
    }

    vec![
        Line::from(Span::styled(APP_TITLE, title_style)),
        Line::from(indicator),
        Line::from(Span::styled("─".repeat(width as usize), separator_style)),
        Line::from(Span::styled(
            current.heading(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ]
}

/// 폼 줄과 함께 포커스된 위치(텍스트 입력 줄 또는 선택 커서 줄)의 인덱스를 돌려준다.
fn build_form_lines(app: &App) -> (Vec<Line<'static>>, Option<usize>) {
    let label_style = Style::default().add_modifier(Modifier::BOLD);
    let focused_label_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let required_style = Style::default().fg(Color::Red);

    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut focus_line = None;

    for (index, field) in app.current_fields().iter().enumerate() {
        let focused = index == app.focus;
        let marker = if focused { "▶ " } else { "  " };

        let mut label = vec![Span::styled(
            format!("{}{}", marker, field.label),
            if focused { focused_label_style } else { label_style },
        )];
        if field.required {
            label.push(Span::styled(" *", required_style));
        }
        lines.push(Line::from(label));

        match &field.kind {
            FieldKind::Text { placeholder, .. } => {
                if focused {
                    focus_line = Some(lines.len());
                }
                lines.extend(text_field_lines(app, field, focused, placeholder));
            }
            FieldKind::Choice { multiple, .. } => {
                let (choice_lines, cursor_line) = choice_field_lines(app, field, focused, *multiple);
                if let Some(cursor_line) = cursor_line {
                    focus_line = Some(lines.len() + cursor_line);
                }
                lines.extend(choice_lines);
            }
        }
        lines.push(Line::from(""));
    }

    (lines, focus_line)
}

fn text_field_lines(app: &App, field: &Field, focused: bool, placeholder: &str) -> Vec<Line<'static>> {
    let input_style = Style::default().fg(Color::Green);
    let placeholder_style = Style::default().fg(Color::DarkGray);

    if !focused {
        let value = field.text_value(app.questionnaire());
        if value.is_empty() {
            return vec![Line::from(Span::styled(format!("    {}", placeholder), placeholder_style))];
        }
        return value
            .split('\n')
            .map(|line| Line::from(format!("    {}", line)))
            .collect();
    }

    let cursor = if app.cursor_visible { "█" } else { " " };
    let chars: Vec<char> = app.input_buffer.chars().collect();
    let before: String = chars[..app.cursor_position.min(chars.len())].iter().collect();
    let after: String = chars[app.cursor_position.min(chars.len())..].iter().collect();

    // 커서는 현재 줄 끝이 아니라 커서 위치에 그린다.
    let mut before_lines: Vec<&str> = before.split('\n').collect();
    let cursor_line_head = before_lines.pop().unwrap_or("");
    let mut after_lines = after.split('\n');
    let cursor_line_tail = after_lines.next().unwrap_or("");

    let mut lines: Vec<Line<'static>> = before_lines
        .into_iter()
        .map(|line| Line::from(Span::styled(format!("    {}", line), input_style)))
        .collect();
    lines.push(Line::from(vec![
        Span::styled(format!("    {}", cursor_line_head), input_style),
        Span::styled(cursor, input_style),
        Span::styled(cursor_line_tail.to_string(), input_style),
    ]));
    lines.extend(
        after_lines.map(|line| Line::from(Span::styled(format!("    {}", line), input_style))),
    );
    lines
}

fn choice_field_lines(
    app: &App,
    field: &Field,
    focused: bool,
    multiple: bool,
) -> (Vec<Line<'static>>, Option<usize>) {
    let group_style = Style::default().fg(Color::Cyan);
    let description_style = Style::default().fg(Color::DarkGray);
    let selected_style = Style::default().fg(Color::Green);
    let cursor_style = Style::default().add_modifier(Modifier::REVERSED);

    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut cursor_line = None;
    let mut current_group = None;

    for (index, choice) in field.options().iter().enumerate() {
        if choice.group.is_some() && choice.group != current_group {
            current_group = choice.group;
            lines.push(Line::from(Span::styled(
                format!("    {}", choice.group.unwrap_or_default()),
                group_style,
            )));
        }

        let selected = field.is_selected(app.questionnaire(), choice.option.id);
        let mark = match (multiple, selected) {
            (true, true) => "[x]",
            (true, false) => "[ ]",
            (false, true) => "(●)",
            (false, false) => "( )",
        };
        let under_cursor = focused && index == app.option_cursor;
        if under_cursor {
            cursor_line = Some(lines.len());
        }

        let mut style = if selected { selected_style } else { Style::default() };
        if under_cursor {
            style = style.patch(cursor_style);
        }

        let mut spans = vec![
            Span::raw("      "),
            Span::styled(format!("{} {}", mark, choice.option.label), style),
        ];
        if !choice.option.description.is_empty() {
            spans.push(Span::styled(
                format!("  {}", choice.option.description),
                description_style,
            ));
        }
        lines.push(Line::from(spans));
    }

    (lines, cursor_line)
}

fn build_preview_lines(document: &str, width: u16) -> Vec<Line<'static>> {
    let max_columns = (width as usize).saturating_sub(2).max(1);
    document
        .split('\n')
        .flat_map(|paragraph| wrap_paragraph(paragraph, max_columns))
        .map(|line| Line::from(format!("  {}", line)))
        .collect()
}

fn build_footer_lines(app: &App, width: u16) -> Vec<Line<'static>> {
    let separator_style = Style::default().fg(Color::DarkGray);

    let status = if app.is_copied() {
        Line::from(Span::styled(
            COPIED_TEXT,
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ))
    } else {
        match app.status() {
            Some(status) => {
                let color = match status.kind {
                    StatusKind::Info => Color::Green,
                    StatusKind::Error => Color::Red,
                };
                Line::from(Span::styled(status.text.clone(), Style::default().fg(color)))
            }
            None if app.step() != Step::Preview && !app.can_advance() => Line::from(Span::styled(
                REQUIRED_HINT,
                Style::default().fg(Color::DarkGray),
            )),
            None => Line::from(""),
        }
    };

    vec![
        Line::from(Span::styled("─".repeat(width as usize), separator_style)),
        status,
        Line::from(Span::styled(app.help_text(), separator_style)),
    ]
}
