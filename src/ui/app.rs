use std::path::Path;
use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::config::Config;
use crate::export::{self, ClipboardSink, PdfRenderer, PrintPdfRenderer, SystemClipboard};
use crate::prompt;
use crate::questionnaire::Questionnaire;
use crate::wizard::{Advance, Step, Wizard};
use super::form::{self, Field, FieldKey};

const CURSOR_BLINK_INTERVAL: Duration = Duration::from_millis(500);
const COPIED_INDICATOR_DURATION: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Error,
}

#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

pub struct App {
    questionnaire: Questionnaire,
    wizard: Wizard,
    pub focus: usize,
    pub option_cursor: usize,
    pub input_buffer: String,
    pub cursor_position: usize,
    pub terminal_width: u16,
    pub terminal_height: u16,
    pub should_quit: bool,
    pub cursor_visible: bool,
    cursor_blink_at: Instant,
    pub scroll_offset: u16,
    keyboard_enhancement_enabled: bool,
    status: Option<StatusMessage>,
    copied_at: Option<Instant>,
    config: Config,
    clipboard: Box<dyn ClipboardSink>,
    pdf_renderer: Box<dyn PdfRenderer>,
}

impl App {
    pub fn new(config: Config) -> Self {
        let pdf_renderer = PrintPdfRenderer::new(config.pdf_font().map(Path::to_path_buf));
        Self::with_sinks(config, Box::new(SystemClipboard::new()), Box::new(pdf_renderer))
    }

    pub fn with_sinks(
        config: Config,
        clipboard: Box<dyn ClipboardSink>,
        pdf_renderer: Box<dyn PdfRenderer>,
    ) -> Self {
        let mut app = Self {
            questionnaire: Questionnaire::default(),
            wizard: Wizard::new(),
            focus: 0,
            option_cursor: 0,
            input_buffer: String::new(),
            cursor_position: 0,
            terminal_width: 80,
            terminal_height: 24,
            should_quit: false,
            cursor_visible: true,
            cursor_blink_at: Instant::now(),
            scroll_offset: 0,
            keyboard_enhancement_enabled: false,
            status: None,
            copied_at: None,
            config,
            clipboard,
            pdf_renderer,
        };
        app.load_focused_field();
        app
    }

    pub fn questionnaire(&self) -> &Questionnaire {
        &self.questionnaire
    }

    pub fn step(&self) -> Step {
        self.wizard.step()
    }

    pub fn can_advance(&self) -> bool {
        self.wizard.can_advance(&self.questionnaire)
    }

    pub fn current_fields(&self) -> Vec<Field> {
        form::fields_for(self.wizard.step(), self.questionnaire.project_type)
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    pub fn is_copied(&self) -> bool {
        self.copied_at
            .is_some_and(|copied_at| copied_at.elapsed() < COPIED_INDICATOR_DURATION)
    }

    pub fn compiled_prompt(&self) -> String {
        prompt::compile(&self.questionnaire)
    }

    pub fn handle_key_event(&mut self, key_event: KeyEvent) {
        self.reset_cursor_blink();

        match key_event.code {
            KeyCode::PageUp => {
                self.scroll_up();
                return;
            }
            KeyCode::PageDown => {
                self.scroll_down();
                return;
            }
            KeyCode::Esc => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('b') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                self.go_back();
                return;
            }
            _ => {}
        }

        if self.wizard.step() == Step::Preview {
            self.handle_preview_key(key_event);
            return;
        }

        match key_event.code {
            KeyCode::Tab => self.move_focus(1),
            KeyCode::BackTab => self.move_focus(-1),
            _ => match self.focused_field() {
                Some(field) if field.is_text() => self.handle_text_key(key_event, &field),
                Some(field) => self.handle_choice_key(key_event, &field),
                None => {}
            },
        }
    }

    pub fn handle_paste(&mut self, text: String) {
        self.reset_cursor_blink();

        let Some(field) = self.focused_field() else {
            return;
        };
        if !field.is_text() || self.wizard.step() == Step::Preview {
            return;
        }

        let cleaned = if field.is_multiline() {
            text.replace("\r\n", "\n").replace('\r', "\n")
        } else {
            text.replace("\r\n", " ").replace(['\r', '\n'], " ")
        };
        self.insert_text_at_cursor(&cleaned);
        self.commit_text(&field);
    }

    pub fn tick(&mut self) {
        self.tick_cursor_blink();
        if self.copied_at.is_some() && !self.is_copied() {
            self.copied_at = None;
        }
    }

    fn tick_cursor_blink(&mut self) {
        if self.cursor_blink_at.elapsed() >= CURSOR_BLINK_INTERVAL {
            self.cursor_visible = !self.cursor_visible;
            self.cursor_blink_at = Instant::now();
        }
    }

    fn reset_cursor_blink(&mut self) {
        self.cursor_visible = true;
        self.cursor_blink_at = Instant::now();
    }

    pub fn scroll_up(&mut self) {
        let page_size = self.terminal_height.saturating_sub(4);
        self.scroll_offset = self.scroll_offset.saturating_sub(page_size);
    }

    pub fn scroll_down(&mut self) {
        let page_size = self.terminal_height.saturating_sub(4);
        self.scroll_offset = self.scroll_offset.saturating_add(page_size);
    }

    pub fn set_keyboard_enhancement_enabled(&mut self, enabled: bool) {
        self.keyboard_enhancement_enabled = enabled;
    }

    pub fn help_text(&self) -> &'static str {
        match self.wizard.step() {
            Step::Preview => {
                "[c] Copy  [t] Save text  [p] Save PDF  [Ctrl+B] Back  [↑/↓/PgUp/PgDn] Scroll  [Esc] Quit"
            }
            _ => match self.focused_field() {
                Some(field) if field.is_multiline() => {
                    if self.keyboard_enhancement_enabled {
                        "[Enter] Next  [Shift+Enter] New line  [Tab] Field  [Ctrl+B] Back  [Esc] Quit"
                    } else {
                        "[Enter] Next  [Alt+Enter] New line  [Tab] Field  [Ctrl+B] Back  [Esc] Quit"
                    }
                }
                Some(field) if field.is_text() => {
                    "[Enter] Next  [Tab/↑/↓] Field  [Ctrl+B] Back  [PgUp/PgDn] Scroll  [Esc] Quit"
                }
                _ => "[↑/↓] Move  [Space] Select  [Enter] Next  [Tab] Field  [Ctrl+B] Back  [Esc] Quit",
            },
        }
    }

    fn focused_field(&self) -> Option<Field> {
        self.current_fields().into_iter().nth(self.focus)
    }

    fn move_focus(&mut self, delta: isize) {
        let count = self.current_fields().len();
        if count == 0 {
            return;
        }
        self.focus = (self.focus as isize + delta).rem_euclid(count as isize) as usize;
        self.scroll_offset = 0;
        self.load_focused_field();
    }

    fn load_focused_field(&mut self) {
        let Some(field) = self.focused_field() else {
            self.input_buffer.clear();
            self.cursor_position = 0;
            return;
        };

        if field.is_text() {
            self.input_buffer = field.text_value(&self.questionnaire).to_string();
            self.cursor_position = self.input_buffer.chars().count();
        } else {
            self.option_cursor = field
                .options()
                .iter()
                .position(|choice| field.is_selected(&self.questionnaire, choice.option.id))
                .unwrap_or(0);
        }
    }

    fn handle_text_key(&mut self, key_event: KeyEvent, field: &Field) {
        match key_event.code {
            KeyCode::Enter
                if field.is_multiline() && self.is_newline_modifier(key_event.modifiers) =>
            {
                self.insert_char_at_cursor('\n');
                self.commit_text(field);
            }
            KeyCode::Enter => self.try_advance(),
            KeyCode::Backspace => {
                self.delete_char_before_cursor();
                self.commit_text(field);
            }
            KeyCode::Left => self.move_cursor_left(),
            KeyCode::Right => self.move_cursor_right(),
            KeyCode::Up => self.move_focus(-1),
            KeyCode::Down => self.move_focus(1),
            KeyCode::Char(c) if !key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                self.insert_char_at_cursor(c);
                self.commit_text(field);
            }
            _ => {}
        }
    }

    fn handle_choice_key(&mut self, key_event: KeyEvent, field: &Field) {
        let option_count = field.options().len();
        match key_event.code {
            KeyCode::Up => {
                self.option_cursor = self.option_cursor.saturating_sub(1);
            }
            KeyCode::Down => {
                if self.option_cursor + 1 < option_count {
                    self.option_cursor += 1;
                }
            }
            KeyCode::Char(' ') => self.choose_highlighted(field),
            KeyCode::Enter => self.try_advance(),
            _ => {}
        }
    }

    fn handle_preview_key(&mut self, key_event: KeyEvent) {
        match key_event.code {
            KeyCode::Char('c') => self.copy_prompt(),
            KeyCode::Char('t') => self.save_text(),
            KeyCode::Char('p') => self.save_pdf(),
            KeyCode::Up => self.scroll_offset = self.scroll_offset.saturating_sub(1),
            KeyCode::Down => self.scroll_offset = self.scroll_offset.saturating_add(1),
            _ => {}
        }
    }

    fn commit_text(&mut self, field: &Field) {
        let update = field.text_update(self.input_buffer.clone());
        self.questionnaire = self.questionnaire.merged(update);
    }

    fn choose_highlighted(&mut self, field: &Field) {
        let Some(choice) = field.options().get(self.option_cursor) else {
            return;
        };

        let pages_before = self.questionnaire.pages.len();
        self.questionnaire = field.choose(&self.questionnaire, choice.option.id);

        if field.key == FieldKey::ProjectType {
            tracing::info!(
                project_type = self.questionnaire.project_type.id(),
                pruned_pages = pages_before.saturating_sub(self.questionnaire.pages.len()),
                "project type selected"
            );
        }
    }

    fn try_advance(&mut self) {
        match self.wizard.advance(&self.questionnaire) {
            Advance::Moved(_) => self.enter_step(),
            Advance::Blocked(missing) => {
                self.set_status(
                    StatusKind::Error,
                    format!("未入力の項目があります: {}", missing.join("、")),
                );
            }
            Advance::AtEnd => {}
        }
    }

    fn go_back(&mut self) {
        if self.wizard.go_back().is_some() {
            self.enter_step();
        }
    }

    fn enter_step(&mut self) {
        self.focus = 0;
        self.option_cursor = 0;
        self.scroll_offset = 0;
        self.status = None;
        self.load_focused_field();
    }

    fn copy_prompt(&mut self) {
        let document = self.compiled_prompt();
        match export::copy_to_clipboard(self.clipboard.as_mut(), &document) {
            Ok(()) => self.copied_at = Some(Instant::now()),
            Err(_) => self.copied_at = None,
        }
    }

    fn save_text(&mut self) {
        let document = self.compiled_prompt();
        let today = chrono::Local::now().date_naive();
        let result = export::write_text_file(
            self.config.output_dir(),
            &self.questionnaire.project_name,
            &document,
            today,
        );

        match result {
            Ok(path) => self.set_status(
                StatusKind::Info,
                format!("テキストファイルを保存しました: {}", path.display()),
            ),
            Err(err) => {
                tracing::error!(error = %err, "text export failed");
                self.set_status(StatusKind::Error, err.to_string());
            }
        }
    }

    fn save_pdf(&mut self) {
        let document = self.compiled_prompt();
        let result = export::write_pdf(
            self.pdf_renderer.as_ref(),
            self.config.output_dir(),
            &self.questionnaire.project_name,
            &document,
        );

        match result {
            Ok(path) => self.set_status(
                StatusKind::Info,
                format!("PDFファイルを保存しました: {}", path.display()),
            ),
            Err(err) => self.set_status(StatusKind::Error, err.to_string()),
        }
    }

    fn set_status(&mut self, kind: StatusKind, text: String) {
        self.status = Some(StatusMessage { kind, text });
    }

    fn is_newline_modifier(&self, modifiers: KeyModifiers) -> bool {
        if self.keyboard_enhancement_enabled {
            modifiers.contains(KeyModifiers::SHIFT)
        } else {
            modifiers.contains(KeyModifiers::ALT)
        }
    }

    fn insert_char_at_cursor(&mut self, c: char) {
        let byte_pos = char_to_byte_index(&self.input_buffer, self.cursor_position);
        self.input_buffer.insert(byte_pos, c);
        self.cursor_position += 1;
    }

    fn insert_text_at_cursor(&mut self, text: &str) {
        let byte_pos = char_to_byte_index(&self.input_buffer, self.cursor_position);
        self.input_buffer.insert_str(byte_pos, text);
        self.cursor_position += text.chars().count();
    }

    fn delete_char_before_cursor(&mut self) {
        if self.cursor_position == 0 {
            return;
        }
        self.cursor_position -= 1;
        let byte_pos = char_to_byte_index(&self.input_buffer, self.cursor_position);
        self.input_buffer.remove(byte_pos);
    }

    fn move_cursor_left(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
        }
    }

    fn move_cursor_right(&mut self) {
        if self.cursor_position < self.input_buffer.chars().count() {
            self.cursor_position += 1;
        }
    }
}

pub(super) fn char_to_byte_index(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}
