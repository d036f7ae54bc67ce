//! TUI Views
//!
//! Draws the single window: header, "New Task" input, "Your Tasks" list,
//! key-binding footer, and any open dialog on top.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
};

use super::app::App;
use super::colors;
use super::state::{ConfirmDialog, Focus, InteractionMode, Notice, NoticeLevel};
use crate::store::Task;

/// Key bindings shown in the footer, in display order.
const KEYBINDS: [(&str, &str); 6] = [
    ("Enter", "Add Task"),
    ("d", "Delete Selected Task"),
    ("Space", "Mark Task Complete"),
    ("x", "Clear All Tasks"),
    ("Tab", "Switch Pane"),
    ("q", "Quit"),
];

/// Render the whole window.
pub fn render(app: &App, frame: &mut Frame) {
    let [header, input, tasks, footer] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    render_header(app, frame, header);
    render_input(app, frame, input);
    render_tasks(app, frame, tasks);
    render_footer(frame, footer);

    match &app.state().mode {
        InteractionMode::Normal => {}
        InteractionMode::Notice(notice) => render_notice(frame, notice),
        InteractionMode::Confirm(dialog) => render_confirm(frame, dialog),
    }
}

fn render_header(app: &App, frame: &mut Frame, area: Rect) {
    let store = app.store();
    let mut spans = vec![
        Span::styled(
            format!(" {} ", app.title()),
            Style::default().fg(colors::HEADER).add_modifier(Modifier::BOLD),
        ),
        Span::styled("│ ", Style::default().fg(colors::DIM)),
        Span::raw(format!("{} tasks │ {} done", store.len(), store.completed_count())),
    ];
    if let Some(status) = &app.state().status_message {
        spans.push(Span::styled(format!(" │ {}", status), Style::default().fg(colors::DIM)));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_input(app: &App, frame: &mut Frame, area: Rect) {
    let state = app.state();
    let focused = state.focus == Focus::Input && !state.has_dialog();

    let input = Paragraph::new(state.input.content()).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style(focused))
            .title(" New Task "),
    );
    frame.render_widget(input, area);

    if focused {
        let offset = u16::try_from(state.input.cursor()).unwrap_or(u16::MAX);
        let max_x = area.right().saturating_sub(2);
        frame.set_cursor_position((area.x.saturating_add(1).saturating_add(offset).min(max_x), area.y + 1));
    }
}

fn render_tasks(app: &App, frame: &mut Frame, area: Rect) {
    let state = app.state();
    let focused = state.focus == Focus::List && !state.has_dialog();

    let items: Vec<ListItem> = app.store().tasks().iter().map(task_item).collect();
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style(focused))
                .title(" Your Tasks ")
                .title_alignment(Alignment::Center),
        )
        .highlight_style(Style::default().bg(colors::SELECTION).add_modifier(Modifier::BOLD))
        .highlight_symbol("▶ ");

    let mut list_state = ListState::default().with_selected(state.selected);
    frame.render_stateful_widget(list, area, &mut list_state);
}

/// Build the list row for a task. Completed tasks are dimmed and struck out.
fn task_item(task: &Task) -> ListItem<'static> {
    let style = if task.completed {
        Style::default().fg(colors::DIM).add_modifier(Modifier::CROSSED_OUT)
    } else {
        Style::default().fg(colors::TEXT)
    };
    ListItem::new(task.label()).style(style)
}

fn render_footer(frame: &mut Frame, area: Rect) {
    let mut spans = Vec::with_capacity(KEYBINDS.len() * 2);
    for (key, label) in KEYBINDS {
        spans.push(Span::styled(format!(" {} ", key), Style::default().fg(colors::KEYBIND)));
        spans.push(Span::styled(format!("{} ", label), Style::default().fg(colors::DIM)));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_notice(frame: &mut Frame, notice: &Notice) {
    let color = match notice.level {
        NoticeLevel::Warning => colors::WARNING,
        NoticeLevel::Info => colors::INFO,
    };
    render_dialog(frame, &notice.title, &notice.message, "[Enter] OK", color);
}

fn render_confirm(frame: &mut Frame, dialog: &ConfirmDialog) {
    render_dialog(frame, &dialog.title, &dialog.message, "[y] Yes   [n] No", colors::DANGER);
}

fn render_dialog(frame: &mut Frame, title: &str, message: &str, hint: &str, color: ratatui::style::Color) {
    let area = popup_area(frame.area(), 50, 7);
    let text = vec![
        Line::from(message.to_string()),
        Line::default(),
        Line::from(Span::styled(hint.to_string(), Style::default().fg(colors::KEYBIND))),
    ];
    let dialog = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color))
                .title(format!(" {} ", title)),
        );

    frame.render_widget(Clear, area);
    frame.render_widget(dialog, area);
}

fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(colors::FOCUS)
    } else {
        Style::default().fg(colors::BORDER)
    }
}

/// A `width` x `height` rectangle centered in `area`, clipped to fit.
fn popup_area(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{Terminal, backend::TestBackend};

    fn draw(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(70, 16)).unwrap();
        terminal.draw(|f| render(app, f)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_popup_area_centered() {
        let area = Rect::new(0, 0, 100, 40);
        let popup = popup_area(area, 50, 7);
        assert_eq!(popup, Rect::new(25, 16, 50, 7));
    }

    #[test]
    fn test_popup_area_clipped() {
        let area = Rect::new(2, 1, 30, 5);
        let popup = popup_area(area, 50, 7);
        assert_eq!(popup, Rect::new(2, 1, 30, 5));
    }

    #[test]
    fn test_task_item_styles() {
        let store = {
            let mut store = crate::store::TaskListStore::new();
            store.add("a").unwrap();
            store.add("b").unwrap();
            store.toggle_complete_at(Some(1)).unwrap();
            store
        };
        let open = task_item(&store.tasks()[0]);
        let done = task_item(&store.tasks()[1]);
        assert_ne!(open, done);
    }

    #[test]
    fn test_render_empty_window() {
        let app = App::default();
        let screen = draw(&app);
        assert!(screen.contains("To-Do List App"));
        assert!(screen.contains("New Task"));
        assert!(screen.contains("Your Tasks"));
        assert!(screen.contains("0 tasks │ 0 done"));
    }

    #[test]
    fn test_render_completed_label() {
        let mut app = App::default();
        for c in "Buy milk".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char(' '));

        let screen = draw(&app);
        assert!(screen.contains("✔ Buy milk"));
        assert!(screen.contains("1 tasks │ 1 done"));
    }

    #[test]
    fn test_render_confirm_dialog() {
        let mut app = App::default();
        for c in "a".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char('x'));

        let screen = draw(&app);
        assert!(screen.contains("Confirm Clear All"));
        assert!(screen.contains("[y] Yes"));
    }
}
