//! TUI Views module
//!
//! Contains the main views (invoice list and details), the dashboard strip,
//! and the status bar.

pub mod dashboard;
pub mod details;
pub mod list;
pub mod status_bar;

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::app::{ActiveDialog, ActiveView, App};
use super::dialogs;
use super::layout::AppLayout;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &App) {
    let layout = AppLayout::new(frame.area());

    let title = Line::from(vec![
        Span::styled(
            " Invoice Management ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "track payments and monitor your business finances",
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(Paragraph::new(title), layout.header);

    dashboard::render(frame, app, layout.dashboard);

    match app.active_view {
        ActiveView::List => list::render(frame, app, layout.main),
        ActiveView::Details(_) => details::render(frame, app, layout.main),
    }

    status_bar::render(frame, app, layout.status_bar);

    if app.has_dialog() {
        render_dialog(frame, app);
    }
}

/// Render active dialog
fn render_dialog(frame: &mut Frame, app: &App) {
    match &app.active_dialog {
        ActiveDialog::Help => dialogs::help::render(frame, app),
        ActiveDialog::ConfirmDelete(id) => {
            let message = dialogs::confirm::delete_message(app, id);
            dialogs::confirm::render(frame, &message);
        }
        ActiveDialog::AddInvoice | ActiveDialog::EditInvoice(_) => {
            dialogs::invoice_form::render(frame, app)
        }
        ActiveDialog::None => {}
    }
}
