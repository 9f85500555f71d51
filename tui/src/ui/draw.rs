use ratatui::{widgets::Block, Frame};

use crate::state::Player;

use super::{layout, theme::Theme, widgets};

/// Draws the entire UI.
pub fn draw(f: &mut Frame, player: &Player) {
    let area = f.size();
    f.render_widget(Block::default().style(Theme::base()), area);

    let session = player.session();
    let scene = session.scene();
    let step = session.playback().step_index;

    let (header_area, body_area, footer_area) = layout::vertical(area);
    let (contour_area, right_area) = layout::body(body_area);
    let (data_area, loss_area) = layout::right(right_area);

    f.render_widget(widgets::header(session, player.status()), header_area);
    f.render_widget(widgets::contours(scene, step), contour_area);
    f.render_widget(widgets::data(scene, step), data_area);
    f.render_widget(widgets::losses(scene, step), loss_area);
    f.render_widget(widgets::help(), footer_area);
}

#[cfg(test)]
mod tests {
    use ratatui::{backend::TestBackend, Terminal};
    use tokio::runtime::Handle;
    use visualizer::{configs::VisualizationConfig, Session};

    use super::*;

    fn render(player: &Player) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|f| draw(f, player)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[tokio::test]
    async fn draws_every_panel() {
        let config = VisualizationConfig::default();
        let mut player = Player::new(Session::new(&config, Handle::current()).unwrap());

        let screen = render(&player);
        assert!(screen.contains("Gradient descent"));
        assert!(screen.contains("Loss contours"));
        assert!(screen.contains("Data and fitted line"));
        assert!(screen.contains("MSE per step"));
        assert!(screen.contains("PAUSED"));

        player.handle_key(crossterm::event::KeyCode::End);
        assert!(render(&player).contains("END"));
    }
}
