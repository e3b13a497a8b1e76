use egui::Context as EguiContext;
use snake_kernel::GameSummary;

/// Stats overlay. Read-only: the HUD never touches game state.
pub fn draw_hud(ctx: &EguiContext, summary: &GameSummary, step_interval: f64) {
    egui::Window::new("Snake")
        .anchor(egui::Align2::LEFT_TOP, [8.0, 8.0])
        .resizable(false)
        .collapsible(false)
        .show(ctx, |ui| {
            ui.label(format!("Tick: {}", summary.tick));
            ui.label(format!("Length: {}", summary.length));
            ui.label(format!("Fruit eaten: {}", summary.fruit_eaten));
            ui.label(format!("Deaths: {}", summary.deaths));
            ui.label(format!("Best length: {}", summary.best_length));
            ui.label(format!("Step: {:.0} ms", step_interval * 1000.0));
            ui.separator();
            ui.small("WASD / Arrows: Turn | F1: Toggle HUD | Esc: Quit");
        });
}
