use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin};
use bevy::prelude::*;
use constants::render_settings::FPS_NOTIFY_SECONDS;

use crate::rpc::web_rpc::WebRpcInterface;

/// Report the smoothed frame rate to the host page at a fixed interval.
pub fn fps_notification_system(
    mut rpc_interface: ResMut<WebRpcInterface>,
    diagnostics: Res<DiagnosticsStore>,
    mut last_send_time: Local<f32>,
    time: Res<Time>,
) {
    let current_time = time.elapsed_secs();
    if current_time - *last_send_time < FPS_NOTIFY_SECONDS {
        return;
    }

    let Some(value) = diagnostics
        .get(&FrameTimeDiagnosticsPlugin::FPS)
        .and_then(|fps| fps.smoothed())
    else {
        return;
    };

    rpc_interface.send_notification("fps_update", serde_json::json!({ "fps": value as f32 }));
    *last_send_time = current_time;
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use bevy::diagnostic::{Diagnostic, Diagnostics, RegisterDiagnostic};
    use bevy::time::TimeUpdateStrategy;

    use super::*;

    fn steady_sixty_fps(mut diagnostics: Diagnostics) {
        diagnostics.add_measurement(&FrameTimeDiagnosticsPlugin::FPS, || 60.0);
    }

    fn fps_app(measure: bool) -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(
                125,
            )))
            .register_diagnostic(Diagnostic::new(FrameTimeDiagnosticsPlugin::FPS))
            .init_resource::<WebRpcInterface>()
            .add_systems(Update, fps_notification_system);
        if measure {
            app.add_systems(PreUpdate, steady_sixty_fps);
        }
        app
    }

    fn fps_updates(app: &App) -> Vec<f64> {
        app.world()
            .resource::<WebRpcInterface>()
            .pending()
            .iter()
            .filter(|n| n.method == "fps_update")
            .filter_map(|n| n.params["fps"].as_f64())
            .collect()
    }

    #[test]
    fn reports_twice_a_second() {
        let mut app = fps_app(true);
        // Five seconds of 125 ms frames
        for _ in 0..41 {
            app.update();
        }

        assert_eq!(fps_updates(&app), vec![60.0; 10]);
    }

    #[test]
    fn silent_without_a_measurement() {
        let mut app = fps_app(false);
        for _ in 0..41 {
            app.update();
        }

        assert!(fps_updates(&app).is_empty());
    }
}
