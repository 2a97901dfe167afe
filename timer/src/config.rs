use engine::app::AppConfig;
use winit::dpi::LogicalSize;

pub const WINDOW_TITLE: &str = "Ebb and Flow Timer";
/// Initial window size in logical units.
pub const WINDOW_SIZE: LogicalSize<u32> = LogicalSize::new(200, 200);

/// Window settings for the host. Fixed; nothing is read from the environment.
pub fn app_config() -> AppConfig {
    AppConfig {
        title: WINDOW_TITLE.to_string(),
        desired_size: WINDOW_SIZE,
        resizable: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_is_fixed_at_two_hundred_square() {
        let app = app_config();
        assert_eq!(app.title, "Ebb and Flow Timer");
        assert_eq!(app.desired_size, LogicalSize::new(200, 200));
        assert!(app.resizable);
    }
}
