/// Alert volume at startup (0.0..=1.0).
pub const DEFAULT_ALERT_VOLUME: f64 = 0.2;

/// Change per Up/Down action.
pub const VOLUME_STEP: f64 = 0.01;

/// Clamps a requested volume to the range the audio sink accepts.
pub fn sink_gain(volume: f64) -> f32 {
    volume.clamp(0.0, 1.0) as f32
}

/// Volume as a whole-number percentage, e.g. `0.2` -> `"20"`.
pub fn volume_percent(volume: f64) -> String {
    format!("{:.0}", volume * 100.0)
}
