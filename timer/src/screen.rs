use std::time::Instant;

use engine::app::Game;
use engine::graphics::{Renderer2d, WHITE};
use engine::input::{InputFrame, KeyboardState};
use engine::surface::SurfaceSize;
use engine::ui::{Insets, Rect};
use tracing::{debug, info};

use crate::alert::AlertPlayer;
use crate::clock::Clock;
use crate::controls::Control;
use crate::countdown::{ALERT_AT, Countdown, format_mm_ss};
use crate::sfx::{VOLUME_STEP, volume_percent};

const TEXT_MARGIN: u32 = 2;

/// The whole timer: one deadline, one alert player, one text overlay.
#[derive(Debug)]
pub struct TimerScreen<C, P> {
    clock: C,
    player: P,
    countdown: Countdown,
}

impl<C: Clock, P: AlertPlayer> TimerScreen<C, P> {
    /// Starts a fresh two-minute cycle from the clock's current time.
    pub fn new(clock: C, player: P) -> Self {
        let countdown = Countdown::starting_at(clock.now());
        Self {
            clock,
            player,
            countdown,
        }
    }

    pub fn with_countdown(clock: C, player: P, countdown: Countdown) -> Self {
        Self {
            clock,
            player,
            countdown,
        }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn player(&self) -> &P {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut P {
        &mut self.player
    }

    pub fn deadline(&self) -> Instant {
        self.countdown.deadline()
    }

    pub fn volume(&self) -> f64 {
        self.player.volume()
    }

    pub fn remaining(&self) -> std::time::Duration {
        self.countdown.remaining(self.clock.now())
    }

    /// One frame of timer logic.
    pub fn tick<K: KeyboardState + ?Sized>(&mut self, keys: &K) {
        let now = self.clock.now();

        if self.countdown.roll_over(now) {
            debug!("deadline passed; next cycle armed");
        }

        let remaining = self.countdown.remaining(now);
        if remaining == ALERT_AT && !self.player.is_playing() {
            info!("{} left, playing alert", format_mm_ss(remaining));
            self.player.rewind();
            self.player.play();
        }

        // Control::Confirm (Enter) is bound but has no action.

        if Control::Reset.fired(keys) {
            debug!("deadline reset");
            self.countdown.reset(now);
        }

        if Control::VolumeUp.fired(keys) {
            self.player.set_volume(self.player.volume() + VOLUME_STEP);
        }
        if Control::VolumeDown.fired(keys) {
            self.player.set_volume(self.player.volume() - VOLUME_STEP);
        }

        if Control::RemoveSecond.fired(keys) {
            self.countdown.nudge_back();
        }
        if Control::AddSecond.fired(keys) {
            self.countdown.nudge_forward();
        }
    }

    /// The status/help overlay for the current frame.
    pub fn status_text(&self) -> String {
        format!(
            "Time left: {}
Volume: {}%
Backspace: Reset time
<-: Remove one second
->: Add one second
^: increase volume
V: lower volume
Shift: Increase action
",
            format_mm_ss(self.remaining()),
            volume_percent(self.volume()),
        )
    }
}

impl<C: Clock, P: AlertPlayer> Game for TimerScreen<C, P> {
    fn update(&mut self, input: &InputFrame) {
        self.tick(input);
    }

    fn draw(&self, gfx: &mut dyn Renderer2d) {
        let size = gfx.size();
        let area = Rect::from_size(size.width, size.height).inset(Insets::all(TEXT_MARGIN));
        gfx.draw_text(area.x, area.y, &self.status_text(), WHITE);
    }

    fn layout(&self, outer: SurfaceSize) -> SurfaceSize {
        outer
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use winit::event::VirtualKeyCode;

    use super::*;
    use crate::clock::ManualClock;
    use crate::countdown::{CYCLE, NUDGE};
    use crate::sfx::DEFAULT_ALERT_VOLUME;

    #[derive(Debug, Default)]
    struct FakePlayer {
        playing: bool,
        volume: f64,
        calls: Vec<&'static str>,
    }

    impl FakePlayer {
        fn plays(&self) -> usize {
            self.calls.iter().filter(|c| **c == "play").count()
        }
    }

    impl AlertPlayer for FakePlayer {
        fn is_playing(&self) -> bool {
            self.playing
        }

        fn play(&mut self) {
            self.playing = true;
            self.calls.push("play");
        }

        fn rewind(&mut self) {
            self.calls.push("rewind");
        }

        fn volume(&self) -> f64 {
            self.volume
        }

        fn set_volume(&mut self, volume: f64) {
            self.volume = volume;
        }
    }

    fn screen() -> TimerScreen<ManualClock, FakePlayer> {
        let player = FakePlayer {
            volume: DEFAULT_ALERT_VOLUME,
            ..FakePlayer::default()
        };
        TimerScreen::new(ManualClock::default(), player)
    }

    fn pressed(keys: &[VirtualKeyCode]) -> InputFrame {
        let mut input = InputFrame::default();
        for &key in keys {
            input.press(key);
        }
        input
    }

    #[test]
    fn starts_two_minutes_out() {
        let s = screen();
        assert_eq!(s.deadline(), s.clock().now() + CYCLE);
        assert_eq!(s.remaining(), CYCLE);
    }

    #[test]
    fn alert_rewinds_before_playing() {
        let mut s = screen();
        s.clock().advance(CYCLE - ALERT_AT);
        s.tick(&InputFrame::default());
        assert_eq!(s.player().calls, vec!["rewind", "play"]);
    }

    #[test]
    fn alert_does_not_retrigger_while_playing() {
        let mut s = screen();
        s.clock().advance(CYCLE - ALERT_AT);
        s.tick(&InputFrame::default());
        s.clock().advance(Duration::from_millis(100));
        s.tick(&InputFrame::default());
        assert_eq!(s.player().plays(), 1);
    }

    #[test]
    fn alert_can_fire_again_on_the_same_second_once_playback_ends() {
        let mut s = screen();
        s.clock().advance(CYCLE - ALERT_AT);
        s.tick(&InputFrame::default());
        s.player_mut().playing = false;
        s.clock().advance(Duration::from_millis(200));
        s.tick(&InputFrame::default());
        assert_eq!(s.player().plays(), 2);
    }

    #[test]
    fn reset_moves_deadline_to_now() {
        let mut s = screen();
        s.clock().advance(Duration::from_secs(30));
        s.tick(&pressed(&[VirtualKeyCode::Back]));
        assert_eq!(s.deadline(), s.clock().now());
        assert_eq!(s.remaining(), Duration::ZERO);

        // The next frame after time moves on re-arms a full cycle.
        s.clock().advance(Duration::from_millis(16));
        let reset_at = s.deadline();
        s.tick(&InputFrame::default());
        assert_eq!(s.deadline(), reset_at + CYCLE);
    }

    #[test]
    fn confirm_changes_nothing() {
        let mut s = screen();
        let before = (s.deadline(), s.volume());
        s.tick(&pressed(&[VirtualKeyCode::Return]));
        assert_eq!((s.deadline(), s.volume()), before);
        assert!(s.player().calls.is_empty());
    }

    #[test]
    fn volume_steps_are_unclamped() {
        let mut s = screen();
        s.player_mut().volume = 0.995;
        s.tick(&pressed(&[VirtualKeyCode::Up]));
        assert!((s.volume() - 1.005).abs() < 1e-9);

        s.player_mut().volume = 0.0;
        s.tick(&pressed(&[VirtualKeyCode::Down]));
        assert!((s.volume() + 0.01).abs() < 1e-9);
    }

    #[test]
    fn right_adds_a_second() {
        let mut s = screen();
        let before = s.deadline();
        s.tick(&pressed(&[VirtualKeyCode::Right]));
        assert_eq!(s.deadline(), before + NUDGE);
    }

    #[test]
    fn status_text_matches_template() {
        let s = screen();
        s.clock().advance(Duration::from_secs(55));
        assert_eq!(
            s.status_text(),
            "Time left: 01:05\n\
             Volume: 20%\n\
             Backspace: Reset time\n\
             <-: Remove one second\n\
             ->: Add one second\n\
             ^: increase volume\n\
             V: lower volume\n\
             Shift: Increase action\n"
        );
    }

    #[test]
    fn layout_matches_outer_size() {
        let s = screen();
        let outer = SurfaceSize::new(321, 123);
        assert_eq!(s.layout(outer), outer);
    }
}
