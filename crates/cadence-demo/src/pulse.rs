use cadence_engine::time::ModeState;

/// Ticks between two beats of the indicator.
const BEAT_TICKS: u64 = 60;

/// Hue change per nominal tick, in turns.
const HUE_PER_FRAME: f64 = 1.0 / 600.0;

/// Demo model: a beat that only advances on logical ticks, and a hue that drifts
/// with wall time.
///
/// With a healthy tick the beat lands once per second whatever the display does;
/// the hue shows how smooth presentation is.
#[derive(Debug, Default)]
pub struct Pulse {
    ticks: u64,
    hue: f64,
}

impl Pulse {
    pub fn advance(&mut self, tick: bool, nominal_frames: f64) {
        if tick {
            self.ticks += 1;
        }
        self.hue = (self.hue + nominal_frames * HUE_PER_FRAME).fract();
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Within the first few ticks of a beat.
    pub fn on_beat(&self) -> bool {
        self.ticks > 0 && self.ticks % BEAT_TICKS < 6
    }

    pub fn color(&self) -> wgpu::Color {
        let (r, g, b) = hue_to_rgb(self.hue);
        let level = if self.on_beat() { 0.9 } else { 0.35 };
        wgpu::Color {
            r: r * level,
            g: g * level,
            b: b * level,
            a: 1.0,
        }
    }
}

pub fn title(rate_label: &str, mode: ModeState) -> String {
    let mode = if mode.fixed_step_enabled() {
        "fixed step"
    } else {
        "display sync"
    };
    format!("cadence | {rate_label} | {mode} (F to switch)")
}

fn hue_to_rgb(hue: f64) -> (f64, f64, f64) {
    let h = hue * 6.0;
    let x = 1.0 - (h % 2.0 - 1.0).abs();
    match h as u32 {
        0 => (1.0, x, 0.0),
        1 => (x, 1.0, 0.0),
        2 => (0.0, 1.0, x),
        3 => (0.0, x, 1.0),
        4 => (x, 0.0, 1.0),
        _ => (1.0, 0.0, x),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cadence_engine::time::TimingController;

    #[test]
    fn beat_follows_ticks_not_frames() {
        let mut p = Pulse::default();
        for _ in 0..300 {
            p.advance(false, 0.5);
        }
        assert_eq!(p.ticks(), 0);
        assert!(!p.on_beat());

        for _ in 0..60 {
            p.advance(true, 1.0);
        }
        assert!(p.on_beat());
    }

    #[test]
    fn hue_wraps() {
        let mut p = Pulse::default();
        p.advance(false, 900.0);
        assert!(p.hue >= 0.0 && p.hue < 1.0);
    }

    #[test]
    fn colors_stay_in_range() {
        let mut p = Pulse::default();
        for _ in 0..1000 {
            p.advance(true, 1.3);
            let c = p.color();
            for v in [c.r, c.g, c.b] {
                assert!((0.0..=1.0).contains(&v), "{v}");
            }
        }
    }

    #[test]
    fn title_names_rate_and_mode() {
        let t = TimingController::new();
        assert_eq!(
            title(&t.frame_rate_label(), t.mode()),
            "cadence | Frame Rate: 0 Hz | display sync (F to switch)"
        );
    }
}
