mod pulse;

use anyhow::Result;
use cadence_engine::core::{App, AppControl, FrameCtx};
use cadence_engine::device::GpuInit;
use cadence_engine::input::Key;
use cadence_engine::logging::{init_logging, LoggingConfig};
use cadence_engine::window::{Runtime, RuntimeConfig};

use pulse::Pulse;

struct PulseApp {
    pulse: Pulse,
    title: String,
}

impl App for PulseApp {
    fn update(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        if ctx.was_key_pressed(Key::Escape) {
            return AppControl::Exit;
        }

        if ctx.was_key_pressed(Key::Letter('f')) {
            let fixed = ctx.flip_fixed_step();
            log::info!("operator switched to {}", if fixed { "fixed step" } else { "display sync" });
        }

        let nominal_frames = ctx.nominal_frames();
        self.pulse.advance(ctx.tick(), nominal_frames);
        AppControl::Continue
    }

    fn draw(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let title = pulse::title(&ctx.timing.frame_rate_label(), ctx.mode());
        if title != self.title {
            ctx.window.set_title(&title);
            self.title = title;
        }

        ctx.clear(self.pulse.color())
    }
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    println!();
    println!("  cadence pulse");
    println!("  -------------");
    println!("  F    switch display sync / fixed step");
    println!("  Esc  quit");
    println!();

    let config = RuntimeConfig {
        title: "cadence".to_string(),
        ..RuntimeConfig::default()
    };

    let app = PulseApp {
        pulse: Pulse::default(),
        title: String::new(),
    };

    Runtime::run(config, GpuInit::default(), app)?;

    log::info!("bye");
    Ok(())
}
