//! Run one demo screen headlessly and print what it painted.
//!
//! ```sh
//! RUST_LOG=debug cargo run --example animate_state -- spring
//! ```
//!
//! Screens: rotation, color, motion, spring, keyframe, transition (default).
//! Pass `--realtime` to pace frames with the wall clock.

use animate_state::prelude::*;

fn describe(frame: &Frame) -> String {
    if let Some(degrees) = frame.first_image_rotation() {
        return format!("rotation {:7.2}°", degrees);
    }
    match frame.first_rect() {
        Some((rect, color)) => format!(
            "box x {:7.2}  rgb({:.2}, {:.2}, {:.2})",
            rect.x, color.r, color.g, color.b
        ),
        None => "nothing painted".to_string(),
    }
}

fn main() -> animate_state::Result<()> {
    let mut kind = ScreenKind::default();
    let mut realtime = false;
    for arg in std::env::args().skip(1) {
        if arg == "--realtime" {
            realtime = true;
        } else {
            kind = arg.parse()?;
        }
    }

    let app = App::new().tap_at(100.0).realtime(realtime);
    let screen = kind.build(&app.metrics())?;
    let frames = app.run(screen);

    println!("{}: {} painted frames", kind, frames.len());
    let step = (frames.len() / 20).max(1);
    for frame in frames.iter().step_by(step) {
        println!("{:7.0}ms  {}", frame.time_ms, describe(frame));
    }
    if let Some(last) = frames.last() {
        println!("{:7.0}ms  {}", last.time_ms, describe(last));
    }
    Ok(())
}
