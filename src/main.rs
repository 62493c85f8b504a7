// What you SEE now:
// • The window shows your photo remapped between two palette colors.
// • P picks a random preset pair and re-maps (each edit lands in history).
// • U steps back an edit, R steps forward again. The first render stays.
// • F cycles the export format (PNG/JPEG/WEBP), S writes the current render.
// • ESC quits. The HUD line shows colors, timestamp, position and format.

mod draw;
mod duotone;
mod error;
mod history;
mod imgio;
mod palette;
mod types;

use std::env;
use std::path::{Path, PathBuf};

use chrono::Local;
use draw::{draw_text_5x7, Drawer};
use error::Error;
use history::{EditState, HistoryStore};
use imgio::ExportFormat;
use palette::{random_preset, Rng32, DEFAULT_HIGH, DEFAULT_LOW};
use types::Color;

fn main() -> Result<(), Error> {
    /* --- CLI: image path, then optionally two hex endpoint colors ---
       Visual: nothing yet; bad colors abort here with InvalidColorFormat. */
    let mut args = env::args().skip(1);
    let Some(path) = args.next() else {
        eprintln!("usage: duotone <image> [low-hex] [high-hex]");
        eprintln!("   ex: duotone photo.jpg '#d92626' '#fff000'");
        std::process::exit(2);
    };
    let mut low = Color::from_hex(&args.next().unwrap_or_else(|| DEFAULT_LOW.into()))?;
    let mut high = Color::from_hex(&args.next().unwrap_or_else(|| DEFAULT_HIGH.into()))?;

    /* --- Load the source photo ---
       Visual: still nothing; this is the untouched base every edit re-maps. */
    let source = imgio::load(Path::new(&path))?;
    let (w, h) = (source.width, source.height);
    println!("Loaded {path} ({w}x{h})");

    /* --- Baseline render + history ---
       Visual: the first duotone pass; it becomes the state U can never pop. */
    let mut history = HistoryStore::new();
    let rendered = duotone::map(&source, low, high);
    history.push(EditState::new(rendered, low, high, Local::now().naive_local()));

    /* --- Window + reusable screen buffer --- */
    let mut drawer = Drawer::new("Duotone", w, h)?;
    let mut screen: Vec<u32> = Vec::with_capacity(w * h);

    /* --- Preset RNG, seeded per session ---
       The generator is handed in here; the palette module keeps no global. */
    let mut rng = Rng32::from_seed(Local::now().timestamp_subsec_nanos());
    let mut format = ExportFormat::Png;

    /* ------------------------------ Main loop ------------------------------ */
    while drawer.is_open() && !drawer.esc_pressed() {
        /* 1) Commands. Each one goes through the core explicitly:
           build inputs, call map, then push; nothing is event-driven. */
        if drawer.undo_pressed_once() {
            match history.undo() {
                Some(state) => println!("Undo -> {}", state.timestamp),
                None => println!("Nothing to undo"),
            }
        }

        if drawer.redo_pressed_once() {
            match history.redo() {
                Some(state) => println!("Redo -> {}", state.timestamp),
                None => println!("Nothing to redo"),
            }
        }

        if drawer.preset_pressed_once() {
            let (low_hex, high_hex) = random_preset(&mut rng);
            low = Color::from_hex(low_hex)?;
            high = Color::from_hex(high_hex)?;
            let rendered = duotone::map(&source, low, high);
            history.push(EditState::new(rendered, low, high, Local::now().naive_local()));
            println!("Preset {low_hex} > {high_hex}");
        }

        if drawer.format_pressed_once() {
            format = format.next();
            println!("Export format: {}", format.label());
        }

        if drawer.save_pressed_once() {
            // A failed save is reported but doesn't end the session.
            let state = history.current()?;
            let out = PathBuf::from(format!("duotone_out.{}", format.extension()));
            match imgio::save(&state.image, &out, format) {
                Ok(()) => println!("Saved {}", out.display()),
                Err(e) => eprintln!("{e}"),
            }
        }

        /* 2) Render the current state + HUD.
           Visual: the image you see is always exactly history.current(). */
        let state = history.current()?;
        state.image.pack_0rgb(&mut screen);

        let hud = format!(
            "{} > {} | {} | {}/{} | {} | U-R-P-F-S",
            state.color_low.to_hex(),
            state.color_high.to_hex(),
            state.timestamp,
            history.entries().len(),
            history.entries().len() + history.redoable(),
            format.label()
        );
        draw_text_5x7(&mut screen, w, h, 8, 8, &hud, 0x00FFFFFF);

        /* 3) Present to the window (this is when the on-screen image updates). */
        drawer.present(&screen, w, h)?;
    }

    Ok(())
}
