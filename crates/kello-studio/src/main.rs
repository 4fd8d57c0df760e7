use std::io::{self, BufRead, Write};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use kello_ui::prelude::*;

/// Face laid out at a fixed spot; a windowed host would update this on
/// resize via `set_face`.
const FACE: Rect = Rect::new(0.0, 0.0, 240.0, 240.0);

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    println!();
    println!("  kello studio — interactive clock console");
    println!("  ----------------------------------------");
    println!("  the clock ticks while you wait; grab a hand or edit the");
    println!("  readout and it holds its breath until you let go.");
    println!();
    print_help();

    let mut widget = ClockWidget::new(FACE);
    log::info!("clock seeded at {}", widget.view().readout);
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        widget.poll(Instant::now());
        print_view(&widget.view());
        print!("> ");
        io::stdout().flush().context("failed to flush prompt")?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("failed to read from stdin")?;
        let mut words = line.split_whitespace();

        match words.next() {
            None | Some("show") => {}
            Some("grab") => match words.next() {
                Some("min") => grab(&mut widget, Hand::Minute),
                Some("sec") => grab(&mut widget, Hand::Second),
                _ => println!("  usage: grab min|sec"),
            },
            Some("move") => {
                let xy = (parse_f32(words.next()), parse_f32(words.next()));
                match xy {
                    (Some(x), Some(y)) => {
                        let pos = Vec2::new(x, y);
                        widget.on_event(&UiEvent::PointerMove { pos }, Instant::now());
                    }
                    _ => println!("  usage: move <x> <y>"),
                }
            }
            Some("release") => {
                widget.on_event(&UiEvent::PointerUp, Instant::now());
            }
            Some("focus") => {
                widget.on_event(&UiEvent::ReadoutFocus, Instant::now());
            }
            Some("type") => {
                let text = words.collect::<Vec<_>>().join(" ");
                widget.on_event(&UiEvent::ReadoutInput { text }, Instant::now());
            }
            Some("blur") => {
                widget.on_event(&UiEvent::ReadoutBlur, Instant::now());
            }
            Some("wait") => {
                let secs = parse_f32(words.next()).unwrap_or(1.0).max(0.0) as u64;
                for _ in 0..secs {
                    thread::sleep(Duration::from_secs(1));
                    widget.poll(Instant::now());
                }
            }
            Some("help") => print_help(),
            Some("quit") | Some("exit") => break,
            Some(other) => println!("  unknown command {other:?} — try 'help'"),
        }
    }

    println!("  bye.");
    Ok(())
}

fn grab(widget: &mut ClockWidget, hand: Hand) {
    // The console has no real pointer, so synthesize a press on the hand's
    // current position: just inside the face along its displayed angle.
    let view = widget.view();
    let angle = match hand {
        Hand::Minute => view.minute_angle,
        Hand::Second => view.second_angle,
    }
    .to_radians();
    let center = widget.face().center();
    let reach = widget.face().size.x * 0.3;
    let pos = Vec2::new(
        center.x + angle.sin() * reach,
        center.y - angle.cos() * reach,
    );
    widget.on_event(&UiEvent::PointerDown { pos }, Instant::now());
}

fn parse_f32(word: Option<&str>) -> Option<f32> {
    word.and_then(|w| w.parse().ok())
}

fn print_view(view: &ClockView) {
    let marker = if view.editing { " (editing)" } else { "" };
    println!(
        "  [{}]{}  minute hand {:>5.1}°  second hand {:>5.1}°",
        view.readout, marker, view.minute_angle, view.second_angle
    );
}

fn print_help() {
    println!("  commands:");
    println!("    show                 print the readout and hand angles");
    println!("    grab min|sec         press the pointer on a hand");
    println!("    move <x> <y>         drag the pointer (face is 240x240)");
    println!("    release              let go of the hand");
    println!("    focus | type <text> | blur   edit the readout");
    println!("    wait <secs>          let wall-clock time pass");
    println!("    quit");
    println!();
}
