//! Overtone CLI — render a single note and play it on the default output.

use std::thread;
use std::time::Duration;

use clap::Parser;

use overtone::audio::{self, Player};
use overtone::instrument::{InstrumentKind, NoteSpec};
use overtone::pitch;

const CHANNELS: u16 = 2;

#[derive(Parser)]
#[command(name = "overtone", version, about = "Play a synthesized note")]
struct Cli {
    /// Instrument: beep, guitar, or trumpet
    instrument: InstrumentKind,

    /// Note name such as A4, C#3, or Eb2 (overrides --frequency)
    #[arg(short, long)]
    note: Option<String>,

    /// Pitch in Hz
    #[arg(short, long, default_value_t = 440.0)]
    frequency: f64,

    /// Note length in seconds
    #[arg(short, long, default_value_t = 2.0)]
    duration: f64,

    /// Output sample rate in Hz
    #[arg(long, default_value_t = 44100)]
    sample_rate: u32,

    /// Seed for noise-based instruments
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

fn main() {
    let cli = Cli::parse();

    let frequency = match &cli.note {
        Some(name) => match pitch::note_to_freq(name) {
            Some(hz) => hz,
            None => {
                eprintln!("unrecognized note name: {name}");
                std::process::exit(1);
            }
        },
        None => cli.frequency,
    };

    let spec = match NoteSpec::from_seconds(frequency, cli.duration, cli.sample_rate) {
        Ok(spec) => spec,
        Err(e) => {
            eprintln!("invalid note request: {e}");
            std::process::exit(1);
        }
    };

    let instrument = cli.instrument.build(cli.seed);
    println!(
        "overtone v{} — {} at {:.2} Hz, {:.2}s @ {} Hz",
        env!("CARGO_PKG_VERSION"),
        instrument.name(),
        spec.frequency(),
        cli.duration,
        spec.sample_rate(),
    );

    let mono = instrument.render(&spec);
    let frames = audio::duplicate(&mono);
    let samples = audio::interleave(&frames);

    let mut player = match Player::new(spec.sample_rate(), CHANNELS, samples.len().max(1)) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("failed to open audio output: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = player.queue(&samples) {
        eprintln!("audio error: {e}");
        std::process::exit(1);
    }

    // Wait for the callback to drain the queue, then let the tail ring out.
    while player.pending() > 0 {
        thread::sleep(Duration::from_millis(50));
    }
    thread::sleep(Duration::from_millis(200));
    println!("done.");
}
