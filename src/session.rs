use image::RgbImage;
use rand::Rng;

use crate::color::factors::{Channel, ChannelFactors, clamp_factor, factor_label};
use crate::color::transform;
use crate::image_io::SourceImage;

/// A user action forwarded from the UI.
#[derive(Debug, Clone)]
pub enum Command {
    SetFactors(ChannelFactors),
    SetChannel(Channel, f64),
    /// The "Default" button.
    Reset,
    /// The "Random" button.
    Randomize,
    ReplaceSource(SourceImage),
}

/// Shell state independent of any widget toolkit.
///
/// Every command recomputes the modified image from the original source exactly
/// once, so factors never accumulate across edits.
pub struct Session {
    source: SourceImage,
    factors: ChannelFactors,
    modified: RgbImage,
    last_process_ms: f64,
    generation: u64,
}

impl Session {
    pub fn new(source: SourceImage) -> Self {
        let modified = source.image().clone();
        Self {
            source,
            factors: ChannelFactors::default(),
            modified,
            last_process_ms: 0.0,
            generation: 0,
        }
    }

    pub fn handle(&mut self, command: Command) {
        self.handle_with_rng(command, &mut rand::rng());
    }

    pub fn handle_with_rng<R: Rng>(&mut self, command: Command, rng: &mut R) {
        match command {
            Command::SetFactors(factors) => self.factors = factors.clamped(),
            Command::SetChannel(channel, value) => self.factors.set(channel, clamp_factor(value)),
            Command::Reset => self.factors = ChannelFactors::default(),
            Command::Randomize => self.factors = ChannelFactors::random(rng),
            Command::ReplaceSource(source) => {
                log::info!("Source replaced ({}x{})", source.width(), source.height());
                self.source = source;
            }
        }
        self.recompute();
    }

    fn recompute(&mut self) {
        let start = web_time::Instant::now();
        self.modified = transform::apply_to_source(&self.source, self.factors);
        self.last_process_ms = start.elapsed().as_secs_f64() * 1000.0;
        self.generation += 1;
        log::debug!(
            "Recomputed with factors r={:.3} g={:.3} b={:.3} in {:.1}ms",
            self.factors.red,
            self.factors.green,
            self.factors.blue,
            self.last_process_ms
        );
    }

    pub fn source(&self) -> &SourceImage {
        &self.source
    }

    pub fn factors(&self) -> ChannelFactors {
        self.factors
    }

    pub fn modified(&self) -> &RgbImage {
        &self.modified
    }

    pub fn labels(&self) -> [String; 3] {
        [Channel::Red, Channel::Green, Channel::Blue].map(|c| factor_label(c, self.factors.get(c)))
    }

    pub fn last_process_ms(&self) -> f64 {
        self.last_process_ms
    }

    /// Incremented on every recompute.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}
