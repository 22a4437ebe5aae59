use std::{f32::consts::TAU, sync::mpsc::Receiver};

const DEFAULT_SAMPLE_RATE: usize = 48_000;
const BLIP_BASE_HZ: f32 = 110.;
const BLIP_DECAY_SECS: f32 = 0.12;
const GAIN: f32 = 0.5;

fn lerp(fst: f32, snd: f32, t: f32) -> f32 {
    fst * (1. - t) + snd * t
}

enum Source {
    /// A loaded file cut into equal slices, one per row.
    Slices { samples: Vec<f32>, slice_len: usize },
    /// Decaying sine, one harmonic of `BLIP_BASE_HZ` per row.
    Blip,
}

/// Audio-thread side of the trigger: plays whatever row was fired last.
pub struct Voice {
    source: Source,
    slices: usize,
    sample_rate: usize,
    playing: bool,
    pos: f32,
    current_slice: usize,
    phase: f32,
    freq: f32,
    env: f32,
    decay: f32,
    channel: Receiver<usize>,
}

impl Voice {
    pub fn blip(channel: Receiver<usize>) -> Self {
        Self::with_source(Source::Blip, 1, channel)
    }

    /// `slices` is clamped to at least one.
    pub fn sampler(samples: Vec<f32>, slices: usize, channel: Receiver<usize>) -> Self {
        let slices = slices.max(1);
        let slice_len = samples.len() / slices;
        if slice_len == 0 {
            log::warn!("sample too short for {slices} slices, using blips");
            return Self::blip(channel);
        }
        Self::with_source(Source::Slices { samples, slice_len }, slices, channel)
    }

    fn with_source(source: Source, slices: usize, channel: Receiver<usize>) -> Self {
        let mut voice = Self {
            source,
            slices,
            sample_rate: DEFAULT_SAMPLE_RATE,
            playing: false,
            pos: 0.,
            current_slice: 0,
            phase: 0.,
            freq: BLIP_BASE_HZ,
            env: 0.,
            decay: 0.,
            channel,
        };
        voice.set_sample_rate(DEFAULT_SAMPLE_RATE);
        voice
    }

    pub fn set_sample_rate(&mut self, sample_rate: usize) {
        self.sample_rate = sample_rate.max(1);
        // reach -60dB after BLIP_DECAY_SECS
        self.decay = 0.001f32.powf(1. / (BLIP_DECAY_SECS * self.sample_rate as f32));
    }

    fn start(&mut self, row: usize) {
        match &self.source {
            Source::Slices { slice_len, .. } => {
                self.current_slice = row % self.slices;
                self.pos = (self.current_slice * slice_len) as f32;
            }
            Source::Blip => {
                self.freq = BLIP_BASE_HZ * (row + 1) as f32;
                self.phase = 0.;
                self.env = 1.;
            }
        }
        self.playing = true;
    }

    fn handle_message(&mut self) {
        let mut count = 4;
        while let Ok(row) = self.channel.try_recv() {
            self.start(row);

            count -= 1;
            if count == 0 {
                break;
            }
        }
    }

    fn next_sample(&mut self) -> f32 {
        match &self.source {
            Source::Slices { samples, slice_len } => {
                let slice_end = (self.current_slice + 1) * slice_len;
                let fst = self.pos as usize;
                if fst >= slice_end {
                    self.playing = false;
                    return 0.;
                }
                let snd = (fst + 1).min(slice_end - 1);
                let sample = lerp(samples[fst], samples[snd], self.pos.fract());
                self.pos += 1.;
                sample.tanh()
            }
            Source::Blip => {
                let sample = (TAU * self.phase).sin() * self.env;
                self.phase = (self.phase + self.freq / self.sample_rate as f32).fract();
                self.env *= self.decay;
                if self.env < 1e-4 {
                    self.playing = false;
                }
                sample
            }
        }
    }

    pub fn tick(&mut self) -> f32 {
        self.handle_message();

        if self.playing {
            self.next_sample() * GAIN
        } else {
            0.
        }
    }
}
