use anyhow::Context;
use cpal::traits::StreamTrait;
use grid_sequencer::{
    app::{App, ChannelTrigger},
    config::Config,
    decode,
    device::GridDevice,
    stream,
    voice::Voice,
};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env();
    let device = GridDevice::open(&config.prefix);
    let rows = device.geometry().sequencer_rows();

    let (sender, receiver) = std::sync::mpsc::channel::<usize>();
    let voice = match &config.sample {
        Some(path) => match decode::decode(path) {
            Ok(samples) => Voice::sampler(samples, rows, receiver),
            Err(e) => {
                log::warn!("{e:#}, falling back to blips");
                Voice::blip(receiver)
            }
        },
        None => Voice::blip(receiver),
    };

    // the stream must outlive the clock loop
    let audio = match stream::setup(voice).and_then(|s| {
        s.play().context("cannot start audio stream")?;
        Ok(s)
    }) {
        Ok(stream) => Some(stream),
        Err(e) => {
            log::warn!("{e:#}, triggers will only be logged");
            None
        }
    };
    let trigger = if audio.is_some() {
        ChannelTrigger::new(sender)
    } else {
        ChannelTrigger::silent()
    };

    App::new(device, trigger, &config).run()
}
