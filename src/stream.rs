use super::voice::Voice;
use anyhow::{anyhow, Context};
use cpal::traits::{DeviceTrait, HostTrait};

pub fn setup(mut voice: Voice) -> anyhow::Result<cpal::Stream> {
    let host = cpal::default_host();

    let device = host
        .default_output_device()
        .ok_or_else(|| anyhow!("no default audio output device"))?;
    let config = device
        .default_output_config()
        .context("cannot read default output config")?;
    voice.set_sample_rate(config.sample_rate().0 as usize);

    match config.sample_format() {
        cpal::SampleFormat::F32 => make_stream(voice, device, &config.config()),
        other => Err(anyhow!("unsupported sample format {other:?}, need f32")),
    }
}

fn make_stream(
    voice: Voice,
    device: cpal::Device,
    config: &cpal::StreamConfig,
) -> anyhow::Result<cpal::Stream> {
    let on_error = |e| log::error!("audio stream error: {e}");

    device
        .build_output_stream(
            config,
            create_update_fn(voice, config.channels as usize),
            on_error,
            None,
        )
        .context("cannot build output stream")
}

fn create_update_fn(
    mut voice: Voice,
    channels: usize,
) -> impl FnMut(&mut [f32], &cpal::OutputCallbackInfo) {
    move |output: &mut [f32], _: &cpal::OutputCallbackInfo| {
        for frame in output.chunks_mut(channels.max(1)) {
            frame.fill(voice.tick());
        }
    }
}
