use super::{
    config::Config,
    device::GridDevice,
    engine::{SequencerEngine, Trigger},
    metro::Metro,
};
use std::{sync::mpsc::Sender, time::Duration};

/// Hands fired rows to the audio thread. Without a channel it only logs.
pub struct ChannelTrigger {
    sender: Option<Sender<usize>>,
}

impl ChannelTrigger {
    pub fn new(sender: Sender<usize>) -> Self {
        Self {
            sender: Some(sender),
        }
    }

    pub fn silent() -> Self {
        Self { sender: None }
    }
}

impl Trigger for ChannelTrigger {
    fn trigger(&mut self, row: usize) {
        if let Some(sender) = &self.sender {
            if sender.send(row).is_err() {
                log::warn!("audio thread gone, triggers are now silent");
                self.sender = None;
            }
        }
    }
}

pub struct App {
    engine: SequencerEngine<ChannelTrigger, GridDevice>,
    interval: Duration,
}

impl App {
    pub fn new(device: GridDevice, trigger: ChannelTrigger, config: &Config) -> Self {
        let connected = device.is_connected();
        let mut engine =
            SequencerEngine::new(device.geometry(), trigger, device).with_highlight(config.highlight);
        engine.on_connection_changed(connected);

        Self {
            engine,
            interval: config.tick,
        }
    }

    fn tick(&mut self) {
        let position = self.engine.tick();
        log::trace!("playhead at {position}");
    }

    fn handle_event(&mut self) -> bool {
        match self.engine.output_mut().poll() {
            Some(event) => {
                self.engine.on_key(event);
                true
            }
            None => false,
        }
    }

    pub fn run(self) -> ! {
        log::info!("starting clock at {:?} per step", self.interval);
        let metro = Metro::new(self.interval, self);
        metro.forever(App::tick, App::handle_event)
    }
}
