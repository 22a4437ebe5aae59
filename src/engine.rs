use super::{
    common::{Geometry, Region},
    gesture::{TransportAction, TransportGestureTracker},
    matrix::StepMatrix,
    playhead::PlayheadController,
    render::{render, Frame},
};

/// Fired once per set step under the playhead. Must return quickly.
pub trait Trigger {
    fn trigger(&mut self, row: usize);
}

impl<F: FnMut(usize)> Trigger for F {
    fn trigger(&mut self, row: usize) {
        self(row)
    }
}

/// Receives frames to push to the LEDs.
pub trait LedOutput {
    fn draw(&mut self, frame: &Frame);
}

impl<F: FnMut(&Frame)> LedOutput for F {
    fn draw(&mut self, frame: &Frame) {
        self(frame)
    }
}

/// A key transition as reported by the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub x: usize,
    pub y: usize,
    pub pressed: bool,
}

pub struct SequencerEngine<T, L> {
    geometry: Geometry,
    matrix: StepMatrix,
    playhead: PlayheadController,
    gestures: TransportGestureTracker,
    trigger: T,
    output: L,
    connected: bool,
    highlight: bool,
}

impl<T: Trigger, L: LedOutput> SequencerEngine<T, L> {
    pub fn new(geometry: Geometry, trigger: T, output: L) -> Self {
        Self {
            geometry,
            matrix: StepMatrix::new(geometry.width(), geometry.sequencer_rows()),
            playhead: PlayheadController::new(geometry.width()),
            gestures: TransportGestureTracker::new(),
            trigger,
            output,
            connected: false,
            highlight: false,
        }
    }

    /// Draw set steps under the playhead brighter.
    pub fn with_highlight(self, highlight: bool) -> Self {
        Self { highlight, ..self }
    }

    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    pub fn matrix(&self) -> &StepMatrix {
        &self.matrix
    }

    pub fn playhead(&self) -> &PlayheadController {
        &self.playhead
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    pub fn trigger(&self) -> &T {
        &self.trigger
    }

    pub fn output(&self) -> &L {
        &self.output
    }

    pub fn output_mut(&mut self) -> &mut L {
        &mut self.output
    }

    pub fn render(&self) -> Frame {
        let playhead = self
            .highlight
            .then(|| self.playhead.position())
            .flatten();
        render(&self.matrix, self.geometry, playhead)
    }

    fn draw(&mut self) {
        let frame = self.render();
        self.output.draw(&frame);
    }

    pub fn on_key(&mut self, event: KeyEvent) {
        self.on_key_event(event.y, event.x, event.pressed)
    }

    pub fn on_key_event(&mut self, row: usize, column: usize, pressed: bool) {
        match self.geometry.hit(column, row) {
            Some(Region::Step { row, column }) => {
                if pressed {
                    self.matrix.toggle(row, column);
                    log::debug!(
                        "step {row},{column} {}",
                        if self.matrix.is_set(row, column) { "on" } else { "off" }
                    );
                    self.draw();
                }
            }
            Some(Region::Transport(column)) => {
                match self.gestures.on_key(column, pressed) {
                    Some(TransportAction::Cut(target)) => {
                        log::debug!("cut to {target}");
                        self.playhead.request_cut(target);
                    }
                    Some(TransportAction::SetLoop { start, end }) => {
                        log::debug!("loop {start}..={end}");
                        self.playhead.set_loop(start, end);
                    }
                    None => (),
                }
            }
            Some(Region::Spare) => log::trace!("ignoring key on spare row at {column}"),
            None => log::debug!("ignoring key outside grid at {column},{row}"),
        }
    }

    /// Advances the playhead, fires the rows set in the new column, and redraws while connected.
    pub fn tick(&mut self) -> usize {
        let position = self.playhead.advance();

        for row in self.matrix.active_rows(position) {
            log::debug!("triggered row {row}");
            self.trigger.trigger(row);
        }

        if self.connected {
            self.draw();
        }
        position
    }

    pub fn on_connection_changed(&mut self, connected: bool) {
        let reconnected = connected && !self.connected;
        self.connected = connected;
        log::info!(
            "grid {}",
            if connected { "connected" } else { "disconnected" }
        );
        if reconnected {
            self.draw();
        }
    }
}
