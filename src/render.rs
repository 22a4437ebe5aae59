use super::{
    common::{to_1d, Geometry, EMPTY, PLAYHEAD, STEP},
    matrix::StepMatrix,
};

/// Row-major LED levels for the whole surface, each in `0..=15`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    width: usize,
    height: usize,
    levels: Vec<u8>,
}

impl Frame {
    pub fn new(geometry: Geometry) -> Self {
        Self {
            width: geometry.width(),
            height: geometry.height(),
            levels: vec![EMPTY; geometry.size()],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn level(&self, x: usize, y: usize) -> u8 {
        if x < self.width && y < self.height {
            self.levels[to_1d(x, y, self.width)]
        } else {
            EMPTY
        }
    }

    fn set(&mut self, x: usize, y: usize, level: u8) {
        self.levels[to_1d(x, y, self.width)] = level;
    }

    pub fn row(&self, y: usize) -> &[u8] {
        let start = to_1d(0, y, self.width);
        &self.levels[start..start + self.width]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.levels.chunks(self.width)
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.levels
    }
}

/// Draws set steps at `STEP`. With `playhead` given, set steps in that column
/// are drawn at `PLAYHEAD` instead. Transport and spare rows stay dark.
pub fn render(matrix: &StepMatrix, geometry: Geometry, playhead: Option<usize>) -> Frame {
    let mut frame = Frame::new(geometry);
    let rows = matrix.rows().min(geometry.sequencer_rows());
    let width = matrix.width().min(geometry.width());

    for y in 0..rows {
        for x in 0..width {
            let level = match (matrix.is_set(y, x), playhead == Some(x)) {
                (true, true) => PLAYHEAD,
                (true, false) => STEP,
                (false, _) => EMPTY,
            };
            frame.set(x, y, level);
        }
    }

    frame
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (StepMatrix, Geometry) {
        let geometry = Geometry::default();
        (
            StepMatrix::new(geometry.width(), geometry.sequencer_rows()),
            geometry,
        )
    }

    #[test]
    fn empty_matrix_renders_dark() {
        let (matrix, geometry) = setup();
        let frame = render(&matrix, geometry, None);
        assert_eq!(frame.rows().count(), 8);
        assert!(frame.as_slice().iter().all(|&level| level == EMPTY));
    }

    #[test]
    fn set_step_is_lit_at_step_level() {
        let (mut matrix, geometry) = setup();
        matrix.toggle(2, 5);
        let frame = render(&matrix, geometry, None);
        for x in 0..16 {
            let expected = if x == 5 { STEP } else { EMPTY };
            assert_eq!(frame.level(x, 2), expected);
        }
        assert_eq!(frame.row(2)[5], 11);
        assert_eq!(frame.as_slice().iter().filter(|&&l| l != EMPTY).count(), 1);
    }

    #[test]
    fn playhead_brightens_set_steps_only() {
        let (mut matrix, geometry) = setup();
        matrix.toggle(0, 3);
        matrix.toggle(1, 4);
        let frame = render(&matrix, geometry, Some(3));
        assert_eq!(frame.level(3, 0), PLAYHEAD);
        assert_eq!(frame.level(3, 1), EMPTY);
        assert_eq!(frame.level(4, 1), STEP);
    }

    #[test]
    fn render_is_repeatable() {
        let (mut matrix, geometry) = setup();
        matrix.toggle(5, 15);
        assert_eq!(
            render(&matrix, geometry, None),
            render(&matrix, geometry, None)
        );
    }
}
