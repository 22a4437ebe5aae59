/// Play position, loop region and the pending cut.
///
/// `advance` is called once per tick and applies, in order: a pending cut, the
/// wrap at the right edge of the grid, the wrap at `loop_end`, or a single step.
/// Loop bounds are taken as given, so `loop_start > loop_end` is allowed; the
/// loop then never closes and only the edge wrap brings the playhead back to 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayheadController {
    width: usize,
    position: Option<usize>,
    next_position: Option<usize>,
    loop_start: usize,
    loop_end: usize,
}

impl PlayheadController {
    pub fn new(width: usize) -> Self {
        Self {
            width,
            position: None,
            next_position: None,
            loop_start: 0,
            loop_end: width.saturating_sub(1),
        }
    }

    /// `None` until the first tick.
    pub fn position(&self) -> Option<usize> {
        self.position
    }

    pub fn loop_bounds(&self) -> (usize, usize) {
        (self.loop_start, self.loop_end)
    }

    pub fn is_cutting(&self) -> bool {
        self.next_position.is_some()
    }

    pub fn pending_cut(&self) -> Option<usize> {
        self.next_position
    }

    /// Jump to `column` on the next tick. A later request before that tick replaces it.
    pub fn request_cut(&mut self, column: usize) -> bool {
        if column >= self.width {
            log::warn!("cut to column {column} outside width {}", self.width);
            return false;
        }
        self.next_position = Some(column);
        true
    }

    pub fn set_loop(&mut self, start: usize, end: usize) -> bool {
        if start >= self.width || end >= self.width {
            log::warn!("loop {start}..={end} outside width {}", self.width);
            return false;
        }
        if start > end {
            log::debug!("loop start {start} is after loop end {end}");
        }
        self.loop_start = start;
        self.loop_end = end;
        true
    }

    pub fn advance(&mut self) -> usize {
        let next = match (self.next_position.take(), self.position) {
            (Some(target), _) => target,
            (None, None) => 0,
            (None, Some(p)) if p == self.width - 1 => 0,
            (None, Some(p)) if p == self.loop_end => self.loop_start,
            (None, Some(p)) => p + 1,
        };
        self.position = Some(next);
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(playhead: &mut PlayheadController, ticks: usize) -> Vec<usize> {
        (0..ticks).map(|_| playhead.advance()).collect()
    }

    #[test]
    fn first_tick_lands_on_zero() {
        let mut playhead = PlayheadController::new(16);
        assert_eq!(playhead.position(), None);
        assert_eq!(playhead.loop_bounds(), (0, 15));
        assert_eq!(playhead.advance(), 0);
    }

    #[test]
    fn full_width_cycles_and_wraps() {
        let mut playhead = PlayheadController::new(16);
        let positions = run(&mut playhead, 17);
        let expected: Vec<usize> = (0..16).chain([0]).collect();
        assert_eq!(positions, expected);
    }

    #[test]
    fn loop_end_wraps_to_loop_start() {
        let mut playhead = PlayheadController::new(16);
        playhead.set_loop(4, 10);
        let positions = run(&mut playhead, 14);
        assert_eq!(&positions[8..], &[8, 9, 10, 4, 5, 6]);
    }

    #[test]
    fn right_edge_wins_over_loop_end() {
        let mut playhead = PlayheadController::new(8);
        playhead.set_loop(2, 7);
        let positions = run(&mut playhead, 9);
        assert_eq!(positions[7], 7);
        assert_eq!(positions[8], 0);
    }

    #[test]
    fn inverted_loop_never_closes() {
        let mut playhead = PlayheadController::new(8);
        playhead.request_cut(3);
        playhead.advance();
        playhead.set_loop(5, 2);
        let positions = run(&mut playhead, 6);
        assert_eq!(positions, vec![4, 5, 6, 7, 0, 1]);
        // from the edge wrap the playhead reaches loop_end and jumps to loop_start
        assert_eq!(run(&mut playhead, 3), vec![2, 5, 6]);
    }

    #[test]
    fn cut_beats_edge_and_loop() {
        let mut playhead = PlayheadController::new(16);
        playhead.set_loop(4, 10);
        run(&mut playhead, 11);
        assert_eq!(playhead.position(), Some(10));
        playhead.request_cut(13);
        assert!(playhead.is_cutting());
        assert_eq!(playhead.advance(), 13);
        assert!(!playhead.is_cutting());
        assert_eq!(playhead.advance(), 14);
    }

    #[test]
    fn cut_before_first_tick() {
        let mut playhead = PlayheadController::new(16);
        playhead.request_cut(7);
        assert_eq!(playhead.advance(), 7);
    }

    #[test]
    fn latest_cut_wins() {
        let mut playhead = PlayheadController::new(16);
        playhead.request_cut(3);
        playhead.request_cut(9);
        assert_eq!(playhead.pending_cut(), Some(9));
        assert_eq!(playhead.advance(), 9);
    }

    #[test]
    fn out_of_range_requests_are_ignored() {
        let mut playhead = PlayheadController::new(8);
        assert!(!playhead.request_cut(8));
        assert!(!playhead.set_loop(0, 8));
        assert!(!playhead.is_cutting());
        assert_eq!(playhead.loop_bounds(), (0, 7));
    }
}
