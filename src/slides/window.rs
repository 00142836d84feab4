// src/slides/window.rs
//! Sliding activation window around the slide the player last entered.
//!
//! Each move touches at most four slides (`i-2`, `i-1`, `i+1`, `i+2`), so
//! turning a slide on or off is never paid for more than once per step.

use bevy::log::debug;

use super::error::SlideError;

/// Outbound side: something that can switch a slide on or off.
pub trait SlideSwitch {
    /// Number of slides addressable through this switch.
    fn len(&self) -> usize;
    fn set_active(&mut self, index: usize, active: bool) -> Result<(), SlideError>;
}

/// Inbound side: gets told which slide the player just entered.
pub trait SlideObserver: Send + Sync + 'static {
    fn player_entered(
        &mut self,
        index: usize,
        slides: &mut dyn SlideSwitch,
    ) -> Result<(), SlideError>;

    /// Called when the registry is (re)initialized.
    fn reset(&mut self) {}
}

/// Keeps slides `current-1 ..= current+1` switched on as the player advances.
///
/// Slides 0 and 1 are a fixed bootstrap window: entering them never moves
/// the window, and there is no clipped case at the start of the sequence,
/// only at the tail.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SlideWindow {
    current: usize,
}

impl SlideWindow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the slide last reported as entered.
    pub fn current(&self) -> usize {
        self.current
    }

    pub fn on_player_entered(
        &mut self,
        index: usize,
        slides: &mut dyn SlideSwitch,
    ) -> Result<(), SlideError> {
        let len = slides.len();
        if index >= len {
            return Err(SlideError::IndexOutOfRange { index, len });
        }
        // duplicate trigger notifications
        if index == self.current() {
            return Ok(());
        }
        debug!("Slides: window {} -> {}", self.current(), index);
        self.current = index;
        if index <= 1 {
            return Ok(());
        }

        if index >= len.saturating_sub(2) {
            // tail: nothing exists past len-1
            slides.set_active(index - 2, false)?;
            slides.set_active(index - 1, true)?;
            if index < len - 1 {
                slides.set_active(index + 1, true)?;
            }
            return Ok(());
        }

        slides.set_active(index - 2, false)?;
        slides.set_active(index + 2, false)?;
        slides.set_active(index - 1, true)?;
        slides.set_active(index + 1, true)?;
        Ok(())
    }
}

impl SlideObserver for SlideWindow {
    fn player_entered(
        &mut self,
        index: usize,
        slides: &mut dyn SlideSwitch,
    ) -> Result<(), SlideError> {
        self.on_player_entered(index, slides)
    }

    fn reset(&mut self) {
        self.current = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Flat bool table that records every write.
    struct Table {
        active: Vec<bool>,
        writes: Vec<(usize, bool)>,
    }

    impl Table {
        fn bootstrapped(len: usize) -> Self {
            let mut active = vec![false; len];
            active[..3].iter_mut().for_each(|a| *a = true);
            Self { active, writes: Vec::new() }
        }

        fn on(&self) -> Vec<usize> {
            (0..self.active.len()).filter(|&i| self.active[i]).collect()
        }
    }

    impl SlideSwitch for Table {
        fn len(&self) -> usize {
            self.active.len()
        }

        fn set_active(&mut self, index: usize, active: bool) -> Result<(), SlideError> {
            let len = self.active.len();
            let slot = self
                .active
                .get_mut(index)
                .ok_or(SlideError::IndexOutOfRange { index, len })?;
            *slot = active;
            self.writes.push((index, active));
            Ok(())
        }
    }

    #[test]
    fn walking_forward_keeps_three_wide_window() {
        let mut table = Table::bootstrapped(10);
        let mut window = SlideWindow::new();

        for k in 2..=7 {
            window.on_player_entered(k, &mut table).unwrap();
            assert_eq!(table.on(), vec![k - 1, k, k + 1], "after entering {k}");
        }
        assert_eq!(window.current(), 7);
    }

    #[test]
    fn interior_step_touches_exactly_four_slides() {
        let mut table = Table::bootstrapped(10);
        let mut window = SlideWindow::new();

        window.on_player_entered(5, &mut table).unwrap();
        assert_eq!(table.writes, vec![(3, false), (7, false), (4, true), (6, true)]);
    }

    #[test]
    fn jumping_past_bootstrap_leaves_entered_slide_alone() {
        let mut table = Table::bootstrapped(10);
        let mut window = SlideWindow::new();

        window.on_player_entered(3, &mut table).unwrap();
        assert_eq!(table.on(), vec![0, 2, 4]);

        window.on_player_entered(7, &mut table).unwrap();
        assert_eq!(table.on(), vec![0, 2, 4, 6, 8]);
    }

    #[test]
    fn repeated_entry_is_a_no_op() {
        let mut table = Table::bootstrapped(10);
        let mut window = SlideWindow::new();

        window.on_player_entered(4, &mut table).unwrap();
        let writes = table.writes.len();
        let before = table.on();

        window.on_player_entered(4, &mut table).unwrap();
        assert_eq!(table.writes.len(), writes);
        assert_eq!(table.on(), before);
    }

    #[test]
    fn bootstrap_slides_do_not_move_window() {
        let mut table = Table::bootstrapped(6);
        let mut window = SlideWindow::new();

        window.on_player_entered(1, &mut table).unwrap();
        window.on_player_entered(0, &mut table).unwrap();
        window.on_player_entered(1, &mut table).unwrap();

        assert!(table.writes.is_empty());
        assert_eq!(table.on(), vec![0, 1, 2]);
        assert_eq!(window.current(), 1);
    }

    #[test]
    fn last_slide_clips_window() {
        let len = 8;
        let mut table = Table::bootstrapped(len);
        let mut window = SlideWindow::new();

        window.on_player_entered(len - 1, &mut table).unwrap();
        assert_eq!(table.writes, vec![(len - 3, false), (len - 2, true)]);
    }

    #[test]
    fn second_to_last_slide_activates_last() {
        let len = 8;
        let mut table = Table::bootstrapped(len);
        let mut window = SlideWindow::new();

        for k in 2..=len - 2 {
            window.on_player_entered(k, &mut table).unwrap();
        }
        assert_eq!(table.on(), vec![len - 3, len - 2, len - 1]);

        window.on_player_entered(len - 1, &mut table).unwrap();
        assert_eq!(table.on(), vec![len - 2, len - 1]);
    }

    #[test]
    fn smallest_layout_walks_to_the_end() {
        let mut table = Table::bootstrapped(3);
        let mut window = SlideWindow::new();

        window.on_player_entered(2, &mut table).unwrap();
        assert_eq!(table.on(), vec![1, 2]);
    }

    #[test]
    fn out_of_range_entry_leaves_window_alone() {
        let mut table = Table::bootstrapped(5);
        let mut window = SlideWindow::new();

        assert_eq!(
            window.on_player_entered(5, &mut table),
            Err(SlideError::IndexOutOfRange { index: 5, len: 5 })
        );
        assert!(table.writes.is_empty());
        assert_eq!(window.current(), 0);
        assert_eq!(table.on(), vec![0, 1, 2]);
    }

    #[test]
    fn reset_returns_to_first_slide() {
        let mut table = Table::bootstrapped(10);
        let mut window = SlideWindow::new();

        window.on_player_entered(6, &mut table).unwrap();
        SlideObserver::reset(&mut window);
        assert_eq!(window.current(), 0);
    }
}
