//! Testimonial carousel: a cyclic slide index plus an autoplay timer.
//!
//! The timer itself lives in the view (a sleeping task per period). Each
//! scheduled tick carries the generation it was created under; `start` and
//! `stop` bump the generation so ticks from a cancelled period are dropped.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CarouselError {
    #[error("slide {index} is out of range for {len} slides")]
    OutOfRange { index: usize, len: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Autoplay {
    Stopped,
    Running { generation: u64 },
}

/// A tick the view should deliver back via [`Carousel::tick`] after `wait_ms`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledTick {
    pub generation: u64,
    pub wait_ms: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Carousel {
    len: usize,
    current: usize,
    period_ms: u64,
    autoplay: Autoplay,
    generation: u64,
}

impl Carousel {
    /// A carousel over `len` slides, first slide active. `None` for an empty
    /// list, which must never be activated.
    pub fn new(len: usize, period_ms: u64) -> Option<Self> {
        (len > 0).then_some(Self {
            len,
            current: 0,
            period_ms,
            autoplay: Autoplay::Stopped,
            generation: 0,
        })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn autoplay(&self) -> Autoplay {
        self.autoplay
    }

    pub fn is_running(&self) -> bool {
        matches!(self.autoplay, Autoplay::Running { .. })
    }

    /// Active flag for slide (and indicator) `index`.
    pub fn is_active(&self, index: usize) -> bool {
        self.current == index
    }

    /// Make slide `index` the only active one.
    pub fn show(&mut self, index: usize) -> Result<(), CarouselError> {
        if index >= self.len {
            return Err(CarouselError::OutOfRange {
                index,
                len: self.len,
            });
        }
        self.current = index;
        Ok(())
    }

    /// Step to the next slide, wrapping after the last one.
    pub fn advance(&mut self) {
        self.current = (self.current + 1) % self.len;
    }

    /// Begin a fresh autoplay period, superseding any pending tick.
    pub fn start(&mut self) -> ScheduledTick {
        self.generation = self.generation.wrapping_add(1);
        self.autoplay = Autoplay::Running {
            generation: self.generation,
        };
        ScheduledTick {
            generation: self.generation,
            wait_ms: self.period_ms,
        }
    }

    pub fn stop(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.autoplay = Autoplay::Stopped;
    }

    /// Manual selection: show the slide and restart the full autoplay period.
    pub fn select(&mut self, index: usize) -> Result<ScheduledTick, CarouselError> {
        self.show(index)?;
        self.stop();
        Ok(self.start())
    }

    /// Pointer entered the carousel.
    pub fn pause(&mut self) {
        self.stop();
    }

    /// Pointer left the carousel; the period restarts from zero.
    pub fn resume(&mut self) -> ScheduledTick {
        self.start()
    }

    /// Deliver a tick. Advances and schedules the next one when `generation` is
    /// the live period, otherwise ignores it.
    pub fn tick(&mut self, generation: u64) -> Option<ScheduledTick> {
        match self.autoplay {
            Autoplay::Running { generation: live } if live == generation => {
                self.advance();
                Some(ScheduledTick {
                    generation,
                    wait_ms: self.period_ms,
                })
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_carousel_is_never_built() {
        assert!(Carousel::new(0, 5000).is_none());
    }

    #[test]
    fn advancing_len_times_returns_to_start() {
        for len in 1..=6 {
            let mut carousel = Carousel::new(len, 5000).unwrap();
            carousel.show(len / 2).unwrap();
            let start = carousel.current();
            for _ in 0..len {
                carousel.advance();
            }
            assert_eq!(carousel.current(), start, "len={len}");
        }
    }

    #[test]
    fn exactly_one_slide_active() {
        let mut carousel = Carousel::new(4, 5000).unwrap();
        for step in 0..9 {
            let active = (0..carousel.len()).filter(|&i| carousel.is_active(i)).count();
            assert_eq!(active, 1, "step={step}");
            carousel.advance();
        }
    }

    #[test]
    fn show_out_of_range_is_rejected() {
        let mut carousel = Carousel::new(3, 5000).unwrap();
        carousel.show(1).unwrap();
        assert_eq!(
            carousel.show(3),
            Err(CarouselError::OutOfRange { index: 3, len: 3 })
        );
        assert_eq!(carousel.current(), 1);
    }

    #[test]
    fn tick_advances_only_for_live_generation() {
        let mut carousel = Carousel::new(3, 5000).unwrap();
        let first = carousel.start();
        assert_eq!(first.wait_ms, 5000);

        let next = carousel.tick(first.generation).unwrap();
        assert_eq!(carousel.current(), 1);
        assert_eq!(next.generation, first.generation);

        carousel.stop();
        assert_eq!(carousel.tick(first.generation), None);
        assert_eq!(carousel.current(), 1);
    }

    #[test]
    fn manual_selection_restarts_the_period() {
        let mut carousel = Carousel::new(3, 5000).unwrap();
        let old = carousel.start();
        let fresh = carousel.select(2).unwrap();
        assert_eq!(carousel.current(), 2);
        assert!(carousel.is_running());
        assert_ne!(old.generation, fresh.generation);
        // The tick scheduled before the click is stale.
        assert_eq!(carousel.tick(old.generation), None);
        assert_eq!(carousel.current(), 2);
        carousel.tick(fresh.generation).unwrap();
        assert_eq!(carousel.current(), 0);
    }

    #[test]
    fn hover_pauses_and_leave_resumes() {
        let mut carousel = Carousel::new(2, 5000).unwrap();
        let running = carousel.start();
        carousel.pause();
        assert!(!carousel.is_running());
        assert_eq!(carousel.tick(running.generation), None);

        let resumed = carousel.resume();
        assert!(carousel.is_running());
        carousel.tick(resumed.generation).unwrap();
        assert_eq!(carousel.current(), 1);
    }
}
