// File: ./src/carousel.rs
// Featured-event carousel: date-ordered slides and a self-advancing index
use crate::date_utils;
use crate::model::{DataSnapshot, DataState, EventRecord};
use std::sync::{Arc, Weak};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

pub const SLIDE_INTERVAL: Duration = Duration::from_millis(5000);

/// Copy of `focus` in ascending date order. The input is left untouched and
/// equal dates keep their input order.
pub fn order_by_date(focus: &[EventRecord]) -> Vec<&EventRecord> {
    let mut ordered: Vec<&EventRecord> = focus.iter().collect();
    ordered.sort_by_key(|e| e.date);
    ordered
}

/// Sent by the slide timer. Ticks from a cancelled timer carry an old
/// generation and are dropped by [`Carousel::on_tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselTick {
    pub generation: u64,
}

struct SlideTimer {
    handle: JoinHandle<()>,
}

impl SlideTimer {
    fn spawn(generation: u64, period: Duration, tx: mpsc::UnboundedSender<CarouselTick>) -> Self {
        let handle = tokio::spawn(async move {
            // First tick one full period after start, like a plain repeating timer
            let mut interval = time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if tx.send(CarouselTick { generation }).is_err() {
                    break;
                }
            }
        });
        Self { handle }
    }
}

impl Drop for SlideTimer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

struct Mounted {
    tx: mpsc::UnboundedSender<CarouselTick>,
    // Held for its Drop, which aborts the task
    _timer: SlideTimer,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Slide<'a> {
    pub event: &'a EventRecord,
    pub month: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CarouselView<'a> {
    pub slides: Vec<Slide<'a>>,
    pub display_index: usize,
}

impl<'a> CarouselView<'a> {
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn active_slide(&self) -> Option<&Slide<'a>> {
        self.slides.get(self.display_index)
    }

    /// One read-only marker per slide, set for the displayed one.
    pub fn indicators(&self) -> Vec<bool> {
        self.slides.iter().map(|s| s.active).collect()
    }
}

/// Carousel component. The slide timer lives exactly as long as the
/// component stays mounted: `unmount`, a new focus collection and `Drop`
/// all cancel it.
pub struct Carousel {
    display_index: usize,
    slide_count: usize,
    period: Duration,
    generation: u64,
    seen: Option<Weak<DataSnapshot>>,
    mounted: Option<Mounted>,
}

impl Default for Carousel {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Carousel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Carousel")
            .field("display_index", &self.display_index)
            .field("slide_count", &self.slide_count)
            .field("generation", &self.generation)
            .field("mounted", &self.mounted.is_some())
            .finish()
    }
}

impl Carousel {
    pub fn new() -> Self {
        Self::with_period(SLIDE_INTERVAL)
    }

    pub fn with_period(period: Duration) -> Self {
        Self {
            display_index: 0,
            slide_count: 0,
            period,
            generation: 0,
            seen: None,
            mounted: None,
        }
    }

    pub fn display_index(&self) -> usize {
        self.display_index
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.is_some()
    }

    /// Starts the slide timer; ticks are delivered on `tx`. Must be called
    /// from within a tokio runtime. Mounting twice restarts the timer.
    pub fn mount(&mut self, tx: mpsc::UnboundedSender<CarouselTick>) {
        self.generation += 1;
        let timer = SlideTimer::spawn(self.generation, self.period, tx.clone());
        log::debug!("Carousel mounted (timer generation {})", self.generation);
        self.mounted = Some(Mounted { tx, _timer: timer });
    }

    pub fn unmount(&mut self) {
        if self.mounted.take().is_some() {
            log::debug!("Carousel unmounted, slide timer cancelled");
        }
    }

    /// Picks up a new focus collection. When the collection identity
    /// changes, the running timer is replaced by a fresh one.
    pub fn sync(&mut self, data: &DataState) -> bool {
        let snapshot = data.snapshot();
        let same = match (&self.seen, snapshot) {
            (Some(w), Some(s)) => Weak::ptr_eq(w, &Arc::downgrade(s)),
            (None, None) => true,
            _ => false,
        };
        if same {
            return false;
        }

        self.seen = snapshot.map(Arc::downgrade);
        self.slide_count = snapshot
            .and_then(|s| s.focus.as_ref())
            .map_or(0, Vec::len);
        if self.display_index >= self.slide_count {
            self.display_index = 0;
        }

        if let Some(Mounted { tx, .. }) = self.mounted.take() {
            self.mount(tx);
        }
        true
    }

    pub fn on_tick(&mut self, tick: CarouselTick) {
        if self.mounted.is_none() || tick.generation != self.generation {
            log::trace!("Dropping stale carousel tick {:?}", tick);
            return;
        }
        self.advance();
    }

    /// Moves to the next slide, wrapping after the last. No-op without slides.
    pub fn advance(&mut self) {
        if self.slide_count == 0 {
            return;
        }
        self.display_index = (self.display_index + 1) % self.slide_count;
    }

    pub fn derive<'a>(&self, data: &'a DataState) -> CarouselView<'a> {
        let ordered = data
            .snapshot()
            .and_then(|s| s.focus.as_deref())
            .map(order_by_date)
            .unwrap_or_default();

        let slides = ordered
            .into_iter()
            .enumerate()
            .map(|(idx, event)| Slide {
                event,
                month: date_utils::month_name(&event.date),
                active: idx == self.display_index,
            })
            .collect();

        CarouselView {
            slides,
            display_index: self.display_index,
        }
    }
}
