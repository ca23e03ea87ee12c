//! The text reel: a slot-machine column of translations that spins a fixed
//! number of ticks and settles on one label.
//!
//! Three layers, each usable on its own:
//!
//! - [`item_offset`] / [`wrapped_distance`]: pure geometry mapping the
//!   animated scalar to a per-row pixel offset with shortest-path wraparound.
//! - [`ReelPhase`]: the tick state machine (`Spinning(tick)` → `Settled`).
//! - [`TextReel`]: owns the shuffled order, the phase, and the spring that
//!   chases the tick; timers go through a host-supplied [`Scheduler`].

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use rand::Rng;

use super::easing::SpeedCurve;
use super::language::{self, LabelEntry, LanguagePrefs};
use super::layout::{self, ContainerSize, Justify, SizeVariant};
use super::schedule::{Scheduler, TimerToken};
use super::spring::Spring;
use super::ParseError;

/// Ticks a reel spins through before settling.
pub const DEFAULT_REEL_SPINS: u32 = 10;

/// Fixed pixel nudge applied to every row offset.
const OFFSET_CORRECTION: f64 = 4.0;

// ───────────────────────────────────────── direction ─────────

/// Which way the rows travel while spinning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Up,
    Down,
}

impl Direction {
    pub fn flipped(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }
}

impl FromStr for Direction {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            _ => Err(ParseError::Direction(s.to_string())),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ───────────────────────────────────────── geometry ──────────

/// Signed distance, in rows, from the reel's current position to `index`,
/// taking whichever way round the reel is shorter.
///
/// `len` must be non-zero.
pub fn wrapped_distance(scalar: f64, index: usize, len: usize) -> f64 {
    let n = len as f64;
    let wrapped = (n + index as f64 - scalar.rem_euclid(n)).rem_euclid(n);
    if wrapped > n / 2.0 {
        wrapped - n
    } else {
        wrapped
    }
}

/// Pixel offset of row `index` when the reel stands at `scalar`.
pub fn item_offset(
    scalar: f64,
    index: usize,
    len: usize,
    row_height: u32,
    direction: Direction,
) -> f64 {
    let px = wrapped_distance(scalar, index, len) * f64::from(row_height);
    match direction {
        Direction::Up => px - OFFSET_CORRECTION,
        Direction::Down => -(px + OFFSET_CORRECTION),
    }
}

/// Uniform in-place Fisher–Yates shuffle.
pub fn shuffle_labels<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}

// ───────────────────────────────────────── phase ─────────────

/// Tick state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReelPhase {
    /// Not yet started (before mount, or after unmount).
    Idle,
    Spinning { tick: u32 },
    Settled,
}

impl ReelPhase {
    /// Apply one timer firing.  Returns the new phase; `Idle` and `Settled`
    /// absorb firings unchanged.
    pub fn advance(self, reel_spins: u32) -> Self {
        match self {
            ReelPhase::Spinning { tick } if tick + 1 >= reel_spins => ReelPhase::Settled,
            ReelPhase::Spinning { tick } => ReelPhase::Spinning { tick: tick + 1 },
            other => other,
        }
    }
}

// ───────────────────────────────────────── options ───────────

/// Presentation options for a reel.
#[derive(Debug, Clone)]
pub struct ReelOptions {
    pub size: SizeVariant,
    pub direction: Direction,
    pub speed: SpeedCurve,
    /// Shorten the entrance transition.
    pub fast_display: bool,
    /// Explicit container width in pixels.
    pub width: Option<u32>,
    pub justify: Justify,
    pub reel_spins: u32,
}

impl Default for ReelOptions {
    fn default() -> Self {
        Self {
            size: SizeVariant::default(),
            direction: Direction::default(),
            speed: SpeedCurve::default(),
            fast_display: false,
            width: None,
            justify: Justify::default(),
            reel_spins: DEFAULT_REEL_SPINS,
        }
    }
}

// ───────────────────────────────────────── reel ──────────────

/// One positioned row, ready to draw.
#[derive(Debug, Clone, PartialEq)]
pub struct ReelRow<'a> {
    pub label: &'a str,
    pub offset_px: f64,
}

/// Animated multi-language text reel.
#[derive(Debug)]
pub struct TextReel {
    entries: Vec<LabelEntry>,
    prefs: LanguagePrefs,
    options: ReelOptions,
    order: Vec<String>,
    container: ContainerSize,
    phase: ReelPhase,
    tick: u32,
    spring: Spring,
    pending: Option<TimerToken>,
}

impl TextReel {
    /// Build a reel and shuffle its eligible labels.  Nothing is scheduled
    /// until [`TextReel::mount`].
    pub fn new<R: Rng + ?Sized>(
        entries: Vec<LabelEntry>,
        prefs: LanguagePrefs,
        options: ReelOptions,
        rng: &mut R,
    ) -> Self {
        let mut reel = Self {
            entries,
            prefs,
            options,
            order: Vec::new(),
            container: ContainerSize { width: 0, height: 0 },
            phase: ReelPhase::Idle,
            tick: 0,
            spring: Spring::at(0.0),
            pending: None,
        };
        reel.reshuffle(rng);
        reel
    }

    fn reshuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let mut labels: Vec<String> = language::eligible_entries(&self.entries, &self.prefs)
            .into_iter()
            .map(|e| e.label)
            .collect();
        shuffle_labels(&mut labels, rng);
        self.container = layout::container_size(&labels, self.options.size, self.options.width);
        self.order = labels;
    }

    // ── accessors ───────────────────────────────────────────────

    pub fn order(&self) -> &[String] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn phase(&self) -> ReelPhase {
        self.phase
    }

    pub fn tick(&self) -> u32 {
        self.tick
    }

    pub fn options(&self) -> &ReelOptions {
        &self.options
    }

    pub fn container(&self) -> ContainerSize {
        self.container
    }

    /// The animated scalar (spring position).
    pub fn position(&self) -> f64 {
        self.spring.position()
    }

    pub fn has_pending_timer(&self) -> bool {
        self.pending.is_some()
    }

    /// True while either the tick chain or the spring is still moving.
    pub fn is_animating(&self) -> bool {
        matches!(self.phase, ReelPhase::Spinning { .. }) || !self.spring.is_at_rest()
    }

    /// Label the reel comes to rest on.
    pub fn settled_label(&self) -> &str {
        &self.order[self.options.reel_spins as usize % self.order.len()]
    }

    /// Index of the row currently nearest the centre line.
    pub fn centered_index(&self) -> usize {
        let len = self.order.len();
        let pos = self.spring.position();
        (0..len)
            .min_by(|&a, &b| {
                wrapped_distance(pos, a, len)
                    .abs()
                    .total_cmp(&wrapped_distance(pos, b, len).abs())
            })
            .unwrap_or(0)
    }

    pub fn centered_label(&self) -> &str {
        &self.order[self.centered_index()]
    }

    /// Canonical label to show as a tooltip, or `None` when the centred
    /// label already is the canonical one.
    pub fn tooltip(&self) -> Option<&str> {
        let canonical = language::canonical_label(&self.entries, &self.prefs)?;
        (canonical != self.centered_label()).then_some(canonical)
    }

    /// Every row with its current pixel offset.
    pub fn rows(&self) -> impl Iterator<Item = ReelRow<'_>> + '_ {
        let len = self.order.len();
        let pos = self.spring.position();
        let row_height = self.container.height;
        let direction = self.options.direction;
        self.order.iter().enumerate().map(move |(i, label)| ReelRow {
            label,
            offset_px: item_offset(pos, i, len, row_height, direction),
        })
    }

    // ── lifecycle ───────────────────────────────────────────────

    /// Start spinning.  Arms the first firing unless the reel has no spins.
    pub fn mount(&mut self, scheduler: &mut dyn Scheduler) {
        if let Some(token) = self.pending.take() {
            scheduler.cancel(token);
        }
        self.tick = 0;
        self.spring.snap(0.0);
        if self.options.reel_spins == 0 {
            self.phase = ReelPhase::Settled;
            return;
        }
        self.phase = ReelPhase::Spinning { tick: 0 };
        self.arm_next(scheduler);
        tracing::debug!(
            labels = self.order.len(),
            spins = self.options.reel_spins,
            "reel mounted"
        );
    }

    fn arm_next(&mut self, scheduler: &mut dyn Scheduler) {
        let delay = self.options.speed.delay_after(self.tick);
        self.pending = Some(scheduler.arm(delay));
    }

    /// Deliver a firing.  Returns `false`, touching nothing, when `token` is
    /// not the one currently pending.
    pub fn on_timer(&mut self, token: TimerToken, scheduler: &mut dyn Scheduler) -> bool {
        if self.pending != Some(token) {
            return false;
        }
        self.pending = None;

        self.phase = self.phase.advance(self.options.reel_spins);
        match self.phase {
            ReelPhase::Spinning { tick } => {
                self.tick = tick;
                self.arm_next(scheduler);
            }
            ReelPhase::Settled => {
                self.tick = self.options.reel_spins;
                tracing::debug!(label = self.settled_label(), "reel settled");
            }
            ReelPhase::Idle => {}
        }
        self.spring.set_target(f64::from(self.tick));
        true
    }

    /// Advance the spring by one animation frame.
    pub fn advance_frame(&mut self, dt: Duration) {
        self.spring.advance(dt);
    }

    /// Stop and cancel any pending firing.  Later firings are ignored.
    pub fn unmount(&mut self, scheduler: &mut dyn Scheduler) {
        if let Some(token) = self.pending.take() {
            scheduler.cancel(token);
        }
        self.phase = ReelPhase::Idle;
        tracing::debug!(tick = self.tick, "reel unmounted");
    }

    /// Reshuffle and spin again from zero.
    pub fn respin<R: Rng + ?Sized>(&mut self, rng: &mut R, scheduler: &mut dyn Scheduler) {
        self.reshuffle(rng);
        self.mount(scheduler);
    }

    /// Change presentation options in place.  The shuffle is kept; the
    /// container is re-measured for the new size or width.
    ///
    /// A mounted reel whose spin count changes starts over from tick zero,
    /// so the tick never runs past the new target.
    pub fn set_options(&mut self, options: ReelOptions, scheduler: &mut dyn Scheduler) {
        let spins_changed = options.reel_spins != self.options.reel_spins;
        self.container = layout::container_size(&self.order, options.size, options.width);
        self.options = options;
        if spins_changed && self.phase != ReelPhase::Idle {
            self.mount(scheduler);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::easing::MAX_DELAY;
    use crate::core::language::LanguageTag;
    use crate::core::schedule::ManualClock;
    use proptest::prelude::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    const FRAME: Duration = Duration::from_millis(16);

    fn entries(labels: &[(&str, &str)]) -> Vec<LabelEntry> {
        labels
            .iter()
            .map(|(lang, label)| LabelEntry::new(lang.parse().unwrap(), *label))
            .collect()
    }

    fn prefs(langs: &[&str]) -> LanguagePrefs {
        LanguagePrefs::with_active(
            langs
                .iter()
                .map(|l| l.parse::<LanguageTag>().unwrap())
                .collect(),
        )
    }

    fn five_word_reel(seed: u64) -> TextReel {
        let e = entries(&[
            ("en", "House"),
            ("es", "Casa"),
            ("fr", "Maison"),
            ("de", "Haus"),
            ("it", "Casa"),
        ]);
        let p = prefs(&["en", "es", "fr", "de", "it"]);
        TextReel::new(e, p, ReelOptions::default(), &mut SmallRng::seed_from_u64(seed))
    }

    /// Run the clock to `total` with the reel receiving every firing.
    fn drive(reel: &mut TextReel, clock: &mut ManualClock, total: Duration) {
        clock.advance(total, |token, c| {
            reel.on_timer(token, c);
        });
    }

    // ── geometry ────────────────────────────────────────────────

    #[test]
    fn wraparound_takes_shortest_path() {
        assert_eq!(wrapped_distance(0.0, 3, 4), -1.0);
        assert_eq!(wrapped_distance(0.0, 2, 4), 2.0);
        assert_eq!(wrapped_distance(4.0, 1, 4), 1.0);
        assert_eq!(wrapped_distance(1.5, 0, 4), -1.5);
    }

    #[test]
    fn offset_applies_row_height_and_correction() {
        assert_eq!(item_offset(0.0, 3, 4, 56, Direction::Up), -56.0 - 4.0);
        assert_eq!(item_offset(0.0, 3, 4, 56, Direction::Down), 56.0 - 4.0);
        assert_eq!(item_offset(0.0, 0, 4, 56, Direction::Up), -4.0);
        assert_eq!(item_offset(0.0, 0, 4, 56, Direction::Down), -4.0);
    }

    proptest! {
        #[test]
        fn reversing_direction_negates_offset(
            scalar in -50.0f64..50.0,
            len in 1usize..12,
            index_seed in 0usize..1000,
            row_height in 1u32..120,
        ) {
            let index = index_seed % len;
            let up = item_offset(scalar, index, len, row_height, Direction::Up);
            let down = item_offset(scalar, index, len, row_height, Direction::Down);
            // up = px - 4, down = -(px + 4)  =>  up + down = -8
            prop_assert!((up + down + 2.0 * OFFSET_CORRECTION).abs() < 1e-9);
        }

        #[test]
        fn wrapped_distance_stays_within_half_reel(
            scalar in -100.0f64..100.0,
            len in 1usize..16,
            index_seed in 0usize..1000,
        ) {
            let d = wrapped_distance(scalar, index_seed % len, len);
            prop_assert!(d <= len as f64 / 2.0 + 1e-9);
            prop_assert!(d > -(len as f64) / 2.0 - 1e-9);
        }

        #[test]
        fn settled_label_ignores_permutation(seed in any::<u64>(), spins in 1u32..30) {
            let mut reel = five_word_reel(seed);
            let mut clock = ManualClock::new();
            reel.set_options(ReelOptions { reel_spins: spins, ..ReelOptions::default() }, &mut clock);
            reel.mount(&mut clock);
            drive(&mut reel, &mut clock, Duration::from_secs(10));
            prop_assert_eq!(reel.phase(), ReelPhase::Settled);
            let expected = reel.order()[spins as usize % reel.len()].clone();
            prop_assert_eq!(reel.settled_label(), expected.as_str());
        }
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let mut items: Vec<u32> = (0..32).collect();
        shuffle_labels(&mut items, &mut SmallRng::seed_from_u64(7));
        let mut sorted = items.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..32).collect::<Vec<_>>());
    }

    // ── phase machine ───────────────────────────────────────────

    #[test]
    fn phase_counts_up_then_settles() {
        let mut phase = ReelPhase::Spinning { tick: 0 };
        for expected in 1..3 {
            phase = phase.advance(3);
            assert_eq!(phase, ReelPhase::Spinning { tick: expected });
        }
        phase = phase.advance(3);
        assert_eq!(phase, ReelPhase::Settled);
        assert_eq!(phase.advance(3), ReelPhase::Settled);
        assert_eq!(ReelPhase::Idle.advance(3), ReelPhase::Idle);
    }

    // ── lifecycle ───────────────────────────────────────────────

    #[test]
    fn tick_is_monotone_and_bounded() {
        let mut reel = five_word_reel(1);
        let mut clock = ManualClock::new();
        reel.mount(&mut clock);
        assert_eq!(reel.tick(), 0);

        let mut last = 0;
        clock.advance(Duration::from_secs(5), |token, c| {
            assert!(reel.on_timer(token, c));
            assert!(reel.tick() >= last);
            assert!(reel.tick() <= DEFAULT_REEL_SPINS);
            last = reel.tick();
        });

        assert_eq!(reel.tick(), DEFAULT_REEL_SPINS);
        assert_eq!(reel.phase(), ReelPhase::Settled);
        assert!(!reel.has_pending_timer());
        assert_eq!(clock.pending(), 0);
        assert_eq!(clock.fired(), u64::from(DEFAULT_REEL_SPINS));
    }

    #[test]
    fn first_firing_waits_base_interval() {
        let mut reel = five_word_reel(2);
        let mut clock = ManualClock::new();
        reel.mount(&mut clock);
        drive(&mut reel, &mut clock, Duration::from_millis(124));
        assert_eq!(reel.tick(), 0);
        drive(&mut reel, &mut clock, Duration::from_millis(1));
        assert_eq!(reel.tick(), 1);
    }

    #[test]
    fn unmount_stops_all_mutation() {
        let mut reel = five_word_reel(3);
        let mut clock = ManualClock::new();
        reel.mount(&mut clock);
        drive(&mut reel, &mut clock, Duration::from_secs(3));
        let fired = clock.fired();

        reel.unmount(&mut clock);
        let tick = reel.tick();
        drive(&mut reel, &mut clock, Duration::from_secs(3));

        assert_eq!(clock.fired(), fired);
        assert_eq!(reel.tick(), tick);
        assert_eq!(reel.phase(), ReelPhase::Idle);
    }

    #[test]
    fn unmount_mid_spin_cancels_pending() {
        let mut reel = five_word_reel(4);
        let mut clock = ManualClock::new();
        reel.mount(&mut clock);
        drive(&mut reel, &mut clock, Duration::from_millis(300));
        assert!(reel.has_pending_timer());
        let tick = reel.tick();

        reel.unmount(&mut clock);
        assert_eq!(clock.pending(), 0);
        drive(&mut reel, &mut clock, Duration::from_secs(5));
        assert_eq!(reel.tick(), tick);
    }

    #[test]
    fn stale_token_is_ignored() {
        let mut reel = five_word_reel(5);
        let mut clock = ManualClock::new();
        reel.mount(&mut clock);
        assert!(!reel.on_timer(TimerToken(9_999), &mut clock));
        assert_eq!(reel.tick(), 0);
    }

    #[test]
    fn zero_spins_settle_immediately() {
        let mut reel = five_word_reel(6);
        let mut clock = ManualClock::new();
        reel.set_options(
            ReelOptions {
                reel_spins: 0,
                ..ReelOptions::default()
            },
            &mut clock,
        );
        reel.mount(&mut clock);
        assert_eq!(reel.phase(), ReelPhase::Settled);
        assert_eq!(clock.pending(), 0);
        assert_eq!(reel.settled_label(), reel.order()[0]);
    }

    #[test]
    fn spring_lands_on_settled_label() {
        let mut reel = five_word_reel(7);
        let mut clock = ManualClock::new();
        reel.mount(&mut clock);
        for _ in 0..1_000 {
            drive(&mut reel, &mut clock, FRAME);
            reel.advance_frame(FRAME);
        }
        assert!(!reel.is_animating());
        assert_eq!(reel.position(), f64::from(DEFAULT_REEL_SPINS));
        assert_eq!(reel.centered_label(), reel.settled_label());
    }

    #[test]
    fn respin_restarts_from_zero() {
        let mut reel = five_word_reel(8);
        let mut clock = ManualClock::new();
        reel.mount(&mut clock);
        drive(&mut reel, &mut clock, Duration::from_secs(5));
        assert_eq!(reel.phase(), ReelPhase::Settled);

        reel.respin(&mut SmallRng::seed_from_u64(9), &mut clock);
        assert_eq!(reel.tick(), 0);
        assert_eq!(reel.position(), 0.0);
        assert_eq!(reel.phase(), ReelPhase::Spinning { tick: 0 });
        assert_eq!(clock.pending(), 1);
    }

    #[test]
    fn custom_speed_cannot_runaway() {
        let mut reel = five_word_reel(10);
        let mut clock = ManualClock::new();
        reel.set_options(
            ReelOptions {
                speed: SpeedCurve::custom(|_| -1.0),
                ..ReelOptions::default()
            },
            &mut clock,
        );
        reel.mount(&mut clock);
        // 10 firings at the 16ms floor need 160ms.
        drive(&mut reel, &mut clock, Duration::from_millis(159));
        assert_eq!(reel.phase(), ReelPhase::Spinning { tick: 9 });
        drive(&mut reel, &mut clock, Duration::from_millis(1));
        assert_eq!(reel.phase(), ReelPhase::Settled);
    }

    #[test]
    fn huge_custom_speed_is_capped() {
        let mut reel = five_word_reel(15);
        let mut clock = ManualClock::new();
        reel.set_options(
            ReelOptions {
                speed: SpeedCurve::custom(|_| 1e30),
                ..ReelOptions::default()
            },
            &mut clock,
        );
        reel.mount(&mut clock);
        drive(&mut reel, &mut clock, MAX_DELAY);
        assert_eq!(reel.tick(), 1);
    }

    #[test]
    fn lowering_spins_mid_spin_restarts_within_bound() {
        let mut reel = five_word_reel(16);
        let mut clock = ManualClock::new();
        reel.mount(&mut clock);
        drive(&mut reel, &mut clock, Duration::from_millis(700));
        assert!(reel.tick() > 3);

        reel.set_options(
            ReelOptions {
                reel_spins: 3,
                ..ReelOptions::default()
            },
            &mut clock,
        );
        assert_eq!(reel.phase(), ReelPhase::Spinning { tick: 0 });
        assert_eq!(clock.pending(), 1);

        clock.advance(Duration::from_secs(5), |token, c| {
            reel.on_timer(token, c);
            assert!(reel.tick() <= 3);
        });
        assert_eq!(reel.phase(), ReelPhase::Settled);
        assert_eq!(reel.tick(), 3);
    }

    #[test]
    fn other_option_changes_keep_progress() {
        let mut reel = five_word_reel(17);
        let mut clock = ManualClock::new();
        reel.mount(&mut clock);
        drive(&mut reel, &mut clock, Duration::from_millis(300));
        let tick = reel.tick();

        reel.set_options(
            ReelOptions {
                direction: Direction::Down,
                size: SizeVariant::Caption,
                ..ReelOptions::default()
            },
            &mut clock,
        );
        assert_eq!(reel.tick(), tick);
        assert_eq!(clock.pending(), 1);
        assert_eq!(reel.container().height, 20);
    }

    #[test]
    fn options_change_before_mount_schedules_nothing() {
        let mut reel = five_word_reel(18);
        let mut clock = ManualClock::new();
        reel.set_options(
            ReelOptions {
                reel_spins: 4,
                ..ReelOptions::default()
            },
            &mut clock,
        );
        assert_eq!(reel.phase(), ReelPhase::Idle);
        assert_eq!(clock.pending(), 0);
    }

    // ── tooltip / rows ──────────────────────────────────────────

    #[test]
    fn tooltip_hidden_when_centered_matches_canonical() {
        let e = entries(&[("en", "House"), ("es", "Casa")]);
        let mut reel = TextReel::new(
            e,
            prefs(&["en", "es"]),
            ReelOptions::default(),
            &mut SmallRng::seed_from_u64(11),
        );
        let house = reel.order().iter().position(|l| l == "House").unwrap();
        let casa = 1 - house;

        reel.spring.snap(house as f64);
        assert_eq!(reel.centered_label(), "House");
        assert_eq!(reel.tooltip(), None);

        reel.spring.snap(casa as f64);
        assert_eq!(reel.centered_label(), "Casa");
        assert_eq!(reel.tooltip(), Some("House"));
    }

    #[test]
    fn single_entry_reel_never_shows_tooltip() {
        let e = entries(&[("en", "House"), ("es", "Casa")]);
        let reel = TextReel::new(
            e,
            LanguagePrefs::default(),
            ReelOptions::default(),
            &mut SmallRng::seed_from_u64(12),
        );
        assert_eq!(reel.order(), ["House".to_string()]);
        assert_eq!(reel.tooltip(), None);
    }

    #[test]
    fn rows_cover_whole_order() {
        let reel = five_word_reel(13);
        let rows: Vec<_> = reel.rows().collect();
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0].offset_px, -4.0);
        assert_eq!(rows[1].offset_px, 56.0 - 4.0);
        assert_eq!(rows[4].offset_px, -56.0 - 4.0);
    }

    #[test]
    fn container_measures_eligible_labels() {
        let reel = five_word_reel(14);
        // "Maison" is the longest label.
        assert_eq!(reel.container().width, 6 * 27 + layout::WIDTH_MARGIN);
        assert_eq!(reel.container().height, 56);
    }
}
