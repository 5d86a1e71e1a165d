use core::fmt;
use std::time::{Duration, Instant};

use nami::{Binding, binding};
use tintui_color::{Color, ColorData, ColorInput, RichColor};
use tracing::{debug, trace};

use crate::{
    debounce::{DEFAULT_DEBOUNCE, Debouncer},
    draft::{Drafts, HslDraft, RgbDraft},
};

/// Why a committing edit was ignored.
///
/// Rejection never mutates state and never reaches the change listener; it is
/// reported only through the returned `Result`, which hosts are free to
/// discard (the observed widget behavior) or surface as an error indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ChangeRejected {
    /// The edit is missing required fields for its declared source.
    #[error("edit is missing required fields for its source")]
    Incomplete,
    /// The edit contains out-of-range or malformed values.
    #[error("edit contains an out-of-range or malformed value")]
    Invalid,
}

/// A keystroke-level edit from a text field.
///
/// `Draft` updates only the matching display snapshot, with no validation;
/// `Commit` (sent on blur or Enter) runs the full committing path.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// A provisional edit: echo the text, validate nothing.
    Draft(ColorData),
    /// A finalizing edit: validate and, if acceptable, commit.
    Commit(ColorData),
}

/// One immutable view of the picker, published after every mutation.
///
/// Views subscribe to the snapshot binding and re-render from whichever
/// snapshot is current; there is no other render trigger.
#[derive(Debug, Clone, PartialEq)]
pub struct PickerSnapshot {
    /// The committed color in every representation.
    pub color: RichColor,
    /// The three draft groups as currently displayed.
    pub drafts: Drafts,
}

type ChangeListener = Box<dyn FnMut(RichColor)>;

/// The color picker's state machine.
///
/// Owns the last committed color and the three draft snapshots, decides when
/// an in-progress edit becomes a committed change, and debounces the
/// external notification so pointer drags and keystroke bursts coalesce.
///
/// All methods are synchronous; the only asynchrony is the debounce
/// deadline, which the host drives by calling [`tick`](Self::tick) with the
/// current instant. Dropping the picker drops any pending notification.
pub struct ColorPicker {
    committed: Color,
    drafts: Drafts,
    disable_alpha: bool,
    debounce: Debouncer<RichColor>,
    snapshot: Binding<PickerSnapshot>,
    listener: Option<ChangeListener>,
}

impl fmt::Debug for ColorPicker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColorPicker")
            .field("committed", &self.committed)
            .field("drafts", &self.drafts)
            .field("disable_alpha", &self.disable_alpha)
            .field("debounce", &self.debounce)
            .finish_non_exhaustive()
    }
}

impl Default for ColorPicker {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorPicker {
    /// Creates a picker showing the stock blue.
    #[must_use]
    pub fn new() -> Self {
        Self::with_initial(Color::default())
    }

    /// Creates a picker from an initial color in any representation.
    #[must_use]
    pub fn with_initial(initial: impl Into<ColorInput>) -> Self {
        let committed = Color::from_input(&initial.into(), None);
        let drafts = Drafts::synced_to(&committed);
        let snapshot = binding(PickerSnapshot {
            color: committed.resolve(),
            drafts: drafts.clone(),
        });

        Self {
            committed,
            drafts,
            disable_alpha: false,
            debounce: Debouncer::new(DEFAULT_DEBOUNCE),
            snapshot,
            listener: None,
        }
    }

    /// Excludes the alpha channel: committed state, drafts, and notification
    /// payloads all report fully opaque, regardless of what edits supply.
    #[must_use]
    pub fn disable_alpha(mut self) -> Self {
        self.disable_alpha = true;
        self.committed = self.committed.with_alpha(1.0);
        self.drafts.resync(&self.committed);
        self.publish();
        self
    }

    /// Overrides the notification debounce window.
    #[must_use]
    pub fn debounce_delay(mut self, delay: Duration) -> Self {
        self.debounce = Debouncer::new(delay);
        self
    }

    /// Registers the listener invoked with the committed color once a burst
    /// of commits goes quiet.
    #[must_use]
    pub fn on_change_complete(mut self, listener: impl FnMut(RichColor) + 'static) -> Self {
        self.listener = Some(Box::new(listener));
        self
    }

    /// Applies a committing edit: a slider drag, a pad drag, or a completed
    /// text entry. This is the only path that changes the committed color.
    ///
    /// On success the committed color is replaced, all three drafts are
    /// resynchronized to it, a snapshot is published, and the debounced
    /// notification is (re)scheduled from `now`.
    ///
    /// # Errors
    ///
    /// [`ChangeRejected::Incomplete`] when required fields are missing,
    /// [`ChangeRejected::Invalid`] for out-of-range or malformed values. A
    /// rejected edit changes nothing and notifies nobody.
    pub fn handle_change(&mut self, data: &ColorData, now: Instant) -> Result<(), ChangeRejected> {
        if !data.is_complete() {
            debug!(source = ?data.source(), "commit ignored: incomplete input");
            return Err(ChangeRejected::Incomplete);
        }
        if !data.is_valid() {
            debug!(source = ?data.source(), "commit ignored: invalid value");
            return Err(ChangeRejected::Invalid);
        }
        let input = data.to_input().ok_or(ChangeRejected::Invalid)?;

        // A desaturated edit keeps the hue it had: the edit's own hue if it
        // pins one, the committed hue otherwise.
        let fallback = data
            .hue()
            .unwrap_or_else(|| self.committed.hsv().hue);
        let mut color = Color::from_input(&input, Some(fallback));
        if self.disable_alpha {
            color = color.with_alpha(1.0);
        }

        self.committed = color;
        self.drafts.resync(&color);

        let rich = color.resolve();
        trace!(hex = %rich.hex, "color committed");
        self.debounce.schedule(rich, now);
        self.publish();
        Ok(())
    }

    /// Applies a keystroke-level edit from a text field.
    ///
    /// Draft edits overwrite only the matching display group, verbatim and
    /// unvalidated, so intermediate states like `"a3"` or `"300"` stay on
    /// screen. Commit edits delegate to [`handle_change`](Self::handle_change).
    ///
    /// # Errors
    ///
    /// Only commit edits can fail; see [`handle_change`](Self::handle_change).
    pub fn handle_input_change(
        &mut self,
        event: InputEvent,
        now: Instant,
    ) -> Result<(), ChangeRejected> {
        match event {
            InputEvent::Commit(data) => self.handle_change(&data, now),
            InputEvent::Draft(data) => {
                self.apply_draft(data);
                Ok(())
            }
        }
    }

    fn apply_draft(&mut self, data: ColorData) {
        match data {
            ColorData::Hex { hex } => self.drafts.hex = hex.to_lowercase(),
            ColorData::Rgb { r, g, b, a } => self.drafts.rgb = RgbDraft { r, g, b, a },
            ColorData::Hsl { h, s, l, a } => self.drafts.hsl = HslDraft { h, s, l, a },
            ColorData::Hsv { .. } => {
                debug!("draft ignored: the saturation pad has no text group");
                return;
            }
        }
        self.publish();
    }

    /// Fires the debounced change listener if the quiescent window has
    /// elapsed since the last commit, returning the delivered color.
    ///
    /// The host pumps this from its event loop. Trailing-edge only: a burst
    /// of commits delivers a single call carrying the latest color.
    pub fn tick(&mut self, now: Instant) -> Option<RichColor> {
        let rich = self.debounce.poll(now)?;
        trace!(hex = %rich.hex, "change notification delivered");
        if let Some(listener) = self.listener.as_mut() {
            listener(rich.clone());
        }
        Some(rich)
    }

    /// The subscription surface: views watch this binding and re-render from
    /// each published snapshot.
    #[must_use]
    pub fn snapshots(&self) -> Binding<PickerSnapshot> {
        self.snapshot.clone()
    }

    /// The last committed color.
    #[must_use]
    pub const fn committed(&self) -> Color {
        self.committed
    }

    /// The last committed color in every representation.
    #[must_use]
    pub fn rich(&self) -> RichColor {
        self.committed.resolve()
    }

    /// The current draft snapshots.
    #[must_use]
    pub const fn drafts(&self) -> &Drafts {
        &self.drafts
    }

    /// Whether the alpha channel is excluded.
    #[must_use]
    pub const fn alpha_disabled(&self) -> bool {
        self.disable_alpha
    }

    /// Whether a notification is waiting for its quiescent window.
    #[must_use]
    pub const fn notification_pending(&self) -> bool {
        self.debounce.is_pending()
    }

    fn publish(&self) {
        self.snapshot.set(PickerSnapshot {
            color: self.committed.resolve(),
            drafts: self.drafts.clone(),
        });
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    use nami::Signal;
    use tintui_color::Field;

    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn commit_updates_color_and_resyncs_drafts() {
        let mut picker = ColorPicker::new();
        let t0 = Instant::now();

        picker
            .handle_change(&ColorData::hex("#FF8800"), t0)
            .unwrap();

        assert_eq!(picker.committed().hex(), "ff8800");
        assert_eq!(picker.drafts().hex, "ff8800");
        assert_eq!(picker.drafts().rgb.r, Field::Number(255.0));
        assert_eq!(picker.drafts().rgb.g, Field::Number(136.0));
        assert_eq!(picker.drafts().rgb.b, Field::Number(0.0));
        assert_eq!(picker.drafts().hsl.h, Field::Number(32.0));
    }

    #[test]
    fn desaturating_keeps_the_committed_hue() {
        let mut picker = ColorPicker::new();
        let t0 = Instant::now();

        picker
            .handle_change(&ColorData::hsl(200.0, 50.0, 50.0), t0)
            .unwrap();
        picker
            .handle_change(&ColorData::hsl(0.0, 0.0, 50.0), t0 + ms(1))
            .unwrap();

        let hsv = picker.committed().hsv();
        assert!((hsv.hue - 200.0).abs() <= 1.0, "hue {}", hsv.hue);
        assert!(hsv.saturation.abs() < f32::EPSILON);
    }

    #[test]
    fn explicit_hue_pin_wins_over_the_committed_hue() {
        let mut picker = ColorPicker::new();
        let t0 = Instant::now();

        picker
            .handle_change(&ColorData::hsl(200.0, 50.0, 50.0), t0)
            .unwrap();
        picker
            .handle_change(&ColorData::hsl(120.0, 0.0, 50.0), t0 + ms(1))
            .unwrap();

        let hsv = picker.committed().hsv();
        assert!((hsv.hue - 120.0).abs() <= 1.0, "hue {}", hsv.hue);
    }

    #[test]
    fn draft_edit_touches_only_its_group() {
        let mut picker = ColorPicker::new();
        let t0 = Instant::now();
        let before_color = picker.committed();
        let before_rgb = picker.drafts().rgb.clone();
        let before_hsl = picker.drafts().hsl.clone();

        picker
            .handle_input_change(InputEvent::Draft(ColorData::hex("zz")), t0)
            .unwrap();

        assert_eq!(picker.drafts().hex, "zz");
        assert_eq!(picker.committed(), before_color);
        assert_eq!(picker.drafts().rgb, before_rgb);
        assert_eq!(picker.drafts().hsl, before_hsl);
        assert!(!picker.notification_pending());
    }

    #[test]
    fn rejected_commit_is_a_noop() {
        let fired = Rc::new(RefCell::new(Vec::new()));
        let mut picker = ColorPicker::new().on_change_complete({
            let fired = Rc::clone(&fired);
            move |color| fired.borrow_mut().push(color)
        });
        let t0 = Instant::now();
        let before = picker.committed();

        assert_eq!(
            picker.handle_change(&ColorData::hex("zz"), t0),
            Err(ChangeRejected::Invalid)
        );
        assert_eq!(
            picker.handle_change(&ColorData::rgb(Field::Empty, 0, 0), t0),
            Err(ChangeRejected::Incomplete)
        );
        assert_eq!(
            picker.handle_change(&ColorData::rgb(Field::from("300"), 0, 0), t0),
            Err(ChangeRejected::Invalid)
        );

        assert_eq!(picker.committed(), before);
        assert_eq!(picker.tick(t0 + ms(500)), None);
        assert!(fired.borrow().is_empty());
    }

    #[test]
    fn burst_of_commits_notifies_once_with_the_latest() {
        let fired = Rc::new(RefCell::new(Vec::new()));
        let mut picker = ColorPicker::new().on_change_complete({
            let fired = Rc::clone(&fired);
            move |color: RichColor| fired.borrow_mut().push(color.hex)
        });
        let t0 = Instant::now();

        picker.handle_change(&ColorData::hex("ff0000"), t0).unwrap();
        picker
            .handle_change(&ColorData::hex("00ff00"), t0 + ms(10))
            .unwrap();
        picker
            .handle_change(&ColorData::hex("0000ff"), t0 + ms(20))
            .unwrap();

        // Quiet window counts from the last commit.
        assert_eq!(picker.tick(t0 + ms(119)), None);
        let delivered = picker.tick(t0 + ms(120)).expect("due");
        assert_eq!(delivered.hex, "0000ff");
        assert_eq!(picker.tick(t0 + ms(500)), None);
        assert_eq!(&*fired.borrow(), &["0000ff".to_string()]);
    }

    #[test]
    fn separated_commits_each_notify() {
        let fired = Rc::new(RefCell::new(Vec::new()));
        let mut picker = ColorPicker::new().on_change_complete({
            let fired = Rc::clone(&fired);
            move |color: RichColor| fired.borrow_mut().push(color.hex)
        });
        let t0 = Instant::now();

        picker.handle_change(&ColorData::hex("ff0000"), t0).unwrap();
        picker.tick(t0 + ms(100));
        picker
            .handle_change(&ColorData::hex("00ff00"), t0 + ms(300))
            .unwrap();
        picker.tick(t0 + ms(400));

        assert_eq!(
            &*fired.borrow(),
            &["ff0000".to_string(), "00ff00".to_string()]
        );
    }

    #[test]
    fn rejected_commit_leaves_a_pending_notification_alone() {
        let mut picker = ColorPicker::new();
        let t0 = Instant::now();

        picker.handle_change(&ColorData::hex("ff0000"), t0).unwrap();
        assert_eq!(
            picker.handle_change(&ColorData::hex("zz"), t0 + ms(10)),
            Err(ChangeRejected::Invalid)
        );

        let delivered = picker.tick(t0 + ms(100)).expect("due");
        assert_eq!(delivered.hex, "ff0000");
    }

    #[test]
    fn disable_alpha_reports_opaque_everywhere() {
        let fired = Rc::new(RefCell::new(Vec::new()));
        let mut picker = ColorPicker::new().disable_alpha().on_change_complete({
            let fired = Rc::clone(&fired);
            move |color| fired.borrow_mut().push(color)
        });
        let t0 = Instant::now();

        picker
            .handle_change(&ColorData::rgb(10, 20, 30).with_alpha(0.3), t0)
            .unwrap();

        let rich = picker.rich();
        assert_eq!(rich.rgb.alpha, 1.0);
        assert_eq!(rich.hsl.alpha, 1.0);
        assert_eq!(rich.hsv.alpha, 1.0);
        assert_eq!(picker.drafts().rgb.a, Field::Number(1.0));

        picker.tick(t0 + ms(100));
        assert_eq!(fired.borrow().len(), 1);
        assert_eq!(fired.borrow()[0].hsv.alpha, 1.0);
    }

    #[test]
    fn alpha_passes_through_when_enabled() {
        let mut picker = ColorPicker::new();
        let t0 = Instant::now();

        picker
            .handle_change(&ColorData::rgb(10, 20, 30).with_alpha(0.3), t0)
            .unwrap();

        assert!((picker.committed().alpha() - 0.3).abs() < 1e-6);
    }

    #[test]
    fn every_mutation_publishes_a_snapshot() {
        let mut picker = ColorPicker::new();
        let t0 = Instant::now();

        let seen = Rc::new(RefCell::new(Vec::new()));
        let snapshots = picker.snapshots();
        let _guard = snapshots.watch({
            let seen = Rc::clone(&seen);
            move |ctx| seen.borrow_mut().push(ctx.into_value())
        });

        picker.handle_change(&ColorData::hex("ff0000"), t0).unwrap();
        picker
            .handle_input_change(InputEvent::Draft(ColorData::hex("ff00")), t0 + ms(1))
            .unwrap();

        let seen = seen.borrow();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0].color.hex, "ff0000");
        assert_eq!(seen[0].drafts.hex, "ff0000");
        // The draft edit echoes the text but keeps the committed color.
        assert_eq!(seen[1].color.hex, "ff0000");
        assert_eq!(seen[1].drafts.hex, "ff00");
    }

    #[test]
    fn commit_events_delegate_to_the_committing_path() {
        let mut picker = ColorPicker::new();
        let t0 = Instant::now();

        picker
            .handle_input_change(InputEvent::Commit(ColorData::hex("00ff00")), t0)
            .unwrap();
        assert_eq!(picker.committed().hex(), "00ff00");

        assert_eq!(
            picker.handle_input_change(InputEvent::Commit(ColorData::hex("nope")), t0),
            Err(ChangeRejected::Invalid)
        );
        assert_eq!(picker.committed().hex(), "00ff00");
    }

    #[test]
    fn pad_drafts_are_ignored() {
        let mut picker = ColorPicker::new();
        let t0 = Instant::now();
        let before = picker.drafts().clone();

        picker
            .handle_input_change(
                InputEvent::Draft(ColorData::hsv(10.0, 20.0, 30.0)),
                t0,
            )
            .unwrap();

        assert_eq!(picker.drafts(), &before);
    }

    #[test]
    fn initial_color_accepts_any_representation() {
        let picker = ColorPicker::with_initial("#ff8800");
        assert_eq!(picker.committed().hex(), "ff8800");

        let picker = ColorPicker::with_initial(tintui_color::Rgba::opaque(0, 0x71, 0xa1));
        assert_eq!(picker.committed().hex(), "0071a1");
    }

    #[test]
    fn custom_debounce_delay_is_honored() {
        let mut picker = ColorPicker::new().debounce_delay(ms(10));
        let t0 = Instant::now();

        picker.handle_change(&ColorData::hex("ff0000"), t0).unwrap();
        assert_eq!(picker.tick(t0 + ms(9)), None);
        assert!(picker.tick(t0 + ms(10)).is_some());
    }
}
