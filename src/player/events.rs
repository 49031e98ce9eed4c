//! Event vocabulary and the subscription table.
//!
//! Every binding between an event source and a controller action lives in
//! one [`Subscriptions`] table built at initialization. Hosts translate
//! their native input into [`UiEvent`]s and the controller looks the
//! actions up here, so a binding can never be registered twice and tests
//! can remove individual bindings.

use crossterm::event::KeyCode;

/// Lifecycle notifications emitted by the media surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaEvent {
    /// Duration became known
    LoadedMetadata,
    /// Current time advanced
    TimeUpdate,
    /// Playback actually started
    Play,
    /// Playback actually paused
    Pause,
    /// Reached the end of the media
    Ended,
    /// Stalled waiting for data
    Waiting,
    /// Enough data buffered to play to the end
    CanPlayThrough,
}

/// Element an event is dispatched on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    /// The media element itself (lifecycle events, click/touch on the video)
    Media,
    PlayPauseButton,
    BigPlayButton,
    ProgressBar,
    VolumeButton,
    VolumeSlider,
    SpeedButton,
    FullscreenButton,
    RewindButton,
    ForwardButton,
    SettingsButton,
    SettingsClose,
    /// The settings panel's backdrop (outside its content)
    SettingsBackdrop,
    QualitySelect,
    SpeedSelect,
    SubtitleSelect,
    /// Global listeners (pointer tracking, keyboard)
    Document,
}

/// Kind of event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Media(MediaEvent),
    Click,
    Touch,
    PointerDown,
    PointerMove,
    PointerUp,
    /// Continuous value input (slider)
    Input,
    /// Discrete value change (selectors)
    Change,
    KeyDown,
}

/// Controller reaction bound to an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    OnLoadedMetadata,
    OnTimeUpdate,
    OnPlay,
    OnPause,
    OnEnded,
    ShowBuffering,
    HideBuffering,
    TogglePlay,
    Seek,
    StartSeekDrag,
    ContinueSeekDrag,
    EndSeekDrag,
    ToggleMute,
    SetVolume,
    CycleSpeed,
    ToggleFullscreen,
    Rewind,
    Forward,
    ShowSettings,
    HideSettings,
    ChangeQuality,
    ChangeSpeed,
    ChangeSubtitles,
    HandleKeyboard,
    ShowControls,
}

/// Payload carried alongside an event.
#[derive(Debug, Clone, PartialEq)]
pub enum EventDetail {
    None,
    /// Pointer position as a fraction of the progress bar width.
    /// `None` when the pointer is not over a measurable bar.
    Pointer(Option<f64>),
    /// Slider level in `[0, 100]`
    Level(f64),
    /// Selected option value
    Value(String),
    Key(KeyCode),
}

/// A single input or media event as seen by the controller.
#[derive(Debug, Clone, PartialEq)]
pub struct UiEvent {
    pub target: Target,
    pub kind: EventKind,
    pub detail: EventDetail,
}

impl UiEvent {
    pub fn new(target: Target, kind: EventKind, detail: EventDetail) -> Self {
        Self {
            target,
            kind,
            detail,
        }
    }

    pub fn media(event: MediaEvent) -> Self {
        Self::new(Target::Media, EventKind::Media(event), EventDetail::None)
    }

    pub fn click(target: Target) -> Self {
        Self::new(target, EventKind::Click, EventDetail::None)
    }

    /// Click on the progress bar at `fraction` of its width.
    pub fn progress_click(fraction: f64) -> Self {
        Self::new(
            Target::ProgressBar,
            EventKind::Click,
            EventDetail::Pointer(Some(fraction)),
        )
    }

    /// Button press on the progress bar at `fraction` of its width.
    pub fn progress_press(fraction: f64) -> Self {
        Self::new(
            Target::ProgressBar,
            EventKind::PointerDown,
            EventDetail::Pointer(Some(fraction)),
        )
    }

    /// Global pointer movement; `fraction` is relative to the progress bar
    /// even when the pointer is outside it.
    pub fn pointer_move(fraction: Option<f64>) -> Self {
        Self::new(
            Target::Document,
            EventKind::PointerMove,
            EventDetail::Pointer(fraction),
        )
    }

    pub fn pointer_up() -> Self {
        Self::new(Target::Document, EventKind::PointerUp, EventDetail::None)
    }

    pub fn volume_input(level: f64) -> Self {
        Self::new(Target::VolumeSlider, EventKind::Input, EventDetail::Level(level))
    }

    pub fn select(target: Target, value: impl Into<String>) -> Self {
        Self::new(target, EventKind::Change, EventDetail::Value(value.into()))
    }

    pub fn key(code: KeyCode) -> Self {
        Self::new(Target::Document, EventKind::KeyDown, EventDetail::Key(code))
    }

    pub fn fraction(&self) -> Option<f64> {
        match self.detail {
            EventDetail::Pointer(fraction) => fraction,
            _ => None,
        }
    }
}

/// Handle returned by [`Subscriptions::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(usize);

#[derive(Debug, Clone)]
struct Subscription {
    id: SubscriptionId,
    target: Target,
    kind: EventKind,
    action: Action,
}

/// Ordered `(target, kind) -> action` table.
#[derive(Debug, Clone, Default)]
pub struct Subscriptions {
    entries: Vec<Subscription>,
    next_id: usize,
}

impl Subscriptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Table with every binding the player page needs.
    pub fn standard() -> Self {
        use Action as A;
        use EventKind as K;
        use Target as T;

        let bindings: &[(Target, EventKind, Action)] = &[
            // Media lifecycle
            (T::Media, K::Media(MediaEvent::LoadedMetadata), A::OnLoadedMetadata),
            (T::Media, K::Media(MediaEvent::TimeUpdate), A::OnTimeUpdate),
            (T::Media, K::Media(MediaEvent::Play), A::OnPlay),
            (T::Media, K::Media(MediaEvent::Pause), A::OnPause),
            (T::Media, K::Media(MediaEvent::Waiting), A::ShowBuffering),
            (T::Media, K::Media(MediaEvent::CanPlayThrough), A::HideBuffering),
            (T::Media, K::Media(MediaEvent::Ended), A::OnEnded),
            // Transport
            (T::PlayPauseButton, K::Click, A::TogglePlay),
            (T::BigPlayButton, K::Click, A::TogglePlay),
            (T::Media, K::Click, A::TogglePlay),
            (T::Media, K::Touch, A::TogglePlay),
            // Seeking
            (T::ProgressBar, K::Click, A::Seek),
            (T::ProgressBar, K::PointerDown, A::StartSeekDrag),
            (T::Document, K::PointerMove, A::ContinueSeekDrag),
            (T::Document, K::PointerUp, A::EndSeekDrag),
            // Audio and speed
            (T::VolumeButton, K::Click, A::ToggleMute),
            (T::VolumeSlider, K::Input, A::SetVolume),
            (T::SpeedButton, K::Click, A::CycleSpeed),
            (T::FullscreenButton, K::Click, A::ToggleFullscreen),
            (T::RewindButton, K::Click, A::Rewind),
            (T::ForwardButton, K::Click, A::Forward),
            // Settings panel
            (T::SettingsButton, K::Click, A::ShowSettings),
            (T::SettingsClose, K::Click, A::HideSettings),
            (T::SettingsBackdrop, K::Click, A::HideSettings),
            (T::QualitySelect, K::Change, A::ChangeQuality),
            (T::SpeedSelect, K::Change, A::ChangeSpeed),
            (T::SubtitleSelect, K::Change, A::ChangeSubtitles),
            // Global
            (T::Document, K::KeyDown, A::HandleKeyboard),
            (T::Document, K::PointerMove, A::ShowControls),
        ];

        let mut table = Self::new();
        for &(target, kind, action) in bindings {
            table.subscribe(target, kind, action);
        }
        table
    }

    /// Bind `action` to `(target, kind)`.
    ///
    /// Binding the same triple twice returns the existing id instead of
    /// adding a second entry.
    pub fn subscribe(&mut self, target: Target, kind: EventKind, action: Action) -> SubscriptionId {
        if let Some(existing) = self
            .entries
            .iter()
            .find(|s| s.target == target && s.kind == kind && s.action == action)
        {
            return existing.id;
        }

        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push(Subscription {
            id,
            target,
            kind,
            action,
        });
        id
    }

    /// Remove a binding. Returns false if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|s| s.id != id);
        self.entries.len() != before
    }

    /// Find the id of an existing binding.
    pub fn find(&self, target: Target, kind: EventKind, action: Action) -> Option<SubscriptionId> {
        self.entries
            .iter()
            .find(|s| s.target == target && s.kind == kind && s.action == action)
            .map(|s| s.id)
    }

    /// Actions bound to `(target, kind)`, in registration order.
    pub fn actions_for(&self, target: Target, kind: EventKind) -> impl Iterator<Item = Action> + '_ {
        self.entries
            .iter()
            .filter(move |s| s.target == target && s.kind == kind)
            .map(|s| s.action)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
