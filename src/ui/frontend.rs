//! Per-frame dispatcher tying the screen stack, navigator, browser and
//! settings together.

use std::borrow::Cow;
use std::fmt;
use std::path::Path;

use crate::browser::{BrowseOutcome, DirectorySource, FileBrowser, FsDirectory};
use crate::config::FrontendConfig;
use crate::input::Buttons;
use crate::render::{format_clock, Bitmap, Clock, FontSize, Rect, Surface, SystemClock};
use crate::settings::{SettingsError, SettingsModel};
use crate::ui::layout;
use crate::ui::mvi::Reducer;
use crate::ui::nav::{NavIntent, NavReducer, NavState};
use crate::ui::result::UiResult;
use crate::ui::stack::{Screen, ScreenStack, StackIntent, StackReducer};
use crate::ui::theme;
use crate::ui::toast::StatusToast;

/// Entries of the pause menu, in display order.
pub const PAUSE_MENU: [&str; 4] = ["Continue", "Load Savestate", "Write Savestate", "Exit"];

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Set the status message with `format!` syntax.
///
/// ```ignore
/// status!(frontend, "Saved slot {}", 2);
/// ```
#[macro_export]
macro_rules! status {
    ($frontend:expr, $($arg:tt)*) => {
        $frontend.status(format_args!($($arg)*))
    };
}

/// Owns all navigation state of the front-end.
///
/// The embedding application calls [`Frontend::frame`] once per rendered
/// frame and reacts to the returned [`UiResult`], usually by pushing or
/// popping screens. Dropping the front-end flushes changed settings.
pub struct Frontend {
    stack: ScreenStack,
    nav: NavState,
    browser: FileBrowser,
    settings: SettingsModel,
    toast: StatusToast,
    clock: Box<dyn Clock>,
    remap_image: Option<Bitmap>,
    mascot: Option<Bitmap>,
    show_mascot: bool,
}

impl Frontend {
    /// Front-end on the host filesystem and local clock.
    pub fn from_config(config: &FrontendConfig) -> Self {
        Self::new(
            config,
            Box::new(FsDirectory),
            Box::new(SystemClock::new(config.clock_offset_hours)),
        )
    }

    /// Lists the start directory, loads the bitmaps and starts on the file
    /// browser. Missing bitmaps are logged and left out of the frame.
    pub fn new(
        config: &FrontendConfig,
        source: Box<dyn DirectorySource>,
        clock: Box<dyn Clock>,
    ) -> Self {
        let mut frontend = Self {
            stack: ScreenStack::default(),
            nav: NavState::default(),
            browser: FileBrowser::new(config.start_directory.clone(), source),
            settings: SettingsModel::new(config.settings_path.clone()),
            toast: StatusToast::new(config.toast_frames),
            clock,
            remap_image: load_asset(&config.assets.remap_image),
            mascot: load_asset(&config.assets.mascot_image),
            show_mascot: config.show_mascot,
        };
        frontend.push_screen(Screen::FileSelect);
        frontend
    }

    pub fn settings(&self) -> &SettingsModel {
        &self.settings
    }

    /// Registration access; see [`SettingsModel`] for the required order.
    pub fn settings_mut(&mut self) -> &mut SettingsModel {
        &mut self.settings
    }

    /// Close the persisted partition and apply stored values.
    ///
    /// Only a registration-order error is returned; an unreadable settings
    /// file is logged and the defaults are kept.
    pub fn finalize_and_load_settings(&mut self) -> Result<(), SettingsError> {
        self.settings.finalize_meta_boundary()?;
        if let Err(e) = self.settings.load_persisted() {
            tracing::warn!("Using default settings: {}", e);
        }
        Ok(())
    }

    /// Write changed settings. Failures are logged, never fatal.
    pub fn save_settings(&mut self) -> bool {
        match self.settings.save_persisted() {
            Ok(written) => written,
            Err(e) => {
                tracing::warn!("Settings not saved: {}", e);
                false
            }
        }
    }

    pub fn browser(&self) -> &FileBrowser {
        &self.browser
    }

    pub fn selected_file(&self) -> Option<&str> {
        self.browser.selected_file()
    }

    pub fn nav(&self) -> NavState {
        self.nav
    }

    pub fn stack(&self) -> &ScreenStack {
        &self.stack
    }

    pub fn toast(&self) -> &StatusToast {
        &self.toast
    }

    /// Show `args` as the status message, replacing any previous one.
    pub fn status(&mut self, args: fmt::Arguments<'_>) {
        self.toast.show(args);
    }

    /// Activate `screen`. Dropped with a warning when the stack is full.
    /// Navigation restarts at the top either way.
    pub fn push_screen(&mut self, screen: Screen) {
        if self.stack.is_full() {
            tracing::warn!("Screen stack full, dropping push of {:?}", screen);
        } else {
            tracing::debug!("Push screen {:?}", screen);
        }
        dispatch_mvi!(self, stack, StackReducer, StackIntent::Push(screen));
        dispatch_mvi!(self, nav, NavReducer, NavIntent::Reset);
    }

    /// Return to the previous screen. Navigation restarts at the top.
    pub fn pop_screen(&mut self) {
        if self.stack.is_empty() {
            tracing::warn!("Pop on empty screen stack");
        } else {
            tracing::debug!("Pop screen {:?}", self.stack.current());
        }
        dispatch_mvi!(self, stack, StackReducer, StackIntent::Pop);
        dispatch_mvi!(self, nav, NavReducer, NavIntent::Reset);
    }

    /// Active screen. An empty stack is reported and treated as the file
    /// browser.
    pub fn current_screen(&self) -> Screen {
        match self.stack.current() {
            Some(screen) => screen,
            None => {
                tracing::warn!("Screen queried on empty stack, falling back to file select");
                Screen::FileSelect
            }
        }
    }

    /// Run one frame: route `buttons`, draw onto `surface` and report what
    /// the application should do.
    pub fn frame(&mut self, surface: &mut dyn Surface, buttons: Buttons) -> UiResult {
        let screen = self.current_screen();
        let result = if screen.has_list() {
            self.list_frame(screen, surface, buttons)
        } else {
            if screen == Screen::RemapButtons {
                self.draw_remap(surface);
            }
            UiResult::None
        };
        // Fades on every frame, including frames that return a result.
        self.draw_toast(surface);
        result
    }

    fn list_frame(&mut self, screen: Screen, surface: &mut dyn Surface, buttons: Buttons) -> UiResult {
        if buttons.quit() {
            return UiResult::Exit;
        }

        let delta = buttons.nav_delta();
        if delta != 0 {
            let item_count = self.item_count(screen);
            dispatch_mvi!(self, nav, NavReducer, NavIntent::Advance { delta, item_count });
        }

        self.draw_list(screen, surface);
        self.draw_chrome(screen, surface);

        if buttons.confirm() || buttons.cancel() {
            return self.activate(screen, buttons.confirm(), buttons.cancel());
        }
        UiResult::None
    }

    fn activate(&mut self, screen: Screen, confirm: bool, cancel: bool) -> UiResult {
        match screen {
            Screen::FileSelect => {
                if cancel {
                    let item_count = self.item_count(screen);
                    dispatch_mvi!(self, nav, NavReducer, NavIntent::Jump { index: 0, item_count });
                }
                // The cursor already sits on the parent entry after a cancel.
                match self.browser.activate(self.nav.cursor) {
                    BrowseOutcome::EnteredDirectory => {
                        dispatch_mvi!(self, nav, NavReducer, NavIntent::Reset);
                        UiResult::None
                    }
                    BrowseOutcome::FileSelected => UiResult::FileSelected,
                    BrowseOutcome::Nothing => UiResult::None,
                }
            }
            // Confirm wins when both are pressed.
            Screen::Settings => self.settings.activate(self.nav.cursor, cancel && !confirm),
            _ if cancel => UiResult::Unpause,
            _ => match self.nav.cursor {
                0 => UiResult::Unpause,
                1 => UiResult::LoadState,
                2 => UiResult::SaveState,
                3 => UiResult::Close,
                _ => UiResult::None,
            },
        }
    }

    fn item_count(&self, screen: Screen) -> usize {
        match screen {
            Screen::FileSelect => self.browser.entries().len(),
            Screen::Settings => self.settings.len(),
            Screen::Paused => PAUSE_MENU.len(),
            Screen::RemapButtons | Screen::Running => 0,
        }
    }

    fn item(&self, screen: Screen, index: usize) -> Option<Cow<'_, str>> {
        match screen {
            Screen::FileSelect => self.browser.entries().get(index).map(Cow::Borrowed),
            Screen::Settings => self.settings.label(index).map(Cow::Owned),
            Screen::Paused => PAUSE_MENU.get(index).copied().map(Cow::Borrowed),
            Screen::RemapButtons | Screen::Running => None,
        }
    }

    fn draw_list(&self, screen: Screen, surface: &mut dyn Surface) {
        let (width, height) = (surface.width(), surface.height());
        surface.fill_rect(Rect::new(0, 0, width, height), theme::BACKGROUND);

        let visible = self.nav.visible_range(self.item_count(screen));
        for (row, index) in visible.enumerate() {
            let Some(text) = self.item(screen, index) else {
                break;
            };
            let (_, text_height) = surface.text_size(FontSize::Medium, &text);
            let Some(y) = layout::row_text_y(row as u32, text_height, height) else {
                break;
            };

            let color = if self.nav.is_highlighted(index) {
                surface.fill_rect(layout::highlight_rect(row as u32, width), theme::HIGHLIGHT_BAR);
                theme::HIGHLIGHT_TEXT
            } else {
                theme::TEXT
            };
            surface.draw_text(FontSize::Medium, layout::TEXT_LEFT, y, color, &text);
        }
    }

    fn draw_chrome(&self, screen: Screen, surface: &mut dyn Surface) {
        let (width, height) = (surface.width(), surface.height());

        let (clock_x, clock_y) = layout::clock_position(width);
        let time = format_clock(self.clock.as_ref());
        surface.draw_text(FontSize::Large, clock_x, clock_y, theme::TEXT, &time);

        surface.fill_rect(layout::separator_rect(width, height), theme::SEPARATOR);

        if screen == Screen::FileSelect {
            surface.draw_text(
                FontSize::Small,
                layout::TEXT_LEFT,
                layout::footer_text_y(height),
                theme::TEXT,
                self.browser.current_directory(),
            );
        }

        if let Some(mascot) = self.mascot.as_ref().filter(|_| self.show_mascot) {
            let (x, y) = layout::mascot_position(width, height);
            surface.draw_bitmap(mascot, x, y);
        }
    }

    fn draw_remap(&self, surface: &mut dyn Surface) {
        match &self.remap_image {
            Some(bitmap) => surface.draw_bitmap(bitmap, 0, 0),
            None => {
                let (width, height) = (surface.width(), surface.height());
                surface.fill_rect(Rect::new(0, 0, width, height), theme::BACKGROUND);
            }
        }
    }

    fn draw_toast(&mut self, surface: &mut dyn Surface) {
        if !self.toast.is_visible() {
            return;
        }
        let y = layout::toast_y(surface.height());
        let color = theme::TEXT.with_alpha(self.toast.alpha());
        surface.draw_text(FontSize::Small, layout::TEXT_LEFT, y, color, self.toast.message());
        self.toast.tick();
    }
}

impl Drop for Frontend {
    fn drop(&mut self) {
        self.save_settings();
    }
}

fn load_asset(path: &Path) -> Option<Bitmap> {
    match Bitmap::load(path) {
        Ok(bitmap) => Some(bitmap),
        Err(e) => {
            tracing::warn!("{}", e);
            None
        }
    }
}
