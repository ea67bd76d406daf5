//! Windows, screens and tags, and everything derived from them.
use crate::config::Config;
use crate::display_action::DisplayAction;
use crate::models::{
    BBox, Color, ExtendedWindow, Handle, Screen, ScreenId, Strut, Tags, WindowHandle, WindowState,
};
use crate::signal::Signals;
use std::collections::VecDeque;

#[derive(Debug)]
pub struct State<H: Handle> {
    pub(crate) screens: Vec<Screen>,
    pub(crate) windows: Vec<ExtendedWindow<H>>,
    pub(crate) tags: Tags<H>, // List of all known tags.
    pub(crate) signals: Signals<H>,
    pub(crate) defaults: WindowDefaults,
    pub(crate) next_screen_id: ScreenId,
    /// States whose `request::` signal is being dispatched right now.
    pub(crate) pending_requests: Vec<(WindowHandle<H>, WindowState)>,
    /// Confirmed changes waiting to be handed to the display server.
    pub actions: VecDeque<DisplayAction<H>>,
}

/// What a window starts out with when it is managed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct WindowDefaults {
    pub border_width: u32,
    pub border_color: Color,
    pub opacity: Option<f64>,
}

impl WindowDefaults {
    fn new(config: &impl Config) -> Self {
        let border_width = u32::try_from(config.border_width()).unwrap_or_else(|_| {
            tracing::warn!(
                "Negative border width {} configured, using 0",
                config.border_width()
            );
            0
        });
        let border_color = config
            .default_border_color()
            .parse()
            .unwrap_or_else(|err| {
                tracing::warn!("{}, using the default border color", err);
                Color::default()
            });
        let opacity = config.opacity().filter(|o| {
            let valid = (0.0..=1.0).contains(o);
            if !valid {
                tracing::warn!("Opacity {} is outside of 0.0..=1.0, leaving it unset", o);
            }
            valid
        });
        Self {
            border_width,
            border_color,
            opacity,
        }
    }
}

impl<H: Handle> State<H> {
    pub fn new(config: &impl Config) -> Self {
        let mut tags = Tags::new();
        config.create_list_of_tag_labels().iter().for_each(|label| {
            tags.add_new(label.as_str());
        });

        Self {
            screens: Vec::new(),
            windows: Vec::new(),
            tags,
            signals: Signals::default(),
            defaults: WindowDefaults::new(config),
            next_screen_id: 1,
            pending_requests: Vec::new(),
            actions: VecDeque::new(),
        }
    }

    pub fn window(&self, handle: &WindowHandle<H>) -> Option<&ExtendedWindow<H>> {
        self.windows.iter().find(|w| &w.handle == handle)
    }

    pub(crate) fn window_mut(&mut self, handle: &WindowHandle<H>) -> Option<&mut ExtendedWindow<H>> {
        self.windows.iter_mut().find(|w| &w.handle == handle)
    }

    pub fn windows(&self) -> &[ExtendedWindow<H>] {
        &self.windows
    }

    /// Resolves a screen id. Screens that have been removed resolve to `None`.
    pub fn screen(&self, id: ScreenId) -> Option<&Screen> {
        self.screens.iter().find(|s| s.id == id)
    }

    pub fn screens(&self) -> &[Screen] {
        &self.screens
    }

    pub const fn tags(&self) -> &Tags<H> {
        &self.tags
    }

    /// A window is visible when it is not minimized and is either sticky or tagged with one of
    /// the selected tags of its screen.
    pub fn is_visible(&self, handle: &WindowHandle<H>) -> bool {
        let Some(window) = self.window(handle) else {
            return false;
        };
        if window.minimized {
            return false;
        }
        if window.sticky {
            return true;
        }
        let Some(screen) = window.screen.and_then(|id| self.screen(id)) else {
            return false;
        };
        screen
            .tags
            .iter()
            .filter_map(|id| self.tags.get(*id))
            .any(|tag| tag.selected && window.has_tag(&tag.id))
    }

    /// The part of a screen left for normal window placement once the struts of its visible
    /// windows are reserved. Cached until something invalidates it.
    pub fn workarea(&self, id: ScreenId) -> Option<BBox> {
        let screen = self.screen(id)?;
        if let Some(workarea) = screen.cached_workarea() {
            return Some(workarea);
        }
        let reserved = self
            .windows
            .iter()
            .filter(|w| w.screen == Some(id) && self.is_visible(&w.handle))
            .fold(Strut::default(), |acc, w| acc.max(w.strut));
        let workarea = screen.bbox.shrink(reserved);
        screen.cache_workarea(workarea);
        Some(workarea)
    }

    /// Drops the cached workarea of a screen and tells listeners about it.
    pub(crate) fn invalidate_workarea(&mut self, screen: Option<ScreenId>) {
        let Some(id) = screen else {
            return;
        };
        let Some(screen) = self.screen(id) else {
            tracing::trace!("Screen {} is gone, not invalidating its workarea", id);
            return;
        };
        screen.invalidate_workarea();
        self.emit(crate::Signal::Workarea { screen: id });
    }

    pub(crate) fn queue(&mut self, act: DisplayAction<H>) {
        tracing::trace!("DisplayAction: {:?}", act);
        self.actions.push_back(act);
    }
}

#[cfg(test)]
impl State<crate::models::MockHandle> {
    pub fn new_test(tags: Vec<String>) -> Self {
        Self::new(&crate::config::TestConfig { tags })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MockHandle;

    struct BadConfig;

    impl Config for BadConfig {
        fn create_list_of_tag_labels(&self) -> Vec<String> {
            vec!["only".to_owned()]
        }
        fn border_width(&self) -> i32 {
            -4
        }
        fn default_border_color(&self) -> &str {
            "#zzzzzz"
        }
        fn opacity(&self) -> Option<f64> {
            Some(3.0)
        }
    }

    #[test]
    fn tags_are_created_from_config() {
        let state = State::new_test(vec!["web".to_owned(), "chat".to_owned()]);
        assert_eq!(state.tags().len(), 2);
        assert_eq!(state.tags().get(1).map(|t| t.label.as_str()), Some("web"));
    }

    #[test]
    fn invalid_defaults_fall_back() {
        let state: State<MockHandle> = State::new(&BadConfig);
        assert_eq!(
            state.defaults,
            WindowDefaults {
                border_width: 0,
                border_color: Color::default(),
                opacity: None,
            }
        );
    }

    #[test]
    fn visibility_follows_the_selected_tags() {
        let mut state = State::new_test(vec!["1".to_owned(), "2".to_owned()]);
        let screen = state.add_screen(BBox::default(), vec![1, 2]);
        let handle = WindowHandle(1);
        state.manage_window(handle, Some(screen));
        state.set_tags(&handle, &[1]);
        state.select_tag(2, true);
        assert!(!state.is_visible(&handle));

        state.select_tag(1, true);
        assert!(state.is_visible(&handle));

        state.set_minimized(&handle, true);
        assert!(!state.is_visible(&handle));
        state.set_sticky(&handle, true);
        assert!(!state.is_visible(&handle), "minimized beats sticky");
    }

    #[test]
    fn sticky_windows_are_visible_everywhere() {
        let mut state = State::new_test(vec!["1".to_owned()]);
        let handle = WindowHandle(1);
        state.manage_window(handle, None);
        assert!(!state.is_visible(&handle));
        state.set_sticky(&handle, true);
        assert!(state.is_visible(&handle));
    }

    #[test]
    fn workarea_subtracts_visible_struts() {
        let mut state = State::new_test(vec!["1".to_owned()]);
        let screen = state.add_screen(BBox::new(0, 0, 1000, 800), vec![1]);
        state.select_tag(1, true);
        let bar = WindowHandle(1);
        let dock = WindowHandle(2);
        state.manage_window(bar, Some(screen));
        state.manage_window(dock, Some(screen));
        state.set_tags(&bar, &[1]);
        state.set_struts(&bar, Strut::new(0, 0, 30, 0));
        state.set_struts(&dock, Strut::new(64, 0, 0, 0));

        // The dock is untagged and therefore hidden, so its strut does not count.
        assert_eq!(state.workarea(screen), Some(BBox::new(0, 30, 1000, 770)));

        state.set_sticky(&dock, true);
        assert_eq!(state.workarea(screen), Some(BBox::new(64, 30, 936, 770)));

        state.set_minimized(&bar, true);
        assert_eq!(state.workarea(screen), Some(BBox::new(64, 0, 936, 800)));
    }

    #[test]
    fn workarea_is_cached_until_invalidated() {
        let mut state = State::new_test(vec!["1".to_owned()]);
        let screen = state.add_screen(BBox::default(), vec![1]);
        let area = state.workarea(screen);
        assert_eq!(state.screen(screen).and_then(Screen::cached_workarea), area);
        state.invalidate_workarea(Some(screen));
        assert_eq!(state.screen(screen).and_then(Screen::cached_workarea), None);
    }

    #[test]
    fn removed_screens_have_no_workarea() {
        let mut state = State::new_test(vec![]);
        let screen = state.add_screen(BBox::default(), vec![]);
        state.remove_screen(screen);
        assert_eq!(state.workarea(screen), None);
    }
}
