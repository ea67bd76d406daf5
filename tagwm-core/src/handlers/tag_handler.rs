use crate::models::{Handle, TagId, WindowHandle};
use crate::signal::Signal;
use crate::state::State;

impl<H: Handle> State<H> {
    /// The tags a window currently holds, in the order they were added.
    pub fn window_tags(&self, handle: &WindowHandle<H>) -> Option<&[TagId]> {
        self.window(handle).map(|w| w.tags())
    }

    /// Replaces the tags of a window.
    ///
    /// The window is first untagged from everything it holds and only then tagged with the new
    /// set, so a tag present in both is removed and added again.
    pub fn set_tags(&mut self, handle: &WindowHandle<H>, tags: &[TagId]) {
        let Some(window) = self.window(handle) else {
            tracing::warn!("Cannot tag unknown window {:?}", handle);
            return;
        };
        for tag in window.tags.clone() {
            self.untag_window(handle, tag);
        }
        for tag in tags {
            self.tag_window(handle, *tag);
        }
    }

    /// Adds a window to a tag. Does nothing if it is already there.
    pub fn tag_window(&mut self, handle: &WindowHandle<H>, tag: TagId) {
        let Some(entry) = self.tags.get_mut(tag) else {
            tracing::warn!("Cannot tag {:?} with unknown tag {}", handle, tag);
            return;
        };
        let Some(window) = self.windows.iter_mut().find(|w| &w.handle == handle) else {
            tracing::warn!("Cannot tag unknown window {:?}", handle);
            return;
        };
        let listed = entry.insert(*handle);
        let held = !window.tags.contains(&tag);
        if held {
            window.tags.push(tag);
        }
        if !listed && !held {
            return;
        }
        let (screen, reserves) = (window.screen, window.strut.has_value());
        if reserves {
            self.invalidate_workarea(screen);
        }
        self.emit(Signal::Tagged {
            window: *handle,
            tag,
        });
    }

    /// Removes a window from a tag. Does nothing if it is not there.
    pub fn untag_window(&mut self, handle: &WindowHandle<H>, tag: TagId) {
        let Some(entry) = self.tags.get_mut(tag) else {
            tracing::warn!("Cannot untag {:?} from unknown tag {}", handle, tag);
            return;
        };
        let listed = entry.remove(handle);
        let mut held = false;
        let mut owner = None;
        if let Some(window) = self.windows.iter_mut().find(|w| &w.handle == handle) {
            let before = window.tags.len();
            window.tags.retain(|t| *t != tag);
            held = before != window.tags.len();
            owner = Some((window.screen, window.strut.has_value()));
        }
        if !listed && !held {
            return;
        }
        if let Some((screen, true)) = owner {
            self.invalidate_workarea(screen);
        }
        self.emit(Signal::Untagged {
            window: *handle,
            tag,
        });
    }

    /// Selects or deselects a tag. Screens showing the tag get their workarea recomputed.
    pub fn select_tag(&mut self, tag: TagId, selected: bool) {
        let Some(entry) = self.tags.get_mut(tag) else {
            tracing::warn!("Cannot select unknown tag {}", tag);
            return;
        };
        if entry.selected == selected {
            return;
        }
        entry.selected = selected;
        let screens: Vec<_> = self
            .screens
            .iter()
            .filter(|s| s.has_tag(&tag))
            .map(|s| s.id)
            .collect();
        for screen in screens {
            self.invalidate_workarea(Some(screen));
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::handlers::test_helpers::record_signals;
    use crate::models::{BBox, MockHandle, Strut, WindowHandle};
    use crate::{Signal, State};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn subject() -> (State<MockHandle>, WindowHandle<MockHandle>) {
        let labels = ["A", "B", "C"].iter().map(|l| (*l).to_owned()).collect();
        let mut state = State::new_test(labels);
        let handle = WindowHandle(1);
        state.manage_window(handle, None);
        (state, handle)
    }

    fn tag_events(state: &mut State<MockHandle>) -> Rc<RefCell<Vec<(String, usize)>>> {
        let seen = Rc::new(RefCell::new(vec![]));
        let sink = seen.clone();
        state.connect(move |_, signal| match signal {
            Signal::Tagged { tag, .. } => sink.borrow_mut().push(("tagged".to_owned(), *tag)),
            Signal::Untagged { tag, .. } => sink.borrow_mut().push(("untagged".to_owned(), *tag)),
            _ => {}
        });
        seen
    }

    #[test]
    fn replacing_tags_removes_everything_first() {
        let (mut state, handle) = subject();
        state.set_tags(&handle, &[1, 2]);
        let seen = tag_events(&mut state);
        state.set_tags(&handle, &[2, 3]);
        assert_eq!(
            *seen.borrow(),
            vec![
                ("untagged".to_owned(), 1),
                ("untagged".to_owned(), 2),
                ("tagged".to_owned(), 2),
                ("tagged".to_owned(), 3),
            ]
        );
        assert_eq!(state.window_tags(&handle), Some(&[2, 3][..]));
    }

    #[test]
    fn listeners_see_the_window_fully_untagged() {
        let (mut state, handle) = subject();
        state.set_tags(&handle, &[1, 2]);
        let snapshots = Rc::new(RefCell::new(vec![]));
        let sink = snapshots.clone();
        state.connect_signal("untagged", move |state, signal| {
            let tags = signal
                .window()
                .and_then(|w| state.window_tags(&w))
                .map(<[usize]>::to_vec);
            sink.borrow_mut().push(tags);
        });
        state.set_tags(&handle, &[2]);
        assert_eq!(*snapshots.borrow(), vec![Some(vec![2]), Some(vec![])]);
    }

    #[test]
    fn reverse_relation_is_kept_by_the_hooks() {
        let (mut state, handle) = subject();
        state.set_tags(&handle, &[1, 3]);
        assert!(state.tags().get(1).unwrap().contains(&handle));
        assert!(!state.tags().get(2).unwrap().contains(&handle));
        assert!(state.tags().get(3).unwrap().contains(&handle));
        state.set_tags(&handle, &[]);
        assert!(state.tags().all().iter().all(|t| t.windows().is_empty()));
    }

    #[test]
    fn hooks_are_idempotent() {
        let (mut state, handle) = subject();
        let seen = record_signals(&mut state);
        state.tag_window(&handle, 1);
        state.tag_window(&handle, 1);
        state.untag_window(&handle, 2);
        assert_eq!(*seen.borrow(), vec!["tagged"]);
        assert_eq!(state.tags().get(1).unwrap().windows(), &[handle]);
        assert_eq!(state.window_tags(&handle), Some(&[1][..]));
    }

    #[test]
    fn duplicate_tags_in_a_replacement_are_skipped() {
        let (mut state, handle) = subject();
        let seen = record_signals(&mut state);
        state.set_tags(&handle, &[1, 1, 2]);
        assert_eq!(*seen.borrow(), vec!["tagged", "tagged"]);
        assert_eq!(state.window_tags(&handle), Some(&[1, 2][..]));
    }

    #[test]
    fn unknown_tags_are_ignored() {
        let (mut state, handle) = subject();
        state.set_tags(&handle, &[0, 9, 2]);
        assert_eq!(state.window_tags(&handle), Some(&[2][..]));
    }

    #[test]
    fn retagging_a_strut_holder_invalidates_its_screen() {
        let (mut state, _) = subject();
        let screen = state.add_screen(BBox::new(0, 0, 800, 600), vec![1, 2]);
        state.select_tag(1, true);
        let bar = WindowHandle(2);
        state.manage_window(bar, Some(screen));
        state.set_tags(&bar, &[1]);
        state.set_struts(&bar, Strut::new(0, 0, 20, 0));
        assert_eq!(state.workarea(screen), Some(BBox::new(0, 20, 800, 580)));

        let seen = record_signals(&mut state);
        state.set_tags(&bar, &[2]);
        assert_eq!(
            *seen.borrow(),
            vec!["property::workarea", "untagged", "property::workarea", "tagged"]
        );
        assert_eq!(state.workarea(screen), Some(BBox::new(0, 0, 800, 600)));
    }

    #[test]
    fn selecting_a_tag_invalidates_screens_showing_it() {
        let (mut state, _) = subject();
        let first = state.add_screen(BBox::default(), vec![1]);
        let second = state.add_screen(BBox::default(), vec![2]);
        let screens = Rc::new(RefCell::new(vec![]));
        let sink = screens.clone();
        state.connect_signal("property::workarea", move |_, signal| {
            if let Signal::Workarea { screen } = signal {
                sink.borrow_mut().push(*screen);
            }
        });
        state.select_tag(2, true);
        state.select_tag(2, true);
        state.select_tag(1, true);
        assert_eq!(*screens.borrow(), vec![second, first]);
        assert!(state.tags().get(1).unwrap().is_selected());
    }
}
