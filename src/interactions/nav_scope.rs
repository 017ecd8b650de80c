use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{KeyboardEvent, Window};

use crate::interactions::nav::{NavEvent, NavState};
use crate::interactions::scroll_lock::{BodyStyle, ScrollLock};

/// Where the global keydown listener is attached, normally the window.
pub trait KeydownTarget {
    type Listener;

    /// Registers `on_key`, which receives `KeyboardEvent.key` values.
    fn listen(&self, on_key: Box<dyn FnMut(&str)>) -> Self::Listener;
    fn unlisten(&self, listener: &Self::Listener);
}

impl KeydownTarget for Window {
    type Listener = Closure<dyn FnMut(KeyboardEvent)>;

    fn listen(&self, mut on_key: Box<dyn FnMut(&str)>) -> Self::Listener {
        let listener = Closure::wrap(Box::new(move |e: KeyboardEvent| {
            on_key(&e.key());
        }) as Box<dyn FnMut(KeyboardEvent)>);
        let _ = self.add_event_listener_with_callback("keydown", listener.as_ref().unchecked_ref());
        listener
    }

    fn unlisten(&self, listener: &Self::Listener) {
        let _ = self.remove_event_listener_with_callback("keydown", listener.as_ref().unchecked_ref());
    }
}

/// Side effects the header holds for one nav state: the Escape listener and
/// the body scroll lock. Dropping it detaches the listener and clears the
/// lock, whichever state it was entered with.
pub struct NavScope<T: KeydownTarget, B: BodyStyle> {
    target: T,
    listener: T::Listener,
    scroll_lock: Option<ScrollLock<B>>,
}

impl<T: KeydownTarget, B: BodyStyle> NavScope<T, B> {
    pub fn enter(
        target: T,
        body: Option<B>,
        state: NavState,
        on_event: impl Fn(NavEvent) + 'static,
    ) -> Self {
        let scroll_lock = body.map(|body| ScrollLock::apply(body, state.is_open()));
        let listener = target.listen(Box::new(move |key: &str| {
            if let Some(event) = NavEvent::from_key(key) {
                on_event(event);
            }
        }));
        Self { target, listener, scroll_lock }
    }
}

impl<T: KeydownTarget, B: BodyStyle> Drop for NavScope<T, B> {
    fn drop(&mut self) {
        self.target.unlisten(&self.listener);
        self.scroll_lock.take();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    type KeyHandler = Box<dyn FnMut(&str)>;

    #[derive(Clone, Default)]
    struct FakeWindow {
        handlers: Rc<RefCell<Vec<Option<KeyHandler>>>>,
    }

    impl FakeWindow {
        fn press(&self, key: &str) {
            for handler in self.handlers.borrow_mut().iter_mut().flatten() {
                handler(key);
            }
        }

        fn attached(&self) -> usize {
            self.handlers.borrow().iter().filter(|handler| handler.is_some()).count()
        }
    }

    impl KeydownTarget for FakeWindow {
        type Listener = usize;

        fn listen(&self, on_key: Box<dyn FnMut(&str)>) -> usize {
            let mut handlers = self.handlers.borrow_mut();
            handlers.push(Some(on_key));
            handlers.len() - 1
        }

        fn unlisten(&self, listener: &usize) {
            self.handlers.borrow_mut()[*listener] = None;
        }
    }

    #[derive(Clone, Default)]
    struct FakeBody {
        overflow: Rc<RefCell<String>>,
    }

    impl BodyStyle for FakeBody {
        fn set_overflow(&self, value: &str) {
            *self.overflow.borrow_mut() = value.to_string();
        }
    }

    fn recorder() -> (Rc<RefCell<Vec<NavEvent>>>, impl Fn(NavEvent) + 'static) {
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = events.clone();
        (events, move |event: NavEvent| sink.borrow_mut().push(event))
    }

    #[test]
    fn open_scope_locks_scroll_and_listens_for_escape() {
        let window = FakeWindow::default();
        let body = FakeBody::default();
        let (events, on_event) = recorder();

        let _scope = NavScope::enter(window.clone(), Some(body.clone()), NavState::Open, on_event);
        assert_eq!(*body.overflow.borrow(), "hidden");
        assert_eq!(window.attached(), 1);

        window.press("Enter");
        window.press("Escape");
        assert_eq!(*events.borrow(), vec![NavEvent::Escape]);
    }

    #[test]
    fn closed_scope_leaves_scrolling_enabled() {
        let window = FakeWindow::default();
        let body = FakeBody::default();
        let (_, on_event) = recorder();

        let _scope = NavScope::enter(window.clone(), Some(body.clone()), NavState::Closed, on_event);
        assert_eq!(*body.overflow.borrow(), "");
        assert_eq!(window.attached(), 1);
    }

    #[test]
    fn teardown_detaches_listener_and_clears_lock_in_any_state() {
        for state in [NavState::Open, NavState::Closed] {
            let window = FakeWindow::default();
            let body = FakeBody::default();
            let (events, on_event) = recorder();

            drop(NavScope::enter(window.clone(), Some(body.clone()), state, on_event));
            assert_eq!(window.attached(), 0, "listener still attached after {:?}", state);
            assert_eq!(*body.overflow.borrow(), "", "scroll still locked after {:?}", state);

            window.press("Escape");
            assert!(events.borrow().is_empty());
        }
    }

    #[test]
    fn state_change_swaps_scope_without_leaking_listeners() {
        let window = FakeWindow::default();
        let body = FakeBody::default();

        let (_, on_event) = recorder();
        let open = NavScope::enter(window.clone(), Some(body.clone()), NavState::Open, on_event);
        drop(open);
        let (_, on_event) = recorder();
        let closed = NavScope::enter(window.clone(), Some(body.clone()), NavState::Closed, on_event);

        assert_eq!(window.attached(), 1);
        assert_eq!(*body.overflow.borrow(), "");
        drop(closed);
        assert_eq!(window.attached(), 0);
    }

    #[test]
    fn missing_body_still_manages_listener() {
        let window = FakeWindow::default();
        let (_, on_event) = recorder();
        let scope = NavScope::<_, FakeBody>::enter(window.clone(), None, NavState::Open, on_event);
        assert_eq!(window.attached(), 1);
        drop(scope);
        assert_eq!(window.attached(), 0);
    }
}
