use web_sys::HtmlElement;

/// Anything whose `overflow` style can be written, normally `document.body`.
pub trait BodyStyle {
    fn set_overflow(&self, value: &str);
}

impl BodyStyle for HtmlElement {
    fn set_overflow(&self, value: &str) {
        let _ = self.style().set_property("overflow", value);
    }
}

/// Holds the body's scroll lock for as long as it lives.
///
/// Dropping the guard always clears the style, whatever state it was
/// created with, so an unmount can never leave the page unscrollable.
pub struct ScrollLock<B: BodyStyle> {
    body: B,
}

impl<B: BodyStyle> ScrollLock<B> {
    pub fn apply(body: B, locked: bool) -> Self {
        body.set_overflow(if locked { "hidden" } else { "" });
        Self { body }
    }
}

impl<B: BodyStyle> Drop for ScrollLock<B> {
    fn drop(&mut self) {
        self.body.set_overflow("");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct FakeBody {
        overflow: Rc<RefCell<String>>,
    }

    impl BodyStyle for FakeBody {
        fn set_overflow(&self, value: &str) {
            *self.overflow.borrow_mut() = value.to_string();
        }
    }

    #[test]
    fn locks_while_held_and_clears_on_drop() {
        let body = FakeBody::default();
        let guard = ScrollLock::apply(body.clone(), true);
        assert_eq!(*body.overflow.borrow(), "hidden");
        drop(guard);
        assert_eq!(*body.overflow.borrow(), "");
    }

    #[test]
    fn unlocked_guard_leaves_scrolling_enabled() {
        let body = FakeBody::default();
        *body.overflow.borrow_mut() = "hidden".to_string();
        let _guard = ScrollLock::apply(body.clone(), false);
        assert_eq!(*body.overflow.borrow(), "");
    }

    #[test]
    fn replacing_guard_follows_latest_state() {
        let body = FakeBody::default();
        let opened = ScrollLock::apply(body.clone(), true);
        drop(opened);
        let closed = ScrollLock::apply(body.clone(), false);
        assert_eq!(*body.overflow.borrow(), "");
        drop(closed);
        let _reopened = ScrollLock::apply(body.clone(), true);
        assert_eq!(*body.overflow.borrow(), "hidden");
    }

    #[test]
    fn drop_clears_regardless_of_last_state() {
        for locked in [true, false] {
            let body = FakeBody::default();
            drop(ScrollLock::apply(body.clone(), locked));
            assert_eq!(*body.overflow.borrow(), "");
        }
    }
}
