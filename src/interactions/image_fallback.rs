use log::debug;
use web_sys::HtmlImageElement;

use crate::config;

pub const FALLBACK_MARKER: &str = "data-fallback";
pub const DEFAULT_WIDTH: &str = "800";
pub const DEFAULT_HEIGHT: &str = "600";

/// The bits of an `<img>` the fallback handler touches.
pub trait FallbackTarget {
    fn attribute(&self, name: &str) -> Option<String>;
    fn set_attribute(&self, name: &str, value: &str);
    fn set_src(&self, src: &str);
}

impl FallbackTarget for HtmlImageElement {
    fn attribute(&self, name: &str) -> Option<String> {
        self.get_attribute(name)
    }

    fn set_attribute(&self, name: &str, value: &str) {
        let _ = web_sys::Element::set_attribute(self, name, value);
    }

    fn set_src(&self, src: &str) {
        HtmlImageElement::set_src(self, src);
    }
}

pub fn placeholder_url(width: &str, height: &str) -> String {
    format!("{}/{}x{}?text=Image+unavailable", config::PLACEHOLDER_HOST, width, height)
}

fn declared<T: FallbackTarget>(image: &T, name: &str, default: &str) -> String {
    image
        .attribute(name)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Swaps a broken image for a sized placeholder, once per element.
///
/// The marker attribute is what makes the second call a no-op; the handler
/// stays attached, so a failing placeholder comes straight back here.
pub fn apply_fallback<T: FallbackTarget>(image: &T) -> Option<String> {
    if image.attribute(FALLBACK_MARKER).as_deref() == Some("1") {
        return None;
    }
    image.set_attribute(FALLBACK_MARKER, "1");

    let width = declared(image, "width", DEFAULT_WIDTH);
    let height = declared(image, "height", DEFAULT_HEIGHT);
    let url = placeholder_url(&width, &height);
    debug!("image failed to load, falling back to {}", url);
    image.set_src(&url);
    Some(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct FakeImage {
        attributes: RefCell<HashMap<String, String>>,
        src_writes: RefCell<Vec<String>>,
    }

    impl FakeImage {
        fn sized(width: &str, height: &str) -> Self {
            let image = Self::default();
            image.set_attribute("width", width);
            image.set_attribute("height", height);
            image
        }
    }

    impl FallbackTarget for FakeImage {
        fn attribute(&self, name: &str) -> Option<String> {
            self.attributes.borrow().get(name).cloned()
        }

        fn set_attribute(&self, name: &str, value: &str) {
            self.attributes.borrow_mut().insert(name.to_string(), value.to_string());
        }

        fn set_src(&self, src: &str) {
            self.src_writes.borrow_mut().push(src.to_string());
        }
    }

    #[test]
    fn declared_size_is_encoded() {
        let image = FakeImage::sized("300", "200");
        let url = apply_fallback(&image).unwrap();
        assert_eq!(url, "https://via.placeholder.com/300x200?text=Image+unavailable");
        assert_eq!(*image.src_writes.borrow(), vec![url]);
    }

    #[test]
    fn missing_size_defaults_to_800x600() {
        let image = FakeImage::default();
        let url = apply_fallback(&image).unwrap();
        assert!(url.contains("/800x600?"));
    }

    #[test]
    fn blank_size_attributes_use_defaults() {
        let image = FakeImage::sized("", "  ");
        assert!(apply_fallback(&image).unwrap().contains("/800x600?"));
    }

    #[test]
    fn second_failure_is_ignored() {
        let image = FakeImage::sized("1200", "900");
        assert!(apply_fallback(&image).is_some());
        assert_eq!(apply_fallback(&image), None);
        assert_eq!(image.src_writes.borrow().len(), 1);
        assert_eq!(image.attribute(FALLBACK_MARKER).as_deref(), Some("1"));
    }

    #[test]
    fn pre_marked_image_is_left_alone() {
        let image = FakeImage::default();
        image.set_attribute(FALLBACK_MARKER, "1");
        assert_eq!(apply_fallback(&image), None);
        assert!(image.src_writes.borrow().is_empty());
    }

    proptest! {
        #[test]
        fn source_changes_at_most_once(failures in 1usize..10, w in 1u32..4000, h in 1u32..4000) {
            let image = FakeImage::sized(&w.to_string(), &h.to_string());
            for _ in 0..failures {
                apply_fallback(&image);
            }
            let writes = image.src_writes.borrow();
            prop_assert_eq!(writes.len(), 1);
            let expected = format!("/{}x{}?", w, h);
            prop_assert!(writes[0].contains(&expected));
        }
    }
}
