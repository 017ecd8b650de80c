use log::{debug, warn};
use serde_json::Value;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::config;
use crate::content::{self, ImageFormat};
use crate::seo::structured_data;

/// Marks every element the manager owns so it can be told apart from
/// whatever `index.html` already put in the head.
pub const MANAGED_ATTR: &str = "data-managed";
pub const MANAGED_VALUE: &str = "drwash";

pub const TITLE: &str = "სარეცხი მანქანის შეკეთება თბილისში | DrWash — სწრაფი დიაგნოსტიკა და გარანტია";
pub const DESCRIPTION: &str = "DrWash — სარეცხი მანქანის შეკეთება თბილისში. ადგილზე მოსვლა, სწრაფი დიაგნოსტიკა, სამართლიანი ფასი და 30-დღიანი გარანტია. გამოიძახეთ ხელოსანი ახლა: +995 5XX XX XX XX.";
pub const SOCIAL_TITLE: &str = "სარეცხი მანქანის შეკეთება თბილისში | DrWash";
pub const SOCIAL_DESCRIPTION: &str = "ადგილზე მომსახურება, სწრაფი დიაგნოსტიკა, სამართლიანი ფასი და 30-დღიანი გარანტია.";

#[derive(Clone, Debug, PartialEq)]
pub enum MetaKey {
    Name(&'static str),
    Property(&'static str),
    HttpEquiv(&'static str),
}

#[derive(Clone, Debug, PartialEq)]
pub enum HeadTag {
    Title(String),
    Meta { key: MetaKey, content: String },
    Link { rel: &'static str, href: String, extra: Vec<(&'static str, String)> },
    JsonLd(Value),
}

impl HeadTag {
    fn name(name: &'static str, content: impl Into<String>) -> Self {
        HeadTag::Meta { key: MetaKey::Name(name), content: content.into() }
    }

    fn property(property: &'static str, content: impl Into<String>) -> Self {
        HeadTag::Meta { key: MetaKey::Property(property), content: content.into() }
    }

    fn link(rel: &'static str, href: impl Into<String>) -> Self {
        HeadTag::Link { rel, href: href.into(), extra: Vec::new() }
    }

    /// Element to create; `None` for the title, which goes through `document.title`.
    pub fn element_name(&self) -> Option<&'static str> {
        match self {
            HeadTag::Title(_) => None,
            HeadTag::Meta { .. } => Some("meta"),
            HeadTag::Link { .. } => Some("link"),
            HeadTag::JsonLd(_) => Some("script"),
        }
    }

    pub fn attributes(&self) -> Vec<(&'static str, String)> {
        match self {
            HeadTag::Title(_) => Vec::new(),
            HeadTag::Meta { key: MetaKey::Name(name), content } => {
                vec![("name", name.to_string()), ("content", content.clone())]
            }
            HeadTag::Meta { key: MetaKey::Property(property), content } => {
                vec![("property", property.to_string()), ("content", content.clone())]
            }
            HeadTag::Meta { key: MetaKey::HttpEquiv(header), content } => {
                vec![("http-equiv", header.to_string()), ("content", content.clone())]
            }
            HeadTag::Link { rel, href, extra } => {
                let mut attributes = vec![("rel", rel.to_string()), ("href", href.clone())];
                attributes.extend(extra.iter().cloned());
                attributes
            }
            HeadTag::JsonLd(_) => vec![("type", "application/ld+json".to_string())],
        }
    }

    pub fn text(&self) -> Option<String> {
        match self {
            HeadTag::Title(title) => Some(title.clone()),
            HeadTag::JsonLd(payload) => Some(payload.to_string()),
            _ => None,
        }
    }
}

pub fn site_head_tags() -> Vec<HeadTag> {
    let hero_preload = HeadTag::Link {
        rel: "preload",
        href: content::unsplash_url(content::HERO_PHOTO, ImageFormat::Original, 1200, 80),
        extra: vec![
            ("as", "image".to_string()),
            (
                "imagesrcset",
                content::unsplash_srcset(content::HERO_PHOTO, ImageFormat::Original, &content::HERO_WIDTHS),
            ),
            ("imagesizes", content::HERO_PRELOAD_SIZES.to_string()),
        ],
    };

    let mut tags = vec![
        HeadTag::Meta { key: MetaKey::HttpEquiv("X-UA-Compatible"), content: "IE=edge".to_string() },
        HeadTag::Title(TITLE.to_string()),
        HeadTag::name("description", DESCRIPTION),
        HeadTag::name("robots", "index, follow"),
        HeadTag::name("theme-color", config::THEME_COLOR),
        HeadTag::name("format-detection", "telephone=yes"),
        HeadTag::link("canonical", config::SITE_URL),
        HeadTag::Link {
            rel: "alternate",
            href: config::SITE_URL.to_string(),
            extra: vec![("hreflang", config::SITE_LOCALE.to_string())],
        },
        HeadTag::Link {
            rel: "sitemap",
            href: "/sitemap.xml".to_string(),
            extra: vec![("type", "application/xml".to_string()), ("title", "Sitemap".to_string())],
        },
        // Open Graph
        HeadTag::property("og:type", "website"),
        HeadTag::property("og:locale", "ka_GE"),
        HeadTag::property("og:url", config::SITE_URL),
        HeadTag::property("og:site_name", config::SITE_NAME),
        HeadTag::property("og:title", SOCIAL_TITLE),
        HeadTag::property("og:description", SOCIAL_DESCRIPTION),
        HeadTag::property("og:image", config::SOCIAL_IMAGE),
        hero_preload,
        // Twitter
        HeadTag::name("twitter:card", "summary_large_image"),
        HeadTag::name("twitter:title", SOCIAL_TITLE),
        HeadTag::name("twitter:description", SOCIAL_DESCRIPTION),
        HeadTag::name("twitter:image", config::SOCIAL_IMAGE),
    ];
    tags.extend(structured_data::all().into_iter().map(HeadTag::JsonLd));
    tags
}

/// The `<html lang>` slot, abstracted so the override can be checked off-DOM.
pub trait LangRoot {
    fn lang(&self) -> Option<String>;
    fn set_lang(&self, lang: Option<&str>);
}

impl LangRoot for Element {
    fn lang(&self) -> Option<String> {
        self.get_attribute("lang")
    }

    fn set_lang(&self, lang: Option<&str>) {
        match lang {
            Some(lang) => {
                let _ = self.set_attribute("lang", lang);
            }
            None => {
                let _ = self.remove_attribute("lang");
            }
        }
    }
}

/// Sets the document language and puts the previous value back on drop.
pub struct LangOverride<R: LangRoot> {
    root: R,
    previous: Option<String>,
}

impl<R: LangRoot> LangOverride<R> {
    pub fn apply(root: R, lang: &str) -> Self {
        let previous = root.lang();
        root.set_lang(Some(lang));
        Self { root, previous }
    }
}

impl<R: LangRoot> Drop for LangOverride<R> {
    fn drop(&mut self) {
        self.root.set_lang(self.previous.as_deref());
    }
}

/// Head elements inserted by [`install`]; dropping this removes them again
/// and restores the document language.
#[derive(Default)]
pub struct ManagedHead {
    elements: Vec<Element>,
    lang: Option<LangOverride<Element>>,
}

impl ManagedHead {
    pub fn len(&self) -> usize {
        self.elements.len()
    }
}

impl Drop for ManagedHead {
    fn drop(&mut self) {
        for element in self.elements.drain(..) {
            element.remove();
        }
        self.lang.take();
    }
}

fn create_element(document: &Document, tag: &HeadTag, name: &str) -> Result<Element, JsValue> {
    let element = document.create_element(name)?;
    element.set_attribute(MANAGED_ATTR, MANAGED_VALUE)?;
    for (attribute, value) in tag.attributes() {
        element.set_attribute(attribute, &value)?;
    }
    if let Some(text) = tag.text() {
        element.set_text_content(Some(&text));
    }
    Ok(element)
}

pub fn install(document: &Document, tags: &[HeadTag]) -> ManagedHead {
    let mut managed = ManagedHead::default();

    managed.lang = document
        .document_element()
        .map(|root| LangOverride::apply(root, config::SITE_LANG));

    let head = match document.head() {
        Some(head) => head,
        None => {
            warn!("document has no <head>, skipping SEO tags");
            return managed;
        }
    };

    for tag in tags {
        let name = match tag.element_name() {
            Some(name) => name,
            None => {
                if let Some(title) = tag.text() {
                    document.set_title(&title);
                }
                continue;
            }
        };
        match create_element(document, tag, name).and_then(|element| {
            head.append_child(&element)?;
            Ok(element)
        }) {
            Ok(element) => managed.elements.push(element),
            Err(e) => warn!("could not install <{}> head tag: {:?}", name, e),
        }
    }

    debug!("installed {} head tags", managed.len());
    managed
}
