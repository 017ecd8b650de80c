use web_sys::HtmlImageElement;
use yew::prelude::*;

use crate::content::{self, ImageFormat};
use crate::interactions::image_fallback::apply_fallback;

#[derive(Properties, PartialEq)]
pub struct PictureProps {
    pub photo: &'static str,
    pub widths: &'static [(u32, u32)],
    pub sizes: &'static str,
    /// Width and quality of the plain `<img>` fallback source.
    pub src_width: u32,
    pub src_quality: u32,
    pub width: u32,
    pub height: u32,
    pub alt: AttrValue,
    #[prop_or_default]
    pub title: Option<AttrValue>,
    #[prop_or_default]
    pub eager: bool,
}

/// Responsive Unsplash image with AVIF/WebP sources and a one-shot
/// placeholder fallback when the chosen source fails to load.
#[function_component(Picture)]
pub fn picture(props: &PictureProps) -> Html {
    let onerror = Callback::from(|e: Event| {
        if let Some(image) = e.target_dyn_into::<HtmlImageElement>() {
            apply_fallback(&image);
        }
    });

    let source = |format: ImageFormat| {
        html! {
            <source
                type={format.mime()}
                srcset={content::unsplash_srcset(props.photo, format, props.widths)}
                sizes={props.sizes}
            />
        }
    };

    html! {
        <picture>
            { source(ImageFormat::Avif) }
            { source(ImageFormat::Webp) }
            <img
                src={content::unsplash_url(props.photo, ImageFormat::Original, props.src_width, props.src_quality)}
                width={props.width.to_string()}
                height={props.height.to_string()}
                alt={props.alt.clone()}
                title={props.title.clone()}
                loading={if props.eager { "eager" } else { "lazy" }}
                fetchpriority={props.eager.then_some("high")}
                decoding="async"
                referrerpolicy="no-referrer"
                crossorigin="anonymous"
                {onerror}
            />
        </picture>
    }
}
