use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FaqItemProps {
    pub question: AttrValue,
    pub answer: AttrValue,
}

#[function_component(FaqItem)]
pub fn faq_item(props: &FaqItemProps) -> Html {
    html! {
        <details class="card">
            <summary>
                <strong>{&props.question}</strong>
            </summary>
            <p class="muted">{&props.answer}</p>
        </details>
    }
}
