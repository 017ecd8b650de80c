use web_sys::{HtmlFormElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config;
use crate::interactions::order_form::{District, OrderForm, DISTRICT_PROMPT};

pub enum OrderFormMsg {
    SetName(String),
    SetPhone(String),
    SetDistrict(String),
    SetBrand(String),
    SetMessage(String),
    Submit,
}

/// Contact form. Submitting only acknowledges and clears; nothing is sent.
pub struct OrderFormView {
    form: OrderForm,
    status: Option<&'static str>,
    form_ref: NodeRef,
}

impl Component for OrderFormView {
    type Message = OrderFormMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            form: OrderForm::default(),
            status: None,
            form_ref: NodeRef::default(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            OrderFormMsg::SetName(name) => self.form.name = name,
            OrderFormMsg::SetPhone(phone) => self.form.phone = phone,
            OrderFormMsg::SetDistrict(label) => self.form.district = District::from_label(&label),
            OrderFormMsg::SetBrand(brand) => self.form.brand = brand,
            OrderFormMsg::SetMessage(message) => self.form.message = message,
            OrderFormMsg::Submit => {
                self.status = Some(self.form.submit());
                // The select is uncontrolled; a native reset puts it back on the prompt.
                if let Some(form) = self.form_ref.cast::<HtmlFormElement>() {
                    form.reset();
                }
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let onsubmit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            OrderFormMsg::Submit
        });

        html! {
            <form ref={self.form_ref.clone()} name="order-form" aria-label="ონლაინ შეკვეთა" {onsubmit}>
                <div>
                    <label for="name">{"სახელი"}</label>
                    <input
                        id="name"
                        name="name"
                        required=true
                        autocomplete="name"
                        value={self.form.name.clone()}
                        oninput={link.callback(|e: InputEvent| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            OrderFormMsg::SetName(input.value())
                        })}
                    />
                </div>
                <div>
                    <label for="phone">{"ტელეფონი"}</label>
                    <input
                        id="phone"
                        name="phone"
                        required=true
                        inputmode="tel"
                        autocomplete="tel"
                        placeholder={config::PHONE_DISPLAY}
                        value={self.form.phone.clone()}
                        oninput={link.callback(|e: InputEvent| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            OrderFormMsg::SetPhone(input.value())
                        })}
                    />
                </div>
                <div>
                    <label for="district">{"უბანი"}</label>
                    <select
                        id="district"
                        name="district"
                        required=true
                        onchange={link.callback(|e: Event| {
                            let select: HtmlSelectElement = e.target_unchecked_into();
                            OrderFormMsg::SetDistrict(select.value())
                        })}
                    >
                        <option value="" disabled=true selected=true>{DISTRICT_PROMPT}</option>
                        { for District::ALL.iter().map(|district| html! {
                            <option value={district.label()}>{district.label()}</option>
                        }) }
                    </select>
                </div>
                <div>
                    <label for="brand">{"ბრენდი / მოდელი"}</label>
                    <input
                        id="brand"
                        name="brand"
                        placeholder="მაგ: Samsung WW90…"
                        value={self.form.brand.clone()}
                        oninput={link.callback(|e: InputEvent| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            OrderFormMsg::SetBrand(input.value())
                        })}
                    />
                </div>
                <div>
                    <label for="message">{"პრობლემის აღწერა"}</label>
                    <textarea
                        id="message"
                        name="message"
                        rows="4"
                        placeholder="მოკლედ აღწერეთ პრობლემა"
                        value={self.form.message.clone()}
                        oninput={link.callback(|e: InputEvent| {
                            let input: HtmlTextAreaElement = e.target_unchecked_into();
                            OrderFormMsg::SetMessage(input.value())
                        })}
                    />
                </div>
                <button class="btn btn-primary" type="submit">{"გაგზავნა"}</button>
                <p id="form-status" class="muted" role="status" aria-live="polite">
                    { self.status.unwrap_or_default() }
                </p>
            </form>
        }
    }
}
