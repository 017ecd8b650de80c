use chrono::Datelike;
use yew::prelude::*;

use crate::components::faq_item::FaqItem;
use crate::components::header::SiteHeader;
use crate::components::order_form::OrderFormView;
use crate::components::picture::Picture;
use crate::config;
use crate::content::{self, anchors, Card};
use crate::style::SITE_CSS;

fn hero() -> Html {
    html! {
        <section id={anchors::HOME} class="hero">
            <div class="container grid grid-2 align-center">
                <div>
                    <h1>
                        {"სარეცხი მანქანის შეკეთება თბილისში — "}
                        <span class="muted">{config::SITE_NAME}</span>
                    </h1>
                    <p>
                        {"ადგილზე დიაგნოსტიკა, სწრაფი და ხარისხიანი რემონტი, სამართლიანი ფასები და "}
                        <strong>{"30-დღიანი გარანტია"}</strong>
                        {". მოვემსახურებით თბილისში და ახლომდებარე ტერიტორიებზე."}
                    </p>
                    <div class="cta">
                        <a class="btn btn-primary" href={config::tel_href()}>{"დარეკვა ახლა"}</a>
                        <a class="btn btn-outline" href={format!("#{}", anchors::CONTACT)}>{"ონლაინ შეკვეთა"}</a>
                    </div>
                    <div class="badges">
                        <span class="pill">{"ადგილზე მომსახურება"}</span>
                        <span class="pill">{"სწრაფი გამოძახება"}</span>
                        <span class="pill">{"გუნდის გამოცდილება"}</span>
                    </div>
                </div>
                <div
                    class="card media ratio ratio-4x3"
                    data-filename="sarecxi-manqanis-sheketeba-tbilisi-technician-hero.jpg"
                >
                    <Picture
                        photo={content::HERO_PHOTO}
                        widths={&content::HERO_WIDTHS[..]}
                        sizes={content::HERO_SIZES}
                        src_width={1200}
                        src_quality={80}
                        width={1200}
                        height={900}
                        alt="სარეცხი მანქანის ხელოსანი თბილისში — ადგილზე ხარისხიანი რემონტი"
                        title={AttrValue::from("DrWash — სარეცხი მანქანის ხელოსანი თბილისში")}
                        eager=true
                    />
                </div>
            </div>
        </section>
    }
}

fn services() -> Html {
    html! {
        <section id={anchors::SERVICES} class="section" aria-labelledby="services-title">
            <div class="container">
                <h2 id="services-title">{"სერვისები"}</h2>
                <div class="grid grid-3">
                    { for content::SERVICES.iter().map(|service| html! {
                        <article class="card service-card">
                            <figure class="media ratio ratio-4x3">
                                <Picture
                                    photo={service.photo}
                                    widths={&content::SERVICE_WIDTHS[..]}
                                    sizes={content::SERVICE_SIZES}
                                    src_width={800}
                                    src_quality={75}
                                    width={800}
                                    height={600}
                                    alt={service.title}
                                    title={AttrValue::from(service.title)}
                                />
                            </figure>
                            <h3>{service.title}</h3>
                            <p class="muted">
                                {service.lead}
                                if let Some(price) = service.price {
                                    <strong>{price}</strong>
                                }
                                {service.description}
                            </p>
                            <a
                                href={format!("#{}", anchors::CONTACT)}
                                class="btn btn-outline"
                                aria-label="დიაგნოსტიკის შეკვეთა"
                            >
                                {"შეკვეთა"}
                            </a>
                        </article>
                    }) }
                </div>
            </div>
        </section>
    }
}

fn areas() -> Html {
    html! {
        <section id={anchors::AREAS} class="section" aria-labelledby="areas-title">
            <div class="container">
                <h2 id="areas-title">{"მოვემსახურებით თბილისის ყველა უბანს"}</h2>
                <p class="muted">{content::AREAS.join(" • ")}</p>
                <div class="card">
                    <p class="flush">
                        {"გთხოვთ მიუთითოთ თქვენი უბანი შეკვეთაში — შევარჩევთ ყველაზე ახლო ხელოსანს სწრაფი გამოძახებისთვის."}
                    </p>
                </div>
            </div>
        </section>
    }
}

fn card(card: &Card, class: &'static str) -> Html {
    html! {
        <div class={class}>
            <h3>{card.heading}</h3>
            <p class="muted">{card.body}</p>
        </div>
    }
}

fn problems() -> Html {
    html! {
        <section id={anchors::PROBLEMS} class="section" aria-labelledby="problems-title">
            <div class="container">
                <h2 id="problems-title">{"ხშირი პრობლემები"}</h2>
                <div class="grid grid-2">
                    { for content::PROBLEMS.iter().map(|problem| card(problem, "card")) }
                </div>

                <div class="section">
                    <h2>{"როგორ ვმუშაობთ"}</h2>
                    <div class="grid steps">
                        { for content::STEPS.iter().map(|step| html! {
                            <div class="step">{ card(step, "step-body") }</div>
                        }) }
                    </div>
                </div>
            </div>
        </section>
    }
}

fn faq() -> Html {
    html! {
        <section id={anchors::FAQ} class="section" aria-labelledby="faq-title">
            <div class="container">
                <h2 id="faq-title">{"კითხვები და პასუხები"}</h2>
                { for content::FAQ.iter().map(|entry| html! {
                    <FaqItem question={entry.heading} answer={entry.body} />
                }) }
            </div>
        </section>
    }
}

fn contact() -> Html {
    html! {
        <section id={anchors::CONTACT} class="section" aria-labelledby="contact-title">
            <div class="container grid grid-2">
                <div>
                    <h2 id="contact-title">{"კონტაქტი"}</h2>
                    <p class="muted">{"დაგვირეკეთ ან შეავსეთ ფორმა. გიპასუხებთ მალე და შევათანხმებთ ვიზიტს."}</p>
                    <p>
                        <strong>{"ტელეფონი:"}</strong>{" "}
                        <a href={config::tel_href()}>{config::PHONE_DISPLAY}</a>
                    </p>
                    <p>
                        <strong>{"ელ-ფოსტა:"}</strong>{" "}
                        <a href={config::mailto_href()}>{config::EMAIL}</a>
                    </p>
                    <p>
                        <strong>{"მისამართი:"}</strong>{" თბილისი"}
                    </p>
                    <p>
                        <a class="btn btn-primary" href={content::maps_href()} target="_blank" rel="noopener">
                            {"გაზიარეთ ლოკაცია"}
                        </a>
                    </p>
                </div>
                <div>
                    <OrderFormView />
                </div>
            </div>
        </section>
    }
}

fn footer() -> Html {
    let year = chrono::Local::now().year();
    html! {
        <footer>
            <div class="container footer-grid">
                <div>
                    <h3 class="flush-top">{config::SITE_NAME}</h3>
                    <p>{"სარეცხი მანქანის ხელოსანი თბილისში • ადგილზე მომსახურება • 30-დღიანი გარანტია"}</p>
                    <p class="muted">
                        {"NAP: "}<strong>{config::SITE_NAME}</strong>{", თბილისი, "}
                        <a href={config::tel_href()}>{config::PHONE_DISPLAY}</a>{", "}
                        <a href={config::mailto_href()}>{config::EMAIL}</a>
                    </p>
                    <p class="muted">
                        {"© "}<span>{year}</span>{" DrWash. ყველა უფლება დაცულია."}
                    </p>
                </div>
                <div>
                    <h4>{"სწრაფი ბმულები"}</h4>
                    <ul class="plain-list">
                        <li><a href={format!("#{}", anchors::SERVICES)}>{"სერვისები"}</a></li>
                        <li><a href={format!("#{}", anchors::AREAS)}>{"უბნები"}</a></li>
                        <li><a href={format!("#{}", anchors::FAQ)}>{"FAQ"}</a></li>
                        <li><a href={format!("#{}", anchors::CONTACT)}>{"კონტაქტი"}</a></li>
                        <li><a href="/sitemap.xml">{"საიტის რუკა"}</a></li>
                    </ul>
                </div>
            </div>
        </footer>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    html! {
        <>
            <style>{SITE_CSS}</style>
            <SiteHeader />
            <main>
                { hero() }
                { services() }
                { areas() }
                { problems() }
                { faq() }
                { contact() }
            </main>
            { footer() }
        </>
    }
}
