use serde::Serialize;
use serde_json::{json, Value};

use crate::config;

const SCHEMA_CONTEXT: &str = "https://schema.org";

#[derive(Serialize)]
struct Answer {
    #[serde(rename = "@type")]
    kind: &'static str,
    text: &'static str,
}

#[derive(Serialize)]
struct Question {
    #[serde(rename = "@type")]
    kind: &'static str,
    name: &'static str,
    #[serde(rename = "acceptedAnswer")]
    accepted_answer: Answer,
}

impl Question {
    fn new(name: &'static str, answer: &'static str) -> Self {
        Self {
            kind: "Question",
            name,
            accepted_answer: Answer { kind: "Answer", text: answer },
        }
    }
}

pub const AREAS_SERVED: [&str; 8] = [
    "თბილისი",
    "საბურთალო",
    "ვაკე",
    "ვერა",
    "დიდუბე",
    "გლდანი",
    "ისანი",
    "ნაძალადევი",
];

pub const BUSINESS_NAME: &str = "DrWash — სარეცხი მანქანის ხელოსანი";

pub fn website() -> Value {
    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "WebSite",
        "name": config::SITE_NAME,
        "url": config::SITE_URL,
        "inLanguage": config::SITE_LOCALE,
        "potentialAction": {
            "@type": "SearchAction",
            "target": format!("{}?q={{search_term_string}}", config::SITE_URL),
            "query-input": "required name=search_term_string",
        },
    })
}

pub fn local_business() -> Value {
    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "LocalBusiness",
        "additionalType": "https://schema.org/RepairService",
        "name": BUSINESS_NAME,
        "url": config::SITE_URL,
        "image": config::SOCIAL_IMAGE,
        "telephone": config::PHONE_TEL,
        "priceRange": "₾₾",
        "address": {
            "@type": "PostalAddress",
            "streetAddress": "",
            "addressLocality": "თბილისი",
            "addressRegion": "",
            "postalCode": "",
            "addressCountry": "GE",
        },
        "geo": {
            "@type": "GeoCoordinates",
            "latitude": config::GEO_LATITUDE,
            "longitude": config::GEO_LONGITUDE,
        },
        "areaServed": AREAS_SERVED,
        "openingHoursSpecification": [
            {
                "@type": "OpeningHoursSpecification",
                "dayOfWeek": ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"],
                "opens": "10:00",
                "closes": "19:00",
            },
            {
                "@type": "OpeningHoursSpecification",
                "dayOfWeek": ["Saturday", "Sunday"],
                "opens": "11:00",
                "closes": "17:00",
            },
        ],
        "sameAs": [
            "https://www.facebook.com/yourpage",
            "https://www.instagram.com/yourpage",
        ],
        "makesOffer": [
            {
                "@type": "Offer",
                "itemOffered": {
                    "@type": "Service",
                    "name": "სარეცხი მანქანის დიაგნოსტიკა და რემონტი",
                },
                "priceSpecification": {
                    "@type": "PriceSpecification",
                    "priceCurrency": "GEL",
                    "price": "from 40",
                },
                "availability": "https://schema.org/InStock",
            },
        ],
    })
}

pub fn faq_page() -> Value {
    let questions = [
        Question::new(
            "რა ღირს სარეცხი მანქანის დიაგნოსტიკა?",
            "საწყისი დიაგნოსტიკა იწყება 40 ₾-დან თბილისის მასშტაბით. საბოლოო ფასი დამოკიდებულია დაზიანების ტიპსა და სათადარიგო ნაწილებზე.",
        ),
        Question::new(
            "რამდენ ხანში მოდის ხელოსანი?",
            "ჩვეულებრივ იმავე ან მომდევნო დღეს, თქვენს უბანზე დამოკიდებით. სასწრაფო ვიზიტიც შესაძლებელია წინასწარ შეთანხმებით.",
        ),
        Question::new(
            "გვაქვს თუ არა გარანტია?",
            "დიახ, დეტალებისა და სამუშაოზე ვაძლევთ მინიმუმ 30-დღიან გარანტიას, პრობლემის ტიპზე დამოკიდებით.",
        ),
    ];
    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "FAQPage",
        "mainEntity": questions,
    })
}

pub fn all() -> [Value; 3] {
    [website(), local_business(), faq_page()]
}
