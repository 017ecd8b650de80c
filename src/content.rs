//! Static page copy and the image URLs built from it.

use crate::config;

pub const UNSPLASH_BASE: &str = "https://images.unsplash.com";
pub const HERO_PHOTO: &str = "photo-1628321253151-bdf5f9f8f414";

pub const HERO_SIZES: &str = "(max-width: 900px) 92vw, 48vw";
pub const HERO_PRELOAD_SIZES: &str = "(max-width: 780px) 92vw, 48vw";
pub static HERO_WIDTHS: [(u32, u32); 3] = [(600, 70), (900, 75), (1200, 80)];

pub const SERVICE_SIZES: &str = "(max-width: 900px) 92vw, 356px";
pub static SERVICE_WIDTHS: [(u32, u32); 3] = [(480, 65), (800, 70), (1200, 75)];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageFormat {
    Avif,
    Webp,
    Original,
}

impl ImageFormat {
    fn query(self) -> &'static str {
        match self {
            ImageFormat::Avif => "&fm=avif",
            ImageFormat::Webp => "&fm=webp",
            ImageFormat::Original => "",
        }
    }

    pub fn mime(self) -> Option<&'static str> {
        match self {
            ImageFormat::Avif => Some("image/avif"),
            ImageFormat::Webp => Some("image/webp"),
            ImageFormat::Original => None,
        }
    }
}

pub fn unsplash_url(photo: &str, format: ImageFormat, width: u32, quality: u32) -> String {
    format!(
        "{}/{}?auto=format&fit=crop{}&w={}&q={}",
        UNSPLASH_BASE,
        photo,
        format.query(),
        width,
        quality
    )
}

pub fn unsplash_srcset(photo: &str, format: ImageFormat, widths: &[(u32, u32)]) -> String {
    widths
        .iter()
        .map(|&(width, quality)| format!("{} {}w", unsplash_url(photo, format, width, quality), width))
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn maps_href() -> String {
    format!("https://maps.google.com/?q={}", urlencoding::encode(config::MAPS_QUERY))
}

/// In-page anchor targets, in page order.
pub mod anchors {
    pub const HOME: &str = "home";
    pub const SERVICES: &str = "services";
    pub const AREAS: &str = "areas";
    pub const PROBLEMS: &str = "problems";
    pub const FAQ: &str = "faq";
    pub const CONTACT: &str = "contact";
}

pub struct NavLink {
    pub anchor: &'static str,
    pub label: &'static str,
    pub cta: bool,
}

pub const NAV_LINKS: [NavLink; 5] = [
    NavLink { anchor: anchors::SERVICES, label: "სერვისები", cta: false },
    NavLink { anchor: anchors::AREAS, label: "უბნები", cta: false },
    NavLink { anchor: anchors::PROBLEMS, label: "პრობლემები", cta: false },
    NavLink { anchor: anchors::FAQ, label: "FAQ", cta: false },
    NavLink { anchor: anchors::CONTACT, label: "კონტაქტი", cta: true },
];

pub struct Service {
    pub title: &'static str,
    pub photo: &'static str,
    pub lead: &'static str,
    pub price: Option<&'static str>,
    pub description: &'static str,
}

pub const SERVICES: [Service; 6] = [
    Service {
        title: "დიაგნოსტიკა და რემონტი",
        photo: "photo-1606208427956-cf2cfb3ac5b0",
        lead: "საწყისი დიაგნოსტიკა ",
        price: Some("40 ₾"),
        description: "-დან. დეტალური შემოწმება და პრობლემის სწრაფი გამოსავალი ადგილზე.",
    },
    Service {
        title: "გაჟონვის აღმოფხვრა",
        photo: "photo-1545259741-2ea3ebf61fa7",
        lead: "",
        price: None,
        description: "შლანგის, ფილტრის ან მანჟეტის პრობლემების სწრაფი დიაგნოსტიკა და შეცვლა.",
    },
    Service {
        title: "ძრავი / ტუმბო / გაწურვა",
        photo: "photo-1626824132374-7623cf1bc98f",
        lead: "",
        price: None,
        description: "არ ტრიალებს? არ იწურავს? — გავწმენდთ ფილტრებს, შევამოწმებთ ბრაშებს/ტუმბოს და გავაკეთებთ საჭირო ჩანაცვლებას.",
    },
    Service {
        title: "წყალს არ იღებს / არ უშვებს",
        photo: "photo-1620403729310-bdc7ddc54228",
        lead: "",
        price: None,
        description: "შემოვცვლით სოლენოიდს, შევამოწმებთ სადრენაჟე მილს და ელექტრონულ ბლოკს.",
    },
    Service {
        title: "მონტაჟი / გადაადგილება",
        photo: "photo-1578869289848-0f42d12e431f",
        lead: "",
        price: None,
        description: "სწორი დაყენება ვიბრაციისა და ხმაურის გარეშე. შევამოწმებთ ბალანსსა და ჰორიზონტს.",
    },
    Service {
        title: "პროფილაქტიკა და გაწმენდა",
        photo: "photo-1588348456921-b92b9ff3c6b5",
        lead: "",
        price: None,
        description: "ქვარმწმენდის, ფილტრის და გამათბობლის გაწმენდა სიცოცხლის წლებისთვის.",
    },
];

/// Areas listed on the page. The structured data uses a shorter list.
pub const AREAS: [&str; 11] = [
    "საბურთალო",
    "ვაკე",
    "ვერა",
    "ვერა/მთაწმინდა",
    "დიდუბე",
    "ჩუღურეთი",
    "ისანი",
    "სამგორი",
    "გლდანი",
    "ნაძალადევი",
    "დიღომი",
];

pub struct Card {
    pub heading: &'static str,
    pub body: &'static str,
}

pub const PROBLEMS: [Card; 4] = [
    Card {
        heading: "არ ირთვება",
        body: "შევამოწმებთ კვებას, კართან საკეტს და ელექტრონულ ბლოკს. დეტალების შეცვლა მხოლოდ შეთანხმებით.",
    },
    Card {
        heading: "არ ტრიალებს / არ იწურავს",
        body: "ტუმბოს, ქამრის ან კოლექტორის პრობლემა. დავადგენთ მიზეზს და გეტყვით ფასს წინასწარ.",
    },
    Card {
        heading: "გაჟონვა",
        body: "ხშირად გამოწვეულია მანჟეტის ან შლანგის დაზიანებით. ადგილზე მოვიტანთ სათადარიგო ნაწილებს.",
    },
    Card {
        heading: "წყალს არ იღებს",
        body: "სოლენოიდის, ფილტრის ან წნევის სენსორის პრობლემა. სწრაფი დიაგნოსტიკა და შეცვლა.",
    },
];

pub const STEPS: [Card; 4] = [
    Card {
        heading: "შეკვეთა",
        body: "დაგვირეკეთ ან შეავსეთ ფორმა — მიუთითეთ ბრენდი/მოდელი და პრობლემა.",
    },
    Card {
        heading: "გამოძახება",
        body: "ხელოსანი მოვა შეთანხმებულ დროს, ჩაატარებს დიაგნოსტიკას და შეგითანხმებთ ფასს.",
    },
    Card {
        heading: "რემონტი",
        body: "მუშაობა შესრულდება ადგილზე ან სახელოსნოში (საჭიროების შემთხვევაში).",
    },
    Card {
        heading: "გარანტია",
        body: "ნებისმიერ სამუშაოზე მოგცემთ წერილობით გარანტიას.",
    },
];

/// FAQ shown on the page (shorter wording than the structured-data answers).
pub const FAQ: [Card; 3] = [
    Card {
        heading: "რა ღირს დიაგნოსტიკა?",
        body: "დაწყება 40 ₾-დან. ზუსტი ღირებულება დაზიანებაზეა დამოკიდებული.",
    },
    Card {
        heading: "რამდენ ხანში მოხდება ვიზიტი?",
        body: "ჩვეულებრივ იმ დღეს ან მომდევნო დღეს. სასწრაფო მომსახურებაც შესაძლებელია.",
    },
    Card {
        heading: "აქვს თუ არა სამუშაოს გარანტია?",
        body: "დიახ — მინიმუმ 30 დღე, პრობლემის ტიპზე დამოკიდებით.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn srcset_lists_every_width_with_descriptor() {
        let srcset = unsplash_srcset(HERO_PHOTO, ImageFormat::Avif, &HERO_WIDTHS);
        let entries: Vec<&str> = srcset.split(", ").collect();
        assert_eq!(entries.len(), 3);
        assert_eq!(
            entries[0],
            "https://images.unsplash.com/photo-1628321253151-bdf5f9f8f414?auto=format&fit=crop&fm=avif&w=600&q=70 600w"
        );
        assert!(entries[2].ends_with("&w=1200&q=80 1200w"));
    }

    #[test]
    fn original_format_has_no_fm_parameter() {
        let url = unsplash_url(HERO_PHOTO, ImageFormat::Original, 1200, 80);
        assert_eq!(
            url,
            "https://images.unsplash.com/photo-1628321253151-bdf5f9f8f414?auto=format&fit=crop&w=1200&q=80"
        );
        assert_eq!(ImageFormat::Original.mime(), None);
        assert_eq!(ImageFormat::Webp.mime(), Some("image/webp"));
    }

    #[test]
    fn maps_query_is_percent_encoded() {
        assert_eq!(maps_href(), "https://maps.google.com/?q=DrWash%20Tbilisi");
    }

    #[test]
    fn nav_links_point_at_sections_and_end_with_cta() {
        let targets: Vec<&str> = NAV_LINKS.iter().map(|link| link.anchor).collect();
        assert_eq!(targets, ["services", "areas", "problems", "faq", "contact"]);
        assert!(NAV_LINKS.iter().take(4).all(|link| !link.cta));
        assert!(NAV_LINKS[4].cta);
    }

    #[test]
    fn only_first_service_carries_a_price() {
        assert_eq!(SERVICES[0].price, Some("40 ₾"));
        assert!(SERVICES.iter().skip(1).all(|service| service.price.is_none()));
    }
}
