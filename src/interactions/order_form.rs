use log::info;

pub const CONFIRMATION: &str = "გაგზავნილია! მალე დაგიკავშირდებით.";
pub const DISTRICT_PROMPT: &str = "აირჩიეთ უბანი";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum District {
    Saburtalo,
    Vake,
    Vera,
    Didube,
    Isani,
    Gldani,
    Nadzaladevi,
    Other,
}

impl District {
    pub const ALL: [District; 8] = [
        District::Saburtalo,
        District::Vake,
        District::Vera,
        District::Didube,
        District::Isani,
        District::Gldani,
        District::Nadzaladevi,
        District::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            District::Saburtalo => "საბურთალო",
            District::Vake => "ვაკე",
            District::Vera => "ვერა",
            District::Didube => "დიდუბე",
            District::Isani => "ისანი",
            District::Gldani => "გლდანი",
            District::Nadzaladevi => "ნაძალადევი",
            District::Other => "სხვა",
        }
    }

    /// Parses a `<select>` value. The empty prompt option yields `None`.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|district| district.label() == label)
    }
}

/// Client-side order request. Nothing leaves the browser.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OrderForm {
    pub name: String,
    pub phone: String,
    pub district: Option<District>,
    pub brand: String,
    pub message: String,
}

impl OrderForm {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Acknowledges the order and clears every field. Cannot fail.
    pub fn submit(&mut self) -> &'static str {
        info!(
            "order form submitted (district: {})",
            self.district.map(District::label).unwrap_or("-")
        );
        self.reset();
        CONFIRMATION
    }
}
