use log::Level;

pub const SITE_URL: &str = "https://www.drwash.ge/";
pub const SITE_NAME: &str = "DrWash";
pub const SITE_LANG: &str = "ka";
pub const SITE_LOCALE: &str = "ka-GE";

pub const PHONE_DISPLAY: &str = "+995 5XX XX XX XX";
pub const PHONE_TEL: &str = "+9955XXXXXXX";
pub const EMAIL: &str = "info@drwash.ge";

pub const THEME_COLOR: &str = "#0B7A75";
pub const SOCIAL_IMAGE: &str = "https://via.placeholder.com/1200x630.png?text=DrWash+Tbilisi";
pub const PLACEHOLDER_HOST: &str = "https://via.placeholder.com";

pub const GEO_LATITUDE: f64 = 41.7151;
pub const GEO_LONGITUDE: f64 = 44.8271;
pub const MAPS_QUERY: &str = "DrWash Tbilisi";

pub fn tel_href() -> String {
    format!("tel:{}", PHONE_TEL)
}

pub fn mailto_href() -> String {
    format!("mailto:{}", EMAIL)
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose while running under `trunk serve`
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
