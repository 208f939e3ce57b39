#[cfg(debug_assertions)]
pub fn contact_endpoint() -> Option<&'static str> {
    option_env!("CARWASH_DEV_CONTACT_ENDPOINT").filter(|url| !url.is_empty())  // unset locally => simulated submit
}

#[cfg(not(debug_assertions))]
pub fn contact_endpoint() -> Option<&'static str> {
    option_env!("CARWASH_CONTACT_ENDPOINT").filter(|url| !url.is_empty())
}

pub const AUTOPLAY_INTERVAL_MS: u32 = 5_000;
pub const STATUS_RESET_MS: u32 = 3_000;
pub const SIMULATED_SUBMIT_MS: u32 = 1_500;

/// Viewports narrower than this show one testimonial per page.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;
pub const NAV_SCROLL_THRESHOLD_PX: f64 = 50.0;
/// Fraction of the viewport an element must reach before it is revealed.
pub const REVEAL_AMOUNT: f64 = 0.2;

pub struct BusinessInfo {
    pub name: &'static str,
    pub tagline: &'static str,
    pub phone: &'static str,
    pub landline: &'static str,
    pub whatsapp: &'static str,
    pub whatsapp_url: &'static str,
    pub address: &'static str,
    pub hours: &'static str,
    pub email: &'static str,
    pub instagram_url: &'static str,
    pub facebook_url: &'static str,
}

pub const BUSINESS: BusinessInfo = BusinessInfo {
    name: "שטיפת מכוניות",
    tagline: "שירות מקצועי ואיכותי",
    phone: "054-123-4567",
    landline: "03-1234567",
    whatsapp: "050-1234567",
    whatsapp_url: "https://wa.me/9721234567",
    address: "רחוב הרצל 123, תל אביב",
    hours: "ראשון-חמישי: 8:00-20:00, שישי: 8:00-14:00",
    email: "info@carwash.co.il",
    instagram_url: "https://instagram.com",
    facebook_url: "https://facebook.com",
};
