// Fixed deploy values. Edit these when rebranding the site or when the
// attendance number changes.

pub const BUSINESS_NAME: &str = "SunferTech";
pub const CITY: &str = "Rio Claro e região";

/// Country + area + local number, digits only. wa.me links take no `+` and
/// no separators.
pub const WHATSAPP_NUMBER: &str = "5519971344065";

/// Pickup/delivery coverage, in display order. The first entry is the quote
/// form's default selection.
pub const AREAS: [&str; 5] = [
    "Centro",
    "Vilas/Condomínios próximos",
    "Bairros principais",
    "Zona Norte",
    "Zona Sul",
];

pub fn whatsapp_base() -> String {
    format!("https://wa.me/{}", WHATSAPP_NUMBER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whatsapp_number_is_digits_only() {
        assert!(WHATSAPP_NUMBER.chars().all(|c| c.is_ascii_digit()));
    }
}
