use crate::config;

/// One quote request per form instance. Fields are replaced one at a time as
/// the visitor edits the form; the record only lives until the page unloads.
#[derive(Clone, Debug, PartialEq)]
pub struct QuoteRequest {
    pub name: String,
    pub phone: String,
    pub area: String,
    pub model: String,
    pub issue: String,
}

impl Default for QuoteRequest {
    fn default() -> Self {
        Self {
            name: String::new(),
            phone: String::new(),
            area: config::AREAS[0].to_string(),
            model: String::new(),
            issue: String::new(),
        }
    }
}

impl QuoteRequest {
    /// The form is submittable once every free-text field has something in
    /// it. Values are taken exactly as typed, whitespace included. `area`
    /// always holds a selection and never gates.
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty()
            && !self.phone.is_empty()
            && !self.model.is_empty()
            && !self.issue.is_empty()
    }

    /// The pre-filled WhatsApp message: six fixed lines, field values
    /// verbatim. Encoding is left to `deep_link`.
    pub fn message_body(&self, business_name: &str) -> String {
        [
            format!("Olá, me chamo {}. Quero agendar um Orçamento.", self.name),
            format!("Telefone: {}", self.phone),
            format!("Bairro: {}", self.area),
            format!("Modelo: {}", self.model),
            format!("Problema: {}", self.issue),
            format!("Origem: Site ({})", business_name),
        ]
        .join("\n")
    }
}

/// `{base_url}?text={message}`, message percent-encoded. This is the only
/// place encoding happens; callers pass raw text.
pub fn deep_link(base_url: &str, message: &str) -> String {
    format!("{}?text={}", base_url, urlencoding::encode(message))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> QuoteRequest {
        QuoteRequest {
            name: "Ana".to_string(),
            phone: "11999999999".to_string(),
            area: "Centro".to_string(),
            model: "iPhone 12".to_string(),
            issue: "tela trincada".to_string(),
        }
    }

    #[test]
    fn new_request_starts_incomplete_with_first_area_selected() {
        let request = QuoteRequest::default();
        assert_eq!(request.area, config::AREAS[0]);
        assert!(!request.is_complete());
    }

    #[test]
    fn any_empty_text_field_blocks_completion() {
        let mut request = filled();
        request.name.clear();
        assert!(!request.is_complete());

        let mut request = filled();
        request.phone.clear();
        assert!(!request.is_complete());

        let mut request = filled();
        request.model.clear();
        assert!(!request.is_complete());

        let mut request = filled();
        request.issue.clear();
        assert!(!request.is_complete());
    }

    #[test]
    fn whitespace_only_counts_as_present() {
        let mut request = filled();
        request.name = "   ".to_string();
        assert!(request.is_complete());
    }

    #[test]
    fn area_never_gates_completion() {
        let mut request = filled();
        request.area.clear();
        assert!(request.is_complete());
    }

    #[test]
    fn message_body_is_the_six_fixed_lines() {
        let body = filled().message_body("SunferTech");
        assert_eq!(
            body,
            "Olá, me chamo Ana. Quero agendar um Orçamento.\n\
             Telefone: 11999999999\n\
             Bairro: Centro\n\
             Modelo: iPhone 12\n\
             Problema: tela trincada\n\
             Origem: Site (SunferTech)"
        );
    }

    #[test]
    fn field_values_are_interpolated_verbatim() {
        let mut request = filled();
        request.model = "Galaxy 50%".to_string();
        request.issue = "molhou\nnão liga mais".to_string();
        let body = request.message_body("SunferTech");
        assert!(body.contains("Modelo: Galaxy 50%"));
        assert!(body.contains("Problema: molhou\nnão liga mais"));
        // the embedded newline adds a seventh physical line
        assert_eq!(body.lines().count(), 7);
    }

    #[test]
    fn deep_link_percent_encodes_the_message() {
        let link = deep_link("https://wa.me/5519971344065", "Olá, tudo bem?\nSim");
        assert_eq!(
            link,
            "https://wa.me/5519971344065?text=Ol%C3%A1%2C%20tudo%20bem%3F%0ASim"
        );
    }

    #[test]
    fn unreserved_characters_pass_through_unencoded() {
        let link = deep_link("https://wa.me/1", "abc-XYZ_0.9~");
        assert_eq!(link, "https://wa.me/1?text=abc-XYZ_0.9~");
    }

    #[test]
    fn deep_link_round_trips_through_percent_decoding() {
        let message = filled().message_body(config::BUSINESS_NAME);
        let link = deep_link(&config::whatsapp_base(), &message);
        let (base, encoded) = link.split_once("?text=").unwrap();
        assert_eq!(base, config::whatsapp_base());
        assert_eq!(urlencoding::decode(encoded).unwrap(), message);
    }
}
