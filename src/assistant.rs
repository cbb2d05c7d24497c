//! Canned answers for the chat widget and the voice command interpreter.

use serde::Serialize;
use utoipa::ToSchema;

use crate::catalog::Catalog;

const OWNER_ANSWER: &str = "HabStick was founded and is owned by Pranav S Nair, an innovative entrepreneur dedicated to improving accessibility technology for the visually impaired.";

const PRICE_SUMMARY: &str = "HabStick products range from ₹1,500 for the HabStick Mini to ₹10,000 for our premium HabStick Max model. Visit our product page for detailed pricing information.";

const FEATURE_SUMMARY: &str = "HabStick features include obstacle detection, voice navigation, emergency alert systems, GPS integration, and long battery life. The specific features vary by model.";

const ABOUT_ANSWER: &str = "HabStick is dedicated to enhancing independence for the visually impaired through innovative navigation technology. Founded by Pranav S Nair, we develop smart navigation aids that combine advanced sensors, voice feedback, and intuitive design.";

/// Matched in order; the first key found in the input wins.
const CANNED: &[(&str, &str)] = &[
    ("owner", OWNER_ANSWER),
    (
        "pranav s nair",
        "Pranav S Nair is the founder and owner of HabStick. He developed the concept after witnessing the challenges faced by visually impaired individuals in his community.",
    ),
    (
        "who created",
        "HabStick was created by Pranav S Nair, who serves as the company's founder and CEO.",
    ),
    (
        "who owns",
        "HabStick is owned by Pranav S Nair, who founded the company with a mission to enhance independence for the visually impaired.",
    ),
    (
        "about pranav",
        "Pranav S Nair is a tech entrepreneur and accessibility advocate who founded HabStick. He has a background in assistive technology and is passionate about creating solutions that improve quality of life for people with visual impairments.",
    ),
    (
        "habstick",
        "HabStick is an advanced navigation aid that combines cutting-edge technology with intuitive design to help visually impaired individuals navigate with confidence.",
    ),
    (
        "products",
        "We offer several HabStick models: HabStick Pro, HabStick Max, HabStick Lite, and HabStick Mini. Each model is designed to meet different needs and budgets while providing reliable navigation assistance.",
    ),
    ("features", FEATURE_SUMMARY),
    ("price", PRICE_SUMMARY),
    (
        "support",
        "For support with your HabStick device, please visit our support page or contact our customer service team. We offer user manuals, video tutorials, and a community forum.",
    ),
    (
        "help",
        "Need help with your HabStick? Check our support page for FAQs, user manuals, and video tutorials. You can also contact our support team directly.",
    ),
    ("about", ABOUT_ANSWER),
];

/// Canned chat answer for `input`, if any.
pub fn chat_reply(input: &str) -> Option<&'static str> {
    let input = input.trim().to_lowercase();
    if input.is_empty() {
        return None;
    }

    if let Some((_, answer)) = CANNED.iter().find(|(key, _)| *key == input) {
        return Some(*answer);
    }
    if let Some((_, answer)) = CANNED.iter().find(|(key, _)| input.contains(key)) {
        return Some(*answer);
    }

    let has = |needle: &str| input.contains(needle);
    let asks_owner = has("who is pranav")
        || has("tell me about pranav")
        || has("founder")
        || (has("who") && (has("owner") || has("created") || has("made")));
    asks_owner.then_some(OWNER_ANSWER)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    Home,
    Products,
    Support,
    Testimonials,
}

impl Page {
    pub fn path(self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::Products => "/products",
            Page::Support => "/support",
            Page::Testimonials => "/testimonials",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum VoiceAction {
    Help,
    Navigate(Page),
    OpenChat,
    CloseChat,
    ListProducts,
    DescribeProduct(String),
    Price,
    Features,
    About,
    StopListening,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct VoiceReply {
    pub action: VoiceAction,
    pub speech: String,
}

impl VoiceReply {
    fn new(action: VoiceAction, speech: impl Into<String>) -> Self {
        Self {
            action,
            speech: speech.into(),
        }
    }
}

/// Interpret a recognized utterance. Rules are checked in a fixed order.
pub fn interpret_voice(command: &str, catalog: &dyn Catalog) -> Option<VoiceReply> {
    let command = command.trim().to_lowercase();
    let any = |needles: &[&str]| needles.iter().any(|n| command.contains(n));

    if any(&["help"]) {
        return Some(VoiceReply::new(
            VoiceAction::Help,
            "I can help you navigate the HabStick website. You can say: products, features, price, support, about, or open chat.",
        ));
    }

    let navigation = [
        (&["go to home", "homepage"][..], Page::Home, "home"),
        (&["go to products", "show products"][..], Page::Products, "products"),
        (&["go to support", "help page"][..], Page::Support, "support"),
        (&["go to testimonials", "reviews"][..], Page::Testimonials, "testimonials"),
    ];
    for (needles, page, label) in navigation {
        if any(needles) {
            return Some(VoiceReply::new(
                VoiceAction::Navigate(page),
                format!("Navigating to {label} page."),
            ));
        }
    }

    if any(&["open chat", "start chat"]) {
        return Some(VoiceReply::new(VoiceAction::OpenChat, "Opening chat assistant."));
    }
    if any(&["close chat", "end chat"]) {
        return Some(VoiceReply::new(VoiceAction::CloseChat, "Closing chat assistant."));
    }

    if any(&["tell me about products", "what products"]) {
        let names: Vec<&str> = catalog.all().iter().map(|p| p.name.as_str()).collect();
        return Some(VoiceReply::new(
            VoiceAction::ListProducts,
            format!(
                "HabStick offers the following products: {}. Say the name of a product to learn more.",
                names.join(", ")
            ),
        ));
    }

    if let Some(product) = catalog
        .all()
        .iter()
        .find(|p| command.contains(&p.name.to_lowercase()))
    {
        return Some(VoiceReply::new(
            VoiceAction::DescribeProduct(product.id.clone()),
            format!(
                "{}: {}. It costs {} rupees.",
                product.name, product.description, product.price
            ),
        ));
    }

    if any(&["price", "cost", "how much"]) {
        return Some(VoiceReply::new(
            VoiceAction::Price,
            "HabStick products range from 1,500 rupees for the HabStick Mini to 10,000 rupees for our premium HabStick Max model.",
        ));
    }
    if any(&["features", "what can it do"]) {
        return Some(VoiceReply::new(VoiceAction::Features, FEATURE_SUMMARY));
    }
    if any(&["about", "company"]) {
        return Some(VoiceReply::new(VoiceAction::About, ABOUT_ANSWER));
    }
    if any(&["stop listening", "stop voice assistant"]) {
        return Some(VoiceReply::new(
            VoiceAction::StopListening,
            "Voice assistant stopping.",
        ));
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::StaticCatalog;

    #[test]
    fn exact_key_wins() {
        assert_eq!(chat_reply("Price"), Some(PRICE_SUMMARY));
    }

    #[test]
    fn first_declared_key_wins_on_partial_match() {
        // "who owns" is declared before "habstick".
        let reply = chat_reply("Who owns HabStick?").unwrap();
        assert!(reply.starts_with("HabStick is owned by"));
        // "features" is declared before "price".
        assert_eq!(chat_reply("what features and price?"), Some(FEATURE_SUMMARY));
    }

    #[test]
    fn owner_special_cases() {
        assert_eq!(chat_reply("Who is the founder?"), Some(OWNER_ANSWER));
        assert_eq!(chat_reply("who made this"), Some(OWNER_ANSWER));
        assert_eq!(chat_reply("who is pranav"), Some(OWNER_ANSWER));
    }

    #[test]
    fn unmatched_chat_has_no_canned_answer() {
        assert_eq!(chat_reply("what's the weather"), None);
        assert_eq!(chat_reply("   "), None);
    }

    #[test]
    fn help_shadows_help_page() {
        let catalog = StaticCatalog::habstick();
        let reply = interpret_voice("open the help page", &catalog).unwrap();
        assert_eq!(reply.action, VoiceAction::Help);
    }

    #[test]
    fn navigation_and_chat_commands() {
        let catalog = StaticCatalog::habstick();
        let nav = interpret_voice("Go to testimonials", &catalog).unwrap();
        assert_eq!(nav.action, VoiceAction::Navigate(Page::Testimonials));
        assert_eq!(nav.speech, "Navigating to testimonials page.");
        assert_eq!(Page::Testimonials.path(), "/testimonials");

        let chat = interpret_voice("please start chat", &catalog).unwrap();
        assert_eq!(chat.action, VoiceAction::OpenChat);
    }

    #[test]
    fn product_names_are_recognized() {
        let catalog = StaticCatalog::habstick();
        let reply = interpret_voice("tell me about the habstick mini", &catalog).unwrap();
        assert_eq!(
            reply.action,
            VoiceAction::DescribeProduct("habstick-mini".into())
        );
        assert!(reply.speech.ends_with("It costs 1500 rupees."));

        let list = interpret_voice("what products do you have", &catalog).unwrap();
        assert!(list.speech.contains("HabStick Pro, HabStick Max, HabStick Lite, HabStick Mini"));
    }

    #[test]
    fn price_and_unknown_commands() {
        let catalog = StaticCatalog::habstick();
        assert_eq!(
            interpret_voice("how much is it", &catalog).map(|r| r.action),
            Some(VoiceAction::Price)
        );
        assert_eq!(interpret_voice("sing a song", &catalog), None);
    }
}
