use crate::{
    dom::{ids, Document, Node},
    error::AppResult,
    models::{PhoneResult, RecommendationResponse, UsageCategory},
    services::sentiment::{format_score, SentimentLabel},
};

pub const RUPEE: char = '₹';

/// Appends a recommendation payload to the three result panels.
///
/// Panels are not cleared here; callers that want replacement semantics must
/// clear them first.
pub fn render_results(
    doc: &mut Document,
    response: &RecommendationResponse,
    usage: UsageCategory,
) -> AppResult<()> {
    for phone in &response.main {
        doc.append(ids::MAIN_PANEL, phone_card(phone))?;
    }
    for phone in &response.additional {
        doc.append(ids::ADDITIONAL_PANEL, phone_card(phone))?;
    }
    if let Some(list) = bonus_list(&response.bonus, usage) {
        doc.append(ids::BONUS_PANEL, list)?;
    }

    tracing::debug!(
        main = response.main.len(),
        additional = response.additional.len(),
        bonus = response.bonus.len(),
        usage = %usage,
        "Rendered recommendations"
    );

    Ok(())
}

/// Rupee-prefixed price, or "N/A" when the service sent none
pub fn format_price(price: Option<f64>) -> String {
    match price {
        Some(price) => format!("{}{}", RUPEE, price),
        None => "N/A".to_string(),
    }
}

/// Card for one phone: name, price, first review, sentiment and buy link
pub fn phone_card(phone: &PhoneResult) -> Node {
    let review = format!("\"{}\"", phone.first_review().unwrap_or_default());

    let mut sentiment = Node::new("p")
        .class("sentiment")
        .text(format!("Sentiment: {} ", format_score(phone.sentiment)));
    if let Some(label) = SentimentLabel::from_score(phone.sentiment) {
        sentiment = sentiment.child(label.to_node());
    }

    let mut card = Node::new("div")
        .class("phone")
        .child(Node::new("h3").text(phone.name()))
        .child(Node::new("p").class("price").text(format_price(phone.price)))
        .child(Node::new("p").class("review").text(review))
        .child(sentiment);

    if let Some(link) = phone.purchase_link() {
        card = card.child(
            Node::new("a")
                .class("buy-btn")
                .attr("href", link)
                .attr("target", "_blank")
                .text("Buy →"),
        );
    }

    card
}

/// Bonus suggestions as one list themed by usage, or nothing when empty
pub fn bonus_list(bonus: &[String], usage: UsageCategory) -> Option<Node> {
    if bonus.is_empty() {
        return None;
    }
    let list = bonus.iter().fold(
        Node::new("ul").class("bonus-list").class(usage.css_class()),
        |list, item| list.child(Node::new("li").text(item.clone())),
    );
    Some(list)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phone(name: &str, price: f64, sentiment: Option<f64>) -> PhoneResult {
        let mut phone = PhoneResult::new(name, price);
        phone.sentiment = sentiment;
        phone
    }

    #[test]
    fn test_card_contents() {
        let mut p = phone("Galaxy S23", 64999.0, Some(82.0));
        p.reviews = vec!["Great camera".to_string(), "Meh".to_string()];
        p.purchase_link = Some("https://shop.example/s23".to_string());

        let card = phone_card(&p);
        assert!(card.has_class("phone"));
        assert_eq!(card.find_tag("h3").unwrap().text_content(), "Galaxy S23");
        assert_eq!(card.find_class("price").unwrap().text_content(), "₹64999");
        assert_eq!(card.find_class("review").unwrap().text_content(), "\"Great camera\"");
        assert_eq!(
            card.find_class("sentiment").unwrap().text_content(),
            "Sentiment: 82% Positive"
        );

        let link = card.find_class("buy-btn").unwrap();
        assert_eq!(link.attribute("href"), Some("https://shop.example/s23"));
        assert_eq!(link.attribute("target"), Some("_blank"));
    }

    #[test]
    fn test_card_placeholders() {
        let card = phone_card(&phone("Mystery", 9999.5, None));
        assert_eq!(card.find_class("price").unwrap().text_content(), "₹9999.5");
        assert_eq!(card.find_class("review").unwrap().text_content(), "\"\"");
        assert_eq!(card.find_class("sentiment").unwrap().text_content(), "Sentiment: N/A ");
        assert!(card.find_class("sentiment-label").is_none());
        assert!(card.find_class("buy-btn").is_none());
    }

    #[test]
    fn test_card_without_name_or_price() {
        let nameless: PhoneResult = serde_json::from_str(r#"{"price": 1.0}"#).unwrap();
        let card = phone_card(&nameless);
        assert_eq!(card.find_tag("h3").unwrap().text_content(), "Unknown phone");
        assert_eq!(card.find_class("price").unwrap().text_content(), "₹1");

        let unpriced: PhoneResult = serde_json::from_str(r#"{"name": "X"}"#).unwrap();
        let card = phone_card(&unpriced);
        assert_eq!(card.find_tag("h3").unwrap().text_content(), "X");
        assert_eq!(card.find_class("price").unwrap().text_content(), "N/A");
        assert_eq!(card.find_class("sentiment").unwrap().text_content(), "Sentiment: N/A ");
    }

    #[test]
    fn test_render_payload_with_missing_scalars() {
        let mut doc = Document::standard();
        let response: RecommendationResponse = serde_json::from_str(
            r#"{"main":[{"price":1.0}],"additional":[{"name":"X"}],"bonus":["b"]}"#,
        )
        .unwrap();

        render_results(&mut doc, &response, UsageCategory::Casual).unwrap();

        assert_eq!(doc.children(ids::MAIN_PANEL).unwrap().len(), 1);
        assert_eq!(doc.children(ids::ADDITIONAL_PANEL).unwrap().len(), 1);
        assert_eq!(doc.children(ids::BONUS_PANEL).unwrap().len(), 1);
    }

    #[test]
    fn test_card_zero_sentiment_gets_label() {
        let card = phone_card(&phone("Brick", 500.0, Some(0.0)));
        let label = card.find_class("sentiment-label").unwrap();
        assert_eq!(label.text_content(), "Negative");
        assert_eq!(label.attribute("style"), Some("color:red;font-weight:bold;"));
    }

    #[test]
    fn test_render_preserves_order() {
        let mut doc = Document::standard();
        let response = RecommendationResponse {
            main: vec![phone("A", 1.0, None), phone("B", 2.0, None)],
            additional: vec![phone("C", 3.0, Some(50.0))],
            bonus: vec![],
        };

        render_results(&mut doc, &response, UsageCategory::Casual).unwrap();

        let main: Vec<String> = doc
            .children(ids::MAIN_PANEL)
            .unwrap()
            .iter()
            .map(|card| card.find_tag("h3").unwrap().text_content())
            .collect();
        assert_eq!(main, vec!["A", "B"]);
        assert_eq!(doc.children(ids::ADDITIONAL_PANEL).unwrap().len(), 1);
        assert!(doc.children(ids::BONUS_PANEL).unwrap().is_empty());
    }

    #[test]
    fn test_bonus_list_class_and_items() {
        let bonus = vec!["ROG Phone 8".to_string(), "iQOO 12".to_string()];
        let list = bonus_list(&bonus, UsageCategory::Gaming).unwrap();
        assert_eq!(list.classes, vec!["bonus-list", "gaming"]);
        let items: Vec<String> = list.children().map(Node::text_content).collect();
        assert_eq!(items, bonus);

        assert!(bonus_list(&[], UsageCategory::Gaming).is_none());
    }

    #[test]
    fn test_render_appends_without_clearing() {
        let mut doc = Document::standard();
        let response = RecommendationResponse {
            main: vec![phone("A", 1.0, None)],
            additional: vec![],
            bonus: vec!["X".to_string()],
        };

        render_results(&mut doc, &response, UsageCategory::Casual).unwrap();
        render_results(&mut doc, &response, UsageCategory::Casual).unwrap();

        assert_eq!(doc.children(ids::MAIN_PANEL).unwrap().len(), 2);
        assert_eq!(doc.children(ids::BONUS_PANEL).unwrap().len(), 2);
    }
}
