use std::fmt::Write;

use crate::{
    models::{PhoneResult, RecommendationResponse, UsageCategory},
    services::{
        renderer::format_price,
        sentiment::{format_score, SentimentLabel},
    },
};

/// Plain-text rendition of a recommendation payload for terminals
pub fn format_listing(response: &RecommendationResponse, usage: UsageCategory) -> String {
    let mut out = String::new();

    if response.main.is_empty() {
        out.push_str("No phones found for your criteria.\n");
    } else {
        out.push_str("Recommended Phones:\n");
        write_phones(&mut out, &response.main);
    }

    if !response.additional.is_empty() {
        out.push_str("\nSlightly Above Budget:\n");
        write_phones(&mut out, &response.additional);
    }

    if !response.bonus.is_empty() {
        let _ = writeln!(out, "\nBonus Suggestions ({} Edition):", usage);
        for item in &response.bonus {
            let _ = writeln!(out, "  - {}", item);
        }
    }

    out
}

fn write_phones(out: &mut String, phones: &[PhoneResult]) {
    for (n, phone) in phones.iter().enumerate() {
        let _ = writeln!(
            out,
            "{}) {} – {}",
            n + 1,
            phone.display_name(),
            format_price(phone.price)
        );
        let _ = writeln!(out, "   \"{}\"", phone.first_review().unwrap_or_default());

        let label = SentimentLabel::from_score(phone.sentiment)
            .map(|l| format!(" {}", l))
            .unwrap_or_default();
        let _ = writeln!(
            out,
            "   Sentiment: {}{} ({} reviews)",
            format_score(phone.sentiment),
            label,
            phone.review_count()
        );

        if let Some(link) = phone.purchase_link() {
            let _ = writeln!(out, "   Buy → {}", link);
        }
    }
}
