//! Text report
//!
//! Fixed-width bordered cards, one per summary dimension.

use std::fmt::Write;

use crate::domain::YearInReviewSummary;

/// Total card width, borders included
pub const CARD_WIDTH: usize = 70;

/// Room for text inside a card line
const INTERIOR: usize = CARD_WIDTH - 4;

/// Cities listed before the rest is summarized
const MAX_CITIES_SHOWN: usize = 5;

/// Experience cities listed
const MAX_EXPERIENCE_CITIES_SHOWN: usize = 3;

/// Render the full text report
pub fn render_text(summary: &YearInReviewSummary) -> String {
    let mut out = String::new();

    let _ = writeln!(out);
    let _ = writeln!(out, "{}", "═".repeat(CARD_WIDTH));
    let banner = format!("  🎉 YOUR {} AIRBNB WRAPPED 🎉", summary.year);
    let _ = writeln!(out, "{banner:^width$}", width = CARD_WIDTH);
    let _ = writeln!(out, "{}", "═".repeat(CARD_WIDTH));

    card(
        &mut out,
        "📊",
        &format!("YOUR {} BY THE NUMBERS", summary.year),
        &numbers_lines(summary),
    );
    card(&mut out, "🗺️", "PLACES YOU EXPLORED", &places_lines(summary));
    if let Some(lines) = travel_style_lines(summary) {
        card(&mut out, "✨", "YOUR TRAVEL STYLE", &lines);
    }
    card(&mut out, "🤝", "HOSTS & EXPERIENCES", &hosts_lines(summary));
    card(
        &mut out,
        "🔮",
        &format!("LOOKING AHEAD TO {}", summary.year.saturating_add(1)),
        &looking_ahead_lines(summary),
    );

    let _ = writeln!(out);
    let _ = writeln!(out, "{}", "─".repeat(CARD_WIDTH));
    let member = format!(
        "Airbnb member for {} years",
        summary.user_profile.years_as_member
    );
    let _ = writeln!(out, "{member:^width$}", width = CARD_WIDTH);
    let _ = writeln!(out, "{}", "─".repeat(CARD_WIDTH));
    let _ = writeln!(out);

    out
}

fn numbers_lines(summary: &YearInReviewSummary) -> Vec<String> {
    let trips = &summary.trips;
    let mut lines = vec![
        format!("🏠 {} trips taken", trips.total_trips),
        format!("🌙 {} nights away from home", trips.total_nights),
        format!("🌍 {} countries explored", trips.countries_visited.len()),
        format!("🏙️  {} cities discovered", trips.cities_visited.len()),
        format!("🎭 {} experiences enjoyed", summary.experiences.total_experiences),
        format!("⭐ {} reviews shared", summary.reviews.reviews_written),
    ];

    if summary.user_profile.is_highly_rated {
        lines.push("✨ Highly Rated Guest Badge!".to_string());
    }
    if summary.user_profile.is_superhost {
        lines.push("🏆 Superhost Status!".to_string());
    }
    lines
}

fn places_lines(summary: &YearInReviewSummary) -> Vec<String> {
    let trips = &summary.trips;
    let mut lines = Vec::new();

    if !trips.countries_visited.is_empty() {
        lines.push(format!("Countries: {}", join(trips.countries_visited.iter(), usize::MAX)));
        lines.push(String::new());
    }
    if !trips.cities_visited.is_empty() {
        lines.push(format!("Cities: {}", join(trips.cities_visited.iter(), MAX_CITIES_SHOWN)));
        if trips.cities_visited.len() > MAX_CITIES_SHOWN {
            lines.push(format!(
                "...and {} more!",
                trips.cities_visited.len() - MAX_CITIES_SHOWN
            ));
        }
        lines.push(String::new());
    }
    if summary.total_distance_km > 0.0 {
        lines.push(format!(
            "🛫 Estimated distance traveled: {} km",
            group_thousands(summary.total_distance_km)
        ));
    }
    if let Some(longest) = &trips.longest_trip {
        lines.push(String::new());
        lines.push(format!("Longest adventure: {} nights", longest.nights));
        lines.push(format!("in {}", longest.location));
    }
    lines
}

fn travel_style_lines(summary: &YearInReviewSummary) -> Option<Vec<String>> {
    let personality = summary.travel_personality.as_ref()?;

    let mut lines = vec![
        format!("You are: {}", personality.personality_type),
        String::new(),
        personality.description.clone(),
        String::new(),
        "Your traits:".to_string(),
    ];
    lines.extend(personality.traits.iter().map(|t| format!("  • {t}")));
    Some(lines)
}

fn hosts_lines(summary: &YearInReviewSummary) -> Vec<String> {
    let mut lines = vec![
        format!("👥 Connected with {} hosts", summary.community.hosts_connected),
        format!(
            "🎭 Tried {} unique experiences",
            summary.experiences.total_experiences
        ),
    ];

    if !summary.experiences.cities.is_empty() {
        lines.push(String::new());
        lines.push(format!(
            "Experience cities: {}",
            join(summary.experiences.cities.iter(), MAX_EXPERIENCE_CITIES_SHOWN)
        ));
    }

    let reviews = &summary.reviews;
    if reviews.reviews_written > 0 {
        lines.push(String::new());
        lines.push(format!("⭐ Left {} reviews", reviews.reviews_written));
        lines.push(format!("   ({} were 5-star!)", reviews.five_star_reviews));
        lines.push(format!(
            "   Average rating: {:.1}/5.0",
            reviews.average_rating_given
        ));
    }
    lines
}

fn looking_ahead_lines(summary: &YearInReviewSummary) -> Vec<String> {
    let wishlists = &summary.wishlists;
    let mut lines = vec![
        format!("💝 You have {} wishlists", wishlists.total_wishlists),
        format!(
            "📍 {} places saved for future adventures",
            wishlists.total_items_saved
        ),
    ];

    if !wishlists.top_destinations.is_empty() {
        lines.push(String::new());
        lines.push("Top destinations on your radar:".to_string());
        lines.extend(wishlists.top_destinations.iter().map(|d| format!("  • {d}")));
    }

    lines.push(String::new());
    lines.push(format!(
        "Ready to make {} even more amazing?",
        summary.year.saturating_add(1)
    ));
    lines
}

fn card(out: &mut String, emoji: &str, title: &str, lines: &[String]) {
    let heading = format!("{emoji} {title}");
    let inner = CARD_WIDTH - 2;

    let _ = writeln!(out);
    let _ = writeln!(out, "┌{}┐", "─".repeat(inner));
    let _ = writeln!(out, "│{heading:^inner$}│");
    let _ = writeln!(out, "├{}┤", "─".repeat(inner));
    for line in lines {
        for row in wrap(line, INTERIOR) {
            let _ = writeln!(out, "│ {row:<width$}│", width = CARD_WIDTH - 3);
        }
    }
    let _ = writeln!(out, "└{}┘", "─".repeat(inner));
}

/// Wrap `line` on word boundaries so no row exceeds `width` characters.
///
/// Lines that already fit are returned untouched, leading spaces included.
/// A single word longer than `width` gets a row of its own.
pub fn wrap(line: &str, width: usize) -> Vec<String> {
    if line.chars().count() <= width {
        return vec![line.to_string()];
    }

    let mut rows = Vec::new();
    let mut current = String::new();
    for word in line.split_whitespace() {
        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };

        if needed > width && !current.is_empty() {
            rows.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        rows.push(current);
    }
    rows
}

fn join<'a>(items: impl Iterator<Item = &'a String>, limit: usize) -> String {
    items
        .take(limit)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Format a distance with thousands separators and no decimals
pub fn group_thousands(value: f64) -> String {
    let rounded = value.round() as i64;
    let digits = rounded.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if rounded < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}
