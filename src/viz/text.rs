//! Text measurement and truncation (no backend measures text for us).

/// Heuristic: estimate pixel width of text at `font_px`.
pub fn estimate_text_width_px(text: &str, font_px: f64) -> f64 {
    text.chars().count() as f64 * font_px * 0.60
}

/// Cut `text` to fit `max_px`, marking the cut with a single ellipsis.
pub fn truncate_to_width(text: &str, font_px: f64, max_px: f64) -> String {
    if estimate_text_width_px(text, font_px) <= max_px {
        return text.to_string();
    }
    let per_char = (font_px * 0.60).max(f64::EPSILON);
    let keep = ((max_px / per_char).floor() as usize).saturating_sub(1);
    let mut out: String = text.chars().take(keep).collect();
    out.push('…');
    out
}
