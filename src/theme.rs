// Brand palette. Components reference these through the CSS custom
// properties emitted by `css_variables`, so the hex values live in one place.

pub const BERRY: &str = "#9d3789";
pub const BERRY_WHITE: &str = "#fdf9fc";
pub const TEXT_PRIMARY: &str = "#344563";
pub const RULE_GRAY: &str = "#e9e9e9";

pub fn css_variables() -> String {
    format!(
        ":root {{ --berry: {berry}; --berry-white: {berry_white}; --text-primary: {text_primary}; --rule-gray: {rule_gray}; }}",
        berry = BERRY,
        berry_white = BERRY_WHITE,
        text_primary = TEXT_PRIMARY,
        rule_gray = RULE_GRAY,
    )
}
