pub const UNKNOWN_CATEGORY: &str = "Category not specified";

/// Human-readable name of a merchant category code.
pub fn describe(code: &str) -> &'static str {
    match code {
        "5411" => "Supermarkets",
        "5812" => "Restaurants",
        _ => UNKNOWN_CATEGORY,
    }
}
