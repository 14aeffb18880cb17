//! Text normalization helpers.

/// Title-case a categorical label: the first letter of each alphabetic run
/// is uppercased and the rest lowered, with any non-letter starting a new
/// run (`"RETAIL-FOOD"` becomes `"Retail-Food"`).
#[must_use]
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;

    for c in s.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("retail trade"), "Retail Trade");
        assert_eq!(title_case("RETAIL TRADE"), "Retail Trade");
        assert_eq!(title_case("retail-food"), "Retail-Food");
        assert_eq!(title_case("laundry/dry cleaning"), "Laundry/Dry Cleaning");
        assert_eq!(title_case(""), "");
    }
}
