//! Case-conversion helpers for names that cross the XML/SDMX-IM boundary.

/// Lowercase the first character, leaving the rest untouched
/// (`ObservationalTimePeriod` → `observationalTimePeriod`), as SDMX-ML's
/// `textType` attribute values are upper camel case while some SDMX-IM
/// bindings spell the same enum lowercase-first.
pub fn lowercase_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Convert an `UpperCamelCase` or `lowerCamelCase` attribute name to
/// `snake_case` (`minLength` → `min_length`), the convention SDMX-ML facet
/// attribute names are translated to on the `FacetType` side of the model.
pub fn to_snake_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 4);
    for (i, ch) in s.chars().enumerate() {
        if ch.is_uppercase() {
            if i != 0 {
                out.push('_');
            }
            out.extend(ch.to_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_only_first_character() {
        assert_eq!(lowercase_first("ObservationalTimePeriod"), "observationalTimePeriod");
        assert_eq!(lowercase_first(""), "");
    }

    #[test]
    fn converts_camel_case_to_snake_case() {
        assert_eq!(to_snake_case("minLength"), "min_length");
        assert_eq!(to_snake_case("isSequence"), "is_sequence");
        assert_eq!(to_snake_case("pattern"), "pattern");
    }
}
