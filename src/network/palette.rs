use super::model::CategoryId;
use palette::Srgba;

/// Categories without a palette entry fall back to a neutral gray.
pub const FALLBACK: (u8, u8, u8) = (0x8E, 0x91, 0x96);

/// Resolves a category's display color. Total: every identifier maps to
/// something, so the view never sees an undefined color.
pub fn category_color(id: &CategoryId) -> Srgba<f64> {
    let (r, g, b) = match id.as_str() {
        "medical" => (0x6E, 0x59, 0xA5),       // soft purple
        "factories" => (0xE5, 0x89, 0x3D),     // soft orange
        "education" => (0x51, 0xA8, 0x94),     // teal
        "retail" => (0x7E, 0x69, 0xAB),        // purple
        "technology" => (0xD6, 0x70, 0x7B),    // soft pink
        "finance" => (0x5B, 0x8A, 0xD6),       // soft blue
        "construction" => (0xAB, 0xA1, 0x59),  // soft gold
        "entertainment" => (0x9B, 0x87, 0xF5), // bright purple
        "logistics" => (0x5B, 0x8B, 0xC5),     // medium blue
        "agriculture" => (0x63, 0xA8, 0x6B),   // medium green
        _ => FALLBACK,
    };
    rgb(r, g, b)
}

/// CSS hex form ("#6E59A5"), as the page templates consume it.
pub fn css_hex(color: Srgba<f64>) -> String {
    let (r, g, b, _) = color.into_components();
    format!(
        "#{:02X}{:02X}{:02X}",
        (r * 255.0).round() as u8,
        (g * 255.0).round() as u8,
        (b * 255.0).round() as u8
    )
}

fn rgb(r: u8, g: u8, b: u8) -> Srgba<f64> {
    Srgba::new(r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_categories_resolve() {
        let cases = vec![
            ("medical", "#6E59A5"),
            ("factories", "#E5893D"),
            ("education", "#51A894"),
            ("retail", "#7E69AB"),
            ("technology", "#D6707B"),
            ("finance", "#5B8AD6"),
            ("construction", "#ABA159"),
            ("entertainment", "#9B87F5"),
            ("logistics", "#5B8BC5"),
            ("agriculture", "#63A86B"),
        ];

        for (id, hex) in cases {
            let color = category_color(&CategoryId::new(id));
            assert_eq!(css_hex(color), hex, "wrong color for {id}");
        }
    }

    #[test]
    fn test_unknown_category_gets_neutral_gray() {
        for id in ["hospitality", "", "Medical"] {
            let color = category_color(&CategoryId::new(id));
            assert_eq!(css_hex(color), "#8E9196", "expected fallback for {id:?}");
        }
    }
}
