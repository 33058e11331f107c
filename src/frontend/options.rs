use log::warn;

use crate::board::RenderStyle;

/// Front-end settings, changed with `setoption name <name> value <value>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOptions {
    pub glyphs: bool,
    pub coordinates: bool,
    pub highlight: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        SessionOptions {
            glyphs: true,
            coordinates: true,
            highlight: true,
        }
    }
}

impl SessionOptions {
    #[must_use]
    pub const fn render_style(&self) -> RenderStyle {
        RenderStyle {
            glyphs: self.glyphs,
            coordinates: self.coordinates,
        }
    }

    /// Apply one option. Returns `false` for unknown names or unusable values.
    pub fn apply_setoption(&mut self, name: &str, value: Option<&str>) -> bool {
        let normalized = name.trim().to_ascii_lowercase();
        let slot = match normalized.as_str() {
            "glyphs" => &mut self.glyphs,
            "showcoordinates" | "coordinates" => &mut self.coordinates,
            "highlight" => &mut self.highlight,
            _ => {
                warn!("unknown option '{name}'");
                return false;
            }
        };
        match value.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
            Some("true") => *slot = true,
            Some("false") => *slot = false,
            other => {
                warn!("option '{name}' expects true or false, got {other:?}");
                return false;
            }
        }
        true
    }

    /// Parse `setoption name <name words...> [value <value>]`.
    pub fn apply_setoption_parts(&mut self, parts: &[String]) -> bool {
        let Some(name_idx) = parts.iter().position(|p| p == "name") else {
            return false;
        };
        let value_idx = parts.iter().position(|p| p == "value");
        let name_end = value_idx.unwrap_or(parts.len());
        if name_end <= name_idx + 1 {
            return false;
        }
        let name = parts[name_idx + 1..name_end].join("");
        let value = value_idx.and_then(|i| parts.get(i + 1)).map(String::as_str);
        self.apply_setoption(&name, value)
    }
}
