use ratatui::style::Color;

#[derive(Debug, Clone)]
pub struct Theme {
    pub name: &'static str,
    pub title_fg: Color,
    pub title_bg: Color,
    pub column_header_fg: Color,
    pub column_header_bg: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub cpu_bar: Color,
    pub mem_bar: Color,
    pub statusbar_bg: Color,
    pub pill_key_fg: Color,
    pub pill_key_bg: Color,
    pub pill_desc_fg: Color,
    pub status_ok: Color,
    pub status_err: Color,
    pub overlay_border: Color,
    pub input_fg: Color,
    pub input_bg: Color,
}

impl Theme {
    pub fn from_config(theme_name: &str) -> Self {
        match theme_name.to_lowercase().as_str() {
            "mono" | "monochrome" => Self::mono(),
            _ => Self::dark(),
        }
    }

    pub fn dark() -> Self {
        Theme {
            name: "dark",
            title_fg: Color::White,
            title_bg: Color::Blue,
            column_header_fg: Color::White,
            column_header_bg: Color::Blue,
            text_primary: Color::Rgb(205, 214, 244),
            text_secondary: Color::Rgb(147, 153, 178),
            cpu_bar: Color::Rgb(166, 227, 161),
            mem_bar: Color::Rgb(137, 180, 250),
            statusbar_bg: Color::Rgb(24, 24, 37),
            pill_key_fg: Color::Rgb(17, 17, 27),
            pill_key_bg: Color::Rgb(137, 180, 250),
            pill_desc_fg: Color::Rgb(186, 194, 222),
            status_ok: Color::Rgb(166, 227, 161),
            status_err: Color::Rgb(243, 139, 168),
            overlay_border: Color::Rgb(203, 166, 247),
            input_fg: Color::Rgb(17, 17, 27),
            input_bg: Color::Rgb(205, 214, 244),
        }
    }

    pub fn mono() -> Self {
        Theme {
            name: "mono",
            title_fg: Color::Black,
            title_bg: Color::White,
            column_header_fg: Color::Black,
            column_header_bg: Color::White,
            text_primary: Color::White,
            text_secondary: Color::Gray,
            cpu_bar: Color::White,
            mem_bar: Color::White,
            statusbar_bg: Color::Reset,
            pill_key_fg: Color::Black,
            pill_key_bg: Color::White,
            pill_desc_fg: Color::White,
            status_ok: Color::White,
            status_err: Color::White,
            overlay_border: Color::White,
            input_fg: Color::Black,
            input_bg: Color::White,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
