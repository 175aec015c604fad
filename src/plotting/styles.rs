use plotters::style::RGBAColor;

/// Chart theme configuration
#[derive(Debug, Clone, Copy)]
pub struct ChartTheme {
    pub background_color: RGBAColor,
    pub text_color: RGBAColor,
    pub grid_color: RGBAColor,
    pub axis_color: RGBAColor,
    /// Daily minimum series, `#42bff4`
    pub min_color: RGBAColor,
    /// Daily maximum series, `#ff5349`
    pub max_color: RGBAColor,
    /// Text drawn on top of bars
    pub bar_label_color: RGBAColor,
}

impl Default for ChartTheme {
    fn default() -> Self {
        Self {
            background_color: RGBAColor(229, 229, 229, 1.0),
            text_color: RGBAColor(77, 77, 77, 1.0),
            grid_color: RGBAColor(255, 255, 255, 1.0),
            axis_color: RGBAColor(77, 77, 77, 0.8),
            min_color: RGBAColor(66, 191, 244, 1.0),
            max_color: RGBAColor(255, 83, 73, 1.0),
            bar_label_color: RGBAColor(255, 255, 255, 1.0),
        }
    }
}

/// Chart style configuration
#[derive(Debug, Clone, Copy)]
pub struct ChartStyle {
    pub width: u32,
    pub height: u32,
    pub line_width: u32,
    pub point_size: u32,
    pub caption_size: u32,
    pub font_size: u32,
    pub margin: u32,
    pub label_area_size: u32,
    /// Width of one day slot taken by bars, in day units
    pub bar_width: f64,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            line_width: 2,
            point_size: 4,
            caption_size: 24,
            font_size: 15,
            margin: 10,
            label_area_size: 50,
            bar_width: 0.8,
        }
    }
}
