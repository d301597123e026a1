/// Presentation settings of one chart axis, for consumers that plot metric series over time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AxisStyle {
    pub top_spine: bool,
    pub right_spine: bool,
    pub bottom_spine: bool,
    pub left_spine: bool,
    pub legend_frame: bool,
    pub x_label: Option<String>,
}

impl Default for AxisStyle {
    fn default() -> Self {
        Self {
            top_spine: true,
            right_spine: true,
            bottom_spine: true,
            left_spine: true,
            legend_frame: true,
            x_label: None,
        }
    }
}

pub const DATE_AXIS_LABEL: &str = "Date";

/// House style for time series axes: open top and right, frameless legend, dated x axis.
pub fn style_axis(style: AxisStyle) -> AxisStyle {
    AxisStyle {
        top_spine: false,
        right_spine: false,
        legend_frame: false,
        x_label: Some(DATE_AXIS_LABEL.to_owned()),
        ..style
    }
}

#[cfg(test)]
mod tests {
    use crate::util::axis_style::{style_axis, AxisStyle};

    #[test]
    fn styles_without_touching_other_settings() {
        let original = AxisStyle { left_spine: false, ..AxisStyle::default() };
        let styled = style_axis(original.clone());

        assert!(!styled.top_spine && !styled.right_spine && !styled.legend_frame);
        assert!(styled.bottom_spine);
        assert!(!styled.left_spine);
        assert_eq!(styled.x_label.as_deref(), Some("Date"));
        assert_eq!(style_axis(styled.clone()), styled);
        assert!(original.top_spine);
    }
}
