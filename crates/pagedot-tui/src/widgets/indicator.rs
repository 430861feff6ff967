use pagedot_core::{Indicator, MeasureSpec, Visibility};
use ratatui::{buffer::Buffer, layout::Rect, Frame};

use crate::painter::HalfBlockPainter;
use crate::placement::{place, CellMargins};

pub struct IndicatorWidget;

impl IndicatorWidget {
    /// Paint the indicator inside `area` according to its placement.
    ///
    /// Returns the cells it occupies, or None when hidden or empty.
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        indicator: &mut dyn Indicator,
        scale: f32,
    ) -> Option<Rect> {
        Self::render_to_buffer(frame.buffer_mut(), area, indicator, scale)
    }

    pub fn render_to_buffer(
        buf: &mut Buffer,
        area: Rect,
        indicator: &mut dyn Indicator,
        scale: f32,
    ) -> Option<Rect> {
        let placement = indicator.placement();
        let surface = indicator.surface();
        // The host repaints every frame, the flags only matter for logging
        let invalidation = surface.take_invalidation();
        if invalidation.layout {
            tracing::trace!("Indicator requested relayout");
        }

        if surface.visibility() == Visibility::Gone {
            return None;
        }

        let size = surface.measure(MeasureSpec::Unspecified, MeasureSpec::Unspecified);
        if size.width == 0 || size.height == 0 {
            return None;
        }

        let mut painter = HalfBlockPainter::for_surface(size, scale);
        let margins = CellMargins::from_params(&placement, painter.scale());
        let rect = place(
            area,
            painter.width(),
            painter.height(),
            &placement.rules,
            margins,
        );
        if rect.width == 0 || rect.height == 0 {
            return None;
        }

        surface.draw(&mut painter);
        painter.flush(rect, buf);
        Some(rect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagedot_core::{LineIndicator, LineStyle, PointIndicator, PointStyle};

    const AREA: Rect = Rect { x: 0, y: 0, width: 40, height: 10 };

    #[test]
    fn test_hidden_indicator_draws_nothing() {
        let mut indicator = PointIndicator::default();
        let mut buf = Buffer::empty(AREA);
        let rect = IndicatorWidget::render_to_buffer(&mut buf, AREA, &mut indicator, 5.0);
        assert!(rect.is_none());
        assert_eq!(buf, Buffer::empty(AREA));
    }

    #[test]
    fn test_point_indicator_is_bottom_centered() {
        // 4 dots of radius 5 with 10 spacing: 70 x 10 units -> 14 x 1 cells
        let style = PointStyle::default()
            .with_radius(5.0)
            .with_spacing(10.0)
            .with_colors(pagedot_core::Rgba::GRAY, pagedot_core::Rgba::RED);
        let mut indicator = PointIndicator::new(style);
        indicator.init_indicator_count(4);

        let mut buf = Buffer::empty(AREA);
        let rect = IndicatorWidget::render_to_buffer(&mut buf, AREA, &mut indicator, 5.0).unwrap();
        assert_eq!(rect, Rect::new(13, 9, 14, 1));
        assert_eq!(buf[(13, 9)].symbol(), "▀");
    }

    #[test]
    fn test_line_indicator_paints_selection_over_track() {
        let style = LineStyle::default().with_width(20.0).with_height(10.0);
        let mut indicator = LineIndicator::new(style);
        indicator.init_indicator_count(2);

        let mut buf = Buffer::empty(AREA);
        let rect = IndicatorWidget::render_to_buffer(&mut buf, AREA, &mut indicator, 5.0).unwrap();
        assert_eq!(rect.width, 8);
        let first = &buf[(rect.x + 2, rect.y)];
        let second = &buf[(rect.x + 6, rect.y)];
        assert_eq!(first.fg, ratatui::style::Color::Rgb(0xff, 0, 0));
        assert_eq!(second.fg, ratatui::style::Color::Rgb(0x88, 0x88, 0x88));
    }
}
