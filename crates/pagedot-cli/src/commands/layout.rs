use anyhow::Result;
use serde::Serialize;

use pagedot_core::{
    AppConfig, DrawOp, Indicator, IndicatorKind, LineIndicator, MeasureSpec, PlacementParams,
    Point, PointIndicator, Recorder, Size, Visibility,
};

pub struct LayoutArgs {
    pub kind: IndicatorKind,
    pub pages: usize,
    pub width: Option<u32>,
    pub select: usize,
    pub offset: f32,
    pub draw: bool,
}

/// Layout snapshot printed by `pagedot layout`
#[derive(Debug, Serialize)]
struct LayoutReport {
    style: IndicatorKind,
    pages: usize,
    visible: bool,
    size: Size,
    centers: Vec<Point>,
    selection_x: f32,
    placement: PlacementParams,
    #[serde(skip_serializing_if = "Option::is_none")]
    ops: Option<Vec<DrawOp>>,
}

pub fn run(config: &AppConfig, args: LayoutArgs) -> Result<()> {
    let mut indicator: Box<dyn Indicator> = match args.kind {
        IndicatorKind::Line => Box::new(LineIndicator::new(config.line.clone())),
        IndicatorKind::Point => Box::new(PointIndicator::new(config.point.clone())),
    };

    let report = build_report(indicator.as_mut(), &args);
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn build_report(indicator: &mut dyn Indicator, args: &LayoutArgs) -> LayoutReport {
    indicator.init_indicator_count(args.pages);
    // Only one of the two moves the selection, depending on follow_scroll
    indicator.on_page_scrolled(args.select, args.offset.clamp(0.0, 1.0), 0);
    indicator.on_page_selected(args.select);

    let width = args
        .width
        .map(MeasureSpec::Exactly)
        .unwrap_or(MeasureSpec::Unspecified);
    let surface = indicator.surface();
    let size = surface.measure(width, MeasureSpec::Unspecified);
    let visible = surface.visibility() == Visibility::Visible;
    let ops = args.draw.then(|| {
        let mut recorder = Recorder::new();
        surface.draw(&mut recorder);
        recorder.into_ops()
    });

    LayoutReport {
        style: args.kind,
        pages: indicator.page_count(),
        visible,
        size,
        centers: indicator.shape_centers().to_vec(),
        selection_x: indicator.selection_x(),
        placement: indicator.placement(),
        ops,
    }
}
