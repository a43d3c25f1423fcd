use super::*;
use crate::{
    config::LabelText,
    scene::params::RenderParameters,
    scene::plan::compile_poster,
};

#[derive(Default)]
struct MockBackend {
    calls: Vec<&'static str>,
    layers: Vec<u32>,
    labels: Vec<String>,
}

impl DrawBackend for MockBackend {
    fn begin_frame(&mut self, _plan: &PosterPlan) -> PosterResult<()> {
        self.calls.push("begin_frame");
        Ok(())
    }

    fn fill_blob(&mut self, layer: u32, _path: &BezPath, _color: ColorRgba) -> PosterResult<()> {
        self.calls.push("fill_blob");
        self.layers.push(layer);
        Ok(())
    }

    fn draw_label(
        &mut self,
        text: &str,
        _anchor: Point,
        _size_pt: f64,
        _bold: bool,
    ) -> PosterResult<()> {
        self.calls.push("draw_label");
        self.labels.push(text.to_owned());
        Ok(())
    }

    fn finish_frame(&mut self, plan: &PosterPlan) -> PosterResult<FrameRGBA> {
        self.calls.push("finish_frame");
        Ok(FrameRGBA {
            width: plan.canvas.width,
            height: plan.canvas.height,
            data: vec![0; (plan.canvas.width * plan.canvas.height * 4) as usize],
            premultiplied: true,
        })
    }
}

#[test]
fn eight_layers_issue_eight_fills_in_order() {
    let plan = compile_poster(&RenderParameters::default(), &LabelText::default(), 10).unwrap();
    let mut backend = MockBackend::default();
    let frame = execute_plan(&mut backend, &plan).unwrap();

    assert_eq!(frame.width, 70);
    assert_eq!(backend.calls.first(), Some(&"begin_frame"));
    assert_eq!(backend.calls.last(), Some(&"finish_frame"));
    assert_eq!(backend.calls.iter().filter(|c| **c == "fill_blob").count(), 8);
    assert_eq!(backend.layers, (0..8).collect::<Vec<_>>());
    assert_eq!(
        backend.labels,
        vec![
            "Generative Poster".to_owned(),
            "Week 2 \u{2022} Arts & Advanced Big Data".to_owned()
        ]
    );
}

#[test]
fn labels_follow_blobs_and_can_be_disabled() {
    let params = RenderParameters {
        n_layers: 3,
        label_on: false,
        ..RenderParameters::default()
    };
    let plan = compile_poster(&params, &LabelText::default(), 10).unwrap();
    let mut backend = MockBackend::default();
    execute_plan(&mut backend, &plan).unwrap();
    assert_eq!(
        backend.calls,
        vec!["begin_frame", "fill_blob", "fill_blob", "fill_blob", "finish_frame"]
    );
}
