use plotters::element::Pie;
use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use shared::charts::{palette_hex, pie_slices, PieSlice};
use shared::CategoryTotals;
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

pub const EMPTY_PIE: &str = "No spending data to chart yet.";

const SIZE: u32 = 320;

#[derive(Properties, PartialEq)]
pub struct SpendingPieProps {
    pub totals: CategoryTotals,
}

/// Category share of spending, drawn with plotters onto a canvas
pub struct SpendingPie {
    canvas_ref: NodeRef,
}

impl Component for SpendingPie {
    type Message = ();
    type Properties = SpendingPieProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self { canvas_ref: NodeRef::default() }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        ctx.props().totals != old_props.totals
    }

    fn rendered(&mut self, ctx: &Context<Self>, _first_render: bool) {
        self.draw(&pie_slices(&ctx.props().totals));
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let slices = pie_slices(&ctx.props().totals);

        html! {
            <section class="chart-section">
                <h2>{"Spending by Category"}</h2>
                {if slices.is_empty() {
                    html! { <p class="empty-state">{EMPTY_PIE}</p> }
                } else {
                    html! {
                        <div class="chart-content">
                            <canvas
                                ref={self.canvas_ref.clone()}
                                class="pie-chart-canvas"
                                width={SIZE.to_string()}
                                height={SIZE.to_string()}
                            ></canvas>
                            <ul class="chart-legend">
                                {for slices.iter().enumerate().map(|(index, slice)| html! {
                                    <li key={slice.label.clone()}>
                                        <span class="legend-swatch" style={format!("background: {};", palette_hex(index))}></span>
                                        {format!("{} ({:.0}%)", slice.label, slice.share * 100.0)}
                                    </li>
                                })}
                            </ul>
                        </div>
                    }
                }}
            </section>
        }
    }
}

/// Nothing to draw when there are no slices or every slice is zero
pub fn has_visible_share(slices: &[PieSlice]) -> bool {
    slices.iter().any(|slice| slice.value > 0.0)
}

impl SpendingPie {
    fn draw(&self, slices: &[PieSlice]) {
        if !has_visible_share(slices) {
            return;
        }

        let canvas = match self.canvas_ref.cast::<HtmlCanvasElement>() {
            Some(canvas) => canvas,
            None => return,
        };
        let backend = match CanvasBackend::with_canvas_object(canvas) {
            Some(backend) => backend,
            None => return,
        };

        let root = backend.into_drawing_area();
        if root.fill(&WHITE).is_err() {
            return;
        }

        let center = ((SIZE / 2) as i32, (SIZE / 2) as i32);
        let radius = SIZE as f64 * 0.4;
        let sizes: Vec<f64> = slices.iter().map(|slice| slice.value).collect();
        let colors: Vec<RGBColor> = slices
            .iter()
            .map(|slice| RGBColor(slice.color.0, slice.color.1, slice.color.2))
            .collect();
        let labels: Vec<&str> = slices.iter().map(|slice| slice.label.as_str()).collect();

        let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
        pie.start_angle(-90.0);
        pie.label_style(("sans-serif", 12).into_font().color(&BLACK));

        if root.draw(&pie).is_err() {
            return;
        }
        let _ = root.present();
    }
}
