use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use shared::charts::{monthly_points, TrendPoint};
use shared::MonthlyTotals;
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

const WIDTH: u32 = 640;
const HEIGHT: u32 = 300;

#[derive(Properties, PartialEq)]
pub struct MonthlyTrendProps {
    pub monthly: MonthlyTotals,
    pub currency: AttrValue,
}

pub struct MonthlyTrend {
    canvas_ref: NodeRef,
}

impl Component for MonthlyTrend {
    type Message = ();
    type Properties = MonthlyTrendProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self { canvas_ref: NodeRef::default() }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        ctx.props() != old_props
    }

    fn rendered(&mut self, ctx: &Context<Self>, _first_render: bool) {
        self.draw(&monthly_points(&ctx.props().monthly), &ctx.props().currency);
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <section class="chart-section">
                <h2>{"Monthly Spending"}</h2>
                {if ctx.props().monthly.is_empty() {
                    html! { <p class="empty-state">{"No monthly data yet."}</p> }
                } else {
                    html! {
                        <div class="chart-content">
                            <canvas
                                ref={self.canvas_ref.clone()}
                                class="trend-chart-canvas"
                                width={WIDTH.to_string()}
                                height={HEIGHT.to_string()}
                            ></canvas>
                        </div>
                    }
                }}
            </section>
        }
    }
}

/// Upper bound of the y axis with 10% headroom, never below 1
pub fn y_ceiling(points: &[TrendPoint]) -> f64 {
    let max = points.iter().map(|point| point.value).fold(0.0, f64::max);
    (max * 1.1).max(1.0)
}

impl MonthlyTrend {
    fn draw(&self, points: &[TrendPoint], currency: &str) {
        if points.is_empty() {
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

        let last_index = (points.len() as i32 - 1).max(1);
        let mut chart = match ChartBuilder::on(&root)
            .margin(15)
            .x_label_area_size(40)
            .y_label_area_size(70)
            .build_cartesian_2d(0..last_index, 0.0..y_ceiling(points))
        {
            Ok(chart) => chart,
            Err(_) => return,
        };

        let line_color = RGBColor(0x88, 0x84, 0xd8);
        let month_label = |x: &i32| {
            usize::try_from(*x)
                .ok()
                .and_then(|index| points.get(index))
                .map(|point| point.label.clone())
                .unwrap_or_default()
        };
        let amount_label = |y: &f64| format!("{:.0} {}", y, currency);

        if chart
            .configure_mesh()
            .x_labels(points.len().min(12))
            .x_label_formatter(&month_label)
            .y_label_formatter(&amount_label)
            .label_style(("sans-serif", 12))
            .light_line_style(&RGBColor(245, 245, 245))
            .draw()
            .is_err()
        {
            return;
        }

        let series = points.iter().enumerate().map(|(index, point)| (index as i32, point.value));
        if chart.draw_series(LineSeries::new(series, line_color.stroke_width(3))).is_err() {
            return;
        }

        let dots = points
            .iter()
            .enumerate()
            .map(|(index, point)| Circle::new((index as i32, point.value), 4, line_color.filled()));
        if chart.draw_series(dots).is_err() {
            return;
        }

        let _ = root.present();
    }
}
