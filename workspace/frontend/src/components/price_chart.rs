use common::chart::{CHART_TITLE, SERIES_LABEL};
use common::{ChartHandle, ChartSlot, PredictionResult, price_bars};
use plotly::common::{Line, Marker, Title};
use plotly::layout::{Axis, RangeMode};
use plotly::{Bar, Layout};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use yew::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly, js_name = newPlot)]
    fn new_plot(div_id: &str, data: JsValue, layout: JsValue, config: JsValue);

    #[wasm_bindgen(js_namespace = Plotly)]
    fn purge(div_id: &str);
}

const CHART_DIV_ID: &str = "priceChart";

/// A Plotly chart drawn into a div.
pub struct PlotlyChart {
    div_id: String,
}

impl ChartHandle for PlotlyChart {
    fn destroy(self) {
        log::trace!("Purging chart in #{}", self.div_id);
        purge(&self.div_id);
    }
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, String> {
    let json = serde_json::to_string(value).map_err(|e| e.to_string())?;
    js_sys::JSON::parse(&json).map_err(|e| format!("{:?}", e))
}

fn draw(div_id: &str, result: &PredictionResult) -> PlotlyChart {
    let bars = price_bars(result);
    let labels: Vec<&'static str> = bars.iter().map(|bar| bar.kind.label()).collect();
    let values: Vec<f64> = bars.iter().map(|bar| bar.value).collect();
    let colors: Vec<&'static str> = bars.iter().map(|bar| bar.kind.fill_color()).collect();

    let trace = Bar::new(labels, values)
        .name(SERIES_LABEL)
        .marker(Marker::new().color_array(colors).line(Line::new().width(1.0)));

    let layout = Layout::new()
        .title(Title::with_text(CHART_TITLE))
        .show_legend(false)
        .height(360)
        .y_axis(Axis::new().range_mode(RangeMode::ToZero));

    let config = serde_json::json!({"responsive": true, "displayModeBar": false});

    match (to_js(&trace), to_js(&layout), to_js(&config)) {
        (Ok(trace), Ok(layout), Ok(config)) => {
            let data = js_sys::Array::new();
            data.push(&trace);
            new_plot(div_id, data.into(), layout, config);
            log::debug!("Price chart drawn: {:?}", values_of(result));
        }
        (trace, layout, config) => {
            log::error!(
                "Could not build chart: trace={:?} layout={:?} config={:?}",
                trace.err(),
                layout.err(),
                config.err()
            );
        }
    }

    PlotlyChart {
        div_id: div_id.to_string(),
    }
}

fn values_of(result: &PredictionResult) -> [f64; 3] {
    [result.min_price, result.modal_price, result.max_price]
}

#[derive(Properties, PartialEq)]
pub struct PriceChartProps {
    /// Sequence number of the prediction; a new number redraws the chart.
    pub seq: u32,
    pub result: Option<PredictionResult>,
}

/// Bar chart of min, modal and max price. `None` tears the chart down.
#[function_component(PriceChart)]
pub fn price_chart(props: &PriceChartProps) -> Html {
    let slot = use_mut_ref(ChartSlot::<PlotlyChart>::new);

    {
        let slot = slot.clone();
        use_effect_with((props.seq, props.result), move |(_, result)| {
            match result {
                Some(result) => slot.borrow_mut().replace(|| draw(CHART_DIV_ID, result)),
                None => slot.borrow_mut().clear(),
            }
            || ()
        });
    }

    {
        let slot = slot.clone();
        use_effect_with((), move |_| move || slot.borrow_mut().clear());
    }

    html! {
        <div class="chart-container w-full" style="height: 360px;">
            <div id={CHART_DIV_ID} style="width:100%; height:100%;"></div>
        </div>
    }
}
