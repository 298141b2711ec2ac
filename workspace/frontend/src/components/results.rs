use std::cell::RefCell;
use std::rc::Rc;

use common::tween::PRICE_UNIT;
use common::{PredictionResult, PriceCounter, PriceKind};
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use yew::prelude::*;

use super::price_chart::PriceChart;

const FRAME_MS: u32 = 16;

/// A prediction as shown on screen; `seq` tells repeated identical answers apart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    pub seq: u32,
    pub result: PredictionResult,
}

type Counters = Rc<RefCell<[PriceCounter; 3]>>;

fn targets(result: &PredictionResult) -> [f64; 3] {
    [result.min_price, result.max_price, result.modal_price]
}

/// Drives the counters until they settle or a newer animation takes over.
fn animate(counters: Counters, generation: Rc<RefCell<u32>>, started: u32, redraw: UseForceUpdateHandle) {
    spawn_local(async move {
        loop {
            TimeoutFuture::new(FRAME_MS).await;
            if *generation.borrow() != started {
                log::trace!("Counter animation {} superseded", started);
                return;
            }
            let now = js_sys::Date::now();
            let mut running = false;
            for counter in counters.borrow_mut().iter_mut() {
                running |= counter.tick(now);
            }
            redraw.force_update();
            if !running {
                log::trace!("Counter animation {} finished", started);
                return;
            }
        }
    });
}

#[derive(Properties, PartialEq)]
pub struct ResultsPanelProps {
    pub prediction: Option<Prediction>,
    pub visible: bool,
}

/// Min/max/modal price cards with animated numbers and the price chart.
#[function_component(ResultsPanel)]
pub fn results_panel(props: &ResultsPanelProps) -> Html {
    let counters: Counters = use_mut_ref(<[PriceCounter; 3]>::default);
    let generation = use_mut_ref(|| 0u32);
    let redraw = use_force_update();
    let section = use_node_ref();

    {
        let counters = counters.clone();
        let generation = generation.clone();
        let redraw = redraw.clone();
        use_effect_with(props.prediction, move |prediction| {
            let started = {
                let mut generation = generation.borrow_mut();
                *generation = generation.wrapping_add(1);
                *generation
            };
            match prediction {
                Some(prediction) => {
                    for (counter, target) in counters
                        .borrow_mut()
                        .iter_mut()
                        .zip(targets(&prediction.result))
                    {
                        counter.retarget(target);
                    }
                    animate(counters.clone(), generation.clone(), started, redraw.clone());
                }
                None => {
                    for counter in counters.borrow_mut().iter_mut() {
                        counter.reset();
                    }
                    redraw.force_update();
                }
            }
            move || {
                let mut generation = generation.borrow_mut();
                *generation = generation.wrapping_add(1);
            }
        });
    }

    {
        let section = section.clone();
        let seq = props.prediction.map(|p| p.seq);
        use_effect_with((props.visible, seq), move |(visible, _)| {
            if *visible {
                if let Some(element) = section.cast::<web_sys::Element>() {
                    let options = ScrollIntoViewOptions::new();
                    options.set_behavior(ScrollBehavior::Smooth);
                    options.set_block(ScrollLogicalPosition::Start);
                    element.scroll_into_view_with_scroll_into_view_options(&options);
                }
            }
            || ()
        });
    }

    let cards = {
        let counters = counters.borrow();
        [
            (PriceKind::Min, "minPrice", counters[0].text(), "text-warning"),
            (PriceKind::Max, "maxPrice", counters[1].text(), "text-success"),
            (PriceKind::Modal, "modalPrice", counters[2].text(), "text-info"),
        ]
    };

    html! {
        <section
            ref={section}
            id="results"
            class={classes!("mt-8", "space-y-6", (!props.visible).then_some("hidden"))}
        >
            <div class="stats stats-vertical lg:stats-horizontal shadow w-full bg-base-100">
                { for cards.into_iter().map(|(kind, id, text, color)| html! {
                    <div class="stat" key={id}>
                        <div class="stat-title">{kind.label()}</div>
                        <div class={classes!("stat-value", color)}>
                            <span id={id}>{text}</span>
                            {" "}
                            <span class="text-sm font-normal">{PRICE_UNIT}</span>
                        </div>
                    </div>
                }) }
            </div>
            <div class="card bg-base-100 shadow-xl">
                <div class="card-body">
                    <PriceChart
                        seq={props.prediction.map(|p| p.seq).unwrap_or_default()}
                        result={props.prediction.map(|p| p.result)}
                    />
                </div>
            </div>
        </section>
    }
}
