use common::overlay::PREDICTION_MESSAGES;
use common::{Operation, PredictionForm};
use yew::prelude::*;

use crate::api_client::prediction::predict;
use crate::common::notify::alert;
use crate::common::use_overlay;
use crate::components::{ConditionsFields, Prediction, ResultsPanel};

#[function_component(PredictPage)]
pub fn predict_page() -> Html {
    let form = use_state(PredictionForm::new);
    let prediction = use_state(|| None::<Prediction>);
    let results_visible = use_state(|| false);
    let seq = use_mut_ref(|| 0u32);
    let overlay = use_overlay();

    let on_change = {
        let form = form.clone();
        Callback::from(move |updated: PredictionForm| form.set(updated))
    };

    let on_submit = {
        let form = form.clone();
        let prediction = prediction.clone();
        let results_visible = results_visible.clone();
        let seq = seq.clone();
        let overlay = overlay.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let request = match form.to_request() {
                Ok(request) => request,
                Err(error) => {
                    log::warn!("Prediction form rejected: {}", error);
                    alert(&error.to_string());
                    return;
                }
            };

            let lease = overlay.as_ref().map(|overlay| overlay.show(&PREDICTION_MESSAGES));
            let prediction = prediction.clone();
            let results_visible = results_visible.clone();
            let seq = seq.clone();

            wasm_bindgen_futures::spawn_local(async move {
                let outcome = predict(&request).await;
                drop(lease);
                match outcome {
                    Ok(result) => {
                        let next = {
                            let mut seq = seq.borrow_mut();
                            *seq = seq.wrapping_add(1);
                            *seq
                        };
                        log::info!("Prediction {} received: {:?}", next, result);
                        prediction.set(Some(Prediction { seq: next, result }));
                        results_visible.set(true);
                    }
                    Err(error) => {
                        log::error!("Prediction failed: {}", error);
                        results_visible.set(false);
                        alert(&Operation::Predict.failure_text(&error));
                    }
                }
            });
        })
    };

    let on_reset = {
        let form = form.clone();
        let prediction = prediction.clone();
        let results_visible = results_visible.clone();
        Callback::from(move |_: MouseEvent| {
            log::debug!("Prediction form reset");
            let mut cleared = (*form).clone();
            cleared.reset();
            form.set(cleared);
            prediction.set(None);
            results_visible.set(false);
        })
    };

    html! {
        <div class="container mx-auto px-4 py-8">
            <div class="card bg-base-100 shadow-xl">
                <div class="card-body">
                    <h2 class="card-title text-3xl mb-2">{"Predict Crop Price"}</h2>
                    <p class="mb-4 text-base-content/70">
                        {"Describe the market conditions and get the expected price band in Rs/qtl."}
                    </p>
                    <form id="predictionForm" onsubmit={on_submit} class="space-y-6">
                        <ConditionsFields form={(*form).clone()} {on_change} />
                        <div class="card-actions justify-end gap-2">
                            <button type="button" class="btn btn-ghost" onclick={on_reset}>{"Reset"}</button>
                            <button type="submit" class="btn btn-primary">
                                <i class="fas fa-magic"></i>{" Predict Price"}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
            <ResultsPanel prediction={*prediction} visible={*results_visible} />
        </div>
    }
}
