use common::overlay::SUBMIT_MESSAGES;
use common::{ActualDataForm, Operation, PredictionForm};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::api_client::actual_data::submit_actual_data;
use crate::common::notify::alert;
use crate::common::use_overlay;
use crate::components::ConditionsFields;

const ID_PREFIX: &str = "actual_";

fn price_input(
    label: &'static str,
    name: &'static str,
    value: &str,
    on_input: Callback<InputEvent>,
) -> Html {
    let id = format!("{ID_PREFIX}{name}");
    html! {
        <div class="form-control">
            <label class="label" for={id.clone()}>
                <span class="label-text">{label}</span>
            </label>
            <input
                type="number"
                {id}
                {name}
                class="input input-bordered w-full"
                min="0"
                step="0.01"
                required={true}
                value={value.to_string()}
                oninput={on_input}
            />
        </div>
    }
}

#[function_component(SubmitDataPage)]
pub fn submit_data_page() -> Html {
    let form = use_state(ActualDataForm::new);
    let overlay = use_overlay();

    let on_conditions = {
        let form = form.clone();
        Callback::from(move |conditions: PredictionForm| {
            form.set(ActualDataForm {
                conditions,
                ..(*form).clone()
            });
        })
    };

    let price = |apply: fn(&mut ActualDataForm, String)| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut updated = (*form).clone();
            apply(&mut updated, input.value());
            form.set(updated);
        })
    };
    let on_min = price(|form: &mut ActualDataForm, value: String| form.min_price = value);
    let on_max = price(|form: &mut ActualDataForm, value: String| form.max_price = value);
    let on_modal = price(|form: &mut ActualDataForm, value: String| form.modal_price = value);

    let on_submit = {
        let form = form.clone();
        let overlay = overlay.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let record = match form.to_record() {
                Ok(record) => record,
                Err(error) => {
                    log::warn!("Actual data form rejected: {}", error);
                    alert(&error.to_string());
                    return;
                }
            };

            let lease = overlay.as_ref().map(|overlay| overlay.show(&SUBMIT_MESSAGES));
            let form = form.clone();

            wasm_bindgen_futures::spawn_local(async move {
                let outcome = submit_actual_data(&record).await;
                drop(lease);
                match outcome {
                    Ok(ack) => {
                        log::info!("Actual data accepted: {}", ack.message);
                        alert(&ack.message);
                        let mut cleared = (*form).clone();
                        cleared.reset();
                        form.set(cleared);
                    }
                    Err(error) => {
                        log::error!("Actual data submission failed: {}", error);
                        alert(&Operation::SubmitActualData.failure_text(&error));
                    }
                }
            });
        })
    };

    let on_reset = {
        let form = form.clone();
        Callback::from(move |_: MouseEvent| {
            log::debug!("Resetting actual data form");
            let mut cleared = (*form).clone();
            cleared.reset();
            form.set(cleared);
        })
    };

    html! {
        <div class="container mx-auto px-4 py-8">
            <div class="card bg-base-100 shadow-xl">
                <div class="card-body">
                    <h2 class="card-title text-3xl mb-2">{"Submit Actual Market Data"}</h2>
                    <p class="mb-4 text-base-content/70">
                        {"Report the prices that were actually observed so future predictions improve."}
                    </p>
                    <form id="actualDataForm" onsubmit={on_submit} class="space-y-6">
                        <ConditionsFields
                            form={form.conditions.clone()}
                            id_prefix={ID_PREFIX}
                            on_change={on_conditions}
                        />
                        <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                            { price_input("Min Price (Rs/qtl)", "min_price", &form.min_price, on_min) }
                            { price_input("Max Price (Rs/qtl)", "max_price", &form.max_price, on_max) }
                            { price_input("Modal Price (Rs/qtl)", "modal_price", &form.modal_price, on_modal) }
                        </div>
                        <div class="card-actions justify-end gap-2">
                            <button type="button" class="btn btn-ghost" onclick={on_reset}>{"Reset"}</button>
                            <button type="submit" class="btn btn-primary">
                                <i class="fas fa-upload"></i>{" Submit Data"}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}
