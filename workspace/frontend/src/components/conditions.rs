use common::{ParameterId, PredictionForm};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::crop_select::{CropVarietySelect, RegionSelect};
use super::parameter_control::ParameterControl;

#[derive(Properties, PartialEq)]
pub struct ConditionsFieldsProps {
    pub form: PredictionForm,
    #[prop_or_default]
    pub id_prefix: AttrValue,
    #[prop_or_default]
    pub disabled: bool,
    pub on_change: Callback<PredictionForm>,
}

/// Region, crop, variety, weather sliders and arrival quantity.
///
/// Shared by the prediction and the actual-data forms; every edit emits the
/// whole updated form.
#[function_component(ConditionsFields)]
pub fn conditions_fields(props: &ConditionsFieldsProps) -> Html {
    let edit = |apply: fn(&mut PredictionForm, String)| {
        let form = props.form.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |value: String| {
            let mut form = form.clone();
            apply(&mut form, value);
            on_change.emit(form);
        })
    };

    let on_region = edit(|form: &mut PredictionForm, region: String| form.region = region);
    let on_crop = edit(|form: &mut PredictionForm, crop: String| form.select_crop(&crop));
    let on_variety = edit(|form: &mut PredictionForm, variety: String| {
        form.select_variety(&variety)
    });
    let on_arrival = edit(|form: &mut PredictionForm, arrival: String| form.arrival = arrival)
        .reform(|e: InputEvent| e.target_unchecked_into::<HtmlInputElement>().value());

    let parameter_controls = ParameterId::ALL.iter().map(|id| {
        let id = *id;
        let form = props.form.clone();
        let on_change = props.on_change.clone();
        let on_slider = {
            let form = form.clone();
            let on_change = on_change.clone();
            Callback::from(move |raw: String| {
                let mut form = form.clone();
                form.parameters.slider_input(id, &raw);
                on_change.emit(form);
            })
        };
        let on_text = Callback::from(move |raw: String| {
            let mut form = form.clone();
            form.parameters.text_input(id, &raw);
            on_change.emit(form);
        });

        html! {
            <ParameterControl
                key={id.key()}
                parameter={*props.form.parameters.get(id)}
                id_prefix={props.id_prefix.clone()}
                disabled={props.disabled}
                {on_slider}
                {on_text}
            />
        }
    });

    let arrival_id = format!("{}arrival", props.id_prefix);

    html! {
        <div class="space-y-4">
            <RegionSelect
                region={props.form.region.clone()}
                id_prefix={props.id_prefix.clone()}
                disabled={props.disabled}
                on_change={on_region}
            />
            <CropVarietySelect
                crop={props.form.crop.clone()}
                variety={props.form.variety.clone()}
                id_prefix={props.id_prefix.clone()}
                disabled={props.disabled}
                {on_crop}
                {on_variety}
            />
            { for parameter_controls }
            <div class="form-control">
                <label class="label" for={arrival_id.clone()}>
                    <span class="label-text">{"Arrival (Quintals)"}</span>
                </label>
                <input
                    type="number"
                    id={arrival_id}
                    name="arrival"
                    class="input input-bordered w-full"
                    min="0"
                    max="5000"
                    step="1"
                    required={true}
                    value={props.form.arrival.clone()}
                    oninput={on_arrival}
                    disabled={props.disabled}
                />
            </div>
        </div>
    }
}
