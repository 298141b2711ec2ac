use common::BoundedParameter;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ParameterControlProps {
    pub parameter: BoundedParameter,
    /// Prepended to control ids, e.g. `actual_` on the submission page.
    #[prop_or_default]
    pub id_prefix: AttrValue,
    #[prop_or_default]
    pub disabled: bool,
    pub on_slider: Callback<String>,
    pub on_text: Callback<String>,
}

/// Slider, numeric field and value label for one bounded parameter.
#[function_component(ParameterControl)]
pub fn parameter_control(props: &ParameterControlProps) -> Html {
    let parameter = props.parameter;
    let spec = *parameter.spec();
    let key = spec.id.key();
    let slider_id = format!("{}{}", props.id_prefix, key);
    let text_id = format!("{}_text", slider_id);
    let display_id = format!("{}_value_display", slider_id);

    let on_slider = {
        let on_slider = props.on_slider.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_slider.emit(input.value());
        })
    };

    let on_text = {
        let on_text = props.on_text.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let raw = input.value();
            // the rendered value may not change (e.g. 250 clamped to an already
            // shown 200.00), so write the sanitized text back directly
            let mut edited = parameter;
            edited.on_text_input(&raw);
            input.set_value(&edited.text_value());
            on_text.emit(raw);
        })
    };

    html! {
        <div class="form-control w-full">
            <label class="label" for={slider_id.clone()}>
                <span class="label-text">{format!("{} ({})", spec.label, spec.unit)}</span>
                <span class="label-text-alt font-semibold" id={display_id}>{parameter.label()}</span>
            </label>
            <div class="flex items-center gap-4">
                <input
                    type="range"
                    id={slider_id}
                    name={key}
                    class="range range-primary range-sm flex-1"
                    min={spec.min.to_string()}
                    max={spec.max.to_string()}
                    step={spec.step.to_string()}
                    value={parameter.slider_value()}
                    oninput={on_slider}
                    disabled={props.disabled}
                />
                <input
                    type="number"
                    id={text_id}
                    class="input input-bordered input-sm w-28"
                    min={spec.min.to_string()}
                    max={spec.max.to_string()}
                    step={spec.step.to_string()}
                    value={parameter.text_value()}
                    onchange={on_text}
                    disabled={props.disabled}
                />
            </div>
        </div>
    }
}
