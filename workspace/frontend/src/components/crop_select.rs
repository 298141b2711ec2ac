use common::{CropCatalog, REGIONS, VARIETY_PLACEHOLDER, VarietySelect};
use web_sys::HtmlSelectElement;
use yew::prelude::*;

fn select_value(e: Event) -> String {
    let select: HtmlSelectElement = e.target_unchecked_into();
    select.value()
}

#[derive(Properties, PartialEq)]
pub struct CropVarietySelectProps {
    pub crop: String,
    pub variety: VarietySelect,
    #[prop_or_default]
    pub id_prefix: AttrValue,
    #[prop_or_default]
    pub disabled: bool,
    pub on_crop: Callback<String>,
    pub on_variety: Callback<String>,
}

/// Crop choice and the variety choice that depends on it.
#[function_component(CropVarietySelect)]
pub fn crop_variety_select(props: &CropVarietySelectProps) -> Html {
    let crop_id = format!("{}crop", props.id_prefix);
    let variety_id = format!("{}variety", props.id_prefix);
    let on_crop = props.on_crop.reform(select_value);
    let on_variety = props.on_variety.reform(select_value);
    let variety = &props.variety;

    html! {
        <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
            <div class="form-control">
                <label class="label" for={crop_id.clone()}><span class="label-text">{"Crop"}</span></label>
                <select
                    id={crop_id}
                    name="crop"
                    class="select select-bordered w-full"
                    required={true}
                    disabled={props.disabled}
                    onchange={on_crop}
                >
                    <option value="" disabled={true} selected={props.crop.is_empty()}>{"Select Crop"}</option>
                    { for CropCatalog.crops().map(|crop| html! {
                        <option value={crop} selected={props.crop == crop}>{crop}</option>
                    }) }
                </select>
            </div>
            <div class="form-control">
                <label class="label" for={variety_id.clone()}><span class="label-text">{"Variety"}</span></label>
                <select
                    id={variety_id}
                    name="variety"
                    class="select select-bordered w-full"
                    required={true}
                    disabled={props.disabled || !variety.enabled}
                    onchange={on_variety}
                >
                    <option value="" disabled={true} selected={variety.selected.is_empty()}>{VARIETY_PLACEHOLDER}</option>
                    { for variety.options.iter().map(|option| html! {
                        <option value={option.clone()} selected={variety.selected == *option}>{option}</option>
                    }) }
                </select>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct RegionSelectProps {
    pub region: String,
    #[prop_or_default]
    pub id_prefix: AttrValue,
    #[prop_or_default]
    pub disabled: bool,
    pub on_change: Callback<String>,
}

#[function_component(RegionSelect)]
pub fn region_select(props: &RegionSelectProps) -> Html {
    let region_id = format!("{}region", props.id_prefix);

    html! {
        <div class="form-control">
            <label class="label" for={region_id.clone()}><span class="label-text">{"Region"}</span></label>
            <select
                id={region_id}
                name="region"
                class="select select-bordered w-full"
                required={true}
                disabled={props.disabled}
                onchange={props.on_change.reform(select_value)}
            >
                <option value="" disabled={true} selected={props.region.is_empty()}>{"Select Region"}</option>
                { for REGIONS.iter().map(|region| html! {
                    <option value={*region} selected={props.region == *region}>{*region}</option>
                }) }
            </select>
        </div>
    }
}
