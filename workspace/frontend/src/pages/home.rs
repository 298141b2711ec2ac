use common::PageId;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub on_navigate: Callback<PageId>,
}

fn feature(icon: &'static str, title: &'static str, text: &'static str) -> Html {
    html! {
        <div class="card bg-base-100 shadow-md">
            <div class="card-body items-center text-center">
                <i class={classes!("fas", icon, "text-4xl", "text-primary")}></i>
                <h3 class="card-title">{title}</h3>
                <p>{text}</p>
            </div>
        </div>
    }
}

#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    let go = |page: PageId| props.on_navigate.reform(move |_: MouseEvent| page);

    html! {
        <>
            <div class="hero min-h-[60vh] bg-base-200">
                <div class="hero-content text-center">
                    <div class="max-w-xl">
                        <h1 class="text-5xl font-bold">{"Smarter prices for every harvest"}</h1>
                        <p class="py-6">
                            {"AgriPredict forecasts the minimum, maximum and modal market price of your crop "}
                            {"from the region, variety, weather and expected arrivals."}
                        </p>
                        <div class="flex gap-4 justify-center">
                            <button class="btn btn-primary" onclick={go(PageId::Predict)}>{"Predict Price"}</button>
                            <button class="btn btn-outline" onclick={go(PageId::SubmitData)}>{"Submit Actual Data"}</button>
                        </div>
                    </div>
                </div>
            </div>
            <div class="container mx-auto px-4 py-12 grid grid-cols-1 md:grid-cols-3 gap-6">
                { feature("fa-cloud-sun-rain", "Weather aware", "Rainfall, temperature and humidity feed directly into every forecast.") }
                { feature("fa-chart-column", "Clear results", "Min, modal and max prices side by side, as numbers and as a chart.") }
                { feature("fa-database", "Gets better with data", "Reported market prices are sent back to improve future predictions.") }
            </div>
        </>
    }
}
