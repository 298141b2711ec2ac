use yew::prelude::*;

const GLOSSARY: [(&str, &str); 3] = [
    (
        "Modal price",
        "The most frequently observed or traded price for a commodity in a market session, as opposed to the minimum and maximum extremes.",
    ),
    ("Quintal (qtl)", "A unit of mass of 100 kg used for commodity pricing."),
    (
        "Arrival",
        "The quantity of a commodity, in quintals, brought to the market in a session.",
    ),
];

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <div class="container mx-auto px-4 py-8">
            <div class="card bg-base-100 shadow-xl">
                <div class="card-body">
                    <h2 class="card-title text-3xl mb-6">{"About AgriPredict"}</h2>

                    <div class="prose max-w-none">
                        <p class="text-lg mb-4">
                            {"AgriPredict helps farmers and traders anticipate mandi prices. Pick a region, crop and variety, "}
                            {"describe the expected weather and arrivals, and the prediction service estimates the price band "}
                            {"for the session in Rs/qtl."}
                        </p>

                        <h3 class="text-xl font-semibold mb-3">{"Supported crops"}</h3>
                        <div class="flex flex-wrap gap-2 mb-6">
                            { for common::CropCatalog.crops().map(|crop| html! {
                                <div class="badge badge-primary badge-lg">{crop}</div>
                            }) }
                        </div>

                        <h3 class="text-xl font-semibold mb-3">{"Glossary"}</h3>
                        <dl class="space-y-3">
                            { for GLOSSARY.iter().map(|(term, meaning)| html! {
                                <div>
                                    <dt class="font-semibold">{*term}</dt>
                                    <dd class="ml-4">{*meaning}</dd>
                                </div>
                            }) }
                        </dl>
                    </div>
                </div>
            </div>
        </div>
    }
}
