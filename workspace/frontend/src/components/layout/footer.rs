use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="footer footer-center p-6 bg-base-300 text-base-content">
            <aside>
                <p>{"AgriPredict: crop price forecasts from weather and market conditions."}</p>
            </aside>
        </footer>
    }
}
