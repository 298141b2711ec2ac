use std::rc::Rc;

use common::overlay::MESSAGE_ROTATION_MS;
use common::{OverlayLease, OverlayState};
use gloo_timers::callback::Interval;
use yew::prelude::*;

use super::loading::Loading;

pub enum OverlayAction {
    Show(&'static [&'static str]),
    Advance,
    Hide,
}

#[derive(Clone, PartialEq, Default)]
pub struct Overlay(OverlayState);

impl Reducible for Overlay {
    type Action = OverlayAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut state = self.0.clone();
        match action {
            OverlayAction::Show(messages) => state.show(messages),
            OverlayAction::Advance => state.advance(),
            OverlayAction::Hide => state.hide(),
        }
        Rc::new(Overlay(state))
    }
}

/// Handle to the single loading overlay of the page.
#[derive(Clone, PartialEq)]
pub struct OverlayContext {
    state: UseReducerHandle<Overlay>,
}

impl OverlayContext {
    /// Shows the overlay until the returned lease is released or dropped.
    ///
    /// With more than one message the status line rotates every
    /// [`MESSAGE_ROTATION_MS`]; the timer lives inside the lease.
    pub fn show(&self, messages: &'static [&'static str]) -> OverlayLease {
        let dispatcher = self.state.dispatcher();
        dispatcher.dispatch(OverlayAction::Show(messages));

        let ticker = (messages.len() > 1).then(|| {
            let dispatcher = dispatcher.clone();
            Interval::new(MESSAGE_ROTATION_MS, move || dispatcher.dispatch(OverlayAction::Advance))
        });

        OverlayLease::new(move || {
            drop(ticker);
            dispatcher.dispatch(OverlayAction::Hide);
            log::trace!("Loading overlay released");
        })
    }
}

#[derive(Properties, PartialEq)]
pub struct OverlayProviderProps {
    pub children: Children,
}

#[function_component(OverlayProvider)]
pub fn overlay_provider(props: &OverlayProviderProps) -> Html {
    let state = use_reducer(Overlay::default);
    let context = OverlayContext { state: state.clone() };
    let overlay = &state.0;

    html! {
        <ContextProvider<OverlayContext> context={context}>
            {props.children.clone()}
            <div
                id="loadingOverlay"
                class={classes!(
                    "loading-overlay", "fixed", "inset-0", "z-50", "flex", "items-center",
                    "justify-center", "bg-base-300/80",
                    overlay.is_visible().then_some("active"),
                    (!overlay.is_visible()).then_some("hidden")
                )}
                aria-busy={overlay.is_visible().to_string()}
            >
                <Loading text={Some(overlay.text().to_string())} />
            </div>
        </ContextProvider<OverlayContext>>
    }
}

/// Overlay handle for components below [`OverlayProvider`].
#[hook]
pub fn use_overlay() -> Option<OverlayContext> {
    use_context::<OverlayContext>()
}
